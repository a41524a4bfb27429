use std::thread::available_parallelism;

use crate::concealer::{Concealer, PlaneSelection};
use crate::result::Result;

/// Codec configuration for hiding and unveiling.
///
/// Images are always written as PNG, audio as WAV with the `WavSpec` of the carrier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecOptions {
    /// The concealer strategy, decides which bit planes of a carrier value take payload bits.
    /// It carries the bit depth.
    pub concealer: Concealer,

    /// Number of threads that extract the carrier from an image.
    /// `0` is treated as 1, more than the available parallelism is capped to it.
    pub workers: usize,
}

impl Default for CodecOptions {
    /// classic one bit LSB, one worker per available core
    fn default() -> Self {
        Self {
            concealer: Concealer::default(),
            workers: available_parallelism().map(|n| n.get()).unwrap_or(1),
        }
    }
}

impl CodecOptions {
    pub fn within_depth(depth: u8) -> Result<Self> {
        Ok(Self::default().with_concealer(Concealer::within_depth(depth)?))
    }

    pub fn at_depth(depth: u8) -> Result<Self> {
        Ok(Self::default().with_concealer(Concealer::at_depth(depth)?))
    }

    pub fn with_concealer(mut self, concealer: Concealer) -> Self {
        self.concealer = concealer;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn depth(&self) -> u8 {
        self.concealer.depth()
    }
}
