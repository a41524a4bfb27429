//! Concealer strategies, they decide which bit planes of a carrier value take payload bits.
//!
//! - [`WithinDepth`] packs bits into all planes `depth, depth-1, …, 0` of a value before moving on
//! - [`AtDepth`] uses exactly the one plane `depth` of every value
//!
//! Both walk the carrier unit by unit, and per plane through every channel of a unit.

use std::iter::Rev;
use std::ops::RangeInclusive;

use enum_dispatch::enum_dispatch;

use crate::error::SteganoError;
use crate::result::Result;

/// the deepest bit plane that can be addressed
pub const MAX_DEPTH: u8 = 7;

fn checked_depth(depth: u8) -> Result<u8> {
    if depth > MAX_DEPTH {
        return Err(SteganoError::InvalidDepth(depth));
    }
    Ok(depth)
}

#[enum_dispatch]
pub trait PlaneSelection {
    /// the configured bit depth
    fn depth(&self) -> u8;

    /// bit planes visited per carrier value, in visiting order
    fn planes(&self) -> Rev<RangeInclusive<u8>>;

    /// number of bits a carrier of `carrier_len` units with `channels` channels each can take,
    /// the 32 bit length header included
    fn capacity_bits(&self, carrier_len: usize, channels: usize) -> usize {
        let planes = self.planes().count();
        carrier_len.saturating_mul(channels).saturating_mul(planes)
    }
}

/// multi bit packing into the planes `depth..=0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WithinDepth(u8);

impl WithinDepth {
    pub fn new(depth: u8) -> Result<Self> {
        Ok(Self(checked_depth(depth)?))
    }
}

impl PlaneSelection for WithinDepth {
    fn depth(&self) -> u8 {
        self.0
    }

    fn planes(&self) -> Rev<RangeInclusive<u8>> {
        (0..=self.0).rev()
    }
}

/// single bit per value, always at plane `depth`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtDepth(u8);

impl AtDepth {
    pub fn new(depth: u8) -> Result<Self> {
        Ok(Self(checked_depth(depth)?))
    }
}

impl PlaneSelection for AtDepth {
    fn depth(&self) -> u8 {
        self.0
    }

    fn planes(&self) -> Rev<RangeInclusive<u8>> {
        (self.0..=self.0).rev()
    }
}

#[enum_dispatch(PlaneSelection)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Concealer {
    WithinDepth,
    AtDepth,
}

impl Default for Concealer {
    /// classic one bit LSB
    fn default() -> Self {
        Self::WithinDepth(WithinDepth(0))
    }
}

/// the address of one payload bit inside a carrier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSlot {
    pub unit: usize,
    pub plane: u8,
    pub channel: usize,
}

impl Concealer {
    pub fn within_depth(depth: u8) -> Result<Self> {
        Ok(WithinDepth::new(depth)?.into())
    }

    pub fn at_depth(depth: u8) -> Result<Self> {
        Ok(AtDepth::new(depth)?.into())
    }

    /// Every bit slot of a carrier with `carrier_len` units, in embedding order.
    ///
    /// Units advance only after all planes of the current unit are used,
    /// within one plane the channels are visited in order.
    pub fn slots(&self, carrier_len: usize, channels: usize) -> impl Iterator<Item = BitSlot> {
        let planes = self.planes();
        (0..carrier_len).flat_map(move |unit| {
            planes.clone().flat_map(move |plane| {
                (0..channels).map(move |channel| BitSlot {
                    unit,
                    plane,
                    channel,
                })
            })
        })
    }
}
