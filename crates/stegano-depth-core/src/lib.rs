//! # Stegano Depth Core API
//!
//! Hides a payload in the low bit planes of images and audio and unveils it again.
//! Every payload travels in a frame, a big endian `u32` length followed by the payload bytes.
//!
//! How the bits are spread is decided by a [`Concealer`]:
//! - [`WithinDepth`] packs bits into all planes `depth..=0` of a carrier value before moving on,
//!   so a higher depth means more capacity but also more noise
//! - [`AtDepth`] uses only plane `depth` of every carrier value, at most one bit per value changes
//!
//! The depth is always within `0..=7`, depth 0 is classic one bit LSB.
//!
//! # Usage Examples
//!
//! ## Hide and unveil on a carrier in memory
//!
//! ```rust
//! use stegano_depth_core::{embed_within_depth, max_payload_bytes, unveil_within_depth};
//!
//! // 64 audio samples with 2 bit planes each
//! let mut samples = vec![0u32; 64];
//! assert_eq!(max_payload_bytes(samples.len(), 1, 1).unwrap(), 16);
//!
//! embed_within_depth(&mut samples, b"hi", 1).unwrap();
//! assert_eq!(unveil_within_depth(&samples, 1).unwrap(), b"hi");
//! ```
//!
//! ## Hide data inside an image
//!
//! ```rust,no_run
//! use stegano_depth_core::CodecOptions;
//!
//! stegano_depth_core::api::hide::prepare()
//!     .with_file("Cargo.toml")            // will hide the content of this file
//!     .with_password("SuperSecret42")     // will encrypt the data with this password
//!     .with_compression(true)             // will compress the data before encryption
//!     .with_options(CodecOptions::within_depth(2).unwrap())
//!     .with_media("carrier-image.png")
//!     .with_output("image-with-a-file-inside.png")
//!     .execute()
//!     .expect("Failed to hide file in image");
//! ```
//!
//! ## Unveil data from an image
//!
//! ```rust,no_run
//! use stegano_depth_core::CodecOptions;
//!
//! let message = stegano_depth_core::api::unveil::prepare()
//!     .with_secret_media("image-with-a-file-inside.png")
//!     .with_password("SuperSecret42")
//!     .with_compression(true)
//!     .with_options(CodecOptions::within_depth(2).unwrap())
//!     .into_dir("unveiled")              // the hidden file is restored under its own name
//!     .execute()
//!     .expect("Failed to unveil data from image");
//!
//! assert_eq!(message.file_name.as_deref(), Some("Cargo.toml"));
//! ```

#![warn(
    // clippy::unwrap_used,
    // clippy::expect_used,
    clippy::redundant_else,
)]

pub mod bit_iterator;
pub use bit_iterator::BitIterator;

pub mod api;
pub mod bits;
pub mod capacity;
pub mod carrier;
pub mod commands;
pub mod concealer;
pub mod error;
pub mod frame;
pub mod media;
pub mod message;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

pub use crate::capacity::{
    max_payload_bytes, max_payload_bytes_at_depth, usable_payload_bytes, validate_fits,
    validate_fits_at_depth,
};
pub use crate::carrier::{CarrierUnit, RgbChannel};
pub use crate::concealer::{AtDepth, Concealer, PlaneSelection, WithinDepth, MAX_DEPTH};
pub use crate::error::SteganoError;
pub use crate::media::payload::PayloadPipeline;
pub use crate::media::{CodecOptions, Media, Persist};
pub use crate::message::Message;
pub use crate::result::Result;
pub use crate::universal_decoder::{
    extract, extract_at_depth, extract_within_depth, unveil, unveil_at_depth, unveil_within_depth,
};
pub use crate::universal_encoder::{embed, embed_at_depth, embed_within_depth};
