//! Length prefixed framing.
//!
//! A frame is the payload length as big endian `u32` followed by the payload itself.
//! The codec never embeds a payload without its frame.

use std::io::Read;

use byteorder::{BigEndian, WriteBytesExt};

use crate::bit_iterator::BitIterator;
use crate::bits::read_length_prefix;
use crate::error::SteganoError;
use crate::result::Result;

/// bytes taken by the length field in front of every payload
pub const LENGTH_PREFIX_LEN: usize = 4;

pub struct Frame<'p> {
    prefix: [u8; LENGTH_PREFIX_LEN],
    payload: &'p [u8],
}

impl<'p> Frame<'p> {
    pub fn new(payload: &'p [u8]) -> Result<Self> {
        let length = u32::try_from(payload.len()).map_err(|_| SteganoError::CapacityExceeded {
            needed: payload.len().saturating_mul(8),
            available: u32::MAX as usize * 8,
        })?;
        let mut prefix = [0; LENGTH_PREFIX_LEN];
        (&mut prefix[..]).write_u32::<BigEndian>(length)?;

        Ok(Self { prefix, payload })
    }

    /// number of bits of the whole frame
    pub fn bit_len(&self) -> usize {
        (LENGTH_PREFIX_LEN + self.payload.len()) * 8
    }

    /// all frame bits, most significant bit first
    pub fn bits(&self) -> BitIterator<impl Read + '_> {
        BitIterator::new((&self.prefix[..]).chain(self.payload))
    }
}

/// Cuts the payload out of unveiled raw data.
///
/// The declared length is checked against the data before slicing,
/// bytes behind the payload are padding and get dropped.
pub fn read_frame(data: &[u8]) -> Result<&[u8]> {
    let declared = read_length_prefix(data)? as usize;
    if declared == 0 {
        return Err(SteganoError::NoSecretData);
    }
    let available = data.len() - LENGTH_PREFIX_LEN;
    if declared > available {
        return Err(SteganoError::Truncated {
            declared,
            available,
        });
    }

    Ok(&data[LENGTH_PREFIX_LEN..LENGTH_PREFIX_LEN + declared])
}
