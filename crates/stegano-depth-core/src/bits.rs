//! Bit-plane utilities shared by the depth engines.
//!
//! Bit sequences are plain `Vec<u8>` holding `0` or `1`, ordered most significant bit first.

use byteorder::{BigEndian, ReadBytesExt};

use crate::bit_iterator::BitIterator;
use crate::error::SteganoError;
use crate::result::Result;

/// expands every byte into 8 bits, most significant bit first
pub fn bytes_to_bits(data: &[u8]) -> Vec<u8> {
    BitIterator::new(data).collect()
}

/// the 32 bits of `n`, most significant bit first.
///
/// A negative `i32` passed as `n as u32` keeps its two's complement pattern.
pub fn u32_to_bits(n: u32) -> Vec<u8> {
    bytes_to_bits(&n.to_be_bytes())
}

/// returns bit `position` of `value`, 0 addresses the least significant bit
#[inline(always)]
pub fn get_bit(value: u32, position: u8) -> u8 {
    ((value >> position) & 1) as u8
}

/// toggles bit `position` of `value`
#[inline(always)]
pub fn flip_bit(value: u32, position: u8) -> u32 {
    value ^ (1 << position)
}

/// reads the first 4 bytes as big endian `u32`
pub fn read_length_prefix(bytes: &[u8]) -> Result<u32> {
    if bytes.len() < 4 {
        return Err(SteganoError::InsufficientData(bytes.len()));
    }
    let mut prefix = &bytes[..4];

    Ok(prefix.read_u32::<BigEndian>()?)
}
