//! How much payload fits into a carrier.
//!
//! Byte capacities include the 4 byte length header of a frame,
//! [`usable_payload_bytes`] is the number to show to users.

use log::debug;

use crate::concealer::{AtDepth, Concealer, PlaneSelection, WithinDepth};
use crate::error::SteganoError;
use crate::frame::LENGTH_PREFIX_LEN;
use crate::result::Result;

/// bytes a carrier can take with multi bit packing, division happens last
pub fn max_payload_bytes(carrier_len: usize, channels_per_unit: usize, depth: u8) -> Result<usize> {
    let concealer: Concealer = WithinDepth::new(depth)?.into();

    Ok(concealer.capacity_bits(carrier_len, channels_per_unit) / 8)
}

/// bytes a carrier can take with a single bit plane, independent of `depth`
pub fn max_payload_bytes_at_depth(
    carrier_len: usize,
    channels_per_unit: usize,
    depth: u8,
) -> Result<usize> {
    let concealer: Concealer = AtDepth::new(depth)?.into();

    Ok(concealer.capacity_bits(carrier_len, channels_per_unit) / 8)
}

/// checks `payload_len * 8 + 32 <= carrier_len * channels_per_unit * (depth + 1)`
pub fn validate_fits(
    payload_len: usize,
    carrier_len: usize,
    channels_per_unit: usize,
    depth: u8,
) -> Result<()> {
    validate_fits_with(
        &WithinDepth::new(depth)?.into(),
        payload_len,
        carrier_len,
        channels_per_unit,
    )
}

/// checks `payload_len * 8 + 32 <= carrier_len * channels_per_unit`
pub fn validate_fits_at_depth(
    payload_len: usize,
    carrier_len: usize,
    channels_per_unit: usize,
    depth: u8,
) -> Result<()> {
    validate_fits_with(
        &AtDepth::new(depth)?.into(),
        payload_len,
        carrier_len,
        channels_per_unit,
    )
}

/// capacity check for any concealer, reported in bits
pub fn validate_fits_with(
    concealer: &Concealer,
    payload_len: usize,
    carrier_len: usize,
    channels_per_unit: usize,
) -> Result<()> {
    let needed = payload_len
        .saturating_mul(8)
        .saturating_add(LENGTH_PREFIX_LEN * 8);
    let available = concealer.capacity_bits(carrier_len, channels_per_unit);
    debug!("capacity check: {needed} bits needed, {available} bits available ({concealer:?})");

    if needed > available {
        return Err(SteganoError::CapacityExceeded { needed, available });
    }

    Ok(())
}

/// payload bytes that fit next to the length header
pub fn usable_payload_bytes(
    concealer: &Concealer,
    carrier_len: usize,
    channels_per_unit: usize,
) -> usize {
    (concealer.capacity_bits(carrier_len, channels_per_unit) / 8).saturating_sub(LENGTH_PREFIX_LEN)
}
