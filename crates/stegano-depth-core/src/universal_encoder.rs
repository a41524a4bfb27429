use log::debug;

use crate::bits::{flip_bit, get_bit};
use crate::capacity::validate_fits_with;
use crate::carrier::CarrierUnit;
use crate::concealer::{AtDepth, Concealer, WithinDepth};
use crate::error::SteganoError;
use crate::frame::Frame;
use crate::result::Result;

/// Hides `payload`, framed by its length, in the carrier.
///
/// Nothing is mutated unless the whole frame fits. A value is only touched when its target bit
/// differs from the frame bit, and only real frame bits are written, the rest of the carrier
/// stays as it is.
pub fn embed<C: CarrierUnit>(
    carrier: &mut [C],
    payload: &[u8],
    concealer: &Concealer,
) -> Result<()> {
    if payload.is_empty() {
        return Err(SteganoError::EmptyPayload);
    }
    if carrier.is_empty() {
        return Err(SteganoError::InvalidCarrier);
    }
    validate_fits_with(concealer, payload.len(), carrier.len(), C::CHANNELS)?;

    let frame = Frame::new(payload)?;
    let mut flipped = 0;
    for (slot, bit) in concealer
        .slots(carrier.len(), C::CHANNELS)
        .zip(frame.bits())
    {
        let unit = &mut carrier[slot.unit];
        let value = unit.value(slot.channel);
        if get_bit(value, slot.plane) != bit {
            unit.set_value(slot.channel, flip_bit(value, slot.plane));
            flipped += 1;
        }
    }
    debug!(
        "embedded {} frame bits, {flipped} carrier bits flipped ({concealer:?})",
        frame.bit_len()
    );

    Ok(())
}

/// multi bit packing, `depth` is checked before anything else
pub fn embed_within_depth<C: CarrierUnit>(
    carrier: &mut [C],
    payload: &[u8],
    depth: u8,
) -> Result<()> {
    let concealer: Concealer = WithinDepth::new(depth)?.into();
    embed(carrier, payload, &concealer)
}

/// one bit per value at plane `depth`, which is checked before anything else
pub fn embed_at_depth<C: CarrierUnit>(carrier: &mut [C], payload: &[u8], depth: u8) -> Result<()> {
    let concealer: Concealer = AtDepth::new(depth)?.into();
    embed(carrier, payload, &concealer)
}
