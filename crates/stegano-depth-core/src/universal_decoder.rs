use bitstream_io::{BigEndian, BitWrite, BitWriter};
use log::debug;

use crate::bits::get_bit;
use crate::carrier::CarrierUnit;
use crate::concealer::{AtDepth, Concealer, WithinDepth};
use crate::error::SteganoError;
use crate::frame::read_frame;
use crate::result::Result;

/// Reads all bits the concealer addresses, in embedding order, packed into bytes.
///
/// The result is not aware of any frame, a last incomplete byte is filled up with zero bits
/// in its low positions.
pub fn extract<C: CarrierUnit>(carrier: &[C], concealer: &Concealer) -> Result<Vec<u8>> {
    if carrier.is_empty() {
        return Err(SteganoError::InvalidCarrier);
    }
    let mut bit_buffer = BitWriter::endian(Vec::new(), BigEndian);
    for slot in concealer.slots(carrier.len(), C::CHANNELS) {
        let bit = get_bit(carrier[slot.unit].value(slot.channel), slot.plane);
        bit_buffer.write_bit(bit == 1)?;
    }
    if !bit_buffer.byte_aligned() {
        bit_buffer.byte_align()?;
    }

    Ok(bit_buffer.into_writer())
}

/// Reads the frame and returns exactly the payload it declares.
pub fn unveil<C: CarrierUnit>(carrier: &[C], concealer: &Concealer) -> Result<Vec<u8>> {
    let data = extract(carrier, concealer)?;
    let payload = read_frame(&data)?;
    debug!(
        "unveiled {} payload bytes out of {} raw bytes ({concealer:?})",
        payload.len(),
        data.len()
    );

    Ok(payload.to_vec())
}

pub fn extract_within_depth<C: CarrierUnit>(carrier: &[C], depth: u8) -> Result<Vec<u8>> {
    let concealer: Concealer = WithinDepth::new(depth)?.into();
    extract(carrier, &concealer)
}

pub fn extract_at_depth<C: CarrierUnit>(carrier: &[C], depth: u8) -> Result<Vec<u8>> {
    let concealer: Concealer = AtDepth::new(depth)?.into();
    extract(carrier, &concealer)
}

pub fn unveil_within_depth<C: CarrierUnit>(carrier: &[C], depth: u8) -> Result<Vec<u8>> {
    let concealer: Concealer = WithinDepth::new(depth)?.into();
    unveil(carrier, &concealer)
}

pub fn unveil_at_depth<C: CarrierUnit>(carrier: &[C], depth: u8) -> Result<Vec<u8>> {
    let concealer: Concealer = AtDepth::new(depth)?.into();
    unveil(carrier, &concealer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carrier::RgbChannel;
    use crate::universal_encoder::{embed_at_depth, embed_within_depth};

    fn noise(len: usize) -> Vec<u32> {
        (0..len as u32).map(|i| i.wrapping_mul(2_654_435_761) >> 24).collect()
    }

    fn noisy_pixels(len: usize) -> Vec<RgbChannel> {
        noise(len * 3)
            .chunks(3)
            .map(|c| RgbChannel::new(c[0], c[1], c[2]))
            .collect()
    }

    #[test]
    fn should_unveil_hi_from_a_monochrome_carrier() {
        let mut carrier = vec![0u32; 64];
        embed_within_depth(&mut carrier, b"hi", 0).unwrap();

        let raw = extract_within_depth(&carrier, 0).unwrap();
        assert_eq!(raw.len(), 8);
        assert_eq!(crate::bits::read_length_prefix(&raw).unwrap(), 2);
        assert_eq!(unveil_within_depth(&carrier, 0).unwrap(), b"hi");
    }

    #[test]
    fn should_roundtrip_on_images_at_every_depth() {
        let payload = b"a secret message that spans a few pixels";
        for depth in 0..=7 {
            let mut carrier = noisy_pixels(600);
            embed_within_depth(&mut carrier, payload, depth).unwrap();
            assert_eq!(
                unveil_within_depth(&carrier, depth).unwrap(),
                payload,
                "within depth {depth}"
            );

            let mut carrier = noisy_pixels(600);
            embed_at_depth(&mut carrier, payload, depth).unwrap();
            assert_eq!(
                unveil_at_depth(&carrier, depth).unwrap(),
                payload,
                "at depth {depth}"
            );
        }
    }

    #[test]
    fn should_roundtrip_on_audio_at_every_depth() {
        let payload = [0u8, 1, 2, 0x7f, 0x80, 0xfe, 0xff];
        for depth in 0..=7 {
            let mut carrier: Vec<u32> = noise(200).iter().map(|v| v | 0xffff_0000).collect();
            embed_within_depth(&mut carrier, &payload, depth).unwrap();
            assert_eq!(unveil_within_depth(&carrier, depth).unwrap(), payload);

            let mut carrier = noise(200);
            embed_at_depth(&mut carrier, &payload, depth).unwrap();
            assert_eq!(unveil_at_depth(&carrier, depth).unwrap(), payload);
        }
    }

    #[test]
    fn should_pad_a_trailing_partial_byte_with_low_zeros() {
        // 3 pixels at depth 0 give 9 bits
        let carrier = vec![RgbChannel::new(1, 1, 1); 3];
        assert_eq!(extract_within_depth(&carrier, 0).unwrap(), vec![0xff, 0x80]);
    }

    #[test]
    fn should_not_mutate_the_carrier() {
        let carrier = noise(100);
        let snapshot = carrier.clone();
        let _ = extract_within_depth(&carrier, 3).unwrap();
        assert_eq!(carrier, snapshot);
    }

    #[test]
    fn should_report_truncation_when_the_depth_is_wrong() {
        let mut carrier = vec![0u32; 64];
        embed_within_depth(&mut carrier, b"hi", 3).unwrap();

        // read with the wrong depth the first value turns into the high byte of the length
        carrier[0] = 0xff;
        assert!(matches!(
            unveil_within_depth(&carrier, 7),
            Err(SteganoError::Truncated { .. })
        ));
    }

    #[test]
    fn should_report_no_secret_data_on_a_blank_carrier() {
        let carrier = vec![0u32; 64];
        assert!(matches!(
            unveil_within_depth(&carrier, 0),
            Err(SteganoError::NoSecretData)
        ));
    }

    #[test]
    fn should_need_4_bytes_for_the_prefix() {
        let carrier = vec![0u32; 24];
        assert!(matches!(
            unveil_within_depth(&carrier, 0),
            Err(SteganoError::InsufficientData(3))
        ));
    }

    #[test]
    fn should_reject_invalid_depth_and_empty_carriers() {
        let carrier = vec![0u32; 64];
        assert!(matches!(
            extract_at_depth(&carrier, 8),
            Err(SteganoError::InvalidDepth(8))
        ));
        let carrier: Vec<u32> = vec![];
        assert!(matches!(
            extract_within_depth(&carrier, 0),
            Err(SteganoError::InvalidCarrier)
        ));
    }
}
