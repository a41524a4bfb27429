use crate::capacity::usable_payload_bytes;
use crate::carrier::CarrierUnit;
use crate::media::CodecOptions;
use crate::result::Result;
use crate::universal_decoder::unveil;
use crate::universal_encoder::embed;

/// LSB codec for PCM audio, every sample is a carrier value
pub struct LsbCodec;

impl LsbCodec {
    pub fn hide(samples: &mut [u32], payload: &[u8], opts: &CodecOptions) -> Result<()> {
        embed(samples, payload, &opts.concealer)
    }

    pub fn unveil(samples: &[u32], opts: &CodecOptions) -> Result<Vec<u8>> {
        unveil(samples, &opts.concealer)
    }

    /// usable payload bytes
    pub fn capacity(samples: &[u32], opts: &CodecOptions) -> usize {
        usable_payload_bytes(&opts.concealer, samples.len(), u32::CHANNELS)
    }
}

/// the two's complement bit pattern of a sample
#[inline]
pub fn widen(sample: i32) -> u32 {
    sample as u32
}

/// Back to a signed sample of `bits_per_sample` bits, the sign bit of that width is extended.
#[inline]
pub fn narrow(sample: u32, bits_per_sample: u16) -> i32 {
    let shift = 32 - u32::from(bits_per_sample.clamp(1, 32));
    ((sample << shift) as i32) >> shift
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concealer::Concealer;

    fn sine(len: usize) -> Vec<i32> {
        (0..len)
            .map(|i| ((i as f32 / 7.0).sin() * 20_000.0) as i32)
            .collect()
    }

    #[test]
    fn should_hide_and_unveil_in_16_bit_samples() {
        let opts = CodecOptions::default().with_concealer(Concealer::within_depth(2).unwrap());
        let mut samples: Vec<u32> = sine(1000).into_iter().map(widen).collect();

        LsbCodec::hide(&mut samples, b"Hello World!", &opts).unwrap();
        let narrowed: Vec<i32> = samples.iter().map(|s| narrow(*s, 16)).collect();
        assert!(narrowed
            .iter()
            .all(|s| (i16::MIN as i32..=i16::MAX as i32).contains(s)));

        let samples: Vec<u32> = narrowed.into_iter().map(widen).collect();
        assert_eq!(LsbCodec::unveil(&samples, &opts).unwrap(), b"Hello World!");
    }

    #[test]
    fn should_keep_negative_samples_negative() {
        assert_eq!(narrow(widen(-1), 16), -1);
        assert_eq!(narrow(widen(-32768), 16), -32768);
        assert_eq!(narrow(widen(-128), 8), -128);
        assert_eq!(narrow(widen(127), 8), 127);
        assert_eq!(narrow(widen(i32::MIN), 32), i32::MIN);
        // depth 7 on an 8 bit sample flips its sign bit
        assert_eq!(narrow(widen(-5) ^ 0x80, 8), 123);
    }

    #[test]
    fn should_report_capacity_per_sample() {
        let samples = vec![0u32; 100];
        let opts = CodecOptions::default().with_concealer(Concealer::within_depth(7).unwrap());
        assert_eq!(LsbCodec::capacity(&samples, &opts), 96);

        let opts = CodecOptions::default().with_concealer(Concealer::at_depth(7).unwrap());
        assert_eq!(LsbCodec::capacity(&samples, &opts), 8);
    }
}
