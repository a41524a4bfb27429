//! Carrier units, the smallest piece of media that takes bits.
//!
//! An image carrier is a flat, row major sequence of [`RgbChannel`] with 3 channels per unit,
//! an audio carrier is a sequence of `u32` samples with exactly 1 channel per unit.

/// abstracts over a unit of media that offers a fixed number of channels to hide bits in
pub trait CarrierUnit {
    /// number of channels per unit, 3 for RGB pixels, 1 for audio samples
    const CHANNELS: usize;

    /// value of the channel at index `channel`
    fn value(&self, channel: usize) -> u32;

    /// overwrites the value of the channel at index `channel`
    fn set_value(&mut self, channel: usize, value: u32);
}

/// one pixel of an image carrier, values are 8 bit or 16 bit wide
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbChannel {
    pub r: u32,
    pub g: u32,
    pub b: u32,
}

impl RgbChannel {
    pub fn new(r: u32, g: u32, b: u32) -> Self {
        Self { r, g, b }
    }

    /// Builds a pixel from raw color values.
    ///
    /// When any of the channels exceeds 255 the source was 16 bit wide,
    /// then all channels are shifted down to their upper 8 bit.
    pub fn normalized([r, g, b]: [u32; 3]) -> Self {
        if r > 255 || g > 255 || b > 255 {
            Self::new(r >> 8, g >> 8, b >> 8)
        } else {
            Self::new(r, g, b)
        }
    }
}

impl From<[u8; 3]> for RgbChannel {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as u32, g as u32, b as u32)
    }
}

impl CarrierUnit for RgbChannel {
    const CHANNELS: usize = 3;

    #[inline]
    fn value(&self, channel: usize) -> u32 {
        match channel {
            0 => self.r,
            1 => self.g,
            _ => self.b,
        }
    }

    #[inline]
    fn set_value(&mut self, channel: usize, value: u32) {
        match channel {
            0 => self.r = value,
            1 => self.g = value,
            _ => self.b = value,
        }
    }
}

/// an audio sample
impl CarrierUnit for u32 {
    const CHANNELS: usize = 1;

    #[inline]
    fn value(&self, _channel: usize) -> u32 {
        *self
    }

    #[inline]
    fn set_value(&mut self, _channel: usize, value: u32) {
        *self = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_address_the_channels_in_rgb_order() {
        let mut pixel = RgbChannel::new(1, 2, 3);
        assert_eq!(pixel.value(0), 1);
        assert_eq!(pixel.value(1), 2);
        assert_eq!(pixel.value(2), 3);

        pixel.set_value(1, 42);
        assert_eq!(pixel, RgbChannel::new(1, 42, 3));
    }

    #[test]
    fn should_keep_8_bit_values_as_they_are() {
        assert_eq!(
            RgbChannel::normalized([255, 0, 128]),
            RgbChannel::new(255, 0, 128)
        );
    }

    #[test]
    fn should_shift_16_bit_values_to_their_upper_byte() {
        assert_eq!(
            RgbChannel::normalized([0xff00, 0x0100, 0x00ff]),
            RgbChannel::new(0xff, 0x01, 0x00)
        );
    }

    #[test]
    fn should_treat_a_sample_as_single_channel() {
        let mut sample = 7u32;
        assert_eq!(<u32 as CarrierUnit>::CHANNELS, 1);
        assert_eq!(sample.value(0), 7);
        sample.set_value(0, 6);
        assert_eq!(sample, 6);
    }
}
