use image::{DynamicImage, RgbaImage};
use log::debug;

use super::extraction::extract_carrier_concurrent;
use crate::capacity::usable_payload_bytes;
use crate::carrier::{CarrierUnit, RgbChannel};
use crate::error::SteganoError;
use crate::media::CodecOptions;
use crate::result::Result;
use crate::universal_decoder::unveil;
use crate::universal_encoder::embed;

/// LSB codec for images, hides in the red, green and blue channel of every pixel
pub struct LsbCodec;

impl LsbCodec {
    /// The flat carrier of `image`, 16 bit images are taken as they are and get normalized per pixel.
    pub fn carrier(image: &DynamicImage, opts: &CodecOptions) -> Result<Vec<RgbChannel>> {
        match image {
            DynamicImage::ImageRgb8(i) => extract_carrier_concurrent(i, opts.workers),
            DynamicImage::ImageRgba8(i) => extract_carrier_concurrent(i, opts.workers),
            DynamicImage::ImageRgb16(i) => extract_carrier_concurrent(i, opts.workers),
            DynamicImage::ImageRgba16(i) => extract_carrier_concurrent(i, opts.workers),
            DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) => {
                extract_carrier_concurrent(&image.to_rgb16(), opts.workers)
            }
            _ => extract_carrier_concurrent(&image.to_rgb8(), opts.workers),
        }
    }

    /// hides `payload` and returns the resulting 8 bit image, alpha is kept
    pub fn hide(image: &DynamicImage, payload: &[u8], opts: &CodecOptions) -> Result<RgbaImage> {
        let mut carrier = Self::carrier(image, opts)?;
        embed(&mut carrier, payload, &opts.concealer)?;

        carrier_to_image(image, &carrier)
    }

    pub fn unveil(image: &DynamicImage, opts: &CodecOptions) -> Result<Vec<u8>> {
        let carrier = Self::carrier(image, opts)?;

        unveil(&carrier, &opts.concealer)
    }

    /// usable payload bytes
    pub fn capacity(image: &DynamicImage, opts: &CodecOptions) -> usize {
        let pixels = image.width() as usize * image.height() as usize;

        usable_payload_bytes(&opts.concealer, pixels, RgbChannel::CHANNELS)
    }
}

/// Writes the carrier back into an 8 bit copy of `base`.
///
/// The alpha channel of `base` is kept, red, green and blue come from the carrier.
pub fn carrier_to_image(base: &DynamicImage, carrier: &[RgbChannel]) -> Result<RgbaImage> {
    let mut target = base.to_rgba8();
    let pixels = target.width() as usize * target.height() as usize;
    if pixels != carrier.len() {
        debug!(
            "carrier of {} pixels does not match an image of {pixels} pixels",
            carrier.len()
        );
        return Err(SteganoError::InvalidCarrier);
    }

    for (pixel, channel) in target.pixels_mut().zip(carrier) {
        // carrier values are normalized to 8 bit, see `RgbChannel::normalized`
        pixel[0] = channel.r as u8;
        pixel[1] = channel.g as u8;
        pixel[2] = channel.b as u8;
    }

    Ok(target)
}
