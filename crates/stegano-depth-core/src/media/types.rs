use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

pub use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
pub use image::DynamicImage;
use log::{debug, error};

use crate::error::SteganoError;
use crate::media::audio::{self, narrow, widen};
use crate::media::image::{self as image_codec};
use crate::media::CodecOptions;
use crate::result::Result;

use super::Persist;

/// the spec of a wav file and its samples as carrier values
pub type WavAudio = (WavSpec, Vec<u32>);

/// a media container for steganography
#[derive(Debug)]
pub enum Media {
    Image(DynamicImage),
    Audio(WavAudio),
}

impl Media {
    pub fn from_image(img: DynamicImage) -> Self {
        Self::Image(img)
    }

    pub fn from_audio(audio: WavAudio) -> Self {
        Self::Audio(audio)
    }

    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or(SteganoError::UnsupportedMedia)?;

        match ext.as_str() {
            "png" | "jpg" | "jpeg" => Ok(Self::Image(image::open(f).map_err(|e| {
                error!("Error opening image {f:?}: {e}");
                SteganoError::InvalidImageMedia
            })?)),
            "wav" => {
                let mut reader = WavReader::open(f).map_err(|e| {
                    error!("Error opening audio {f:?}: {e}");
                    SteganoError::InvalidAudioMedia
                })?;
                let spec = reader.spec();
                if spec.sample_format != SampleFormat::Int {
                    error!("Only integer PCM is supported, {f:?} has float samples");
                    return Err(SteganoError::InvalidAudioMedia);
                }
                let samples = reader
                    .samples::<i32>()
                    .map(|s| s.map(widen))
                    .collect::<std::result::Result<Vec<u32>, _>>()
                    .map_err(|e| {
                        error!("Error reading samples of {f:?}: {e}");
                        SteganoError::InvalidAudioMedia
                    })?;
                debug!("read {} samples of {} bits", samples.len(), spec.bits_per_sample);

                Ok(Self::Audio((spec, samples)))
            }
            _ => Err(SteganoError::UnsupportedMedia),
        }
    }

    /// hides `payload` in place, images become 8 bit RGBA
    pub fn hide_data(&mut self, payload: &[u8], opts: &CodecOptions) -> Result<&mut Self> {
        match self {
            Media::Image(i) => {
                let secret = image_codec::LsbCodec::hide(i, payload, opts)?;
                *i = DynamicImage::ImageRgba8(secret);
            }
            Media::Audio((_spec, samples)) => audio::LsbCodec::hide(samples, payload, opts)?,
        }

        Ok(self)
    }

    pub fn unveil_data(&self, opts: &CodecOptions) -> Result<Vec<u8>> {
        match self {
            Media::Image(i) => image_codec::LsbCodec::unveil(i, opts),
            Media::Audio((_spec, samples)) => audio::LsbCodec::unveil(samples, opts),
        }
    }

    /// usable payload bytes
    pub fn capacity(&self, opts: &CodecOptions) -> usize {
        match self {
            Media::Image(i) => image_codec::LsbCodec::capacity(i, opts),
            Media::Audio((_spec, samples)) => audio::LsbCodec::capacity(samples, opts),
        }
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W) -> Result<()> {
        match self {
            Media::Image(i) => i
                .write_to(&mut writer, image::ImageFormat::Png)
                .map_err(|e| {
                    error!("Error saving image: {e}");
                    SteganoError::ImageEncodingError
                }),
            Media::Audio((spec, samples)) => {
                let mut wav_writer = WavWriter::new(writer, *spec).map_err(|e| {
                    error!("Error creating wav writer: {e}");
                    SteganoError::AudioEncodingError
                })?;
                for s in samples {
                    wav_writer
                        .write_sample(narrow(*s, spec.bits_per_sample))
                        .map_err(|e| {
                            error!("Error writing sample: {e}");
                            SteganoError::AudioEncodingError
                        })?;
                }
                wav_writer.finalize().map_err(|e| {
                    error!("Error finalizing wav: {e}");
                    SteganoError::AudioEncodingError
                })
            }
        }
    }
}

impl Persist for Media {
    fn save_as(&mut self, file: &Path) -> Result<()> {
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        self.save_to_writer(BufWriter::new(f))
    }
}
