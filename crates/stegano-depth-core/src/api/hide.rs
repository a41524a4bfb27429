use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::media::payload::PayloadPipeline;
use crate::media::{Media, Persist};
use crate::message::Message;
use crate::{CodecOptions, SteganoError};

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// what is going to be hidden
#[derive(Debug)]
enum Secret {
    Message(String),
    File(PathBuf),
}

#[derive(Default, Debug)]
pub struct HideApi {
    secret: Option<Secret>,
    media: Option<PathBuf>,
    output: Option<PathBuf>,
    pipeline: PayloadPipeline,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces compression, password and erasure coding at once
    pub fn with_pipeline(mut self, pipeline: PayloadPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Hide this message, replaces a file set before
    pub fn with_message(mut self, message: &str) -> Self {
        self.secret = Some(Secret::Message(message.to_string()));
        self
    }

    pub fn use_message<S: AsRef<str>>(self, message: Option<S>) -> Self {
        match message {
            Some(message) => self.with_message(message.as_ref()),
            None => self,
        }
    }

    /// Hide the content of this file together with its name, replaces a message set before
    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.secret = Some(Secret::File(data_file.as_ref().to_path_buf()));
        self
    }

    pub fn use_file<A: AsRef<Path>>(self, data_file: Option<A>) -> Self {
        match data_file {
            Some(data_file) => self.with_file(data_file),
            None => self,
        }
    }

    /// The carrier, a PNG or JPEG image or a WAV file
    pub fn with_media<A: AsRef<Path>>(mut self, media: A) -> Self {
        self.media = Some(media.as_ref().to_path_buf());
        self
    }

    /// Images are always written as PNG, no matter the extension
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.pipeline.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no encryption used
    pub fn use_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.pipeline.password = password.into();
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.pipeline.compress = compress;
        self
    }

    pub fn with_parity_shards(mut self, parity_shards: Option<usize>) -> Self {
        self.pipeline.parity_shards = parity_shards;
        self
    }

    pub fn execute(self) -> Result<(), SteganoError> {
        let Some(secret) = self.secret else {
            return Err(SteganoError::MissingMessage);
        };
        let Some(media) = self.media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let message = match secret {
            Secret::Message(text) => Message::from_text(&text),
            Secret::File(file) => Message::from_file(&file)?,
        };
        let data = message.to_raw_data();
        let payload = self.pipeline.seal(&data)?;

        let mut media = Media::from_file(&media)?;
        if matches!(media, Media::Image(_)) && !is_png_extension(&output) {
            warn!("{output:?} will be written as PNG");
        }
        media.hide_data(&payload, &self.options)?.save_as(&output)?;
        info!(
            "hid {} bytes ({} bytes sealed) in {output:?}",
            data.len(),
            payload.len()
        );

        Ok(())
    }
}

fn is_png_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false)
}
