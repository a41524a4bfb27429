use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::payload::PayloadPipeline;
use crate::media::Media;
use crate::message::Message;
use crate::{CodecOptions, SteganoError};

use super::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    pipeline: PayloadPipeline,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, they must match the ones used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces compression, password and erasure coding at once
    pub fn with_pipeline(mut self, pipeline: PayloadPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// This is the image or audio file that contains the data to be unveiled
    pub fn with_secret_media(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    /// The unveiled data is written to this file as well
    pub fn into_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    /// A hidden file is restored under its own name in this directory,
    /// unless [`UnveilApi::into_file`] is set. Text messages are not written.
    pub fn into_dir(mut self, output_dir: impl AsRef<Path>) -> Self {
        self.output_dir = Some(output_dir.as_ref().to_path_buf());
        self
    }

    /// Set the password used for decrypting the data
    /// If `None` is passed, no password will be used, leads to no decryption used
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.pipeline.password = password.into();
        self
    }

    pub fn with_password(self, password: &str) -> Self {
        self.using_password(password)
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.pipeline.compress = compress;
        self
    }

    pub fn with_parity_shards(mut self, parity_shards: Option<usize>) -> Self {
        self.pipeline.parity_shards = parity_shards;
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<Message, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let payload = media.unveil_data(&self.options)?;
        let message = Message::from_raw_data(self.pipeline.open(&payload)?);

        let target = match (self.output_file, self.output_dir, &message.file_name) {
            (Some(output_file), _, _) => Some(output_file),
            (None, Some(output_dir), Some(file_name)) => Some(output_dir.join(file_name)),
            _ => None,
        };
        if let Some(target) = target {
            fs::write(&target, &message.data)
                .map_err(|source| SteganoError::WriteError { source })?;
            info!("unveiled {} bytes into {target:?}", message.data.len());
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::tempdir;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        RgbImage::from_pixel(64, 64, Rgb([10, 20, 30]))
            .save(&carrier)
            .expect("Failed to write carrier image");
        crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_media(&carrier)
            .with_password("Secret42")
            .with_output(&secret)
            .execute()
            .expect("Failed to hide message in image");

        let unveiled = crate::api::unveil::prepare()
            .with_secret_media(&secret)
            .with_password("Secret42")
            .into_file(temp_dir.path().join("secret-message.txt"))
            .execute()
            .expect("Failed to unveil message from image");

        assert_eq!(unveiled.data, b"Hello, World!");
        assert_eq!(unveiled.file_name, None);
        assert_eq!(
            fs::read(temp_dir.path().join("secret-message.txt")).unwrap(),
            b"Hello, World!"
        );
    }

    #[test]
    fn should_restore_a_hidden_file_under_its_name() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        let secret = temp_dir.path().join("secret.png");
        let restored = temp_dir.path().join("restored");
        fs::create_dir(&restored).unwrap();
        RgbImage::from_pixel(64, 64, Rgb([10, 20, 30]))
            .save(&carrier)
            .expect("Failed to write carrier image");
        crate::api::hide::prepare()
            .with_file("Cargo.toml")
            .with_media(&carrier)
            .with_compression(true)
            .with_options(CodecOptions::within_depth(2).unwrap())
            .with_output(&secret)
            .execute()
            .expect("Failed to hide file in image");

        let unveiled = crate::api::unveil::prepare()
            .with_secret_media(&secret)
            .with_compression(true)
            .with_options(CodecOptions::within_depth(2).unwrap())
            .into_dir(&restored)
            .execute()
            .expect("Failed to unveil file from image");

        assert_eq!(unveiled.file_name.as_deref(), Some("Cargo.toml"));
        assert_eq!(
            fs::read(restored.join("Cargo.toml")).unwrap(),
            fs::read("Cargo.toml").unwrap()
        );
    }

    #[test]
    fn should_need_a_secret_media() {
        assert!(matches!(
            prepare().execute(),
            Err(SteganoError::CarrierNotSet)
        ));
    }
}
