use std::path::PathBuf;

use clap::Args;
use stegano_depth_core::{CodecOptions, PayloadPipeline};

use crate::CliResult;

/// Hides data in PNG images and WAV audio files
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Password used to encrypt the data, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Media file such as PNG or JPEG image or WAV audio file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, images are always PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// File to hide in the media
    #[arg(
        short = 'd',
        long = "data",
        value_name = "data file",
        required_unless_present = "message",
        conflicts_with = "message"
    )]
    pub data_file: Option<PathBuf>,

    /// A text message that will be hidden
    #[arg(
        short,
        long,
        value_name = "text message",
        required_unless_present = "data_file"
    )]
    pub message: Option<String>,

    /// Compress the data before it is encrypted and hidden
    #[arg(short, long)]
    pub compress: bool,

    /// Protect the data with this many Reed-Solomon parity shards
    #[arg(long, value_name = "shards")]
    pub parity: Option<usize>,
}

impl HideArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = if self.password.is_none() {
            crate::cli::ask_for_password(true)
        } else {
            self.password
        };
        let pipeline = PayloadPipeline::new()
            .with_compression(self.compress)
            .with_password(password)
            .with_parity_shards(self.parity);

        stegano_depth_core::commands::hide(
            &self.media,
            &self.write_to_file,
            self.data_file,
            self.message,
            pipeline,
            options,
        )
    }
}
