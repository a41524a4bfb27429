use std::path::PathBuf;

use clap::Args;
use stegano_depth_core::CodecOptions;

use crate::CliResult;

/// Shows how many bytes a media can take at the given depth and mode
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Media file such as PNG or JPEG image or WAV audio file
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,
}

impl CapacityArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let bytes = stegano_depth_core::commands::capacity(&self.media, &options)?;
        println!(
            "{}: {bytes} bytes at depth {} ({:?})",
            self.media.display(),
            options.depth(),
            options.concealer
        );

        Ok(())
    }
}
