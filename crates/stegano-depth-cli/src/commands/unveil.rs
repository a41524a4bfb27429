use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use stegano_depth_core::{CodecOptions, PayloadPipeline, SteganoError};

use crate::CliResult;

/// Unveils data from PNG images and WAV audio files
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Password used to encrypt the data, asked for when missing
    #[arg(short, long, value_name = "password")]
    pub password: Option<String>,

    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Unveiled data will be stored in that file.
    /// Otherwise a hidden file is restored under its own name and a text message goes to stdout
    #[arg(short = 'o', long = "out", value_name = "output file")]
    pub output_file: Option<PathBuf>,

    /// Directory where a hidden file is restored under its own name
    #[arg(
        long = "dir",
        value_name = "output directory",
        default_value = ".",
        conflicts_with = "output_file"
    )]
    pub output_dir: PathBuf,

    /// The data was compressed when hidden
    #[arg(short, long)]
    pub compress: bool,

    /// The data was protected with this many Reed-Solomon parity shards
    #[arg(long, value_name = "shards")]
    pub parity: Option<usize>,
}

impl UnveilArgs {
    pub fn run(self, options: CodecOptions) -> CliResult<()> {
        let password = if self.password.is_none() {
            crate::cli::ask_for_password(false)
        } else {
            self.password
        };
        let pipeline = PayloadPipeline::new()
            .with_compression(self.compress)
            .with_password(password)
            .with_parity_shards(self.parity);

        let message = stegano_depth_core::commands::unveil(
            &self.media,
            self.output_file.as_deref(),
            Some(self.output_dir.as_path()),
            pipeline,
            options,
        )?;

        match (&self.output_file, &message.file_name) {
            (None, Some(file_name)) => {
                eprintln!("restored {}", self.output_dir.join(file_name).display())
            }
            (None, None) => std::io::stdout()
                .lock()
                .write_all(&message.data)
                .map_err(|source| SteganoError::WriteError { source })?,
            _ => {}
        }

        Ok(())
    }
}
