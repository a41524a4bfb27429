use clap::{Parser, Subcommand, ValueEnum};
use stegano_depth_core::{CodecOptions, Concealer, MAX_DEPTH};

use crate::commands::*;
use crate::CliResult;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    /// Bit depth, the deepest bit plane that takes payload bits
    #[arg(
        short = 'D',
        long,
        global = true,
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=MAX_DEPTH as i64)
    )]
    pub depth: u8,

    /// How bit planes are used up to the bit depth
    #[arg(long, global = true, value_enum, default_value_t = Mode::Within)]
    pub mode: Mode,

    /// Number of threads that extract the carrier of an image, defaults to all cores
    #[arg(long, global = true, value_name = "threads")]
    pub workers: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// all planes from the bit depth down to the least significant bit
    Within,
    /// exactly one plane, the one at the bit depth
    At,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    Capacity(capacity::CapacityArgs),
}

impl CliArgs {
    pub fn codec_options(&self) -> CliResult<CodecOptions> {
        let concealer = match self.mode {
            Mode::Within => Concealer::within_depth(self.depth)?,
            Mode::At => Concealer::at_depth(self.depth)?,
        };
        let options = CodecOptions::default().with_concealer(concealer);

        Ok(match self.workers {
            Some(workers) => options.with_workers(workers),
            None => options,
        })
    }
}

/// Asks for a password on the terminal, an empty password or no terminal means no password
pub fn ask_for_password(confirm: bool) -> Option<String> {
    let prompt = dialoguer::Password::new()
        .with_prompt("Password (leave empty for none)")
        .allow_empty_password(true);
    let prompt = if confirm {
        prompt.with_confirmation("Repeat password", "Error: the passwords don't match.")
    } else {
        prompt
    };

    prompt.interact().ok().filter(|password| !password.is_empty())
}
