mod cli;
mod commands;

use clap::Parser;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegano_depth_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    let options = args.codec_options()?;
    log::debug!("running with {options:?}");

    match args.command {
        Commands::Hide(hide) => hide.run(options),
        Commands::Unveil(unveil) => unveil.run(options),
        Commands::Capacity(capacity) => capacity.run(options),
    }
}
