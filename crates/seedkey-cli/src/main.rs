//! CLI for deriving seed wallets and inspecting Base58Check strings.

mod cli;
mod config;
mod handlers;
mod logging;
mod seed;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::config::CliConfig;
use crate::handlers::{codec, convert, derive};

fn main() -> Result<ExitCode> {
    logging::init();

    let cli = Cli::parse();
    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Derive(args) => derive::handle_derive(args, &config),
        Commands::Convert(args) => convert::handle_convert(args, &config),
        Commands::Encode(args) => codec::handle_encode(args),
        Commands::Decode(args) => codec::handle_decode(args),
        Commands::Validate(args) => codec::handle_validate(args),
    }
}
