//! Derives WIF, public key and address for a private key the user already holds.

use std::process::ExitCode;

use anyhow::{Context, Result};
use seedkey_primitives::ec::PrivateKey;
use seedkey_wallet::{DefaultProvider, SeedDeriver};

use crate::cli::ConvertArgs;
use crate::config::CliConfig;
use crate::handlers::render_wallet;

/// Handles the convert command.
pub(crate) fn handle_convert(args: ConvertArgs, config: &CliConfig) -> Result<ExitCode> {
    println!("{}", convert(&args, config)?);
    Ok(ExitCode::SUCCESS)
}

fn convert(args: &ConvertArgs, config: &CliConfig) -> Result<String> {
    let network = args.network.unwrap_or(config.network);
    let format = args.format.unwrap_or(config.format);

    let key = PrivateKey::from_hex(args.key.trim()).context("invalid private key")?;
    let record = SeedDeriver::new(DefaultProvider, network)
        .derive_from_private_key(&key.to_bytes())
        .context("wallet derivation failed")?;

    render_wallet(&record, network, format)
}
