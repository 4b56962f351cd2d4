//! Derives a wallet from a text or file seed.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use seedkey_wallet::{DefaultProvider, SeedDeriver};
use tracing::info;

use crate::cli::DeriveArgs;
use crate::config::CliConfig;
use crate::handlers::render_wallet;
use crate::seed;

/// Handles the derive command.
pub(crate) fn handle_derive(args: DeriveArgs, config: &CliConfig) -> Result<ExitCode> {
    println!("{}", derive(&args, config)?);
    Ok(ExitCode::SUCCESS)
}

/// Line reported on stderr after a seed file is read.
fn file_report(path: &Path, size: u64) -> String {
    format!("seed file {} ({})", path.display(), seed::format_size(size))
}

fn load_seed(args: &DeriveArgs, config: &CliConfig) -> Result<Vec<u8>> {
    match (&args.text, &args.file) {
        (Some(text), None) => seed::from_text(text),
        (None, Some(path)) => {
            let bytes = seed::from_file(path, config.max_seed_file_size)?;
            eprintln!("{}", file_report(path, bytes.len() as u64));
            Ok(bytes)
        }
        _ => bail!("exactly one of --text or --file is required"),
    }
}

/// Derive and render the wallet for `args`.
fn derive(args: &DeriveArgs, config: &CliConfig) -> Result<String> {
    let network = args.network.unwrap_or(config.network);
    let format = args.format.unwrap_or(config.format);

    let seed = load_seed(args, config)?;
    let record = SeedDeriver::new(DefaultProvider, network)
        .derive_wallet(&seed)
        .context("wallet derivation failed")?;
    info!(%network, address = record.address(), "derived wallet");

    render_wallet(&record, network, format)
}
