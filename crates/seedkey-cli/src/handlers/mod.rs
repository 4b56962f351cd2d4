pub(crate) mod codec;
pub(crate) mod convert;
pub(crate) mod derive;

use anyhow::Result;
use serde::Serialize;
use seedkey_wallet::{Network, WalletRecord};

use crate::cli::OutputFormat;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct WalletOutput<'a> {
    network: Network,
    #[serde(flatten)]
    record: &'a WalletRecord,
}

/// Render a derived wallet for stdout.
pub(crate) fn render_wallet(
    record: &WalletRecord,
    network: Network,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&WalletOutput { network, record })?),
        OutputFormat::Text => Ok(format!(
            "network:     {network}\n\
             private key: {}\n\
             wif:         {}\n\
             public key:  {}\n\
             address:     {}",
            record.private_key_hex(),
            record.wif(),
            record.public_key_hex(),
            record.address(),
        )),
    }
}
