//! Raw Base58 / Base58Check access.

use std::process::ExitCode;

use anyhow::{Context, Result};
use seedkey_primitives::base58;
use seedkey_wallet::Network;

use crate::cli::{DecodeArgs, EncodeArgs, ValidateArgs};

/// Length of a decoded `version || hash160` address payload.
const ADDRESS_PAYLOAD_LEN: usize = 21;
/// Length of a decoded uncompressed `version || key` WIF payload.
const WIF_PAYLOAD_LEN: usize = 33;

fn encode(hex_input: &str, check: bool) -> Result<String> {
    let bytes = hex::decode(hex_input.trim()).context("input is not valid hex")?;
    Ok(if check {
        base58::check_encode(&bytes)
    } else {
        base58::encode(&bytes)
    })
}

fn decode(input: &str, check: bool) -> Result<String> {
    let input = input.trim();
    let bytes = if check {
        base58::check_decode(input)?
    } else {
        base58::decode(input)?
    };
    Ok(hex::encode(bytes))
}

/// Describe a Base58Check string, or the reason it is invalid.
fn describe(input: &str) -> (bool, String) {
    match base58::check_decode(input.trim()) {
        Ok(payload) => {
            let version = payload[0];
            let kind = match payload.len() {
                ADDRESS_PAYLOAD_LEN => match version {
                    0x00 => "P2PKH address (mainnet)".to_string(),
                    0x6f => "P2PKH address (testnet)".to_string(),
                    v => format!("20-byte hash payload, version 0x{v:02x}"),
                },
                WIF_PAYLOAD_LEN => match Network::from_wif_prefix(version) {
                    Some(network) => format!("uncompressed WIF private key ({network})"),
                    None => format!("32-byte key payload, version 0x{version:02x}"),
                },
                len => format!("{} payload bytes, version 0x{version:02x}", len - 1),
            };
            (true, format!("valid: {kind}"))
        }
        Err(e) => (false, format!("invalid: {e}")),
    }
}

/// Handles the encode command.
pub(crate) fn handle_encode(args: EncodeArgs) -> Result<ExitCode> {
    println!("{}", encode(&args.hex, args.check)?);
    Ok(ExitCode::SUCCESS)
}

/// Handles the decode command.
pub(crate) fn handle_decode(args: DecodeArgs) -> Result<ExitCode> {
    println!("{}", decode(&args.input, args.check)?);
    Ok(ExitCode::SUCCESS)
}

/// Handles the validate command.
pub(crate) fn handle_validate(args: ValidateArgs) -> Result<ExitCode> {
    let (valid, report) = describe(&args.input);
    println!("{report}");
    Ok(if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
