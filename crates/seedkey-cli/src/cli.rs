use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use seedkey_wallet::Network;

#[derive(Parser)]
#[command(
    name = "seedkey",
    about = "Deterministic Bitcoin key and address derivation from arbitrary seeds",
    version
)]
pub(crate) struct Cli {
    #[arg(
        long,
        global = true,
        env = "SEEDKEY_CONFIG",
        help = "path to a seedkey.toml config file"
    )]
    pub(crate) config: Option<PathBuf>,

    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
    Derive(DeriveArgs),

    Convert(ConvertArgs),

    Encode(EncodeArgs),

    Decode(DecodeArgs),

    Validate(ValidateArgs),
}

/// How derived wallets are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "Derive a private key, WIF, public key and address from a seed",
    group(ArgGroup::new("seed").required(true).args(["text", "file"]))
)]
pub(crate) struct DeriveArgs {
    #[arg(long, help = "seed text, used as its UTF-8 bytes")]
    pub(crate) text: Option<String>,

    #[arg(long, help = "file whose raw bytes are the seed")]
    pub(crate) file: Option<PathBuf>,

    #[arg(long, help = "network version bytes to encode with [mainnet, testnet]")]
    pub(crate) network: Option<Network>,

    #[arg(long, value_enum, help = "output format")]
    pub(crate) format: Option<OutputFormat>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Derive WIF, public key and address for an existing private key")]
pub(crate) struct ConvertArgs {
    #[arg(long, help = "hex-encoded 32-byte private key")]
    pub(crate) key: String,

    #[arg(long, help = "network version bytes to encode with [mainnet, testnet]")]
    pub(crate) network: Option<Network>,

    #[arg(long, value_enum, help = "output format")]
    pub(crate) format: Option<OutputFormat>,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Base58-encode hex bytes")]
pub(crate) struct EncodeArgs {
    #[arg(help = "hex bytes to encode")]
    pub(crate) hex: String,

    #[arg(long, help = "append a Base58Check checksum")]
    pub(crate) check: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Decode a Base58 string to hex bytes")]
pub(crate) struct DecodeArgs {
    #[arg(help = "Base58 string to decode")]
    pub(crate) input: String,

    #[arg(long, help = "verify and strip a Base58Check checksum")]
    pub(crate) check: bool,
}

#[derive(Parser, Debug, Clone)]
#[command(about = "Check a Base58Check string; exits non-zero when invalid")]
pub(crate) struct ValidateArgs {
    #[arg(help = "Base58Check string, e.g. a WIF key or address")]
    pub(crate) input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_requires_exactly_one_seed_source() {
        assert!(Cli::try_parse_from(["seedkey", "derive"]).is_err());
        assert!(
            Cli::try_parse_from(["seedkey", "derive", "--text", "a", "--file", "b"]).is_err()
        );
        let cli = Cli::try_parse_from(["seedkey", "derive", "--text", "test"]).unwrap();
        match cli.command {
            Commands::Derive(args) => {
                assert_eq!(args.text.as_deref(), Some("test"));
                assert_eq!(args.network, None);
            }
            _ => panic!("expected derive"),
        }
    }

    #[test]
    fn test_network_and_format_flags() {
        let cli = Cli::try_parse_from([
            "seedkey", "derive", "--text", "x", "--network", "testnet", "--format", "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Derive(args) => {
                assert_eq!(args.network, Some(Network::Testnet));
                assert_eq!(args.format, Some(OutputFormat::Json));
            }
            _ => panic!("expected derive"),
        }
        assert!(Cli::try_parse_from(["seedkey", "derive", "--text", "x", "--network", "moon"])
            .is_err());
    }

    #[test]
    fn test_codec_subcommands() {
        let cli = Cli::try_parse_from(["seedkey", "encode", "00ff", "--check"]).unwrap();
        assert!(matches!(cli.command, Commands::Encode(EncodeArgs { check: true, .. })));
        let cli = Cli::try_parse_from(["seedkey", "validate", "1Wh4bh"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
    }
}
