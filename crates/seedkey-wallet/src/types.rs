//! Core wallet types: the network version-tag choice and the derived record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::error::WalletError;

/// Number of leading characters of a secret shown by `Debug`/`Display`.
const REDACTED_PREFIX_LEN: usize = 4;

/// Network whose version bytes prefix the WIF and address payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Bitcoin mainnet: WIF `0x80`, P2PKH `0x00`.
    #[default]
    Mainnet,
    /// Bitcoin testnet: WIF `0xef`, P2PKH `0x6f`.
    Testnet,
}

impl Network {
    /// Version byte prepended to a private key before WIF encoding.
    pub fn wif_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x80,
            Network::Testnet => 0xef,
        }
    }

    /// Version byte prepended to a Hash160 before address encoding.
    pub fn address_prefix(self) -> u8 {
        match self {
            Network::Mainnet => 0x00,
            Network::Testnet => 0x6f,
        }
    }

    /// Look up the network a WIF version byte belongs to.
    pub fn from_wif_prefix(prefix: u8) -> Option<Self> {
        [Network::Mainnet, Network::Testnet]
            .into_iter()
            .find(|n| n.wif_prefix() == prefix)
    }

    /// Lowercase name, as used on the command line and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet" | "test" => Ok(Network::Testnet),
            _ => Err(WalletError::InvalidNetwork(s.to_string())),
        }
    }
}

/// The four strings produced by one derivation.
///
/// There is no mutation API. Serializes with camelCase field names
/// (`privateKeyHex`, `wif`, `publicKeyHex`, `address`). `Debug` and
/// `Display` only show short prefixes of the secret fields, and the
/// secret strings are wiped when the record is dropped.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    private_key_hex: String,
    wif: String,
    public_key_hex: String,
    address: String,
}

impl WalletRecord {
    pub(crate) fn new(
        private_key_hex: String,
        wif: String,
        public_key_hex: String,
        address: String,
    ) -> Self {
        WalletRecord {
            private_key_hex,
            wif,
            public_key_hex,
            address,
        }
    }

    /// 64 lowercase hex characters of the private key.
    pub fn private_key_hex(&self) -> &str {
        &self.private_key_hex
    }

    /// Uncompressed WIF encoding of the private key.
    pub fn wif(&self) -> &str {
        &self.wif
    }

    /// 130 lowercase hex characters of the uncompressed public key.
    pub fn public_key_hex(&self) -> &str {
        &self.public_key_hex
    }

    /// Legacy P2PKH address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// True when none of the four fields is empty.
    pub fn is_complete(&self) -> bool {
        !self.private_key_hex.is_empty()
            && !self.wif.is_empty()
            && !self.public_key_hex.is_empty()
            && !self.address.is_empty()
    }
}

fn redacted(secret: &str) -> String {
    let shown: String = secret.chars().take(REDACTED_PREFIX_LEN).collect();
    format!("{}…", shown)
}

impl fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletRecord")
            .field("private_key_hex", &redacted(&self.private_key_hex))
            .field("wif", &redacted(&self.wif))
            .field("public_key_hex", &self.public_key_hex)
            .field("address", &self.address)
            .finish()
    }
}

impl fmt::Display for WalletRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (wif {}, key {})",
            self.address,
            redacted(&self.wif),
            redacted(&self.private_key_hex)
        )
    }
}

impl Drop for WalletRecord {
    fn drop(&mut self) {
        self.private_key_hex.zeroize();
        self.wif.zeroize();
    }
}
