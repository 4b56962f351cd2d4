//! Seed-to-wallet derivation.
//!
//! SeedDeriver turns an arbitrary non-empty byte seed into a private key,
//! its WIF encoding, the uncompressed public key and a legacy P2PKH address.
//! Every step goes through the injected [`CryptoProvider`], so the same seed
//! always yields the same [`WalletRecord`].

use seedkey_primitives::ec::private_key::{is_valid_scalar, wif_from_bytes};
use seedkey_primitives::ec::public_key::p2pkh_address;
use tracing::debug;
use zeroize::Zeroize;

use crate::error::WalletError;
use crate::provider::{CryptoProvider, DefaultProvider};
use crate::types::{Network, WalletRecord};

/// Derives wallets from seeds with a fixed provider and network.
#[derive(Debug, Clone)]
pub struct SeedDeriver<P: CryptoProvider = DefaultProvider> {
    provider: P,
    network: Network,
}

impl SeedDeriver<DefaultProvider> {
    /// Deriver using the built-in primitives and mainnet version bytes.
    pub fn mainnet() -> Self {
        SeedDeriver::new(DefaultProvider, Network::Mainnet)
    }
}

impl Default for SeedDeriver<DefaultProvider> {
    fn default() -> Self {
        Self::mainnet()
    }
}

impl<P: CryptoProvider> SeedDeriver<P> {
    /// Create a deriver from a primitive provider and the network to encode for.
    pub fn new(provider: P, network: Network) -> Self {
        SeedDeriver { provider, network }
    }

    /// The network whose version bytes this deriver uses.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Private key for `seed`: SHA-256(SHA-256(seed)).
    ///
    /// Fails with `EmptySeed` for a zero-length seed and with `KeyOutOfRange`
    /// if the digest is not a valid secp256k1 scalar.
    pub fn private_key(&self, seed: &[u8]) -> Result<[u8; 32], WalletError> {
        if seed.is_empty() {
            return Err(WalletError::EmptySeed);
        }
        let key = self.provider.sha256d(seed)?;
        if !is_valid_scalar(&key) {
            return Err(WalletError::KeyOutOfRange);
        }
        Ok(key)
    }

    /// Uncompressed WIF of `private_key` under this deriver's network.
    pub fn wif(&self, private_key: &[u8; 32]) -> String {
        wif_from_bytes(private_key, self.network.wif_prefix())
    }

    /// Uncompressed 65-byte public key, `private_key * G`.
    pub fn public_key(&self, private_key: &[u8; 32]) -> Result<[u8; 65], WalletError> {
        if !is_valid_scalar(private_key) {
            return Err(WalletError::KeyOutOfRange);
        }
        self.provider.ec_scalar_multiply(private_key)
    }

    /// P2PKH address of an uncompressed public key under this deriver's network.
    pub fn address(&self, public_key: &[u8; 65]) -> Result<String, WalletError> {
        let hash = self.provider.hash160(public_key)?;
        Ok(p2pkh_address(&hash, self.network.address_prefix()))
    }

    /// Run the full pipeline on `seed`.
    pub fn derive_wallet(&self, seed: &[u8]) -> Result<WalletRecord, WalletError> {
        debug!(seed_len = seed.len(), network = %self.network, "deriving wallet from seed");
        let mut private_key = self.private_key(seed)?;
        let record = self.derive_from_private_key(&private_key);
        private_key.zeroize();
        record
    }

    /// Run the pipeline from step 2 on for a key the caller already holds.
    pub fn derive_from_private_key(
        &self,
        private_key: &[u8; 32],
    ) -> Result<WalletRecord, WalletError> {
        if !is_valid_scalar(private_key) {
            return Err(WalletError::KeyOutOfRange);
        }
        let wif = self.wif(private_key);
        let public_key = self.public_key(private_key)?;
        let address = self.address(&public_key)?;
        debug!(network = %self.network, %address, "derived wallet");
        Ok(WalletRecord::new(
            hex::encode(private_key),
            wif,
            hex::encode(public_key),
            address,
        ))
    }
}

/// Derive a mainnet wallet from `seed` with the built-in primitives.
pub fn derive_wallet(seed: &[u8]) -> Result<WalletRecord, WalletError> {
    SeedDeriver::mainnet().derive_wallet(seed)
}
