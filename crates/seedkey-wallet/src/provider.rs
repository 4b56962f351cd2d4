//! Cryptographic primitive provider.
//!
//! The derivation pipeline never reaches for a hash or curve implementation
//! on its own; it asks the provider it was constructed with. A provider that
//! cannot supply a primitive answers with [`WalletError::PrimitiveUnavailable`].

use seedkey_primitives::ec::PrivateKey;
use seedkey_primitives::hash;

use crate::error::WalletError;

/// SHA-256, RIPEMD-160 and secp256k1 base-point multiplication.
pub trait CryptoProvider {
    /// SHA-256 digest of `data`.
    fn sha256(&self, data: &[u8]) -> Result<[u8; 32], WalletError>;

    /// RIPEMD-160 digest of `data`.
    fn ripemd160(&self, data: &[u8]) -> Result<[u8; 20], WalletError>;

    /// Multiply the secp256k1 generator by `scalar` and return the point in
    /// 65-byte uncompressed SEC1 form (`0x04 || X || Y`).
    ///
    /// Callers only pass scalars in `[1, n-1]`.
    fn ec_scalar_multiply(&self, scalar: &[u8; 32]) -> Result<[u8; 65], WalletError>;

    /// SHA-256 applied twice.
    fn sha256d(&self, data: &[u8]) -> Result<[u8; 32], WalletError> {
        self.sha256(&self.sha256(data)?)
    }

    /// RIPEMD-160 of the SHA-256 of `data`.
    fn hash160(&self, data: &[u8]) -> Result<[u8; 20], WalletError> {
        self.ripemd160(&self.sha256(data)?)
    }
}

impl<P: CryptoProvider + ?Sized> CryptoProvider for &P {
    fn sha256(&self, data: &[u8]) -> Result<[u8; 32], WalletError> {
        (**self).sha256(data)
    }

    fn ripemd160(&self, data: &[u8]) -> Result<[u8; 20], WalletError> {
        (**self).ripemd160(data)
    }

    fn ec_scalar_multiply(&self, scalar: &[u8; 32]) -> Result<[u8; 65], WalletError> {
        (**self).ec_scalar_multiply(scalar)
    }
}

/// Provider backed by `seedkey-primitives` (`sha2`, `ripemd`, `k256`).
///
/// Every primitive is compiled in, so this provider never reports
/// `PrimitiveUnavailable`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultProvider;

impl CryptoProvider for DefaultProvider {
    fn sha256(&self, data: &[u8]) -> Result<[u8; 32], WalletError> {
        Ok(hash::sha256(data))
    }

    fn ripemd160(&self, data: &[u8]) -> Result<[u8; 20], WalletError> {
        Ok(hash::ripemd160(data))
    }

    fn ec_scalar_multiply(&self, scalar: &[u8; 32]) -> Result<[u8; 65], WalletError> {
        let key = PrivateKey::from_bytes(scalar).map_err(|_| WalletError::KeyOutOfRange)?;
        Ok(key.pub_key().to_uncompressed())
    }
}
