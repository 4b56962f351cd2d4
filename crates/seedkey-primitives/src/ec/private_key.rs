//! secp256k1 private key with Bitcoin-specific functionality.
//!
//! Wraps a k256 signing key and adds uncompressed WIF encoding and decoding.

use k256::ecdsa::SigningKey;
use zeroize::Zeroize;

use crate::base58;
use crate::ec::public_key::PublicKey;
use crate::PrimitivesError;

/// A secp256k1 private key.
///
/// Always holds a scalar in `[1, n-1]`; construction rejects anything else.
/// The scalar is wiped when the key is dropped, since `SigningKey` is
/// `ZeroizeOnDrop`.
#[derive(Clone)]
pub struct PrivateKey {
    /// The underlying k256 signing key.
    inner: SigningKey,
}

/// Length of a serialized private key in bytes.
pub const PRIVATE_KEY_BYTES_LEN: usize = 32;

/// Mainnet WIF prefix byte.
pub const MAINNET_PREFIX: u8 = 0x80;

/// Decoded length of an uncompressed WIF payload: version byte + key.
const WIF_PAYLOAD_LEN: usize = 1 + PRIVATE_KEY_BYTES_LEN;

impl PrivateKey {
    /// Create a private key from raw 32-byte scalar.
    ///
    /// # Arguments
    /// * `bytes` - A 32-byte big-endian scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` if the bytes represent a valid scalar on secp256k1,
    /// or an error if the length is wrong or the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.len() != PRIVATE_KEY_BYTES_LEN {
            return Err(PrimitivesError::InvalidKeyLength {
                expected: PRIVATE_KEY_BYTES_LEN,
                got: bytes.len(),
            });
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| PrimitivesError::InvalidPrivateKey(e.to_string()))?;
        Ok(PrivateKey { inner: signing_key })
    }

    /// Create a private key from a hexadecimal string.
    ///
    /// An optional `0x` prefix is accepted.
    ///
    /// # Arguments
    /// * `hex_str` - A 64-character hex string representing the 32-byte scalar.
    ///
    /// # Returns
    /// `Ok(PrivateKey)` on success, or an error if the hex or the scalar is invalid.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let trimmed = hex_str.trim_start_matches("0x");
        if trimmed.is_empty() {
            return Err(PrimitivesError::InvalidPrivateKey(
                "private key hex is empty".to_string(),
            ));
        }
        let mut bytes = hex::decode(trimmed)?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Create a private key from an uncompressed WIF string.
    ///
    /// Decodes the Base58Check string, validates the checksum and extracts the
    /// 32-byte scalar. Compressed WIF (with the trailing `0x01` flag) is rejected.
    ///
    /// # Arguments
    /// * `wif` - A Base58Check-encoded WIF string.
    ///
    /// # Returns
    /// The key together with the version byte it was encoded under.
    pub fn from_wif(wif: &str) -> Result<(Self, u8), PrimitivesError> {
        let mut payload = base58::check_decode(wif)?;
        if payload.len() != WIF_PAYLOAD_LEN {
            let len = payload.len();
            payload.zeroize();
            return Err(PrimitivesError::InvalidWif(format!(
                "expected {} payload bytes, got {}",
                WIF_PAYLOAD_LEN, len
            )));
        }
        let version = payload[0];
        let key = Self::from_bytes(&payload[1..]);
        payload.zeroize();
        Ok((key?, version))
    }

    /// Encode the private key as an uncompressed WIF string with the mainnet prefix (0x80).
    pub fn to_wif(&self) -> String {
        self.to_wif_prefix(MAINNET_PREFIX)
    }

    /// Encode the private key as an uncompressed WIF string with a custom version byte.
    ///
    /// # Arguments
    /// * `prefix` - The network prefix byte (0x80 for mainnet, 0xef for testnet).
    ///
    /// # Returns
    /// `Base58Check(prefix || key)`.
    pub fn to_wif_prefix(&self, prefix: u8) -> String {
        wif_from_bytes(&self.to_bytes(), prefix)
    }

    /// Serialize the private key as a 32-byte big-endian array.
    pub fn to_bytes(&self) -> [u8; PRIVATE_KEY_BYTES_LEN] {
        let mut out = [0u8; PRIVATE_KEY_BYTES_LEN];
        out.copy_from_slice(&self.inner.to_bytes());
        out
    }

    /// Serialize the private key as a lowercase hexadecimal string.
    ///
    /// # Returns
    /// A 64-character hex string representing the 32-byte scalar.
    pub fn to_hex(&self) -> String {
        let mut bytes = self.to_bytes();
        let out = hex::encode(bytes);
        bytes.zeroize();
        out
    }

    /// Derive the corresponding public key, `d * G`.
    pub fn pub_key(&self) -> PublicKey {
        PublicKey::from_k256_verifying_key(self.inner.verifying_key())
    }
}

/// Encode raw key bytes as uncompressed WIF without range-checking the scalar.
///
/// # Arguments
/// * `key` - The 32-byte private key.
/// * `prefix` - The WIF version byte.
pub fn wif_from_bytes(key: &[u8; PRIVATE_KEY_BYTES_LEN], prefix: u8) -> String {
    let mut payload = Vec::with_capacity(WIF_PAYLOAD_LEN);
    payload.push(prefix);
    payload.extend_from_slice(key);
    let wif = base58::check_encode(&payload);
    payload.zeroize();
    wif
}

/// Check that `bytes` is a usable secp256k1 scalar, i.e. lies in `[1, n-1]`.
pub fn is_valid_scalar(bytes: &[u8; PRIVATE_KEY_BYTES_LEN]) -> bool {
    SigningKey::from_slice(bytes).is_ok()
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateKey").finish_non_exhaustive()
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_bytes() == other.to_bytes()
    }
}

impl Eq for PrivateKey {}
