//! secp256k1 public key with Bitcoin-specific functionality.
//!
//! Supports compressed/uncompressed SEC1 parsing, uncompressed serialization
//! and legacy P2PKH address generation.

use k256::ecdsa::VerifyingKey;
use std::fmt;

use crate::base58;
use crate::hash::hash160;
use crate::PrimitivesError;

/// Length of an uncompressed public key in bytes (prefix + 32 byte x + 32 byte y).
pub const UNCOMPRESSED_LEN: usize = 65;

/// SEC1 tag byte for an uncompressed point.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// Mainnet P2PKH address version byte.
pub const MAINNET_ADDRESS_PREFIX: u8 = 0x00;

/// A secp256k1 public key.
///
/// Wraps a k256 `VerifyingKey`. Serialization and address derivation always
/// use the 65-byte uncompressed encoding.
#[derive(Clone, Debug)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Create a PublicKey from raw SEC1 encoded bytes.
    ///
    /// Accepts both compressed (33-byte) and uncompressed (65-byte) formats.
    ///
    /// # Arguments
    /// * `bytes` - SEC1-encoded public key bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the bytes don't represent a valid point.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PrimitivesError> {
        if bytes.is_empty() {
            return Err(PrimitivesError::InvalidPublicKey(
                "pubkey bytes are empty".to_string(),
            ));
        }
        let vk = VerifyingKey::from_sec1_bytes(bytes)
            .map_err(|e| PrimitivesError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner: vk })
    }

    /// Create a PublicKey from a hex-encoded SEC1 string.
    ///
    /// # Arguments
    /// * `hex_str` - A hex string of a compressed (66 chars) or uncompressed (130 chars) key.
    pub fn from_hex(hex_str: &str) -> Result<Self, PrimitivesError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Serialize the public key in uncompressed SEC1 format (65 bytes).
    ///
    /// The first byte is 0x04, followed by 32-byte X and 32-byte Y coordinates,
    /// both big-endian.
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_LEN] {
        let point = self.inner.to_encoded_point(false);
        let mut out = [0u8; UNCOMPRESSED_LEN];
        out.copy_from_slice(point.as_bytes());
        out
    }

    /// Serialize the public key as a lowercase hexadecimal string (uncompressed format).
    ///
    /// # Returns
    /// A 130-character hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_uncompressed())
    }

    /// Compute the Hash160 of the uncompressed public key.
    ///
    /// Hash160 = RIPEMD160(SHA256(uncompressed_pubkey)).
    pub fn hash160(&self) -> [u8; 20] {
        hash160(&self.to_uncompressed())
    }

    /// Derive a mainnet P2PKH address from the uncompressed public key.
    pub fn to_address(&self) -> String {
        self.to_address_prefix(MAINNET_ADDRESS_PREFIX)
    }

    /// Derive a P2PKH address under the given version byte.
    ///
    /// # Arguments
    /// * `prefix` - Address version byte (0x00 for mainnet, 0x6f for testnet).
    ///
    /// # Returns
    /// `Base58Check(prefix || hash160(uncompressed_pubkey))`.
    pub fn to_address_prefix(&self, prefix: u8) -> String {
        p2pkh_address(&self.hash160(), prefix)
    }

    /// Construct a PublicKey from a k256 `VerifyingKey`.
    pub(crate) fn from_k256_verifying_key(vk: &VerifyingKey) -> Self {
        PublicKey { inner: *vk }
    }
}

/// Build a P2PKH address string from a 20-byte Hash160 and a version byte.
pub fn p2pkh_address(hash: &[u8; 20], prefix: u8) -> String {
    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(prefix);
    payload.extend_from_slice(hash);
    base58::check_encode(&payload)
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.to_uncompressed() == other.to_uncompressed()
    }
}

impl Eq for PublicKey {}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ec::PrivateKey;

    const GENERATOR_HEX: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
                                 483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    /// Test parsing various valid and invalid public key formats.
    #[test]
    fn test_pub_keys() {
        struct PubKeyTest {
            name: &'static str,
            key: Vec<u8>,
            is_valid: bool,
        }

        let tests = vec![
            PubKeyTest {
                name: "uncompressed ok",
                key: vec![
                    0x04, 0x11, 0xdb, 0x93, 0xe1, 0xdc, 0xdb, 0x8a, 0x01, 0x6b, 0x49, 0x84,
                    0x0f, 0x8c, 0x53, 0xbc, 0x1e, 0xb6, 0x8a, 0x38, 0x2e, 0x97, 0xb1, 0x48,
                    0x2e, 0xca, 0xd7, 0xb1, 0x48, 0xa6, 0x90, 0x9a, 0x5c, 0xb2, 0xe0, 0xea,
                    0xdd, 0xfb, 0x84, 0xcc, 0xf9, 0x74, 0x44, 0x64, 0xf8, 0x2e, 0x16, 0x0b,
                    0xfa, 0x9b, 0x8b, 0x64, 0xf9, 0xd4, 0xc0, 0x3f, 0x99, 0x9b, 0x86, 0x43,
                    0xf6, 0x56, 0xb4, 0x12, 0xa3,
                ],
                is_valid: true,
            },
            PubKeyTest {
                name: "uncompressed x changed",
                key: vec![
                    0x04, 0x15, 0xdb, 0x93, 0xe1, 0xdc, 0xdb, 0x8a, 0x01, 0x6b, 0x49, 0x84,
                    0x0f, 0x8c, 0x53, 0xbc, 0x1e, 0xb6, 0x8a, 0x38, 0x2e, 0x97, 0xb1, 0x48,
                    0x2e, 0xca, 0xd7, 0xb1, 0x48, 0xa6, 0x90, 0x9a, 0x5c, 0xb2, 0xe0, 0xea,
                    0xdd, 0xfb, 0x84, 0xcc, 0xf9, 0x74, 0x44, 0x64, 0xf8, 0x2e, 0x16, 0x0b,
                    0xfa, 0x9b, 0x8b, 0x64, 0xf9, 0xd4, 0xc0, 0x3f, 0x99, 0x9b, 0x86, 0x43,
                    0xf6, 0x56, 0xb4, 0x12, 0xa3,
                ],
                is_valid: false,
            },
            PubKeyTest {
                name: "compressed ok (ybit = 0)",
                key: vec![
                    0x02, 0xce, 0x0b, 0x14, 0xfb, 0x84, 0x2b, 0x1b, 0xa5, 0x49, 0xfd, 0xd6,
                    0x75, 0xc9, 0x80, 0x75, 0xf1, 0x2e, 0x9c, 0x51, 0x0f, 0x8e, 0xf5, 0x2b,
                    0xd0, 0x21, 0xa9, 0xa1, 0xf4, 0x80, 0x9d, 0x3b, 0x4d,
                ],
                is_valid: true,
            },
            PubKeyTest {
                name: "wrong length",
                key: vec![0x05],
                is_valid: false,
            },
            PubKeyTest {
                name: "empty",
                key: vec![],
                is_valid: false,
            },
        ];

        for test in &tests {
            let result = PublicKey::from_bytes(&test.key);
            assert_eq!(result.is_ok(), test.is_valid, "{}: {:?}", test.name, result.err());
        }
    }

    #[test]
    fn test_generator_point_from_scalar_one() {
        let mut one = [0u8; 32];
        one[31] = 1;
        let pub_key = PrivateKey::from_bytes(&one).unwrap().pub_key();
        let uncompressed = pub_key.to_uncompressed();
        assert_eq!(uncompressed[0], UNCOMPRESSED_TAG);
        assert_eq!(pub_key.to_hex(), GENERATOR_HEX);
        assert_eq!(pub_key.to_address(), "1EHNa6Q4Jz2uvNExL497mE43ikXhwF6kZm");
    }

    #[test]
    fn test_compressed_input_serializes_uncompressed() {
        let compressed = PublicKey::from_hex(
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798",
        )
        .unwrap();
        assert_eq!(compressed, PublicKey::from_hex(GENERATOR_HEX).unwrap());
        assert_eq!(compressed.to_hex().len(), 130);
    }

    #[test]
    fn test_address_for_test_seed_key() {
        let pub_key = PublicKey::from_hex(
            "047e62b845df7d0a937286d05083a2a07984e659784562a04e1a50529c794b7cbe\
             58ded73b65c72cb93215d0147a27fe1bbba03c13b5efb5c5ab4912428bb6cbc8",
        )
        .unwrap();
        assert_eq!(hex::encode(pub_key.hash160()), "13e8c5282154efe0395951d7d287052f65cf9420");
        assert_eq!(pub_key.to_address(), "12pGgoH6hdhEVTdc4J91YAh2t8bEAkKWGB");
        assert_eq!(pub_key.to_address_prefix(0x6f), "mhLDyrN5Wf8VGa7Dms7PN5uMk8Bw9Eycvm");
    }

    #[test]
    fn test_display() {
        let pk = PublicKey::from_hex(GENERATOR_HEX).unwrap();
        assert_eq!(format!("{}", pk), GENERATOR_HEX);
    }
}
