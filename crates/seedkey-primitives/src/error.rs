/// Unified error type for all primitives operations.
///
/// Covers errors from Base58 decoding, checksum validation and key handling.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PrimitivesError {
    #[error("invalid base58 character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("base58check data too short: decoded {len} bytes, need at least 5")]
    TooShort { len: usize },

    #[error("checksum mismatch")]
    ChecksumMismatch,

    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid WIF format: {0}")]
    InvalidWif(String),

    #[error("invalid key length: expected {expected}, got {got}")]
    InvalidKeyLength { expected: usize, got: usize },

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for PrimitivesError {
    fn from(e: hex::FromHexError) -> Self {
        PrimitivesError::InvalidHex(e.to_string())
    }
}
