/// Error types for wallet derivation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("seed must contain at least one byte")]
    EmptySeed,
    #[error("cryptographic primitive unavailable: {0}")]
    PrimitiveUnavailable(String),
    #[error("derived private key is outside the secp256k1 scalar range")]
    KeyOutOfRange,
    #[error("primitives error: {0}")]
    Primitives(#[from] seedkey_primitives::PrimitivesError),
    #[error("invalid network: {0}")]
    InvalidNetwork(String),
}
