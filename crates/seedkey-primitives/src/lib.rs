/// Seedkey cryptographic primitives: hashing, Base58Check and secp256k1 keys.
///
/// This crate provides the building blocks for seed-derived wallets:
/// - Hash functions (SHA-256, SHA-256d, RIPEMD-160, Hash160)
/// - Base58 and Base58Check encoding/decoding
/// - secp256k1 private and public keys (uncompressed SEC1, WIF, P2PKH)

pub mod hash;
pub mod base58;
pub mod ec;

mod error;
pub use error::PrimitivesError;
