/// Elliptic curve cryptography on secp256k1.
///
/// Provides private keys and public keys with uncompressed SEC1
/// serialization, WIF encoding and P2PKH address derivation.

pub mod private_key;
pub mod public_key;

pub use private_key::PrivateKey;
pub use public_key::PublicKey;
