/// Seedkey wallet derivation.
///
/// Turns a non-empty byte seed into a private key, WIF, uncompressed public
/// key and P2PKH address, using an injected cryptographic primitive provider.

mod error;
pub use error::WalletError;

pub mod types;
pub mod provider;
pub mod deriver;

pub use deriver::{derive_wallet, SeedDeriver};
pub use provider::{CryptoProvider, DefaultProvider};
pub use types::{Network, WalletRecord};
