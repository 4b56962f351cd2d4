#![deny(missing_docs)]

//! Seed-derived wallet SDK.
//!
//! Re-exports the seedkey crates for convenient single-crate usage.

pub use seedkey_primitives as primitives;
pub use seedkey_wallet as wallet;

pub use seedkey_wallet::{derive_wallet, Network, SeedDeriver, WalletError, WalletRecord};
