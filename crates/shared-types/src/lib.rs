//! # Shared Types Crate
//!
//! Wallet entities used by both the wallets store (`ledger-02`) and the
//! network (`ledger-01`).
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `WalletId` and `Wallet` are defined once here.
//! - **Opaque Content**: the wallet body is never interpreted by the core;
//!   only its identifier matters for storage and replication.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
