//! # Ports
//!
//! - `inbound`: `Wallets`, the store API
//! - `outbound`: `IdGenerator`, the source of fresh identifiers

pub mod inbound;
pub mod outbound;

pub use inbound::{WalletStream, Wallets};
pub use outbound::IdGenerator;
