//! # Wallets Service
//!
//! `WalletsIn`, the directory-backed implementation of the `Wallets` port.

mod scan;
mod store;

pub use store::WalletsIn;
