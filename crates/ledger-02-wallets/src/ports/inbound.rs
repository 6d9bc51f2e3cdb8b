//! # Inbound Ports (Driving Ports)
//!
//! API exposed by the wallets store.

use shared_types::{Wallet, WalletId};

use crate::domain::WalletsError;

/// Lazy sequence of wallets read from a store.
pub type WalletStream = Box<dyn Iterator<Item = Result<Wallet, WalletsError>> + Send>;

/// A collection of uniquely identified wallets.
pub trait Wallets: Send + Sync {
    /// Enumerate every wallet record currently in the store.
    ///
    /// Each call re-scans the store. Order is unspecified. Records are read
    /// lazily as the stream is consumed; a record is either seen complete or
    /// not at all.
    ///
    /// # Errors
    ///
    /// `StorageIo` if the store cannot be listed; per-item `StorageIo` if a
    /// record cannot be read.
    fn iterate(&self) -> Result<WalletStream, WalletsError>;

    /// Create a new wallet with a store-unique identifier.
    ///
    /// # Errors
    ///
    /// `DuplicateWallet` if the allocated identifier is already taken (the
    /// existing record is not modified), `StorageIo` on write failure.
    fn create(&self) -> Result<Wallet, WalletsError>;

    /// Load a single wallet by identifier.
    ///
    /// # Errors
    ///
    /// `StorageIo` on read failure; an absent record is `Ok(None)`.
    fn find(&self, id: WalletId) -> Result<Option<Wallet>, WalletsError>;
}
