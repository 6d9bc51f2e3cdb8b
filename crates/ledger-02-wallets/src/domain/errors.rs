//! # Domain Errors
//!
//! Error types for the wallets store. Every error is surfaced to the caller
//! unchanged; the store never retries.

use std::io;
use std::path::PathBuf;

use shared_types::WalletId;
use thiserror::Error;

use crate::adapters::lock::LockError;

/// Errors that can occur during wallets store operations.
#[derive(Debug, Error)]
pub enum WalletsError {
    /// A record with this identifier already exists; it was left untouched.
    #[error("Wallet {id} already exists, refusing to create a duplicate")]
    DuplicateWallet { id: WalletId },

    /// Underlying read or write failure.
    #[error("Storage I/O error at {}: {source}", .path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store lock could not be taken.
    #[error("Wallets store lock failed: {0}")]
    Lock(#[from] LockError),
}

impl WalletsError {
    /// Build a `StorageIo` mapper for the given path.
    pub(crate) fn io_at(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::StorageIo { path, source }
    }
}
