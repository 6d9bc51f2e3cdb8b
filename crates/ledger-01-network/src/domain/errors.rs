//! Domain Errors for the Network subsystem
//!
//! Remote-level errors are the only class the network recovers from; every
//! other error is surfaced to the caller unchanged.

use std::time::Duration;

use shared_types::WalletId;
use thiserror::Error;

use super::address::RemoteAddress;

/// Failure of a single remote operation.
///
/// During `push` these are always recovered: recorded against the remote
/// in the push report and never returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Transport failure: the remote could not be reached.
    #[error("Remote {address} unavailable: {reason}")]
    Unavailable { address: RemoteAddress, reason: String },

    /// The remote answered but refused the wallet.
    #[error("Remote {address} rejected the wallet: {reason}")]
    Rejected { address: RemoteAddress, reason: String },

    /// The remote did not answer within the configured per-remote timeout.
    #[error("Remote {address} timed out after {after:?}")]
    Timeout { address: RemoteAddress, after: Duration },

    /// The remote has no implementation of the requested operation.
    #[error("Remote {address} does not support {operation}")]
    Unsupported {
        address: RemoteAddress,
        operation: &'static str,
    },
}

impl RemoteError {
    /// Address of the remote that failed.
    pub fn address(&self) -> &RemoteAddress {
        match self {
            Self::Unavailable { address, .. }
            | Self::Rejected { address, .. }
            | Self::Timeout { address, .. }
            | Self::Unsupported { address, .. } => address,
        }
    }
}

/// Errors surfaced by the network to its callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The operation has no defined semantics yet.
    ///
    /// Pulling a wallet would require merging copies from several remotes,
    /// and no merge algorithm exists.
    #[error("Network does not support {operation} (wallet {id})")]
    Unsupported {
        operation: &'static str,
        id: WalletId,
    },
}

/// Errors raised when parsing a remote address.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The host part is empty.
    #[error("Remote address has an empty host: {0:?}")]
    EmptyHost(String),

    /// The port is not a number in 1..=65535.
    #[error("Remote address has an invalid port: {0:?}")]
    InvalidPort(String),
}
