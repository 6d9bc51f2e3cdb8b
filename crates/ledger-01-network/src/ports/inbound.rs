//! # Driving Ports (Inbound API)
//!
//! The public API this subsystem exposes to the rest of the node.

use async_trait::async_trait;
use shared_types::{Wallet, WalletId};

use crate::domain::NetworkError;

/// Replication API of the network.
#[async_trait]
pub trait NetworkApi: Send + Sync {
    /// Replicate `wallet` to every eligible remote, best score first.
    ///
    /// Individual remote failures are recovered internally and never
    /// reported here. With no eligible remote this is a no-op.
    async fn push(&self, wallet: &Wallet);

    /// Fetch a wallet by identifier from the remotes.
    ///
    /// # Errors
    ///
    /// Always `NetworkError::Unsupported`: combining copies from several
    /// remotes needs a merge algorithm that does not exist yet.
    async fn pull(&self, id: WalletId) -> Result<Wallet, NetworkError>;
}
