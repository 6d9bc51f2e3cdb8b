//! # Driven Ports (Outbound SPI)
//!
//! These are the interfaces this subsystem **requires** the host application
//! to implement.

use std::sync::Arc;

use async_trait::async_trait;
use shared_types::{Wallet, WalletId};

use crate::domain::{NetworkConfig, RemoteAddress, RemoteError, Score};

/// Handle to one remote peer.
///
/// The transport behind it (HTTP, QUIC, in-process) is the implementor's
/// concern. The network only reads scores and calls `add`.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`: in concurrent fan-out every
/// remote's `add` runs at the same time as the others.
///
/// # Example Implementation
///
/// ```rust,ignore
/// struct HttpRemote {
///     address: RemoteAddress,
///     client: HttpClient,
/// }
///
/// #[async_trait]
/// impl Remote for HttpRemote {
///     fn address(&self) -> &RemoteAddress {
///         &self.address
///     }
///
///     async fn score(&self) -> Arc<dyn Score> {
///         // GET / and parse the score header
///         todo!()
///     }
///
///     async fn add(&self, wallet: &Wallet) -> Result<(), RemoteError> {
///         // PUT /wallet/<id> with the wallet content
///         todo!()
///     }
/// }
/// ```
#[async_trait]
pub trait Remote: Send + Sync {
    /// Network identity of this peer.
    fn address(&self) -> &RemoteAddress;

    /// Current reputation snapshot.
    ///
    /// May differ between calls; the network reads it once per push.
    async fn score(&self) -> Arc<dyn Score>;

    /// Replicate `wallet` to this peer.
    ///
    /// # Errors
    ///
    /// `RemoteError::Unavailable` on transport failure,
    /// `RemoteError::Rejected` when the peer refuses the wallet.
    async fn add(&self, wallet: &Wallet) -> Result<(), RemoteError>;

    /// Query this peer for a wallet.
    ///
    /// # Errors
    ///
    /// Pulling is not supported; the default fails immediately with
    /// `RemoteError::Unsupported`.
    async fn wallet(&self, _id: WalletId) -> Result<Wallet, RemoteError> {
        Err(RemoteError::Unsupported {
            address: self.address().clone(),
            operation: "wallet",
        })
    }
}

/// Source of the push policy.
///
/// Allows different configuration sources (file, static values).
pub trait ConfigProvider: Send + Sync {
    /// Push policy for the network.
    fn network_config(&self) -> NetworkConfig;
}
