//! # Network Subsystem (ledger-01)
//!
//! Peer selection and wallet replication for the ledger node.
//!
//! Every remote peer carries a reputation `Score`: the number of
//! proof-of-work suffixes it presents. A push ranks the remotes by score,
//! keeps only those scoring strictly above the eligibility threshold (16),
//! and offers the wallet to each of them, best first. A failing remote never
//! stops the push and is never reported to the caller.
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture with:
//! - **Domain Layer:** scores, ranking, push results (no I/O)
//! - **Ports Layer:** `NetworkApi` (inbound), `Remote` and `ConfigProvider` (outbound)
//! - **Service Layer:** `Network`, wiring the domain to the ports
//! - **Adapters Layer:** in-memory remote, static and TOML configuration
//!
//! ## Invariants
//!
//! | Invariant | Description |
//! |-----------|-------------|
//! | Exclusive threshold | A remote is attempted only if its score value > `min_score` |
//! | Single snapshot | Scores are read once per push, before any `add` |
//! | Isolation | A remote failure never aborts the push or reaches the caller |
//! | One attempt | Each ranked remote gets exactly one `add` per push |
//! | No pull | `pull` fails with `Unsupported` for every input |
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use ledger_01_network::{InMemoryRemote, Network, NetworkApi, Remote, RemoteAddress, SuffixScore};
//! use shared_types::{Wallet, WalletId};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(async {
//! let strong: SuffixScore = (0..20).map(|i| i.to_string()).collect();
//! let peer = Arc::new(InMemoryRemote::new(RemoteAddress::new("10.0.0.1", 4096), strong));
//!
//! let network = Network::new([peer.clone() as Arc<dyn Remote>]);
//! network.push(&Wallet::blank(WalletId::new(1))).await;
//!
//! assert_eq!(peer.len(), 1);
//! # });
//! ```

// =============================================================================
// CORE MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Test utilities (ScriptedRemote, score_of).
/// Requires feature: `test-utils`
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use domain::{
    rank_eligible, AddressError, AttemptOutcome, FanOut, NetworkConfig, NetworkError, PushAttempt,
    PushReport, RankedRemote, RemoteAddress, RemoteError, Score, SuffixScore,
};

pub use ports::{ConfigProvider, NetworkApi, Remote};

pub use service::Network;

pub use adapters::{InMemoryRemote, StaticConfigProvider};
#[cfg(feature = "config")]
pub use adapters::{ConfigError, TomlConfigProvider};
