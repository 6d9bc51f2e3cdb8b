//! Test utilities for the network.
//!
//! Scripted remotes with a fixed score and a fixed reaction to `add`, which
//! record every call made to them. Enable with the `test-utils` feature flag.
//!
//! # Example
//!
//! ```rust
//! use ledger_01_network::test_utils::ScriptedRemote;
//!
//! let remote = ScriptedRemote::failing("10.0.0.1", 12);
//! assert_eq!(remote.add_calls(), 0);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared_types::{Wallet, WalletId};

use crate::domain::{RemoteAddress, RemoteError, Score, SuffixScore};
use crate::ports::Remote;

/// Build a score with exactly `value` suffixes.
pub fn score_of(value: u64) -> SuffixScore {
    (0..value).map(|i| format!("{i:08x}")).collect()
}

/// How a scripted remote reacts to `add`.
#[derive(Debug, Clone)]
pub enum Reaction {
    /// Accept the wallet.
    Accept,
    /// Refuse the wallet with the given reason.
    Reject(String),
    /// Fail as if the peer were unreachable.
    Unavailable(String),
    /// Sleep for the given time, then accept.
    Stall(Duration),
}

/// Remote test double with a scripted score and `add` reaction.
#[derive(Debug)]
pub struct ScriptedRemote {
    address: RemoteAddress,
    score: Arc<SuffixScore>,
    reaction: Reaction,
    add_calls: AtomicUsize,
    score_calls: AtomicUsize,
    received: Mutex<Vec<WalletId>>,
}

impl ScriptedRemote {
    /// A remote at `host` that accepts every wallet.
    pub fn new(host: &str, score: u64) -> Self {
        Self {
            address: RemoteAddress::new(host, RemoteAddress::DEFAULT_PORT),
            score: Arc::new(score_of(score)),
            reaction: Reaction::Accept,
            add_calls: AtomicUsize::new(0),
            score_calls: AtomicUsize::new(0),
            received: Mutex::new(Vec::new()),
        }
    }

    /// A remote at `host` whose `add` always fails as unreachable.
    pub fn failing(host: &str, score: u64) -> Self {
        Self::new(host, score).with_reaction(Reaction::Unavailable("connection refused".into()))
    }

    /// Replace the `add` reaction.
    #[must_use]
    pub fn with_reaction(mut self, reaction: Reaction) -> Self {
        self.reaction = reaction;
        self
    }

    /// Wrap in an `Arc` for sharing with a `Network`.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// How many times `add` was called.
    pub fn add_calls(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }

    /// How many times `score` was called.
    pub fn score_calls(&self) -> usize {
        self.score_calls.load(Ordering::SeqCst)
    }

    /// Identifiers of wallets this remote accepted.
    pub fn received(&self) -> Vec<WalletId> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl Remote for ScriptedRemote {
    fn address(&self) -> &RemoteAddress {
        &self.address
    }

    async fn score(&self) -> Arc<dyn Score> {
        self.score_calls.fetch_add(1, Ordering::SeqCst);
        self.score.clone() as Arc<dyn Score>
    }

    async fn add(&self, wallet: &Wallet) -> Result<(), RemoteError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        match &self.reaction {
            Reaction::Accept => {}
            Reaction::Reject(reason) => {
                return Err(RemoteError::Rejected {
                    address: self.address.clone(),
                    reason: reason.clone(),
                })
            }
            Reaction::Unavailable(reason) => {
                return Err(RemoteError::Unavailable {
                    address: self.address.clone(),
                    reason: reason.clone(),
                })
            }
            Reaction::Stall(delay) => tokio::time::sleep(*delay).await,
        }
        self.received.lock().push(wallet.id());
        Ok(())
    }
}
