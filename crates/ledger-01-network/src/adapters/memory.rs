//! In-process remote.
//!
//! Holds pushed wallets in memory. Used for local simulations and as a
//! loopback peer when the node replicates to itself.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use shared_types::{Wallet, WalletId};
use tracing::debug;

use crate::domain::{RemoteAddress, RemoteError, Score, SuffixScore};
use crate::ports::Remote;

/// Remote whose storage is a map in this process.
///
/// The score can be replaced at any time, which models a peer whose
/// reputation changes between pushes.
#[derive(Debug)]
pub struct InMemoryRemote {
    address: RemoteAddress,
    score: RwLock<Arc<SuffixScore>>,
    accepting: AtomicBool,
    wallets: RwLock<HashMap<WalletId, Wallet>>,
}

impl InMemoryRemote {
    /// Create an accepting remote with the given score.
    pub fn new(address: RemoteAddress, score: SuffixScore) -> Self {
        Self {
            address,
            score: RwLock::new(Arc::new(score)),
            accepting: AtomicBool::new(true),
            wallets: RwLock::new(HashMap::new()),
        }
    }

    /// Replace the score returned from now on.
    pub fn set_score(&self, score: SuffixScore) {
        *self.score.write() = Arc::new(score);
    }

    /// Start or stop refusing wallets.
    pub fn set_accepting(&self, accepting: bool) {
        self.accepting.store(accepting, Ordering::SeqCst);
    }

    /// A wallet previously added, if any.
    pub fn stored(&self, id: WalletId) -> Option<Wallet> {
        self.wallets.read().get(&id).cloned()
    }

    /// Number of distinct wallets held.
    pub fn len(&self) -> usize {
        self.wallets.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.read().is_empty()
    }
}

#[async_trait]
impl Remote for InMemoryRemote {
    fn address(&self) -> &RemoteAddress {
        &self.address
    }

    async fn score(&self) -> Arc<dyn Score> {
        self.score.read().clone() as Arc<dyn Score>
    }

    async fn add(&self, wallet: &Wallet) -> Result<(), RemoteError> {
        if !self.accepting.load(Ordering::SeqCst) {
            return Err(RemoteError::Rejected {
                address: self.address.clone(),
                reason: "remote is not accepting wallets".to_string(),
            });
        }
        // A later copy of the same wallet replaces the earlier one
        self.wallets.write().insert(wallet.id(), wallet.clone());
        debug!("[ledger-01] {} stored wallet {}", self.address, wallet.id());
        Ok(())
    }
}
