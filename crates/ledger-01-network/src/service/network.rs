use std::sync::Arc;

use futures::future::join_all;
use shared_types::Wallet;
use tracing::{debug, info, warn};

use crate::domain::{
    rank_eligible, AttemptOutcome, FanOut, NetworkConfig, PushAttempt, PushReport, RankedRemote,
    RemoteError,
};
use crate::ports::{ConfigProvider, Remote};

/// Score-ranked replication over a fixed set of remotes.
///
/// # Example
///
/// ```rust,ignore
/// use ledger_01_network::{Network, NetworkApi, NetworkConfig};
///
/// let network = Network::with_config(remotes, NetworkConfig::default());
///
/// // Replicate to every remote scoring above 16, best first
/// network.push(&wallet).await;
/// ```
pub struct Network {
    /// Remotes in construction order; never modified after construction
    remotes: Arc<[Arc<dyn Remote>]>,
    /// Push policy
    config: NetworkConfig,
}

impl Network {
    /// Create a network with the default push policy.
    pub fn new(remotes: impl IntoIterator<Item = Arc<dyn Remote>>) -> Self {
        Self::with_config(remotes, NetworkConfig::default())
    }

    /// Create a network with an explicit push policy.
    pub fn with_config(
        remotes: impl IntoIterator<Item = Arc<dyn Remote>>,
        config: NetworkConfig,
    ) -> Self {
        Self {
            remotes: remotes.into_iter().collect(),
            config,
        }
    }

    /// Create a network whose policy comes from a config provider.
    pub fn from_provider(
        remotes: impl IntoIterator<Item = Arc<dyn Remote>>,
        provider: &dyn ConfigProvider,
    ) -> Self {
        Self::with_config(remotes, provider.network_config())
    }

    /// The remotes this network was built with.
    pub fn remotes(&self) -> &[Arc<dyn Remote>] {
        &self.remotes
    }

    /// The push policy.
    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Snapshot every remote's score and rank the eligible ones.
    ///
    /// Each remote's `score()` is read exactly once. The returned indices
    /// point into `remotes()`.
    pub async fn rank(&self) -> Vec<RankedRemote> {
        let scores = join_all(self.remotes.iter().map(|remote| remote.score())).await;
        let values: Vec<u64> = scores.iter().map(|score| score.value()).collect();
        let ranked = rank_eligible(&values, self.config.min_score);

        debug!(
            "[ledger-01] Ranked {} of {} remotes above score {}",
            ranked.len(),
            self.remotes.len(),
            self.config.min_score
        );
        ranked
    }

    /// Push `wallet` and return what happened to every attempt.
    ///
    /// Ranking is done once, before any `add` is issued. Every ranked remote
    /// gets exactly one attempt, whatever happened to the others.
    pub async fn push_report(&self, wallet: &Wallet) -> PushReport {
        let ranked = self.rank().await;
        let ineligible = self.remotes.len() - ranked.len();

        if ranked.is_empty() {
            info!(
                "[ledger-01] No remote scores above {}, wallet {} not pushed",
                self.config.min_score,
                wallet.id()
            );
            return PushReport {
                wallet: wallet.id(),
                ineligible,
                attempts: Vec::new(),
            };
        }

        let outcomes = match self.config.fan_out {
            FanOut::Sequential => {
                let mut outcomes = Vec::with_capacity(ranked.len());
                for entry in &ranked {
                    outcomes.push(self.attempt(self.remotes[entry.index].as_ref(), wallet).await);
                }
                outcomes
            }
            FanOut::Concurrent => {
                join_all(
                    ranked
                        .iter()
                        .map(|entry| self.attempt(self.remotes[entry.index].as_ref(), wallet)),
                )
                .await
            }
        };

        let attempts: Vec<PushAttempt> = ranked
            .iter()
            .zip(outcomes)
            .map(|(entry, result)| {
                let address = self.remotes[entry.index].address().clone();
                let outcome = match result {
                    Ok(()) => {
                        debug!(
                            "[ledger-01] Wallet {} delivered to {} (score {})",
                            wallet.id(),
                            address,
                            entry.value
                        );
                        AttemptOutcome::Delivered
                    }
                    Err(err) => {
                        warn!("[ledger-01] Push of wallet {} failed: {}", wallet.id(), err);
                        AttemptOutcome::Failed(err)
                    }
                };
                PushAttempt {
                    address,
                    score: entry.value,
                    outcome,
                }
            })
            .collect();

        let report = PushReport {
            wallet: wallet.id(),
            ineligible,
            attempts,
        };
        info!(
            "[ledger-01] Pushed wallet {}: {} delivered, {} failed, {} ineligible",
            report.wallet,
            report.delivered(),
            report.failed(),
            report.ineligible
        );
        report
    }

    /// One `add`, bounded by the per-remote timeout when configured.
    async fn attempt(&self, remote: &dyn Remote, wallet: &Wallet) -> Result<(), RemoteError> {
        match self.config.add_timeout {
            Some(limit) => tokio::time::timeout(limit, remote.add(wallet))
                .await
                .unwrap_or_else(|_| {
                    Err(RemoteError::Timeout {
                        address: remote.address().clone(),
                        after: limit,
                    })
                }),
            None => remote.add(wallet).await,
        }
    }
}

impl std::fmt::Debug for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Network")
            .field(
                "remotes",
                &self
                    .remotes
                    .iter()
                    .map(|remote| remote.address().to_string())
                    .collect::<Vec<_>>(),
            )
            .field("config", &self.config)
            .finish()
    }
}
