//! Per-attempt results of a push.
//!
//! Every `add` made during a push produces one `PushAttempt`. The attempts
//! are collected into a `PushReport`; `push` drops the report, while
//! `push_report` hands it back for inspection.

use shared_types::WalletId;

use super::address::RemoteAddress;
use super::errors::RemoteError;

/// Outcome of one `add` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The remote accepted the wallet.
    Delivered,
    /// The remote failed; the failure is isolated to this remote.
    Failed(RemoteError),
}

/// One `add` attempt against one ranked remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushAttempt {
    pub address: RemoteAddress,
    /// Score value the remote was ranked by.
    pub score: u64,
    pub outcome: AttemptOutcome,
}

impl PushAttempt {
    pub fn is_delivered(&self) -> bool {
        matches!(self.outcome, AttemptOutcome::Delivered)
    }
}

/// Everything that happened during one push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushReport {
    /// Wallet that was pushed.
    pub wallet: WalletId,
    /// Remotes excluded by the eligibility threshold.
    pub ineligible: usize,
    /// Attempts in rank order (highest score first).
    pub attempts: Vec<PushAttempt>,
}

impl PushReport {
    /// Number of remotes that accepted the wallet.
    pub fn delivered(&self) -> usize {
        self.attempts.iter().filter(|a| a.is_delivered()).count()
    }

    /// Number of remotes that failed.
    pub fn failed(&self) -> usize {
        self.attempts.len() - self.delivered()
    }

    /// Whether no remote was eligible, so nothing was attempted.
    pub fn is_noop(&self) -> bool {
        self.attempts.is_empty()
    }

    /// Failures recorded during the push, in rank order.
    pub fn failures(&self) -> impl Iterator<Item = &RemoteError> {
        self.attempts.iter().filter_map(|a| match &a.outcome {
            AttemptOutcome::Failed(err) => Some(err),
            AttemptOutcome::Delivered => None,
        })
    }
}
