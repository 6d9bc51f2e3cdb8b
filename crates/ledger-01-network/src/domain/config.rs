//! Network configuration.

use std::time::Duration;

/// How `add` attempts are dispatched once the eligible remotes are ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FanOut {
    /// One remote at a time, in rank order.
    #[default]
    Sequential,
    /// All ranked remotes at once; push waits for every attempt.
    Concurrent,
}

/// Push policy for a `Network`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkConfig {
    /// A remote is eligible only if its score value is strictly greater.
    pub min_score: u64,
    /// Dispatch mode for `add` attempts.
    pub fan_out: FanOut,
    /// Upper bound on a single `add`; `None` waits indefinitely.
    pub add_timeout: Option<Duration>,
}

impl NetworkConfig {
    /// Eligibility threshold (exclusive) used by the live network.
    pub const DEFAULT_MIN_SCORE: u64 = 16;

    /// Set the eligibility threshold.
    #[must_use]
    pub fn with_min_score(mut self, min_score: u64) -> Self {
        self.min_score = min_score;
        self
    }

    /// Set the dispatch mode.
    #[must_use]
    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Bound every `add` by `timeout`.
    #[must_use]
    pub fn with_add_timeout(mut self, timeout: Duration) -> Self {
        self.add_timeout = Some(timeout);
        self
    }

    /// Whether a score value passes the eligibility threshold.
    pub fn is_eligible(&self, value: u64) -> bool {
        value > self.min_score
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            min_score: Self::DEFAULT_MIN_SCORE,
            fan_out: FanOut::Sequential,
            add_timeout: None,
        }
    }
}
