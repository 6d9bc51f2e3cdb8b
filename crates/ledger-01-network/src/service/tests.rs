//! Tests for the Network service

use std::sync::Arc;
use std::time::Duration;

use shared_types::{Wallet, WalletId};

use super::*;
use crate::adapters::StaticConfigProvider;
use crate::domain::{AttemptOutcome, FanOut, NetworkConfig, NetworkError, RemoteError};
use crate::ports::{NetworkApi, Remote};
use crate::test_utils::{Reaction, ScriptedRemote};

fn wallet() -> Wallet {
    Wallet::blank(WalletId::new(0x2a))
}

fn dyn_remote(remote: &Arc<ScriptedRemote>) -> Arc<dyn Remote> {
    remote.clone()
}

// =========================================================================
// TEST GROUP 1: Eligibility
// =========================================================================

#[tokio::test]
async fn test_push_reaches_only_the_high_score_remote() {
    let high = ScriptedRemote::new("high", 20).shared();
    let medium = ScriptedRemote::failing("medium", 10).shared();
    let low = ScriptedRemote::failing("low", 5).shared();
    let network = Network::new([dyn_remote(&high), dyn_remote(&medium), dyn_remote(&low)]);

    network.push(&wallet()).await;

    assert_eq!(high.add_calls(), 1);
    assert_eq!(high.received(), vec![WalletId::new(0x2a)]);
    assert_eq!(medium.add_calls(), 0);
    assert_eq!(low.add_calls(), 0);
}

#[tokio::test]
async fn test_push_with_no_eligible_remote_is_noop() {
    let only = ScriptedRemote::failing("only", 15).shared();
    let network = Network::new([dyn_remote(&only)]);

    let report = network.push_report(&wallet()).await;

    assert!(report.is_noop());
    assert_eq!(report.ineligible, 1);
    assert_eq!(only.add_calls(), 0);
}

#[tokio::test]
async fn test_threshold_boundary_sixteen_seventeen_zero() {
    let at = ScriptedRemote::new("at", 16).shared();
    let above = ScriptedRemote::new("above", 17).shared();
    let zero = ScriptedRemote::new("zero", 0).shared();
    let network = Network::new([dyn_remote(&at), dyn_remote(&above), dyn_remote(&zero)]);

    network.push(&wallet()).await;

    assert_eq!(at.add_calls(), 0);
    assert_eq!(above.add_calls(), 1);
    assert_eq!(zero.add_calls(), 0);
}

#[tokio::test]
async fn test_custom_threshold_from_provider() {
    let remote = ScriptedRemote::new("r", 5).shared();
    let provider =
        StaticConfigProvider::new().with_config(NetworkConfig::default().with_min_score(4));
    let network = Network::from_provider([dyn_remote(&remote)], &provider);

    network.push(&wallet()).await;

    assert_eq!(remote.add_calls(), 1);
}

// =========================================================================
// TEST GROUP 2: Failure Isolation
// =========================================================================

#[tokio::test]
async fn test_failures_do_not_stop_later_remotes() {
    let first = ScriptedRemote::failing("first", 40).shared();
    let second = ScriptedRemote::new("second", 30)
        .with_reaction(Reaction::Reject("stale copy".into()))
        .shared();
    let third = ScriptedRemote::new("third", 20).shared();
    let network = Network::new([dyn_remote(&third), dyn_remote(&first), dyn_remote(&second)]);

    let report = network.push_report(&wallet()).await;

    let order: Vec<&str> = report.attempts.iter().map(|a| a.address.host()).collect();
    assert_eq!(order, vec!["first", "second", "third"]);
    assert_eq!(report.delivered(), 1);
    assert_eq!(report.failed(), 2);
    assert!(matches!(
        report.attempts[0].outcome,
        AttemptOutcome::Failed(RemoteError::Unavailable { .. })
    ));
    assert!(matches!(
        report.attempts[1].outcome,
        AttemptOutcome::Failed(RemoteError::Rejected { .. })
    ));
    assert_eq!(third.add_calls(), 1);
}

#[tokio::test]
async fn test_push_returns_when_every_remote_fails() {
    let remotes: Vec<Arc<ScriptedRemote>> = (0..4)
        .map(|i| ScriptedRemote::failing(&format!("peer{i}"), 17 + i).shared())
        .collect();
    let network = Network::new(remotes.iter().map(dyn_remote));

    network.push(&wallet()).await;

    for remote in &remotes {
        assert_eq!(remote.add_calls(), 1);
    }
}

#[tokio::test]
async fn test_every_eligible_remote_is_attempted_after_success() {
    let a = ScriptedRemote::new("a", 50).shared();
    let b = ScriptedRemote::new("b", 25).shared();
    let network = Network::new([dyn_remote(&b), dyn_remote(&a)]);

    let report = network.push_report(&wallet()).await;

    assert_eq!(report.delivered(), 2);
    assert_eq!(a.add_calls(), 1);
    assert_eq!(b.add_calls(), 1);
}

// =========================================================================
// TEST GROUP 3: Snapshot & Ordering
// =========================================================================

#[tokio::test]
async fn test_scores_are_read_once_per_push() {
    let a = ScriptedRemote::new("a", 30).shared();
    let b = ScriptedRemote::new("b", 3).shared();
    let network = Network::new([dyn_remote(&a), dyn_remote(&b)]);

    network.push(&wallet()).await;

    assert_eq!(a.score_calls(), 1);
    assert_eq!(b.score_calls(), 1);
}

#[tokio::test]
async fn test_ties_are_attempted_in_collection_order() {
    let a = ScriptedRemote::new("a", 20).shared();
    let b = ScriptedRemote::new("b", 20).shared();
    let c = ScriptedRemote::new("c", 20).shared();
    let network = Network::new([dyn_remote(&a), dyn_remote(&b), dyn_remote(&c)]);

    let first = network.push_report(&wallet()).await;
    let second = network.push_report(&wallet()).await;

    let hosts = |r: &crate::domain::PushReport| {
        r.attempts
            .iter()
            .map(|a| a.address.host().to_string())
            .collect::<Vec<_>>()
    };
    assert_eq!(hosts(&first), vec!["a", "b", "c"]);
    assert_eq!(hosts(&first), hosts(&second));
}

#[tokio::test]
async fn test_push_leaves_wallet_and_remotes_untouched() {
    let a = ScriptedRemote::new("a", 18).shared();
    let network = Network::new([dyn_remote(&a)]);
    let wallet = wallet();
    let before = wallet.clone();

    network.push(&wallet).await;

    assert_eq!(wallet, before);
    assert_eq!(network.remotes().len(), 1);
}

// =========================================================================
// TEST GROUP 4: Concurrent Fan-Out
// =========================================================================

#[tokio::test]
async fn test_concurrent_fan_out_attempts_all_ranked_remotes() {
    let a = ScriptedRemote::new("a", 19).shared();
    let b = ScriptedRemote::failing("b", 29).shared();
    let c = ScriptedRemote::new("c", 9).shared();
    let config = NetworkConfig::default().with_fan_out(FanOut::Concurrent);
    let network = Network::with_config([dyn_remote(&a), dyn_remote(&b), dyn_remote(&c)], config);

    let report = network.push_report(&wallet()).await;

    assert_eq!(report.attempts.len(), 2);
    assert_eq!(report.attempts[0].address.host(), "b");
    assert_eq!(report.attempts[1].address.host(), "a");
    assert_eq!(c.add_calls(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_timeout_isolates_hung_remote() {
    let hung = ScriptedRemote::new("hung", 40)
        .with_reaction(Reaction::Stall(Duration::from_secs(3600)))
        .shared();
    let fast = ScriptedRemote::new("fast", 20).shared();
    let config = NetworkConfig::default()
        .with_fan_out(FanOut::Concurrent)
        .with_add_timeout(Duration::from_secs(5));
    let network = Network::with_config([dyn_remote(&hung), dyn_remote(&fast)], config);

    let report = network.push_report(&wallet()).await;

    assert!(matches!(
        report.attempts[0].outcome,
        AttemptOutcome::Failed(RemoteError::Timeout { .. })
    ));
    assert!(report.attempts[1].is_delivered());
    assert!(hung.received().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_sequential_timeout_moves_to_next_remote() {
    let hung = ScriptedRemote::new("hung", 40)
        .with_reaction(Reaction::Stall(Duration::from_secs(60)))
        .shared();
    let next = ScriptedRemote::new("next", 30).shared();
    let config = NetworkConfig::default().with_add_timeout(Duration::from_secs(1));
    let network = Network::with_config([dyn_remote(&hung), dyn_remote(&next)], config);

    let report = network.push_report(&wallet()).await;

    assert_eq!(report.delivered(), 1);
    assert_eq!(next.received(), vec![WalletId::new(0x2a)]);
}

// =========================================================================
// TEST GROUP 5: Pull
// =========================================================================

#[tokio::test]
async fn test_pull_unsupported_on_empty_network() {
    let network = Network::new(Vec::<Arc<dyn Remote>>::new());

    let err = network.pull(WalletId::new(1)).await.unwrap_err();

    assert_eq!(
        err,
        NetworkError::Unsupported {
            operation: "pull",
            id: WalletId::new(1)
        }
    );
}

#[tokio::test]
async fn test_pull_unsupported_without_touching_remotes() {
    let a = ScriptedRemote::new("a", 99).shared();
    let network = Network::new([dyn_remote(&a)]);

    for raw in [0, 1, u64::MAX] {
        assert!(network.pull(WalletId::new(raw)).await.is_err());
    }
    assert_eq!(a.score_calls(), 0);
    assert_eq!(a.add_calls(), 0);
}
