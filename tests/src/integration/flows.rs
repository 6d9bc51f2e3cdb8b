//! # Store → Network Flows
//!
//! Wallets created in a directory store are replicated to the remotes a
//! `Network` ranks as eligible.
//!
//! ## Flow Tested:
//!
//! 1. **Wallets (02)**: `create` allocates a record, `iterate` reads it back
//! 2. **Network (01)**: `push` offers each wallet to remotes scoring above 16
//! 3. **Isolation**: rejecting or hung remotes never fail the flow

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use ledger_01_network::test_utils::{score_of, Reaction, ScriptedRemote};
    use ledger_01_network::{
        InMemoryRemote, Network, NetworkApi, NetworkError, Remote, RemoteAddress,
        TomlConfigProvider,
    };
    use ledger_02_wallets::{Wallets, WalletsError, WalletsIn};
    use shared_types::WalletId;

    use crate::init_tracing;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn peer(host: &str, score: u64) -> Arc<InMemoryRemote> {
        Arc::new(InMemoryRemote::new(
            RemoteAddress::new(host, RemoteAddress::DEFAULT_PORT),
            score_of(score),
        ))
    }

    fn as_remote<R: Remote + 'static>(remote: &Arc<R>) -> Arc<dyn Remote> {
        remote.clone()
    }

    // =============================================================================
    // INTEGRATION TESTS
    // =============================================================================

    #[tokio::test]
    async fn test_created_wallets_reach_only_eligible_peers() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let store = WalletsIn::new(dir.path());
        let first = store.create().unwrap();
        let second = store.create().unwrap();

        let strong = peer("10.0.0.1", 24);
        let weak = peer("10.0.0.2", 16);
        let network = Network::new([as_remote(&strong), as_remote(&weak)]);

        for wallet in store.iterate().unwrap() {
            network.push(&wallet.unwrap()).await;
        }

        assert_eq!(strong.len(), 2);
        assert_eq!(strong.stored(first.id()), Some(first));
        assert_eq!(strong.stored(second.id()), Some(second));
        assert!(weak.is_empty());
    }

    #[tokio::test]
    async fn test_flow_survives_failing_peers() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let store = WalletsIn::new(dir.path());
        let wallet = store.create().unwrap();

        let down = ScriptedRemote::failing("down", 90).shared();
        let refusing = peer("refusing", 50);
        refusing.set_accepting(false);
        let healthy = peer("healthy", 17);
        let network = Network::new([
            as_remote(&healthy),
            as_remote(&down),
            as_remote(&refusing),
        ]);

        let report = network.push_report(&wallet).await;

        assert_eq!(report.failed(), 2);
        assert_eq!(report.delivered(), 1);
        assert_eq!(healthy.stored(wallet.id()), Some(wallet));
        assert!(refusing.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toml_configured_network_times_out_hung_peer() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let wallet = WalletsIn::new(dir.path()).create().unwrap();

        let provider = TomlConfigProvider::parse(
            r#"
            [network]
            min_score = 10
            fan_out = "concurrent"
            add_timeout_ms = 250
            "#,
        )
        .unwrap();
        let hung = ScriptedRemote::new("hung", 30)
            .with_reaction(Reaction::Stall(Duration::from_secs(30)))
            .shared();
        let modest = peer("modest", 12);
        let network = Network::from_provider([as_remote(&hung), as_remote(&modest)], &provider);

        let report = network.push_report(&wallet).await;

        assert_eq!(report.attempts.len(), 2);
        assert_eq!(report.delivered(), 1);
        assert_eq!(modest.len(), 1);
        assert!(hung.received().is_empty());
    }

    #[tokio::test]
    async fn test_pull_cannot_recover_stored_wallet() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let store = WalletsIn::new(dir.path());
        let wallet = store.create().unwrap();
        let holder = peer("holder", 40);
        let network = Network::new([as_remote(&holder)]);
        network.push(&wallet).await;

        let err = network.pull(wallet.id()).await.unwrap_err();

        assert!(matches!(err, NetworkError::Unsupported { id, .. } if id == wallet.id()));
        assert!(holder.stored(wallet.id()).is_some());
        assert_eq!(store.find(wallet.id()).unwrap(), Some(wallet));
    }

    #[tokio::test]
    async fn test_replayed_seed_is_refused_and_original_kept() {
        init_tracing();
        let dir = tempfile::tempdir().unwrap();
        let original = WalletsIn::seeded(dir.path(), 3).create().unwrap();

        let replay = WalletsIn::seeded(dir.path(), 3).create();

        assert!(matches!(
            replay,
            Err(WalletsError::DuplicateWallet { id }) if id == original.id()
        ));
        let ids: Vec<WalletId> = WalletsIn::new(dir.path())
            .iterate()
            .unwrap()
            .map(|w| w.unwrap().id())
            .collect();
        assert_eq!(ids, vec![original.id()]);
    }
}
