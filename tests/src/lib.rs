//! # Ledger Node Test Suite
//!
//! Cross-subsystem tests that run the wallet store and the network
//! together.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Store -> network flows
//!     └── flows.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ledger-tests
//!
//! # With logs
//! RUST_LOG=debug cargo test -p ledger-tests -- --nocapture
//! ```

pub mod integration;

use tracing_subscriber::EnvFilter;

/// Install a test subscriber honoring `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
