//! # Wallets Store (ledger-02)
//!
//! Local, directory-backed collection of wallets. Each wallet is one record
//! file named after its identifier; the store enumerates records and
//! creates new wallets with identifiers no other record in the store uses.
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Unique Identifiers | No two records share an identifier |
//! | 2 | No Overwrite | A colliding create fails with `DuplicateWallet`; the existing record is untouched |
//! | 3 | Atomic Visibility | A record is visible complete or not at all |
//! | 4 | Fresh Enumeration | Every `iterate` re-scans the root |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Record naming and error taxonomy
//! - `ports/` - `Wallets` (inbound API), `IdGenerator` (outbound SPI)
//! - `service/` - `WalletsIn`, the directory implementation
//! - `adapters/` - `StoreLock`, process-level locking via `fs2`
//!
//! ## Usage
//!
//! ```
//! use ledger_02_wallets::{Wallets, WalletsIn};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let wallets = WalletsIn::new(dir.path());
//!
//! let wallet = wallets.create().unwrap();
//! let ids: Vec<_> = wallets
//!     .iterate()
//!     .unwrap()
//!     .map(|w| w.unwrap().id())
//!     .collect();
//! assert_eq!(ids, vec![wallet.id()]);
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-export key types for convenience
pub use adapters::{LockError, StoreLock};
pub use domain::errors::WalletsError;
pub use domain::record::{record_file_name, record_id, RECORD_EXTENSION};
pub use ports::{IdGenerator, WalletStream, Wallets};
pub use service::WalletsIn;
