//! # Outbound Ports (Driven Ports)
//!
//! Dependencies required by the wallets store.

use rand::RngCore;
use shared_types::WalletId;

/// Source of candidate wallet identifiers.
///
/// The store guarantees uniqueness on its own; a generator only needs to
/// make collisions unlikely. Any `rand` generator qualifies: a seeded one
/// reproduces the same identifiers, which is how collisions are tested.
pub trait IdGenerator: Send {
    /// Next candidate identifier.
    fn next_id(&mut self) -> WalletId;
}

impl<R: RngCore + Send> IdGenerator for R {
    fn next_id(&mut self) -> WalletId {
        WalletId::new(self.next_u64())
    }
}
