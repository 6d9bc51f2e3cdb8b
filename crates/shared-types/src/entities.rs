//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Identity**: `WalletId`
//! - **Ledger State**: `Wallet`

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WalletIdError;

// =============================================================================
// IDENTITY
// =============================================================================

/// Unique identifier of a wallet.
///
/// The canonical text form is 16 lowercase hex digits, zero padded
/// (`000000000000002a` for 42). Uniqueness is enforced by the wallets store,
/// never by the identifier itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletId(pub u64);

impl WalletId {
    /// Length of the canonical text form.
    pub const TEXT_LEN: usize = 16;

    /// Wrap a raw identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value.
    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for WalletId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for WalletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl FromStr for WalletId {
    type Err = WalletIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != Self::TEXT_LEN {
            return Err(WalletIdError::InvalidLength { len: s.len() });
        }
        // from_str_radix alone would accept '+' and uppercase digits
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(WalletIdError::InvalidDigits { text: s.to_string() });
        }
        u64::from_str_radix(s, 16)
            .map(Self)
            .map_err(|_| WalletIdError::InvalidDigits { text: s.to_string() })
    }
}

// =============================================================================
// LEDGER STATE
// =============================================================================

/// An identified unit of ledger state.
///
/// The content is opaque to the network and to the store; it is carried
/// byte-for-byte between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wallet {
    id: WalletId,
    content: Vec<u8>,
}

impl Wallet {
    /// Network name written on the first line of a blank wallet.
    pub const NETWORK: &'static str = "ledger";

    /// Record format version written on the second line of a blank wallet.
    pub const PROTOCOL: u32 = 1;

    /// Create a wallet from an identifier and its raw content.
    pub fn new(id: WalletId, content: impl Into<Vec<u8>>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    /// Create a freshly allocated wallet with no ledger entries.
    ///
    /// The body holds the network name, protocol version and identifier,
    /// one per line, followed by an empty line.
    pub fn blank(id: WalletId) -> Self {
        let content = format!("{}\n{}\n{}\n\n", Self::NETWORK, Self::PROTOCOL, id);
        Self::new(id, content.into_bytes())
    }

    /// The wallet identifier.
    pub fn id(&self) -> WalletId {
        self.id
    }

    /// The raw wallet content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Consume the wallet, returning its raw content.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }
}
