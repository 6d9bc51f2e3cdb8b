//! # Error Types
//!
//! Errors shared across subsystems.

use thiserror::Error;

/// Errors raised when parsing a wallet identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletIdError {
    /// Identifier text is not exactly 16 characters long.
    #[error("Wallet id must be 16 hex digits, got {len} characters")]
    InvalidLength { len: usize },

    /// Identifier contains a character that is not a lowercase hex digit.
    #[error("Wallet id contains non-hex text: {text:?}")]
    InvalidDigits { text: String },
}
