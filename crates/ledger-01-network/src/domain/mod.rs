//! Domain Layer - Pure selection logic with no I/O
//!
//! This module contains:
//! - Peer reputation scores (suffix counting)
//! - Remote addresses
//! - Eligibility filtering and ranking
//! - Per-attempt push results
//! - Push policy configuration

pub mod address;
pub mod config;
pub mod errors;
pub mod push;
pub mod ranking;
pub mod score;

pub use address::*;
pub use config::*;
pub use errors::*;
pub use push::*;
pub use ranking::*;
pub use score::*;
