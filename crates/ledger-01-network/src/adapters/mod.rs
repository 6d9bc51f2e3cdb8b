//! Adapters Layer
//!
//! Concrete implementations of the driven ports:
//! - `InMemoryRemote` - in-process peer holding the wallets pushed to it
//! - `StaticConfigProvider` - hardcoded push policy
//! - `TomlConfigProvider` - push policy from a TOML file (feature `config`)

pub mod config;
pub mod memory;

pub use config::StaticConfigProvider;
#[cfg(feature = "config")]
pub use config::{ConfigError, TomlConfigProvider};
pub use memory::InMemoryRemote;
