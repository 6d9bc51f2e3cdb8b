use crate::domain::NetworkConfig;
use crate::ports::ConfigProvider;

// ============================================================================
// StaticConfigProvider - Hardcoded config for testing/development
// ============================================================================

/// Configuration provider with a fixed push policy.
///
/// For deployments, use `TomlConfigProvider`.
#[derive(Debug, Clone, Default)]
pub struct StaticConfigProvider {
    config: NetworkConfig,
}

impl StaticConfigProvider {
    /// Create with the default push policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with the given push policy.
    #[must_use]
    pub fn with_config(mut self, config: NetworkConfig) -> Self {
        self.config = config;
        self
    }
}

impl ConfigProvider for StaticConfigProvider {
    fn network_config(&self) -> NetworkConfig {
        self.config.clone()
    }
}

// ============================================================================
// TomlConfigProvider - File-based config loading (requires "config" feature)
// ============================================================================

#[cfg(feature = "config")]
mod toml_config {
    use super::*;
    use crate::domain::FanOut;
    use serde::Deserialize;
    use std::fs;
    use std::path::Path;
    use std::time::Duration;
    use thiserror::Error;

    /// Configuration file structure.
    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct ConfigFile {
        #[serde(default)]
        network: NetworkSection,
    }

    #[derive(Debug, Deserialize, Default)]
    #[serde(deny_unknown_fields)]
    struct NetworkSection {
        min_score: Option<u64>,
        fan_out: Option<String>,
        add_timeout_ms: Option<u64>,
    }

    /// TOML-based configuration provider.
    ///
    /// # Config File Format
    ///
    /// ```toml
    /// [network]
    /// min_score = 16
    /// fan_out = "concurrent"   # or "sequential"
    /// add_timeout_ms = 5000
    /// ```
    ///
    /// Every key is optional; missing keys take the `NetworkConfig` defaults.
    #[derive(Debug, Clone)]
    pub struct TomlConfigProvider {
        config: NetworkConfig,
    }

    impl TomlConfigProvider {
        /// Load configuration from a TOML file.
        ///
        /// # Errors
        ///
        /// Returns error if the file cannot be read or parsed.
        pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
            let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
                path: path.as_ref().display().to_string(),
                error: e.to_string(),
            })?;

            Self::parse(&content)
        }

        /// Parse configuration from a TOML string.
        pub fn parse(content: &str) -> Result<Self, ConfigError> {
            let file: ConfigFile =
                toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

            let section = file.network;
            let defaults = NetworkConfig::default();

            let fan_out = match section.fan_out.as_deref() {
                None => defaults.fan_out,
                Some("sequential") => FanOut::Sequential,
                Some("concurrent") => FanOut::Concurrent,
                Some(other) => {
                    return Err(ConfigError::Invalid(format!(
                        "fan_out must be \"sequential\" or \"concurrent\", got {other:?}"
                    )))
                }
            };

            let add_timeout = match section.add_timeout_ms {
                Some(0) => {
                    return Err(ConfigError::Invalid(
                        "add_timeout_ms must be greater than zero".to_string(),
                    ))
                }
                Some(ms) => Some(Duration::from_millis(ms)),
                None => defaults.add_timeout,
            };

            Ok(Self {
                config: NetworkConfig {
                    min_score: section.min_score.unwrap_or(defaults.min_score),
                    fan_out,
                    add_timeout,
                },
            })
        }
    }

    impl ConfigProvider for TomlConfigProvider {
        fn network_config(&self) -> NetworkConfig {
            self.config.clone()
        }
    }

    /// Errors that can occur during config loading.
    #[derive(Debug, Clone, Error)]
    pub enum ConfigError {
        /// File I/O error.
        #[error("Failed to read {path}: {error}")]
        Io {
            /// Path of the file that failed to load.
            path: String,
            /// Error message from the I/O operation.
            error: String,
        },
        /// TOML parsing error.
        #[error("Failed to parse config: {0}")]
        Parse(String),
        /// Well-formed TOML with an out-of-range value.
        #[error("Invalid config: {0}")]
        Invalid(String),
    }
}

#[cfg(feature = "config")]
pub use toml_config::{ConfigError, TomlConfigProvider};
