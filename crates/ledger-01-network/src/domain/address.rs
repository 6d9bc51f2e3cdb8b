//! Remote peer addresses.

use std::fmt;
use std::str::FromStr;

use super::errors::AddressError;

/// Network identity of a remote peer (`host:port`).
///
/// Opaque to the selection logic; used to label attempts and log lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteAddress {
    host: String,
    port: u16,
}

impl RemoteAddress {
    /// Port used when an address omits one.
    pub const DEFAULT_PORT: u16 = 4096;

    /// Create an address from host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Host name or IP literal.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// TCP port.
    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for RemoteAddress {
    type Err = AddressError;

    /// Parse `host:port` or a bare `host` (default port).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (host, port) = match s.rsplit_once(':') {
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .ok()
                    .filter(|p| *p != 0)
                    .ok_or_else(|| AddressError::InvalidPort(s.to_string()))?;
                (host, port)
            }
            None => (s, Self::DEFAULT_PORT),
        };
        if host.is_empty() {
            return Err(AddressError::EmptyHost(s.to_string()));
        }
        Ok(Self::new(host, port))
    }
}
