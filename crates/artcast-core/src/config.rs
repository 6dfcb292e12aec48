//! Sender configuration.
//!
//! Defaults target the IPv4 limited-broadcast address on the registered
//! Art-Net port, universe 0. Configuration files are JSON; every field is
//! optional and falls back to its default.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::protocols::artnet::Universe;

/// Default destination: IPv4 limited broadcast.
pub const DEFAULT_HOST: &str = "255.255.255.255";
/// Registered Art-Net UDP port.
pub const DEFAULT_PORT: u16 = 6454;

/// Destination host and port.
///
/// # Examples
/// ```
/// use artcast_core::Endpoint;
///
/// let endpoint = Endpoint::default();
/// assert_eq!(endpoint.to_string(), "255.255.255.255:6454");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Endpoint {
    /// IPv4 dotted-quad or hostname.
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Initial state of a sender.
///
/// # Examples
/// ```
/// use artcast_core::{SenderConfig, Universe};
///
/// let config = SenderConfig::from_json_str(r#"{"host": "10.0.0.20", "universe": 3}"#)?;
/// assert_eq!(config.host, "10.0.0.20");
/// assert_eq!(config.port, artcast_core::DEFAULT_PORT);
/// assert_eq!(config.universe, Universe::new(3));
/// assert!(config.broadcast);
/// # Ok::<(), artcast_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SenderConfig {
    pub host: String,
    pub port: u16,
    pub universe: Universe,
    /// Enable `SO_BROADCAST` on the socket.
    pub broadcast: bool,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            universe: Universe::default(),
            broadcast: true,
        }
    }
}

impl SenderConfig {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.host.clone(), self.port)
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json_str(&input)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
