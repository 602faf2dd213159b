//! Host settings, read from the environment.
//!
//! | variable | default |
//! |---|---|
//! | `PROFILES_HOST` | `127.0.0.1` |
//! | `PROFILES_PORT` | `8080` |
//! | `PROFILES_OPEN_BROWSER` | `true` |

use thiserror::Error;

pub const HOST_VAR: &str = "PROFILES_HOST";
pub const PORT_VAR: &str = "PROFILES_PORT";
pub const OPEN_BROWSER_VAR: &str = "PROFILES_OPEN_BROWSER";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PROFILES_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("PROFILES_OPEN_BROWSER must be true or false, got {0:?}")]
    InvalidFlag(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the served URL after start-up.
    pub open_browser: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from `lookup`, which maps a variable name to its
    /// value. Unset or empty variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = value(HOST_VAR) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = value(PORT_VAR) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(flag) = value(OPEN_BROWSER_VAR) {
            config.open_browser = match flag.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidFlag(flag)),
            };
        }
        Ok(config)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
