//! # Service Configuration
//!
//! Settings are read from the environment once at startup.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `ORDER_SERVICE_ADDR` | `0.0.0.0:8000` | listen address |
//! | `ORDER_SERVICE_CHANNEL_BUFFER` | `32` | mailbox capacity of each collection actor |
//! | `ORDER_SERVICE_LOG` | `info` | log filter used when `RUST_LOG` is unset |

use std::net::SocketAddr;
use thiserror::Error;

pub const ADDR_VAR: &str = "ORDER_SERVICE_ADDR";
pub const CHANNEL_BUFFER_VAR: &str = "ORDER_SERVICE_CHANNEL_BUFFER";
pub const LOG_VAR: &str = "ORDER_SERVICE_LOG";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub addr: SocketAddr,
    pub channel_buffer: usize,
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            channel_buffer: 32,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the config from any variable source; unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|_| ConfigError::InvalidValue {
                var: ADDR_VAR,
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup(CHANNEL_BUFFER_VAR) {
            config.channel_buffer = match value.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: CHANNEL_BUFFER_VAR,
                        value,
                    })
                }
            };
        }

        if let Some(value) = lookup(LOG_VAR) {
            config.log_filter = value;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(from_pairs(&[]).unwrap(), ServiceConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = from_pairs(&[
            (ADDR_VAR, "127.0.0.1:9100"),
            (CHANNEL_BUFFER_VAR, "8"),
            (LOG_VAR, "debug"),
        ])
        .unwrap();
        assert_eq!(config.addr.port(), 9100);
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(
            from_pairs(&[(CHANNEL_BUFFER_VAR, "0")]),
            Err(ConfigError::InvalidValue {
                var: CHANNEL_BUFFER_VAR,
                value: "0".into()
            })
        );
        assert!(from_pairs(&[(CHANNEL_BUFFER_VAR, "many")]).is_err());
        assert!(from_pairs(&[(ADDR_VAR, "localhost")]).is_err());
    }
}
