//! Configuration Module
//!
//! Handles loading key namespace and server settings from environment variables.

use std::env;
use std::str::FromStr;

use crate::error::{KeyError, Result};
use crate::keys::KeyBuilder;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace prefix shared by every key of this deployment
    pub key_prefix: String,
    /// Cache-format generation; bump to invalidate all keys at once
    pub key_version: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Interval in seconds between key statistics log lines
    pub stats_log_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `KEY_PREFIX` - Namespace prefix (default: empty)
    /// - `KEY_VERSION` - Cache-format version (default: 1)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `STATS_LOG_INTERVAL` - Stats logging frequency in seconds, at least 1 (default: 60)
    ///
    /// Unset variables take their default. A variable that is set but does
    /// not parse is an [`KeyError::InvalidConfig`], never a silent default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Creates a new Config from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            key_prefix: lookup("KEY_PREFIX").unwrap_or(defaults.key_prefix),
            key_version: parse_var(&lookup, "KEY_VERSION", defaults.key_version)?,
            server_port: parse_var(&lookup, "SERVER_PORT", defaults.server_port)?,
            stats_log_interval: parse_var(
                &lookup,
                "STATS_LOG_INTERVAL",
                defaults.stats_log_interval,
            )?,
        };

        if config.stats_log_interval == 0 {
            return Err(KeyError::InvalidConfig(
                "STATS_LOG_INTERVAL must be at least 1 second".to_string(),
            ));
        }

        Ok(config)
    }

    /// Builds the key builder for this deployment.
    ///
    /// An error here means no key can be built at all; the binary refuses to start.
    pub fn key_builder(&self) -> Result<KeyBuilder> {
        KeyBuilder::new(self.key_prefix.clone(), self.key_version)
    }
}

/// Reads `name` through `lookup`, falling back to `default` only when unset.
fn parse_var<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e| {
            KeyError::InvalidConfig(format!("{}={:?} is not valid: {}", name, raw, e))
        }),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_prefix: String::new(),
            key_version: 1,
            server_port: 3000,
            stats_log_interval: 60,
        }
    }
}
