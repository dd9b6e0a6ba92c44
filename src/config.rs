//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::time::Duration;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Seconds an entry lives without being accessed, 0 for no expiry
    pub ttl: u64,
    /// Seconds between sweep passes over the cache
    pub check_period: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Entry TTL in seconds, 0 = never expire (default: 300)
    /// - `CACHE_CHECK_PERIOD` - Sweep frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            ttl: parse_var("CACHE_TTL").unwrap_or(defaults.ttl),
            check_period: parse_var("CACHE_CHECK_PERIOD")
                .unwrap_or(defaults.check_period)
                .max(1),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
        }
    }

    /// TTL as a `Duration`.
    ///
    /// A TTL of 0 maps to `Duration::MAX`, which entries treat as unbounded.
    pub fn ttl_duration(&self) -> Duration {
        match self.ttl {
            0 => Duration::MAX,
            secs => Duration::from_secs(secs),
        }
    }

    /// Sweep interval as a `Duration`, never shorter than one second.
    pub fn check_period_duration(&self) -> Duration {
        Duration::from_secs(self.check_period.max(1))
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ttl: 300,
            check_period: 60,
            server_port: 3000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.ttl, 300);
        assert_eq!(config.check_period, 60);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_TTL");
        env::remove_var("CACHE_CHECK_PERIOD");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.ttl, 300);
        assert_eq!(config.check_period, 60);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_zero_check_period_is_clamped() {
        let config = Config {
            check_period: 0,
            ..Config::default()
        };
        assert_eq!(config.check_period_duration(), Duration::from_secs(1));
        assert_eq!(config.ttl_duration(), Duration::from_secs(300));
    }

    #[test]
    fn test_zero_ttl_means_no_expiry() {
        let config = Config {
            ttl: 0,
            ..Config::default()
        };
        assert_eq!(config.ttl_duration(), Duration::MAX);
    }
}
