//! Configuration Module
//!
//! Handles loading shipping and cache settings from environment variables.

use std::env;

/// Shipping cache configuration.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Store origin postcode, raw as configured
    pub origin_postcode: String,
    /// Whether several carrier services are quoted per request
    pub multi_quote_enabled: bool,
    /// Initial state of the quote cache type
    pub cache_enabled: bool,
    /// Maximum number of entries the in-memory store can hold
    pub max_entries: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ORIGIN_POSTCODE` - Origin postcode (default: empty)
    /// - `MULTI_QUOTE_ENABLED` - Multi-quote mode (default: false)
    /// - `QUOTE_CACHE_ENABLED` - Quote cache enabled at startup (default: true)
    /// - `MAX_ENTRIES` - Maximum cache entries (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            origin_postcode: env::var("ORIGIN_POSTCODE").unwrap_or(defaults.origin_postcode),
            multi_quote_enabled: env::var("MULTI_QUOTE_ENABLED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.multi_quote_enabled),
            cache_enabled: env::var("QUOTE_CACHE_ENABLED")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.cache_enabled),
            max_entries: env::var("MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_entries),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            origin_postcode: String::new(),
            multi_quote_enabled: false,
            cache_enabled: true,
            max_entries: 1000,
            server_port: 3000,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.origin_postcode, "");
        assert!(!config.multi_quote_enabled);
        assert!(config.cache_enabled);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("1"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("off"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("ORIGIN_POSTCODE");
        env::remove_var("MULTI_QUOTE_ENABLED");
        env::remove_var("QUOTE_CACHE_ENABLED");
        env::remove_var("MAX_ENTRIES");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.origin_postcode, "");
        assert!(!config.multi_quote_enabled);
        assert!(config.cache_enabled);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.server_port, 3000);
    }
}
