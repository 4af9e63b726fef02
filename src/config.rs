//! Configuration management for the KeepLink contact capture core.
//!
//! This module handles loading and validating configuration from environment variables.
//! The `.env` file, if present, is loaded via `dotenvy` without touching stdout.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default avatar size cap: 5 MiB.
const DEFAULT_MAX_AVATAR_BYTES: usize = 5 * 1024 * 1024;

/// Configuration for the contact store.
#[derive(Debug, Clone)]
pub struct Config {
    /// Filesystem path of the SQLite database
    pub database_path: String,

    /// SQLite busy timeout in seconds (default: 5)
    pub busy_timeout_secs: u64,

    /// Maximum accepted avatar payload in bytes (default: 5 MiB)
    pub max_avatar_bytes: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `KEEPLINK_DB_PATH`: Filesystem path of the SQLite database
    ///
    /// Optional environment variables:
    /// - `KEEPLINK_BUSY_TIMEOUT_SECS`: SQLite busy timeout in seconds (default: 5)
    /// - `KEEPLINK_MAX_AVATAR_BYTES`: Avatar size cap in bytes (default: 5242880)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let database_path = env::var("KEEPLINK_DB_PATH")
            .map_err(|_| ConfigError::MissingVar("KEEPLINK_DB_PATH".to_string()))?;

        if database_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "KEEPLINK_DB_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let busy_timeout_secs = Self::parse_env_u64("KEEPLINK_BUSY_TIMEOUT_SECS", 5)?;
        let max_avatar_bytes =
            Self::parse_env_usize("KEEPLINK_MAX_AVATAR_BYTES", DEFAULT_MAX_AVATAR_BYTES)?;

        if max_avatar_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "KEEPLINK_MAX_AVATAR_BYTES".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            database_path,
            busy_timeout_secs,
            max_avatar_bytes,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_path: String::new(),
            busy_timeout_secs: 5,
            max_avatar_bytes: DEFAULT_MAX_AVATAR_BYTES,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.busy_timeout_secs, 5);
        assert_eq!(config.max_avatar_bytes, 5 * 1024 * 1024);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_config_from_env_missing_required() {
        let _ = dotenvy::dotenv();
        env::remove_var("KEEPLINK_DB_PATH");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::MissingVar(var)) = result {
            assert_eq!(var, "KEEPLINK_DB_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_path() {
        let mut guard = EnvGuard::new();
        guard.set("KEEPLINK_DB_PATH", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "KEEPLINK_DB_PATH");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("KEEPLINK_DB_PATH", "/tmp/keeplink-test.db");
        guard.set("KEEPLINK_BUSY_TIMEOUT_SECS", "10");
        guard.set("KEEPLINK_MAX_AVATAR_BYTES", "1048576");

        let result = Config::from_env();
        assert!(result.is_ok(), "Config should be valid: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.database_path, "/tmp/keeplink-test.db");
        assert_eq!(config.busy_timeout_secs, 10);
        assert_eq!(config.max_avatar_bytes, 1_048_576);
    }

    #[test]
    #[serial]
    fn test_config_zero_avatar_cap_rejected() {
        let mut guard = EnvGuard::new();
        guard.set("KEEPLINK_DB_PATH", "/tmp/keeplink-test.db");
        guard.set("KEEPLINK_MAX_AVATAR_BYTES", "0");

        let result = Config::from_env();
        assert!(result.is_err());
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "KEEPLINK_MAX_AVATAR_BYTES");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_env_u64() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_KEEPLINK_U64", "42");

        let result = Config::parse_env_u64("TEST_KEEPLINK_U64", 10);
        assert_eq!(result.unwrap(), 42);

        let result = Config::parse_env_u64("NONEXISTENT", 10);
        assert_eq!(result.unwrap(), 10);
    }

    #[test]
    #[serial]
    fn test_parse_env_u64_invalid() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_KEEPLINK_U64_INVALID", "not-a-number");

        let result = Config::parse_env_u64("TEST_KEEPLINK_U64_INVALID", 10);
        assert!(result.is_err());
    }
}
