//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables. A `.env` file is honored when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Lookahead window for the `birthdays` command, in days (default: 7)
    pub upcoming_window_days: i64,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `UPCOMING_WINDOW_DAYS`: birthday lookahead window in days (default: 7)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let upcoming_window_days = Self::parse_env_i64("UPCOMING_WINDOW_DAYS", 7)?;

        // A negative window would silently report nothing; reject it here
        if upcoming_window_days < 0 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_WINDOW_DAYS".to_string(),
                reason: "Must be a non-negative number".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            upcoming_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            upcoming_window_days: 7,
            log_level: "info".to_string(),
        }
    }
}
