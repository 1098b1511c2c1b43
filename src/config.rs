//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::models::user_prefs::DEFAULT_ADDRESS_BOOK_FILE_PATH;
use crate::models::UserPrefs;
use std::env;
use std::path::PathBuf;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for the address book application.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the address book is saved (default: "data/addressbook.json")
    pub address_book_file_path: PathBuf,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_FILE_PATH`: Address book location (default: "data/addressbook.json")
    /// - `LOG_LEVEL`: Logging level, one of trace/debug/info/warn/error (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();
        Self::from_current_env()
    }

    /// Build configuration from the process environment as it is now,
    /// without consulting `.env`.
    fn from_current_env() -> ConfigResult<Self> {
        let address_book_file_path = match env::var("ADDRESS_BOOK_FILE_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_FILE_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE_PATH),
        };

        let log_level = env::var("LOG_LEVEL")
            .map(|level| level.trim().to_ascii_lowercase())
            .unwrap_or_else(|_| "info".to_string());

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), log_level),
            });
        }

        Ok(Config {
            address_book_file_path,
            log_level,
        })
    }

    /// User preferences seeded from this configuration.
    pub fn user_prefs(&self) -> UserPrefs {
        let mut prefs = UserPrefs::default();
        prefs.set_address_book_file_path(self.address_book_file_path.clone());
        prefs
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            address_book_file_path: PathBuf::from(DEFAULT_ADDRESS_BOOK_FILE_PATH),
            log_level: "info".to_string(),
        }
    }
}
