//! Environment configuration for a sync run.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more required environment variables are absent or empty.
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingVars(Vec<String>),
}

/// Connection settings for both external systems, read from the process
/// environment at startup.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Base URL of the directory service.
    pub directory_url: String,
    /// API key for the directory service.
    pub directory_api_key: String,
    /// Base URL of the feedback board.
    pub board_url: String,
    /// API key for the feedback board.
    pub board_api_key: String,
}

impl SyncConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_reader(|key| std::env::var(key))
    }

    /// Load configuration from a custom variable reader.
    ///
    /// This allows tests to supply variables without mutating process-global
    /// environment state. Every missing (or empty) variable is collected so
    /// the error names all of them at once, not just the first.
    pub fn from_reader<F>(reader: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let mut missing = Vec::new();
        let mut require = |key: &str| match reader(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => {
                missing.push(key.to_string());
                None
            }
        };

        let directory_url = require("DIRECTORY_URL");
        let directory_api_key = require("DIRECTORY_API_KEY");
        let board_url = require("BOARD_URL");
        let board_api_key = require("BOARD_API_KEY");

        match (directory_url, directory_api_key, board_url, board_api_key) {
            (
                Some(directory_url),
                Some(directory_api_key),
                Some(board_url),
                Some(board_api_key),
            ) => Ok(Self {
                directory_url,
                directory_api_key,
                board_url,
                board_api_key,
            }),
            _ => Err(ConfigError::MissingVars(missing)),
        }
    }
}
