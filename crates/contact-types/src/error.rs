//! Error types shared across the contact directory.

use thiserror::Error;

/// Errors raised outside the store itself (settings, validation of settings).
#[derive(Debug, Error)]
pub enum ContactsError {
    /// Configuration could not be built or deserialized
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration loaded but holds an unusable value
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl From<config::ConfigError> for ContactsError {
    fn from(err: config::ConfigError) -> Self {
        ContactsError::Config(err.to_string())
    }
}
