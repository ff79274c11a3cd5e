use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    #[error("Card not found: {0}")]
    CardNotFound(String),

    #[error("Configuration backup `{0}` not found")]
    BackupNotFound(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}
