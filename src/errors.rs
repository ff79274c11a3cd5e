use thiserror::Error;

use cardcycle_config::ConfigError;

/// Errors surfaced by the command-line boundary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Invalid card configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Invalid date `{0}` (expected YYYY-MM-DD)")]
    InvalidDate(String),
    #[error("Unknown command `{0}`")]
    UnknownCommand(String),
}
