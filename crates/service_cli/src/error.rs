//! Error types for the almanac CLI.

use almanac_core::types::{DateError, NumberError, StatsError};
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Date input rejected
    #[error("Invalid date: {0}")]
    Date(#[from] DateError),

    /// Number input rejected
    #[error("Invalid number: {0}")]
    Number(#[from] NumberError),

    /// Statistics pipeline failed
    #[error("{0}")]
    Stats(#[from] StatsError),

    /// Output serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
