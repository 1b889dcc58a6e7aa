//! CLI error types.

use thiserror::Error;
use vantage_config::ConfigError;
use vantage_core::CoreError;
use vantage_formulas::DomainError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A formula is undefined for the given inputs.
    #[error("Calculation error: {0}")]
    Calculation(#[from] DomainError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid currency or rate value.
    #[error("Invalid value: {0}")]
    Value(#[from] CoreError),

    /// Invalid command-line input.
    #[error("{0}")]
    InvalidInput(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
