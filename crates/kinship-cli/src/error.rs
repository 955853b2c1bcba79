//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Resolver settings error
    #[error("Resolver error: {0}")]
    Resolver(#[from] kinship_resolver::ResolverError),

    /// Invalid person identifier
    #[error("Invalid person identifier: {0}")]
    InvalidId(#[from] kinship_domain::IdError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Snapshot could not be used
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
