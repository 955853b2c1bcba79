//! Error types for resolver configuration
//!
//! Resolution itself never fails: unknown people, unknown kinds and cyclic
//! data all degrade to "no relationship found" or a best-effort label.

use thiserror::Error;

/// Errors that can occur while loading or validating resolver settings
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Failed to read a config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Settings are present but unusable
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for resolver configuration
pub type Result<T> = std::result::Result<T, ResolverError>;
