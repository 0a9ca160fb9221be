//! Error types for the pricing crate

use thiserror::Error;

/// Result type alias for the pricing crate
pub type Result<T> = std::result::Result<T, PricingError>;

/// Main error type for the pricing crate
#[derive(Error, Debug)]
pub enum PricingError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Parsing errors
    #[error("Parsing error: {0}")]
    Parsing(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
