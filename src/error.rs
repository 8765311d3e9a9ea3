//! Domain error types for selectfield
//!
//! Provides structured error types:
//! - `ConfigError` for contract violations caught when props are built
//! - `SelectError` as the top-level error type

use thiserror::Error;

/// Top-level error type for selectfield
#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Contract violations in the props handed to a select field
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Required callback '{0}' was not provided")]
    MissingCallback(&'static str),

    #[error("Item {index} is invalid: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("No selectable entries: items are empty and the placeholder is hidden")]
    EmptySelection,

    #[error("Row {index} is out of range for {len} entries")]
    ItemIndexOutOfRange { index: usize, len: usize },
}

/// Result type alias for SelectError
pub type Result<T> = std::result::Result<T, SelectError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<String> for SelectError {
    fn from(msg: String) -> Self {
        SelectError::Other(msg)
    }
}

impl From<&str> for SelectError {
    fn from(msg: &str) -> Self {
        SelectError::Other(msg.to_string())
    }
}
