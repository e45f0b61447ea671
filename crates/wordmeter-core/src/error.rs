//! Error types for wordmeter-core.
//!
//! The analysis functions themselves are total and have no error type.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised when a user-supplied character limit cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LimitError {
    /// The value is not a whole number.
    #[error("character limit must be a whole number, got {0:?}")]
    NotANumber(String),

    /// Zero would make the text permanently empty.
    #[error("character limit must be greater than zero")]
    Zero,
}
