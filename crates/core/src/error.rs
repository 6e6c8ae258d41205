//! Error types for the ragask client.
//!
//! This module defines a unified error enum covering configuration, I/O,
//! query validation, and the two ways a backend call can fail (transport and
//! decoding).

use thiserror::Error;

/// Unified error type for the ragask client.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The query was rejected locally; no request was made
    #[error("{0}")]
    Validation(String),

    /// Network unreachable, timeout, or non-2xx status from the backend
    #[error("Transport error: {0}")]
    Transport(String),

    /// The backend answered 2xx with a body that could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
