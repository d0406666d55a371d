//! Core error types
//!
//! Error types surfaced by the orchestration services: caller-input
//! validation, configuration loading, and internal defects. Provider
//! failures never appear here; they are absorbed by the fallback chain
//! and recorded in its resolution log.

use thiserror::Error;

/// Errors produced by the core services
#[derive(Debug, Error)]
pub enum CoreError {
    /// Configuration error (missing or invalid resource)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller input failed validation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization or deserialization failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO operation failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Requested entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal defect that should not occur in normal operation
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        CoreError::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        CoreError::Validation(msg.into())
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        CoreError::NotFound(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        CoreError::Internal(msg.into())
    }
}

impl From<CoreError> for String {
    fn from(err: CoreError) -> Self {
        err.to_string()
    }
}
