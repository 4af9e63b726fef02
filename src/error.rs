//! Error types for the KeepLink contact capture core.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Storage faults are always surfaced as values; the library never aborts the process
//! on a failed open or commit, so the caller can keep the draft and retry.

use thiserror::Error;

/// Errors that can occur when talking to the local contact store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be opened
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// A write transaction could not commit
    #[error("Write failed: {0}")]
    WriteFailed(#[from] sqlx::Error),

    /// Picked avatar bytes are not a recognized image format
    #[error("Image decode failed: not a recognized image format")]
    ImageDecodeFailed,

    /// Avatar bytes exceed the configured size cap
    #[error("Avatar too large: {actual} bytes (limit {limit})")]
    AvatarTooLarge { actual: usize, limit: usize },

    /// Record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Generic store error with context
    #[error("Store error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
