//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors returned by contact store operations and command dispatch.
///
/// Every core operation either succeeds or fails with exactly one of these
/// kinds; the command loop matches on them to render a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A name, phone number or birthday failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No such contact, or the requested field is not set
    #[error("{0}")]
    NotFound(String),

    /// The field may only be set once and already has a value
    #[error("{0}")]
    AlreadySet(String),

    /// Wrong argument count or shape for a command
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

/// Errors that can occur while loading or saving the store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the data file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data file is not valid JSON for a contact store
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data file parsed but breaks a store invariant
    #[error("Corrupt data file: {0}")]
    Corrupt(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
