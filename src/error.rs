//! Error types for the classifier.
//!
//! `StorageError` is raised by record stores; `ClassifierError` is what the
//! service and its callers see. Each `ClassifierError` has a stable
//! [`ErrorKind`] that outer layers map onto their own codes.

use thiserror::Error;

/// Errors raised by a record store backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be reached or refused the operation.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value could not be decoded.
    #[error("corrupt record: {0}")]
    Corrupt(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<sled::Error> for StorageError {
    fn from(err: sled::Error) -> Self {
        match err {
            sled::Error::Io(io) => StorageError::IoError(io),
            other => StorageError::Unavailable(other.to_string()),
        }
    }
}

impl From<bincode::Error> for StorageError {
    fn from(err: bincode::Error) -> Self {
        StorageError::Corrupt(err.to_string())
    }
}

/// Why an `add` was refused.
///
/// Both causes surface as a single [`ClassifierError::Conflict`]; the cause
/// is kept for logging only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictCause {
    ParentMissing,
    RecordExists,
}

impl std::fmt::Display for ConflictCause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictCause::ParentMissing => f.write_str("parent not found"),
            ConflictCause::RecordExists => f.write_str("record already exists"),
        }
    }
}

/// Stable error kind exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidName,
    Conflict,
    NotFound,
    StorageUnavailable,
    Config,
}

/// Service-level errors.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("invalid input: name {name:?} is not allowed under {path:?}")]
    InvalidName { name: String, path: String },

    #[error("path not found or record already exists ({cause})")]
    Conflict { cause: ConflictCause },

    #[error("record not found: {name:?} at {path:?}")]
    NotFound { name: String, path: String },

    #[error(transparent)]
    StorageUnavailable(#[from] StorageError),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl ClassifierError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ClassifierError::InvalidName { .. } => ErrorKind::InvalidName,
            ClassifierError::Conflict { .. } => ErrorKind::Conflict,
            ClassifierError::NotFound { .. } => ErrorKind::NotFound,
            ClassifierError::StorageUnavailable(_) => ErrorKind::StorageUnavailable,
            ClassifierError::ConfigError(_) => ErrorKind::Config,
        }
    }
}

impl From<config::ConfigError> for ClassifierError {
    fn from(err: config::ConfigError) -> Self {
        ClassifierError::ConfigError(err.to_string())
    }
}
