//! Error types for storage operations

use std::error::Error;
use std::fmt;

/// Error type for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// Operation error
    Operation(String),

    /// Serialization/deserialization error
    Serialization(String),

    /// Other error
    Other(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Operation(msg) => write!(f, "Operation error: {}", msg),
            StorageError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::Other(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl Error for StorageError {}

/// Convert a JSON error to a storage error
impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialization(err.to_string())
    }
}

/// Convert a standard IO error to a storage error
impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Operation(err.to_string())
    }
}

// This allows StorageError to be converted to the top-level AmityError
impl From<StorageError> for crate::AmityError {
    fn from(err: StorageError) -> Self {
        crate::AmityError::Storage(err.to_string())
    }
}
