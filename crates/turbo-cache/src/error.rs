//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to read a key.
    #[error("Failed to read key {key}: {reason}")]
    Read { key: String, reason: String },

    /// Failed to write a key.
    #[error("Failed to write key {key}: {reason}")]
    Write { key: String, reason: String },

    /// Failed to delete a key.
    #[error("Failed to delete key {key}: {reason}")]
    Delete { key: String, reason: String },
}

impl CacheError {
    /// Create a write error for `key`.
    pub fn write(key: &str, reason: impl ToString) -> Self {
        Self::Write {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a read error for `key`.
    pub fn read(key: &str, reason: impl ToString) -> Self {
        Self::Read {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
