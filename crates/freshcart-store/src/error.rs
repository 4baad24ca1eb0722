//! Storage error types.

use thiserror::Error;

/// Errors from the local key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A stored value exists but cannot be parsed. Callers recover by
    /// discarding the value, never by failing the session.
    #[error("Stored value for key '{key}' is corrupt: {reason}")]
    Corrupt { key: String, reason: String },

    /// Underlying filesystem error.
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Value could not be serialized for storage.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
