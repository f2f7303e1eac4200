//! Storage error types.

/// Errors that can occur during storage operations.
///
/// Lookup misses are not errors; read accessors return `Option` and
/// `update_comment` returns `Ok(None)` for an unknown id.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A filesystem read or write failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout the storage crate.
pub type Result<T> = std::result::Result<T, StorageError>;
