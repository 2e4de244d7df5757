//! Error types for the storage layer

use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The on-disk record was written by a newer schema
    #[error("Unsupported settings schema version: {0}")]
    UnsupportedVersion(u32),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StorageError>;

impl From<StorageError> for muse_core::MuseError {
    fn from(err: StorageError) -> Self {
        muse_core::MuseError::Persistence(err.to_string())
    }
}
