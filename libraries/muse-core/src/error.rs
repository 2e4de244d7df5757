/// Core error types for Muse
use crate::types::{PlaylistId, TrackId};
use thiserror::Error;

/// Result type alias using `MuseError`
pub type Result<T> = std::result::Result<T, MuseError>;

/// Core error type for Muse
#[derive(Error, Debug)]
pub enum MuseError {
    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Playlist not found
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// Malformed input to a public operation; the operation is a no-op
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Durable persistence failed; in-memory state is unaffected
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Playback-layer failure surfaced through a composed operation
    #[error("Playback error: {0}")]
    Playback(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

impl MuseError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a persistence error
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Create a playback error
    pub fn playback(msg: impl Into<String>) -> Self {
        Self::Playback(msg.into())
    }
}
