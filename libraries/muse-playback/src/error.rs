//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Clone, Error)]
pub enum PlaybackError {
    /// The resource could not be resolved or decoded
    #[error("Track failed to load: {0}")]
    Load(String),

    /// Resume was rejected by the platform; state falls back to paused
    #[error("Playback start rejected: {0}")]
    StartRejected(String),

    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Queue is empty
    #[error("Queue is empty")]
    QueueEmpty,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
