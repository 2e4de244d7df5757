//! Playback events
//!
//! Event-based communication for UI and session synchronization. Events are
//! emitted at key points: state changes, track changes, position updates,
//! play-count bumps, and errors. Consumers drain them via
//! [`crate::Player::take_events`].

use crate::types::PlaybackState;
use muse_core::types::TrackId;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playback state changed (playing, paused, stopped, ...)
    StateChanged {
        /// The new playback state
        state: PlaybackState,
    },

    /// A different track was assigned as the current track
    TrackChanged {
        /// ID of the new (current) track
        track_id: TrackId,
        /// ID of the previous track (if any)
        previous_track_id: Option<TrackId>,
    },

    /// A track was loaded for playback and its play count incremented
    ///
    /// Emitted once per assignment, including reassigning the same track.
    TrackLoaded {
        /// ID of the loaded track
        track_id: TrackId,
        /// Play count after the increment
        play_count: u64,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// ID of the finished track
        track_id: TrackId,
    },

    /// Position update (periodic while playing)
    PositionUpdate {
        /// Current playback position
        position_ms: u64,
        /// Total track duration (0 if unknown)
        duration_ms: u64,
    },

    /// Volume changed (post-clamp value)
    VolumeChanged {
        /// New volume in [0, 1]
        volume: f32,
    },

    /// Playback rate changed (post-clamp value)
    RateChanged {
        /// New rate in [0.25, 4]
        rate: f32,
    },

    /// Queue changed (tracks added/removed/replaced)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// Error occurred during playback
    Error {
        /// Error message
        message: String,
    },
}
