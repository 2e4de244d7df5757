//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Lowest accepted playback rate
pub const MIN_PLAYBACK_RATE: f32 = 0.25;

/// Highest accepted playback rate
pub const MAX_PLAYBACK_RATE: f32 = 4.0;

/// Clamp a volume to [0, 1]
///
/// Out-of-range inputs are silently clamped, never rejected.
pub fn clamp_volume(volume: f32) -> f32 {
    volume.clamp(0.0, 1.0)
}

/// Clamp a playback rate to [0.25, 4]
pub fn clamp_playback_rate(rate: f32) -> f32 {
    rate.clamp(MIN_PLAYBACK_RATE, MAX_PLAYBACK_RATE)
}

/// Playback state
///
/// Per-track lifetime: `Stopped -> Loading -> Ready <-> Playing <-> Paused
/// -> Ended | Failed`. `Ended` is transient - it resolves into queue
/// advancement or a repeat-one restart within the same reconciliation step.
/// `Failed` is terminal for that track but the player remains navigable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No playback in progress; also the initial state
    Stopped,

    /// A load was issued; metadata not yet known
    Loading,

    /// Metadata known, not playing yet
    Ready,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Resource reached its natural end (transient)
    Ended,

    /// The current track's load or playback failed
    Failed,
}

impl PlaybackState {
    /// Whether this state counts as "playing" for transport flags
    pub fn is_playing(self) -> bool {
        self == PlaybackState::Playing
    }

    /// Whether this state counts as "paused" for transport flags
    ///
    /// Playing and paused are mutually exclusive; both are false in the
    /// stopped state.
    pub fn is_paused(self) -> bool {
        self == PlaybackState::Paused
    }
}

/// Display metadata for the loaded track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NowPlaying {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name, if known
    pub album: Option<String>,

    /// Thumbnail locator, if any
    pub thumbnail: Option<String>,
}

/// Point-in-time view of the player for outbound publication
///
/// Snapshots are taken at publish time so consumers always observe the most
/// recent state, never a stale intermediate one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    /// Loaded track metadata, if any
    pub track: Option<NowPlaying>,

    /// Whether playback is running
    pub is_playing: bool,

    /// Current position within the track
    pub position: Duration,

    /// Track duration, once known
    pub duration: Option<Duration>,
}
