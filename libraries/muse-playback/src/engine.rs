//! Platform-agnostic playback engine trait
//!
//! Abstracts the single underlying playable resource (an HTML media element,
//! a native audio pipeline, ...). The player issues transport intents; the
//! engine reports what actually happened through generation-tagged lifecycle
//! events.

use crate::error::Result;
use std::time::Duration;

/// Identity marker for a load
///
/// Each `load` returns a fresh generation. Events carry the generation of
/// the load they belong to, so a consumer that issued a newer load can
/// discard the old load's late events instead of merging them.
pub type Generation = u64;

/// A lifecycle event emitted by the engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineEvent {
    /// Generation of the load this event belongs to
    pub generation: Generation,

    /// What happened
    pub kind: EngineEventKind,
}

/// Engine lifecycle event kinds
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEventKind {
    /// Duration is now known
    MetadataReady {
        /// Authoritative track duration
        duration: Duration,
    },

    /// Periodic position update while the resource plays
    TimeAdvanced {
        /// Current position within the track
        position: Duration,
    },

    /// The resource reached its natural end
    Ended,

    /// Terminal error for the current load
    Failed {
        /// Human-readable failure description
        message: String,
    },
}

/// Platform-agnostic playback engine
///
/// Implementers own exactly one playable resource at a time. Loading a new
/// track implicitly stops the previous one.
pub trait PlaybackEngine {
    /// Replace the resource's source with the given locator
    ///
    /// Returns the generation token for this load. Decode/fetch failures are
    /// asynchronous and surface as a [`EngineEventKind::Failed`] event
    /// tagged with this generation - the engine must not keep reporting
    /// playback after a failed load.
    fn load(&mut self, locator: &str) -> Generation;

    /// Request resume or pause
    ///
    /// Starting playback may be rejected (e.g. blocked by platform policy);
    /// synchronous rejection is returned here, asynchronous failure arrives
    /// as a `Failed` event.
    fn set_playing(&mut self, playing: bool) -> Result<()>;

    /// Set the position directly
    ///
    /// No-op (or clamps) when the position is outside [0, duration] or the
    /// duration is not yet known.
    fn seek(&mut self, position: Duration);

    /// Set volume; the engine clamps to [0, 1] before applying
    fn set_volume(&mut self, volume: f32);

    /// Set playback rate; the engine clamps to [0.25, 4] before applying
    fn set_rate(&mut self, rate: f32);

    /// Drain pending lifecycle events
    ///
    /// Called from the owner's event loop; the engine never invokes the
    /// player directly.
    fn poll_events(&mut self) -> Vec<EngineEvent>;
}
