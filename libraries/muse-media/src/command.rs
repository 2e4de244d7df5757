//! Transport commands from the control surface
//!
//! External control events are mapped into a small command enum and queued
//! for the session's event loop; handlers stay re-entrant-safe because all
//! state mutation happens on the owning loop, never in the callback.

use souvlaki::{MediaControlEvent, SeekDirection};
use std::time::Duration;

/// Default offset for directional seeks when the surface provides none
pub const DEFAULT_SEEK_OFFSET: Duration = Duration::from_secs(10);

/// A transport command originating from the OS control surface
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCommand {
    /// Resume playback
    Play,
    /// Pause playback
    Pause,
    /// Toggle between playing and paused
    Toggle,
    /// Stop playback
    Stop,
    /// Skip to the next track
    Next,
    /// Go to the previous track
    Previous,
    /// Seek forward by an offset; the result is clamped to [0, duration]
    SeekForward(Duration),
    /// Seek backward by an offset; the result is clamped to [0, duration]
    SeekBackward(Duration),
    /// Seek to an absolute position
    SeekTo(Duration),
    /// Set volume (0.0 - 1.0 as delivered by the surface)
    SetVolume(f64),
}

impl TransportCommand {
    /// Map a control-surface event into a command
    ///
    /// Events with no transport meaning for this player (raise, quit, open
    /// URI) map to `None`.
    pub fn from_event(event: MediaControlEvent) -> Option<Self> {
        match event {
            MediaControlEvent::Play => Some(Self::Play),
            MediaControlEvent::Pause => Some(Self::Pause),
            MediaControlEvent::Toggle => Some(Self::Toggle),
            MediaControlEvent::Stop => Some(Self::Stop),
            MediaControlEvent::Next => Some(Self::Next),
            MediaControlEvent::Previous => Some(Self::Previous),
            MediaControlEvent::Seek(direction) => Some(match direction {
                SeekDirection::Forward => Self::SeekForward(DEFAULT_SEEK_OFFSET),
                SeekDirection::Backward => Self::SeekBackward(DEFAULT_SEEK_OFFSET),
            }),
            MediaControlEvent::SeekBy(direction, offset) => Some(match direction {
                SeekDirection::Forward => Self::SeekForward(offset),
                SeekDirection::Backward => Self::SeekBackward(offset),
            }),
            MediaControlEvent::SetPosition(position) => Some(Self::SeekTo(position.0)),
            MediaControlEvent::SetVolume(volume) => Some(Self::SetVolume(volume)),
            _ => None,
        }
    }
}
