//! Muse - Playback Management
//!
//! Platform-agnostic playback state management for Muse.
//!
//! This crate provides:
//! - The [`Player`] state machine (stopped / loading / ready / playing /
//!   paused / ended / failed) and its reconciliation with a playback engine
//! - Queue traversal (sequential, shuffle, repeat-one, repeat-all)
//! - Volume and rate clamping
//! - Playback events for UI synchronization
//!
//! # Architecture
//!
//! `muse-playback` owns no audio resource itself. The single underlying
//! playable resource lives behind the [`PlaybackEngine`] trait; the player
//! issues transport intents (load, play, pause, seek, volume, rate) and
//! consumes the engine's lifecycle events (metadata-ready, time-advanced,
//! ended, failed). Each load carries a generation marker: a new load
//! supersedes the previous one, and late events from a superseded load are
//! discarded rather than merged.
//!
//! # Example
//!
//! ```rust,no_run
//! use muse_playback::{Player, PlaybackEngine, EngineEvent, Generation};
//! use muse_core::types::{PlayerPrefs, Track};
//! use std::time::Duration;
//!
//! struct MyEngine { /* platform-specific resource */ }
//!
//! impl PlaybackEngine for MyEngine {
//!     fn load(&mut self, _locator: &str) -> Generation { 1 }
//!     fn set_playing(&mut self, _playing: bool) -> muse_playback::Result<()> { Ok(()) }
//!     fn seek(&mut self, _position: Duration) {}
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn set_rate(&mut self, _rate: f32) {}
//!     fn poll_events(&mut self) -> Vec<EngineEvent> { Vec::new() }
//! }
//!
//! let mut player = Player::new(Box::new(MyEngine {}), PlayerPrefs::default());
//! let tracks = vec![Track::new("Song", "Artist", "media/song.m4a")];
//! player.play_queue(tracks, 0).ok();
//! player.pump(); // drain engine events, advance the state machine
//! ```

#![forbid(unsafe_code)]

mod engine;
mod error;
mod events;
mod player;
pub mod traversal;
pub mod types;

// Public exports
pub use engine::{EngineEvent, EngineEventKind, Generation, PlaybackEngine};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use player::Player;
pub use types::{NowPlaying, PlaybackState, PlayerSnapshot};
