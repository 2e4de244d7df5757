//! Muse Core
//!
//! Domain types, the media-store trait, and error handling shared across the
//! Muse workspace.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`Playlist`], [`FilterSpec`], id newtypes
//! - **Store Trait**: [`MediaStore`] - the repository seam for tracks and
//!   playlists
//! - **Error Handling**: unified [`MuseError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use muse_core::types::{Track, Playlist};
//!
//! // A track record as produced by ingestion
//! let track = Track::new("My Favorite Song", "Some Artist", "media/song.m4a");
//!
//! // A user playlist referencing it
//! let mut playlist = Playlist::new("Road Trip", None);
//! playlist.tracks.push(track.id.clone());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{MuseError, Result};
pub use store::MediaStore;
pub use types::{
    FilterSpec, PlayerPrefs, Playlist, PlaylistId, RepeatMode, SortKey, SortOrder, Track,
    TrackDetails, TrackId,
};
