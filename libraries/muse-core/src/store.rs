//! Media store trait
//!
//! The repository seam between the library/player layers and durable
//! storage. Implementations are simple key-value object stores; all
//! operations are synchronous because the core runs single-owner,
//! event-driven - there is never more than one mutation in flight.

use crate::error::Result;
use crate::types::{Playlist, PlaylistId, Track, TrackId};

/// Store trait for tracks and playlists
///
/// Implementers provide CRUD plus bulk reads per entity. Reads of missing
/// entities return `Ok(None)` / are filtered; only storage-layer failures
/// produce errors.
pub trait MediaStore {
    // Track operations

    /// Get a track by ID
    fn track(&self, id: &TrackId) -> Result<Option<Track>>;

    /// Get all tracks
    fn all_tracks(&self) -> Result<Vec<Track>>;

    /// Insert or replace a track
    fn put_track(&mut self, track: Track) -> Result<()>;

    /// Delete a track
    ///
    /// Deleting an unknown id is a no-op.
    fn delete_track(&mut self, id: &TrackId) -> Result<()>;

    // Playlist operations

    /// Get a playlist by ID
    fn playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>>;

    /// Get all playlists
    fn all_playlists(&self) -> Result<Vec<Playlist>>;

    /// Insert or replace a playlist
    fn put_playlist(&mut self, playlist: Playlist) -> Result<()>;

    /// Delete a playlist
    ///
    /// Deleting an unknown id is a no-op.
    fn delete_playlist(&mut self, id: &PlaylistId) -> Result<()>;
}
