//! In-memory media store
//!
//! The runtime store behind the session: a plain key-value map per entity.
//! Durable persistence happens separately through the settings store and
//! index files; this type stays the source of truth for the session even
//! when durable writes are failing.

use muse_core::error::Result;
use muse_core::store::MediaStore;
use muse_core::types::{Playlist, PlaylistId, Track, TrackId};
use std::collections::BTreeMap;

/// In-memory `MediaStore` implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tracks: BTreeMap<TrackId, Track>,
    playlists: BTreeMap<PlaylistId, Playlist>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given library
    pub fn with_library(tracks: Vec<Track>, playlists: Vec<Playlist>) -> Self {
        Self {
            tracks: tracks.into_iter().map(|t| (t.id.clone(), t)).collect(),
            playlists: playlists.into_iter().map(|p| (p.id.clone(), p)).collect(),
        }
    }

    /// Number of tracks in the store
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Number of playlists in the store
    pub fn playlist_count(&self) -> usize {
        self.playlists.len()
    }
}

impl MediaStore for MemoryStore {
    fn track(&self, id: &TrackId) -> Result<Option<Track>> {
        Ok(self.tracks.get(id).cloned())
    }

    fn all_tracks(&self) -> Result<Vec<Track>> {
        Ok(self.tracks.values().cloned().collect())
    }

    fn put_track(&mut self, track: Track) -> Result<()> {
        self.tracks.insert(track.id.clone(), track);
        Ok(())
    }

    fn delete_track(&mut self, id: &TrackId) -> Result<()> {
        self.tracks.remove(id);
        Ok(())
    }

    fn playlist(&self, id: &PlaylistId) -> Result<Option<Playlist>> {
        Ok(self.playlists.get(id).cloned())
    }

    fn all_playlists(&self) -> Result<Vec<Playlist>> {
        Ok(self.playlists.values().cloned().collect())
    }

    fn put_playlist(&mut self, playlist: Playlist) -> Result<()> {
        self.playlists.insert(playlist.id.clone(), playlist);
        Ok(())
    }

    fn delete_playlist(&mut self, id: &PlaylistId) -> Result<()> {
        self.playlists.remove(id);
        Ok(())
    }
}
