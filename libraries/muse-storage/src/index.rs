//! Bulk library index files
//!
//! Two sibling files are consumed at startup: one holding every track record
//! produced by ingestion, one holding the playlist records. A missing file
//! is an empty library, not an error.

use crate::error::Result;
use muse_core::types::{Playlist, Track};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// The bulk track index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackIndex {
    /// All track records
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// The bulk playlist index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaylistIndex {
    /// All playlist records
    #[serde(default)]
    pub playlists: Vec<Playlist>,
}

/// Load the track index from the given path
pub fn load_track_index(path: &Path) -> Result<TrackIndex> {
    if !path.exists() {
        debug!(path = %path.display(), "no track index, starting empty");
        return Ok(TrackIndex::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Load the playlist index from the given path
pub fn load_playlist_index(path: &Path) -> Result<PlaylistIndex> {
    if !path.exists() {
        debug!(path = %path.display(), "no playlist index, starting empty");
        return Ok(PlaylistIndex::default());
    }
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
