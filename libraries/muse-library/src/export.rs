//! Portable playlist snapshots
//!
//! The export record deliberately excludes internal ids so a snapshot can be
//! imported into a different library; import always materializes fresh
//! records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A portable playlist snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistExport {
    /// The playlist and its resolved tracks
    pub playlist: ExportedPlaylist,

    /// Snapshot metadata
    pub metadata: ExportMetadata,
}

/// Playlist content within an export snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedPlaylist {
    /// Playlist name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resolved track metadata, in play order
    pub tracks: Vec<ExportedTrack>,
}

/// A single exported track; no internal id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedTrack {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in seconds
    pub duration: f64,

    /// Playable locator
    pub url: String,
}

/// Metadata about the snapshot itself
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    /// When the snapshot was taken
    pub exported_at: DateTime<Utc>,

    /// Number of resolved tracks
    pub total_tracks: usize,

    /// Sum of track durations in seconds
    pub total_duration: f64,
}
