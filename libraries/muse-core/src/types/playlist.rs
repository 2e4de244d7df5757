/// Playlist domain type
use crate::types::{PlaylistId, TrackId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the system-maintained playlist covering the whole library
pub const ALL_TRACKS_NAME: &str = "All Tracks";

/// Playlist
///
/// Track order is significant - it defines play order when the playlist is
/// used as a queue source. Duplicate track ids are permitted, as are
/// duplicate playlist names. Referenced tracks may no longer exist; readers
/// filter dangling ids rather than fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name (uniqueness not enforced)
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Ordered track ids
    #[serde(default)]
    pub tracks: Vec<TrackId>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,

    /// Whether this is the system-maintained "All Tracks" playlist
    #[serde(default)]
    pub is_default: bool,
}

impl Playlist {
    /// Create a new user playlist
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            description,
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
            is_default: false,
        }
    }

    /// Create the system-maintained "All Tracks" playlist over the given ids
    pub fn all_tracks(tracks: Vec<TrackId>) -> Self {
        let mut playlist = Self::new(ALL_TRACKS_NAME, None);
        playlist.tracks = tracks;
        playlist.is_default = true;
        playlist
    }

    /// Record a modification
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Number of track references (including dangling and duplicates)
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the playlist references no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_creation() {
        let playlist = Playlist::new("My Favorites", Some("late night".to_string()));
        assert_eq!(playlist.name, "My Favorites");
        assert_eq!(playlist.description.as_deref(), Some("late night"));
        assert!(!playlist.is_default);
        assert!(playlist.is_empty());
        assert!(playlist.created_at <= Utc::now());
    }

    #[test]
    fn all_tracks_is_default() {
        let playlist = Playlist::all_tracks(vec![TrackId::new("a"), TrackId::new("b")]);
        assert_eq!(playlist.name, ALL_TRACKS_NAME);
        assert!(playlist.is_default);
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn duplicate_track_ids_permitted() {
        let mut playlist = Playlist::new("Loops", None);
        playlist.tracks.push(TrackId::new("t1"));
        playlist.tracks.push(TrackId::new("t1"));
        assert_eq!(playlist.len(), 2);
    }

    #[test]
    fn deserializes_playlist_record() {
        let json = r#"{
            "id": "pl-1",
            "name": "Workout",
            "tracks": ["t1", "t2", "t1"],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-02-01T00:00:00Z",
            "isDefault": false
        }"#;

        let playlist: Playlist = serde_json::from_str(json).unwrap();
        assert_eq!(playlist.name, "Workout");
        assert_eq!(playlist.tracks.len(), 3);
        assert!(playlist.description.is_none());
    }
}
