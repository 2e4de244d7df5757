/// Track domain type
use crate::types::TrackId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Highest rating a track can carry
pub const MAX_RATING: u8 = 5;

/// Audio track
///
/// The serialized shape matches the per-track metadata record produced by
/// ingestion: top-level display fields plus a nested [`TrackDetails`] block
/// with everything the extractor reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Duration in seconds; ingestion estimate until playback reports the
    /// authoritative value
    #[serde(rename = "duration")]
    pub duration_secs: f64,

    /// Playable locator (URL or path relative to the media root)
    pub url: String,

    /// Thumbnail image locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Extractor-reported metadata
    #[serde(default)]
    pub metadata: TrackDetails,

    /// User tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// User rating (0-5)
    #[serde(default)]
    pub rating: u8,

    /// Number of times the track was loaded for playback
    #[serde(default)]
    pub play_count: u64,

    /// When the track was added to the library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_added: Option<DateTime<Utc>>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: TrackId::generate(),
            title: title.into(),
            artist: artist.into(),
            duration_secs: 0.0,
            url: url.into(),
            thumbnail: None,
            metadata: TrackDetails::default(),
            tags: Vec::new(),
            rating: 0,
            play_count: 0,
            date_added: Some(Utc::now()),
        }
    }

    /// Get the track duration as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f64(self.duration_secs.max(0.0))
    }

    /// Set the track duration from a `Duration`
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration_secs = duration.as_secs_f64();
    }

    /// Set the user rating, clamped to 0-5
    pub fn set_rating(&mut self, rating: u8) {
        self.rating = rating.min(MAX_RATING);
    }

    /// Album name, if the extractor reported one
    pub fn album(&self) -> Option<&str> {
        self.metadata.album.as_deref()
    }

    /// Release year, if the extractor reported one
    pub fn year(&self) -> Option<i32> {
        self.metadata.year
    }

    /// Genre, if the extractor reported one
    pub fn genre(&self) -> Option<&str> {
        self.metadata.genre.as_deref()
    }

    /// Check whether the track carries the given tag (case-insensitive)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

/// Extractor-reported track metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetails {
    /// Title as reported by the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Artist as reported by the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,

    /// Album name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Release year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Duration in seconds as reported by the extractor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// Thumbnail locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// Uploader / channel name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<String>,

    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_creation() {
        let track = Track::new("Test Song", "Test Artist", "media/song.m4a");
        assert_eq!(track.title, "Test Song");
        assert_eq!(track.artist, "Test Artist");
        assert_eq!(track.play_count, 0);
        assert!(track.date_added.is_some());
    }

    #[test]
    fn track_duration_conversion() {
        let mut track = Track::new("Song", "Artist", "media/song.m4a");
        track.set_duration(Duration::from_secs(180));

        assert_eq!(track.duration_secs, 180.0);
        assert_eq!(track.duration(), Duration::from_secs(180));
    }

    #[test]
    fn negative_duration_reads_as_zero() {
        let mut track = Track::new("Song", "Artist", "media/song.m4a");
        track.duration_secs = -1.0;
        assert_eq!(track.duration(), Duration::ZERO);
    }

    #[test]
    fn rating_clamped_to_five() {
        let mut track = Track::new("Song", "Artist", "media/song.m4a");
        track.set_rating(9);
        assert_eq!(track.rating, 5);

        track.set_rating(3);
        assert_eq!(track.rating, 3);
    }

    #[test]
    fn tag_lookup_is_case_insensitive() {
        let mut track = Track::new("Song", "Artist", "media/song.m4a");
        track.tags = vec!["Chill".to_string(), "live".to_string()];

        assert!(track.has_tag("chill"));
        assert!(track.has_tag("LIVE"));
        assert!(!track.has_tag("metal"));
    }

    #[test]
    fn deserializes_ingestion_record() {
        let json = r#"{
            "id": "abc123",
            "title": "Night Drive",
            "artist": "Neon City",
            "duration": 245.5,
            "url": "media/night-drive.m4a",
            "thumbnail": "thumbs/night-drive.jpg",
            "metadata": {
                "album": "Night Drive EP",
                "year": 2019,
                "genre": "synthwave",
                "duration": 245.5,
                "uploader": "NeonCityOfficial"
            },
            "tags": ["synth", "night"],
            "rating": 4,
            "playCount": 12,
            "dateAdded": "2024-03-01T12:00:00Z"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.id.as_str(), "abc123");
        assert_eq!(track.duration_secs, 245.5);
        assert_eq!(track.album(), Some("Night Drive EP"));
        assert_eq!(track.year(), Some(2019));
        assert_eq!(track.play_count, 12);
    }

    #[test]
    fn deserializes_minimal_record_with_defaults() {
        let json = r#"{
            "id": "min1",
            "title": "Untitled",
            "artist": "Unknown",
            "duration": 10,
            "url": "media/untitled.m4a"
        }"#;

        let track: Track = serde_json::from_str(json).unwrap();
        assert_eq!(track.rating, 0);
        assert_eq!(track.play_count, 0);
        assert!(track.tags.is_empty());
        assert!(track.date_added.is_none());
        assert_eq!(track.metadata, TrackDetails::default());
    }
}
