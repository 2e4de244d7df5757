//! Persisted settings record
//!
//! The restored-on-startup slice of user state: playback preferences, the
//! filter preference, and (when no separate index files are deployed) the
//! playlists and tracks themselves. The record carries an explicit schema
//! version; loading runs an explicit migration/defaulting step instead of
//! shape-free merging - any field absent from an older record receives its
//! documented default.

use crate::error::{Result, StorageError};
use muse_core::types::{FilterSpec, PlayerPrefs, Playlist, RepeatMode, Track};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Current settings schema version
pub const SCHEMA_VERSION: u32 = 2;

/// The persisted settings record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedState {
    /// Schema version this record was written with
    pub version: u32,

    /// Volume in [0, 1]
    pub volume: f32,

    /// Playback rate in [0.25, 4]
    pub playback_rate: f32,

    /// Repeat mode
    pub repeat_mode: RepeatMode,

    /// Shuffle flag
    pub shuffle_mode: bool,

    /// User playlists (used when no playlist index file is deployed)
    pub playlists: Vec<Playlist>,

    /// Track records (used when no track index file is deployed)
    pub tracks: Vec<Track>,

    /// Library filter preference
    pub filter_options: FilterSpec,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            volume: 1.0,
            playback_rate: 1.0,
            repeat_mode: RepeatMode::None,
            shuffle_mode: false,
            playlists: Vec::new(),
            tracks: Vec::new(),
            filter_options: FilterSpec::default(),
        }
    }
}

impl PersistedState {
    /// The playback-preference slice of the record
    pub fn prefs(&self) -> PlayerPrefs {
        PlayerPrefs {
            volume: self.volume,
            playback_rate: self.playback_rate,
            repeat_mode: self.repeat_mode,
            shuffle_mode: self.shuffle_mode,
        }
    }

    /// Update the playback-preference slice
    pub fn set_prefs(&mut self, prefs: &PlayerPrefs) {
        self.volume = prefs.volume;
        self.playback_rate = prefs.playback_rate;
        self.repeat_mode = prefs.repeat_mode;
        self.shuffle_mode = prefs.shuffle_mode;
    }
}

/// File-backed settings store
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Create a store over the given settings file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The settings file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted record, migrating and defaulting as needed
    ///
    /// A missing file yields the defaults; a record written by a newer
    /// schema is refused rather than guessed at.
    pub fn load(&self) -> Result<PersistedState> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(PersistedState::default());
        }

        let raw = fs::read_to_string(&self.path)?;
        let value: Value = serde_json::from_str(&raw)?;
        migrate(value)
    }

    /// Write the record, stamped with the current schema version
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut stamped = state.clone();
        stamped.version = SCHEMA_VERSION;
        let json = serde_json::to_string_pretty(&stamped)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// Explicit migration/defaulting step
///
/// v0/v1 records predate the dedicated repeat-mode field and stored a plain
/// `repeat` boolean. Everything absent after migration falls back to the
/// field defaults via serde.
fn migrate(mut value: Value) -> Result<PersistedState> {
    let version = value
        .get("version")
        .and_then(Value::as_u64)
        .unwrap_or(0) as u32;

    if version > SCHEMA_VERSION {
        return Err(StorageError::UnsupportedVersion(version));
    }

    if version < 2 {
        if let Some(record) = value.as_object_mut() {
            if !record.contains_key("repeatMode") {
                if let Some(legacy) = record.remove("repeat") {
                    let mode = if legacy.as_bool() == Some(true) {
                        "all"
                    } else {
                        "none"
                    };
                    record.insert("repeatMode".to_string(), Value::String(mode.to_string()));
                }
            }
        }
    }

    let mut state: PersistedState = serde_json::from_value(value)?;
    state.version = SCHEMA_VERSION;
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_matches_documented_defaults() {
        let state = PersistedState::default();
        assert_eq!(state.version, SCHEMA_VERSION);
        assert_eq!(state.volume, 1.0);
        assert_eq!(state.playback_rate, 1.0);
        assert_eq!(state.repeat_mode, RepeatMode::None);
        assert!(!state.shuffle_mode);
        assert!(state.playlists.is_empty());
        assert!(state.tracks.is_empty());
    }

    #[test]
    fn migrate_defaults_absent_fields() {
        let value: Value = serde_json::from_str(r#"{"version": 2, "volume": 0.7}"#).unwrap();
        let state = migrate(value).unwrap();
        assert_eq!(state.volume, 0.7);
        assert_eq!(state.playback_rate, 1.0);
        assert_eq!(state.repeat_mode, RepeatMode::None);
    }

    #[test]
    fn migrate_lifts_legacy_repeat_boolean() {
        let value: Value =
            serde_json::from_str(r#"{"volume": 0.5, "repeat": true, "shuffleMode": true}"#)
                .unwrap();
        let state = migrate(value).unwrap();
        assert_eq!(state.repeat_mode, RepeatMode::All);
        assert!(state.shuffle_mode);
        assert_eq!(state.version, SCHEMA_VERSION);
    }

    #[test]
    fn migrate_refuses_future_schema() {
        let value: Value = serde_json::from_str(r#"{"version": 99}"#).unwrap();
        assert!(matches!(
            migrate(value),
            Err(StorageError::UnsupportedVersion(99))
        ));
    }
}
