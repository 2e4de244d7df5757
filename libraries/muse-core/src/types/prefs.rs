/// Persisted playback preferences
use serde::{Deserialize, Serialize};

/// Repeat mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop when the queue ends
    #[default]
    None,
    /// Loop the current track only
    One,
    /// Loop the entire queue
    All,
}

/// The slice of player state that survives restarts
///
/// Transient playback position and the loaded track are deliberately not
/// part of this record; a restart never resumes mid-track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerPrefs {
    /// Volume in [0, 1]
    pub volume: f32,

    /// Playback rate in [0.25, 4]
    pub playback_rate: f32,

    /// Repeat mode
    pub repeat_mode: RepeatMode,

    /// Shuffle flag
    pub shuffle_mode: bool,
}

impl Default for PlayerPrefs {
    fn default() -> Self {
        Self {
            volume: 1.0,
            playback_rate: 1.0,
            repeat_mode: RepeatMode::None,
            shuffle_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_mode_wire_names() {
        assert_eq!(serde_json::to_string(&RepeatMode::None).unwrap(), "\"none\"");
        assert_eq!(serde_json::to_string(&RepeatMode::One).unwrap(), "\"one\"");
        assert_eq!(serde_json::to_string(&RepeatMode::All).unwrap(), "\"all\"");
    }

    #[test]
    fn prefs_default() {
        let prefs = PlayerPrefs::default();
        assert_eq!(prefs.volume, 1.0);
        assert_eq!(prefs.playback_rate, 1.0);
        assert_eq!(prefs.repeat_mode, RepeatMode::None);
        assert!(!prefs.shuffle_mode);
    }

    #[test]
    fn prefs_partial_record_defaults() {
        let prefs: PlayerPrefs = serde_json::from_str(r#"{"volume": 0.5}"#).unwrap();
        assert_eq!(prefs.volume, 0.5);
        assert_eq!(prefs.playback_rate, 1.0);
    }
}
