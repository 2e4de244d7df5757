//! Media-control bridge
//!
//! Owns the platform `MediaControls` handle. Outbound publication mirrors
//! player snapshots to the surface; inbound events are queued as
//! [`TransportCommand`]s and drained by the session loop. No polling in
//! either direction.

use crate::artwork::artwork_set;
use crate::command::TransportCommand;
use muse_playback::PlayerSnapshot;
use souvlaki::{MediaControls, MediaMetadata, MediaPlayback, MediaPosition, PlatformConfig};
use std::sync::mpsc::{channel, Receiver};
use tracing::{debug, warn};

/// Bridge identity on the control surface
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// D-Bus well-known name fragment (Linux)
    pub dbus_name: String,

    /// Human-readable player name
    pub display_name: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            dbus_name: "muse".to_string(),
            display_name: "Muse".to_string(),
        }
    }
}

/// Two-way bridge between the player and the OS media-control surface
pub struct MediaControlBridge {
    controls: MediaControls,
    commands: Receiver<TransportCommand>,

    /// Last published track metadata, for change suppression
    last_track: Option<muse_playback::NowPlaying>,
}

impl MediaControlBridge {
    /// Attach to the platform control surface
    ///
    /// Returns `None` when the surface is unavailable (headless session,
    /// unsupported platform); absence is a normal configuration, never an
    /// error.
    pub fn attach(config: &BridgeConfig) -> Option<Self> {
        let platform = PlatformConfig {
            dbus_name: &config.dbus_name,
            display_name: &config.display_name,
            hwnd: None,
        };

        let mut controls = match MediaControls::new(platform) {
            Ok(controls) => controls,
            Err(err) => {
                warn!("media-control surface unavailable: {err:?}");
                return None;
            }
        };

        let (tx, rx) = channel();
        let attach_result = controls.attach(move |event| {
            if let Some(command) = TransportCommand::from_event(event) {
                // The receiver may be gone during shutdown; nothing to do
                let _ = tx.send(command);
            }
        });

        if let Err(err) = attach_result {
            warn!("media-control event registration failed: {err:?}");
            return None;
        }

        debug!("media-control surface attached");
        Some(Self {
            controls,
            commands: rx,
            last_track: None,
        })
    }

    /// Publish the given snapshot to the control surface
    ///
    /// Metadata is republished only when the track changed; transport state
    /// and progress always reflect this snapshot.
    pub fn publish(&mut self, snapshot: &PlayerSnapshot) {
        if self.last_track != snapshot.track {
            if let Some(track) = &snapshot.track {
                let artwork = track.thumbnail.as_deref().map(artwork_set);
                let cover = artwork
                    .as_ref()
                    .and_then(|set| set.last())
                    .map(|a| a.src.clone());

                let metadata = MediaMetadata {
                    title: Some(track.title.as_str()),
                    artist: Some(track.artist.as_str()),
                    // Unknown album publishes as an empty string, not None
                    album: Some(track.album.as_deref().unwrap_or("")),
                    cover_url: cover.as_deref(),
                    duration: snapshot.duration,
                };

                if let Err(err) = self.controls.set_metadata(metadata) {
                    warn!("now-playing metadata update failed: {err:?}");
                }
            }
            self.last_track = snapshot.track.clone();
        }

        let progress = Some(MediaPosition(snapshot.position));
        let playback = if snapshot.is_playing {
            MediaPlayback::Playing { progress }
        } else {
            MediaPlayback::Paused { progress }
        };

        if let Err(err) = self.controls.set_playback(playback) {
            warn!("transport state update failed: {err:?}");
        }
    }

    /// Drain transport commands received from the surface
    pub fn poll_commands(&mut self) -> Vec<TransportCommand> {
        self.commands.try_iter().collect()
    }
}
