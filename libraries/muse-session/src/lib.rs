//! Muse - Session
//!
//! The composition root. A [`Session`] owns the player (with its injected
//! engine), the playlist manager over the in-memory store, the settings
//! store, and the optional media-control bridge, and routes data between
//! them:
//!
//! - bootstrap restores persisted preferences and the library
//! - [`Session::pump`] drains bridge commands into player operations and
//!   player events into outbound publication and persistence
//! - track deletion cascades through store, playlists, queue, and the
//!   loaded track
//!
//! Persistence failures are logged and surfaced per operation; the
//! in-memory store remains the source of truth for the session.

#![forbid(unsafe_code)]

use muse_core::error::{MuseError, Result};
use muse_core::store::MediaStore;
use muse_core::types::{FilterSpec, PlaylistId, RepeatMode, Track, TrackId};
use muse_library::{filter, PlaylistManager};
use muse_media::{BridgeConfig, MediaControlBridge, TransportCommand};
use muse_playback::{PlaybackEngine, PlaybackEvent, Player};
use muse_storage::{
    load_playlist_index, load_track_index, MemoryStore, PersistedState, SettingsStore,
};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where the session finds its persisted state
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Settings record path
    pub settings_path: PathBuf,

    /// Bulk track index path; when the file exists it is authoritative for
    /// the track collection
    pub track_index_path: Option<PathBuf>,

    /// Bulk playlist index path; when the file exists it is authoritative
    /// for user playlists
    pub playlist_index_path: Option<PathBuf>,

    /// Whether to attach the OS media-control surface
    pub enable_media_controls: bool,
}

impl SessionConfig {
    /// Configuration with persistence rooted at the given directory
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            settings_path: root.join("settings.json"),
            track_index_path: Some(root.join("tracks.json")),
            playlist_index_path: Some(root.join("playlists.json")),
            enable_media_controls: true,
        }
    }
}

/// A running player session
pub struct Session {
    player: Player,
    library: PlaylistManager<MemoryStore>,
    settings: SettingsStore,
    bridge: Option<MediaControlBridge>,
    filter: FilterSpec,
}

impl Session {
    /// Build a session: restore settings, load the library, wire the bridge
    pub fn bootstrap(config: &SessionConfig, engine: Box<dyn PlaybackEngine>) -> Result<Self> {
        let settings = SettingsStore::new(&config.settings_path);
        let state = match settings.load() {
            Ok(state) => state,
            Err(err) => {
                warn!("settings unreadable, starting from defaults: {err}");
                PersistedState::default()
            }
        };

        // Index files win when deployed; the settings record's embedded
        // library is the single-file fallback.
        let tracks = match existing_path(config.track_index_path.as_ref()) {
            Some(path) => load_track_index(path).map_err(MuseError::from)?.tracks,
            None => state.tracks.clone(),
        };
        let playlists = match existing_path(config.playlist_index_path.as_ref()) {
            Some(path) => {
                load_playlist_index(path)
                    .map_err(MuseError::from)?
                    .playlists
            }
            None => state.playlists.clone(),
        };

        let mut library = PlaylistManager::new(MemoryStore::with_library(tracks, playlists));
        library.sync_all_tracks()?;

        let player = Player::new(engine, state.prefs());

        let bridge = if config.enable_media_controls {
            MediaControlBridge::attach(&BridgeConfig::default())
        } else {
            None
        };

        debug!(
            tracks = library.store().track_count(),
            playlists = library.store().playlist_count(),
            media_controls = bridge.is_some(),
            "session ready"
        );

        Ok(Self {
            player,
            library,
            settings,
            bridge,
            filter: state.filter_options,
        })
    }

    // ===== Event Loop =====

    /// One turn of the session loop
    ///
    /// Drains inbound transport commands, advances the player state machine,
    /// persists play counts, publishes the latest snapshot outward, and
    /// returns the playback events for the host UI.
    pub fn pump(&mut self) -> Vec<PlaybackEvent> {
        let commands = self
            .bridge
            .as_mut()
            .map(MediaControlBridge::poll_commands)
            .unwrap_or_default();
        for command in commands {
            self.apply_command(command);
        }

        self.player.pump();
        let events = self.player.take_events();

        let mut prefs_changed = false;
        let mut publish = false;
        for event in &events {
            match event {
                PlaybackEvent::TrackLoaded {
                    track_id,
                    play_count,
                } => {
                    self.persist_play_count(track_id, *play_count);
                    publish = true;
                }
                PlaybackEvent::TrackChanged { .. }
                | PlaybackEvent::StateChanged { .. }
                | PlaybackEvent::PositionUpdate { .. } => publish = true,
                PlaybackEvent::VolumeChanged { .. } | PlaybackEvent::RateChanged { .. } => {
                    prefs_changed = true;
                }
                _ => {}
            }
        }

        if publish {
            if let Some(bridge) = self.bridge.as_mut() {
                // Always the most recent snapshot, never an intermediate one
                bridge.publish(&self.player.snapshot());
            }
        }

        if prefs_changed {
            if let Err(err) = self.save() {
                warn!("preference save failed: {err}");
            }
        }

        events
    }

    /// Apply a transport command from the control surface (or host shell)
    pub fn apply_command(&mut self, command: TransportCommand) {
        match command {
            TransportCommand::Play => {
                if let Err(err) = self.player.play() {
                    warn!("transport play rejected: {err}");
                }
            }
            TransportCommand::Pause => self.player.pause(),
            TransportCommand::Toggle => {
                if let Err(err) = self.player.toggle_play() {
                    warn!("transport toggle rejected: {err}");
                }
            }
            TransportCommand::Stop => self.player.stop(),
            TransportCommand::Next => {
                if let Err(err) = self.player.next() {
                    warn!("transport next rejected: {err}");
                }
            }
            TransportCommand::Previous => {
                if let Err(err) = self.player.previous() {
                    warn!("transport previous rejected: {err}");
                }
            }
            TransportCommand::SeekForward(offset) => self.player.seek_forward(offset),
            TransportCommand::SeekBackward(offset) => self.player.seek_backward(offset),
            TransportCommand::SeekTo(position) => self.player.seek(position),
            TransportCommand::SetVolume(volume) => self.player.set_volume(volume as f32),
        }
    }

    // ===== Library Operations =====

    /// Queue a playlist and start playing at the given position
    ///
    /// Dangling references are filtered out before queueing, so a playlist
    /// that outlived some tracks still plays.
    pub fn play_playlist(&mut self, playlist_id: &PlaylistId, start_index: usize) -> Result<()> {
        let tracks = self.library.resolve_tracks(playlist_id)?;
        self.player
            .play_queue(tracks, start_index)
            .map_err(|err| MuseError::playback(err.to_string()))
    }

    /// Delete a track everywhere: store, playlists, queue, loaded track
    pub fn delete_track(&mut self, id: &TrackId) -> Result<()> {
        self.library.delete_track(id)?;
        self.library.sync_all_tracks()?;
        self.player.remove_track(id);
        Ok(())
    }

    /// The library view under the current filter preference
    pub fn filtered_tracks(&self) -> Result<Vec<Track>> {
        let tracks = self.library.store().all_tracks()?;
        Ok(filter::apply(&tracks, &self.filter))
    }

    /// Replace the filter preference and persist it
    pub fn set_filter(&mut self, filter: FilterSpec) {
        self.filter = filter;
        if let Err(err) = self.save() {
            warn!("filter preference save failed: {err}");
        }
    }

    /// Set repeat mode and persist the preference
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.player.set_repeat(mode);
        if let Err(err) = self.save() {
            warn!("preference save failed: {err}");
        }
    }

    /// Set the shuffle flag and persist the preference
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.player.set_shuffle(shuffle);
        if let Err(err) = self.save() {
            warn!("preference save failed: {err}");
        }
    }

    // ===== Persistence =====

    /// Write the persisted settings record
    ///
    /// Failure leaves in-memory state untouched; the session keeps running
    /// on the in-memory store.
    pub fn save(&self) -> Result<()> {
        let mut state = PersistedState::default();
        state.set_prefs(&self.player.prefs());
        state.filter_options = self.filter.clone();
        state.playlists = self
            .library
            .store()
            .all_playlists()?
            .into_iter()
            .filter(|p| !p.is_default)
            .collect();
        state.tracks = self.library.store().all_tracks()?;

        self.settings.save(&state).map_err(MuseError::from)
    }

    // ===== Accessors =====

    /// The player
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// The playlist manager
    pub fn library(&self) -> &PlaylistManager<MemoryStore> {
        &self.library
    }

    /// Mutable access to the playlist manager
    pub fn library_mut(&mut self) -> &mut PlaylistManager<MemoryStore> {
        &mut self.library
    }

    /// The current filter preference
    pub fn filter(&self) -> &FilterSpec {
        &self.filter
    }

    /// Whether the media-control surface is attached
    pub fn has_media_controls(&self) -> bool {
        self.bridge.is_some()
    }

    // ===== Internal =====

    /// Mirror a play-count increment into the store
    fn persist_play_count(&mut self, track_id: &TrackId, play_count: u64) {
        let store = self.library.store_mut();
        match store.track(track_id) {
            Ok(Some(mut track)) => {
                track.play_count = track.play_count.max(play_count);
                if let Err(err) = store.put_track(track) {
                    warn!("play-count persistence failed: {err}");
                }
            }
            Ok(None) => {}
            Err(err) => warn!("play-count lookup failed: {err}"),
        }
    }
}

/// Keep only paths that exist on disk
fn existing_path(path: Option<&PathBuf>) -> Option<&PathBuf> {
    path.filter(|p| p.exists())
}
