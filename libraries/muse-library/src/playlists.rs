//! Playlist management
//!
//! CRUD plus derived views over playlist records, backed by a
//! [`MediaStore`]. Track references may dangle; reads filter them out.

use crate::export::{ExportMetadata, ExportedPlaylist, ExportedTrack, PlaylistExport};
use chrono::Utc;
use muse_core::error::{MuseError, Result};
use muse_core::store::MediaStore;
use muse_core::types::{Playlist, PlaylistId, Track, TrackId};
use tracing::debug;

/// Derived statistics for a playlist
///
/// Computed over resolved tracks only; dangling references are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaylistStats {
    /// Number of resolved tracks
    pub track_count: usize,

    /// Sum of resolved track durations in seconds
    pub total_duration_secs: f64,

    /// Mean rating over resolved tracks (0 when empty)
    pub average_rating: f64,
}

/// Playlist manager over a media store
pub struct PlaylistManager<S: MediaStore> {
    store: S,
}

impl<S: MediaStore> PlaylistManager<S> {
    /// Create a manager over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Shared access to the backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the backing store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    // ===== CRUD =====

    /// Create a new playlist
    pub fn create(&mut self, name: &str, description: Option<String>) -> Result<Playlist> {
        if name.trim().is_empty() {
            return Err(MuseError::invalid_input("playlist name must not be empty"));
        }
        let playlist = Playlist::new(name, description);
        self.store.put_playlist(playlist.clone())?;
        Ok(playlist)
    }

    /// Get a playlist by id
    pub fn get(&self, id: &PlaylistId) -> Result<Playlist> {
        self.store
            .playlist(id)?
            .ok_or_else(|| MuseError::PlaylistNotFound(id.clone()))
    }

    /// All playlists
    pub fn list(&self) -> Result<Vec<Playlist>> {
        self.store.all_playlists()
    }

    /// Rename a playlist and replace its description
    pub fn rename(
        &mut self,
        id: &PlaylistId,
        name: &str,
        description: Option<String>,
    ) -> Result<Playlist> {
        if name.trim().is_empty() {
            return Err(MuseError::invalid_input("playlist name must not be empty"));
        }
        let mut playlist = self.get(id)?;
        playlist.name = name.to_string();
        playlist.description = description;
        playlist.touch();
        self.store.put_playlist(playlist.clone())?;
        Ok(playlist)
    }

    /// Delete a playlist
    ///
    /// The system-maintained "All Tracks" playlist cannot be deleted; it is
    /// regenerated from the track collection.
    pub fn delete(&mut self, id: &PlaylistId) -> Result<()> {
        let playlist = self.get(id)?;
        if playlist.is_default {
            return Err(MuseError::invalid_input(
                "the All Tracks playlist is system-managed",
            ));
        }
        self.store.delete_playlist(id)
    }

    // ===== Positional Editing =====

    /// Append a track to a playlist
    pub fn add_track(&mut self, playlist_id: &PlaylistId, track_id: &TrackId) -> Result<()> {
        if self.store.track(track_id)?.is_none() {
            return Err(MuseError::TrackNotFound(track_id.clone()));
        }
        let mut playlist = self.get(playlist_id)?;
        playlist.tracks.push(track_id.clone());
        playlist.touch();
        self.store.put_playlist(playlist)
    }

    /// Remove the track reference at the given position
    pub fn remove_at(&mut self, playlist_id: &PlaylistId, index: usize) -> Result<TrackId> {
        let mut playlist = self.get(playlist_id)?;
        if index >= playlist.tracks.len() {
            return Err(MuseError::invalid_input(format!(
                "index {index} out of range for playlist of {} tracks",
                playlist.tracks.len()
            )));
        }
        let removed = playlist.tracks.remove(index);
        playlist.touch();
        self.store.put_playlist(playlist)?;
        Ok(removed)
    }

    /// Move a single entry from one position to another
    ///
    /// All other relative ordering is preserved. Out-of-range indices make
    /// the whole operation a no-op.
    pub fn reorder(&mut self, playlist_id: &PlaylistId, from: usize, to: usize) -> Result<()> {
        let mut playlist = self.get(playlist_id)?;
        let len = playlist.tracks.len();
        if from >= len || to >= len {
            return Err(MuseError::invalid_input(format!(
                "cannot move {from} -> {to} in playlist of {len} tracks"
            )));
        }
        if from == to {
            return Ok(());
        }
        let entry = playlist.tracks.remove(from);
        playlist.tracks.insert(to, entry);
        playlist.touch();
        self.store.put_playlist(playlist)
    }

    // ===== Derived Views =====

    /// Resolve a playlist's tracks, filtering dangling references
    pub fn resolve_tracks(&self, id: &PlaylistId) -> Result<Vec<Track>> {
        let playlist = self.get(id)?;
        let mut tracks = Vec::with_capacity(playlist.tracks.len());
        for track_id in &playlist.tracks {
            if let Some(track) = self.store.track(track_id)? {
                tracks.push(track);
            }
        }
        Ok(tracks)
    }

    /// Compute playlist statistics over resolved tracks
    pub fn stats(&self, id: &PlaylistId) -> Result<PlaylistStats> {
        let tracks = self.resolve_tracks(id)?;
        let track_count = tracks.len();
        let total_duration_secs: f64 = tracks.iter().map(|t| t.duration_secs.max(0.0)).sum();
        let average_rating = if track_count == 0 {
            0.0
        } else {
            tracks.iter().map(|t| f64::from(t.rating)).sum::<f64>() / track_count as f64
        };

        Ok(PlaylistStats {
            track_count,
            total_duration_secs,
            average_rating,
        })
    }

    /// Case-insensitive substring search over name and description
    pub fn search(&self, query: &str) -> Result<Vec<Playlist>> {
        let needle = query.trim().to_lowercase();
        Ok(self
            .store
            .all_playlists()?
            .into_iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            })
            .collect())
    }

    // ===== Export / Import =====

    /// Take a portable snapshot of a playlist
    ///
    /// The snapshot carries resolved track metadata and no internal ids, so
    /// it can be imported into a different library.
    pub fn export(&self, id: &PlaylistId) -> Result<PlaylistExport> {
        let playlist = self.get(id)?;
        let tracks = self.resolve_tracks(id)?;
        let total_tracks = tracks.len();
        let total_duration: f64 = tracks.iter().map(|t| t.duration_secs.max(0.0)).sum();

        Ok(PlaylistExport {
            playlist: ExportedPlaylist {
                name: playlist.name,
                description: playlist.description,
                tracks: tracks
                    .into_iter()
                    .map(|t| ExportedTrack {
                        title: t.title,
                        artist: t.artist,
                        duration: t.duration_secs,
                        url: t.url,
                    })
                    .collect(),
            },
            metadata: ExportMetadata {
                exported_at: Utc::now(),
                total_tracks,
                total_duration,
            },
        })
    }

    /// Materialize a snapshot as new records
    ///
    /// Always assigns fresh ids; imported records never collide with
    /// existing ones.
    pub fn import(&mut self, snapshot: &PlaylistExport) -> Result<Playlist> {
        let mut playlist = Playlist::new(
            snapshot.playlist.name.clone(),
            snapshot.playlist.description.clone(),
        );

        for exported in &snapshot.playlist.tracks {
            let mut track = Track::new(
                exported.title.clone(),
                exported.artist.clone(),
                exported.url.clone(),
            );
            track.duration_secs = exported.duration;
            playlist.tracks.push(track.id.clone());
            self.store.put_track(track)?;
        }

        self.store.put_playlist(playlist.clone())?;
        debug!(
            playlist = %playlist.id,
            tracks = playlist.tracks.len(),
            "imported playlist snapshot"
        );
        Ok(playlist)
    }

    // ===== System Playlist & Cascades =====

    /// Regenerate the system "All Tracks" playlist from the track collection
    ///
    /// Called whenever the track collection changes.
    pub fn sync_all_tracks(&mut self) -> Result<Playlist> {
        let track_ids: Vec<TrackId> = self
            .store
            .all_tracks()?
            .into_iter()
            .map(|t| t.id)
            .collect();

        let existing = self
            .store
            .all_playlists()?
            .into_iter()
            .find(|p| p.is_default);

        let playlist = match existing {
            Some(mut playlist) => {
                playlist.tracks = track_ids;
                playlist.touch();
                playlist
            }
            None => Playlist::all_tracks(track_ids),
        };

        self.store.put_playlist(playlist.clone())?;
        Ok(playlist)
    }

    /// Delete a track and purge it from every playlist
    ///
    /// The caller is responsible for the playback-side cascade (queue and
    /// current track).
    pub fn delete_track(&mut self, id: &TrackId) -> Result<()> {
        self.store.delete_track(id)?;

        for mut playlist in self.store.all_playlists()? {
            if playlist.tracks.iter().any(|t| t == id) {
                playlist.tracks.retain(|t| t != id);
                playlist.touch();
                self.store.put_playlist(playlist)?;
            }
        }

        debug!(track = %id, "deleted track and purged playlist references");
        Ok(())
    }
}
