//! Playlist manager integration tests
//!
//! Runs the manager against the in-memory store: CRUD, reorder, stats over
//! dangling references, search, export/import round trips, and cascades.

use muse_core::types::{Track, TrackId};
use muse_core::{MediaStore, MuseError};
use muse_library::PlaylistManager;
use muse_storage::MemoryStore;

// ===== Test Helpers =====

fn create_track(id: &str, title: &str, artist: &str, duration_secs: f64) -> Track {
    let mut track = Track::new(title, artist, format!("media/{}.m4a", id));
    track.id = TrackId::new(id);
    track.duration_secs = duration_secs;
    track
}

fn manager_with_tracks(tracks: Vec<Track>) -> PlaylistManager<MemoryStore> {
    PlaylistManager::new(MemoryStore::with_library(tracks, Vec::new()))
}

fn seeded_manager() -> PlaylistManager<MemoryStore> {
    manager_with_tracks(vec![
        create_track("a", "Alpha", "Artist One", 120.0),
        create_track("b", "Beta", "Artist Two", 180.0),
        create_track("c", "Gamma", "Artist Three", 240.0),
    ])
}

// ===== CRUD =====

#[test]
fn create_and_get_playlist() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Favorites", Some("the good ones".to_string())).unwrap();

    let loaded = manager.get(&playlist.id).unwrap();
    assert_eq!(loaded.name, "Favorites");
    assert_eq!(loaded.description.as_deref(), Some("the good ones"));
    assert!(!loaded.is_default);
}

#[test]
fn duplicate_names_are_permitted() {
    let mut manager = seeded_manager();
    let first = manager.create("Mix", None).unwrap();
    let second = manager.create("Mix", None).unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(manager.list().unwrap().len(), 2);
}

#[test]
fn empty_name_is_rejected() {
    let mut manager = seeded_manager();
    assert!(matches!(
        manager.create("   ", None),
        Err(MuseError::InvalidInput(_))
    ));
}

#[test]
fn rename_updates_name_and_timestamp() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Old Name", None).unwrap();

    let renamed = manager
        .rename(&playlist.id, "New Name", Some("desc".to_string()))
        .unwrap();
    assert_eq!(renamed.name, "New Name");
    assert!(renamed.updated_at >= playlist.updated_at);
}

#[test]
fn delete_removes_user_playlist() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Disposable", None).unwrap();

    manager.delete(&playlist.id).unwrap();
    assert!(matches!(
        manager.get(&playlist.id),
        Err(MuseError::PlaylistNotFound(_))
    ));
}

#[test]
fn system_playlist_cannot_be_deleted() {
    let mut manager = seeded_manager();
    let all = manager.sync_all_tracks().unwrap();

    assert!(matches!(
        manager.delete(&all.id),
        Err(MuseError::InvalidInput(_))
    ));
    assert!(manager.get(&all.id).is_ok());
}

// ===== Positional Editing & Reorder =====

#[test]
fn add_track_requires_existing_track() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Mix", None).unwrap();

    manager.add_track(&playlist.id, &TrackId::new("a")).unwrap();
    assert!(matches!(
        manager.add_track(&playlist.id, &TrackId::new("ghost")),
        Err(MuseError::TrackNotFound(_))
    ));

    assert_eq!(manager.get(&playlist.id).unwrap().tracks.len(), 1);
}

#[test]
fn reorder_moves_single_entry_preserving_rest() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Ordered", None).unwrap();
    for id in ["a", "b", "c"] {
        manager.add_track(&playlist.id, &TrackId::new(id)).unwrap();
    }

    // [A, B, C] with 0 -> 2 becomes [B, C, A]
    manager.reorder(&playlist.id, 0, 2).unwrap();

    let reordered = manager.get(&playlist.id).unwrap();
    let ids: Vec<&str> = reordered.tracks.iter().map(TrackId::as_str).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn reorder_leaves_other_playlists_untouched() {
    let mut manager = seeded_manager();
    let target = manager.create("Target", None).unwrap();
    let bystander = manager.create("Bystander", None).unwrap();
    for id in ["a", "b", "c"] {
        manager.add_track(&target.id, &TrackId::new(id)).unwrap();
        manager.add_track(&bystander.id, &TrackId::new(id)).unwrap();
    }

    manager.reorder(&target.id, 0, 2).unwrap();

    let bystander_ids: Vec<String> = manager
        .get(&bystander.id)
        .unwrap()
        .tracks
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();
    assert_eq!(bystander_ids, vec!["a", "b", "c"]);
}

#[test]
fn reorder_out_of_range_is_a_noop() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Short", None).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("a")).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("b")).unwrap();

    assert!(matches!(
        manager.reorder(&playlist.id, 0, 5),
        Err(MuseError::InvalidInput(_))
    ));

    let ids: Vec<String> = manager
        .get(&playlist.id)
        .unwrap()
        .tracks
        .iter()
        .map(|t| t.as_str().to_string())
        .collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn remove_at_returns_removed_id() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Mix", None).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("a")).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("b")).unwrap();

    let removed = manager.remove_at(&playlist.id, 0).unwrap();
    assert_eq!(removed.as_str(), "a");
    assert_eq!(manager.get(&playlist.id).unwrap().tracks.len(), 1);

    assert!(manager.remove_at(&playlist.id, 7).is_err());
}

// ===== Stats & Search =====

#[test]
fn stats_ignore_dangling_references() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Mixed", None).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("a")).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("b")).unwrap();

    // Delete one referenced track; the reference dangles
    manager.store_mut().delete_track(&TrackId::new("b")).unwrap();

    let stats = manager.stats(&playlist.id).unwrap();
    assert_eq!(stats.track_count, 1);
    assert_eq!(stats.total_duration_secs, 120.0);
}

#[test]
fn stats_average_rating() {
    let mut manager = manager_with_tracks(vec![
        {
            let mut t = create_track("r2", "Two Stars", "A", 60.0);
            t.rating = 2;
            t
        },
        {
            let mut t = create_track("r4", "Four Stars", "B", 60.0);
            t.rating = 4;
            t
        },
    ]);
    let playlist = manager.create("Rated", None).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("r2")).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("r4")).unwrap();

    let stats = manager.stats(&playlist.id).unwrap();
    assert_eq!(stats.average_rating, 3.0);
}

#[test]
fn empty_playlist_stats_are_zero() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Empty", None).unwrap();

    let stats = manager.stats(&playlist.id).unwrap();
    assert_eq!(stats.track_count, 0);
    assert_eq!(stats.total_duration_secs, 0.0);
    assert_eq!(stats.average_rating, 0.0);
}

#[test]
fn search_matches_name_and_description_case_insensitively() {
    let mut manager = seeded_manager();
    manager.create("Morning Run", None).unwrap();
    manager
        .create("Calm", Some("for late NIGHT driving".to_string()))
        .unwrap();
    manager.create("Party", None).unwrap();

    let hits = manager.search("night").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Calm");

    let hits = manager.search("RUN").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Morning Run");
}

// ===== Export / Import =====

#[test]
fn export_then_import_round_trips_with_fresh_ids() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Tour", Some("on the road".to_string())).unwrap();
    for id in ["a", "b", "c"] {
        manager.add_track(&playlist.id, &TrackId::new(id)).unwrap();
    }

    let snapshot = manager.export(&playlist.id).unwrap();
    assert_eq!(snapshot.metadata.total_tracks, 3);
    assert_eq!(snapshot.metadata.total_duration, 540.0);

    let imported = manager.import(&snapshot).unwrap();

    assert_ne!(imported.id, playlist.id);
    assert_eq!(imported.name, "Tour");
    assert_eq!(imported.tracks.len(), 3);

    // Imported track ids are disjoint from the originals
    for new_id in &imported.tracks {
        assert!(!["a", "b", "c"].contains(&new_id.as_str()));
    }

    // Titles and artists survive the round trip
    let originals = manager.resolve_tracks(&playlist.id).unwrap();
    let copies = manager.resolve_tracks(&imported.id).unwrap();
    let titles = |tracks: &[Track]| -> Vec<String> {
        tracks.iter().map(|t| t.title.clone()).collect()
    };
    let artists = |tracks: &[Track]| -> Vec<String> {
        tracks.iter().map(|t| t.artist.clone()).collect()
    };
    assert_eq!(titles(&originals), titles(&copies));
    assert_eq!(artists(&originals), artists(&copies));
}

#[test]
fn export_excludes_internal_ids() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Portable", None).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("a")).unwrap();

    let snapshot = manager.export(&playlist.id).unwrap();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(!json.contains(playlist.id.as_str()));
    assert!(!json.contains("\"id\""));
}

#[test]
fn export_skips_dangling_references() {
    let mut manager = seeded_manager();
    let playlist = manager.create("Partial", None).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("a")).unwrap();
    manager.add_track(&playlist.id, &TrackId::new("b")).unwrap();
    manager.store_mut().delete_track(&TrackId::new("b")).unwrap();

    let snapshot = manager.export(&playlist.id).unwrap();
    assert_eq!(snapshot.playlist.tracks.len(), 1);
    assert_eq!(snapshot.playlist.tracks[0].title, "Alpha");
}

// ===== System Playlist & Cascades =====

#[test]
fn sync_all_tracks_regenerates_on_library_change() {
    let mut manager = seeded_manager();
    let all = manager.sync_all_tracks().unwrap();
    assert!(all.is_default);
    assert_eq!(all.tracks.len(), 3);

    manager
        .store_mut()
        .put_track(create_track("d", "Delta", "Artist Four", 60.0))
        .unwrap();
    let all_again = manager.sync_all_tracks().unwrap();

    assert_eq!(all_again.id, all.id); // same system playlist, refreshed
    assert_eq!(all_again.tracks.len(), 4);
}

#[test]
fn delete_track_purges_every_playlist() {
    let mut manager = seeded_manager();
    let first = manager.create("First", None).unwrap();
    let second = manager.create("Second", None).unwrap();
    manager.add_track(&first.id, &TrackId::new("a")).unwrap();
    manager.add_track(&first.id, &TrackId::new("b")).unwrap();
    manager.add_track(&second.id, &TrackId::new("b")).unwrap();
    manager.sync_all_tracks().unwrap();

    manager.delete_track(&TrackId::new("b")).unwrap();

    assert!(manager.store().track(&TrackId::new("b")).unwrap().is_none());
    assert_eq!(manager.get(&first.id).unwrap().tracks.len(), 1);
    assert!(manager.get(&second.id).unwrap().tracks.is_empty());
}
