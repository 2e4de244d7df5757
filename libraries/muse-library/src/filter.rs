//! Library filtering and sorting
//!
//! Pure function from `(tracks, FilterSpec)` to an ordered track list.
//! Predicates are conjunctive and applied in a fixed order: search text,
//! tag intersection, genre membership, year range, rating range. Sorting is
//! stable and applied last.

use chrono::{DateTime, Datelike, Utc};
use muse_core::types::{FilterSpec, SortKey, SortOrder, Track};
use std::cmp::Ordering;

/// Filter and sort a track collection
///
/// Tracks without a release year are treated as released in the current
/// year, which passes any unrestricted range. Tracks without a date-added
/// sort as epoch zero.
pub fn apply(tracks: &[Track], spec: &FilterSpec) -> Vec<Track> {
    let needle = spec.search.trim().to_lowercase();
    let current_year = Utc::now().year();

    let mut result: Vec<Track> = tracks
        .iter()
        .filter(|t| matches_search(t, &needle))
        .filter(|t| matches_tags(t, &spec.tags))
        .filter(|t| matches_genres(t, &spec.genres))
        .filter(|t| matches_year(t, spec.year_min, spec.year_max, current_year))
        .filter(|t| matches_rating(t, spec.rating_min, spec.rating_max))
        .cloned()
        .collect();

    sort_tracks(&mut result, spec.sort_key, spec.sort_order);
    result
}

fn matches_search(track: &Track, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    track.title.to_lowercase().contains(needle)
        || track.artist.to_lowercase().contains(needle)
        || track
            .album()
            .is_some_and(|album| album.to_lowercase().contains(needle))
        || track
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn matches_tags(track: &Track, tags: &[String]) -> bool {
    // Non-empty intersection passes
    tags.is_empty() || tags.iter().any(|tag| track.has_tag(tag))
}

fn matches_genres(track: &Track, genres: &[String]) -> bool {
    genres.is_empty()
        || track
            .genre()
            .is_some_and(|genre| genres.iter().any(|g| g.eq_ignore_ascii_case(genre)))
}

fn matches_year(track: &Track, min: Option<i32>, max: Option<i32>, current_year: i32) -> bool {
    let year = track.year().unwrap_or(current_year);
    min.map_or(true, |m| year >= m) && max.map_or(true, |m| year <= m)
}

fn matches_rating(track: &Track, min: Option<u8>, max: Option<u8>) -> bool {
    min.map_or(true, |m| track.rating >= m) && max.map_or(true, |m| track.rating <= m)
}

fn sort_tracks(tracks: &mut [Track], key: SortKey, order: SortOrder) {
    tracks.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Title => cmp_ci(&a.title, &b.title),
            SortKey::Artist => cmp_ci(&a.artist, &b.artist),
            SortKey::DateAdded => date_key(a).cmp(&date_key(b)),
            SortKey::PlayCount => a.play_count.cmp(&b.play_count),
            SortKey::Rating => a.rating.cmp(&b.rating),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

fn date_key(track: &Track) -> DateTime<Utc> {
    track.date_added.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}
