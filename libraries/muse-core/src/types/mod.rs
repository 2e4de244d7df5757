//! Domain types for Muse

mod filter;
mod ids;
mod playlist;
mod prefs;
mod track;

pub use filter::{FilterSpec, SortKey, SortOrder};
pub use ids::{PlaylistId, TrackId};
pub use playlist::Playlist;
pub use prefs::{PlayerPrefs, RepeatMode};
pub use track::{Track, TrackDetails};
