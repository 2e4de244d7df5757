//! Muse - Library Management
//!
//! Pure library filtering plus playlist CRUD and derived views over a
//! [`muse_core::MediaStore`]:
//! - [`filter`]: `(tracks, FilterSpec) -> ordered tracks`, conjunctive
//!   predicates with a stable sort
//! - [`PlaylistManager`]: create/rename/delete, positional edits, reorder,
//!   stats, search, portable export/import, and the system-maintained
//!   "All Tracks" playlist
//!
//! Dangling track references in playlists are filtered at read time, never
//! an error - a playlist outliving some of its tracks is a normal state.

#![forbid(unsafe_code)]

mod export;
pub mod filter;
mod playlists;

pub use export::{ExportMetadata, ExportedPlaylist, ExportedTrack, PlaylistExport};
pub use playlists::{PlaylistManager, PlaylistStats};
