//! Muse - Storage
//!
//! Persistence for the Muse workspace:
//! - [`SettingsStore`]: the persisted settings record (volume, rate, repeat,
//!   shuffle, filter preferences, and - for single-file deployments - the
//!   playlists and tracks themselves) under an explicit schema version with
//!   an explicit migration/defaulting step.
//! - Library index loading: the bulk `{tracks}` / `{playlists}` files
//!   consumed at startup.
//! - [`MemoryStore`]: the in-memory [`muse_core::MediaStore`] implementation
//!   that backs the session at runtime.
//!
//! Persistence failures never corrupt in-memory state; they surface as
//! [`StorageError`] to the caller of the specific operation.

#![forbid(unsafe_code)]

mod error;
pub mod index;
mod memory;
pub mod settings;

pub use error::{Result, StorageError};
pub use index::{load_playlist_index, load_track_index, PlaylistIndex, TrackIndex};
pub use memory::MemoryStore;
pub use settings::{PersistedState, SettingsStore, SCHEMA_VERSION};
