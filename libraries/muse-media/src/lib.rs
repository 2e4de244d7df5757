//! Muse - Media Controls
//!
//! Two-way synchronization between the player and the OS-level "now
//! playing" surface (MPRIS on Linux, SMTC on Windows, the lock screen on
//! macOS):
//! - Outbound: now-playing metadata and transport state, published from
//!   [`muse_playback::PlayerSnapshot`]s
//! - Inbound: transport commands (play/pause/next/seek/...) delivered over a
//!   channel, drained by the session's event loop
//!
//! The surface is a capability-checked optional collaborator:
//! [`MediaControlBridge::attach`] returns `None` on platforms where it is
//! unavailable, and everything degrades to a no-op.

#![forbid(unsafe_code)]

pub mod artwork;
mod bridge;
mod command;

pub use artwork::{artwork_set, Artwork, ARTWORK_SIZES};
pub use bridge::{BridgeConfig, MediaControlBridge};
pub use command::{TransportCommand, DEFAULT_SEEK_OFFSET};
