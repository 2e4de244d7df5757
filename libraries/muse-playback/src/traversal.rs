//! Queue traversal
//!
//! Pure next/previous index computation over a flat queue. Never mutates
//! input; returns either a valid index in `[0, len)` or `None` when there is
//! no further track.

use muse_core::types::RepeatMode;
use rand::Rng;

/// Compute the next queue index to play
///
/// Shuffle picks a uniformly random in-range index; any index, including the
/// current one, is an acceptable target. Sequential traversal wraps to 0
/// only under [`RepeatMode::All`]; otherwise the end of the queue yields
/// `None` and playback should stop, not wrap.
pub fn next_index(
    len: usize,
    current: usize,
    shuffle: bool,
    repeat: RepeatMode,
    rng: &mut impl Rng,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    if shuffle {
        return Some(rng.gen_range(0..len));
    }

    let candidate = current + 1;
    if candidate < len {
        Some(candidate)
    } else if repeat == RepeatMode::All {
        Some(0)
    } else {
        None
    }
}

/// Compute the previous queue index to play
///
/// Symmetric to [`next_index`]: wraps to `len - 1` only under
/// [`RepeatMode::All`]; shuffle picks a new random index identically to
/// next-track.
pub fn previous_index(
    len: usize,
    current: usize,
    shuffle: bool,
    repeat: RepeatMode,
    rng: &mut impl Rng,
) -> Option<usize> {
    if len == 0 {
        return None;
    }

    if shuffle {
        return Some(rng.gen_range(0..len));
    }

    if current > 0 {
        Some((current - 1).min(len - 1))
    } else if repeat == RepeatMode::All {
        Some(len - 1)
    } else {
        None
    }
}
