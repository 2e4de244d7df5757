//! Artwork set derivation
//!
//! The control surface is offered the same source image at a ladder of
//! fixed sizes; downstream consumers pick the best fit.

/// Artwork sizes offered to the control surface, in pixels
pub const ARTWORK_SIZES: [u32; 6] = [96, 128, 192, 256, 384, 512];

/// One artwork entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// Image locator; every entry references the same source
    pub src: String,

    /// Nominal square size in pixels
    pub size: u32,
}

impl Artwork {
    /// The `WxH` size descriptor consumers expect
    pub fn sizes_attr(&self) -> String {
        format!("{0}x{0}", self.size)
    }
}

/// Derive the artwork set for a source image
pub fn artwork_set(source: &str) -> Vec<Artwork> {
    ARTWORK_SIZES
        .iter()
        .map(|&size| Artwork {
            src: source.to_string(),
            size,
        })
        .collect()
}
