/// Library filter specification
use serde::{Deserialize, Serialize};

/// Sort key for library views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Sort by title (case-insensitive)
    Title,
    /// Sort by artist (case-insensitive)
    Artist,
    /// Sort by date added (missing dates sort as epoch zero)
    DateAdded,
    /// Sort by play count
    PlayCount,
    /// Sort by rating
    Rating,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Ascending
    Asc,
    /// Descending
    Desc,
}

/// Filter and sort specification for library views
///
/// Pure input to the library filter; also persisted as a user preference.
/// Absent bounds mean "unrestricted".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSpec {
    /// Free-text search over title, artist, album, and tags
    pub search: String,

    /// Tag filter; a track passes when it shares at least one tag
    pub tags: Vec<String>,

    /// Genre filter; a track passes when its genre is in the set
    pub genres: Vec<String>,

    /// Lower bound on release year
    pub year_min: Option<i32>,

    /// Upper bound on release year
    pub year_max: Option<i32>,

    /// Lower bound on rating
    pub rating_min: Option<u8>,

    /// Upper bound on rating
    pub rating_max: Option<u8>,

    /// Sort key
    pub sort_key: SortKey,

    /// Sort direction
    pub sort_order: SortOrder,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            search: String::new(),
            tags: Vec::new(),
            genres: Vec::new(),
            year_min: None,
            year_max: None,
            rating_min: None,
            rating_max: None,
            sort_key: SortKey::DateAdded,
            sort_order: SortOrder::Desc,
        }
    }
}
