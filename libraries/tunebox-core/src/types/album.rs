//! Album types

use super::Track;
use serde::{Deserialize, Serialize};

/// A curated album: a named group of catalog tracks
///
/// Albums are resolved at runtime from search queries; they are never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Album {
    /// Album name (the curated query it was resolved from)
    pub name: String,
    /// Artist of the first song, or a placeholder
    pub artist: String,
    /// Cover of the first song
    pub cover: Option<String>,
    /// Songs in source relevance order
    pub songs: Vec<Track>,
}
