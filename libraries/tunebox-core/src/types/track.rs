/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single playable item returned by the catalog
///
/// Immutable once fetched. Equality and hashing use the identity only, so two
/// records for the same video with different thumbnails compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    /// Source-assigned identity (video id)
    #[serde(rename = "videoId")]
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist or channel name
    pub artist: String,

    /// Cover image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Track {
    /// Create a track without cover art
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: TrackId::new(id),
            title: title.into(),
            artist: artist.into(),
            cover: None,
        }
    }

    /// Attach a cover image URL
    #[must_use]
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

impl PartialEq for Track {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Track {}

impl Hash for Track {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
