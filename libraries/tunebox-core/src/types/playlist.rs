/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// A named, user-curated ordered sequence of tracks
///
/// Persisted as `{id, name, songs}`. The reserved favorites playlist keeps a
/// `songs` field in that layout, but its contents are always taken from the
/// favorites set when read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Display name
    pub name: String,

    /// Ordered songs, unique by identity
    #[serde(default)]
    pub songs: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            songs: Vec::new(),
        }
    }

    /// Whether a track with this identity is already in the playlist
    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.songs.iter().any(|song| &song.id == track_id)
    }

    /// Whether this is the reserved favorites playlist
    pub fn is_reserved(&self) -> bool {
        self.id.is_favorites()
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
