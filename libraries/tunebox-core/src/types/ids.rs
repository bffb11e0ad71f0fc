/// ID types for Tunebox entities
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Track identifier
///
/// Opaque, assigned by the catalog source (a video id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrackId(String);

impl TrackId {
    /// Create a new track ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TrackId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Playlist identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistId(String);

impl PlaylistId {
    /// Id reserved for the playlist mirroring the favorites set
    pub const FAVORITES: &'static str = "favorites";

    /// Create a new playlist ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved favorites playlist ID
    pub fn favorites() -> Self {
        Self(Self::FAVORITES.to_string())
    }

    /// Render a creation timestamp as an id (Unix milliseconds)
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis().to_string())
    }

    /// Whether this is the reserved favorites id
    pub fn is_favorites(&self) -> bool {
        self.0 == Self::FAVORITES
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaylistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PlaylistId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_id_from_string() {
        let id = TrackId::new("dQw4w9WgXcQ");
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
    }

    #[test]
    fn playlist_id_display() {
        let id = PlaylistId::new("1712345678901");
        assert_eq!(format!("{}", id), "1712345678901");
    }

    #[test]
    fn favorites_id_is_reserved() {
        assert!(PlaylistId::favorites().is_favorites());
        assert!(!PlaylistId::new("1").is_favorites());
    }

    #[test]
    fn timestamp_ids_are_unix_millis() {
        let at = DateTime::from_timestamp_millis(1_700_000_000_123).unwrap();
        assert_eq!(PlaylistId::from_timestamp(at).as_str(), "1700000000123");
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let json = serde_json::to_string(&PlaylistId::new("2")).unwrap();
        assert_eq!(json, "\"2\"");
    }
}
