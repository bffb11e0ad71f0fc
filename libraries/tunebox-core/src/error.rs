/// Core error types for Tunebox
use thiserror::Error;

use crate::types::PlaylistId;

/// Result type alias using `TuneboxError`
pub type Result<T> = std::result::Result<T, TuneboxError>;

/// Core error type for Tunebox
///
/// None of these are fatal: every failure degrades to "nothing happens"
/// plus a log line at the call site.
#[derive(Error, Debug)]
pub enum TuneboxError {
    /// Search request failed or returned malformed data
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Operation referenced a playlist id that is not in the collection
    #[error("Playlist not found: {0}")]
    PlaylistNotFound(PlaylistId),

    /// The media widget failed to initialize
    #[error("Media engine unavailable: {0}")]
    MediaEngineUnavailable(String),

    /// Mutation attempted on the reserved favorites playlist
    #[error("Playlist is reserved: {0}")]
    ReservedPlaylist(PlaylistId),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TuneboxError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Create a catalog unavailable error
    pub fn catalog_unavailable(msg: impl Into<String>) -> Self {
        Self::CatalogUnavailable(msg.into())
    }

    /// Create a media engine unavailable error
    pub fn media_engine_unavailable(msg: impl Into<String>) -> Self {
        Self::MediaEngineUnavailable(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
