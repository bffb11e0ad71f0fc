//! Error types for playback management

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media widget could not be created or failed after creation
    #[error("Media engine unavailable: {0}")]
    MediaEngineUnavailable(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;

impl From<PlaybackError> for tunebox_core::TuneboxError {
    fn from(err: PlaybackError) -> Self {
        tunebox_core::TuneboxError::media_engine_unavailable(err.to_string())
    }
}
