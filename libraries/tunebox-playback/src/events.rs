//! Playback Events
//!
//! Event-based communication for UI synchronization during playback.
//! Events are emitted at key points:
//! - Track changes (a new widget instance is created)
//! - State changes (play/pause/stop)
//! - Position updates (every poll interval while playing)
//! - Volume and repeat changes

use serde::{Deserialize, Serialize};

/// Events emitted by the media engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// A different track was loaded into a fresh widget
    TrackChanged {
        /// ID of the new (current) track, `None` when playback was torn down
        track_id: Option<String>,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Playback state changed
    StateChanged {
        /// The new playback state
        state: PlaybackStateEvent,
    },

    /// Position update (periodic while playing)
    PositionUpdate {
        /// Seconds since the start of the media
        position_secs: f64,
        /// Total media length in seconds
        duration_secs: f64,
    },

    /// Track finished playing naturally (reached end)
    TrackFinished {
        /// ID of the finished track
        track_id: String,
    },

    /// Volume changed
    VolumeChanged {
        /// New volume level (0-100)
        level: u8,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Repeat flag toggled
    RepeatChanged {
        /// Whether the current track loops
        enabled: bool,
    },

    /// The media engine failed; playback is inert until the next track
    Error {
        /// Error message
        message: String,
    },
}

/// Playback state for events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackStateEvent {
    /// No widget loaded
    Stopped,
    /// Widget created, waiting for it to become ready
    Loading,
    /// Playing
    Playing,
    /// Paused mid-track
    Paused,
}
