//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Playing-list state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    /// Playing list empty, no current index
    Idle,

    /// Non-empty playing list with a valid current index
    Ready,
}

/// Playback state reported by the media widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetState {
    /// Media is playing
    Playing,

    /// Media is paused mid-track
    Paused,

    /// Media reached its end
    Ended,
}

/// Elapsed time and duration of the loaded media, in seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Seconds since the start of the media
    pub elapsed: f64,

    /// Total length in seconds (0 when unknown)
    pub duration: f64,
}

impl Progress {
    /// Fraction of the media played, in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.duration > 0.0 && self.elapsed.is_finite() {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", format_time(self.elapsed), format_time(self.duration))
    }
}

/// Format seconds as `m:ss`
///
/// Non-finite or non-positive input renders as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Configuration for the media engine adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial volume (0-100, default: 50)
    pub volume: u8,

    /// Progress polling interval (default: 1s)
    pub poll_interval: Duration,

    /// Initial repeat flag (default: off)
    pub repeat: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            volume: 50,
            poll_interval: Duration::from_secs(1),
            repeat: false,
        }
    }
}
