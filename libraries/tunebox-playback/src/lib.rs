//! Tunebox - Playback
//!
//! Playback state for Tunebox, independent of where the media is rendered.
//!
//! This crate provides:
//! - The playing-list state machine (circular next/previous)
//! - The media engine adapter around an opaque `MediaWidget`
//! - Volume and mute handling
//! - Cancellable single-slot timers for polling and debounce
//!
//! # Architecture
//!
//! `tunebox-playback` never touches a concrete player. The application
//! supplies a `MediaWidgetFactory`; the engine creates one widget per track,
//! tears it down before creating the next, and ignores any notification that
//! arrives tagged with an instance number other than the live one.
//!
//! # Example
//!
//! ```rust
//! use tunebox_core::Track;
//! use tunebox_playback::PlaybackStateMachine;
//!
//! let mut player = PlaybackStateMachine::new();
//! player.set_playing_list(
//!     vec![
//!         Track::new("a", "First", "Artist"),
//!         Track::new("b", "Second", "Artist"),
//!     ],
//!     Some(1),
//! );
//!
//! // Wraps around past the end
//! assert_eq!(player.next().map(|t| t.id.as_str()), Some("a"));
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod error;
pub mod events;
pub mod playing_list;
pub mod schedule;
pub mod types;
pub mod volume;
pub mod widget;

pub use engine::{EngineAction, MediaEngine};
pub use error::{PlaybackError, Result};
pub use events::{PlaybackEvent, PlaybackStateEvent};
pub use playing_list::PlaybackStateMachine;
pub use schedule::TaskSlot;
pub use types::{format_time, EngineConfig, PlayerState, Progress, WidgetState};
pub use volume::Volume;
pub use widget::{MediaWidget, MediaWidgetFactory, WidgetEvent, WidgetEventKind, WidgetHandle};
