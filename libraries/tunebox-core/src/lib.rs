//! Tunebox Core
//!
//! Platform-agnostic core types, traits, and error handling for Tunebox.
//!
//! This crate provides the foundational building blocks shared by the storage,
//! playback and catalog libraries and the `tunebox` application.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `Album`, `Artist`
//! - **Core Traits**: `KeyValueStore`, the durable string-to-string map the
//!   favorites and playlist stores persist into
//! - **Error Handling**: Unified `TuneboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tunebox_core::types::{Playlist, PlaylistId, Track};
//!
//! let track = Track::new("dQw4w9WgXcQ", "Never Gonna Give You Up", "Rick Astley");
//!
//! let mut playlist = Playlist::new(PlaylistId::new("1"), "Road Trip");
//! playlist.songs.push(track.clone());
//!
//! assert!(playlist.contains(&track.id));
//! assert!(!playlist.is_reserved());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TuneboxError};
pub use storage::KeyValueStore;

pub use types::{Album, Artist, Playlist, PlaylistId, Track, TrackId};
