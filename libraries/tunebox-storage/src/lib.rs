//! Tunebox Storage
//!
//! Persisted user state for Tunebox: the favorites set and the playlist
//! collection, each written as a full JSON snapshot into a `KeyValueStore`
//! after every mutation and read back once at startup.
//!
//! # Architecture
//!
//! - **Backends**: `SqliteKeyValueStore` (durable) and `MemoryKeyValueStore`
//! - **Stores**: `FavoritesStore` and `PlaylistStore` own the in-memory state;
//!   nothing else writes the persisted representation
//! - **Failure policy**: persistence errors are logged, the in-memory state
//!   stays authoritative for the session
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tunebox_core::{KeyValueStore, Track};
//! use tunebox_storage::{FavoritesStore, PlaylistStore, SqliteKeyValueStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let kv: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::open("sqlite://tunebox.db").await?);
//!
//! let mut favorites = FavoritesStore::load(kv.clone()).await;
//! let mut playlists = PlaylistStore::load(kv).await;
//!
//! favorites.toggle(Track::new("dQw4w9WgXcQ", "Never Gonna Give You Up", "Rick Astley")).await;
//! let id = playlists.create("Road Trip").await;
//! # Ok(())
//! # }
//! ```

mod database;
mod error;
mod memory;
mod snapshot;

// Vertical slices
pub mod favorites;
pub mod playlists;

pub use database::SqliteKeyValueStore;
pub use error::{Result, StorageError};
pub use favorites::FavoritesStore;
pub use memory::MemoryKeyValueStore;
pub use playlists::{default_playlists, PlaylistStore};
