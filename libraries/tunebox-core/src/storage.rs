//! Durable key-value seam
//!
//! The favorites set and the playlist collection are each persisted as a single
//! JSON snapshot under a fixed key. Backends only need to store opaque strings.

use crate::error::Result;
use async_trait::async_trait;

/// Key under which the favorites snapshot is persisted
pub const FAVORITES_KEY: &str = "favorites";

/// Key under which the playlist collection snapshot is persisted
pub const PLAYLISTS_KEY: &str = "playlists";

/// Opaque durable map from string key to string value
///
/// Writes are full overwrites; there is no partial update and no versioning.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
