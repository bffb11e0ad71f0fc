//! Full-snapshot persistence helpers
//!
//! Each store keeps its whole state under one key. Reads happen once at
//! startup; writes overwrite the whole record after every mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;
use tunebox_core::KeyValueStore;

/// Outcome of reading a persisted snapshot
#[derive(Debug)]
pub(crate) enum Snapshot<T> {
    /// Nothing stored under the key
    Missing,
    /// Stored value parsed successfully
    Loaded(T),
    /// Stored value could not be read or parsed
    Unreadable,
}

pub(crate) async fn load<T: DeserializeOwned>(kv: &dyn KeyValueStore, key: &str) -> Snapshot<T> {
    let raw = match kv.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Snapshot::Missing,
        Err(e) => {
            warn!(key, error = %e, "Failed to read persisted state");
            return Snapshot::Unreadable;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Snapshot::Loaded(value),
        Err(e) => {
            warn!(key, error = %e, "Persisted state is malformed, ignoring it");
            Snapshot::Unreadable
        }
    }
}

/// Overwrite the snapshot under `key`
///
/// Failures are logged; the in-memory state stays authoritative for the session.
pub(crate) async fn persist<T: Serialize + ?Sized>(kv: &dyn KeyValueStore, key: &str, value: &T) {
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(key, error = %e, "Failed to serialize state");
            return;
        }
    };

    if let Err(e) = kv.set(key, &raw).await {
        warn!(key, error = %e, "Failed to persist state");
    }
}
