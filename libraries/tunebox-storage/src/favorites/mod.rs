//! Favorites set
//!
//! An ordered, de-duplicated collection of liked tracks. Insertion order is
//! kept; identity is the track id. Every mutation persists the full set.

use std::sync::Arc;

use tracing::debug;
use tunebox_core::storage::FAVORITES_KEY;
use tunebox_core::{KeyValueStore, Track, TrackId};

use crate::snapshot::{self, Snapshot};

pub struct FavoritesStore {
    kv: Arc<dyn KeyValueStore>,
    tracks: Vec<Track>,
}

impl FavoritesStore {
    /// Restore the favorites set from `kv`, or start empty
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let tracks = match snapshot::load::<Vec<Track>>(kv.as_ref(), FAVORITES_KEY).await {
            Snapshot::Loaded(tracks) => dedup(tracks),
            Snapshot::Missing | Snapshot::Unreadable => Vec::new(),
        };

        debug!(count = tracks.len(), "Loaded favorites");
        Self { kv, tracks }
    }

    /// Favorites in insertion order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track_id: &TrackId) -> bool {
        self.tracks.iter().any(|t| &t.id == track_id)
    }

    /// Append `track` unless one with the same identity is present
    ///
    /// Returns whether the set changed.
    pub async fn add(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }

        debug!(track_id = %track.id, "Adding favorite");
        self.tracks.push(track);
        self.persist().await;
        true
    }

    /// Remove every track matching `track_id`
    ///
    /// Returns whether the set changed.
    pub async fn remove(&mut self, track_id: &TrackId) -> bool {
        let before = self.tracks.len();
        self.tracks.retain(|t| &t.id != track_id);

        if self.tracks.len() == before {
            return false;
        }

        debug!(track_id = %track_id, "Removed favorite");
        self.persist().await;
        true
    }

    /// Remove `track` if present, otherwise add it
    ///
    /// Returns whether the track is a favorite afterwards.
    pub async fn toggle(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            self.remove(&track.id).await;
            false
        } else {
            self.add(track).await;
            true
        }
    }

    async fn persist(&self) {
        snapshot::persist(self.kv.as_ref(), FAVORITES_KEY, &self.tracks).await;
    }
}

/// Drop later duplicates from a restored snapshot, keeping first occurrences
fn dedup(tracks: Vec<Track>) -> Vec<Track> {
    let mut seen = std::collections::HashSet::new();
    tracks
        .into_iter()
        .filter(|t| seen.insert(t.id.clone()))
        .collect()
}
