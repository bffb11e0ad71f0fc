//! Playlist collection
//!
//! Ordered collection of named playlists. The collection is persisted as one
//! snapshot after every mutation. A reserved playlist mirrors the favorites
//! set: its stored song list is never authoritative and is replaced with the
//! live favorites whenever playlists are read for display.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info};
use tunebox_core::storage::PLAYLISTS_KEY;
use tunebox_core::{KeyValueStore, Playlist, PlaylistId, Result, Track, TrackId, TuneboxError};

use crate::favorites::FavoritesStore;
use crate::snapshot::{self, Snapshot};

/// Playlists seeded on first run
pub fn default_playlists() -> Vec<Playlist> {
    vec![
        Playlist::new(PlaylistId::favorites(), "Favorites"),
        Playlist::new(PlaylistId::new("1"), "Playlist #1"),
        Playlist::new(PlaylistId::new("2"), "Playlist #2"),
    ]
}

pub struct PlaylistStore {
    kv: Arc<dyn KeyValueStore>,
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    /// Restore the collection from `kv`
    ///
    /// When nothing is persisted yet the default playlists are seeded and
    /// written back. An unreadable snapshot falls back to the defaults for this
    /// session without overwriting what is stored.
    pub async fn load(kv: Arc<dyn KeyValueStore>) -> Self {
        let playlists = match snapshot::load::<Vec<Playlist>>(kv.as_ref(), PLAYLISTS_KEY).await {
            Snapshot::Loaded(playlists) => playlists,
            Snapshot::Unreadable => default_playlists(),
            Snapshot::Missing => {
                info!("No saved playlists, seeding defaults");
                let seeded = default_playlists();
                snapshot::persist(kv.as_ref(), PLAYLISTS_KEY, &seeded).await;
                seeded
            }
        };

        debug!(count = playlists.len(), "Loaded playlists");
        Self { kv, playlists }
    }

    /// Playlists as stored (the reserved playlist's songs are not meaningful)
    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }

    /// Playlists for display, with the reserved playlist showing live favorites
    pub fn list(&self, favorites: &FavoritesStore) -> Vec<Playlist> {
        self.playlists
            .iter()
            .map(|p| with_live_favorites(p, favorites))
            .collect()
    }

    /// Look up a playlist by id
    pub fn resolve(&self, id: &PlaylistId) -> Result<&Playlist> {
        self.playlists
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| TuneboxError::PlaylistNotFound(id.clone()))
    }

    /// Look up a playlist for display, overriding reserved contents
    pub fn resolve_live(&self, id: &PlaylistId, favorites: &FavoritesStore) -> Result<Playlist> {
        self.resolve(id).map(|p| with_live_favorites(p, favorites))
    }

    /// Create an empty playlist named `name` (trimmed)
    ///
    /// Returns `None` without touching the collection if the name is blank.
    pub async fn create(&mut self, name: &str) -> Option<PlaylistId> {
        let name = name.trim();
        if name.is_empty() {
            debug!("Ignoring playlist with blank name");
            return None;
        }

        let id = self.next_id();
        info!(playlist_id = %id, name, "Creating playlist");
        self.playlists.push(Playlist::new(id.clone(), name));
        self.persist().await;

        Some(id)
    }

    /// Delete a playlist
    ///
    /// The reserved favorites playlist can never be deleted. Without
    /// confirmation nothing happens and `Ok(false)` is returned.
    pub async fn delete(&mut self, id: &PlaylistId, confirmed: bool) -> Result<bool> {
        if id.is_favorites() {
            return Err(TuneboxError::ReservedPlaylist(id.clone()));
        }

        let position = self
            .playlists
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| TuneboxError::PlaylistNotFound(id.clone()))?;

        if !confirmed {
            return Ok(false);
        }

        let removed = self.playlists.remove(position);
        info!(playlist_id = %id, name = %removed.name, "Deleted playlist");
        self.persist().await;

        Ok(true)
    }

    /// Append `track` to a playlist
    ///
    /// No-op when the playlist is unknown, is the reserved favorites playlist
    /// (favorites are mutated through `FavoritesStore`), or already holds the
    /// track. Returns whether the playlist changed.
    pub async fn add_track(&mut self, id: &PlaylistId, track: Track) -> bool {
        if id.is_favorites() {
            debug!("Reserved playlist is backed by favorites, not adding");
            return false;
        }

        let Some(playlist) = self.playlists.iter_mut().find(|p| &p.id == id) else {
            debug!(playlist_id = %id, "Playlist not found, not adding track");
            return false;
        };

        if playlist.contains(&track.id) {
            return false;
        }

        debug!(playlist_id = %id, track_id = %track.id, "Adding track to playlist");
        playlist.songs.push(track);
        self.persist().await;
        true
    }

    /// Remove a track from a playlist; returns whether the playlist changed
    pub async fn remove_track(&mut self, id: &PlaylistId, track_id: &TrackId) -> bool {
        let Some(playlist) = self.playlists.iter_mut().find(|p| &p.id == id) else {
            return false;
        };

        let before = playlist.songs.len();
        playlist.songs.retain(|s| &s.id != track_id);
        if playlist.songs.len() == before {
            return false;
        }

        self.persist().await;
        true
    }

    /// Creation-timestamp id, bumped until it collides with nothing
    fn next_id(&self) -> PlaylistId {
        let mut at = Utc::now();
        loop {
            let id = PlaylistId::from_timestamp(at);
            if self.playlists.iter().all(|p| p.id != id) {
                return id;
            }
            at += Duration::milliseconds(1);
        }
    }

    async fn persist(&self) {
        snapshot::persist(self.kv.as_ref(), PLAYLISTS_KEY, &self.playlists).await;
    }
}

fn with_live_favorites(playlist: &Playlist, favorites: &FavoritesStore) -> Playlist {
    if playlist.is_reserved() {
        Playlist {
            songs: favorites.tracks().to_vec(),
            ..playlist.clone()
        }
    } else {
        playlist.clone()
    }
}
