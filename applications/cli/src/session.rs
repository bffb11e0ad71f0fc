//! Session: navigation state and user intents
//!
//! Routes what the user does (search, open, play, favorite) into the stores,
//! the playing list and the media engine. After every playback transition the
//! engine is re-synced with the current track, which is where widget
//! teardown and creation happen.

use std::sync::Arc;
use std::time::Duration;

use rand::thread_rng;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use tunebox_catalog::{curated_artists, CatalogClient, HomeFeed, ARTIST_PAGE_SIZE};
use tunebox_core::{Album, Artist, Playlist, PlaylistId, Result, Track, TuneboxError};
use tunebox_playback::{
    EngineAction, EngineConfig, MediaEngine, MediaWidgetFactory, PlaybackStateMachine, Progress,
    TaskSlot, WidgetEvent,
};
use tunebox_storage::{FavoritesStore, PlaylistStore};

/// Where the user currently is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Home,
    Artists,
    Albums,
    AlbumDetail(usize),
    Playlists,
    PlaylistDetail(PlaylistId),
    Favorites,
}

/// Everything a session is built from
pub struct SessionParts {
    pub catalog: CatalogClient,
    pub favorites: FavoritesStore,
    pub playlists: PlaylistStore,
    pub factory: Arc<dyn MediaWidgetFactory>,
    pub engine: EngineConfig,
    pub debounce: Duration,
}

/// Asynchronous inputs the owner of a session must feed back into it
pub struct SessionEvents {
    /// Widget notifications and progress ticks, for [`Session::on_widget_event`]
    pub widget: mpsc::UnboundedReceiver<WidgetEvent>,
    /// Debounced queries, for [`Session::on_debounce_fired`]
    pub search: mpsc::UnboundedReceiver<String>,
}

pub struct Session {
    catalog: CatalogClient,
    favorites: FavoritesStore,
    playlists: PlaylistStore,
    player: PlaybackStateMachine,
    engine: MediaEngine,

    view: View,
    query: String,
    results: Vec<Track>,

    // Browse caches, fetched on first visit
    home: HomeFeed,
    albums: Vec<Album>,
    artists: Vec<Artist>,

    debounce: Duration,
    debounce_task: TaskSlot,
    search_tx: mpsc::UnboundedSender<String>,
}

impl Session {
    pub fn new(parts: SessionParts) -> (Self, SessionEvents) {
        let (engine, widget_rx) = MediaEngine::new(parts.factory, parts.engine);
        let (search_tx, search_rx) = mpsc::unbounded_channel();

        let session = Self {
            catalog: parts.catalog,
            favorites: parts.favorites,
            playlists: parts.playlists,
            player: PlaybackStateMachine::new(),
            engine,
            view: View::Home,
            query: String::new(),
            results: Vec::new(),
            home: HomeFeed::default(),
            albums: Vec::new(),
            artists: Vec::new(),
            debounce: parts.debounce,
            debounce_task: TaskSlot::new(),
            search_tx,
        };

        let events = SessionEvents {
            widget: widget_rx,
            search: search_rx,
        };

        (session, events)
    }

    // ===== Navigation =====

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Move to `view`, loading whatever it shows
    ///
    /// Clears the search query and results; playback is untouched. An unknown
    /// album index or playlist id leaves the current view in place.
    pub async fn navigate(&mut self, view: View) -> Result<()> {
        match &view {
            View::Home => {
                if self.home.trending.is_empty() {
                    self.home = self.catalog.home_feed().await;
                }
            }
            View::Artists => {
                self.artists = curated_artists(&mut thread_rng(), ARTIST_PAGE_SIZE);
            }
            View::Albums => self.ensure_albums().await,
            View::AlbumDetail(index) => {
                self.ensure_albums().await;
                if *index >= self.albums.len() {
                    return Err(TuneboxError::invalid_input(format!(
                        "No album #{}",
                        index + 1
                    )));
                }
            }
            View::PlaylistDetail(id) => {
                self.playlists.resolve(id)?;
            }
            View::Playlists | View::Favorites => {}
        }

        debug!(from = ?self.view, to = ?view, "Navigating");
        self.reset_search();
        self.view = view;
        Ok(())
    }

    async fn ensure_albums(&mut self) {
        if self.albums.is_empty() {
            self.albums = self.catalog.albums().await;
        }
    }

    fn reset_search(&mut self) {
        self.debounce_task.cancel();
        self.query.clear();
        self.results.clear();
    }

    pub fn home(&self) -> &HomeFeed {
        &self.home
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn favorites(&self) -> &[Track] {
        self.favorites.tracks()
    }

    /// All playlists, favorites mirrored live
    pub fn playlists(&self) -> Vec<Playlist> {
        self.playlists.list(&self.favorites)
    }

    pub fn playlist(&self, id: &PlaylistId) -> Result<Playlist> {
        self.playlists.resolve_live(id, &self.favorites)
    }

    // ===== Search =====

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Track] {
        &self.results
    }

    /// Search-as-you-type: restart the debounce timer for `text`
    ///
    /// A blank query cancels any pending search and clears the results.
    pub fn query_input(&mut self, text: &str) {
        self.query = text.to_string();

        let query = text.trim().to_string();
        if query.is_empty() {
            self.debounce_task.cancel();
            self.results.clear();
            return;
        }

        let tx = self.search_tx.clone();
        let delay = self.debounce;
        self.debounce_task.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(query);
        });
    }

    /// A debounce timer fired; search unless the query has moved on since
    pub async fn on_debounce_fired(&mut self, query: String) -> Option<usize> {
        if query != self.query.trim() {
            debug!(stale = %query, current = %self.query, "Dropping stale debounced search");
            return None;
        }
        Some(self.submit_search(&query).await)
    }

    /// Search now and make the results the playing list
    ///
    /// A successful search replaces the playing list wholesale and starts from
    /// the first result; no hits leave nothing selected. A failed search keeps
    /// the current selection. Returns the number of results.
    pub async fn submit_search(&mut self, query: &str) -> usize {
        self.debounce_task.cancel();
        self.query = query.to_string();

        let query = query.trim();
        if query.is_empty() {
            self.results.clear();
            return 0;
        }

        match self.catalog.try_search(query, self.catalog.page_size()).await {
            Ok(results) => {
                info!(query = %query, results = results.len(), "Search results");
                self.player.set_playing_list(results.clone(), Some(0));
                self.sync_engine();
                self.results = results;
            }
            Err(e) => {
                warn!(query = %query, error = %TuneboxError::from(e), "Search failed");
                self.results.clear();
            }
        }

        self.results.len()
    }

    /// Click on an artist card: search by name
    pub async fn artist_click(&mut self, name: &str) -> usize {
        self.submit_search(name).await
    }

    /// Jump to a search result within the playing list
    ///
    /// Silently ignored if the result isn't part of the playing list.
    pub fn select_result(&mut self, index: usize) -> bool {
        let Some(track) = self.results.get(index) else {
            return false;
        };

        let found = self.player.select_by_id(&track.id);
        if found {
            self.sync_engine();
        }
        found
    }

    // ===== Playing from browse views =====

    /// Play home feed card `index`, continuing through the trending list
    pub fn play_home(&mut self, index: usize) -> Result<()> {
        let tracks = self.home.trending.clone();
        self.play_list(tracks, index)
    }

    /// Play song `index` of album `album`, queueing the whole album
    pub fn play_album_song(&mut self, album: usize, index: usize) -> Result<()> {
        let songs = self
            .albums
            .get(album)
            .map(|a| a.songs.clone())
            .ok_or_else(|| TuneboxError::invalid_input(format!("No album #{}", album + 1)))?;
        self.play_list(songs, index)
    }

    /// Play favorite `index`, queueing all favorites
    pub fn play_favorites(&mut self, index: usize) -> Result<()> {
        let tracks = self.favorites.tracks().to_vec();
        self.play_list(tracks, index)
    }

    /// Play song `index` of a playlist on its own
    ///
    /// The reserved favorites playlist queues all favorites instead.
    pub fn play_playlist_song(&mut self, id: &PlaylistId, index: usize) -> Result<()> {
        if id.is_favorites() {
            return self.play_favorites(index);
        }

        let track = self
            .playlists
            .resolve(id)?
            .songs
            .get(index)
            .cloned()
            .ok_or_else(|| TuneboxError::invalid_input(format!("No song #{}", index + 1)))?;
        self.play_list(vec![track], 0)
    }

    fn play_list(&mut self, tracks: Vec<Track>, index: usize) -> Result<()> {
        if index >= tracks.len() {
            return Err(TuneboxError::invalid_input(format!("No track #{}", index + 1)));
        }

        self.player.set_playing_list(tracks, Some(index));
        self.sync_engine();
        Ok(())
    }

    // ===== Favorites and playlists =====

    pub fn is_current_favorite(&self) -> bool {
        self.player
            .current_track()
            .is_some_and(|t| self.favorites.contains(&t.id))
    }

    /// Toggle the playing track's favorite mark; `None` when nothing plays
    pub async fn toggle_favorite_current(&mut self) -> Option<bool> {
        let track = self.player.current_track()?.clone();
        Some(self.favorites.toggle(track).await)
    }

    /// Remove favorite `index`
    pub async fn remove_favorite(&mut self, index: usize) -> bool {
        let Some(id) = self.favorites.tracks().get(index).map(|t| t.id.clone()) else {
            return false;
        };
        self.favorites.remove(&id).await
    }

    /// Add `track` to playlist `id`; the favorites playlist adds a favorite
    pub async fn add_to_playlist(&mut self, id: &PlaylistId, track: Track) -> Result<bool> {
        if id.is_favorites() {
            return Ok(self.favorites.add(track).await);
        }

        self.playlists.resolve(id)?;
        Ok(self.playlists.add_track(id, track).await)
    }

    /// Remove song `index` from playlist `id`
    pub async fn remove_from_playlist(&mut self, id: &PlaylistId, index: usize) -> Result<bool> {
        if id.is_favorites() {
            return Ok(self.remove_favorite(index).await);
        }

        let Some(track_id) = self
            .playlists
            .resolve(id)?
            .songs
            .get(index)
            .map(|t| t.id.clone())
        else {
            return Ok(false);
        };
        Ok(self.playlists.remove_track(id, &track_id).await)
    }

    pub async fn create_playlist(&mut self, name: &str) -> Option<PlaylistId> {
        self.playlists.create(name).await
    }

    /// Delete playlist `id` once `confirmed`
    ///
    /// Leaves the playlist's detail view if it was open.
    pub async fn delete_playlist(&mut self, id: &PlaylistId, confirmed: bool) -> Result<bool> {
        let deleted = self.playlists.delete(id, confirmed).await?;
        if deleted && self.view == View::PlaylistDetail(id.clone()) {
            self.view = View::Playlists;
        }
        Ok(deleted)
    }

    // ===== Transport =====

    pub fn now_playing(&self) -> Option<&Track> {
        self.player.current_track()
    }

    pub fn playing_list(&self) -> &[Track] {
        self.player.playing_list()
    }

    pub fn next(&mut self) -> Option<&Track> {
        self.player.next();
        self.sync_engine();
        self.player.current_track()
    }

    pub fn previous(&mut self) -> Option<&Track> {
        self.player.previous();
        self.sync_engine();
        self.player.current_track()
    }

    pub fn toggle_play_pause(&mut self) -> bool {
        self.engine.toggle_play_pause()
    }

    pub fn seek(&mut self, seconds: f64) {
        self.engine.seek_to(seconds);
    }

    pub fn set_volume(&mut self, level: u8) {
        self.engine.set_volume(level);
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.engine.toggle_mute()
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.engine.toggle_repeat()
    }

    pub fn engine(&self) -> &MediaEngine {
        &self.engine
    }

    pub fn progress(&self) -> Progress {
        self.engine.progress()
    }

    /// Apply a widget notification; advances the playing list on end of track
    pub fn on_widget_event(&mut self, event: WidgetEvent) {
        if self.engine.handle(event) != EngineAction::Advance {
            return;
        }

        // A one-track list wraps onto the same track, which stays stopped
        self.player.next();
        self.sync_engine();
    }

    fn sync_engine(&mut self) {
        self.engine.sync_track(self.player.current_track());
    }
}
