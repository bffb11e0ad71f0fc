/// Common test utilities and fixtures
use serde_json::json;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tunebox_catalog::{CatalogClient, CatalogConfig};
use tunebox_cli::{Session, SessionEvents, SessionParts};
use tunebox_core::KeyValueStore;
use tunebox_playback::{EngineConfig, MediaWidget, MediaWidgetFactory, Result, WidgetHandle};
use tunebox_storage::{FavoritesStore, MemoryKeyValueStore, PlaylistStore};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SEARCH_PATH: &str = "/youtube/v3/search";

/// Records every widget the session asks for
#[derive(Default)]
pub struct WidgetLog {
    pub created: Mutex<Vec<String>>,
    pub destroyed: Mutex<Vec<String>>,
    pub handles: Mutex<Vec<WidgetHandle>>,
    pub seeks: Mutex<Vec<(String, f64)>>,
}

impl WidgetLog {
    pub fn created(&self) -> Vec<String> {
        self.created.lock().unwrap().clone()
    }

    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.lock().unwrap().clone()
    }

    pub fn last_handle(&self) -> WidgetHandle {
        self.handles.lock().unwrap().last().cloned().unwrap()
    }
}

struct RecordingWidget {
    media_id: String,
    log: Arc<WidgetLog>,
}

impl MediaWidget for RecordingWidget {
    fn play(&mut self) {}

    fn pause(&mut self) {}

    fn seek_to(&mut self, seconds: f64) {
        self.log
            .seeks
            .lock()
            .unwrap()
            .push((self.media_id.clone(), seconds));
    }

    fn set_volume(&mut self, _level: u8) {}

    fn duration(&self) -> f64 {
        200.0
    }

    fn current_time(&self) -> f64 {
        0.0
    }

    fn destroy(&mut self) {
        self.log.destroyed.lock().unwrap().push(self.media_id.clone());
    }
}

pub struct RecordingFactory {
    pub log: Arc<WidgetLog>,
}

impl MediaWidgetFactory for RecordingFactory {
    fn create(&self, media_id: &str, handle: WidgetHandle) -> Result<Box<dyn MediaWidget>> {
        self.log.created.lock().unwrap().push(media_id.to_string());
        self.log.handles.lock().unwrap().push(handle);
        Ok(Box::new(RecordingWidget {
            media_id: media_id.to_string(),
            log: self.log.clone(),
        }))
    }
}

/// A session wired to `server`, in-memory storage and a recording widget
pub struct TestSession {
    pub session: Session,
    pub events: SessionEvents,
    pub widgets: Arc<WidgetLog>,
}

pub async fn session(server: &MockServer) -> TestSession {
    session_with_store(server, Arc::new(MemoryKeyValueStore::new())).await
}

pub async fn session_with_store(server: &MockServer, kv: Arc<dyn KeyValueStore>) -> TestSession {
    let catalog =
        CatalogClient::new(CatalogConfig::new("test-key").with_base_url(server.uri())).unwrap();
    let widgets = Arc::new(WidgetLog::default());

    let parts = SessionParts {
        catalog,
        favorites: FavoritesStore::load(kv.clone()).await,
        playlists: PlaylistStore::load(kv.clone()).await,
        factory: Arc::new(RecordingFactory {
            log: widgets.clone(),
        }),
        engine: EngineConfig::default(),
        debounce: Duration::from_millis(50),
    };

    let (session, events) = Session::new(parts);
    TestSession {
        session,
        events,
        widgets,
    }
}

/// Search response with one video per id
pub fn search_body(ids: &[&str]) -> serde_json::Value {
    let items: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": { "kind": "youtube#video", "videoId": id },
                "snippet": {
                    "title": format!("Song {id}"),
                    "channelTitle": format!("Artist {id}"),
                    "thumbnails": { "default": { "url": format!("https://img/{id}.jpg") } }
                }
            })
        })
        .collect();
    json!({ "items": items })
}

/// Answer searches for `query` with `ids`
pub async fn mount_search(server: &MockServer, query: &str, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(ids)))
        .mount(server)
        .await;
}

/// Fail searches for `query`
pub async fn mount_failure(server: &MockServer, query: &str) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("q", query))
        .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
        .mount(server)
        .await;
}
