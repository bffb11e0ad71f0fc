/// Wiring: config into stores, catalog and session
use std::sync::Arc;

use tracing::info;
use tunebox_catalog::CatalogClient;
use tunebox_core::KeyValueStore;
use tunebox_storage::{FavoritesStore, MemoryKeyValueStore, PlaylistStore, SqliteKeyValueStore};

use crate::config::TuneboxConfig;
use crate::error::Result;
use crate::session::{Session, SessionEvents, SessionParts};
use crate::widget::HeadlessWidgetFactory;

/// Open the persisted key-value store, or an in-memory one when `ephemeral`
pub async fn open_store(config: &TuneboxConfig, ephemeral: bool) -> Result<Arc<dyn KeyValueStore>> {
    if ephemeral {
        info!("Using in-memory storage; nothing will be saved");
        return Ok(Arc::new(MemoryKeyValueStore::new()));
    }

    let store = SqliteKeyValueStore::open(&config.storage.database_url).await?;
    info!(url = %config.storage.database_url, "Storage opened");
    Ok(Arc::new(store))
}

pub fn catalog(config: &TuneboxConfig) -> Result<CatalogClient> {
    Ok(CatalogClient::new(config.catalog_config())?)
}

/// Build an interactive session with the headless widget
pub async fn session(config: &TuneboxConfig, ephemeral: bool) -> Result<(Session, SessionEvents)> {
    let kv = open_store(config, ephemeral).await?;
    let favorites = FavoritesStore::load(kv.clone()).await;
    let playlists = PlaylistStore::load(kv).await;

    let parts = SessionParts {
        catalog: catalog(config)?,
        favorites,
        playlists,
        factory: Arc::new(HeadlessWidgetFactory::new(config.track_length())),
        engine: config.engine_config(),
        debounce: config.debounce(),
    };

    Ok(Session::new(parts))
}
