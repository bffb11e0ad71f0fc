/// Application configuration
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tunebox_catalog::{CatalogConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use tunebox_playback::EngineConfig;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tunebox.toml";

/// API key baked in at build time, used when none is configured
const BUILD_API_KEY: Option<&str> = option_env!("TUNEBOX_API_KEY");

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TuneboxConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub storage: StorageSettings,

    #[serde(default)]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_page_size")]
    pub page_size: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: u8,

    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// Length the headless player assumes for every track
    #[serde(default = "default_track_length_secs")]
    pub track_length_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchSettings {
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl TuneboxConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `tunebox.toml` is read if
    /// present. `TUNEBOX_*` variables override file values, with `__`
    /// separating sections (e.g. `TUNEBOX_CATALOG__API_KEY`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("TUNEBOX")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let mut config: Self = settings.build()?.try_deserialize()?;
        config.apply_build_defaults();
        Ok(config)
    }

    fn apply_build_defaults(&mut self) {
        let configured = self
            .catalog
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty());

        if !configured {
            self.catalog.api_key = BUILD_API_KEY.map(str::to_string);
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.playback.volume > 100 {
            return Err(AppError::Config(format!(
                "playback.volume must be 0-100, got {}",
                self.playback.volume
            )));
        }

        if self.playback.poll_interval_ms == 0 {
            return Err(AppError::Config(
                "playback.poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        if self.playback.track_length_secs == 0 {
            return Err(AppError::Config(
                "playback.track_length_secs must be greater than zero".to_string(),
            ));
        }

        if self.catalog.page_size == 0 {
            return Err(AppError::Config(
                "catalog.page_size must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig {
            base_url: self.catalog.base_url.clone(),
            api_key: self.catalog.api_key.clone(),
            page_size: self.catalog.page_size,
            timeout: Duration::from_secs(self.catalog.timeout_secs),
        }
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            volume: self.playback.volume,
            poll_interval: Duration::from_millis(self.playback.poll_interval_ms),
            repeat: false,
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms)
    }

    pub fn track_length(&self) -> Duration {
        Duration::from_secs(self.playback.track_length_secs)
    }
}

// Default values
fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_database_url() -> String {
    "sqlite://tunebox.db".to_string()
}

fn default_volume() -> u8 {
    50
}

fn default_poll_interval_ms() -> u64 {
    1000
}

fn default_track_length_secs() -> u64 {
    180
}

fn default_debounce_ms() -> u64 {
    500
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
        }
    }
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            volume: default_volume(),
            poll_interval_ms: default_poll_interval_ms(),
            track_length_secs: default_track_length_secs(),
        }
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}
