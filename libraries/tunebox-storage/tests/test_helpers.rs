//! Test helpers and fixtures for storage integration tests
//!
//! Persistence tests use REAL SQLite files (NOT in-memory) so a store can be
//! closed and reopened the way a restarted process would see it.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;
use tempfile::TempDir;
use tunebox_core::{KeyValueStore, Result, Track, TuneboxError};
use tunebox_storage::SqliteKeyValueStore;

/// Test database location that cleans up on drop
pub struct TestDb {
    pub url: String,
    _temp_dir: TempDir,
}

impl TestDb {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("tunebox.db");
        let url = format!("sqlite://{}", db_path.display());

        Self {
            url,
            _temp_dir: temp_dir,
        }
    }

    /// Open a fresh connection, as a new process would
    pub async fn open(&self) -> Arc<dyn KeyValueStore> {
        Arc::new(
            SqliteKeyValueStore::open(&self.url)
                .await
                .expect("Failed to open store"),
        )
    }
}

/// Backend whose reads and writes always fail
pub struct BrokenStore;

#[async_trait]
impl KeyValueStore for BrokenStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(TuneboxError::storage("disk on fire"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(TuneboxError::storage("disk on fire"))
    }

    async fn remove(&self, _key: &str) -> Result<()> {
        Err(TuneboxError::storage("disk on fire"))
    }
}

pub fn track(id: &str) -> Track {
    Track::new(id, format!("Song {id}"), format!("Channel {id}"))
        .with_cover(format!("https://i.ytimg.com/vi/{id}/default.jpg"))
}
