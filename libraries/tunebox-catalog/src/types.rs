//! Types for catalog requests and responses.

use serde::Deserialize;
use std::time::Duration;
use tunebox_core::Track;

/// Default search service origin
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com";

/// Default number of results per search
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Configuration for the catalog client.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Service origin (e.g., "https://www.googleapis.com")
    pub base_url: String,
    /// Static client credential sent as the `key` query parameter
    pub api_key: Option<String>,
    /// Results per search
    pub page_size: u32,
    /// Request timeout
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Create a config against the default origin.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Point the client at a different origin.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            page_size: DEFAULT_PAGE_SIZE,
            timeout: Duration::from_secs(15),
        }
    }
}

/// Landing page content derived from one broad query.
#[derive(Debug, Clone, Default)]
pub struct HomeFeed {
    /// First three results
    pub trending: Vec<Track>,
    /// Results 0..5, shown as artist cards
    pub top_artists: Vec<Track>,
    /// Results 5..10, shown as album cards
    pub top_albums: Vec<Track>,
}

// =============================================================================
// Wire types
// =============================================================================

/// Search response body. Either `items` or `error` is present.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub items: Option<Vec<SearchItem>>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: ItemId,
    pub snippet: Snippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snippet {
    pub title: String,
    #[serde(default)]
    pub channel_title: String,
    #[serde(default)]
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Thumbnails {
    pub high: Option<Thumbnail>,
    pub medium: Option<Thumbnail>,
    pub default: Option<Thumbnail>,
}

impl Thumbnails {
    /// Largest available thumbnail
    pub fn best(self) -> Option<String> {
        self.high
            .or(self.medium)
            .or(self.default)
            .map(|t| t.url)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Thumbnail {
    pub url: String,
}

/// `error` object in a failed response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
}

impl SearchItem {
    /// Normalize into a track; `None` for non-video results.
    pub fn into_track(self) -> Option<Track> {
        let video_id = self.id.video_id.filter(|id| !id.is_empty())?;
        let track = Track::new(video_id, self.snippet.title, self.snippet.channel_title);

        Some(match self.snippet.thumbnails.best() {
            Some(cover) => track.with_cover(cover),
            None => track,
        })
    }
}
