//! Catalog search client.

use crate::curated::{album_search_text, ALBUM_PAGE_SIZE, ALBUM_QUERIES, UNKNOWN_ARTIST};
use crate::error::{CatalogError, Result};
use crate::types::{CatalogConfig, HomeFeed, SearchResponse};
use futures_util::future::join_all;
use reqwest::Client;
use tracing::{debug, info, warn};
use tunebox_core::{Album, Track, TuneboxError};
use url::Url;

const SEARCH_PATH: &str = "youtube/v3/search";
const HOME_QUERY: &str = "top music";
const HOME_PAGE_SIZE: u32 = 20;

/// Client for the external track catalog.
///
/// Each call is a single request: no caching and no retry. A failed search is
/// retried only by the caller issuing a new one.
///
/// # Example
///
/// ```ignore
/// use tunebox_catalog::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::new("my-api-key"))?;
/// let tracks = client.search("wave to earth").await;
/// println!("Found {} tracks", tracks.len());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    search_url: Url,
    api_key: Option<String>,
    page_size: u32,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let base = config.base_url.trim_end_matches('/');
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let search_url = Url::parse(&format!("{base}/{SEARCH_PATH}"))
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("Tunebox/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            search_url,
            api_key: config.api_key.filter(|k| !k.is_empty()),
            page_size: config.page_size,
        })
    }

    /// The fully qualified search endpoint.
    pub fn search_url(&self) -> &str {
        self.search_url.as_str()
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Search the catalog, reporting every failure to the caller.
    ///
    /// Results keep the service's relevance order; non-video items are dropped.
    pub async fn try_search(&self, query: &str, max_results: u32) -> Result<Vec<Track>> {
        let api_key = self.api_key.as_deref().ok_or(CatalogError::MissingApiKey)?;

        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("part", "snippet")
            .append_pair("type", "video")
            .append_pair("maxResults", &max_results.to_string())
            .append_pair("q", query)
            .append_pair("key", api_key);

        debug!(query = %query, max_results, "Searching catalog");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Prefer the structured message when the body carries one
            let message = serde_json::from_str::<SearchResponse>(&body)
                .ok()
                .and_then(|r| r.error)
                .map_or(body, |e| e.message);
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: SearchResponse = serde_json::from_str(&body)
            .map_err(|e| CatalogError::Parse(format!("Failed to parse search response: {}", e)))?;

        if let Some(error) = parsed.error {
            return Err(CatalogError::Api {
                status: error.code.unwrap_or_else(|| status.as_u16()),
                message: error.message,
            });
        }

        let items = parsed
            .items
            .ok_or_else(|| CatalogError::Parse("Response has no items".into()))?;

        let tracks: Vec<Track> = items
            .into_iter()
            .filter_map(|item| item.into_track())
            .collect();

        debug!(query = %query, results = tracks.len(), "Catalog search finished");
        Ok(tracks)
    }

    /// Search with the configured page size.
    ///
    /// Never fails: any error is logged as `CatalogUnavailable` and yields an
    /// empty list. Blank queries return empty without a request.
    pub async fn search(&self, query: &str) -> Vec<Track> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        match self.try_search(query, self.page_size).await {
            Ok(tracks) => tracks,
            Err(e) => {
                let err = TuneboxError::from(e);
                warn!(query = %query, error = %err, "Search failed");
                Vec::new()
            }
        }
    }

    /// Resolve the curated album list.
    ///
    /// All album searches run concurrently and keep the curated order. Albums
    /// whose search fails are skipped; an album whose search succeeds with no
    /// results is kept with a placeholder artist.
    pub async fn albums(&self) -> Vec<Album> {
        let lookups = ALBUM_QUERIES.iter().map(|query| async move {
            let result = self
                .try_search(&album_search_text(query), ALBUM_PAGE_SIZE)
                .await;
            (*query, result)
        });

        let albums: Vec<Album> = join_all(lookups)
            .await
            .into_iter()
            .filter_map(|(query, result)| match result {
                Ok(songs) => Some(album_from_songs(query, songs)),
                Err(e) => {
                    warn!(album = %query, error = %TuneboxError::from(e), "Failed to resolve album");
                    None
                }
            })
            .collect();

        info!(albums = albums.len(), "Resolved curated albums");
        albums
    }

    /// Fetch the landing page content.
    ///
    /// On failure the feed is empty.
    pub async fn home_feed(&self) -> HomeFeed {
        match self.try_search(HOME_QUERY, HOME_PAGE_SIZE).await {
            Ok(items) => split_home_feed(&items),
            Err(e) => {
                warn!(error = %TuneboxError::from(e), "Failed to fetch home feed");
                HomeFeed::default()
            }
        }
    }
}

fn album_from_songs(name: &str, songs: Vec<Track>) -> Album {
    let first = songs.first();
    Album {
        name: name.to_string(),
        artist: first.map_or_else(|| UNKNOWN_ARTIST.to_string(), |t| t.artist.clone()),
        cover: first.and_then(|t| t.cover.clone()),
        songs,
    }
}

fn split_home_feed(items: &[Track]) -> HomeFeed {
    let slice = |from: usize, to: usize| -> Vec<Track> {
        items
            .get(from.min(items.len())..to.min(items.len()))
            .map(<[Track]>::to_vec)
            .unwrap_or_default()
    };

    HomeFeed {
        trending: slice(0, 3),
        top_artists: slice(0, 5),
        top_albums: slice(5, 10),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracks(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track::new(format!("v{i}"), format!("Song {i}"), "Channel"))
            .collect()
    }

    #[test]
    fn home_feed_slices() {
        let feed = split_home_feed(&tracks(20));
        assert_eq!(feed.trending.len(), 3);
        assert_eq!(feed.top_artists.len(), 5);
        assert_eq!(feed.top_albums.len(), 5);
        assert_eq!(feed.top_albums[0].id.as_str(), "v5");
    }

    #[test]
    fn home_feed_short_result() {
        let feed = split_home_feed(&tracks(4));
        assert_eq!(feed.trending.len(), 3);
        assert_eq!(feed.top_artists.len(), 4);
        assert!(feed.top_albums.is_empty());
    }

    #[test]
    fn empty_album_uses_placeholder_artist() {
        let album = album_from_songs("SZA SOS", Vec::new());
        assert_eq!(album.artist, UNKNOWN_ARTIST);
        assert!(album.cover.is_none());
    }

    #[test]
    fn album_artist_from_first_song() {
        let songs = vec![
            Track::new("a", "Kill Bill", "SZA").with_cover("cover-a"),
            Track::new("b", "Snooze", "Other"),
        ];
        let album = album_from_songs("SZA SOS", songs);
        assert_eq!(album.artist, "SZA");
        assert_eq!(album.cover.as_deref(), Some("cover-a"));
        assert_eq!(album.songs.len(), 2);
    }
}
