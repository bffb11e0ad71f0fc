//! Tunebox Catalog Client
//!
//! HTTP client for the external video search service that backs Tunebox's
//! track catalog.
//!
//! # Features
//!
//! - **Search**: free-text query to a relevance-ordered page of tracks
//! - **Albums**: curated album queries resolved through search
//! - **Artists**: random pick from a curated artist pool
//! - **Home feed**: trending/artist/album cards from one broad query
//!
//! # Example
//!
//! ```ignore
//! use tunebox_catalog::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::new("my-api-key"))?;
//!
//!     // Errors become an empty list plus a log entry
//!     let tracks = client.search("Kendrick Lamar").await;
//!     for track in &tracks {
//!         println!("{} - {}", track.artist, track.title);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod curated;
mod error;
mod types;

pub use client::CatalogClient;
pub use curated::{
    album_search_text, curated_artists, ALBUM_PAGE_SIZE, ALBUM_QUERIES, ARTIST_NAMES,
    ARTIST_PAGE_SIZE, UNKNOWN_ARTIST,
};
pub use error::{CatalogError, Result};
pub use types::{CatalogConfig, HomeFeed, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
