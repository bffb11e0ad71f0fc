//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur when querying the track catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error status or an `error` object in the body
    #[error("Catalog error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the response body
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// No API key configured
    #[error("Catalog API key is not configured")]
    MissingApiKey,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<CatalogError> for tunebox_core::TuneboxError {
    fn from(err: CatalogError) -> Self {
        tunebox_core::TuneboxError::catalog_unavailable(err.to_string())
    }
}
