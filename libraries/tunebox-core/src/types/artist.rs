//! Artist types

use serde::{Deserialize, Serialize};

/// An artist entry in the curated artist list
///
/// Clicking an artist searches the catalog by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Display name, also used as the search query
    pub name: String,
}

impl Artist {
    /// Create an artist entry
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
