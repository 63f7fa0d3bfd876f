//! Testing utilities and mock implementations.
//!
//! This module provides mock implementations of the external collaborator
//! traits, so the paginator, the favorites set and the HTTP surface can be
//! tested without the real OMDb API or the filesystem.
//!
//! # Example
//!
//! ```rust,ignore
//! use marquee_core::testing::{fixtures, MemoryStore, MockCatalogProvider};
//!
//! let provider = MockCatalogProvider::new();
//! provider.set_items(fixtures::numbered_movies("Batman", 25)).await;
//!
//! let store = MemoryStore::with_items(vec![fixtures::movie("tt1", "Alien", "1979")]);
//! ```

mod memory_store;
mod mock_catalog;

pub use memory_store::MemoryStore;
pub use mock_catalog::{MockCatalogProvider, RecordedSearch};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::catalog::CatalogItem;

    /// Create a movie with reasonable defaults.
    pub fn movie(id: &str, title: &str, year: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            title: title.to_string(),
            year: year.to_string(),
            poster_url: format!("https://posters.example.com/{}.jpg", id),
            kind: Some("movie".to_string()),
        }
    }

    /// Create `count` movies with ids "1".."count" and titles "{prefix} {n}".
    pub fn numbered_movies(prefix: &str, count: u32) -> Vec<CatalogItem> {
        (1..=count)
            .map(|i| movie(&i.to_string(), &format!("{} {}", prefix, i), "2023"))
            .collect()
    }
}
