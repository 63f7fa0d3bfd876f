//! Persistence collaborator for the favorites set.

use thiserror::Error;

use crate::catalog::CatalogItem;

/// Errors from a favorites store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Favorites storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Saved favorites are corrupt: {0}")]
    Corrupt(String),
}

/// Trait for favorites persistence.
///
/// Implementations only read and write whole sets; ordering and dedup are
/// owned by `FavoritesSet`.
pub trait FavoritesStore: Send + Sync {
    /// Load the saved set. A store with nothing saved yet returns an empty set.
    fn load_all(&self) -> Result<Vec<CatalogItem>, StoreError>;

    /// Replace the saved set with `items`.
    fn save_all(&self, items: &[CatalogItem]) -> Result<(), StoreError>;
}
