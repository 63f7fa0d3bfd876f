//! Favorites: an ordered, persisted set of catalog items keyed by id.
//!
//! The in-memory [`FavoritesSet`] is the source of truth for the session.
//! After every mutation it queues a snapshot for the [`FlushWriter`], which
//! writes it to a [`FavoritesStore`] in the background.

mod json_file;
mod set;
mod store;
mod writer;

pub use json_file::JsonFileStore;
pub use set::FavoritesSet;
pub use store::{FavoritesStore, StoreError};
pub use writer::{FlushHandle, FlushWriter};

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::mpsc;

/// Errors surfaced by [`FavoritesSet`] operations.
#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Movie with id {0} not found in favorites")]
    NotFound(String),
}

/// Create a favorites set seeded from `store`, plus the writer that persists it.
///
/// Returns:
/// - `FavoritesSet` - share this (behind an `Arc`) with whatever needs it
/// - `FlushWriter` - spawn this as a background task with `tokio::spawn(writer.run())`
///
/// The writer stops once the set is dropped, after writing the last snapshot.
pub fn create_favorites(
    store: Arc<dyn FavoritesStore>,
) -> Result<(FavoritesSet, FlushWriter), StoreError> {
    let items = store.load_all()?;
    tracing::info!("Loaded {} favorites", items.len());

    let (tx, rx) = mpsc::unbounded_channel();
    let set = FavoritesSet::new(items, FlushHandle::new(tx));
    let writer = FlushWriter::new(rx, store);
    Ok((set, writer))
}
