//! In-memory favorites store for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::catalog::CatalogItem;
use crate::favorites::{FavoritesStore, StoreError};

/// A [`FavoritesStore`] that keeps the saved set in memory.
///
/// Counts saves and can be told to fail them, so tests can observe the
/// write-after-mutate behaviour of `FavoritesSet`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<Vec<CatalogItem>>>,
    save_count: AtomicUsize,
    fail_saves: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a saved set.
    pub fn with_items(items: Vec<CatalogItem>) -> Self {
        Self {
            saved: Mutex::new(Some(items)),
            ..Self::default()
        }
    }

    /// The most recently saved set, if any save happened (or was seeded).
    pub fn saved(&self) -> Option<Vec<CatalogItem>> {
        self.saved.lock().unwrap().clone()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count.load(Ordering::SeqCst)
    }

    /// Make subsequent saves fail (or succeed again).
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }
}

impl FavoritesStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<CatalogItem>, StoreError> {
        Ok(self.saved.lock().unwrap().clone().unwrap_or_default())
    }

    fn save_all(&self, items: &[CatalogItem]) -> Result<(), StoreError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(StoreError::Io(std::io::Error::other("mock save failure")));
        }
        *self.saved.lock().unwrap() = Some(items.to_vec());
        self.save_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
