use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use super::{FavoritesError, FlushHandle};
use crate::catalog::CatalogItem;

#[derive(Debug, Default)]
struct Entries {
    /// Ids in insertion order.
    order: Vec<String>,
    items: HashMap<String, CatalogItem>,
}

impl Entries {
    fn from_items(items: Vec<CatalogItem>) -> Self {
        let mut entries = Self::default();
        for item in items {
            entries.upsert(item);
        }
        entries
    }

    fn upsert(&mut self, item: CatalogItem) {
        if !self.items.contains_key(&item.id) {
            self.order.push(item.id.clone());
        }
        self.items.insert(item.id.clone(), item);
    }

    fn snapshot(&self) -> Vec<CatalogItem> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .cloned()
            .collect()
    }
}

/// Ordered set of favorite items, unique by id.
///
/// Mutations hold the write lock for their whole duration and queue a
/// snapshot for persistence before releasing it, so readers never see a
/// half-applied change and the store receives snapshots in mutation order.
#[derive(Debug)]
pub struct FavoritesSet {
    entries: RwLock<Entries>,
    flush: FlushHandle,
}

impl FavoritesSet {
    /// Create a set seeded with `items` (later duplicates of an id win).
    pub fn new(items: Vec<CatalogItem>, flush: FlushHandle) -> Self {
        Self {
            entries: RwLock::new(Entries::from_items(items)),
            flush,
        }
    }

    /// Insert `item`, or fully replace the entry with the same id in place.
    pub fn add(&self, item: CatalogItem) -> CatalogItem {
        let mut entries = self.write();
        debug!("Adding favorite {}", item.id);
        entries.upsert(item.clone());
        self.flush.flush(entries.snapshot());
        item
    }

    /// Remove the entry with `id`.
    pub fn remove(&self, id: &str) -> Result<(), FavoritesError> {
        let mut entries = self.write();
        if entries.items.remove(id).is_none() {
            return Err(FavoritesError::NotFound(id.to_string()));
        }
        entries.order.retain(|existing| existing != id);
        debug!("Removed favorite {}", id);
        self.flush.flush(entries.snapshot());
        Ok(())
    }

    /// Snapshot of all entries in insertion order.
    pub fn list(&self) -> Vec<CatalogItem> {
        self.read().snapshot()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.read().items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A poisoned lock leaves at worst a stale id in `order`, which
    // `snapshot` skips.
    fn read(&self) -> RwLockReadGuard<'_, Entries> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Entries> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
