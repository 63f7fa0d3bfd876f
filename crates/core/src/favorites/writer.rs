use std::sync::Arc;

use tokio::sync::mpsc;

use super::FavoritesStore;
use crate::catalog::CatalogItem;

/// Handle for queueing favorites snapshots to be persisted.
///
/// Queueing never blocks and never fails the caller; a closed channel is logged.
#[derive(Debug, Clone)]
pub struct FlushHandle {
    tx: mpsc::UnboundedSender<Vec<CatalogItem>>,
}

impl FlushHandle {
    pub fn new(tx: mpsc::UnboundedSender<Vec<CatalogItem>>) -> Self {
        Self { tx }
    }

    /// Queue a full snapshot of the set.
    pub fn flush(&self, snapshot: Vec<CatalogItem>) {
        if let Err(e) = self.tx.send(snapshot) {
            tracing::error!("Failed to queue favorites snapshot: {}", e);
        }
    }
}

/// Background task that receives snapshots and writes them to storage
pub struct FlushWriter {
    rx: mpsc::UnboundedReceiver<Vec<CatalogItem>>,
    store: Arc<dyn FavoritesStore>,
}

impl FlushWriter {
    pub fn new(rx: mpsc::UnboundedReceiver<Vec<CatalogItem>>, store: Arc<dyn FavoritesStore>) -> Self {
        Self { rx, store }
    }

    /// Run the writer, consuming snapshots until the channel is closed
    ///
    /// Snapshots that queued up while a save was running are collapsed into
    /// the newest one. This should be spawned as a background task.
    pub async fn run(mut self) {
        tracing::info!("Favorites writer started");

        while let Some(mut snapshot) = self.rx.recv().await {
            while let Ok(newer) = self.rx.try_recv() {
                snapshot = newer;
            }

            // Stores do blocking I/O
            let store = Arc::clone(&self.store);
            let count = snapshot.len();
            match tokio::task::spawn_blocking(move || store.save_all(&snapshot)).await {
                Ok(Ok(())) => tracing::debug!("Saved {} favorites", count),
                Ok(Err(e)) => tracing::error!("Failed to save favorites: {}", e),
                Err(e) => tracing::error!("Favorites save task failed: {}", e),
            }
        }

        tracing::info!("Favorites writer shutting down");
    }
}
