//! Mock catalog provider for testing.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::catalog::{CatalogError, CatalogItem, CatalogProvider, ProviderPage};

/// A recorded provider query for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedSearch {
    pub query: String,
    pub page: u32,
}

/// Mock implementation of the CatalogProvider trait.
///
/// Provides controllable behavior for testing:
/// - Serve configurable items, split into upstream pages like OMDb does
/// - Track queries for assertions
/// - Simulate failures
///
/// Items match a query when their title contains it (case-insensitive).
/// A query with no matches answers `not_found`, the way OMDb does.
///
/// # Example
///
/// ```rust,ignore
/// use marquee_core::testing::{fixtures, MockCatalogProvider};
///
/// let provider = MockCatalogProvider::new();
/// provider.set_items(fixtures::numbered_movies("Batman", 25)).await;
///
/// let page = provider.search_by_title("batman", 3).await?;
/// assert_eq!(page.matches.len(), 5);
/// ```
#[derive(Debug)]
pub struct MockCatalogProvider {
    /// Items served by searches, in provider order.
    items: Arc<RwLock<Vec<CatalogItem>>>,
    /// Items per upstream page.
    page_size: usize,
    /// Overrides the reported total match count when set.
    reported_total: Arc<RwLock<Option<u64>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedSearch>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<CatalogError>>>,
}

impl Default for MockCatalogProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCatalogProvider {
    /// Create a new empty mock serving 10 items per upstream page.
    pub fn new() -> Self {
        Self::with_page_size(10)
    }

    /// Create a new empty mock with a custom upstream page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
            page_size: page_size.max(1),
            reported_total: Arc::new(RwLock::new(None)),
            queries: Arc::new(RwLock::new(Vec::new())),
            next_error: Arc::new(RwLock::new(None)),
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the served items.
    pub async fn set_items(&self, items: Vec<CatalogItem>) {
        *self.items.write().await = items;
    }

    /// Append a served item.
    pub async fn add_item(&self, item: CatalogItem) {
        self.items.write().await.push(item);
    }

    /// Report `total` matches regardless of how many items actually match.
    pub async fn set_reported_total(&self, total: Option<u64>) {
        *self.reported_total.write().await = total;
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_searches(&self) -> Vec<RecordedSearch> {
        self.queries.read().await.clone()
    }

    /// Clear recorded queries.
    pub async fn clear_recorded(&self) {
        self.queries.write().await.clear();
    }

    /// Get the number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: CatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Clear any pending error.
    pub async fn clear_next_error(&self) {
        *self.next_error.write().await = None;
    }

    async fn take_error(&self) -> Option<CatalogError> {
        self.next_error.write().await.take()
    }
}

#[async_trait]
impl CatalogProvider for MockCatalogProvider {
    async fn search_by_title(&self, query: &str, page: u32) -> Result<ProviderPage, CatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.queries.write().await.push(RecordedSearch {
            query: query.to_string(),
            page,
        });

        let query_lower = query.to_lowercase();
        let matching: Vec<CatalogItem> = self
            .items
            .read()
            .await
            .iter()
            .filter(|m| m.title.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();

        if matching.is_empty() {
            return Ok(ProviderPage::not_found());
        }

        let total_matches = self
            .reported_total
            .read()
            .await
            .unwrap_or(matching.len() as u64);

        let skip = (page.max(1) as usize - 1).saturating_mul(self.page_size);
        let matches = matching
            .into_iter()
            .skip(skip)
            .take(self.page_size)
            .collect();

        Ok(ProviderPage {
            matches,
            total_matches,
            not_found: false,
        })
    }
}
