//! Fetch-all-then-slice paginator.

use std::collections::HashSet;
use std::sync::Arc;

use futures::{stream, StreamExt, TryStreamExt};
use tracing::{debug, info};

use super::types::{normalize_page_size, PagedResult};
use super::SearchError;
use crate::catalog::{CatalogItem, CatalogProvider};

/// OMDb refuses to serve pages past 100.
pub const DEFAULT_MAX_UPSTREAM_PAGES: u32 = 100;

/// Upstream pages requested at once while assembling a result set.
const UPSTREAM_CONCURRENCY: usize = 4;

/// Stateless search orchestrator over a [`CatalogProvider`].
pub struct SearchPaginator {
    provider: Arc<dyn CatalogProvider>,
    max_upstream_pages: u32,
}

impl SearchPaginator {
    pub fn new(provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            provider,
            max_upstream_pages: DEFAULT_MAX_UPSTREAM_PAGES,
        }
    }

    /// Limit how many upstream pages a single search may fetch (minimum 1).
    pub fn with_max_upstream_pages(mut self, max_upstream_pages: u32) -> Self {
        self.max_upstream_pages = max_upstream_pages.max(1);
        self
    }

    /// Search `query` and return the window for `page` of `page_size` items.
    ///
    /// Out-of-range pages are clamped, never rejected. A query that is empty
    /// after trimming returns `total_pages == 0` without calling the provider.
    pub async fn search(
        &self,
        query: &str,
        page: i64,
        page_size: i64,
    ) -> Result<PagedResult, SearchError> {
        let page_size = normalize_page_size(page_size);
        let query = query.trim();

        if query.is_empty() {
            debug!("Empty search query, skipping catalog provider");
            return Ok(PagedResult::empty_query(page_size));
        }

        let matches = self.fetch_all(query).await?;
        let result = PagedResult::from_matches(matches, page, page_size);

        info!(
            "Search '{}': {} matches, page {}/{} (requested {}, size {})",
            query, result.total_count, result.page, result.total_pages, page, page_size
        );

        Ok(result)
    }

    /// Assemble every match the provider has for `query`, in upstream order.
    async fn fetch_all(&self, query: &str) -> Result<Vec<CatalogItem>, SearchError> {
        let first = self.provider.search_by_title(query, 1).await?;
        let reported = first.reported_total();

        if reported == 0 || first.matches.is_empty() {
            return Ok(Vec::new());
        }

        let per_page = first.matches.len() as u64;
        let upstream_pages = reported
            .div_ceil(per_page)
            .min(u64::from(self.max_upstream_pages)) as u32;

        debug!(
            "Assembling '{}': {} reported matches across {} upstream pages",
            query, reported, upstream_pages
        );

        let rest: Vec<_> = stream::iter(2..=upstream_pages)
            .map(|p| self.provider.search_by_title(query, p))
            .buffered(UPSTREAM_CONCURRENCY)
            .try_collect()
            .await?;

        let mut seen = HashSet::new();
        let mut matches: Vec<CatalogItem> = std::iter::once(first)
            .chain(rest)
            .flat_map(|page| page.matches)
            .filter(|item| seen.insert(item.id.clone()))
            .collect();

        matches.truncate(usize::try_from(reported).unwrap_or(usize::MAX));
        Ok(matches)
    }
}
