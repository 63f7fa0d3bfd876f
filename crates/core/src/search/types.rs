//! Page window types.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogItem;

/// One page of search results plus total-count metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult {
    pub items: Vec<CatalogItem>,
    pub total_count: u64,
    pub page: u64,
    pub page_size: u64,
    /// 0 only for an empty query; at least 1 otherwise.
    pub total_pages: u64,
}

impl PagedResult {
    /// Result for a query that was empty after trimming.
    pub fn empty_query(page_size: u64) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            page: 1,
            page_size,
            total_pages: 0,
        }
    }

    /// Slice the window for `page` out of the full match list.
    ///
    /// `page` is clamped into `[1, total_pages]`; `page_size` must already be
    /// normalized (see [`normalize_page_size`]).
    pub fn from_matches(matches: Vec<CatalogItem>, page: i64, page_size: u64) -> Self {
        let total_count = matches.len() as u64;
        let total_pages = total_count.div_ceil(page_size).max(1);
        let page = clamp_page(page, total_pages);

        let start = (page - 1).saturating_mul(page_size).min(total_count);
        let end = start.saturating_add(page_size).min(total_count);

        let items = matches
            .into_iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect();

        Self {
            items,
            total_count,
            page,
            page_size,
            total_pages,
        }
    }
}

/// Force a caller-supplied page size to be at least 1.
pub fn normalize_page_size(page_size: i64) -> u64 {
    if page_size < 1 {
        1
    } else {
        page_size as u64
    }
}

fn clamp_page(page: i64, total_pages: u64) -> u64 {
    if page < 1 {
        1
    } else {
        (page as u64).min(total_pages)
    }
}
