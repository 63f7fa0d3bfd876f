//! Search pagination over a catalog provider.
//!
//! The paginator assembles every upstream page for a query and slices the
//! caller's window out of the assembled list.

mod paginator;
mod types;

pub use paginator::{SearchPaginator, DEFAULT_MAX_UPSTREAM_PAGES};
pub use types::*;

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors surfaced by [`SearchPaginator::search`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// Provider unreachable or its response could not be understood.
    #[error("Catalog provider unavailable: {0}")]
    Upstream(String),

    /// Provider reachable but refused the query.
    #[error("{0}")]
    UpstreamRejected(String),
}

impl From<CatalogError> for SearchError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Rejected(msg) => SearchError::UpstreamRejected(msg),
            other @ (CatalogError::Unreachable(_)
            | CatalogError::Malformed(_)
            | CatalogError::NotConfigured(_)) => SearchError::Upstream(other.to_string()),
        }
    }
}
