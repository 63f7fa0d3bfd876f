//! Catalog provider integration.
//!
//! The paginator only talks to the catalog through [`CatalogProvider`], so the
//! OMDb client can be swapped for a mock in tests.

mod omdb;
mod types;

pub use omdb::{OmdbClient, OmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when querying the catalog provider.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connection failed, timed out, or the provider answered with a non-success status.
    #[error("Failed to connect to catalog provider: {0}")]
    Unreachable(String),

    /// The provider answered but the body could not be decoded.
    #[error("Malformed catalog response: {0}")]
    Malformed(String),

    /// The provider reported a business error other than "no matches".
    #[error("{0}")]
    Rejected(String),

    /// Client not configured (missing API key, etc.).
    #[error("Catalog provider not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Malformed(e.to_string())
        } else {
            CatalogError::Unreachable(e.to_string())
        }
    }
}

/// Trait for catalog providers that can search titles page by page.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Search titles matching `query`, returning upstream page `page` (1-indexed).
    async fn search_by_title(&self, query: &str, page: u32) -> Result<ProviderPage, CatalogError>;
}
