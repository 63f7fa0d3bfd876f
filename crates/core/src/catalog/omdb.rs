//! OMDb (Open Movie Database) API client.
//!
//! OMDb requires an API key and serves search results 10 per page.
//! A failed search still answers HTTP 200, with `Response: "False"` and an
//! `Error` message in the body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{CatalogItem, ProviderPage};
use super::{CatalogError, CatalogProvider};

const DEFAULT_BASE_URL: &str = "https://www.omdbapi.com/";

/// Error text OMDb uses when a search has no results.
const NOT_FOUND_MARKER: &str = "Movie not found";

/// OMDb API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OmdbConfig {
    /// OMDb API key (required).
    pub api_key: String,
    /// Base URL (default: https://www.omdbapi.com/).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Request timeout in seconds (default: 10).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    10
}

/// OMDb API client.
pub struct OmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OmdbClient {
    /// Create a new OMDb client.
    pub fn new(config: OmdbConfig) -> Result<Self, CatalogError> {
        if config.api_key.is_empty() {
            return Err(CatalogError::NotConfigured(
                "OMDb API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key,
        })
    }
}

#[async_trait]
impl CatalogProvider for OmdbClient {
    async fn search_by_title(&self, query: &str, page: u32) -> Result<ProviderPage, CatalogError> {
        debug!("OMDb search: query='{}', page={}", query, page);

        let page = page.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("s", query),
                ("type", "movie"),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        if let Some(err) = status_error(response.status()) {
            return Err(err);
        }

        let body = response.text().await?;
        let parsed: OmdbSearchResponse = serde_json::from_str(&body).map_err(|e| {
            CatalogError::Malformed(format!("Failed to parse search response: {}", e))
        })?;

        parsed.into_page()
    }
}

/// Map a non-2xx OMDb status to an error. OMDb answers 401 for a bad key.
fn status_error(status: StatusCode) -> Option<CatalogError> {
    if status == StatusCode::UNAUTHORIZED {
        return Some(CatalogError::NotConfigured(
            "Invalid OMDb API key".to_string(),
        ));
    }
    if !status.is_success() {
        return Some(CatalogError::Unreachable(format!(
            "OMDb answered with status {}",
            status.as_u16()
        )));
    }
    None
}

// ============================================================================
// OMDb API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct OmdbSearchResponse {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Search", default)]
    search: Option<Vec<OmdbMovieResult>>,
    #[serde(rename = "totalResults", default)]
    total_results: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbMovieResult {
    #[serde(rename = "imdbID")]
    imdb_id: String,
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Year", default)]
    year: String,
    #[serde(rename = "Poster", default)]
    poster: String,
    #[serde(rename = "Type", default)]
    kind: Option<String>,
}

impl OmdbSearchResponse {
    fn into_page(self) -> Result<ProviderPage, CatalogError> {
        if self.response.eq_ignore_ascii_case("false") {
            return match self.error {
                Some(msg) if msg.contains(NOT_FOUND_MARKER) => Ok(ProviderPage::not_found()),
                Some(msg) => Err(CatalogError::Rejected(msg)),
                None => Err(CatalogError::Rejected("Failed to fetch movies".to_string())),
            };
        }

        let total_matches = self
            .total_results
            .as_deref()
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or(0);

        Ok(ProviderPage {
            matches: self
                .search
                .unwrap_or_default()
                .into_iter()
                .map(|r| r.into())
                .collect(),
            total_matches,
            not_found: false,
        })
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<OmdbMovieResult> for CatalogItem {
    fn from(r: OmdbMovieResult) -> Self {
        Self {
            id: r.imdb_id,
            title: r.title,
            year: r.year,
            poster_url: r.poster,
            kind: r.kind,
        }
    }
}
