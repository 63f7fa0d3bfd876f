use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::PathBuf;

use crate::catalog::OmdbConfig;
use crate::search::DEFAULT_MAX_UPSTREAM_PAGES;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed to call the API from a browser
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    3001
}

fn default_cors_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

/// Catalog provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    pub omdb: OmdbConfig,
}

/// Search pagination configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Upper bound on upstream pages fetched per search (default: 100)
    #[serde(default = "default_max_upstream_pages")]
    pub max_upstream_pages: u32,
    /// Page size used when a request does not specify one (default: 10)
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_upstream_pages: default_max_upstream_pages(),
            default_page_size: default_page_size(),
        }
    }
}

fn default_max_upstream_pages() -> u32 {
    DEFAULT_MAX_UPSTREAM_PAGES
}

fn default_page_size() -> i64 {
    10
}

/// Favorites persistence configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_favorites_path")]
    pub path: PathBuf,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            path: default_favorites_path(),
        }
    }
}

fn default_favorites_path() -> PathBuf {
    PathBuf::from("favorites.json")
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub server: ServerConfig,
    pub catalog: SanitizedCatalogConfig,
    pub search: SearchConfig,
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Clone, Serialize)]
pub struct SanitizedCatalogConfig {
    pub omdb: SanitizedOmdbConfig,
}

/// Sanitized OMDb config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedOmdbConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    pub api_key_configured: bool,
    pub timeout_secs: u64,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        let omdb = &config.catalog.omdb;
        Self {
            server: config.server.clone(),
            catalog: SanitizedCatalogConfig {
                omdb: SanitizedOmdbConfig {
                    base_url: omdb.base_url.clone(),
                    api_key_configured: !omdb.api_key.is_empty(),
                    timeout_secs: omdb.timeout_secs,
                },
            },
            search: config.search.clone(),
            favorites: config.favorites.clone(),
        }
    }
}
