//! Common test utilities for E2E testing with mocks.
//!
//! This module provides a test fixture that creates an in-process server
//! with mock dependencies injected, enabling E2E testing without the OMDb
//! API or the filesystem.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::task::JoinHandle;
use tower::ServiceExt;

use marquee_core::{
    create_favorites, CatalogConfig, CatalogItem, CatalogProvider, Config, FavoritesConfig,
    FavoritesStore, OmdbConfig, SearchConfig, SearchPaginator, ServerConfig,
    testing::{MemoryStore, MockCatalogProvider},
};

/// Re-export fixtures for test convenience
pub use marquee_core::testing::fixtures;

/// Test fixture for E2E testing with mock dependencies.
///
/// Provides an in-process server with fully controllable mocks for:
/// - Catalog search (MockCatalogProvider)
/// - Favorites persistence (MemoryStore)
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_add_favorite() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.post("/api/v1/favorites", json!({
///         "id": "tt1", "title": "Alien", "year": "1979", "posterUrl": "N/A"
///     })).await;
///
///     assert_eq!(response.status, 201);
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock catalog provider - configure search results
    pub provider: Arc<MockCatalogProvider>,
    /// In-memory favorites store - inspect persisted snapshots
    pub store: Arc<MemoryStore>,
    writer: Option<JoinHandle<()>>,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestFixture {
    /// Create a new test fixture with an empty catalog and no saved favorites.
    pub async fn new() -> Self {
        Self::with_saved_favorites(Vec::new()).await
    }

    /// Create a test fixture whose store already holds `saved`.
    pub async fn with_saved_favorites(saved: Vec<CatalogItem>) -> Self {
        let provider = Arc::new(MockCatalogProvider::new());
        let store = Arc::new(if saved.is_empty() {
            MemoryStore::new()
        } else {
            MemoryStore::with_items(saved)
        });

        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
                cors_origins: vec!["http://localhost:3000".to_string()],
            },
            catalog: CatalogConfig {
                omdb: OmdbConfig {
                    api_key: "test-key".to_string(),
                    base_url: None,
                    timeout_secs: 10,
                },
            },
            search: SearchConfig::default(),
            favorites: FavoritesConfig::default(),
        };

        let paginator =
            SearchPaginator::new(Arc::clone(&provider) as Arc<dyn CatalogProvider>);
        let (favorites, writer) =
            create_favorites(Arc::clone(&store) as Arc<dyn FavoritesStore>)
                .expect("Failed to load favorites");
        let writer = tokio::spawn(writer.run());

        let state = Arc::new(marquee_server::state::AppState::new(
            config, paginator, favorites,
        ));
        let router = marquee_server::api::create_router(state);

        Self {
            router,
            provider,
            store,
            writer: Some(writer),
        }
    }

    /// Drop the router and wait until every queued favorites snapshot is saved.
    pub async fn shutdown(mut self) -> Arc<MemoryStore> {
        drop(self.router);
        if let Some(writer) = self.writer.take() {
            writer.await.expect("Favorites writer panicked");
        }
        self.store
    }

    /// Send a GET request to the test server.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// Send a POST request with JSON body.
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }

    /// Send a DELETE request.
    pub async fn delete(&self, path: &str) -> TestResponse {
        self.request("DELETE", path, None).await
    }

    /// Send a POST request with raw string body (for testing malformed JSON).
    pub async fn post_raw(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send a request to the test server.
    async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut request_builder = Request::builder().method(method).uri(path);

        let body = if let Some(json_body) = body {
            request_builder = request_builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&json_body).unwrap())
        } else {
            Body::empty()
        };

        self.send(request_builder.body(body).unwrap()).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes();

        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status,
            $response.status,
            serde_json::to_string_pretty(&$response.body).unwrap_or_default()
        );
    };
}
