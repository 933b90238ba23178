//! Common test utilities for E2E testing.
//!
//! This module provides a test fixture that creates an in-process server
//! backed by the fixture catalog and a mock history store, so tests run
//! without files, a database, or a network.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use cinestream_core::{
    testing::MockHistoryStore, Catalog, Config, FrontendConfig, SearchEngine, ServerConfig,
};

/// Re-export fixtures for test convenience
pub use cinestream_core::testing::fixtures;

/// Markup served for front-end routes.
pub const INDEX_HTML: &str = "<!doctype html><title>CineStream</title>";

/// Test fixture for E2E testing.
///
/// # Example
///
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_search() {
///     let fixture = TestFixture::new().await;
///
///     let response = fixture.get("/api/v1/search?q=dune").await;
///
///     assert_eq!(response.body["view"], "results");
/// }
/// ```
pub struct TestFixture {
    /// The Axum router for testing
    pub router: Router,
    /// Mock history store - inspect saves, inject failures
    pub history: Arc<MockHistoryStore>,
    /// Keeps the front-end directory alive for the fixture's lifetime
    _temp_dir: TempDir,
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
    pub text: String,
}

impl TestFixture {
    /// Create a new test fixture over the fixture catalog.
    pub async fn new() -> Self {
        Self::with_catalog(fixtures::catalog(), MockHistoryStore::new()).await
    }

    /// Create a test fixture with a custom catalog and history store.
    pub async fn with_catalog(catalog: Catalog, history: MockHistoryStore) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let frontend_dir = temp_dir.path().join("public");
        std::fs::create_dir_all(&frontend_dir).expect("Failed to create frontend dir");
        std::fs::write(frontend_dir.join("index.html"), INDEX_HTML)
            .expect("Failed to write index.html");

        let config = Config {
            server: ServerConfig {
                host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
                port: 0, // Not used for in-process testing
            },
            frontend: FrontendConfig { dir: frontend_dir },
            ..Default::default()
        };

        let history = Arc::new(history);
        let engine = SearchEngine::new(
            Arc::new(catalog),
            Arc::clone(&history) as Arc<dyn cinestream_core::HistoryStore>,
        )
        .with_history_view_limit(config.search.history_view_limit);

        let state = Arc::new(cinestream_server::state::AppState::new(config, engine));
        let router = cinestream_server::api::create_router(state);

        Self {
            router,
            history,
            _temp_dir: temp_dir,
        }
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

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body, text }
    }
}

/// Helper to assert a response has expected status.
#[macro_export]
macro_rules! assert_status {
    ($response:expr, $status:expr) => {
        assert_eq!(
            $response.status, $status,
            "Expected status {:?}, got {:?}. Body: {}",
            $status, $response.status, $response.text
        );
    };
}
