//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use backstore_api::AppState;
use backstore_cache::CacheManager;
use backstore_core::config::AppConfig;
use backstore_database::ItemManager;
use backstore_storage::BlobManager;

/// Test application with every capability on its fallback provider.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Shared state, for inspecting providers directly
    pub state: AppState,
}

/// Response captured from a test request.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    /// Parse the body as JSON.
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is not JSON")
    }
}

impl TestApp {
    /// Create a new test application with no provider configuration.
    pub async fn new() -> Self {
        let config = AppConfig::default();

        let cache = CacheManager::new(&config.cache, &config.cache.key_prefix)
            .await
            .expect("Failed to init cache");
        let blobs = BlobManager::new(&config.blob)
            .await
            .expect("Failed to init blob store");
        let items = ItemManager::new(&config.database);

        let state = AppState::new(config, cache, blobs, items);
        Self {
            router: backstore_api::build_router(state.clone()),
            state,
        }
    }

    /// Send a request, with an optional JSON body.
    pub async fn request(&self, method: &str, uri: &str, body: Option<&str>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }
}
