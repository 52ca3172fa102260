//! Test application factory for integration tests.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;

use paintmix::assets::AssetLoader;
use paintmix::models::{AppConfig, Catalog};
use paintmix::server::{build_router, create_app_state, create_app_state_with, AppState};

/// Test application with router and direct access to the catalog
pub struct TestApp {
    router: axum::Router,
    pub catalog: Arc<Catalog>,
}

impl TestApp {
    /// Create a new test application using embedded assets
    pub fn new() -> Self {
        Self::from_state(Self::create_state())
    }

    /// Create a test application with the embedded catalog and a custom config
    pub fn with_config(config: AppConfig) -> Self {
        let catalog = Catalog::load_from_assets(&AssetLoader::new(None, None))
            .expect("Failed to load embedded catalog");
        Self::from_state(create_app_state_with(&config, Arc::new(catalog)))
    }

    /// Create a test application from an asset loader (external files)
    pub fn with_loader(loader: AssetLoader) -> Self {
        let state = create_app_state(Arc::new(loader)).expect("Failed to create app state");
        Self::from_state(state)
    }

    /// Create app state from embedded assets for custom router configuration
    pub fn create_state() -> AppState {
        let asset_loader = Arc::new(AssetLoader::new(None, None));
        create_app_state(asset_loader).expect("Failed to create app state")
    }

    fn from_state(state: AppState) -> Self {
        let catalog = state.catalog.clone();

        // Build router using shared server module (same as production)
        let router = build_router(state);

        Self { router, catalog }
    }

    /// Make a GET request to the given path
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request(Request::get(path).body(Body::empty()).unwrap())
            .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, path: &str, body: &str) -> TestResponse {
        let request = Request::post(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.request(request).await
    }

    /// POST a mix request for the given target and owned paints
    pub async fn mix(&self, target: &str, paints: &[&str]) -> TestResponse {
        let body = serde_json::json!({ "target": target, "paints": paints });
        self.post_json("/api/mix", &body.to_string()).await
    }

    /// Send a request to the router
    async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .into_body()
            .collect()
            .await
            .expect("Failed to collect body")
            .to_bytes()
            .to_vec();

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Test response with convenience methods
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    /// Parse body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Get body as string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}
