//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets::AssetLoader;
use crate::error::ApiError;
use crate::models::{AppConfig, Catalog};
use crate::services::MixService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub mix_service: Arc<MixService>,
}

/// Create application state from an asset loader.
///
/// A bad config falls back to defaults; a bad catalog is fatal.
pub fn create_app_state(asset_loader: Arc<AssetLoader>) -> anyhow::Result<AppState> {
    let config = AppConfig::load_from_assets(&asset_loader);
    let catalog = Arc::new(
        Catalog::load_from_assets(&asset_loader)
            .map_err(|e| anyhow::anyhow!("Failed to load paint catalog: {e}"))?,
    );
    Ok(create_app_state_with(&config, catalog))
}

/// Create application state from already loaded parts.
pub fn create_app_state_with(config: &AppConfig, catalog: Arc<Catalog>) -> AppState {
    let mix_service = Arc::new(MixService::new(catalog.clone(), config));
    AppState {
        catalog,
        mix_service,
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/mix", post(handle_mix))
        .route("/api/brands", get(handle_brands))
        .route("/api/paints", get(handle_paints))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_mix(
    State(state): State<AppState>,
    body: Json<api::MixRequestBody>,
) -> Result<impl axum::response::IntoResponse, ApiError> {
    api::handle_mix(State(state.mix_service), body).await
}

async fn handle_brands(State(state): State<AppState>) -> Json<api::BrandsResponse> {
    api::handle_brands(State(state.catalog)).await
}

async fn handle_paints(
    State(state): State<AppState>,
    query: Query<api::PaintsQuery>,
) -> Result<Json<api::PaintsResponse>, ApiError> {
    api::handle_paints(State(state.catalog), query).await
}
