//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::assets;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::rendering::ExportRenderer;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<ExportRenderer>,
    pub config: Arc<AppConfig>,
}

/// Create application state from a loaded configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    AppState {
        renderer: Arc::new(ExportRenderer::new()),
        config: Arc::new(config),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Editor page
        .route("/", get(handle_editor_page))
        // Editor API
        .route("/api/export", post(handle_export))
        .route("/api/preview", post(api::handle_preview))
        .route("/api/defaults", get(handle_defaults))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_export(
    axum::extract::State(state): axum::extract::State<AppState>,
    body: axum::Json<crate::models::EditorState>,
) -> Result<axum::response::Response, ApiError> {
    api::handle_export(
        axum::extract::State(state.renderer),
        axum::extract::State(state.config),
        body,
    )
    .await
}

/// Initial editor state the browser editor starts from.
async fn handle_defaults(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> axum::Json<crate::models::EditorState> {
    axum::Json(state.config.defaults.clone())
}

/// Serve the embedded single-file editor page.
async fn handle_editor_page() -> impl IntoResponse {
    match assets::editor_page() {
        Some(html) => Html(html).into_response(),
        None => (
            axum::http::StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "text/plain")],
            "editor page not embedded",
        )
            .into_response(),
    }
}
