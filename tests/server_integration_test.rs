//! End-to-end router tests: editor page, defaults, health.

mod common;

use common::TestApp;
use matrix_forge::models::{AppConfig, EditorState};

#[tokio::test]
async fn test_health_endpoint() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    common::assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

#[tokio::test]
async fn test_editor_page_served_at_root() {
    let app = TestApp::new();

    let response = app.get("/").await;

    common::assert_ok(&response);
    let page = response.text();
    assert!(page.contains("<html"));
    assert!(page.contains("/api/export"));
}

#[tokio::test]
async fn test_defaults_reflect_configuration() {
    let mut config = AppConfig::default();
    config.defaults.grid_size = 4;
    config.defaults.colors = vec!["#000000".to_string(), "#00ff00".to_string()];
    let app = TestApp::with_config(config);

    let response = app.get("/api/defaults").await;

    common::assert_ok(&response);
    let defaults: EditorState = response.json();
    assert_eq!(defaults.grid_size, 4);
    assert_eq!(defaults.colors, vec!["#000000", "#00ff00"]);
}

#[tokio::test]
async fn test_defaults_round_trip_through_export() {
    let app = TestApp::new();

    // the state served by /api/defaults must itself be exportable
    let defaults = app.get("/api/defaults").await;
    common::assert_ok(&defaults);

    let response = app.post_json("/api/export", &defaults.text()).await;
    common::assert_png(&response);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = TestApp::new();

    let response = app.get("/api/nope").await;
    common::assert_status(&response, axum::http::StatusCode::NOT_FOUND);
}
