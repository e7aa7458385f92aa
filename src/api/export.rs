use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::error::ApiError;
use crate::models::{AppConfig, EditorState};
use crate::rendering::{compose, ExportRenderer, EXPORT_FILENAME};

/// Export the editor surface as a PNG
///
/// Renders the submitted editor state at 2x pixel density. With
/// `transparent` set the image has no background fill or frame; otherwise
/// it is filled with the configured background color.
#[utoipa::path(
    post,
    path = "/api/export",
    request_body = EditorState,
    responses(
        (status = 200, description = "PNG raster of the editor surface", body = Vec<u8>, content_type = "image/png"),
        (status = 400, description = "Invalid editor state"),
        (status = 500, description = "Rendering failed"),
    ),
    tag = "Export"
)]
pub async fn handle_export(
    State(renderer): State<Arc<ExportRenderer>>,
    State(config): State<Arc<AppConfig>>,
    Json(editor): Json<EditorState>,
) -> Result<Response, ApiError> {
    let scene = compose(&editor)?;
    let png = renderer.render_png(&scene, config.max_raster_pixels)?;

    tracing::info!(
        grid_size = editor.grid_size,
        transparent = editor.transparent,
        bytes = png.len(),
        "Exported heatmap"
    );

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        png,
    )
        .into_response())
}
