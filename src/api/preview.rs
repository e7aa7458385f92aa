use axum::{response::Json, Json as JsonExtractor};
use serde::Serialize;
use utoipa::ToSchema;

use heatmap_core::{accuracy, format_accuracy, normalize, scale_labels, FitGeometry};

use crate::error::ApiError;
use crate::models::EditorState;
use crate::rendering::{CELL_SIZE, GAP_SIZE};

/// Derived view data for one active cell.
#[derive(Debug, Serialize, ToSchema)]
pub struct CellPreview {
    /// Row within the active grid
    pub row: usize,
    /// Column within the active grid
    pub col: usize,
    /// Raw cell value
    pub value: i64,
    /// Heatmap color as `#rrggbb`
    pub color: String,
}

/// Scale-bar tick labels, bottom to top.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScalePreview {
    pub min: String,
    pub q1: String,
    pub mid: String,
    pub q3: String,
    pub max: String,
}

/// Cover-fit geometry of the shared background image.
#[derive(Debug, Serialize, ToSchema)]
pub struct FitPreview {
    pub bg_w: f64,
    pub bg_h: f64,
    pub off_x: f64,
    pub off_y: f64,
}

/// Everything a thin UI layer needs to bind the editor without
/// reimplementing the color and layout math.
#[derive(Debug, Serialize, ToSchema)]
pub struct PreviewResponse {
    /// Per-cell colors, row-major over the active grid
    pub cells: Vec<CellPreview>,
    /// Scale-bar tick labels
    pub scale: ScalePreview,
    /// Gradient stops in order, normalized to lowercase hex
    pub gradient_stops: Vec<String>,
    /// Accuracy formatted to one decimal, e.g. `"50.0%"`
    pub accuracy: String,
    /// Overlay opacity as a 0-1 fraction
    pub opacity: f64,
    /// Background cover-fit geometry, absent without an image
    pub fit: Option<FitPreview>,
}

/// Compute derived view data for an editor state
///
/// Recolors cells, recomputes the scale legend and accuracy, and (when a
/// background image is set) the shared cover-fit geometry: the exact data
/// the UI rebinds on every mutation.
#[utoipa::path(
    post,
    path = "/api/preview",
    request_body = EditorState,
    responses(
        (status = 200, description = "Derived view data", body = PreviewResponse),
        (status = 400, description = "Invalid editor state"),
    ),
    tag = "Preview"
)]
pub async fn handle_preview(
    JsonExtractor(editor): JsonExtractor<EditorState>,
) -> Result<Json<PreviewResponse>, ApiError> {
    let matrix = editor.matrix()?;
    let gradient = editor.gradient()?;

    let norm = normalize(&matrix.active_values());
    let cells = matrix
        .active_cells()
        .map(|(row, col, value)| CellPreview {
            row,
            col,
            value,
            color: gradient.color_at(norm.intensity(value)).to_string(),
        })
        .collect();

    let ticks = scale_labels(&norm);
    let scale = ScalePreview {
        min: ticks.min,
        q1: ticks.q1,
        mid: ticks.mid,
        q3: ticks.q3,
        max: ticks.max,
    };

    let fit = match &editor.background_image {
        Some(image) => {
            let size = matrix.size().get() as f64;
            let grid = size * CELL_SIZE + (size - 1.0) * GAP_SIZE;
            let fit = FitGeometry::cover(grid, grid, image.checked_aspect()?);
            Some(FitPreview {
                bg_w: fit.bg_w,
                bg_h: fit.bg_h,
                off_x: fit.off_x,
                off_y: fit.off_y,
            })
        }
        None => None,
    };

    Ok(Json(PreviewResponse {
        cells,
        scale,
        gradient_stops: gradient.stops().iter().map(|s| s.to_string()).collect(),
        accuracy: format_accuracy(accuracy(&matrix)),
        opacity: editor.opacity_fraction(),
        fit,
    }))
}
