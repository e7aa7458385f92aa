use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid editor state: {0}")]
    BadState(String),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<heatmap_core::ParseColorError> for ApiError {
    fn from(e: heatmap_core::ParseColorError) -> Self {
        ApiError::BadState(e.to_string())
    }
}

impl From<heatmap_core::GradientError> for ApiError {
    fn from(e: heatmap_core::GradientError) -> Self {
        ApiError::BadState(e.to_string())
    }
}

impl From<heatmap_core::MatrixError> for ApiError {
    fn from(e: heatmap_core::MatrixError) -> Self {
        ApiError::BadState(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Grid too large: {width}x{height} pixels (max {max})")]
    GridTooLarge { width: u32, height: u32, max: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadState(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Render(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}
