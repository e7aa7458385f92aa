//! The owned editor state: everything the configuration surface can adjust.
//!
//! This is the explicit state struct the pure heatmap-core components are
//! fed from. Handlers receive a full snapshot per request and re-derive all
//! view data from it; nothing is cached between requests.

use heatmap_core::{Gradient, GridSize, Matrix, GRID_CAPACITY};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Full editor state as submitted by the UI layer.
///
/// Unknown cells default to zero and hidden cells are carried along, so a
/// state round-trips through grid-size changes without losing values.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EditorState {
    /// Active grid edge length (2, 3, or 4)
    pub grid_size: u8,
    /// Row-major stride-4 cell values; up to 16 entries, missing trailing
    /// entries are zero. Malformed numeric input is the UI's concern and
    /// arrives here already coerced to 0.
    pub cells: Vec<i64>,
    /// Ordered gradient stops as `#RRGGBB`; at least 2 required
    pub colors: Vec<String>,
    /// Heatmap overlay opacity in percent (0–100)
    pub opacity: f64,
    /// Title text above the grid
    pub title: String,
    /// Title typography
    pub header: TextStyle,
    /// Cell value typography
    pub cell_text: TextStyle,
    /// Per-column labels under the grid
    pub labels_x: Vec<String>,
    /// Per-row labels left of the grid
    pub labels_y: Vec<String>,
    /// Surface fill color when not transparent
    pub background_color: String,
    /// Export/render with no background fill or frame
    pub transparent: bool,
    /// Optional background image shared across all cells
    pub background_image: Option<BackgroundImage>,
}

/// Typography settings for a text layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct TextStyle {
    /// Text fill color as `#RRGGBB`
    pub color: String,
    /// Font size in pixels
    pub size: f64,
    /// Draw a contrasting outline behind the glyphs
    pub stroke: bool,
}

/// A background image behind the cell grid.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BackgroundImage {
    /// Image reference: a data URL or a path the renderer can resolve
    pub href: String,
    /// Natural width / height of the decoded image
    pub aspect: f64,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            grid_size: 3,
            cells: vec![0; GRID_CAPACITY * GRID_CAPACITY],
            colors: vec!["#ffffff".to_string(), "#0000ff".to_string()],
            opacity: 50.0,
            title: String::new(),
            header: TextStyle {
                color: "#ffffff".to_string(),
                size: 24.0,
                stroke: false,
            },
            cell_text: TextStyle {
                color: "#000000".to_string(),
                size: 24.0,
                stroke: false,
            },
            labels_x: vec![String::new(); GRID_CAPACITY],
            labels_y: vec![String::new(); GRID_CAPACITY],
            background_color: "#1e1e2e".to_string(),
            transparent: false,
            background_image: None,
        }
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            size: 24.0,
            stroke: false,
        }
    }
}

impl EditorState {
    /// Build the matrix backing store from the submitted cells.
    pub fn matrix(&self) -> Result<Matrix, ApiError> {
        let size = GridSize::try_from(self.grid_size)?;

        let capacity = GRID_CAPACITY * GRID_CAPACITY;
        if self.cells.len() > capacity {
            return Err(ApiError::BadState(format!(
                "too many cells: {} (max {})",
                self.cells.len(),
                capacity
            )));
        }

        let mut cells = [0i64; GRID_CAPACITY * GRID_CAPACITY];
        cells[..self.cells.len()].copy_from_slice(&self.cells);
        Ok(Matrix::from_cells(cells, size))
    }

    /// Build the color gradient from the submitted stops.
    ///
    /// The UI contract guarantees at least two stops; fewer is a state the
    /// editor should never produce, so it is rejected rather than guessed at.
    pub fn gradient(&self) -> Result<Gradient, ApiError> {
        if self.colors.len() < 2 {
            return Err(ApiError::BadState(format!(
                "at least 2 color stops required, got {}",
                self.colors.len()
            )));
        }
        Ok(Gradient::from_hex(&self.colors)?)
    }

    /// Overlay opacity as a `[0, 1]` fraction.
    pub fn opacity_fraction(&self) -> f64 {
        (self.opacity / 100.0).clamp(0.0, 1.0)
    }

    /// Column label for the given index, empty when unset.
    pub fn label_x(&self, index: usize) -> &str {
        self.labels_x.get(index).map(String::as_str).unwrap_or("")
    }

    /// Row label for the given index, empty when unset.
    pub fn label_y(&self, index: usize) -> &str {
        self.labels_y.get(index).map(String::as_str).unwrap_or("")
    }
}

impl BackgroundImage {
    /// Validate the aspect ratio before geometry math sees it.
    pub fn checked_aspect(&self) -> Result<f64, ApiError> {
        if self.aspect.is_finite() && self.aspect > 0.0 {
            Ok(self.aspect)
        } else {
            Err(ApiError::BadState(format!(
                "background image aspect must be positive, got {}",
                self.aspect
            )))
        }
    }
}
