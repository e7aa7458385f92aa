//! heatmap-core: color mapping and layout normalization for
//! confusion-matrix heatmaps
//!
//! This crate is the pure-data engine behind the matrix-forge editor. It
//! turns raw cell values into colors, scale-bar labels, background-fit
//! geometry, and an accuracy figure. Every entry point is a pure function
//! over explicit inputs; the crate does no I/O and keeps no hidden state.
//!
//! # Quick Start
//!
//! ```
//! use heatmap_core::{accuracy, normalize, scale_labels, Gradient, GridSize, Matrix};
//!
//! let mut matrix = Matrix::new(GridSize::Two);
//! matrix.set(0, 0, 8).unwrap();
//! matrix.set(1, 1, 2).unwrap();
//!
//! let norm = normalize(&matrix.active_values());
//! let gradient = Gradient::from_hex(&["#ffffff", "#0000ff"]).unwrap();
//!
//! // color of the top-left cell
//! let color = gradient.color_at(norm.intensity(8));
//! assert_eq!(color.to_string(), "#0000ff");
//!
//! let labels = scale_labels(&norm);
//! assert_eq!(labels.max, "8");
//!
//! assert_eq!(accuracy(&matrix), 100.0);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! cell values            (active size x size slice of the 4x4 store)
//!     |
//!     v
//! normalize()            display range + zero-safe color range + decimal policy
//!     |
//!     +---> Normalization::intensity()   per-cell value -> [0, 1]
//!     |          |
//!     |          v
//!     |     Gradient::color_at()         segment select + channel lerp
//!     |
//!     +---> scale_labels()               min / quartile / max tick strings
//!
//! grid pixels + image aspect
//!     |
//!     v
//! FitGeometry::cover()   one shared "cover" crop, specialized per cell
//!
//! matrix
//!     |
//!     v
//! accuracy()             trace / total, in percent
//! ```
//!
//! # Degenerate inputs
//!
//! The engine is built to keep the editor renderable at all times: an empty
//! or constant matrix resolves to a 0–1 placeholder range instead of an
//! error, the color range is widened so intensity math never divides by
//! zero, and intensities at or beyond 1.0 are absorbed by the gradient's
//! final segment. The only construction errors are malformed hex colors and
//! a gradient with no stops at all.

pub mod accuracy;
pub mod color;
pub mod fit;
pub mod gradient;
pub mod matrix;
pub mod normalize;
pub mod scale;


pub use accuracy::{accuracy, format_accuracy};
pub use color::{ParseColorError, Rgb};
pub use fit::FitGeometry;
pub use gradient::{Gradient, GradientError};
pub use matrix::{GridSize, Matrix, MatrixError, GRID_CAPACITY};
pub use normalize::{normalize, Normalization};
pub use scale::{scale_labels, ScaleLabels};
