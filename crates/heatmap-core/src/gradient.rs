//! Multi-stop color gradients.
//!
//! A gradient is an ordered list of color stops spaced evenly over `[0, 1]`.
//! Mapping an intensity to a color picks the segment the intensity falls in
//! and interpolates linearly between that segment's two stops, so the path
//! through all stops is piecewise linear and continuous at the boundaries.

use std::fmt;

use crate::color::{ParseColorError, Rgb};

/// An ordered sequence of color stops, evenly spaced over `[0, 1]`.
///
/// # Example
/// ```
/// use heatmap_core::{Gradient, Rgb};
///
/// let g = Gradient::from_hex(&["#ffffff", "#ff0000", "#000000"]).unwrap();
/// // factor 0.25 lands halfway through the first segment
/// assert_eq!(g.color_at(0.25), Rgb::new(255, 128, 128));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    stops: Vec<Rgb>,
}

impl Gradient {
    /// Create a gradient from an ordered list of stops.
    ///
    /// At least one stop is required. A single stop is a valid degenerate
    /// gradient that returns that color for every factor.
    pub fn new(stops: Vec<Rgb>) -> Result<Self, GradientError> {
        if stops.is_empty() {
            return Err(GradientError::EmptyGradient);
        }
        Ok(Self { stops })
    }

    /// Create a gradient by parsing `#RRGGBB` stop strings.
    pub fn from_hex<S: AsRef<str>>(stops: &[S]) -> Result<Self, GradientError> {
        let stops = stops
            .iter()
            .map(|s| s.as_ref().parse())
            .collect::<Result<Vec<Rgb>, ParseColorError>>()?;
        Self::new(stops)
    }

    /// The ordered stops of this gradient.
    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Map a normalized intensity to a color on the gradient.
    ///
    /// The `[0, 1]` range is divided into `stops.len() - 1` equal segments.
    /// The segment index is clamped to the last segment, so factors at or
    /// above 1.0 resolve inside the final segment instead of indexing past
    /// the end. Within the segment the factor is re-normalized and handed
    /// to [`Rgb::lerp`].
    pub fn color_at(&self, factor: f64) -> Rgb {
        if self.stops.len() == 1 {
            return self.stops[0];
        }

        let segments = self.stops.len() - 1;
        let segment_width = 1.0 / segments as f64;

        let mut index = (factor / segment_width).floor() as isize;
        if index >= segments as isize {
            index = segments as isize - 1;
        }
        if index < 0 {
            index = 0;
        }
        let index = index as usize;

        let local = (factor - index as f64 * segment_width) / segment_width;
        self.stops[index].lerp(self.stops[index + 1], local)
    }
}

/// Error type for gradient construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GradientError {
    /// No color stops provided
    EmptyGradient,
    /// A stop string failed to parse as a hex color
    ParseColor(ParseColorError),
}

impl From<ParseColorError> for GradientError {
    fn from(err: ParseColorError) -> Self {
        GradientError::ParseColor(err)
    }
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::EmptyGradient => write!(f, "gradient requires at least one stop"),
            GradientError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for GradientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GradientError::ParseColor(err) => Some(err),
            _ => None,
        }
    }
}
