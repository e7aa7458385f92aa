//! Min/max normalization of the active cell values.
//!
//! Two ranges come out of a normalization pass and they are deliberately
//! separate: the *display* range feeds the scale-bar labels and may fall
//! back to a 0–1 placeholder, while the *color* range feeds intensity
//! computation and is widened just enough to never divide by zero.

/// Result of normalizing the active cell values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    /// Lower bound shown on the scale bar
    pub display_min: f64,
    /// Upper bound shown on the scale bar
    pub display_max: f64,
    /// Lower bound of the color-intensity range
    pub norm_min: f64,
    /// Upper bound of the color-intensity range; always > `norm_min`
    pub norm_max: f64,
    /// True when the display range is the 0–1 placeholder rather than
    /// real data bounds
    pub fallback_range: bool,
    /// Whether scale labels should render with two decimals instead of
    /// rounding to integers
    pub use_decimals: bool,
}

impl Normalization {
    /// Map a raw cell value onto the `[0, 1]` color-intensity range.
    ///
    /// `norm_max > norm_min` is guaranteed by [`normalize`], so this never
    /// divides by zero. Values outside the observed range land outside
    /// `[0, 1]`; the gradient's segment clamp absorbs that.
    pub fn intensity(&self, value: i64) -> f64 {
        (value as f64 - self.norm_min) / (self.norm_max - self.norm_min)
    }
}

/// Compute display and color ranges over the active cell values.
///
/// The caller passes exactly the active subset (the `size × size` slice of
/// the backing store). Degenerate inputs never fail:
///
/// - empty subset, or all values equal → display range falls back to 0–1
///   and `fallback_range` is set, so the legend shows a usable placeholder
///   instead of a zero-width range;
/// - independently of the display fallback, an equal color range is widened
///   by one (`norm_max = norm_min + 1`) so intensity math stays defined.
///
/// `use_decimals` selects two-decimal scale labels for the 0–1 fallback and
/// for real ranges with absolute width in `(0, 1.01]`, keeping small-range
/// matrices (normalized probabilities) legible.
pub fn normalize(values: &[i64]) -> Normalization {
    let min = values.iter().min().copied();
    let max = values.iter().max().copied();

    let (display_min, display_max, fallback_range) = match (min, max) {
        (Some(min), Some(max)) if min != max => (min as f64, max as f64, false),
        _ => (0.0, 1.0, true),
    };

    let norm_min = match min {
        Some(min) if !fallback_range => min as f64,
        _ => display_min,
    };
    let mut norm_max = match max {
        Some(max) if !fallback_range => max as f64,
        _ => norm_min,
    };
    if norm_max == norm_min {
        norm_max = norm_min + 1.0;
    }

    let range = display_max - display_min;
    let use_decimals = (fallback_range && display_min == 0.0 && display_max == 1.0)
        || (!fallback_range && range.abs() <= 1.01 && range.abs() > 0.0);

    Normalization {
        display_min,
        display_max,
        norm_min,
        norm_max,
        fallback_range,
        use_decimals,
    }
}
