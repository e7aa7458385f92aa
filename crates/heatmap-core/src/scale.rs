//! Scale-bar tick labels.

use crate::normalize::Normalization;

/// The five tick labels of the scale bar, bottom to top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleLabels {
    pub min: String,
    pub q1: String,
    pub mid: String,
    pub q3: String,
    pub max: String,
}

/// Compute quartile tick labels for a normalized range.
///
/// Ticks sit at 0 / 0.25 / 0.5 / 0.75 / 1.0 of the display range. The
/// normalization's decimal policy picks the format: two-decimal fixed for
/// small ranges, rounded integers otherwise. For any non-inverted range the
/// labels are monotonically non-decreasing.
pub fn scale_labels(n: &Normalization) -> ScaleLabels {
    let range = n.display_max - n.display_min;
    let format = |value: f64| {
        if n.use_decimals {
            format!("{value:.2}")
        } else {
            format!("{}", value.round() as i64)
        }
    };

    ScaleLabels {
        min: format(n.display_min),
        q1: format(n.display_min + range * 0.25),
        mid: format(n.display_min + range * 0.5),
        q3: format(n.display_min + range * 0.75),
        max: format(n.display_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use pretty_assertions::assert_eq;

    #[test]
    fn integer_range_rounds_ticks() {
        let labels = scale_labels(&normalize(&[0, 100]));
        assert_eq!(labels.min, "0");
        assert_eq!(labels.q1, "25");
        assert_eq!(labels.mid, "50");
        assert_eq!(labels.q3, "75");
        assert_eq!(labels.max, "100");
    }

    #[test]
    fn fallback_range_formats_decimals() {
        let labels = scale_labels(&normalize(&[0, 0, 0, 0]));
        assert_eq!(labels.min, "0.00");
        assert_eq!(labels.q1, "0.25");
        assert_eq!(labels.mid, "0.50");
        assert_eq!(labels.q3, "0.75");
        assert_eq!(labels.max, "1.00");
    }

    #[test]
    fn labels_are_monotonic() {
        for values in [&[1, 9][..], &[0, 7, 3][..], &[-5, 12, 2, 2][..]] {
            let labels = scale_labels(&normalize(values));
            let parsed: Vec<f64> = [
                &labels.min,
                &labels.q1,
                &labels.mid,
                &labels.q3,
                &labels.max,
            ]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
            for pair in parsed.windows(2) {
                assert!(pair[0] <= pair[1], "non-monotonic labels for {values:?}");
            }
        }
    }
}
