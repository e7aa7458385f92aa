//! Accuracy over the active submatrix (trace / total).

use crate::matrix::Matrix;

/// Accuracy in percent: diagonal sum over total sum of the active cells.
///
/// An all-zero (or empty) matrix reports 0.0 rather than dividing by zero.
pub fn accuracy(matrix: &Matrix) -> f64 {
    // i128 accumulators: 16 cells of i64 extremes must not wrap
    let mut total = 0i128;
    let mut diagonal = 0i128;

    for (row, col, value) in matrix.active_cells() {
        total += value as i128;
        if row == col {
            diagonal += value as i128;
        }
    }

    if total == 0 {
        0.0
    } else {
        diagonal as f64 / total as f64 * 100.0
    }
}

/// Accuracy formatted the way the stats display shows it, e.g. `"50.0%"`.
pub fn format_accuracy(value: f64) -> String {
    format!("{value:.1}%")
}
