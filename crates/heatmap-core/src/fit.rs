//! "Cover" fitting of one background image behind a grid of cells.
//!
//! Every cell paints its own copy of the background image, but each copy is
//! shifted by the cell's grid coordinate so the copies line up into one
//! continuous picture. The geometry is computed once per (grid, image
//! aspect) pair and specialized per cell with [`FitGeometry::cell_offset`].

/// Cover-fit geometry of an image over the whole grid rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitGeometry {
    /// Scaled image width in pixels
    pub bg_w: f64,
    /// Scaled image height in pixels
    pub bg_h: f64,
    /// Horizontal offset of the image's top-left from the grid's top-left
    /// (zero or negative)
    pub off_x: f64,
    /// Vertical offset of the image's top-left from the grid's top-left
    /// (zero or negative)
    pub off_y: f64,
}

impl FitGeometry {
    /// Scale an image to cover the grid rectangle, preserving its aspect
    /// ratio and centering the overflow.
    ///
    /// Whichever image dimension is relatively larger overflows: a wider
    /// image matches the grid height and is shifted left to center, a
    /// taller one matches the grid width and is shifted up.
    pub fn cover(grid_w: f64, grid_h: f64, image_aspect: f64) -> Self {
        let grid_aspect = grid_w / grid_h;

        if image_aspect > grid_aspect {
            let bg_h = grid_h;
            let bg_w = bg_h * image_aspect;
            Self {
                bg_w,
                bg_h,
                off_x: (grid_w - bg_w) / 2.0,
                off_y: 0.0,
            }
        } else {
            let bg_w = grid_w;
            let bg_h = bg_w / image_aspect;
            Self {
                bg_w,
                bg_h,
                off_x: 0.0,
                off_y: (grid_h - bg_h) / 2.0,
            }
        }
    }

    /// Where the shared image's top-left sits relative to one cell's own
    /// top-left. Each cell paints the image at this offset, producing the
    /// continuous-image illusion across independently painted cells.
    pub fn cell_offset(&self, row: usize, col: usize, cell_size: f64, gap: f64) -> (f64, f64) {
        (
            self.off_x - col as f64 * (cell_size + gap),
            self.off_y - row as f64 * (cell_size + gap),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn wide_image_matches_height_and_centers_horizontally() {
        let fit = FitGeometry::cover(300.0, 300.0, 2.0);
        assert!((fit.bg_h - 300.0).abs() < EPS);
        assert!((fit.bg_w - 600.0).abs() < EPS);
        assert_eq!(fit.off_y, 0.0);
        assert!((fit.off_x - (-150.0)).abs() < EPS);
    }

    #[test]
    fn tall_image_matches_width_and_centers_vertically() {
        let fit = FitGeometry::cover(300.0, 300.0, 0.5);
        assert!((fit.bg_w - 300.0).abs() < EPS);
        assert!((fit.bg_h - 600.0).abs() < EPS);
        assert_eq!(fit.off_x, 0.0);
        assert!((fit.off_y - (-150.0)).abs() < EPS);
    }

    #[test]
    fn cover_preserves_aspect_and_covers_grid() {
        for (w, h, aspect) in [
            (310.0, 310.0, 1.5),
            (205.0, 205.0, 0.3),
            (420.0, 420.0, 1.0),
            (100.0, 400.0, 1.7777),
        ] {
            let fit = FitGeometry::cover(w, h, aspect);
            assert!((fit.bg_w / fit.bg_h - aspect).abs() < 1e-6);
            assert!(fit.bg_w >= w - EPS);
            assert!(fit.bg_h >= h - EPS);
        }
    }

    #[test]
    fn cell_offsets_tile_the_shared_image() {
        let fit = FitGeometry::cover(310.0, 310.0, 1.0);
        let (x00, y00) = fit.cell_offset(0, 0, 100.0, 5.0);
        let (x01, y01) = fit.cell_offset(0, 1, 100.0, 5.0);
        let (x10, _) = fit.cell_offset(1, 0, 100.0, 5.0);
        // neighboring cells shift by exactly one cell-plus-gap stride
        assert!((x00 - x01 - 105.0).abs() < EPS);
        assert_eq!(y00, y01);
        assert_eq!(x00, x10);
    }

    #[test]
    fn square_image_on_square_grid_has_no_offset() {
        let fit = FitGeometry::cover(310.0, 310.0, 1.0);
        assert_eq!((fit.off_x, fit.off_y), (0.0, 0.0));
        assert_eq!((fit.bg_w, fit.bg_h), (310.0, 310.0));
    }
}
