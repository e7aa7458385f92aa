//! Composes the editor surface as an SVG document.
//!
//! The scene mirrors the on-screen layout: title and accuracy rows on top,
//! axis captions and per-row/column labels around the cell grid, the scale
//! bar with its five tick labels on the right. Every cell carries up to
//! three layers, bottom to top: the shared background image (cropped per
//! cell via the cover-fit geometry), the heatmap color at the cell's
//! normalized intensity, and the value text.

use heatmap_core::{
    accuracy, format_accuracy, normalize, scale_labels, FitGeometry, Gradient, Rgb,
};

use crate::error::ApiError;
use crate::models::{EditorState, TextStyle};

/// Cell edge length in surface pixels.
pub const CELL_SIZE: f64 = 100.0;
/// Gap between neighboring cells.
pub const GAP_SIZE: f64 = 5.0;

const FRAME_PAD: f64 = 32.0;
const STATS_HEIGHT: f64 = 30.0;
const CAPTION_SIZE: f64 = 28.0;
const LABEL_COLUMN: f64 = 80.0;
const LABEL_ROW: f64 = 30.0;
const SCALE_GAP: f64 = 16.0;
const SCALE_WIDTH: f64 = 18.0;
const SCALE_LABELS: f64 = 56.0;

/// A composed SVG scene with its surface dimensions.
#[derive(Debug, Clone)]
pub struct Scene {
    pub svg: String,
    pub width: f64,
    pub height: f64,
}

/// Compose the full editor surface from a state snapshot.
pub fn compose(state: &EditorState) -> Result<Scene, ApiError> {
    let matrix = state.matrix()?;
    let gradient = state.gradient()?;
    let size = matrix.size().get();

    let norm = normalize(&matrix.active_values());
    let ticks = scale_labels(&norm);
    let acc = format_accuracy(accuracy(&matrix));

    let grid_w = size as f64 * CELL_SIZE + (size as f64 - 1.0) * GAP_SIZE;
    let grid_h = grid_w;

    // A transparent export drops the frame along with the fill.
    let pad = if state.transparent { 8.0 } else { FRAME_PAD };
    let title_h = if state.title.is_empty() {
        0.0
    } else {
        state.header.size * 1.8
    };

    let grid_x = pad + CAPTION_SIZE + LABEL_COLUMN;
    let grid_y = pad + title_h + STATS_HEIGHT;
    let width = grid_x + grid_w + SCALE_GAP + SCALE_WIDTH + SCALE_LABELS + pad;
    let height = grid_y + grid_h + LABEL_ROW + CAPTION_SIZE + pad;

    let mut svg = String::new();
    push(
        &mut svg,
        format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        ),
    );

    push_gradient_defs(&mut svg, &gradient);

    if !state.transparent {
        let fill = esc(&state.background_color);
        push(
            &mut svg,
            format!(r#"<rect x="0" y="0" width="{width}" height="{height}" rx="12" fill="{fill}"/>"#),
        );
    }

    // Title and accuracy rows span the whole surface.
    let center_x = width / 2.0;
    if !state.title.is_empty() {
        push_text(
            &mut svg,
            center_x,
            pad + title_h / 2.0,
            &state.title,
            &state.header,
        );
    }
    let stats_style = TextStyle {
        size: 16.0,
        ..state.header.clone()
    };
    push_text(
        &mut svg,
        center_x,
        pad + title_h + STATS_HEIGHT / 2.0,
        &format!("Accuracy: {acc}"),
        &stats_style,
    );

    // Background-image crops share one cover-fit geometry over the grid
    // rectangle, recomputed per (size, image) pair.
    let fit = match &state.background_image {
        Some(image) => Some((image, FitGeometry::cover(grid_w, grid_h, image.checked_aspect()?))),
        None => None,
    };

    for (row, col, value) in matrix.active_cells() {
        let x = grid_x + col as f64 * (CELL_SIZE + GAP_SIZE);
        let y = grid_y + row as f64 * (CELL_SIZE + GAP_SIZE);

        if let Some((image, fit)) = &fit {
            // A nested svg clips the shared image to this cell's rectangle.
            let (off_x, off_y) = fit.cell_offset(row, col, CELL_SIZE, GAP_SIZE);
            let href = esc(&image.href);
            push(
                &mut svg,
                format!(
                    r#"<svg x="{x}" y="{y}" width="{CELL_SIZE}" height="{CELL_SIZE}"><image x="{off_x}" y="{off_y}" width="{}" height="{}" preserveAspectRatio="none" href="{href}"/></svg>"#,
                    fit.bg_w, fit.bg_h
                ),
            );
        }

        let color = gradient.color_at(norm.intensity(value));
        push(
            &mut svg,
            format!(
                r#"<rect x="{x}" y="{y}" width="{CELL_SIZE}" height="{CELL_SIZE}" fill="{color}" fill-opacity="{}"/>"#,
                state.opacity_fraction()
            ),
        );

        push_text(
            &mut svg,
            x + CELL_SIZE / 2.0,
            y + CELL_SIZE / 2.0,
            &value.to_string(),
            &state.cell_text,
        );
    }

    push_axis_labels(&mut svg, state, size, grid_x, grid_y, grid_w, grid_h);
    push_scale_bar(&mut svg, state, &ticks, grid_x + grid_w + SCALE_GAP, grid_y, grid_h);

    push(&mut svg, "</svg>".to_string());

    Ok(Scene { svg, width, height })
}

fn push(svg: &mut String, fragment: String) {
    svg.push_str(&fragment);
}

fn push_gradient_defs(svg: &mut String, gradient: &Gradient) {
    // y runs bottom-to-top: the first stop is the low end of the scale
    push(
        svg,
        r#"<defs><linearGradient id="scale-gradient" x1="0" y1="1" x2="0" y2="0">"#.to_string(),
    );
    let stops = gradient.stops();
    let last = (stops.len() - 1).max(1);
    for (i, stop) in stops.iter().enumerate() {
        let offset = i as f64 / last as f64;
        push(
            svg,
            format!(r#"<stop offset="{offset}" stop-color="{stop}"/>"#),
        );
    }
    push(svg, "</linearGradient></defs>".to_string());
}

/// Centered text with the style's fill, size, and optional contrast outline.
fn push_text(svg: &mut String, x: f64, y: f64, content: &str, style: &TextStyle) {
    if content.is_empty() {
        return;
    }
    let fill = esc(&style.color);
    let stroke = if style.stroke {
        let outline = contrast_outline(&style.color);
        format!(
            r#" stroke="{outline}" stroke-width="{}" paint-order="stroke""#,
            (style.size / 12.0).max(1.0)
        )
    } else {
        String::new()
    };
    push(
        svg,
        format!(
            r#"<text x="{x}" y="{y}" font-size="{}" fill="{fill}"{stroke} text-anchor="middle" dominant-baseline="central" font-family="sans-serif">{}</text>"#,
            style.size,
            esc(content)
        ),
    );
}

fn push_axis_labels(
    svg: &mut String,
    state: &EditorState,
    size: usize,
    grid_x: f64,
    grid_y: f64,
    grid_w: f64,
    grid_h: f64,
) {
    let label_style = TextStyle {
        size: 14.0,
        ..state.cell_text.clone()
    };
    let caption_style = TextStyle {
        size: 16.0,
        ..state.cell_text.clone()
    };

    for i in 0..size {
        // row label, vertically centered on its row
        push_text(
            svg,
            grid_x - LABEL_COLUMN / 2.0,
            grid_y + i as f64 * (CELL_SIZE + GAP_SIZE) + CELL_SIZE / 2.0,
            state.label_y(i),
            &label_style,
        );
        // column label, centered under its column
        push_text(
            svg,
            grid_x + i as f64 * (CELL_SIZE + GAP_SIZE) + CELL_SIZE / 2.0,
            grid_y + grid_h + LABEL_ROW / 2.0,
            state.label_x(i),
            &label_style,
        );
    }

    // Fixed axis captions, the vertical one rotated around its anchor.
    let caption_x = grid_x - LABEL_COLUMN - CAPTION_SIZE / 2.0;
    let caption_y = grid_y + grid_h / 2.0;
    let fill = esc(&caption_style.color);
    push(
        svg,
        format!(
            r#"<text x="{caption_x}" y="{caption_y}" font-size="{}" fill="{fill}" text-anchor="middle" dominant-baseline="central" font-family="sans-serif" transform="rotate(-90 {caption_x} {caption_y})">True Class</text>"#,
            caption_style.size
        ),
    );
    push_text(
        svg,
        grid_x + grid_w / 2.0,
        grid_y + grid_h + LABEL_ROW + CAPTION_SIZE / 2.0,
        "Predicted Class",
        &caption_style,
    );
}

fn push_scale_bar(
    svg: &mut String,
    state: &EditorState,
    ticks: &heatmap_core::ScaleLabels,
    x: f64,
    y: f64,
    grid_h: f64,
) {
    push(
        svg,
        format!(
            r#"<rect x="{x}" y="{y}" width="{SCALE_WIDTH}" height="{grid_h}" fill="url(#scale-gradient)"/>"#
        ),
    );

    let tick_style = TextStyle {
        size: 12.0,
        ..state.cell_text.clone()
    };
    let fill = esc(&tick_style.color);
    // top to bottom: max, q3, mid, q1, min
    let labels = [&ticks.max, &ticks.q3, &ticks.mid, &ticks.q1, &ticks.min];
    for (i, label) in labels.iter().enumerate() {
        let ty = y + grid_h * i as f64 / 4.0;
        push(
            svg,
            format!(
                r#"<text x="{}" y="{ty}" font-size="{}" fill="{fill}" text-anchor="start" dominant-baseline="central" font-family="sans-serif">{}</text>"#,
                x + SCALE_WIDTH + 6.0,
                tick_style.size,
                esc(label)
            ),
        );
    }
}

/// Black or white, whichever contrasts with the given text color.
fn contrast_outline(color: &str) -> &'static str {
    match color.parse::<Rgb>() {
        Ok(c) => {
            let luma = 0.299 * c.r as f64 + 0.587 * c.g as f64 + 0.114 * c.b as f64;
            if luma > 128.0 {
                "#000000"
            } else {
                "#ffffff"
            }
        }
        Err(_) => "#000000",
    }
}

fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BackgroundImage;

    fn state_with_values(values: &[i64]) -> EditorState {
        EditorState {
            grid_size: 2,
            cells: values.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn scene_contains_cell_colors_and_accuracy() {
        // max cell gets the last stop, min gets the first; cells are
        // stride-4, so (1,1) is index 5
        let scene = compose(&state_with_values(&[5, 0, 0, 0, 0, 5])).unwrap();
        assert!(scene.svg.contains(r##"fill="#0000ff""##));
        assert!(scene.svg.contains(r##"fill="#ffffff""##));
        assert!(scene.svg.contains("Accuracy: 100.0%"));
    }

    #[test]
    fn transparent_scene_has_no_background_rect() {
        let mut state = state_with_values(&[1, 2, 0, 0, 3]);
        state.transparent = true;
        let scene = compose(&state).unwrap();
        assert!(!scene.svg.contains(r#"rx="12""#));

        state.transparent = false;
        let scene = compose(&state).unwrap();
        assert!(scene.svg.contains(r#"rx="12""#));
        assert!(scene.svg.contains(&esc(&state.background_color)));
    }

    #[test]
    fn no_image_means_no_image_layers() {
        let scene = compose(&state_with_values(&[1, 2, 0, 0, 3])).unwrap();
        assert!(!scene.svg.contains("<image"));
    }

    #[test]
    fn image_layer_present_per_active_cell() {
        let mut state = state_with_values(&[1, 2, 0, 0, 3]);
        state.background_image = Some(BackgroundImage {
            href: "bg.png".to_string(),
            aspect: 2.0,
        });
        let scene = compose(&state).unwrap();
        assert_eq!(scene.svg.matches("<image").count(), 4);
        // wide image on a square grid: height matches the grid (205px)
        assert!(scene.svg.contains(r#"height="205" preserveAspectRatio"#));
    }

    #[test]
    fn invalid_image_aspect_is_rejected() {
        let mut state = state_with_values(&[1, 0, 0, 0, 1]);
        state.background_image = Some(BackgroundImage {
            href: "bg.png".to_string(),
            aspect: 0.0,
        });
        assert!(compose(&state).is_err());
    }

    #[test]
    fn scale_ticks_render_decimal_fallback_for_constant_matrix() {
        let scene = compose(&state_with_values(&[0, 0, 0, 0, 0])).unwrap();
        for tick in ["0.00", "0.25", "0.50", "0.75", "1.00"] {
            assert!(scene.svg.contains(tick), "missing tick {tick}");
        }
    }

    #[test]
    fn title_and_labels_are_escaped() {
        let mut state = state_with_values(&[1, 0, 0, 0, 2]);
        state.title = "Cats & <Dogs>".to_string();
        state.labels_x[0] = "a\"b".to_string();
        let scene = compose(&state).unwrap();
        assert!(scene.svg.contains("Cats &amp; &lt;Dogs&gt;"));
        assert!(scene.svg.contains("a&quot;b"));
        assert!(!scene.svg.contains("Cats & <Dogs>"));
    }

    #[test]
    fn empty_title_collapses_title_row() {
        let with_title = compose(&EditorState {
            title: "T".to_string(),
            ..state_with_values(&[1, 0, 0, 0, 2])
        })
        .unwrap();
        let without = compose(&state_with_values(&[1, 0, 0, 0, 2])).unwrap();
        assert!(with_title.height > without.height);
        assert_eq!(with_title.width, without.width);
    }

    #[test]
    fn surface_grows_with_grid_size() {
        let small = compose(&state_with_values(&[1, 0, 0, 0, 2])).unwrap();
        let large = compose(&EditorState {
            grid_size: 4,
            ..state_with_values(&[1, 0, 0, 0, 2])
        })
        .unwrap();
        assert!(large.width > small.width);
        assert!(large.height > small.height);
    }

    #[test]
    fn stroke_adds_contrast_outline() {
        let mut state = state_with_values(&[1, 0, 0, 0, 2]);
        state.cell_text.stroke = true;
        state.cell_text.color = "#ffffff".to_string();
        let scene = compose(&state).unwrap();
        // light text gets a dark outline
        assert!(scene.svg.contains(r##"stroke="#000000""##));
        assert!(scene.svg.contains(r#"paint-order="stroke""#));
    }
}
