//! Rasterizes a composed scene to a PNG at 2x pixel density.

use std::io::Cursor;
use std::sync::Arc;

use resvg::usvg::{self, Transform};
use tiny_skia::Pixmap;

use crate::error::RenderError;
use crate::rendering::scene::Scene;

/// Fixed filename the export is delivered under.
pub const EXPORT_FILENAME: &str = "matrix-forge.png";

/// Export pixel density relative to the on-screen surface.
pub const PIXEL_DENSITY: f64 = 2.0;

/// Renders SVG scenes to RGBA PNGs.
///
/// The output keeps its alpha channel, so a scene composed without a
/// background rect exports with genuine transparency.
pub struct ExportRenderer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl ExportRenderer {
    /// Create a renderer backed by the system font database.
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();

        tracing::info!(font_count = fontdb.len(), "Loaded fonts for text rendering");

        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Render a scene to PNG bytes.
    ///
    /// `max_raster_pixels` bounds either output dimension; oversized grids
    /// are rejected before any allocation happens.
    pub fn render_png(&self, scene: &Scene, max_raster_pixels: u32) -> Result<Vec<u8>, RenderError> {
        let width = (scene.width * PIXEL_DENSITY).ceil() as u32;
        let height = (scene.height * PIXEL_DENSITY).ceil() as u32;

        if width == 0 || height == 0 || width > max_raster_pixels || height > max_raster_pixels {
            return Err(RenderError::GridTooLarge {
                width,
                height,
                max: max_raster_pixels,
            });
        }

        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(scene.svg.as_bytes(), &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        // The pixmap starts fully transparent; any background fill comes
        // from the scene itself.
        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        let transform = Transform::from_scale(PIXEL_DENSITY as f32, PIXEL_DENSITY as f32);
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        let rgba = demultiply_rgba(&pixmap);
        let png_bytes = encode_png(width, height, &rgba)?;

        // Re-compress with oxipng (zopfli + adaptive filter selection)
        let optimized = oxipng::optimize_from_memory(
            &png_bytes,
            &oxipng::Options {
                strip: oxipng::StripChunks::Safe,
                optimize_alpha: false,
                ..Default::default()
            },
        )
        .unwrap_or(png_bytes);

        Ok(optimized)
    }
}

impl Default for ExportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Unpremultiply tiny-skia's pixel data into plain RGBA bytes.
fn demultiply_rgba(pixmap: &Pixmap) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    rgba
}

/// Encode RGBA pixel data as a PNG.
fn encode_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(rgba)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
