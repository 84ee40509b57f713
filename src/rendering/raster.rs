//! SVG parsing and rasterization.
//!
//! Figures are composed as SVG text sized in output pixels, so rendering is
//! a 1:1 pass: parse, allocate a pixmap of the document size, draw, encode.
//! The pixmap is created and dropped within each call; only the font
//! database is shared, and it is immutable after construction.

use std::sync::Arc;

use resvg::usvg::{self, Transform};
use tiny_skia::Pixmap;

use crate::error::RenderError;

/// Renders SVG documents to PNG.
pub struct Rasterizer {
    /// Font database for text rendering
    fontdb: Arc<fontdb::Database>,
}

impl Rasterizer {
    /// Create a rasterizer using the system font collection.
    pub fn new() -> Self {
        let mut fontdb = fontdb::Database::new();
        fontdb.load_system_fonts();
        tracing::debug!(font_count = fontdb.len(), "Loaded fonts for figure text");
        Self {
            fontdb: Arc::new(fontdb),
        }
    }

    /// Parse and rasterize an SVG document at its declared size.
    pub fn rasterize(&self, svg: &str) -> Result<Pixmap, RenderError> {
        let options = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
            .map_err(|e| RenderError::SvgParse(e.to_string()))?;

        let size = tree.size();
        let width = size.width().ceil() as u32;
        let height = size.height().ceil() as u32;

        let mut pixmap = Pixmap::new(width, height).ok_or(RenderError::PixmapAllocation)?;
        pixmap.fill(tiny_skia::Color::WHITE);

        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());

        Ok(pixmap)
    }

    /// Rasterize and PNG-encode in one step.
    pub fn rasterize_to_png(&self, svg: &str) -> Result<Vec<u8>, RenderError> {
        let pixmap = self.rasterize(svg)?;
        pixmap
            .encode_png()
            .map_err(|e| RenderError::PngEncode(e.to_string()))
    }
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self::new()
    }
}
