//! Figure assembly: compose an SVG document per figure variant, rasterize
//! it, and hand back PNG bytes.
//!
//! Every figure builds, draws, encodes, and drops its own canvas; nothing
//! is shared between calls except the font database inside [`Rasterizer`].

use luma_ops::{histogram_256, quantize, region_extract, GrayBuffer, SUPPORTED_BIT_DEPTHS};
use serde::Serialize;

use crate::difference::{difference_from_store, DifferenceOutcome};
use crate::error::Error;
use crate::rendering::chart::{self, PanelGrid, Rect};
use crate::rendering::colormap::{apply, ColorMap};
use crate::rendering::surface::{draw_surface, SurfaceView};
use crate::rendering::svg::SvgDoc;
use crate::rendering::{gray_to_base64_png, rgb_to_png, to_base64, Rasterizer};
use crate::store::{display_label, ImageStore};

/// Largest half-window the surface plot accepts; keeps the plotted region
/// within 128x128 pixels.
pub const MAX_SURFACE_HALF: usize = 63;

/// A rasterized figure with its pixel dimensions.
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub png: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RenderedFigure {
    pub fn to_base64(&self) -> String {
        to_base64(&self.png)
    }
}

/// Quantized rendition of one image at a given bit depth.
#[derive(Debug, Clone, Serialize)]
pub struct BitDepthEntry {
    pub bits: u8,
    pub levels: u16,
    /// Base64 PNG of the quantized, display-rescaled image.
    pub image: String,
}

/// Bit-depth gallery: one figure showing every depth, plus the individual
/// quantized images for direct display.
#[derive(Debug, Clone, Serialize)]
pub struct BitDepthReport {
    pub filename: String,
    /// Base64 PNG of the gallery figure.
    pub figure: String,
    pub entries: Vec<BitDepthEntry>,
}

/// Stateless figure factory over a shared rasterizer.
pub struct FigureRenderer {
    rasterizer: Rasterizer,
}

impl FigureRenderer {
    pub fn new() -> Self {
        Self {
            rasterizer: Rasterizer::new(),
        }
    }

    pub(crate) fn finish(&self, doc: SvgDoc) -> Result<RenderedFigure, Error> {
        let (width, height) = (doc.width(), doc.height());
        tracing::debug!(width, height, "rasterizing figure");
        let png = self.rasterizer.rasterize_to_png(&doc.finish())?;
        Ok(RenderedFigure { png, width, height })
    }

    /// Image and its intensity histogram, side by side.
    pub fn histogram(&self, store: &ImageStore, filename: &str) -> Result<RenderedFigure, Error> {
        let buf = store.load(filename)?;
        let hist = histogram_256(&buf);

        let mut doc = SvgDoc::new(1440, 480, "#fafafa");
        let grid = PanelGrid::new(1440, 480, 1, 2);
        let label = display_label(filename);
        chart::draw_image_panel(
            &mut doc,
            grid.panel(0, 0),
            &[&label],
            &gray_to_base64_png(&buf)?,
            buf.width(),
            buf.height(),
        );
        chart::draw_histogram_panel(
            &mut doc,
            grid.panel(0, 1),
            &["Intensity Histogram"],
            &hist,
            chart::INK,
            chart::BLUE,
            true,
        );
        self.finish(doc)
    }

    /// The 2x4 spatial-difference analysis grid.
    pub fn comparison(
        &self,
        store: &ImageStore,
        filename1: &str,
        filename2: &str,
    ) -> Result<RenderedFigure, Error> {
        let outcome = difference_from_store(store, filename1, filename2)?;
        self.comparison_from_outcome(filename1, filename2, &outcome)
    }

    /// Draws the comparison grid from an already-computed pipeline result.
    pub fn comparison_from_outcome(
        &self,
        filename1: &str,
        filename2: &str,
        outcome: &DifferenceOutcome,
    ) -> Result<RenderedFigure, Error> {
        let mut doc = SvgDoc::new(2160, 1080, "#ffffff");
        let grid = PanelGrid::new(2160, 1080, 2, 4).with_suptitle_band();
        chart::draw_suptitle(&mut doc, "Spatial Difference Analysis");

        let label1 = display_label(filename1);
        let label2 = display_label(filename2);
        chart::draw_image_panel(
            &mut doc,
            grid.panel(0, 0),
            &["Image 1", &label1],
            &gray_to_base64_png(&outcome.image1)?,
            outcome.image1.width(),
            outcome.image1.height(),
        );
        chart::draw_image_panel(
            &mut doc,
            grid.panel(0, 1),
            &["Image 2", &label2],
            &gray_to_base64_png(&outcome.image2)?,
            outcome.image2.width(),
            outcome.image2.height(),
        );
        chart::draw_image_panel(
            &mut doc,
            grid.panel(0, 2),
            &["Absolute Difference", "|Image1 - Image2|"],
            &gray_to_base64_png(&outcome.difference)?,
            outcome.difference.width(),
            outcome.difference.height(),
        );

        // Heatmapped enhanced difference with its colorbar.
        let heat_rect = grid.panel(0, 3);
        let area = chart::draw_panel_title(&mut doc, heat_rect, &["Enhanced Difference", "(Heatmap)"]);
        let heat_rgb = apply(&outcome.enhanced, ColorMap::Hot);
        let heat_png = rgb_to_png(
            &heat_rgb,
            outcome.enhanced.width() as u32,
            outcome.enhanced.height() as u32,
        )?;
        chart::draw_image_into(
            &mut doc,
            area.inset(0.0, 0.0, 48.0, 0.0),
            &to_base64(&heat_png),
            outcome.enhanced.width(),
            outcome.enhanced.height(),
        );
        let (vmin, vmax) = outcome.enhanced.min_max().unwrap_or((0, 0));
        let bar = Rect {
            x: area.x + area.w - 34.0,
            y: area.y + 8.0,
            w: 14.0,
            h: area.h - 16.0,
        };
        chart::draw_colorbar(&mut doc, bar, ColorMap::Hot, vmin, vmax);

        let hist1 = histogram_256(&outcome.image1);
        let hist2 = histogram_256(&outcome.image2);
        let hist_diff = histogram_256(&outcome.difference);
        chart::draw_histogram_panel(
            &mut doc,
            grid.panel(1, 0),
            &["Histogram - Image 1"],
            &hist1,
            chart::INK,
            chart::BLUE,
            false,
        );
        chart::draw_histogram_panel(
            &mut doc,
            grid.panel(1, 1),
            &["Histogram - Image 2"],
            &hist2,
            chart::INK,
            chart::RED,
            false,
        );
        chart::draw_histogram_panel(
            &mut doc,
            grid.panel(1, 2),
            &["Histogram - Difference"],
            &hist_diff,
            chart::INK,
            chart::GREEN,
            false,
        );
        chart::draw_overlay_panel(
            &mut doc,
            grid.panel(1, 3),
            &["Overlay Comparison"],
            &[
                ("Image 1", &hist1, chart::BLUE),
                ("Image 2", &hist2, chart::RED),
                ("Difference", &hist_diff, chart::GREEN),
            ],
        );

        self.finish(doc)
    }

    /// 3-D intensity surface of a window around `(center_x, center_y)`.
    /// The half-window is capped at [`MAX_SURFACE_HALF`].
    pub fn surface(
        &self,
        store: &ImageStore,
        filename: &str,
        center_x: usize,
        center_y: usize,
        half_size: usize,
    ) -> Result<RenderedFigure, Error> {
        let buf = store.load(filename)?;
        let region = region_extract(&buf, center_x, center_y, half_size.min(MAX_SURFACE_HALF));
        let region_buf = GrayBuffer::new(region.grid.concat(), region.width(), region.height());

        let mut doc = SvgDoc::new(960, 720, "#ffffff");
        let grid = PanelGrid::new(960, 720, 1, 1).with_suptitle_band();
        chart::draw_suptitle(&mut doc, "Pixel Intensity Surface");
        let subtitle = format!(
            "{} - center ({}, {}), {}x{} region",
            display_label(filename),
            region.center_x,
            region.center_y,
            region.width(),
            region.height(),
        );
        let area = chart::draw_panel_title(&mut doc, grid.panel(0, 0), &[&subtitle]);
        draw_surface(&mut doc, area, &region_buf, SurfaceView::default());
        self.finish(doc)
    }

    /// Gallery of the same image quantized to 8, 4, 2, and 1 bits, each
    /// over its histogram, plus the per-depth images for direct display.
    pub fn bit_depth(
        &self,
        store: &ImageStore,
        filename: &str,
    ) -> Result<(RenderedFigure, BitDepthReport), Error> {
        let buf = store.load(filename)?;

        let mut doc = SvgDoc::new(1920, 960, "#ffffff");
        let grid = PanelGrid::new(1920, 960, 2, 4).with_suptitle_band();
        chart::draw_suptitle(&mut doc, "Bit Depth Quantization");

        let mut entries = Vec::with_capacity(SUPPORTED_BIT_DEPTHS.len());
        for (col, &bits) in SUPPORTED_BIT_DEPTHS.iter().rev().enumerate() {
            let levels = 1u16 << bits;
            let quantized = quantize(&buf, bits)?;
            let image = gray_to_base64_png(&quantized)?;

            let title = format!("{bits}-bit ({levels} levels)");
            chart::draw_image_panel(
                &mut doc,
                grid.panel(0, col),
                &[&title],
                &image,
                quantized.width(),
                quantized.height(),
            );
            let hist_title = format!("Histogram - {bits}-bit");
            chart::draw_histogram_panel(
                &mut doc,
                grid.panel(1, col),
                &[&hist_title],
                &histogram_256(&quantized),
                chart::INK,
                chart::BLUE,
                false,
            );

            entries.push(BitDepthEntry { bits, levels, image });
        }

        let figure = self.finish(doc)?;
        let report = BitDepthReport {
            filename: filename.to_string(),
            figure: figure.to_base64(),
            entries,
        };
        Ok((figure, report))
    }
}

impl Default for FigureRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;
    use tempfile::TempDir;

    fn stage(images: &[(&str, GrayImage)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, img) in images {
            img.save(dir.path().join(name)).unwrap();
        }
        dir
    }

    fn gradient(w: u32, h: u32) -> GrayImage {
        GrayImage::from_fn(w, h, |x, y| image::Luma([(x * 3 + y * 5) as u8]))
    }

    fn decoded_size(png: &[u8]) -> (u32, u32) {
        let img = image::load_from_memory(png).unwrap();
        (img.width(), img.height())
    }

    #[test]
    fn test_histogram_figure_has_requested_size() {
        let dir = stage(&[("a.png", gradient(16, 16))]);
        let store = ImageStore::new(dir.path());
        let fig = FigureRenderer::new().histogram(&store, "a.png").unwrap();
        assert_eq!((fig.width, fig.height), (1440, 480));
        assert_eq!(decoded_size(&fig.png), (1440, 480));
    }

    #[test]
    fn test_comparison_figure_has_requested_size() {
        let dir = stage(&[("a.png", gradient(16, 16)), ("b.png", gradient(12, 12))]);
        let store = ImageStore::new(dir.path());
        let fig = FigureRenderer::new().comparison(&store, "a.png", "b.png").unwrap();
        assert_eq!(decoded_size(&fig.png), (2160, 1080));
    }

    #[test]
    fn test_surface_figure_renders_capped_region() {
        let dir = stage(&[("a.png", gradient(40, 40))]);
        let store = ImageStore::new(dir.path());
        let fig = FigureRenderer::new()
            .surface(&store, "a.png", 20, 20, 500)
            .unwrap();
        assert_eq!(decoded_size(&fig.png), (960, 720));
    }

    #[test]
    fn test_bit_depth_report_covers_all_depths() {
        let dir = stage(&[("a.png", gradient(16, 16))]);
        let store = ImageStore::new(dir.path());
        let (figure, report) = FigureRenderer::new().bit_depth(&store, "a.png").unwrap();
        let bits: Vec<u8> = report.entries.iter().map(|e| e.bits).collect();
        assert_eq!(bits, vec![8, 4, 2, 1]);
        assert_eq!(report.entries[0].levels, 256);
        assert_eq!(report.entries[3].levels, 2);
        assert_eq!(decoded_size(&figure.png), (1920, 960));
        assert!(!report.figure.is_empty());
    }

    #[test]
    fn test_one_bit_entry_has_at_most_two_values() {
        use base64::engine::general_purpose::STANDARD;
        use base64::Engine;

        let dir = stage(&[("a.png", gradient(16, 16))]);
        let store = ImageStore::new(dir.path());
        let (_, report) = FigureRenderer::new().bit_depth(&store, "a.png").unwrap();
        let one_bit = report.entries.iter().find(|e| e.bits == 1).unwrap();
        let png = STANDARD.decode(&one_bit.image).unwrap();
        let img = image::load_from_memory(&png).unwrap().to_luma8();
        let mut values: Vec<u8> = img.pixels().map(|p| p.0[0]).collect();
        values.sort_unstable();
        values.dedup();
        assert!(values.len() <= 2);
    }

    #[test]
    fn test_missing_image_propagates_not_found() {
        let dir = stage(&[]);
        let store = ImageStore::new(dir.path());
        let err = FigureRenderer::new().histogram(&store, "ghost.tif").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }
}
