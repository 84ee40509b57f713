//! Panel layout and chart painting shared by all figures.
//!
//! Every figure is a grid of panels inside a fixed-size document: an
//! optional suptitle band on top, outer margins, and evenly sized cells.
//! Painters take a cell [`Rect`] and draw a titled image, histogram,
//! overlay chart, or colorbar into it.

use luma_ops::HISTOGRAM_BINS;

use crate::rendering::colormap::ColorMap;
use crate::rendering::svg::{Anchor, SvgDoc};

/// Course palette, shared across figures and demos.
pub const INK: &str = "#2c3e50";
pub const BLUE: &str = "#3498db";
pub const RED: &str = "#e74c3c";
pub const GREEN: &str = "#2ecc71";
pub const ORANGE: &str = "#f39c12";
pub const PURPLE: &str = "#9b59b6";
pub const TEAL: &str = "#1abc9c";
pub const GRID_LINE: &str = "#e5e7eb";
pub const AXIS_TEXT: &str = "#6b7280";

const MARGIN: f64 = 26.0;
const GAP: f64 = 20.0;
const SUPTITLE_BAND: f64 = 46.0;
const TITLE_LINE: f64 = 19.0;

/// Pixel-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Shrinks the rectangle by the given amounts on each side.
    pub fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect {
            x: self.x + left,
            y: self.y + top,
            w: (self.w - left - right).max(1.0),
            h: (self.h - top - bottom).max(1.0),
        }
    }
}

/// Evenly divided panel grid with optional suptitle band.
#[derive(Debug, Clone, Copy)]
pub struct PanelGrid {
    rows: usize,
    cols: usize,
    top: f64,
    width: u32,
    height: u32,
}

impl PanelGrid {
    pub fn new(width: u32, height: u32, rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            top: MARGIN,
            width,
            height,
        }
    }

    /// Reserves a band above the grid for a figure-level title.
    pub fn with_suptitle_band(mut self) -> Self {
        self.top = SUPTITLE_BAND;
        self
    }

    /// Cell rectangle at `(row, col)`, zero-indexed.
    pub fn panel(&self, row: usize, col: usize) -> Rect {
        debug_assert!(row < self.rows && col < self.cols);
        let w = (self.width as f64 - 2.0 * MARGIN - (self.cols as f64 - 1.0) * GAP)
            / self.cols as f64;
        let h = (self.height as f64 - self.top - MARGIN - (self.rows as f64 - 1.0) * GAP)
            / self.rows as f64;
        Rect {
            x: MARGIN + col as f64 * (w + GAP),
            y: self.top + row as f64 * (h + GAP),
            w,
            h,
        }
    }
}

/// Bold centered title in the suptitle band.
pub fn draw_suptitle(doc: &mut SvgDoc, title: &str) {
    let x = doc.width() as f64 / 2.0;
    doc.text_bold(x, 28.0, 16.0, Anchor::Middle, INK, title);
}

/// Panel title lines, centered at the top of the cell. Returns the
/// remaining drawable area below the title band.
pub fn draw_panel_title(doc: &mut SvgDoc, rect: Rect, lines: &[&str]) -> Rect {
    for (i, line) in lines.iter().enumerate() {
        doc.text(
            rect.x + rect.w / 2.0,
            rect.y + 14.0 + i as f64 * TITLE_LINE,
            12.0,
            Anchor::Middle,
            INK,
            line,
        );
    }
    let band = 6.0 + lines.len() as f64 * TITLE_LINE;
    rect.inset(0.0, band, 0.0, 0.0)
}

/// Maps data coordinates onto a pixel rectangle (y grows upward in data
/// space, downward in pixels).
#[derive(Debug, Clone, Copy)]
pub struct AxisMapper {
    pub inner: Rect,
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl AxisMapper {
    pub fn new(inner: Rect, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            inner,
            x0: x_range.0,
            x1: x_range.1,
            y0: y_range.0,
            y1: y_range.1,
        }
    }

    pub fn x(&self, v: f64) -> f64 {
        self.inner.x + (v - self.x0) / (self.x1 - self.x0) * self.inner.w
    }

    pub fn y(&self, v: f64) -> f64 {
        self.inner.y + self.inner.h - (v - self.y0) / (self.y1 - self.y0) * self.inner.h
    }
}

/// Light frame and quarter-gridlines around a plotting area.
pub fn draw_axes_frame(doc: &mut SvgDoc, inner: Rect) {
    for i in 1..4 {
        let gx = inner.x + inner.w * i as f64 / 4.0;
        let gy = inner.y + inner.h * i as f64 / 4.0;
        doc.line(gx, inner.y, gx, inner.y + inner.h, GRID_LINE, 1.0);
        doc.line(inner.x, gy, inner.x + inner.w, gy, GRID_LINE, 1.0);
    }
    doc.rect_outline(inner.x, inner.y, inner.w, inner.h, AXIS_TEXT, 1.0);
}

/// Aspect-fit centered PNG embed into `area`.
pub fn draw_image_into(
    doc: &mut SvgDoc,
    area: Rect,
    png_base64: &str,
    img_width: usize,
    img_height: usize,
) {
    if img_width == 0 || img_height == 0 {
        return;
    }
    let scale = (area.w / img_width as f64).min(area.h / img_height as f64);
    let w = img_width as f64 * scale;
    let h = img_height as f64 * scale;
    let x = area.x + (area.w - w) / 2.0;
    let y = area.y + (area.h - h) / 2.0;
    doc.image_png_base64(x, y, w, h, png_base64);
}

/// Titled image panel: the PNG is aspect-fit centered in the cell.
pub fn draw_image_panel(
    doc: &mut SvgDoc,
    rect: Rect,
    titles: &[&str],
    png_base64: &str,
    img_width: usize,
    img_height: usize,
) {
    let area = draw_panel_title(doc, rect, titles);
    draw_image_into(doc, area, png_base64, img_width, img_height);
}

/// Titled intensity histogram: filled area under a stroked curve, with the
/// x-axis spanning 0..=256. `axis_labels` adds the Pixel Intensity /
/// Frequency captions used by the standalone histogram figure.
pub fn draw_histogram_panel(
    doc: &mut SvgDoc,
    rect: Rect,
    titles: &[&str],
    hist: &[u64; HISTOGRAM_BINS],
    line_color: &str,
    fill_color: &str,
    axis_labels: bool,
) {
    let area = draw_panel_title(doc, rect, titles);
    let inner = area.inset(46.0, 4.0, 8.0, 30.0);
    draw_axes_frame(doc, inner);

    let max = (*hist.iter().max().unwrap_or(&0)).max(1) as f64;
    let mapper = AxisMapper::new(inner, (0.0, 256.0), (0.0, max));

    let points: Vec<(f64, f64)> = hist
        .iter()
        .enumerate()
        .map(|(i, &c)| (mapper.x(i as f64), mapper.y(c as f64)))
        .collect();

    let mut fill = Vec::with_capacity(points.len() + 2);
    fill.push((mapper.x(0.0), mapper.y(0.0)));
    fill.extend_from_slice(&points);
    fill.push((mapper.x(255.0), mapper.y(0.0)));
    doc.polygon(&fill, fill_color, 0.3);
    doc.polyline(&points, line_color, 1.2, 1.0);

    draw_intensity_ticks(doc, inner);
    draw_count_ticks(doc, inner, max);

    if axis_labels {
        doc.text(
            inner.x + inner.w / 2.0,
            inner.y + inner.h + 28.0,
            11.0,
            Anchor::Middle,
            AXIS_TEXT,
            "Pixel Intensity",
        );
        doc.text_vertical(
            inner.x - 38.0,
            inner.y + inner.h / 2.0,
            11.0,
            AXIS_TEXT,
            "Frequency",
        );
    }
}

/// One labeled series per histogram, drawn over a shared frame with a
/// legend in the top-right corner.
pub fn draw_overlay_panel(
    doc: &mut SvgDoc,
    rect: Rect,
    titles: &[&str],
    series: &[(&str, &[u64; HISTOGRAM_BINS], &str)],
) {
    let area = draw_panel_title(doc, rect, titles);
    let inner = area.inset(46.0, 4.0, 8.0, 30.0);
    draw_axes_frame(doc, inner);

    let max = series
        .iter()
        .flat_map(|(_, hist, _)| hist.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1) as f64;
    let mapper = AxisMapper::new(inner, (0.0, 256.0), (0.0, max));

    for (_, hist, color) in series {
        let points: Vec<(f64, f64)> = hist
            .iter()
            .enumerate()
            .map(|(i, &c)| (mapper.x(i as f64), mapper.y(c as f64)))
            .collect();
        doc.polyline(&points, color, 1.0, 0.7);
    }

    draw_intensity_ticks(doc, inner);
    draw_count_ticks(doc, inner, max);

    // Legend rows, top-right inside the frame.
    let lx = inner.x + inner.w - 104.0;
    let mut ly = inner.y + 14.0;
    for (label, _, color) in series {
        doc.line(lx, ly - 4.0, lx + 18.0, ly - 4.0, color, 2.0);
        doc.text(lx + 24.0, ly, 10.0, Anchor::Start, INK, label);
        ly += 15.0;
    }
}

/// Vertical colorbar with min/max value labels.
pub fn draw_colorbar(doc: &mut SvgDoc, rect: Rect, map: ColorMap, vmin: u8, vmax: u8) {
    const STEPS: usize = 64;
    let step_h = rect.h / STEPS as f64;
    for i in 0..STEPS {
        let t = i as f64 / (STEPS - 1) as f64;
        let (r, g, b) = map.sample(t);
        // Row 0 is the bottom of the bar.
        let y = rect.y + rect.h - (i + 1) as f64 * step_h;
        doc.rect(
            rect.x,
            y,
            rect.w,
            step_h + 0.5,
            &format!("#{r:02x}{g:02x}{b:02x}"),
        );
    }
    doc.rect_outline(rect.x, rect.y, rect.w, rect.h, AXIS_TEXT, 1.0);
    let label_x = rect.x + rect.w + 4.0;
    doc.text(label_x, rect.y + 9.0, 9.0, Anchor::Start, AXIS_TEXT, &vmax.to_string());
    doc.text(
        label_x,
        rect.y + rect.h,
        9.0,
        Anchor::Start,
        AXIS_TEXT,
        &vmin.to_string(),
    );
}

fn draw_intensity_ticks(doc: &mut SvgDoc, inner: Rect) {
    for v in [0u32, 64, 128, 192, 256] {
        let x = inner.x + v as f64 / 256.0 * inner.w;
        doc.line(x, inner.y + inner.h, x, inner.y + inner.h + 4.0, AXIS_TEXT, 1.0);
        doc.text(
            x,
            inner.y + inner.h + 16.0,
            9.0,
            Anchor::Middle,
            AXIS_TEXT,
            &v.to_string(),
        );
    }
}

fn draw_count_ticks(doc: &mut SvgDoc, inner: Rect, max: f64) {
    for (frac, value) in [(0.0, 0.0), (0.5, max / 2.0), (1.0, max)] {
        let y = inner.y + inner.h - frac * inner.h;
        doc.line(inner.x - 4.0, y, inner.x, y, AXIS_TEXT, 1.0);
        doc.text(
            inner.x - 7.0,
            y + 3.0,
            9.0,
            Anchor::End,
            AXIS_TEXT,
            &format_count(value),
        );
    }
}

fn format_count(v: f64) -> String {
    if v >= 10_000.0 {
        format!("{:.0}k", v / 1000.0)
    } else {
        format!("{:.0}", v)
    }
}
