//! Rectangular window extraction around a pixel of interest.
//!
//! The pixel inspector view asks for "the neighborhood of (x, y)". Requests
//! routinely land outside the image or near its edges, so the window keeps
//! its nominal `2 * half_size + 1` square size and slides inward until it
//! fits, shrinking only when the image itself is smaller than the window.

use crate::buffer::GrayBuffer;

/// A rectangular sub-grid of an image with its bounds and center pixel.
///
/// All coordinates are in image space; `x_end`/`y_end` are inclusive.
/// `center_x`/`center_y` are the requested center after clamping into the
/// image, which is where `center_value` was read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelRegion {
    /// The extracted window, one inner `Vec` per row.
    pub grid: Vec<Vec<u8>>,
    /// First column of the window.
    pub x_start: usize,
    /// Last column of the window (inclusive).
    pub x_end: usize,
    /// First row of the window.
    pub y_start: usize,
    /// Last row of the window (inclusive).
    pub y_end: usize,
    /// Requested center column, clamped to `0..width`.
    pub center_x: usize,
    /// Requested center row, clamped to `0..height`.
    pub center_y: usize,
    /// Intensity at the clamped center.
    pub center_value: u8,
}

impl PixelRegion {
    /// Window width in pixels.
    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    /// Window height in pixels.
    pub fn height(&self) -> usize {
        self.grid.len()
    }
}

/// Extracts the window of nominal size `2 * half_size + 1` centered on
/// `(center_x, center_y)`.
///
/// The center is clamped into the image first. The window then slides
/// inward as needed so it never crosses an edge, which keeps the extracted
/// grid the same size wherever the center lands; it only shrinks when the
/// image has fewer than `2 * half_size + 1` pixels on a side. An empty
/// buffer yields an empty grid with zeroed bounds.
///
/// # Example
///
/// ```
/// use luma_ops::{region_extract, GrayBuffer};
///
/// let buf = GrayBuffer::new((0..25).collect(), 5, 5);
/// // Far out-of-range request: center clamps to (4, 4), window covers it all.
/// let region = region_extract(&buf, 10, 10, 2);
/// assert_eq!(region.center_x, 4);
/// assert_eq!((region.x_start, region.x_end), (0, 4));
/// assert_eq!(region.grid.len(), 5);
/// assert_eq!(region.center_value, 24);
/// ```
pub fn region_extract(
    buf: &GrayBuffer,
    center_x: usize,
    center_y: usize,
    half_size: usize,
) -> PixelRegion {
    if buf.is_empty() {
        return PixelRegion {
            grid: Vec::new(),
            x_start: 0,
            x_end: 0,
            y_start: 0,
            y_end: 0,
            center_x: 0,
            center_y: 0,
            center_value: 0,
        };
    }

    let (width, height) = buf.dimensions();
    let cx = center_x.min(width - 1);
    let cy = center_y.min(height - 1);

    let span = 2 * half_size + 1;
    let window_w = span.min(width);
    let window_h = span.min(height);

    let x_start = cx.saturating_sub(half_size).min(width - window_w);
    let y_start = cy.saturating_sub(half_size).min(height - window_h);
    let x_end = x_start + window_w - 1;
    let y_end = y_start + window_h - 1;

    let grid = (y_start..=y_end)
        .map(|y| (x_start..=x_end).map(|x| buf.get(x, y)).collect())
        .collect();

    PixelRegion {
        grid,
        x_start,
        x_end,
        y_start,
        y_end,
        center_x: cx,
        center_y: cy,
        center_value: buf.get(cx, cy),
    }
}
