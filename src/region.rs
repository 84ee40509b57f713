//! Pixel inspector report: a raw-value window of an image around a point.

use luma_ops::region_extract;
use serde::Serialize;

use crate::error::Error;
use crate::store::ImageStore;

/// Transport form of an extracted pixel window. Coordinates are inclusive
/// image-space bounds; `image_shape` is `[height, width]`.
#[derive(Debug, Clone, Serialize)]
pub struct RegionReport {
    pub filename: String,
    pub image_shape: [usize; 2],
    pub pixel_grid: Vec<Vec<u8>>,
    pub x_start: usize,
    pub x_end: usize,
    pub y_start: usize,
    pub y_end: usize,
    pub center_x: usize,
    pub center_y: usize,
    pub center_value: u8,
}

/// Loads `filename` and extracts the window of nominal size
/// `2 * half_size + 1` around `(x, y)`.
pub fn region_report(
    store: &ImageStore,
    filename: &str,
    x: usize,
    y: usize,
    half_size: usize,
) -> Result<RegionReport, Error> {
    let buf = store.load(filename)?;
    let region = region_extract(&buf, x, y, half_size);
    Ok(RegionReport {
        filename: filename.to_string(),
        image_shape: [buf.height(), buf.width()],
        pixel_grid: region.grid,
        x_start: region.x_start,
        x_end: region.x_end,
        y_start: region.y_start,
        y_end: region.y_end,
        center_x: region.center_x,
        center_y: region.center_y,
        center_value: region.center_value,
    })
}
