//! Bridges between the `image` crate's rasters and [`GrayBuffer`].
//!
//! `luma-ops` stays dependency-free, so the conversions live here on the
//! application side. Both types are plain row-major u8 grids; only the
//! dimension bookkeeping differs.

use image::imageops::{self, FilterType};
use image::GrayImage;
use luma_ops::GrayBuffer;

/// Wraps a decoded grayscale image as a [`GrayBuffer`].
pub fn buffer_from_gray(img: &GrayImage) -> GrayBuffer {
    GrayBuffer::new(
        img.as_raw().clone(),
        img.width() as usize,
        img.height() as usize,
    )
}

/// Rebuilds an `image` raster from a [`GrayBuffer`].
pub fn gray_from_buffer(buf: &GrayBuffer) -> GrayImage {
    GrayImage::from_raw(buf.width() as u32, buf.height() as u32, buf.data().to_vec())
        .expect("GrayBuffer length matches its dimensions")
}

/// Resizes a buffer to exactly `width x height`.
///
/// Triangle filtering stands in for area averaging: resizes here are
/// overwhelmingly downscales of the second image onto the first image's
/// grid, where it behaves well without ringing.
pub fn resize_buffer(buf: &GrayBuffer, width: usize, height: usize) -> GrayBuffer {
    let img = gray_from_buffer(buf);
    let resized = imageops::resize(&img, width as u32, height as u32, FilterType::Triangle);
    GrayBuffer::new(resized.into_raw(), width, height)
}
