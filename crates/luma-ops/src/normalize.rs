//! Contrast stretching: remap a buffer's occupied range onto 0..=255.
//!
//! Difference images tend to live in a narrow band near black. Stretching
//! them to the full range makes faint differences visible, which is the
//! whole point of the "enhanced" view in the figures.

use crate::buffer::GrayBuffer;

/// Linearly rescales intensities so the smallest becomes 0 and the largest 255.
///
/// Each pixel maps to `round((v - min) * 255 / (max - min))`. When the buffer
/// is flat (max == min, including the all-zero case) there is no range to
/// stretch and the input is returned as a copy.
///
/// # Example
///
/// ```
/// use luma_ops::{normalize_to_full_range, GrayBuffer};
///
/// let buf = GrayBuffer::new(vec![10, 20, 30], 3, 1);
/// let out = normalize_to_full_range(&buf);
/// assert_eq!(out.data(), &[0, 128, 255]);
/// ```
pub fn normalize_to_full_range(buf: &GrayBuffer) -> GrayBuffer {
    let Some((min, max)) = buf.min_max() else {
        return buf.clone();
    };
    if min == max {
        return buf.clone();
    }
    let range = (max - min) as f64;
    let data = buf
        .data()
        .iter()
        .map(|&v| ((v - min) as f64 * 255.0 / range).round() as u8)
        .collect();
    GrayBuffer::new(data, buf.width(), buf.height())
}
