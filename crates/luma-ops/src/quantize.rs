//! Bit-depth quantization: collapse 256 intensity levels down to 2^bits.
//!
//! Used by the bit-depth gallery to show what an image loses at 4, 2, and
//! 1 bits per pixel. Each pixel is floored to its bucket's base value and
//! the result is then stretched back to the full display range, matching
//! the course material: the displayed contrast is deliberately not
//! comparable across depths, only the bucket count is.

use crate::buffer::GrayBuffer;
use crate::error::OpsError;
use crate::normalize::normalize_to_full_range;

/// Bit depths [`quantize`] accepts, in ascending order.
pub const SUPPORTED_BIT_DEPTHS: [u8; 4] = [1, 2, 4, 8];

/// Reduces a buffer to `2^bits` evenly spaced intensity levels.
///
/// With `levels = 2^bits` and `step = 256 / levels`, each pixel maps to
/// `(v / step) * step` (bucket floor, not rounded) and the whole result is
/// re-normalized to span 0..=255 for display. At 8 bits every intensity is
/// its own bucket, so the input comes back unchanged.
///
/// # Errors
///
/// Returns [`OpsError::InvalidBitDepth`] for any depth outside
/// [`SUPPORTED_BIT_DEPTHS`].
///
/// # Example
///
/// ```
/// use luma_ops::{quantize, GrayBuffer};
///
/// let buf = GrayBuffer::new(vec![0, 100, 200, 255], 4, 1);
/// let one_bit = quantize(&buf, 1).unwrap();
/// assert_eq!(one_bit.data(), &[0, 0, 255, 255]);
/// ```
pub fn quantize(buf: &GrayBuffer, bits: u8) -> Result<GrayBuffer, OpsError> {
    if !SUPPORTED_BIT_DEPTHS.contains(&bits) {
        return Err(OpsError::InvalidBitDepth(bits));
    }
    if bits == 8 {
        return Ok(buf.clone());
    }
    let levels = 1usize << bits;
    let step = 256 / levels;
    let data = buf
        .data()
        .iter()
        .map(|&v| (v as usize / step * step) as u8)
        .collect();
    let bucketed = GrayBuffer::new(data, buf.width(), buf.height());
    Ok(normalize_to_full_range(&bucketed))
}
