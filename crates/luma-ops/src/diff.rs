//! Pixel-wise absolute difference between two same-shaped buffers.

use crate::buffer::GrayBuffer;
use crate::error::OpsError;

/// Computes `|a - b|` per pixel.
///
/// Both inputs must have identical dimensions; the result has the same
/// shape. Because the inputs are `u8` and the difference is taken as
/// `u8::abs_diff`, the result is always in `0..=255` with no overflow.
///
/// # Errors
///
/// Returns [`OpsError::ShapeMismatch`] when the dimensions differ.
///
/// # Example
///
/// ```
/// use luma_ops::{absolute_difference, GrayBuffer};
///
/// let a = GrayBuffer::new(vec![10, 200], 2, 1);
/// let b = GrayBuffer::new(vec![25, 25], 2, 1);
/// let d = absolute_difference(&a, &b).unwrap();
/// assert_eq!(d.data(), &[15, 175]);
/// ```
pub fn absolute_difference(a: &GrayBuffer, b: &GrayBuffer) -> Result<GrayBuffer, OpsError> {
    if a.dimensions() != b.dimensions() {
        return Err(OpsError::ShapeMismatch {
            left: a.dimensions(),
            right: b.dimensions(),
        });
    }
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(&x, &y)| x.abs_diff(y))
        .collect();
    Ok(GrayBuffer::new(data, a.width(), a.height()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difference_is_symmetric() {
        let a = GrayBuffer::new(vec![0, 128, 255, 7], 2, 2);
        let b = GrayBuffer::new(vec![255, 64, 0, 7], 2, 2);
        let ab = absolute_difference(&a, &b).unwrap();
        let ba = absolute_difference(&b, &a).unwrap();
        assert_eq!(ab, ba);
        assert_eq!(ab.data(), &[255, 64, 255, 0]);
    }

    #[test]
    fn test_identical_buffers_give_all_zero() {
        let a = GrayBuffer::new((0..=255).collect(), 16, 16);
        let d = absolute_difference(&a, &a).unwrap();
        assert!(d.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let a = GrayBuffer::filled(0, 4, 2);
        let b = GrayBuffer::filled(0, 2, 4);
        let err = absolute_difference(&a, &b).unwrap_err();
        assert_eq!(
            err,
            OpsError::ShapeMismatch {
                left: (4, 2),
                right: (2, 4)
            }
        );
    }
}
