//! Error type for the luma-ops public API.
//!
//! [`OpsError`] covers the two ways a caller can hand this crate bad input:
//! combining buffers whose shapes differ, and asking for an unsupported
//! quantization depth.

use std::fmt;

/// Error type for the luma-ops public API.
///
/// # Example
///
/// ```
/// use luma_ops::{absolute_difference, GrayBuffer, OpsError};
///
/// let a = GrayBuffer::filled(0, 2, 2);
/// let b = GrayBuffer::filled(0, 3, 3);
/// let err = absolute_difference(&a, &b).unwrap_err();
/// assert!(matches!(err, OpsError::ShapeMismatch { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpsError {
    /// Two buffers were combined pixel-wise but their dimensions differ.
    /// Shapes are reported as `(width, height)`.
    ShapeMismatch {
        /// Dimensions of the left-hand buffer.
        left: (usize, usize),
        /// Dimensions of the right-hand buffer.
        right: (usize, usize),
    },
    /// Quantization was requested at a bit depth other than 1, 2, 4, or 8.
    InvalidBitDepth(u8),
}

impl fmt::Display for OpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpsError::ShapeMismatch { left, right } => write!(
                f,
                "shape mismatch: {}x{} vs {}x{}",
                left.0, left.1, right.0, right.1
            ),
            OpsError::InvalidBitDepth(bits) => {
                write!(f, "invalid bit depth {} (expected 1, 2, 4, or 8)", bits)
            }
        }
    }
}

impl std::error::Error for OpsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = OpsError::ShapeMismatch {
            left: (64, 48),
            right: (32, 48),
        };
        assert_eq!(err.to_string(), "shape mismatch: 64x48 vs 32x48");
    }

    #[test]
    fn test_invalid_bit_depth_display() {
        let err = OpsError::InvalidBitDepth(3);
        assert_eq!(err.to_string(), "invalid bit depth 3 (expected 1, 2, 4, or 8)");
    }
}
