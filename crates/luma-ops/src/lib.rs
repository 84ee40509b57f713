//! luma-ops: 8-bit grayscale array operations for image-processing teaching demos
//!
//! This library implements the numeric core behind a grayscale
//! image-difference course tool: pixel-wise absolute differences, contrast
//! stretching, intensity histograms, bit-depth quantization, window
//! extraction, overflow-teaching scalar arithmetic, and summary statistics.
//! Everything operates on [`GrayBuffer`], a plain row-major `u8` raster, and
//! every function is pure: no I/O, no shared state, no allocation surprises.
//!
//! The wrap/saturate/round rules are exact by contract. Course material
//! quotes results like `250 (+) 10 = 4` under wrapping addition, so the
//! functions here must reproduce them bit for bit.
//!
//! # Quick Start
//!
//! ```
//! use luma_ops::{absolute_difference, normalize_to_full_range, summarize, GrayBuffer};
//!
//! let a = GrayBuffer::new(vec![10, 20, 30, 40, 50, 60, 70, 80, 90], 3, 3);
//! let b = GrayBuffer::filled(25, 3, 3);
//!
//! let diff = absolute_difference(&a, &b).unwrap();
//! assert_eq!(diff.data(), &[15, 5, 5, 15, 25, 35, 45, 55, 65]);
//!
//! let stats = summarize(&diff);
//! assert_eq!(stats.mean, 30.0);
//! assert_eq!(stats.max, 65);
//!
//! // Stretch the faint difference onto the full 0..=255 range for display.
//! let enhanced = normalize_to_full_range(&diff);
//! assert_eq!(enhanced.min_max(), Some((0, 255)));
//! ```
//!
//! # Histograms and Quantization
//!
//! ```
//! use luma_ops::{histogram_256, quantize, GrayBuffer};
//!
//! let ramp = GrayBuffer::new((0..=255).collect(), 256, 1);
//! let hist = histogram_256(&ramp);
//! assert_eq!(hist.iter().sum::<u64>(), 256);
//!
//! let two_level = quantize(&ramp, 1).unwrap();
//! assert!(two_level.data().iter().all(|&v| v == 0 || v == 255));
//! ```

mod buffer;
mod diff;
mod error;
mod histogram;
mod normalize;
mod quantize;
mod region;
mod scalar;
mod stats;


pub use buffer::GrayBuffer;
pub use diff::absolute_difference;
pub use error::OpsError;
pub use histogram::{histogram_256, HISTOGRAM_BINS};
pub use normalize::normalize_to_full_range;
pub use quantize::{quantize, SUPPORTED_BIT_DEPTHS};
pub use region::{region_extract, PixelRegion};
pub use scalar::{
    absolute_diff, saturating_add, saturating_divide, scaled_multiply, wrapping_add, wrapping_sub,
};
pub use stats::{summarize, Statistics};
