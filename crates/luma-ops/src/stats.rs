//! Scalar summaries of an intensity buffer.

use crate::buffer::GrayBuffer;

/// Summary statistics over every pixel of a buffer.
///
/// `std_dev` is the population standard deviation (divide by N, not N-1).
/// `nonzero_percentage` is `nonzero_count / total_count * 100` rounded to
/// two decimal places. An empty or all-zero buffer summarizes cleanly to
/// zeros rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Arithmetic mean of all intensities.
    pub mean: f64,
    /// Largest intensity present.
    pub max: u8,
    /// Smallest intensity present.
    pub min: u8,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Number of pixels with a nonzero intensity.
    pub nonzero_count: u64,
    /// Total number of pixels.
    pub total_count: u64,
    /// Share of nonzero pixels, in percent, rounded to 2 decimals.
    pub nonzero_percentage: f64,
}

/// Computes [`Statistics`] over a buffer in a single pass plus a variance pass.
///
/// # Example
///
/// ```
/// use luma_ops::{summarize, GrayBuffer};
///
/// let buf = GrayBuffer::new(vec![0, 0, 10, 30], 4, 1);
/// let stats = summarize(&buf);
/// assert_eq!(stats.mean, 10.0);
/// assert_eq!(stats.max, 30);
/// assert_eq!(stats.nonzero_count, 2);
/// assert_eq!(stats.nonzero_percentage, 50.0);
/// ```
pub fn summarize(buf: &GrayBuffer) -> Statistics {
    let total_count = buf.len() as u64;
    if total_count == 0 {
        return Statistics {
            mean: 0.0,
            max: 0,
            min: 0,
            std_dev: 0.0,
            nonzero_count: 0,
            total_count: 0,
            nonzero_percentage: 0.0,
        };
    }

    let mut sum = 0u64;
    let mut nonzero_count = 0u64;
    let (mut min, mut max) = (u8::MAX, u8::MIN);
    for &v in buf.data() {
        sum += v as u64;
        if v != 0 {
            nonzero_count += 1;
        }
        min = min.min(v);
        max = max.max(v);
    }

    let n = total_count as f64;
    let mean = sum as f64 / n;
    let variance = buf
        .data()
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;
    let nonzero_percentage = (nonzero_count as f64 / n * 100.0 * 100.0).round() / 100.0;

    Statistics {
        mean,
        max,
        min,
        std_dev: variance.sqrt(),
        nonzero_count,
        total_count,
        nonzero_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        let buf = GrayBuffer::new(vec![2, 4, 4, 4, 5, 5, 7, 9], 8, 1);
        let stats = summarize(&buf);
        assert_eq!(stats.mean, 5.0);
        // Textbook population std-dev example: variance 4, sigma 2.
        assert_eq!(stats.std_dev, 2.0);
        assert_eq!(stats.min, 2);
        assert_eq!(stats.max, 9);
        assert_eq!(stats.nonzero_count, 8);
        assert_eq!(stats.nonzero_percentage, 100.0);
    }

    #[test]
    fn test_all_zero_buffer() {
        let stats = summarize(&GrayBuffer::filled(0, 10, 10));
        assert_eq!(stats.mean, 0.0);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.max, 0);
        assert_eq!(stats.min, 0);
        assert_eq!(stats.nonzero_count, 0);
        assert_eq!(stats.total_count, 100);
        assert_eq!(stats.nonzero_percentage, 0.0);
    }

    #[test]
    fn test_empty_buffer() {
        let stats = summarize(&GrayBuffer::new(Vec::new(), 0, 0));
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.nonzero_percentage, 0.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        // 1 nonzero pixel out of 3: 33.333...% -> 33.33
        let buf = GrayBuffer::new(vec![0, 0, 9], 3, 1);
        let stats = summarize(&buf);
        assert_eq!(stats.nonzero_percentage, 33.33);
    }
}
