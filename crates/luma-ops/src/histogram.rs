//! Intensity histograms over the full 8-bit range.

use crate::buffer::GrayBuffer;

/// Number of histogram bins, one per representable intensity.
pub const HISTOGRAM_BINS: usize = 256;

/// Counts how many pixels hold each intensity value.
///
/// Bin `i` counts pixels with intensity exactly `i`; the counts always sum
/// to the pixel count. `u64` bins keep the sum exact for any image that fits
/// in memory.
///
/// # Example
///
/// ```
/// use luma_ops::{histogram_256, GrayBuffer};
///
/// let buf = GrayBuffer::new(vec![0, 0, 7, 255], 4, 1);
/// let hist = histogram_256(&buf);
/// assert_eq!(hist[0], 2);
/// assert_eq!(hist[7], 1);
/// assert_eq!(hist[255], 1);
/// assert_eq!(hist.iter().sum::<u64>(), 4);
/// ```
pub fn histogram_256(buf: &GrayBuffer) -> [u64; HISTOGRAM_BINS] {
    let mut bins = [0u64; HISTOGRAM_BINS];
    for &v in buf.data() {
        bins[v as usize] += 1;
    }
    bins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_sum_to_pixel_count() {
        let buf = GrayBuffer::new((0..200).map(|i| (i % 7) as u8).collect(), 20, 10);
        let hist = histogram_256(&buf);
        assert_eq!(hist.iter().sum::<u64>(), 200);
    }

    #[test]
    fn test_uniform_ramp_hits_every_bin_once() {
        let buf = GrayBuffer::new((0..=255).collect(), 256, 1);
        let hist = histogram_256(&buf);
        assert!(hist.iter().all(|&c| c == 1));
    }

    #[test]
    fn test_empty_buffer_gives_empty_histogram() {
        let buf = GrayBuffer::new(Vec::new(), 0, 0);
        let hist = histogram_256(&buf);
        assert_eq!(hist.iter().sum::<u64>(), 0);
    }
}
