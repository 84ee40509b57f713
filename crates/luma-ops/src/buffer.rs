//! GrayBuffer: the 8-bit grayscale raster every operation in this crate
//! consumes and produces.
//!
//! [`GrayBuffer`] wraps row-major `u8` intensities with dimension metadata.
//! It deliberately knows nothing about file formats or color; decoding an
//! image into one of these is the caller's job.

/// An 8-bit grayscale raster, one `u8` intensity per pixel in row-major order.
///
/// Intensity 0 is black and 255 is white. Width and height are in pixels and
/// `data.len()` always equals `width * height`.
///
/// # Example
///
/// ```
/// use luma_ops::GrayBuffer;
///
/// let buf = GrayBuffer::new(vec![10, 20, 30, 40], 2, 2);
/// assert_eq!(buf.width(), 2);
/// assert_eq!(buf.height(), 2);
/// assert_eq!(buf.get(1, 1), 40);
/// assert_eq!(buf.min_max(), Some((10, 40)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayBuffer {
    /// Pixel intensities, one per pixel, row-major order.
    data: Vec<u8>,
    /// Image width in pixels.
    width: usize,
    /// Image height in pixels.
    height: usize,
}

impl GrayBuffer {
    /// Create a new `GrayBuffer` from raw intensities.
    ///
    /// # Arguments
    ///
    /// * `data` - Intensities, one `u8` per pixel, in row-major order.
    /// * `width` - Image width in pixels.
    /// * `height` - Image height in pixels.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `data.len() == width * height`.
    pub fn new(data: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            width * height,
            "data length ({}) must match width * height ({}x{}={})",
            data.len(),
            width,
            height,
            width * height,
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// Create a buffer of the given dimensions with every pixel set to `value`.
    pub fn filled(value: u8, width: usize, height: usize) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Returns the pixel intensities as a slice, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns the raw intensities.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the intensity at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics when `x >= width` or `y >= height`.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[y * self.width + x]
    }

    /// Iterates over the rows of the image, each a `width`-long slice.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.width.max(1))
    }

    /// Returns the minimum and maximum intensity, or `None` for an empty buffer.
    pub fn min_max(&self) -> Option<(u8, u8)> {
        let first = *self.data.first()?;
        let (mut min, mut max) = (first, first);
        for &v in &self.data[1..] {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        Some((min, max))
    }
}
