//! Test fixtures: small synthetic images staged in a temporary directory.

use image::{GrayImage, Luma, Rgb, RgbImage};
use tempfile::TempDir;

/// Fixture filenames mirroring the course image naming scheme
pub mod names {
    /// Diagonal gradient, 16x16 TIFF
    pub const GRADIENT: &str = "Fig0226(galaxy_pair_original).tif";

    /// Same gradient with a bright 4x4 block burned in
    pub const MARKED: &str = "Fig0226(galaxy_pair_final).tif";

    /// Uniform mid-gray, 16x16
    pub const FLAT: &str = "flat.png";

    /// Uniform mid-gray at half the linear size
    pub const FLAT_SMALL: &str = "flat_small.png";

    /// RGB image whose channels are all equal, to exercise luma conversion
    pub const COLOR: &str = "color.png";
}

/// Diagonal gradient, `3x + 5y` at each pixel.
pub fn gradient(w: u32, h: u32) -> GrayImage {
    GrayImage::from_fn(w, h, |x, y| Luma([(x * 3 + y * 5) as u8]))
}

/// Gradient with a white 4x4 block at (4..8, 4..8).
pub fn marked_gradient(w: u32, h: u32) -> GrayImage {
    let mut img = gradient(w, h);
    for y in 4..8 {
        for x in 4..8 {
            img.put_pixel(x, y, Luma([255]));
        }
    }
    img
}

pub fn constant(w: u32, h: u32, value: u8) -> GrayImage {
    GrayImage::from_pixel(w, h, Luma([value]))
}

/// RGB image with r == g == b everywhere, so luma equals the channel value.
pub fn equal_channel_color(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| {
        let v = (x * 7 + y * 11) as u8;
        Rgb([v, v, v])
    })
}

/// Writes the standard fixture set into a fresh temporary directory.
pub fn stage_default_images() -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    let save = |name: &str, img: &GrayImage| {
        img.save(dir.path().join(name)).expect("save fixture");
    };
    save(names::GRADIENT, &gradient(16, 16));
    save(names::MARKED, &marked_gradient(16, 16));
    save(names::FLAT, &constant(16, 16, 128));
    save(names::FLAT_SMALL, &constant(8, 8, 128));
    equal_channel_color(16, 16)
        .save(dir.path().join(names::COLOR))
        .expect("save fixture");
    dir
}
