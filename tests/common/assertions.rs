//! Assertion helpers for tests.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use pretty_assertions::assert_eq;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n";

/// Assert the bytes are a PNG that decodes to the expected pixel size.
pub fn assert_png_size(png: &[u8], width: u32, height: u32) {
    assert!(
        png.len() > PNG_MAGIC.len(),
        "PNG should have reasonable size, got {} bytes",
        png.len()
    );
    assert_eq!(&png[..PNG_MAGIC.len()], PNG_MAGIC, "Expected PNG magic bytes");
    let img = image::load_from_memory(png).expect("decode PNG");
    assert_eq!(
        (img.width(), img.height()),
        (width, height),
        "Decoded PNG has wrong pixel size"
    );
}

/// Assert a base64 string decodes to a PNG and return the raw bytes.
pub fn assert_base64_png(b64: &str) -> Vec<u8> {
    let bytes = STANDARD.decode(b64).expect("valid base64");
    assert!(
        bytes.len() > PNG_MAGIC.len(),
        "Decoded PNG should have reasonable size"
    );
    assert_eq!(&bytes[..PNG_MAGIC.len()], PNG_MAGIC, "Expected PNG magic bytes");
    bytes
}

/// Decode a base64 PNG to grayscale pixels.
pub fn decode_base64_gray(b64: &str) -> image::GrayImage {
    let bytes = assert_base64_png(b64);
    image::load_from_memory(&bytes).expect("decode PNG").to_luma8()
}
