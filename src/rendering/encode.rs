//! PNG encoding and base64 wrapping for transport.
//!
//! Image panels travel twice: grayscale pixel data is PNG-encoded and
//! base64-wrapped so it can be embedded in an SVG `<image>` element, and the
//! rasterized figure itself ships to the caller the same way.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use luma_ops::GrayBuffer;

use crate::error::RenderError;

/// Encodes a grayscale buffer as an 8-bit grayscale PNG.
pub fn gray_to_png(buf: &GrayBuffer) -> Result<Vec<u8>, RenderError> {
    encode_png(
        buf.width() as u32,
        buf.height() as u32,
        png::ColorType::Grayscale,
        buf.data(),
    )
}

/// Encodes packed RGB bytes (3 per pixel) as an 8-bit RGB PNG.
pub fn rgb_to_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    encode_png(width, height, png::ColorType::Rgb, rgb)
}

/// Base64 text form of encoded image bytes.
pub fn to_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Convenience: grayscale buffer straight to a base64 PNG string.
pub fn gray_to_base64_png(buf: &GrayBuffer) -> Result<String, RenderError> {
    Ok(to_base64(&gray_to_png(buf)?))
}

fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> Result<Vec<u8>, RenderError> {
    let mut out = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_png_round_trips() {
        let buf = GrayBuffer::new((0..40).collect(), 8, 5);
        let bytes = gray_to_png(&buf).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_luma8();
        assert_eq!(decoded.dimensions(), (8, 5));
        assert_eq!(decoded.as_raw().as_slice(), buf.data());
    }

    #[test]
    fn test_rgb_png_round_trips() {
        let rgb: Vec<u8> = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
        let bytes = rgb_to_png(&rgb, 2, 2).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.as_raw().as_slice(), rgb.as_slice());
    }

    #[test]
    fn test_base64_decodes_back() {
        let buf = GrayBuffer::filled(7, 3, 3);
        let b64 = gray_to_base64_png(&buf).unwrap();
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(b64)
            .unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_mismatched_data_length_errors() {
        let err = rgb_to_png(&[0, 0, 0], 2, 2).unwrap_err();
        assert!(matches!(err, RenderError::PngEncode(_)));
    }
}
