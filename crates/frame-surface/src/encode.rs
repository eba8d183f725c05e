//! PNG/JPEG export of a finished canvas.

use std::io::Cursor;

use image::{ImageFormat, RgbImage};

use crate::Canvas;

/// Error raised when a canvas cannot be encoded.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The codec rejected the frame.
    #[error("image encoding failed: {0}")]
    Codec(#[from] image::ImageError),

    /// The canvas buffer could not be reinterpreted as an image.
    ///
    /// Cannot happen for canvases built through [`Canvas::new`]; kept so
    /// the conversion does not panic.
    #[error("canvas buffer does not match its dimensions")]
    BufferMismatch,
}

fn to_rgb_image(canvas: &Canvas) -> Result<RgbImage, EncodeError> {
    RgbImage::from_raw(canvas.width(), canvas.height(), canvas.to_rgb_bytes())
        .ok_or(EncodeError::BufferMismatch)
}

/// Encode the canvas as PNG bytes.
///
/// # Errors
///
/// Returns [`EncodeError`] when the codec fails.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, EncodeError> {
    let img = to_rgb_image(canvas)?;
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

/// Encode the canvas as JPEG bytes at the given quality (1–100).
///
/// Some devices only accept JPEG uploads; quality is clamped to the
/// codec's valid range.
///
/// # Errors
///
/// Returns [`EncodeError`] when the codec fails.
pub fn encode_jpeg(canvas: &Canvas, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let img = to_rgb_image(canvas)?;
    let mut out = Cursor::new(Vec::new());
    let encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut out, quality.clamp(1, 100));
    img.write_with_encoder(encoder)?;
    Ok(out.into_inner())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::Rgb888;
    use embedded_graphics::prelude::*;

    #[test]
    fn png_round_trip_dimensions() {
        let mut canvas = Canvas::new(Size::new(32, 24)).unwrap();
        canvas.fill(Rgb888::new(10, 20, 30));

        let bytes = encode_png(&canvas).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (32, 24));
        assert_eq!(decoded.get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn jpeg_encodes() {
        let canvas = Canvas::new(Size::new(16, 16)).unwrap();
        let bytes = encode_jpeg(&canvas, 85).unwrap();
        assert!(!bytes.is_empty());
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 16);
    }
}
