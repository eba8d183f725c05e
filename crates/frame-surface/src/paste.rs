//! Bitmap paste with aspect-preserving fit modes.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use image::RgbImage;

use crate::Canvas;

/// How a source bitmap is mapped onto its destination rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum FitMode {
    /// Letterbox: the whole image is visible, possibly leaving margins.
    #[default]
    Contain,
    /// Fill the destination, cropping whatever overflows.
    Cover,
    /// Ignore aspect ratio and fill the destination exactly.
    Stretch,
}

impl FitMode {
    /// Parse a fit mode name; unknown names fall back to `Contain`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "cover" => FitMode::Cover,
            "stretch" => FitMode::Stretch,
            _ => FitMode::Contain,
        }
    }
}

/// Paste `src` into `dest` on the canvas using nearest-neighbor sampling.
///
/// Pixels falling outside the canvas are dropped by the canvas itself, so
/// a destination rectangle that overflows the frame degrades gracefully.
/// Empty sources or destinations draw nothing.
pub fn paste_image(canvas: &mut Canvas, src: &RgbImage, dest: Rectangle, mode: FitMode) {
    let (src_w, src_h) = src.dimensions();
    if src_w == 0 || src_h == 0 || dest.size.width == 0 || dest.size.height == 0 {
        return;
    }

    let dest_w = dest.size.width as f32;
    let dest_h = dest.size.height as f32;
    let sw = src_w as f32;
    let sh = src_h as f32;

    // Target rectangle of the scaled image and the visible crop of the
    // source, both derived from the fit mode.
    let (target, scale_x, scale_y, src_off_x, src_off_y) = match mode {
        FitMode::Stretch => (dest, sw / dest_w, sh / dest_h, 0.0, 0.0),
        FitMode::Contain => {
            let scale = (dest_w / sw).min(dest_h / sh);
            let out_w = (sw * scale).round().max(1.0) as u32;
            let out_h = (sh * scale).round().max(1.0) as u32;
            let off = Point::new(
                dest.top_left.x + ((dest.size.width - out_w.min(dest.size.width)) / 2) as i32,
                dest.top_left.y + ((dest.size.height - out_h.min(dest.size.height)) / 2) as i32,
            );
            (
                Rectangle::new(off, Size::new(out_w, out_h)),
                1.0 / scale,
                1.0 / scale,
                0.0,
                0.0,
            )
        }
        FitMode::Cover => {
            let scale = (dest_w / sw).max(dest_h / sh);
            // Crop the source so the scaled result exactly covers dest.
            let crop_w = dest_w / scale;
            let crop_h = dest_h / scale;
            let off_x = (sw - crop_w) / 2.0;
            let off_y = (sh - crop_h) / 2.0;
            (dest, 1.0 / scale, 1.0 / scale, off_x, off_y)
        }
    };

    for dy in 0..target.size.height {
        for dx in 0..target.size.width {
            let sx = (dx as f32 * scale_x + src_off_x) as u32;
            let sy = (dy as f32 * scale_y + src_off_y) as u32;
            let sx = sx.min(src_w - 1);
            let sy = sy.min(src_h - 1);
            let px = src.get_pixel(sx, sy);
            let x = target.top_left.x + dx as i32;
            let y = target.top_left.y + dy as i32;
            if x >= 0 && y >= 0 {
                #[allow(clippy::cast_sign_loss)]
                canvas.set_pixel(x as u32, y as u32, Rgb888::new(px.0[0], px.0[1], px.0[2]));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn solid(w: u32, h: u32, rgb: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(w, h, image::Rgb(rgb))
    }

    #[test]
    fn stretch_fills_destination() {
        let mut canvas = Canvas::new(Size::new(20, 20)).unwrap();
        let src = solid(2, 2, [255, 0, 0]);
        let dest = Rectangle::new(Point::new(2, 2), Size::new(10, 6));
        paste_image(&mut canvas, &src, dest, FitMode::Stretch);

        assert_eq!(canvas.pixel(2, 2), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(canvas.pixel(11, 7), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(canvas.pixel(12, 8), Some(Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn contain_letterboxes_wide_image() {
        let mut canvas = Canvas::new(Size::new(20, 20)).unwrap();
        // 2:1 image into a square: top and bottom margins stay black.
        let src = solid(10, 5, [0, 255, 0]);
        let dest = Rectangle::new(Point::zero(), Size::new(20, 20));
        paste_image(&mut canvas, &src, dest, FitMode::Contain);

        assert_eq!(canvas.pixel(10, 10), Some(Rgb888::new(0, 255, 0)));
        assert_eq!(canvas.pixel(10, 0), Some(Rgb888::new(0, 0, 0)));
        assert_eq!(canvas.pixel(10, 19), Some(Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn cover_fills_every_destination_pixel() {
        let mut canvas = Canvas::new(Size::new(20, 20)).unwrap();
        let src = solid(10, 5, [0, 0, 255]);
        let dest = Rectangle::new(Point::zero(), Size::new(20, 20));
        paste_image(&mut canvas, &src, dest, FitMode::Cover);

        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(canvas.pixel(x, y), Some(Rgb888::new(0, 0, 255)));
            }
        }
    }

    #[test]
    fn empty_inputs_are_noops() {
        let mut canvas = Canvas::new(Size::new(8, 8)).unwrap();
        let src = solid(4, 4, [9, 9, 9]);
        paste_image(
            &mut canvas,
            &src,
            Rectangle::new(Point::zero(), Size::zero()),
            FitMode::Contain,
        );
        assert!(canvas.pixels().iter().all(|px| *px == Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn fit_mode_names() {
        assert_eq!(FitMode::from_name("cover"), FitMode::Cover);
        assert_eq!(FitMode::from_name("stretch"), FitMode::Stretch);
        assert_eq!(FitMode::from_name("contain"), FitMode::Contain);
        assert_eq!(FitMode::from_name("bogus"), FitMode::Contain);
    }
}
