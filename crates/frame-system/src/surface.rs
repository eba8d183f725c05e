//! The drawing-surface contract the engine renders through.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_surface::{Canvas, FitMode};
use image::RgbImage;

/// A raster surface the engine can draw on.
///
/// Extends the `embedded-graphics` [`DrawTarget`] contract with the one
/// primitive the trait cannot express: bitmap paste with a fit mode
/// (needed by camera widgets). Surfaces without direct pixel access can
/// implement it by drawing a placeholder frame.
pub trait Surface: DrawTarget<Color = Rgb888> {
    /// Paste `source` into `rect` using the given fit mode.
    fn paste_image(
        &mut self,
        source: &RgbImage,
        rect: Rectangle,
        mode: FitMode,
    ) -> Result<(), Self::Error>;
}

impl Surface for Canvas {
    fn paste_image(
        &mut self,
        source: &RgbImage,
        rect: Rectangle,
        mode: FitMode,
    ) -> Result<(), Self::Error> {
        frame_surface::paste_image(self, source, rect, mode);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn canvas_pastes_pixels() {
        let mut canvas = Canvas::new(Size::new(16, 16)).unwrap();
        let img = RgbImage::from_pixel(2, 2, image::Rgb([7, 8, 9]));
        canvas
            .paste_image(
                &img,
                Rectangle::new(Point::new(4, 4), Size::new(4, 4)),
                FitMode::Stretch,
            )
            .unwrap();
        assert_eq!(canvas.pixel(5, 5), Some(Rgb888::new(7, 8, 9)));
    }
}
