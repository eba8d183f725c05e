//! RGB888 framebuffer with a `DrawTarget` implementation.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

/// Error raised when a canvas cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    /// A zero-width or zero-height canvas was requested.
    ///
    /// Degenerate target dimensions indicate a configuration bug upstream
    /// and fail loudly instead of producing an empty frame silently.
    #[error("canvas dimensions must be nonzero, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}

/// CPU-based RGB framebuffer the engine renders into.
///
/// Out-of-bounds writes are dropped rather than wrapping or panicking, so
/// a widget that strays past its slot degrades instead of corrupting the
/// frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb888>,
}

impl Canvas {
    /// Create a new canvas filled with black.
    ///
    /// # Errors
    ///
    /// Returns [`CanvasError::InvalidDimensions`] when either dimension
    /// is zero.
    pub fn new(size: Size) -> Result<Self, CanvasError> {
        if size.width == 0 || size.height == 0 {
            return Err(CanvasError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        let len = (size.width as usize) * (size.height as usize);
        Ok(Self {
            width: size.width,
            height: size.height,
            pixels: vec![Rgb888::new(0, 0, 0); len],
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Set a pixel, ignoring coordinates outside the canvas.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb888) {
        if x < self.width && y < self.height {
            let idx = (y as usize) * (self.width as usize) + x as usize;
            if let Some(px) = self.pixels.get_mut(idx) {
                *px = color;
            }
        }
    }

    /// Get a pixel, `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb888> {
        if x < self.width && y < self.height {
            self.pixels
                .get((y as usize) * (self.width as usize) + x as usize)
                .copied()
        } else {
            None
        }
    }

    /// Fill the whole canvas with one color.
    pub fn fill(&mut self, color: Rgb888) {
        self.pixels.fill(color);
    }

    /// Clear the canvas to black.
    pub fn clear(&mut self) {
        self.fill(Rgb888::new(0, 0, 0));
    }

    /// Raw pixel buffer in row-major order.
    pub fn pixels(&self) -> &[Rgb888] {
        &self.pixels
    }

    /// Flattened `[r, g, b, r, g, b, ...]` byte buffer (for encoders).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for px in &self.pixels {
            bytes.push(px.r());
            bytes.push(px.g());
            bytes.push(px.b());
        }
        bytes
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if point.x >= 0 && point.y >= 0 {
                #[allow(clippy::cast_sign_loss)]
                self.set_pixel(point.x as u32, point.y as u32, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

    #[test]
    fn new_starts_black() {
        let canvas = Canvas::new(Size::new(4, 4)).unwrap();
        assert_eq!(canvas.pixel(0, 0), Some(Rgb888::new(0, 0, 0)));
        assert_eq!(canvas.pixels().len(), 16);
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(matches!(
            Canvas::new(Size::new(0, 240)),
            Err(CanvasError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Canvas::new(Size::new(240, 0)),
            Err(CanvasError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn set_and_get_pixel() {
        let mut canvas = Canvas::new(Size::new(8, 8)).unwrap();
        canvas.set_pixel(3, 5, Rgb888::new(255, 0, 0));
        assert_eq!(canvas.pixel(3, 5), Some(Rgb888::new(255, 0, 0)));
    }

    #[test]
    fn out_of_bounds_writes_dropped() {
        let mut canvas = Canvas::new(Size::new(8, 8)).unwrap();
        canvas.set_pixel(8, 0, Rgb888::new(255, 0, 0));
        canvas.set_pixel(0, 100, Rgb888::new(255, 0, 0));
        assert!(canvas
            .pixels()
            .iter()
            .all(|px| *px == Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn out_of_bounds_reads_are_none() {
        let canvas = Canvas::new(Size::new(8, 8)).unwrap();
        assert_eq!(canvas.pixel(8, 0), None);
        assert_eq!(canvas.pixel(0, 8), None);
    }

    #[test]
    fn draw_target_rectangle() {
        let mut canvas = Canvas::new(Size::new(16, 16)).unwrap();
        Rectangle::new(Point::new(2, 2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0, 255, 0)))
            .draw(&mut canvas)
            .unwrap();

        assert_eq!(canvas.pixel(2, 2), Some(Rgb888::new(0, 255, 0)));
        assert_eq!(canvas.pixel(5, 5), Some(Rgb888::new(0, 255, 0)));
        assert_eq!(canvas.pixel(6, 6), Some(Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn negative_coordinates_ignored() {
        let mut canvas = Canvas::new(Size::new(8, 8)).unwrap();
        Rectangle::new(Point::new(-2, -2), Size::new(3, 3))
            .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0, 0, 255)))
            .draw(&mut canvas)
            .unwrap();

        // Only the in-bounds corner lands
        assert_eq!(canvas.pixel(0, 0), Some(Rgb888::new(0, 0, 255)));
    }

    #[test]
    fn rgb_bytes_layout() {
        let mut canvas = Canvas::new(Size::new(2, 1)).unwrap();
        canvas.set_pixel(0, 0, Rgb888::new(1, 2, 3));
        canvas.set_pixel(1, 0, Rgb888::new(4, 5, 6));
        assert_eq!(canvas.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }
}
