//! Headless testing utilities for frame rendering
//!
//! Wraps a [`Canvas`] with region/pixel assertions so tests can check
//! that widgets actually put ink where their slots are, without a golden
//! image for every case.
//!
//! # Quick start
//!
//! ```
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//! use frame_testing::TestCanvas;
//!
//! let mut t = TestCanvas::new(100, 100);
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0, 255, 255)))
//!     .draw(&mut *t)
//!     .unwrap();
//!
//! t.assert_pixel(20, 15, Rgb888::new(0, 255, 255));
//! assert!(t.region_has_ink(Rectangle::new(Point::new(10, 10), Size::new(40, 20))));
//! ```

use core::ops::{Deref, DerefMut};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_surface::Canvas;

/// Headless canvas wrapper with assertion helpers.
///
/// Derefs to [`Canvas`], which implements `DrawTarget`, so engine code
/// and embedded-graphics primitives draw on it directly.
pub struct TestCanvas {
    canvas: Canvas,
    background: Rgb888,
}

impl TestCanvas {
    /// New black canvas.
    ///
    /// # Panics
    ///
    /// Panics on zero dimensions — test scaffolding fails fast.
    #[allow(clippy::expect_used)]
    pub fn new(width: u32, height: u32) -> Self {
        let canvas = Canvas::new(Size::new(width, height)).expect("test canvas dimensions");
        Self {
            canvas,
            background: Rgb888::new(0, 0, 0),
        }
    }

    /// Declare a non-black background so ink detection stays accurate.
    #[must_use]
    pub fn with_background(mut self, background: Rgb888) -> Self {
        self.canvas.fill(background);
        self.background = background;
        self
    }

    /// The wrapped canvas.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Assert one pixel's exact color.
    ///
    /// # Panics
    ///
    /// Panics with a diagnostic when the pixel differs or is out of
    /// bounds.
    pub fn assert_pixel(&self, x: u32, y: u32, expected: Rgb888) {
        match self.canvas.pixel(x, y) {
            Some(actual) => assert_eq!(
                actual, expected,
                "pixel ({x}, {y}) is {actual:?}, expected {expected:?}"
            ),
            None => panic!("pixel ({x}, {y}) outside {:?}", self.canvas.size()),
        }
    }

    /// Count non-background pixels inside a region.
    pub fn ink_count(&self, region: Rectangle) -> usize {
        let mut count = 0;
        for dy in 0..region.size.height {
            for dx in 0..region.size.width {
                let x = region.top_left.x + dx as i32;
                let y = region.top_left.y + dy as i32;
                if x < 0 || y < 0 {
                    continue;
                }
                #[allow(clippy::cast_sign_loss)]
                if let Some(px) = self.canvas.pixel(x as u32, y as u32) {
                    if px != self.background {
                        count += 1;
                    }
                }
            }
        }
        count
    }

    /// True when the region contains any non-background pixel.
    pub fn region_has_ink(&self, region: Rectangle) -> bool {
        self.ink_count(region) > 0
    }

    /// Assert a region is entirely background.
    ///
    /// # Panics
    ///
    /// Panics when any pixel in the region differs from the background.
    pub fn assert_blank(&self, region: Rectangle) {
        let ink = self.ink_count(region);
        assert_eq!(ink, 0, "expected blank region {region:?}, found {ink} inked pixels");
    }

    /// Encode and re-decode as PNG, returning the decoded dimensions.
    ///
    /// # Panics
    ///
    /// Panics when encoding or decoding fails.
    #[allow(clippy::expect_used)]
    pub fn png_round_trip(&self) -> (u32, u32) {
        let bytes = frame_surface::encode_png(&self.canvas).expect("png encode");
        let decoded = image::load_from_memory(&bytes).expect("png decode");
        (decoded.width(), decoded.height())
    }
}

impl Deref for TestCanvas {
    type Target = Canvas;

    fn deref(&self) -> &Self::Target {
        &self.canvas
    }
}

impl DerefMut for TestCanvas {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.canvas
    }
}
