//! CPU framebuffer canvas for dashboard frame rendering
//!
//! The engine draws through the `embedded-graphics` [`DrawTarget`]
//! abstraction; this crate provides the concrete target used for device
//! uploads, previews and tests:
//!
//! - [`Canvas`] — an RGB888 framebuffer with bounds-checked pixel access
//! - [`paste_image`] — bitmap paste with contain/cover/stretch fit modes
//! - [`encode_png`] / [`encode_jpeg`] — export of the finished canvas
//!
//! # Example
//!
//! ```
//! use frame_surface::Canvas;
//! use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::{PrimitiveStyle, Rectangle}};
//!
//! let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
//! Rectangle::new(Point::new(10, 10), Size::new(40, 20))
//!     .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0, 255, 255)))
//!     .draw(&mut canvas)
//!     .unwrap();
//!
//! let png = frame_surface::encode_png(&canvas).unwrap();
//! assert!(!png.is_empty());
//! ```
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget

mod canvas;
mod encode;
mod paste;

pub use canvas::{Canvas, CanvasError};
pub use encode::{encode_jpeg, encode_png, EncodeError};
pub use paste::{paste_image, FitMode};
