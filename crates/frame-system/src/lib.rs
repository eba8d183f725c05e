//! Render context, theme and drawing primitives
//!
//! The middle layer of the pixelframe engine: everything a widget needs
//! to draw — a slot-scoped coordinate system, theme-aware colors, the
//! font ladder and the mid-level primitives (bars, rings, arcs,
//! sparklines, icons) — expressed over any
//! `DrawTarget<Color = Rgb888>`.
//!
//! # Architecture
//!
//! - [`color`] / [`Theme`]: tagged colors resolved at render time
//! - [`font`]: mono-font ladder with integer magnification + text fit
//! - [`RenderContext`]: local coordinates, bounds diagnostics, drawing
//! - [`primitives`] / [`icon`]: shared drawing routines
//!
//! # Example
//!
//! ```
//! use embedded_graphics::{prelude::*, primitives::Rectangle};
//! use frame_surface::Canvas;
//! use frame_system::prelude::*;
//!
//! let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
//! let slot = Rectangle::new(Point::new(8, 8), Size::new(108, 108));
//! let mut ctx = RenderContext::new(&mut canvas, slot, Theme::classic());
//!
//! let font = ctx.font(FontClass::Large, true);
//! ctx.draw_text("21.5°", Point::new(54, 40), &font, frame_system::color::CYAN, Anchor::Center)
//!     .unwrap();
//! ```

pub mod color;
pub mod context;
pub mod font;
pub mod icon;
pub mod primitives;
pub mod surface;
mod theme;

pub use color::ColorSpec;
pub use context::{size_category, Anchor, FitMode, RenderContext, SizeCategory};
pub use font::{FontClass, ScaledFont};
pub use surface::Surface;
pub use theme::Theme;

pub mod prelude {
    //! Convenience re-exports for widget and component code.
    pub use crate::color::ColorSpec;
    pub use crate::context::{size_category, Anchor, FitMode, RenderContext, SizeCategory};
    pub use crate::font::{FontClass, ScaledFont};
    pub use crate::surface::Surface;
    pub use crate::theme::Theme;
}
