//! Screen layouts for dashboard frame rendering
//!
//! A [`Layout`] partitions the display into rectangular [`Slot`]s
//! according to a named geometric [`LayoutScheme`] and assigns at most
//! one widget per slot. Slot geometry is a pure function of the scheme
//! parameters and target dimensions; rendering walks the slots, scopes a
//! fresh render context to each assigned one and draws the widget's
//! component tree inside it.
//!
//! # Example
//!
//! ```
//! use embedded_graphics::prelude::*;
//! use frame_layouts::{Layout, LayoutScheme};
//! use frame_widgets::{Widget, WidgetConfig};
//!
//! let mut layout = Layout::new(
//!     LayoutScheme::Grid { rows: 2, cols: 2 },
//!     Size::new(240, 240),
//! )
//! .unwrap();
//! layout.set_widget(0, Widget::from_config(WidgetConfig::new("clock", 0)));
//!
//! assert_eq!(layout.slot_count(), 4);
//! ```

mod layout;
mod scheme;
mod slot;

pub use layout::{Layout, LayoutError};
pub use scheme::{
    compute_slots, scheme_from_name, Corner, LayoutScheme, SplitAxis, DEFAULT_SCHEME,
    LAYOUT_REGISTRY,
};
pub use slot::Slot;
