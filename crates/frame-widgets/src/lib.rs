//! Widget set for dashboard frame rendering
//!
//! A widget takes a typed [`WidgetConfig`] and an immutable
//! [`WidgetState`] snapshot and produces a component tree — nothing
//! else. Widgets never draw and never fetch; given identical inputs,
//! [`Widget::render`] returns a structurally equal tree, which is what
//! makes whole render passes reproducible.
//!
//! Construction goes through the explicit
//! [registry](registry::WIDGET_REGISTRY): a string tag maps to a
//! constructor, and unknown tags degrade to a no-op widget.
//!
//! # Example
//!
//! ```
//! use frame_widgets::prelude::*;
//!
//! let config = WidgetConfig::new("entity", 1).entity("sensor.temp");
//! let widget = Widget::from_config(config);
//! assert_eq!(widget.entities(), vec!["sensor.temp"]);
//! ```

mod attribute_list;
mod camera;
mod chart;
mod clock;
pub mod config;
mod entity;
mod gauge;
mod helpers;
mod media;
mod progress;
pub mod registry;
pub mod state;
mod status;
mod text;
mod weather;
mod widget;

pub use attribute_list::AttributeListWidget;
pub use camera::CameraWidget;
pub use chart::ChartWidget;
pub use clock::ClockWidget;
pub use config::{parse_color, WidgetConfig};
pub use entity::EntityWidget;
pub use gauge::GaugeWidget;
pub use media::MediaWidget;
pub use progress::{MultiProgressWidget, ProgressWidget};
pub use state::{EntityState, WidgetState};
pub use status::{StatusListWidget, StatusWidget};
pub use text::TextWidget;
pub use weather::WeatherWidget;
pub use widget::{NoopWidget, Widget};

pub mod prelude {
    //! Convenience re-exports for layout and preview code.
    pub use crate::config::WidgetConfig;
    pub use crate::registry::WIDGET_REGISTRY;
    pub use crate::state::{EntityState, WidgetState};
    pub use crate::widget::Widget;
    pub use frame_components::prelude::*;
}
