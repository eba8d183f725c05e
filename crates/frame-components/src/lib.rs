//! Declarative component tree for dashboard frame rendering
//!
//! Widgets declare WHAT to show as an immutable tree of [`Component`]
//! nodes; this crate solves HOW to arrange it. Every node implements the
//! same two-method contract:
//!
//! - `measure(ctx, max) -> Size` — preferred size under an upper bound,
//!   pure
//! - `render(ctx, bounds)` — draw within exactly the given rectangle
//!
//! Containers subdivide their rectangle among children (a simplified
//! single-level flexbox), priority containers drop low-rank children
//! when space runs out, and the composite display nodes encapsulate
//! whole widget faces.
//!
//! # Example
//!
//! ```
//! use frame_components::prelude::*;
//!
//! let tree: Component = Column::new(vec![
//!     Text::new("75%").font(FontClass::Medium).bold().into(),
//!     Bar::new(75.0).into(),
//!     Text::new("CPU")
//!         .font(FontClass::Tiny)
//!         .color(ColorSpec::TextSecondary)
//!         .into(),
//! ])
//! .gap(4)
//! .into();
//!
//! assert_eq!(tree, tree.clone());
//! ```

mod component;
pub mod containers;
pub mod displays;
pub mod math;
pub mod primitives;
pub mod priority;
pub mod textutil;

pub use component::Component;
pub use containers::{Adaptive, Align, Center, Column, Justify, Padding, Row, Stack};
pub use displays::{
    camera_placeholder, condition_icon, format_time, weather_placeholder, ArcGaugeDisplay,
    AttributeItem, AttributeListDisplay, BarGaugeDisplay, BarHeightStyle, CameraImage,
    CenteredValueDisplay, ChartDisplay, ClockDisplay, ForecastDay, IconValueDisplay, MediaIdle,
    MultiProgressDisplay, NowPlaying, ProgressDisplay, ProgressItem, RingGaugeDisplay,
    StatusIndicator, StatusItem, StatusListDisplay, WeatherDisplay,
};
pub use primitives::{ArcGauge, Bar, FillText, HAlign, Hierarchy, Icon, Panel, Ring, Spacer, Text};
pub use priority::{Prioritized, PriorityColumn, PriorityRow, PRIORITY_CRITICAL};

pub mod prelude {
    //! Convenience re-exports for widget code.
    pub use crate::component::Component;
    pub use crate::containers::{Adaptive, Align, Center, Column, Justify, Padding, Row, Stack};
    pub use crate::displays::*;
    pub use crate::primitives::{
        ArcGauge, Bar, FillText, HAlign, Hierarchy, Icon, Panel, Ring, Spacer, Text,
    };
    pub use crate::priority::{Prioritized, PriorityColumn, PriorityRow, PRIORITY_CRITICAL};
    pub use frame_system::prelude::*;
}
