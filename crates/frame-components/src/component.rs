//! The closed component node set and its exhaustive dispatch.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::containers::{Adaptive, Center, Column, Padding, Row, Stack};
use crate::displays::{
    ArcGaugeDisplay, AttributeListDisplay, BarGaugeDisplay, CameraImage, CenteredValueDisplay,
    ChartDisplay, ClockDisplay, IconValueDisplay, MediaIdle, MultiProgressDisplay, NowPlaying,
    ProgressDisplay, RingGaugeDisplay, StatusIndicator, StatusListDisplay, WeatherDisplay,
};
use crate::primitives::{ArcGauge, Bar, FillText, Icon, Panel, Ring, Spacer, Sparkline, Text};
use crate::priority::{Prioritized, PriorityColumn, PriorityRow};

/// A renderable node of the component tree.
///
/// The node set is closed: both `measure` and `render` dispatch with an
/// exhaustive match, so adding a variant is a compile-time checklist of
/// every place that must handle it. Trees are plain immutable values —
/// `Clone` for reuse, `PartialEq` so determinism is assertable by
/// structural equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Text in a named font class.
    Text(Text),
    /// Named icon glyph.
    Icon(Icon),
    /// Horizontal progress bar.
    Bar(Bar),
    /// Full-circle ring gauge.
    Ring(Ring),
    /// 270° arc gauge.
    Arc(ArcGauge),
    /// Sparkline chart.
    Sparkline(Sparkline),
    /// Card/panel background.
    Panel(Panel),
    /// Flexible spacer.
    Spacer(Spacer),
    /// Renders nothing and occupies no space; the typed stand-in for a
    /// conditional branch that produced nothing.
    Empty,
    /// Text filling the available space.
    FillText(FillText),

    /// Horizontal container.
    Row(Row),
    /// Vertical container.
    Column(Column),
    /// Overlay container.
    Stack(Stack),
    /// Row with column fallback.
    Adaptive(Adaptive),
    /// Insets around one child.
    Padding(Padding),
    /// Centers one child.
    Center(Center),

    /// Priority metadata wrapper.
    Prioritized(Prioritized),
    /// Row with priority-based hiding.
    PriorityRow(PriorityRow),
    /// Column with priority-based hiding.
    PriorityColumn(PriorityColumn),

    /// Clock face.
    Clock(ClockDisplay),
    /// History chart face.
    Chart(ChartDisplay),
    /// Weather face.
    Weather(WeatherDisplay),
    /// Bar-style gauge face.
    GaugeBar(BarGaugeDisplay),
    /// Ring-style gauge face.
    GaugeRing(RingGaugeDisplay),
    /// Arc-style gauge face.
    GaugeArc(ArcGaugeDisplay),
    /// Icon + value + label readout.
    IconValue(IconValueDisplay),
    /// Centered value + label readout.
    CenteredValue(CenteredValueDisplay),
    /// Single status indicator row.
    Status(StatusIndicator),
    /// Status list face.
    StatusList(StatusListDisplay),
    /// Single progress face.
    Progress(ProgressDisplay),
    /// Multi-row progress face.
    MultiProgress(MultiProgressDisplay),
    /// Attribute key/value list face.
    AttributeList(AttributeListDisplay),
    /// Now-playing media face.
    NowPlaying(NowPlaying),
    /// Idle media face.
    MediaIdle(MediaIdle),
    /// Camera snapshot face.
    CameraImage(CameraImage),
}

impl Component {
    /// Preferred size given an upper bound. Pure: no drawing happens.
    pub fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        match self {
            Component::Text(node) => node.measure(ctx, max),
            Component::Icon(node) => node.measure(ctx, max),
            Component::Bar(node) => node.measure(ctx, max),
            Component::Ring(node) => node.measure(ctx, max),
            Component::Arc(node) => node.measure(ctx, max),
            Component::Sparkline(node) => node.measure(ctx, max),
            Component::Panel(node) => node.measure(ctx, max),
            Component::Spacer(node) => node.measure(ctx, max),
            Component::Empty => Size::zero(),
            Component::FillText(node) => node.measure(ctx, max),
            Component::Row(node) => node.measure(ctx, max),
            Component::Column(node) => node.measure(ctx, max),
            Component::Stack(node) => node.measure(ctx, max),
            Component::Adaptive(node) => node.measure(ctx, max),
            Component::Padding(node) => node.measure(ctx, max),
            Component::Center(node) => node.measure(ctx, max),
            Component::Prioritized(node) => node.measure(ctx, max),
            Component::PriorityRow(node) => node.measure(ctx, max),
            Component::PriorityColumn(node) => node.measure(ctx, max),
            Component::Clock(node) => node.measure(ctx, max),
            Component::Chart(node) => node.measure(ctx, max),
            Component::Weather(node) => node.measure(ctx, max),
            Component::GaugeBar(node) => node.measure(ctx, max),
            Component::GaugeRing(node) => node.measure(ctx, max),
            Component::GaugeArc(node) => node.measure(ctx, max),
            Component::IconValue(node) => node.measure(ctx, max),
            Component::CenteredValue(node) => node.measure(ctx, max),
            Component::Status(node) => node.measure(ctx, max),
            Component::StatusList(node) => node.measure(ctx, max),
            Component::Progress(node) => node.measure(ctx, max),
            Component::MultiProgress(node) => node.measure(ctx, max),
            Component::AttributeList(node) => node.measure(ctx, max),
            Component::NowPlaying(node) => node.measure(ctx, max),
            Component::MediaIdle(node) => node.measure(ctx, max),
            Component::CameraImage(node) => node.measure(ctx, max),
        }
    }

    /// Draw within exactly `bounds` (local coordinates).
    pub fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        match self {
            Component::Text(node) => node.render(ctx, bounds),
            Component::Icon(node) => node.render(ctx, bounds),
            Component::Bar(node) => node.render(ctx, bounds),
            Component::Ring(node) => node.render(ctx, bounds),
            Component::Arc(node) => node.render(ctx, bounds),
            Component::Sparkline(node) => node.render(ctx, bounds),
            Component::Panel(node) => node.render(ctx, bounds),
            Component::Spacer(_) | Component::Empty => Ok(()),
            Component::FillText(node) => node.render(ctx, bounds),
            Component::Row(node) => node.render(ctx, bounds),
            Component::Column(node) => node.render(ctx, bounds),
            Component::Stack(node) => node.render(ctx, bounds),
            Component::Adaptive(node) => node.render(ctx, bounds),
            Component::Padding(node) => node.render(ctx, bounds),
            Component::Center(node) => node.render(ctx, bounds),
            Component::Prioritized(node) => node.render(ctx, bounds),
            Component::PriorityRow(node) => node.render(ctx, bounds),
            Component::PriorityColumn(node) => node.render(ctx, bounds),
            Component::Clock(node) => node.render(ctx, bounds),
            Component::Chart(node) => node.render(ctx, bounds),
            Component::Weather(node) => node.render(ctx, bounds),
            Component::GaugeBar(node) => node.render(ctx, bounds),
            Component::GaugeRing(node) => node.render(ctx, bounds),
            Component::GaugeArc(node) => node.render(ctx, bounds),
            Component::IconValue(node) => node.render(ctx, bounds),
            Component::CenteredValue(node) => node.render(ctx, bounds),
            Component::Status(node) => node.render(ctx, bounds),
            Component::StatusList(node) => node.render(ctx, bounds),
            Component::Progress(node) => node.render(ctx, bounds),
            Component::MultiProgress(node) => node.render(ctx, bounds),
            Component::AttributeList(node) => node.render(ctx, bounds),
            Component::NowPlaying(node) => node.render(ctx, bounds),
            Component::MediaIdle(node) => node.render(ctx, bounds),
            Component::CameraImage(node) => node.render(ctx, bounds),
        }
    }

    pub(crate) fn is_empty_node(&self) -> bool {
        matches!(self, Component::Empty)
    }

    pub(crate) fn is_spacer(&self) -> bool {
        matches!(self, Component::Spacer(_))
    }
}

macro_rules! impl_from {
    ($($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for Component {
                fn from(value: $ty) -> Self {
                    Component::$variant(value)
                }
            }
        )+
    };
}

impl_from!(
    Text(Text),
    Icon(Icon),
    Bar(Bar),
    Ring(Ring),
    Arc(ArcGauge),
    Sparkline(Sparkline),
    Panel(Panel),
    Spacer(Spacer),
    FillText(FillText),
    Row(Row),
    Column(Column),
    Stack(Stack),
    Adaptive(Adaptive),
    Padding(Padding),
    Center(Center),
    Prioritized(Prioritized),
    PriorityRow(PriorityRow),
    PriorityColumn(PriorityColumn),
    Clock(ClockDisplay),
    Chart(ChartDisplay),
    Weather(WeatherDisplay),
    GaugeBar(BarGaugeDisplay),
    GaugeRing(RingGaugeDisplay),
    GaugeArc(ArcGaugeDisplay),
    IconValue(IconValueDisplay),
    CenteredValue(CenteredValueDisplay),
    Status(StatusIndicator),
    StatusList(StatusListDisplay),
    Progress(ProgressDisplay),
    MultiProgress(MultiProgressDisplay),
    AttributeList(AttributeListDisplay),
    NowPlaying(NowPlaying),
    MediaIdle(MediaIdle),
    CameraImage(CameraImage),
);
