//! The widget variant set and its string-tag registry.

use frame_components::prelude::*;

use crate::attribute_list::AttributeListWidget;
use crate::camera::CameraWidget;
use crate::chart::ChartWidget;
use crate::clock::ClockWidget;
use crate::config::WidgetConfig;
use crate::entity::EntityWidget;
use crate::gauge::GaugeWidget;
use crate::media::MediaWidget;
use crate::progress::{MultiProgressWidget, ProgressWidget};
use crate::state::WidgetState;
use crate::status::{StatusListWidget, StatusWidget};
use crate::text::TextWidget;
use crate::weather::WeatherWidget;

/// Placeholder for unrecognized widget tags; renders nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoopWidget;

/// One widget instance: a typed configuration turned into a pure
/// state → component-tree function.
///
/// The variant set is closed and dispatched exhaustively; construction
/// goes through the [registry](crate::registry) so unknown tags degrade
/// predictably to [`NoopWidget`].
#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    /// Time/date display.
    Clock(ClockWidget),
    /// Entity value readout.
    Entity(EntityWidget),
    /// Bar/ring/arc gauge.
    Gauge(GaugeWidget),
    /// History chart.
    Chart(ChartWidget),
    /// Weather conditions and forecast.
    Weather(WeatherWidget),
    /// Media player face.
    Media(MediaWidget),
    /// Single binary status.
    Status(StatusWidget),
    /// Binary status list.
    StatusList(StatusListWidget),
    /// Single progress bar.
    Progress(ProgressWidget),
    /// Multi-row progress list.
    MultiProgress(MultiProgressWidget),
    /// Static/dynamic text.
    Text(TextWidget),
    /// Entity attribute rows.
    AttributeList(AttributeListWidget),
    /// Camera snapshot.
    Camera(CameraWidget),
    /// Unknown tag fallback; renders nothing.
    Noop(NoopWidget),
}

impl Widget {
    /// Build a widget through the registry; unknown tags yield the no-op
    /// widget.
    pub fn from_config(config: WidgetConfig) -> Widget {
        crate::registry::build(config)
    }

    /// Build the component tree for this widget.
    ///
    /// Pure: identical configuration, context dimensions and state yield
    /// a structurally equal tree. Widgets never draw — they only
    /// assemble components.
    pub fn render<D: Surface>(&self, ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        match self {
            Widget::Clock(w) => w.render(ctx, state),
            Widget::Entity(w) => w.render(ctx, state),
            Widget::Gauge(w) => w.render(ctx, state),
            Widget::Chart(w) => w.render(ctx, state),
            Widget::Weather(w) => w.render(ctx, state),
            Widget::Media(w) => w.render(ctx, state),
            Widget::Status(w) => w.render(ctx, state),
            Widget::StatusList(w) => w.render(ctx, state),
            Widget::Progress(w) => w.render(ctx, state),
            Widget::MultiProgress(w) => w.render(ctx, state),
            Widget::Text(w) => w.render(ctx, state),
            Widget::AttributeList(w) => w.render(ctx, state),
            Widget::Camera(w) => w.render(ctx, state),
            Widget::Noop(_) => Component::Empty,
        }
    }

    /// Entity ids this widget depends on; used by the coordinator to
    /// know what to fetch before a render pass.
    pub fn entities(&self) -> Vec<String> {
        match self {
            Widget::Clock(w) => w.entities(),
            Widget::Entity(w) => w.entities(),
            Widget::Gauge(w) => w.entities(),
            Widget::Chart(w) => w.entities(),
            Widget::Weather(w) => w.entities(),
            Widget::Media(w) => w.entities(),
            Widget::Status(w) => w.entities(),
            Widget::StatusList(w) => w.entities(),
            Widget::Progress(w) => w.entities(),
            Widget::MultiProgress(w) => w.entities(),
            Widget::Text(w) => w.entities(),
            Widget::AttributeList(w) => w.entities(),
            Widget::Camera(w) => w.entities(),
            Widget::Noop(_) => Vec::new(),
        }
    }
}
