//! History chart widget.

use frame_components::prelude::*;

use crate::config::WidgetConfig;
use crate::state::WidgetState;

/// Shows an entity's numeric history as a sparkline (or a binary
/// timeline when every sample is 0/1).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartWidget {
    config: WidgetConfig,
    hours: f64,
    show_value: bool,
    show_range: bool,
    fill: bool,
}

impl ChartWidget {
    /// Build from configuration (`period`/`hours`, `show_value`,
    /// `show_range`, `fill` options).
    pub fn new(config: WidgetConfig) -> Self {
        let hours = match config.opt_str("period") {
            Some(period) => period_to_hours(period),
            None => match config.options.get("period").and_then(|v| v.as_f64()) {
                // Bare numbers are minutes
                Some(minutes) => minutes / 60.0,
                None => config.opt_f64("hours", 24.0),
            },
        };
        let show_value = config.opt_bool("show_value", true);
        let show_range = config.opt_bool("show_range", true);
        let fill = config.opt_bool("fill", false);
        Self {
            config,
            hours,
            show_value,
            show_range,
            fill,
        }
    }

    /// How many hours of history the coordinator should fetch.
    pub fn history_hours(&self) -> f64 {
        self.hours
    }

    /// The configured entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the chart tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let entity = state.entity.as_ref();

        let mut display = ChartDisplay::new(state.history.clone());
        display.color = self.config.color.unwrap_or(frame_system::color::CYAN);
        display.show_range = self.show_range;
        display.fill = self.fill;

        if let Some(entity) = entity {
            if self.show_value {
                display.current_value = entity.numeric_state();
            }
            display.unit = entity.unit().to_string();
        }
        display.label = self
            .config
            .label
            .clone()
            .or_else(|| entity.map(|e| e.friendly_name().to_string()));

        display.into()
    }
}

/// Named history periods offered by the configuration UI.
fn period_to_hours(period: &str) -> f64 {
    match period {
        "5 min" => 5.0 / 60.0,
        "15 min" => 15.0 / 60.0,
        "1 hour" => 1.0,
        "6 hours" => 6.0,
        _ => 24.0,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::state::EntityState;
    use embedded_graphics::prelude::{Point, Size};
    use embedded_graphics::primitives::Rectangle;
    use frame_surface::Canvas;

    fn render(widget: &ChartWidget, state: &WidgetState) -> Component {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(108, 108)),
            Theme::classic(),
        );
        widget.render(&ctx, state)
    }

    #[test]
    fn period_names_map_to_hours() {
        let widget = ChartWidget::new(
            WidgetConfig::new("chart", 0)
                .entity("sensor.t")
                .option("period", "6 hours"),
        );
        assert!((widget.history_hours() - 6.0).abs() < f64::EPSILON);

        let minutes = ChartWidget::new(
            WidgetConfig::new("chart", 0)
                .entity("sensor.t")
                .option("period", 30),
        );
        assert!((minutes.history_hours() - 0.5).abs() < f64::EPSILON);

        let default = ChartWidget::new(WidgetConfig::new("chart", 0).entity("sensor.t"));
        assert!((default.history_hours() - 24.0).abs() < f64::EPSILON);
    }

    #[test]
    fn history_and_value_flow_through() {
        let widget = ChartWidget::new(WidgetConfig::new("chart", 0).entity("sensor.t"));
        let state = WidgetState::new()
            .with_entity(
                EntityState::new("sensor.t", "23.0")
                    .attr("unit_of_measurement", "°C")
                    .attr("friendly_name", "Temp"),
            )
            .with_history(vec![20.0, 21.0, 23.0]);
        let Component::Chart(display) = render(&widget, &state) else {
            panic!("expected chart display");
        };
        assert_eq!(display.data, vec![20.0, 21.0, 23.0]);
        assert_eq!(display.current_value, Some(23.0));
        assert_eq!(display.unit, "°C");
        assert_eq!(display.label.as_deref(), Some("Temp"));
    }

    #[test]
    fn non_numeric_state_hides_value() {
        let widget = ChartWidget::new(WidgetConfig::new("chart", 0).entity("sensor.t"));
        let state = WidgetState::new()
            .with_entity(EntityState::new("sensor.t", "unknown"))
            .with_history(vec![0.0, 1.0]);
        let Component::Chart(display) = render(&widget, &state) else {
            panic!("expected chart display");
        };
        assert_eq!(display.current_value, None);
    }
}
