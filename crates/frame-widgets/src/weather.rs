//! Weather widget.

use frame_components::prelude::*;

use crate::config::WidgetConfig;
use crate::state::WidgetState;

/// Shows current conditions plus a forecast strip when space allows.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherWidget {
    config: WidgetConfig,
    show_forecast: bool,
    forecast_days: usize,
    show_humidity: bool,
    show_high_low: bool,
}

impl WeatherWidget {
    /// Build from configuration (`show_forecast`, `forecast_days`,
    /// `show_humidity`, `show_high_low` options).
    pub fn new(config: WidgetConfig) -> Self {
        let show_forecast = config.opt_bool("show_forecast", true);
        let forecast_days = config.opt_usize("forecast_days", 3);
        let show_humidity = config.opt_bool("show_humidity", true);
        let show_high_low = config.opt_bool("show_high_low", true);
        Self {
            config,
            show_forecast,
            forecast_days,
            show_humidity,
            show_high_low,
        }
    }

    /// The configured weather entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the weather tree; a missing entity yields the placeholder.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let Some(entity) = state.entity.as_ref() else {
            return weather_placeholder();
        };

        let number_text = |key: &str| {
            entity
                .get_f64(key)
                .map(frame_components::textutil::format_number)
                .unwrap_or_else(|| "--".to_string())
        };

        let mut display = WeatherDisplay::new(entity.state.clone(), number_text("temperature"));
        display.humidity = number_text("humidity");
        display.forecast = state.forecast.clone();
        display.show_forecast = self.show_forecast;
        display.show_humidity = self.show_humidity;
        display.show_high_low = self.show_high_low;
        display.forecast_days = self.forecast_days;
        display.into()
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

    fn render(widget: &WeatherWidget, state: &WidgetState) -> Component {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(224, 148)),
            Theme::classic(),
        );
        widget.render(&ctx, state)
    }

    #[test]
    fn missing_entity_yields_placeholder() {
        let widget = WeatherWidget::new(WidgetConfig::new("weather", 0).entity("weather.home"));
        let tree = render(&widget, &WidgetState::new());
        assert!(matches!(tree, Component::Column(_)));
    }

    #[test]
    fn conditions_flow_through() {
        let widget = WeatherWidget::new(WidgetConfig::new("weather", 0).entity("weather.home"));
        let state = WidgetState::new()
            .with_entity(
                EntityState::new("weather.home", "rainy")
                    .attr("temperature", 18.5)
                    .attr("humidity", 72),
            )
            .with_forecast(vec![ForecastDay {
                datetime: "2026-08-08T00:00:00Z".to_string(),
                condition: "cloudy".to_string(),
                temperature: 19.0,
                templow: Some(12.0),
            }]);
        let Component::Weather(display) = render(&widget, &state) else {
            panic!("expected weather display");
        };
        assert_eq!(display.condition, "rainy");
        assert_eq!(display.temperature, "18.5");
        assert_eq!(display.humidity, "72");
        assert_eq!(display.forecast.len(), 1);
    }

    #[test]
    fn unknown_condition_still_renders() {
        let widget = WeatherWidget::new(WidgetConfig::new("weather", 0).entity("weather.home"));
        let state = WidgetState::new().with_entity(
            EntityState::new("weather.home", "unknown_condition_xyz").attr("temperature", 20),
        );
        let Component::Weather(display) = render(&widget, &state) else {
            panic!("expected weather display");
        };
        assert_eq!(condition_icon(&display.condition), "weather-sunny");
    }
}
