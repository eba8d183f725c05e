//! Gauge widget: bar, ring or arc styles over one percent computation.

use embedded_graphics::pixelcolor::Rgb888;
use frame_components::math::percent;
use frame_components::prelude::*;
use serde_json::Value;

use crate::config::{parse_color, WidgetConfig};
use crate::helpers::{extract_numeric, resolve_label};
use crate::state::WidgetState;

/// Gauge rendering styles.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
enum GaugeStyle {
    #[default]
    Bar,
    Ring,
    Arc,
}

/// One `value >= threshold → color` step.
#[derive(Debug, Clone, PartialEq)]
struct ColorThreshold {
    value: f64,
    color: Rgb888,
}

/// Shows a numeric entity value as a gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct GaugeWidget {
    config: WidgetConfig,
    style: GaugeStyle,
    min_value: f64,
    max_value: f64,
    icon: Option<String>,
    show_value: bool,
    unit: String,
    attribute: Option<String>,
    thresholds: Vec<ColorThreshold>,
}

impl GaugeWidget {
    /// Build from configuration (`style`, `min`, `max`, `icon`,
    /// `show_value`, `unit`, `attribute`, `color_thresholds` options).
    pub fn new(config: WidgetConfig) -> Self {
        let style = match config.opt_str("style") {
            Some("ring") => GaugeStyle::Ring,
            Some("arc") => GaugeStyle::Arc,
            _ => GaugeStyle::Bar,
        };
        let min_value = config.opt_f64("min", 0.0);
        let max_value = config.opt_f64("max", 100.0);
        let icon = config.opt_str("icon").map(str::to_string);
        let show_value = config.opt_bool("show_value", true);
        let unit = config.opt_str("unit").unwrap_or_default().to_string();
        let attribute = config.opt_str("attribute").map(str::to_string);
        let thresholds = parse_thresholds(config.options.get("color_thresholds"));
        Self {
            config,
            style,
            min_value,
            max_value,
            icon,
            show_value,
            unit,
            attribute,
            thresholds,
        }
    }

    /// The configured entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    fn threshold_color(&self, value: f64) -> Option<Rgb888> {
        let mut sorted = self.thresholds.clone();
        sorted.sort_by(|a, b| a.value.total_cmp(&b.value));
        let mut matching = None;
        for threshold in sorted {
            if value >= threshold.value {
                matching = Some(threshold.color);
            }
        }
        matching
    }

    /// Build the gauge tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let entity = state.entity.as_ref();

        let value = extract_numeric(entity, self.attribute.as_deref());
        let display_value = if entity.is_some() {
            format!("{value:.0}")
        } else {
            frame_system::color::PLACEHOLDER_VALUE.to_string()
        };

        let unit = if self.unit.is_empty() {
            entity.map(|e| e.unit().to_string()).unwrap_or_default()
        } else {
            self.unit.clone()
        };

        let fill = percent(value, self.min_value, self.max_value) as f32;
        let name = resolve_label(&self.config, entity, "");
        let color = self
            .threshold_color(value)
            .or(self.config.color)
            .unwrap_or(frame_system::color::CYAN);

        let value_text = if self.show_value {
            frame_components::textutil::format_with_unit(&display_value, &unit)
        } else {
            String::new()
        };

        match self.style {
            GaugeStyle::Ring => RingGaugeDisplay::new(fill, value_text, name)
                .color(color)
                .into(),
            GaugeStyle::Arc => ArcGaugeDisplay::new(fill, value_text, name)
                .color(color)
                .into(),
            GaugeStyle::Bar => {
                let mut display = BarGaugeDisplay::new(fill, value_text, name).color(color);
                if let Some(icon) = &self.icon {
                    display = display.icon(icon.clone());
                }
                display.into()
            }
        }
    }
}

fn parse_thresholds(value: Option<&Value>) -> Vec<ColorThreshold> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let value = entry.get("value")?.as_f64()?;
            let color = parse_color(entry.get("color")?)?;
            Some(ColorThreshold { value, color })
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::state::EntityState;
    use embedded_graphics::prelude::{Point, Size};
    use embedded_graphics::primitives::Rectangle;
    use frame_surface::Canvas;
    use serde_json::json;

    fn render(widget: &GaugeWidget, state: &WidgetState) -> Component {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(108, 108)),
            Theme::classic(),
        );
        widget.render(&ctx, state)
    }

    fn entity(value: &str) -> WidgetState {
        WidgetState::new().with_entity(EntityState::new("sensor.load", value))
    }

    #[test]
    fn default_style_is_bar() {
        let widget = GaugeWidget::new(WidgetConfig::new("gauge", 0).entity("sensor.load"));
        let Component::GaugeBar(display) = render(&widget, &entity("65")) else {
            panic!("expected bar gauge");
        };
        assert!((display.percent - 65.0).abs() < f32::EPSILON);
        assert_eq!(display.value, "65");
    }

    #[test]
    fn ring_and_arc_styles() {
        let ring = GaugeWidget::new(
            WidgetConfig::new("gauge", 0)
                .entity("sensor.load")
                .option("style", "ring"),
        );
        assert!(matches!(render(&ring, &entity("10")), Component::GaugeRing(_)));

        let arc = GaugeWidget::new(
            WidgetConfig::new("gauge", 0)
                .entity("sensor.load")
                .option("style", "arc"),
        );
        assert!(matches!(render(&arc, &entity("10")), Component::GaugeArc(_)));
    }

    #[test]
    fn percent_clamps_to_range() {
        let widget = GaugeWidget::new(WidgetConfig::new("gauge", 0).entity("sensor.load"));
        let Component::GaugeBar(display) = render(&widget, &entity("150")) else {
            panic!("expected bar gauge");
        };
        assert!((display.percent - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn non_numeric_state_shows_zero() {
        let widget = GaugeWidget::new(WidgetConfig::new("gauge", 0).entity("sensor.load"));
        let Component::GaugeBar(display) = render(&widget, &entity("unavailable")) else {
            panic!("expected bar gauge");
        };
        assert!(display.percent.abs() < f32::EPSILON);
        assert_eq!(display.value, "0");
    }

    #[test]
    fn missing_entity_shows_placeholder() {
        let widget = GaugeWidget::new(WidgetConfig::new("gauge", 0).entity("sensor.load"));
        let Component::GaugeBar(display) = render(&widget, &WidgetState::new()) else {
            panic!("expected bar gauge");
        };
        assert_eq!(display.value, "--");
    }

    #[test]
    fn threshold_colors_pick_highest_met_step() {
        let widget = GaugeWidget::new(
            WidgetConfig::new("gauge", 0)
                .entity("sensor.load")
                .option(
                    "color_thresholds",
                    json!([
                        {"value": 0, "color": [0, 255, 0]},
                        {"value": 50, "color": [255, 200, 0]},
                        {"value": 80, "color": [255, 0, 0]},
                    ]),
                ),
        );
        let Component::GaugeBar(display) = render(&widget, &entity("65")) else {
            panic!("expected bar gauge");
        };
        assert_eq!(display.color, Rgb888::new(255, 200, 0));

        let Component::GaugeBar(display) = render(&widget, &entity("90")) else {
            panic!("expected bar gauge");
        };
        assert_eq!(display.color, Rgb888::new(255, 0, 0));
    }

    #[test]
    fn attribute_source() {
        let widget = GaugeWidget::new(
            WidgetConfig::new("gauge", 0)
                .entity("sensor.battery")
                .option("attribute", "level"),
        );
        let state = WidgetState::new()
            .with_entity(EntityState::new("sensor.battery", "ok").attr("level", 40));
        let Component::GaugeBar(display) = render(&widget, &state) else {
            panic!("expected bar gauge");
        };
        assert!((display.percent - 40.0).abs() < f32::EPSILON);
    }
}
