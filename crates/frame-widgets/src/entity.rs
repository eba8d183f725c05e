//! Entity value widget.

use frame_components::prelude::*;
use frame_components::textutil::{estimate_max_chars, format_with_unit, truncate, TruncateStyle};

use crate::config::WidgetConfig;
use crate::helpers::{entity_icon, resolve_label};
use crate::state::WidgetState;

/// Shows one entity's state value with an optional icon, name and unit.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityWidget {
    config: WidgetConfig,
    show_name: bool,
    show_unit: bool,
    show_icon: bool,
    show_panel: bool,
    icon: Option<String>,
    precision: Option<usize>,
}

impl EntityWidget {
    /// Build from configuration (`show_name`, `show_unit`, `show_icon`,
    /// `show_panel`, `icon`, `precision` options).
    pub fn new(config: WidgetConfig) -> Self {
        let show_name = config.opt_bool("show_name", true);
        let show_unit = config.opt_bool("show_unit", true);
        let show_icon = config.opt_bool("show_icon", true);
        let show_panel = config.opt_bool("show_panel", false);
        let icon = config.opt_str("icon").map(str::to_string);
        let precision = config
            .options
            .get("precision")
            .and_then(serde_json::Value::as_u64)
            .map(|p| p as usize);
        Self {
            config,
            show_name,
            show_unit,
            show_icon,
            show_panel,
            icon,
            precision,
        }
    }

    /// The configured entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the value readout tree.
    pub fn render<D: Surface>(&self, ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let entity = state.entity.as_ref();

        let (mut value, unit, name) = match entity {
            None => (
                frame_system::color::PLACEHOLDER_VALUE.to_string(),
                String::new(),
                self.config
                    .label
                    .clone()
                    .or_else(|| self.config.entity_id.clone())
                    .unwrap_or_else(|| frame_system::color::PLACEHOLDER_NAME.to_string()),
            ),
            Some(entity) => {
                let mut value = entity.state.clone();
                if let (Some(precision), Some(numeric)) = (self.precision, entity.numeric_state())
                {
                    value = format!("{numeric:.precision$}");
                }
                let unit = if self.show_unit {
                    entity.unit().to_string()
                } else {
                    String::new()
                };
                let name = resolve_label(&self.config, Some(entity), &entity.entity_id);
                (value, unit, name)
            }
        };

        let value_budget = estimate_max_chars(ctx.width(), 6, 6);
        let name_budget = estimate_max_chars(ctx.width(), 5, 4);
        value = truncate(&value, value_budget, TruncateStyle::Middle);
        let name = truncate(&name, name_budget, TruncateStyle::Middle);

        let color = self.config.color.unwrap_or(frame_system::color::CYAN);
        let value_text = format_with_unit(&value, &unit);
        let label = self.show_name.then_some(name);

        let icon = match (&self.icon, self.show_icon) {
            (Some(icon), _) => Some(icon.clone()),
            (None, true) => entity_icon(entity),
            (None, false) => None,
        };

        let content: Component = match icon {
            Some(icon) => {
                let mut display =
                    IconValueDisplay::new(icon, value_text, label.unwrap_or_default());
                display.icon_color = ColorSpec::Rgb(color);
                display.value_color = ColorSpec::Rgb(frame_system::color::WHITE);
                display.label_color = ColorSpec::Rgb(frame_system::color::GRAY);
                display.into()
            }
            None => {
                let mut display = CenteredValueDisplay::new(value_text, label);
                display.value_color = ColorSpec::Rgb(color);
                display.label_color = ColorSpec::Rgb(frame_system::color::GRAY);
                display.into()
            }
        };

        if self.show_panel {
            Panel::new(content).into()
        } else {
            content
        }
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

    fn with_ctx<R>(f: impl FnOnce(&RenderContext<'_, Canvas>) -> R) -> R {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(108, 108)),
            Theme::classic(),
        );
        f(&ctx)
    }

    #[test]
    fn placeholder_without_entity() {
        let widget = EntityWidget::new(WidgetConfig::new("entity", 0).entity("sensor.temp"));
        let tree = with_ctx(|ctx| widget.render(ctx, &WidgetState::new()));
        let Component::CenteredValue(display) = tree else {
            panic!("expected centered value, got {tree:?}");
        };
        assert_eq!(display.value, "--");
        assert_eq!(display.label.as_deref(), Some("sensor.temp"));
    }

    #[test]
    fn value_with_unit() {
        let widget = EntityWidget::new(WidgetConfig::new("entity", 0).entity("sensor.temp"));
        let state = WidgetState::new().with_entity(
            EntityState::new("sensor.temp", "23.5")
                .attr("unit_of_measurement", "°C")
                .attr("friendly_name", "Outside"),
        );
        let tree = with_ctx(|ctx| widget.render(ctx, &state));
        let Component::CenteredValue(display) = tree else {
            panic!("expected centered value, got {tree:?}");
        };
        assert_eq!(display.value, "23.5°C");
        assert_eq!(display.label.as_deref(), Some("Outside"));
    }

    #[test]
    fn entity_icon_switches_to_icon_display() {
        let widget = EntityWidget::new(WidgetConfig::new("entity", 0).entity("sensor.temp"));
        let state = WidgetState::new()
            .with_entity(EntityState::new("sensor.temp", "21").attr("icon", "mdi:thermometer"));
        let tree = with_ctx(|ctx| widget.render(ctx, &state));
        let Component::IconValue(display) = tree else {
            panic!("expected icon value, got {tree:?}");
        };
        assert_eq!(display.icon, "thermometer");
        assert_eq!(display.value, "21");
    }

    #[test]
    fn precision_formats_numeric_values() {
        let widget = EntityWidget::new(
            WidgetConfig::new("entity", 0)
                .entity("sensor.temp")
                .option("precision", 1),
        );
        let state =
            WidgetState::new().with_entity(EntityState::new("sensor.temp", "23.456"));
        let tree = with_ctx(|ctx| widget.render(ctx, &state));
        let Component::CenteredValue(display) = tree else {
            panic!("expected centered value");
        };
        assert_eq!(display.value, "23.5");
    }

    #[test]
    fn panel_option_wraps_content() {
        let widget = EntityWidget::new(
            WidgetConfig::new("entity", 0)
                .entity("sensor.temp")
                .option("show_panel", true),
        );
        let tree = with_ctx(|ctx| widget.render(ctx, &WidgetState::new()));
        assert!(matches!(tree, Component::Panel(_)));
    }

    #[test]
    fn render_is_deterministic() {
        let widget = EntityWidget::new(WidgetConfig::new("entity", 0).entity("sensor.temp"));
        let state = WidgetState::new().with_entity(EntityState::new("sensor.temp", "42"));
        let a = with_ctx(|ctx| widget.render(ctx, &state));
        let b = with_ctx(|ctx| widget.render(ctx, &state));
        assert_eq!(a, b);
    }
}
