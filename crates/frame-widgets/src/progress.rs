//! Progress widgets: single bar and multi-row list.

use frame_components::prelude::*;
use serde_json::Value;

use crate::config::{parse_color, WidgetConfig};
use crate::helpers::{extract_numeric, resolve_label};
use crate::state::WidgetState;

/// Shows a numeric entity value against a target as a progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressWidget {
    config: WidgetConfig,
    target: f64,
    unit: String,
    show_target: bool,
    icon: Option<String>,
    bar_height: BarHeightStyle,
}

impl ProgressWidget {
    /// Build from configuration (`target`, `unit`, `show_target`,
    /// `icon`, `bar_height` options).
    pub fn new(config: WidgetConfig) -> Self {
        let target = config.opt_f64("target", 100.0);
        let unit = config.opt_str("unit").unwrap_or_default().to_string();
        let show_target = config.opt_bool("show_target", true);
        let icon = config.opt_str("icon").map(str::to_string);
        let bar_height = BarHeightStyle::from_name(config.opt_str("bar_height").unwrap_or(""));
        Self {
            config,
            target,
            unit,
            show_target,
            icon,
            bar_height,
        }
    }

    /// The configured entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the progress tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let entity = state.entity.as_ref();
        let value = extract_numeric(entity, None);

        let unit = if self.unit.is_empty() {
            entity.map(|e| e.unit().to_string()).unwrap_or_default()
        } else {
            self.unit.clone()
        };

        let label = {
            let resolved = resolve_label(&self.config, entity, "");
            if resolved.is_empty() {
                "Progress".to_string()
            } else {
                resolved
            }
        };

        let mut display = ProgressDisplay::new(value, self.target, label);
        display.unit = unit;
        display.color = self.config.color.unwrap_or(frame_system::color::CYAN);
        display.icon = self.icon.clone();
        display.show_target = self.show_target;
        display.bar_height = self.bar_height;
        display.into()
    }
}

/// One configured multi-progress row.
#[derive(Debug, Clone, PartialEq)]
struct ItemConfig {
    entity_id: Option<String>,
    label: Option<String>,
    target: f64,
    color: embedded_graphics::pixelcolor::Rgb888,
    icon: Option<String>,
    unit: Option<String>,
}

/// Shows several progress rows in one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiProgressWidget {
    items: Vec<ItemConfig>,
    title: Option<String>,
}

impl MultiProgressWidget {
    /// Build from configuration (`items` list of row objects, `title`).
    pub fn new(config: WidgetConfig) -> Self {
        let items = parse_items(config.options.get("items"));
        let title = config.opt_str("title").map(str::to_string);
        Self { items, title }
    }

    /// Every configured row entity id.
    pub fn entities(&self) -> Vec<String> {
        self.items
            .iter()
            .filter_map(|item| item.entity_id.clone())
            .collect()
    }

    /// Build the multi-progress tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let rows = self
            .items
            .iter()
            .map(|item| {
                let entity = item
                    .entity_id
                    .as_deref()
                    .and_then(|id| state.get_entity(id));
                let value = extract_numeric(entity, None);

                let label = item
                    .label
                    .clone()
                    .filter(|l| !l.is_empty())
                    .or_else(|| entity.map(|e| e.friendly_name().to_string()))
                    .or_else(|| item.entity_id.clone())
                    .unwrap_or_else(|| "Item".to_string());

                let unit = item
                    .unit
                    .clone()
                    .filter(|u| !u.is_empty())
                    .or_else(|| entity.map(|e| e.unit().to_string()))
                    .unwrap_or_default();

                ProgressItem {
                    label,
                    value,
                    target: item.target,
                    color: item.color,
                    icon: item.icon.clone(),
                    unit,
                }
            })
            .collect();

        let mut display = MultiProgressDisplay::new(rows);
        display.title = self.title.clone();
        display.into()
    }
}

fn parse_items(value: Option<&Value>) -> Vec<ItemConfig> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let obj = entry.as_object()?;
            Some(ItemConfig {
                entity_id: obj
                    .get("entity_id")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                label: obj.get("label").and_then(Value::as_str).map(str::to_string),
                target: obj.get("target").and_then(Value::as_f64).unwrap_or(100.0),
                color: obj
                    .get("color")
                    .and_then(parse_color)
                    .unwrap_or(frame_system::color::CYAN),
                icon: obj.get("icon").and_then(Value::as_str).map(str::to_string),
                unit: obj.get("unit").and_then(Value::as_str).map(str::to_string),
            })
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

    fn render_with<W>(f: impl FnOnce(&RenderContext<'_, Canvas>) -> W) -> W {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(224, 70)),
            Theme::classic(),
        );
        f(&ctx)
    }

    #[test]
    fn progress_reads_value_and_target() {
        let widget = ProgressWidget::new(
            WidgetConfig::new("progress", 0)
                .entity("sensor.steps")
                .option("target", 10000),
        );
        let state = WidgetState::new()
            .with_entity(EntityState::new("sensor.steps", "7500").attr("friendly_name", "Steps"));
        let Component::Progress(display) = render_with(|ctx| widget.render(ctx, &state)) else {
            panic!("expected progress display");
        };
        assert!((display.value - 7500.0).abs() < f64::EPSILON);
        assert!((display.target - 10000.0).abs() < f64::EPSILON);
        assert_eq!(display.label, "Steps");
    }

    #[test]
    fn progress_defaults_label() {
        let widget = ProgressWidget::new(WidgetConfig::new("progress", 0));
        let Component::Progress(display) =
            render_with(|ctx| widget.render(ctx, &WidgetState::new()))
        else {
            panic!("expected progress display");
        };
        assert_eq!(display.label, "Progress");
        assert!(display.value.abs() < f64::EPSILON);
    }

    #[test]
    fn multi_progress_collects_rows() {
        let widget = MultiProgressWidget::new(WidgetConfig::new("multi_progress", 0).option(
            "items",
            json!([
                {"entity_id": "sensor.a", "target": 50},
                {"entity_id": "sensor.b", "label": "B", "unit": "GB"},
            ]),
        ));
        assert_eq!(widget.entities(), vec!["sensor.a", "sensor.b"]);

        let state = WidgetState::new()
            .with_secondary(EntityState::new("sensor.a", "25"))
            .with_secondary(EntityState::new("sensor.b", "10"));
        let Component::MultiProgress(display) = render_with(|ctx| widget.render(ctx, &state))
        else {
            panic!("expected multi progress display");
        };
        assert_eq!(display.items.len(), 2);
        assert!((display.items[0].value - 25.0).abs() < f64::EPSILON);
        assert_eq!(display.items[1].label, "B");
        assert_eq!(display.items[1].unit, "GB");
    }
}
