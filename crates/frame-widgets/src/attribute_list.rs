//! Attribute list widget: key/value rows from one entity.

use frame_components::prelude::*;
use serde_json::Value;

use crate::config::{parse_color, WidgetConfig};
use crate::state::WidgetState;

/// One configured attribute row.
#[derive(Debug, Clone, PartialEq)]
struct AttributeConfig {
    key: String,
    label: String,
    color: Option<embedded_graphics::pixelcolor::Rgb888>,
}

/// Shows selected attributes of an entity as "Label … Value" rows.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeListWidget {
    config: WidgetConfig,
    attributes: Vec<AttributeConfig>,
    title: Option<String>,
}

impl AttributeListWidget {
    /// Build from configuration (`attributes` list of keys or
    /// `{key, label, color}` objects, `title`).
    pub fn new(config: WidgetConfig) -> Self {
        let attributes = parse_attributes(config.options.get("attributes"));
        let title = config.opt_str("title").map(str::to_string);
        Self {
            config,
            attributes,
            title,
        }
    }

    /// The configured entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the attribute list tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let entity = state.entity.as_ref();
        let default_color = self.config.color.unwrap_or(frame_system::color::CYAN);

        let items = self
            .attributes
            .iter()
            .map(|attr| {
                let value = match entity {
                    None => frame_system::color::PLACEHOLDER_VALUE.to_string(),
                    // "state" reads the entity state rather than an attribute
                    Some(entity) if attr.key == "state" => entity.state.clone(),
                    Some(entity) => format_attribute(entity.get(&attr.key)),
                };
                AttributeItem {
                    label: attr.label.clone(),
                    value,
                    color: attr.color.unwrap_or(default_color),
                }
            })
            .collect();

        // With no attribute rows configured, fall back to showing who we
        // are: the friendly name (or entity id) becomes the title.
        let title = if self.attributes.is_empty() {
            self.title
                .clone()
                .or_else(|| entity.map(|e| e.friendly_name().to_string()))
                .or_else(|| self.config.entity_id.clone())
                .or_else(|| Some(frame_system::color::PLACEHOLDER_NAME.to_string()))
        } else {
            self.title.clone()
        };

        let mut display = AttributeListDisplay::new(items);
        display.title = title;
        display.into()
    }
}

/// Formatting policy for attribute values: numbers per the shared rule,
/// booleans as Yes/No, collections as count summaries.
fn format_attribute(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => frame_system::color::PLACEHOLDER_VALUE.to_string(),
        Some(Value::Bool(b)) => if *b { "Yes" } else { "No" }.to_string(),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(frame_components::textutil::format_number)
            .unwrap_or_else(|| n.to_string()),
        Some(Value::Array(items)) => format!("[{} items]", items.len()),
        Some(Value::Object(map)) => format!("{{{} keys}}", map.len()),
        Some(Value::String(s)) => s.clone(),
    }
}

fn parse_attributes(value: Option<&Value>) -> Vec<AttributeConfig> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(key) => Some(AttributeConfig {
                key: key.clone(),
                label: key.clone(),
                color: None,
            }),
            Value::Object(obj) => {
                let key = obj.get("key").and_then(Value::as_str)?.to_string();
                let label = obj
                    .get("label")
                    .and_then(Value::as_str)
                    .unwrap_or(&key)
                    .to_string();
                let color = obj.get("color").and_then(parse_color);
                Some(AttributeConfig { key, label, color })
            }
            _ => None,
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

    fn render(widget: &AttributeListWidget, state: &WidgetState) -> Component {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(224, 108)),
            Theme::classic(),
        );
        widget.render(&ctx, state)
    }

    fn bus_entity() -> EntityState {
        EntityState::new("sensor.bus", "3 min")
            .attr("route_name", "42B")
            .attr("stops", json!(["a", "b", "c"]))
            .attr("realtime", true)
            .attr("distance_km", 1.5)
    }

    #[test]
    fn rows_follow_configuration() {
        let widget = AttributeListWidget::new(
            WidgetConfig::new("attribute_list", 0)
                .entity("sensor.bus")
                .option(
                    "attributes",
                    json!([
                        {"key": "route_name", "label": "Route"},
                        {"key": "state", "label": "Arrives"},
                    ]),
                ),
        );
        let state = WidgetState::new().with_entity(bus_entity());
        let Component::AttributeList(display) = render(&widget, &state) else {
            panic!("expected attribute list");
        };
        assert_eq!(display.items.len(), 2);
        assert_eq!(display.items[0].label, "Route");
        assert_eq!(display.items[0].value, "42B");
        assert_eq!(display.items[1].value, "3 min");
    }

    #[test]
    fn value_formatting_policy() {
        assert_eq!(format_attribute(Some(&json!(true))), "Yes");
        assert_eq!(format_attribute(Some(&json!(false))), "No");
        assert_eq!(format_attribute(Some(&json!(7))), "7");
        assert_eq!(format_attribute(Some(&json!(7.25))), "7.2");
        assert_eq!(format_attribute(Some(&json!([1, 2, 3]))), "[3 items]");
        assert_eq!(format_attribute(Some(&json!({"a": 1}))), "{1 keys}");
        assert_eq!(format_attribute(None), "--");
    }

    #[test]
    fn no_attributes_shows_entity_title() {
        let widget = AttributeListWidget::new(
            WidgetConfig::new("attribute_list", 0).entity("sensor.bus"),
        );
        let state = WidgetState::new()
            .with_entity(bus_entity().attr("friendly_name", "Bus Stop"));
        let Component::AttributeList(display) = render(&widget, &state) else {
            panic!("expected attribute list");
        };
        assert_eq!(display.title.as_deref(), Some("Bus Stop"));
        assert!(display.items.is_empty());
    }

    #[test]
    fn missing_entity_rows_show_placeholders() {
        let widget = AttributeListWidget::new(
            WidgetConfig::new("attribute_list", 0)
                .entity("sensor.bus")
                .option("attributes", json!(["route_name"])),
        );
        let Component::AttributeList(display) = render(&widget, &WidgetState::new()) else {
            panic!("expected attribute list");
        };
        assert_eq!(display.items[0].value, "--");
    }
}
