//! Binary status widgets: single indicator and list.

use frame_components::prelude::*;
use serde_json::Value;

use crate::config::WidgetConfig;
use crate::helpers::resolve_label;
use crate::state::{EntityState, WidgetState};

/// Case-insensitive membership test for the "on" state family.
pub(crate) fn is_entity_on(entity: Option<&EntityState>) -> bool {
    let Some(entity) = entity else {
        return false;
    };
    matches!(
        entity.state.to_lowercase().as_str(),
        "on" | "true" | "1" | "home" | "open" | "unlocked"
    )
}

/// Shows one binary sensor as a colored dot + name + status text.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusWidget {
    config: WidgetConfig,
    on_color: embedded_graphics::pixelcolor::Rgb888,
    off_color: embedded_graphics::pixelcolor::Rgb888,
    on_text: String,
    off_text: String,
    icon: Option<String>,
    show_status_text: bool,
}

impl StatusWidget {
    /// Build from configuration (`on_color`, `off_color`, `on_text`,
    /// `off_text`, `icon`, `show_status_text` options).
    pub fn new(config: WidgetConfig) -> Self {
        let on_color = config.opt_color("on_color").unwrap_or(frame_system::color::LIME);
        let off_color = config.opt_color("off_color").unwrap_or(frame_system::color::RED);
        let on_text = config.opt_str("on_text").unwrap_or("ON").to_string();
        let off_text = config.opt_str("off_text").unwrap_or("OFF").to_string();
        let icon = config.opt_str("icon").map(str::to_string);
        let show_status_text = config.opt_bool("show_status_text", true);
        Self {
            config,
            on_color,
            off_color,
            on_text,
            off_text,
            icon,
            show_status_text,
        }
    }

    /// The configured entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the indicator tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let entity = state.entity.as_ref();
        let is_on = is_entity_on(entity);
        let name = resolve_label(&self.config, entity, frame_system::color::PLACEHOLDER_NAME);

        let mut display = StatusIndicator::new(name, is_on);
        display.on_color = self.on_color;
        display.off_color = self.off_color;
        display.on_text = self.on_text.clone();
        display.off_text = self.off_text.clone();
        display.icon = self.icon.clone();
        display.show_status_text = self.show_status_text;
        display.into()
    }
}

/// One configured status-list entry: an entity id with an optional label
/// override.
#[derive(Debug, Clone, PartialEq)]
struct ListEntry {
    entity_id: String,
    label: Option<String>,
}

/// Shows several binary sensors as a compact list.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusListWidget {
    entries: Vec<ListEntry>,
    on_color: embedded_graphics::pixelcolor::Rgb888,
    off_color: embedded_graphics::pixelcolor::Rgb888,
    on_text: Option<String>,
    off_text: Option<String>,
    title: Option<String>,
}

impl StatusListWidget {
    /// Build from configuration (`entities` list of ids or `[id, label]`
    /// pairs, `on_color`, `off_color`, `on_text`, `off_text`, `title`).
    pub fn new(config: WidgetConfig) -> Self {
        let entries = parse_entries(config.options.get("entities"));
        let on_color = config.opt_color("on_color").unwrap_or(frame_system::color::LIME);
        let off_color = config.opt_color("off_color").unwrap_or(frame_system::color::RED);
        let on_text = config.opt_str("on_text").map(str::to_string);
        let off_text = config.opt_str("off_text").map(str::to_string);
        let title = config.opt_str("title").map(str::to_string);
        Self {
            entries,
            on_color,
            off_color,
            on_text,
            off_text,
            title,
        }
    }

    /// Every listed entity id.
    pub fn entities(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.entity_id.clone()).collect()
    }

    /// Build the list tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let items = self
            .entries
            .iter()
            .map(|entry| {
                let entity = state.get_entity(&entry.entity_id);
                let label = entry
                    .label
                    .clone()
                    .or_else(|| entity.map(|e| e.friendly_name().to_string()))
                    .unwrap_or_else(|| entry.entity_id.clone());
                StatusItem {
                    label,
                    is_on: is_entity_on(entity),
                    on_color: self.on_color,
                    off_color: self.off_color,
                }
            })
            .collect();

        let mut display = StatusListDisplay::new(items);
        display.title = self.title.clone();
        display.on_text = self.on_text.clone();
        display.off_text = self.off_text.clone();
        display.into()
    }
}

fn parse_entries(value: Option<&Value>) -> Vec<ListEntry> {
    let Some(Value::Array(entries)) = value else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(id) => Some(ListEntry {
                entity_id: id.clone(),
                label: None,
            }),
            Value::Array(pair) => {
                let entity_id = pair.first()?.as_str()?.to_string();
                let label = pair.get(1).and_then(Value::as_str).map(str::to_string);
                Some(ListEntry { entity_id, label })
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
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
    fn on_state_vocabulary() {
        for s in ["on", "ON", "true", "1", "home", "open", "unlocked", "Home"] {
            let entity = EntityState::new("binary_sensor.x", s);
            assert!(is_entity_on(Some(&entity)), "{s} should be on");
        }
        for s in ["off", "false", "0", "away", "closed", "locked", "unknown"] {
            let entity = EntityState::new("binary_sensor.x", s);
            assert!(!is_entity_on(Some(&entity)), "{s} should be off");
        }
        assert!(!is_entity_on(None));
    }

    #[test]
    fn status_renders_indicator() {
        let widget = StatusWidget::new(
            WidgetConfig::new("status", 0)
                .entity("binary_sensor.door")
                .label("Front Door"),
        );
        let state = WidgetState::new()
            .with_entity(EntityState::new("binary_sensor.door", "open"));
        let tree = render_with(|ctx| widget.render(ctx, &state));
        let Component::Status(display) = tree else {
            panic!("expected status indicator");
        };
        assert!(display.is_on);
        assert_eq!(display.name, "Front Door");
    }

    #[test]
    fn status_list_collects_every_entry() {
        let widget = StatusListWidget::new(
            WidgetConfig::new("status_list", 0).option(
                "entities",
                json!([
                    "binary_sensor.door",
                    ["binary_sensor.window", "Window"],
                ]),
            ),
        );
        assert_eq!(
            widget.entities(),
            vec!["binary_sensor.door", "binary_sensor.window"]
        );

        let state = WidgetState::new()
            .with_secondary(EntityState::new("binary_sensor.door", "on"))
            .with_secondary(EntityState::new("binary_sensor.window", "off"));
        let tree = render_with(|ctx| widget.render(ctx, &state));
        let Component::StatusList(display) = tree else {
            panic!("expected status list");
        };
        assert_eq!(display.items.len(), 2);
        assert!(display.items[0].is_on);
        assert!(!display.items[1].is_on);
        assert_eq!(display.items[1].label, "Window");
    }

    #[test]
    fn missing_list_entities_fall_back_to_ids() {
        let widget = StatusListWidget::new(
            WidgetConfig::new("status_list", 0)
                .option("entities", json!(["binary_sensor.ghost"])),
        );
        let tree = render_with(|ctx| widget.render(ctx, &WidgetState::new()));
        let Component::StatusList(display) = tree else {
            panic!("expected status list");
        };
        assert_eq!(display.items[0].label, "binary_sensor.ghost");
        assert!(!display.items[0].is_on);
    }
}
