//! Serde descriptors for a screen: layout name + widget list.

use frame_widgets::WidgetConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One widget in a screen description.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WidgetDescriptor {
    /// Widget type tag.
    #[serde(rename = "type")]
    pub widget_type: String,
    /// Target slot index.
    pub slot: usize,
    /// Primary entity id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,
    /// Label override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Accent color as `[r, g, b]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<[u8; 3]>,
    /// Widget-specific knobs.
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl WidgetDescriptor {
    /// New descriptor for a widget type and slot.
    pub fn new(widget_type: impl Into<String>, slot: usize) -> Self {
        Self {
            widget_type: widget_type.into(),
            slot,
            entity_id: None,
            label: None,
            color: None,
            options: Map::new(),
        }
    }

    /// Builder: set the entity id.
    #[must_use]
    pub fn entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Builder: set one option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Convert into the engine's widget configuration.
    pub fn to_config(&self) -> WidgetConfig {
        WidgetConfig {
            widget_type: self.widget_type.clone(),
            slot: self.slot,
            entity_id: self.entity_id.clone(),
            label: self.label.clone(),
            color: self
                .color
                .map(|[r, g, b]| embedded_graphics::pixelcolor::Rgb888::new(r, g, b)),
            options: self.options.clone(),
        }
    }
}

/// A complete screen description.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScreenDescriptor {
    /// Layout scheme name.
    pub layout: String,
    /// Widgets keyed to slots.
    #[serde(default)]
    pub widgets: Vec<WidgetDescriptor>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_from_config_json() {
        let screen: ScreenDescriptor = serde_json::from_value(json!({
            "layout": "grid_2x2",
            "widgets": [
                {"type": "clock", "slot": 0},
                {
                    "type": "entity",
                    "slot": 1,
                    "entity_id": "sensor.temp",
                    "color": [0, 255, 255],
                    "options": {"show_name": false}
                },
            ]
        }))
        .unwrap();

        assert_eq!(screen.layout, "grid_2x2");
        assert_eq!(screen.widgets.len(), 2);
        let config = screen.widgets[1].to_config();
        assert_eq!(config.entity_id.as_deref(), Some("sensor.temp"));
        assert!(!config.opt_bool("show_name", true));
        assert_eq!(
            config.color,
            Some(embedded_graphics::pixelcolor::Rgb888::new(0, 255, 255))
        );
    }

    #[test]
    fn round_trips_through_json() {
        let descriptor = WidgetDescriptor::new("gauge", 2)
            .entity("sensor.cpu")
            .option("style", "ring");
        let text = serde_json::to_string(&descriptor).unwrap();
        let back: WidgetDescriptor = serde_json::from_str(&text).unwrap();
        assert_eq!(descriptor, back);
    }
}
