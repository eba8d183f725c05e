//! Immutable per-render state snapshots.
//!
//! The external coordinator assembles one [`WidgetState`] per widget per
//! render pass. Widgets never fetch anything themselves — given the same
//! state and configuration, `render` returns a structurally equal
//! component tree every time.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use frame_components::ForecastDay;
use image::RgbImage;
use serde_json::{Map, Value};

/// Immutable snapshot of one entity's state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntityState {
    /// Entity id ("sensor.living_room_temp").
    pub entity_id: String,
    /// The state value, encoded as text.
    pub state: String,
    /// Attribute map.
    pub attributes: Map<String, Value>,
}

impl EntityState {
    /// New snapshot without attributes.
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: Map::new(),
        }
    }

    /// Builder: add one attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Friendly name attribute, falling back to the entity id.
    pub fn friendly_name(&self) -> &str {
        self.attributes
            .get("friendly_name")
            .and_then(Value::as_str)
            .unwrap_or(&self.entity_id)
    }

    /// Unit of measurement attribute, empty when absent.
    pub fn unit(&self) -> &str {
        self.attributes
            .get("unit_of_measurement")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Icon attribute.
    pub fn icon(&self) -> Option<&str> {
        self.attributes.get("icon").and_then(Value::as_str)
    }

    /// Device class attribute.
    pub fn device_class(&self) -> Option<&str> {
        self.attributes.get("device_class").and_then(Value::as_str)
    }

    /// Raw attribute value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Attribute as a string slice.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }

    /// Attribute as a number, accepting numeric strings too.
    pub fn get_f64(&self, key: &str) -> Option<f64> {
        match self.attributes.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    /// The state parsed as a number, when it is one.
    pub fn numeric_state(&self) -> Option<f64> {
        self.state.trim().parse().ok()
    }
}

/// Everything a widget needs to render, injected by the coordinator.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    /// Primary entity (from the widget's configured entity id).
    pub entity: Option<EntityState>,
    /// Secondary entities for multi-entity widgets, keyed by id.
    pub entities: HashMap<String, EntityState>,
    /// Pre-fetched numeric history for charts, oldest first.
    pub history: Vec<f64>,
    /// Pre-fetched forecast for weather widgets, soonest first.
    pub forecast: Vec<ForecastDay>,
    /// Pre-fetched decoded camera snapshot.
    pub image: Option<RgbImage>,
    /// Render timestamp for clock widgets.
    pub now: Option<NaiveDateTime>,
}

impl WidgetState {
    /// Empty state: every widget degrades to its placeholder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the primary entity.
    #[must_use]
    pub fn with_entity(mut self, entity: EntityState) -> Self {
        self.entity = Some(entity);
        self
    }

    /// Builder: add a secondary entity.
    #[must_use]
    pub fn with_secondary(mut self, entity: EntityState) -> Self {
        self.entities.insert(entity.entity_id.clone(), entity);
        self
    }

    /// Builder: set the history series.
    #[must_use]
    pub fn with_history(mut self, history: Vec<f64>) -> Self {
        self.history = history;
        self
    }

    /// Builder: set the forecast.
    #[must_use]
    pub fn with_forecast(mut self, forecast: Vec<ForecastDay>) -> Self {
        self.forecast = forecast;
        self
    }

    /// Builder: set the camera snapshot.
    #[must_use]
    pub fn with_image(mut self, image: RgbImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Builder: set the render timestamp.
    #[must_use]
    pub fn at(mut self, now: NaiveDateTime) -> Self {
        self.now = Some(now);
        self
    }

    /// Look an entity up by id, primary first.
    pub fn get_entity(&self, entity_id: &str) -> Option<&EntityState> {
        if let Some(entity) = &self.entity {
            if entity.entity_id == entity_id {
                return Some(entity);
            }
        }
        self.entities.get(entity_id)
    }

    /// True when at least two history samples are available.
    pub fn has_history(&self) -> bool {
        self.history.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn friendly_name_falls_back_to_id() {
        let bare = EntityState::new("sensor.x", "1");
        assert_eq!(bare.friendly_name(), "sensor.x");

        let named = EntityState::new("sensor.x", "1").attr("friendly_name", "Kitchen");
        assert_eq!(named.friendly_name(), "Kitchen");
    }

    #[test]
    fn numeric_accessors() {
        let entity = EntityState::new("sensor.x", "23.5")
            .attr("temperature", 21)
            .attr("humidity", "64");
        assert_eq!(entity.numeric_state(), Some(23.5));
        assert_eq!(entity.get_f64("temperature"), Some(21.0));
        assert_eq!(entity.get_f64("humidity"), Some(64.0));
        assert_eq!(entity.get_f64("missing"), None);
    }

    #[test]
    fn non_numeric_state_is_none() {
        assert_eq!(EntityState::new("x", "on").numeric_state(), None);
    }

    #[test]
    fn get_entity_prefers_primary() {
        let state = WidgetState::new()
            .with_entity(EntityState::new("sensor.a", "1"))
            .with_secondary(EntityState::new("sensor.b", "2"));
        assert_eq!(state.get_entity("sensor.a").map(|e| e.state.as_str()), Some("1"));
        assert_eq!(state.get_entity("sensor.b").map(|e| e.state.as_str()), Some("2"));
        assert!(state.get_entity("sensor.c").is_none());
    }

    #[test]
    fn history_needs_two_samples() {
        assert!(!WidgetState::new().with_history(vec![1.0]).has_history());
        assert!(WidgetState::new().with_history(vec![1.0, 2.0]).has_history());
    }
}
