//! Widget configuration with an open options map.
//!
//! The configuration layer upstream validates and defaults these; widget
//! constructors only extract the knobs they understand and fall back to
//! documented defaults for everything else.

use embedded_graphics::pixelcolor::Rgb888;
use serde_json::{Map, Value};

/// Immutable configuration for one widget instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetConfig {
    /// Widget type tag ("clock", "gauge", ...).
    pub widget_type: String,
    /// Target slot index.
    pub slot: usize,
    /// Primary entity id.
    pub entity_id: Option<String>,
    /// Label override.
    pub label: Option<String>,
    /// Accent color override.
    pub color: Option<Rgb888>,
    /// Widget-specific knobs.
    pub options: Map<String, Value>,
}

impl WidgetConfig {
    /// New configuration for a widget type and slot.
    pub fn new(widget_type: impl Into<String>, slot: usize) -> Self {
        Self {
            widget_type: widget_type.into(),
            slot,
            ..Self::default()
        }
    }

    /// Builder: set the entity id.
    #[must_use]
    pub fn entity(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Builder: set the label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Builder: set the accent color.
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder: set one option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    /// Boolean option with a default.
    pub fn opt_bool(&self, key: &str, default: bool) -> bool {
        self.options
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    /// String option.
    pub fn opt_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    /// Numeric option with a default; numeric strings are accepted.
    pub fn opt_f64(&self, key: &str, default: f64) -> f64 {
        match self.options.get(key) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
            Some(Value::String(s)) => s.parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Unsigned integer option with a default.
    pub fn opt_usize(&self, key: &str, default: usize) -> usize {
        self.options
            .get(key)
            .and_then(Value::as_u64)
            .map_or(default, |v| v as usize)
    }

    /// Color option parsed from an `[r, g, b]` array.
    pub fn opt_color(&self, key: &str) -> Option<Rgb888> {
        self.options.get(key).and_then(parse_color)
    }
}

/// Parse an `[r, g, b]` JSON array into a color.
pub fn parse_color(value: &Value) -> Option<Rgb888> {
    let array = value.as_array()?;
    if array.len() != 3 {
        return None;
    }
    let channel = |v: &Value| -> Option<u8> {
        let n = v.as_u64()?;
        Some(n.min(255) as u8)
    };
    Some(Rgb888::new(
        channel(&array[0])?,
        channel(&array[1])?,
        channel(&array[2])?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_accessors_with_defaults() {
        let config = WidgetConfig::new("gauge", 0)
            .option("show_value", false)
            .option("max", 200)
            .option("style", "ring");

        assert!(!config.opt_bool("show_value", true));
        assert!(config.opt_bool("missing", true));
        assert!((config.opt_f64("max", 100.0) - 200.0).abs() < f64::EPSILON);
        assert!((config.opt_f64("min", 0.0)).abs() < f64::EPSILON);
        assert_eq!(config.opt_str("style"), Some("ring"));
    }

    #[test]
    fn numeric_strings_accepted() {
        let config = WidgetConfig::new("gauge", 0).option("max", "90");
        assert!((config.opt_f64("max", 0.0) - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn color_parsing() {
        assert_eq!(
            parse_color(&json!([0, 255, 128])),
            Some(Rgb888::new(0, 255, 128))
        );
        assert_eq!(parse_color(&json!([0, 255])), None);
        assert_eq!(parse_color(&json!("red")), None);
        assert_eq!(parse_color(&json!([500, 0, 0])), Some(Rgb888::new(255, 0, 0)));
    }

    #[test]
    fn opt_color_reads_arrays() {
        let config = WidgetConfig::new("status", 0).option("on_color", json!([1, 2, 3]));
        assert_eq!(config.opt_color("on_color"), Some(Rgb888::new(1, 2, 3)));
        assert_eq!(config.opt_color("off_color"), None);
    }
}
