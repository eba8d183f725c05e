//! State sources for preview rendering.

use chrono::{NaiveDate, NaiveDateTime};
use frame_components::ForecastDay;
use frame_widgets::EntityState;
use image::RgbImage;

/// Supplies entity snapshots for a preview render.
///
/// The live implementation wraps whatever state store the host platform
/// offers; [`SampleStates`] fabricates plausible values so screens can
/// be previewed with no backing state at all. `widget_type` is passed so
/// synthetic sources can shape the mock to the widget (a gauge wants a
/// percentage, a media widget wants track metadata); live sources ignore
/// it.
pub trait StateSource {
    /// Snapshot for an entity id, if known.
    fn entity(&self, entity_id: &str, widget_type: &str) -> Option<EntityState>;

    /// History series for an entity, oldest first.
    fn history(&self, _entity_id: &str) -> Vec<f64> {
        Vec::new()
    }

    /// Forecast for a weather entity.
    fn forecast(&self, _entity_id: &str) -> Vec<ForecastDay> {
        Vec::new()
    }

    /// Camera snapshot for an entity.
    fn image(&self, _entity_id: &str) -> Option<RgbImage> {
        None
    }

    /// Render timestamp.
    fn now(&self) -> NaiveDateTime {
        sample_time()
    }
}

/// Fixed timestamp used by synthetic previews, so identical descriptors
/// produce identical images.
pub fn sample_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 15)
        .and_then(|d| d.and_hms_opt(10, 30, 0))
        .unwrap_or_default()
}

/// Fabricated sample values keyed by widget type.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStates;

impl StateSource for SampleStates {
    fn entity(&self, entity_id: &str, widget_type: &str) -> Option<EntityState> {
        let entity = match widget_type {
            "gauge" => EntityState::new(entity_id, "65")
                .attr("unit_of_measurement", "%")
                .attr("friendly_name", "Gauge"),
            "progress" | "multi_progress" => EntityState::new(entity_id, "75")
                .attr("friendly_name", "Progress"),
            "status" | "status_list" => {
                EntityState::new(entity_id, "on").attr("friendly_name", "Status")
            }
            "media" => EntityState::new(entity_id, "playing")
                .attr("friendly_name", "Media Player")
                .attr("media_title", "Sample Track")
                .attr("media_artist", "Sample Artist")
                .attr("media_position", 120)
                .attr("media_duration", 300),
            "chart" => EntityState::new(entity_id, "23")
                .attr("unit_of_measurement", "°C")
                .attr("friendly_name", "Chart"),
            "weather" => EntityState::new(entity_id, "sunny")
                .attr("friendly_name", "Weather")
                .attr("temperature", 24)
                .attr("humidity", 60),
            "attribute_list" => EntityState::new(entity_id, "3 min")
                .attr("friendly_name", "Attributes")
                .attr("route", "42B")
                .attr("destination", "Downtown"),
            "camera" => EntityState::new(entity_id, "recording")
                .attr("friendly_name", "Camera"),
            _ => EntityState::new(entity_id, "42").attr("friendly_name", "Entity"),
        };
        Some(entity)
    }

    fn history(&self, _entity_id: &str) -> Vec<f64> {
        vec![21.0, 21.4, 22.1, 22.8, 22.5, 23.2, 23.8, 23.4, 23.0, 23.0]
    }

    fn forecast(&self, _entity_id: &str) -> Vec<ForecastDay> {
        vec![
            ForecastDay {
                datetime: "2025-06-16T00:00:00+00:00".to_string(),
                condition: "sunny".to_string(),
                temperature: 26.0,
                templow: Some(17.0),
            },
            ForecastDay {
                datetime: "2025-06-17T00:00:00+00:00".to_string(),
                condition: "partlycloudy".to_string(),
                temperature: 24.0,
                templow: Some(16.0),
            },
            ForecastDay {
                datetime: "2025-06-18T00:00:00+00:00".to_string(),
                condition: "rainy".to_string(),
                temperature: 19.0,
                templow: Some(13.0),
            },
        ]
    }

    fn image(&self, _entity_id: &str) -> Option<RgbImage> {
        // Diagonal gradient stand-in for a camera frame
        Some(RgbImage::from_fn(64, 48, |x, y| {
            let v = ((x * 3 + y * 4) % 255) as u8;
            image::Rgb([v / 2, v / 2, v])
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_entity_matches_widget_type() {
        let source = SampleStates;
        let gauge = source.entity("sensor.x", "gauge");
        assert_eq!(gauge.map(|e| e.state), Some("65".to_string()));

        let weather = source.entity("weather.home", "weather");
        assert_eq!(weather.map(|e| e.state), Some("sunny".to_string()));
    }

    #[test]
    fn sample_time_is_fixed() {
        assert_eq!(sample_time(), sample_time());
    }

    #[test]
    fn sample_history_and_forecast_are_nonempty() {
        let source = SampleStates;
        assert!(source.history("sensor.x").len() >= 2);
        assert_eq!(source.forecast("weather.home").len(), 3);
        assert!(source.image("camera.door").is_some());
    }
}
