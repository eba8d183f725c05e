//! Explicit tag → constructor table for widget types.
//!
//! The table is a plain inspectable slice rather than any kind of
//! reflective discovery, so unknown tags fail predictably: they build
//! the documented no-op widget and log a warning.

use crate::attribute_list::AttributeListWidget;
use crate::camera::CameraWidget;
use crate::chart::ChartWidget;
use crate::clock::ClockWidget;
use crate::config::WidgetConfig;
use crate::entity::EntityWidget;
use crate::gauge::GaugeWidget;
use crate::media::MediaWidget;
use crate::progress::{MultiProgressWidget, ProgressWidget};
use crate::status::{StatusListWidget, StatusWidget};
use crate::text::TextWidget;
use crate::weather::WeatherWidget;
use crate::widget::{NoopWidget, Widget};

/// Constructor signature every entry shares.
pub type Constructor = fn(WidgetConfig) -> Widget;

fn make_clock(config: WidgetConfig) -> Widget {
    Widget::Clock(ClockWidget::new(config))
}
fn make_entity(config: WidgetConfig) -> Widget {
    Widget::Entity(EntityWidget::new(config))
}
fn make_gauge(config: WidgetConfig) -> Widget {
    Widget::Gauge(GaugeWidget::new(config))
}
fn make_chart(config: WidgetConfig) -> Widget {
    Widget::Chart(ChartWidget::new(config))
}
fn make_weather(config: WidgetConfig) -> Widget {
    Widget::Weather(WeatherWidget::new(config))
}
fn make_media(config: WidgetConfig) -> Widget {
    Widget::Media(MediaWidget::new(config))
}
fn make_status(config: WidgetConfig) -> Widget {
    Widget::Status(StatusWidget::new(config))
}
fn make_status_list(config: WidgetConfig) -> Widget {
    Widget::StatusList(StatusListWidget::new(config))
}
fn make_progress(config: WidgetConfig) -> Widget {
    Widget::Progress(ProgressWidget::new(config))
}
fn make_multi_progress(config: WidgetConfig) -> Widget {
    Widget::MultiProgress(MultiProgressWidget::new(config))
}
fn make_text(config: WidgetConfig) -> Widget {
    Widget::Text(TextWidget::new(config))
}
fn make_attribute_list(config: WidgetConfig) -> Widget {
    Widget::AttributeList(AttributeListWidget::new(config))
}
fn make_camera(config: WidgetConfig) -> Widget {
    Widget::Camera(CameraWidget::new(config))
}

/// Every registered widget tag with its constructor.
pub const WIDGET_REGISTRY: &[(&str, Constructor)] = &[
    ("attribute_list", make_attribute_list),
    ("camera", make_camera),
    ("chart", make_chart),
    ("clock", make_clock),
    ("entity", make_entity),
    ("gauge", make_gauge),
    ("media", make_media),
    ("multi_progress", make_multi_progress),
    ("progress", make_progress),
    ("status", make_status),
    ("status_list", make_status_list),
    ("text", make_text),
    ("weather", make_weather),
];

/// Look a constructor up by tag.
pub fn constructor_for(tag: &str) -> Option<Constructor> {
    WIDGET_REGISTRY
        .iter()
        .find(|(name, _)| *name == tag)
        .map(|(_, ctor)| *ctor)
}

/// Build a widget from its configuration.
///
/// Unknown tags produce the no-op widget (blank slot) rather than an
/// error.
pub fn build(config: WidgetConfig) -> Widget {
    match constructor_for(&config.widget_type) {
        Some(ctor) => ctor(config),
        None => {
            tracing::warn!(
                widget_type = %config.widget_type,
                slot = config.slot,
                "unknown widget type, rendering nothing"
            );
            Widget::Noop(NoopWidget)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_constructs_its_variant() {
        for (tag, _) in WIDGET_REGISTRY {
            let widget = build(WidgetConfig::new(*tag, 0));
            assert!(
                !matches!(widget, Widget::Noop(_)),
                "{tag} built the no-op widget"
            );
        }
    }

    #[test]
    fn unknown_tag_builds_noop() {
        let widget = build(WidgetConfig::new("holographic", 3));
        assert!(matches!(widget, Widget::Noop(_)));
        assert!(widget.entities().is_empty());
    }

    #[test]
    fn registry_is_sorted_and_unique() {
        let tags: Vec<&str> = WIDGET_REGISTRY.iter().map(|(tag, _)| *tag).collect();
        let mut sorted = tags.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(tags, sorted);
    }
}
