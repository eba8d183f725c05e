//! Preview rendering across every widget type and layout scheme.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use embedded_graphics::prelude::Size;
use frame_preview::{
    render_preview, render_screen_preview, SampleStates, ScreenDescriptor, WidgetDescriptor,
};

#[test]
fn every_widget_type_previews_cleanly() {
    for (tag, _) in frame_widgets::registry::WIDGET_REGISTRY {
        let descriptor = WidgetDescriptor::new(*tag, 0).entity("sensor.sample");
        let png = render_preview(
            "fullscreen",
            &[descriptor],
            Size::new(240, 240),
            &SampleStates,
        )
        .unwrap_or_else(|e| panic!("{tag} preview failed: {e}"));

        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 240, "{tag} wrong width");
        assert_eq!(decoded.height(), 240, "{tag} wrong height");
    }
}

#[test]
fn every_layout_scheme_previews_cleanly() {
    for (name, _) in frame_layouts::LAYOUT_REGISTRY {
        let widgets = [
            WidgetDescriptor::new("clock", 0),
            WidgetDescriptor::new("entity", 1).entity("sensor.temp"),
        ];
        let png =
            render_preview(name, &widgets, Size::new(240, 240), &SampleStates).unwrap();
        assert!(!png.is_empty(), "{name} produced empty png");
    }
}

#[test]
fn screen_preview_from_json_descriptor() {
    let screen: ScreenDescriptor = serde_json::from_str(
        r#"{
            "layout": "sidebar_left",
            "widgets": [
                {"type": "weather", "slot": 0, "entity_id": "weather.home"},
                {"type": "clock", "slot": 1},
                {"type": "gauge", "slot": 2, "entity_id": "sensor.cpu",
                 "options": {"style": "ring"}},
                {"type": "status", "slot": 3, "entity_id": "binary_sensor.door"}
            ]
        }"#,
    )
    .unwrap();

    let png = render_screen_preview(&screen, Size::new(240, 240)).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgb8();

    // Something was actually drawn on the dark background
    let lit = decoded.pixels().filter(|p| p.0 != [0, 0, 0]).count();
    assert!(lit > 500, "only {lit} non-background pixels");
}

#[test]
fn out_of_range_slot_in_descriptor_is_ignored() {
    let widgets = [
        WidgetDescriptor::new("clock", 0),
        WidgetDescriptor::new("clock", 99),
    ];
    let png = render_preview("grid_2x2", &widgets, Size::new(240, 240), &SampleStates).unwrap();
    assert!(!png.is_empty());
}

#[test]
fn preview_works_at_480() {
    let screen = ScreenDescriptor {
        layout: "hero_br".to_string(),
        widgets: vec![
            WidgetDescriptor::new("chart", 3).entity("sensor.temp"),
            WidgetDescriptor::new("media", 4).entity("media_player.living"),
        ],
    };
    let png = render_screen_preview(&screen, Size::new(480, 480)).unwrap();
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (480, 480));
}
