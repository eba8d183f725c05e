//! End-to-end screen rendering: layouts + widgets + canvas.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashMap;

use chrono::NaiveDate;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_layouts::{Layout, LayoutScheme};
use frame_system::Theme;
use frame_testing::TestCanvas;
use frame_widgets::{EntityState, Widget, WidgetConfig, WidgetState};

fn clock_state() -> WidgetState {
    let now = NaiveDate::from_ymd_opt(2026, 8, 7)
        .and_then(|d| d.and_hms_opt(9, 41, 0))
        .unwrap();
    WidgetState::new().at(now)
}

fn temp_state() -> WidgetState {
    WidgetState::new().with_entity(
        EntityState::new("sensor.temp", "23.5")
            .attr("unit_of_measurement", "°C")
            .attr("friendly_name", "Outside"),
    )
}

#[test]
fn grid_with_clock_and_entity_renders_into_slots() {
    let mut layout =
        Layout::new(LayoutScheme::Grid { rows: 2, cols: 2 }, Size::new(240, 240)).unwrap();
    layout.set_widget(0, Widget::from_config(WidgetConfig::new("clock", 0)));
    layout.set_widget(
        1,
        Widget::from_config(WidgetConfig::new("entity", 1).entity("sensor.temp")),
    );

    let mut states = HashMap::new();
    states.insert(0, clock_state());
    states.insert(1, temp_state());

    let mut t = TestCanvas::new(240, 240);
    layout.render(&mut *t, &states, &Theme::classic()).unwrap();

    assert_eq!(t.png_round_trip(), (240, 240));

    // Both assigned slots got ink, inside their own rectangles
    let slot0 = layout.slot(0).unwrap().rect;
    let slot1 = layout.slot(1).unwrap().rect;
    assert!(t.region_has_ink(slot0), "clock slot stayed blank");
    assert!(t.region_has_ink(slot1), "entity slot stayed blank");

    // Unassigned slots stayed blank
    let slot2 = layout.slot(2).unwrap().rect;
    let slot3 = layout.slot(3).unwrap().rect;
    t.assert_blank(slot2);
    t.assert_blank(slot3);
}

#[test]
fn hero_with_unassigned_hero_slot_renders_blank_hero() {
    let mut layout = Layout::new(
        LayoutScheme::Hero {
            hero_ratio: 0.55,
            footer_count: 3,
        },
        Size::new(240, 240),
    )
    .unwrap();
    // Hero slot 0 left unassigned on purpose
    layout.set_widget(1, Widget::from_config(WidgetConfig::new("clock", 1)));

    let mut states = HashMap::new();
    states.insert(1, clock_state());

    let mut t = TestCanvas::new(240, 240);
    layout.render(&mut *t, &states, &Theme::classic()).unwrap();

    let hero = layout.slot(0).unwrap().rect;
    t.assert_blank(hero);
    assert!(t.region_has_ink(layout.slot(1).unwrap().rect));
}

#[test]
fn unknown_widget_type_renders_blank_slot() {
    let mut layout =
        Layout::new(LayoutScheme::Grid { rows: 2, cols: 2 }, Size::new(240, 240)).unwrap();
    layout.set_widget(
        0,
        Widget::from_config(WidgetConfig::new("definitely_not_a_widget", 0)),
    );

    let mut t = TestCanvas::new(240, 240);
    layout
        .render(&mut *t, &HashMap::new(), &Theme::classic())
        .unwrap();
    t.assert_blank(Rectangle::new(Point::zero(), Size::new(240, 240)));
}

#[test]
fn missing_state_renders_placeholders_without_failing() {
    let mut layout =
        Layout::new(LayoutScheme::Grid { rows: 2, cols: 2 }, Size::new(240, 240)).unwrap();
    for (i, widget_type) in ["entity", "gauge", "weather", "media"].iter().enumerate() {
        layout.set_widget(
            i,
            Widget::from_config(WidgetConfig::new(*widget_type, i).entity("sensor.ghost")),
        );
    }

    let mut t = TestCanvas::new(240, 240);
    layout
        .render(&mut *t, &HashMap::new(), &Theme::classic())
        .unwrap();

    // Placeholder visuals still produce ink in every slot
    for i in 0..4 {
        assert!(
            t.region_has_ink(layout.slot(i).unwrap().rect),
            "slot {i} placeholder stayed blank"
        );
    }
}

#[test]
fn every_registered_scheme_renders_a_full_screen() {
    for (name, _) in frame_layouts::LAYOUT_REGISTRY {
        let mut layout = Layout::from_name(name, Size::new(240, 240)).unwrap();
        for index in 0..layout.slot_count() {
            layout.set_widget(index, Widget::from_config(WidgetConfig::new("clock", index)));
        }
        let mut states = HashMap::new();
        for index in 0..layout.slot_count() {
            states.insert(index, clock_state());
        }

        let mut t = TestCanvas::new(240, 240);
        layout.render(&mut *t, &states, &Theme::classic()).unwrap();
        assert!(
            t.region_has_ink(Rectangle::new(Point::zero(), Size::new(240, 240))),
            "{name} rendered nothing"
        );
    }
}

#[test]
fn render_at_480_scales_the_same_screen() {
    let mut layout =
        Layout::new(LayoutScheme::Grid { rows: 2, cols: 2 }, Size::new(480, 480)).unwrap();
    layout.set_widget(
        1,
        Widget::from_config(WidgetConfig::new("entity", 1).entity("sensor.temp")),
    );
    let mut states = HashMap::new();
    states.insert(1, temp_state());

    let mut t = TestCanvas::new(480, 480);
    layout.render(&mut *t, &states, &Theme::classic()).unwrap();
    assert!(t.region_has_ink(layout.slot(1).unwrap().rect));
}

#[test]
fn light_theme_renders_without_errors() {
    let mut layout = Layout::new(LayoutScheme::Fullscreen, Size::new(240, 240)).unwrap();
    layout.set_widget(
        0,
        Widget::from_config(WidgetConfig::new("entity", 0).entity("sensor.temp")),
    );
    let mut states = HashMap::new();
    states.insert(0, temp_state());

    let theme = Theme::light();
    let mut t = TestCanvas::new(240, 240).with_background(theme.background);
    layout.render(&mut *t, &states, &theme).unwrap();
    assert!(t.region_has_ink(layout.slot(0).unwrap().rect));
}
