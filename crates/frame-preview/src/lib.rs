//! Pure preview rendering
//!
//! Turns a declarative screen description (layout name + widget
//! descriptors) into an encoded PNG with no live backing state: the
//! [`SampleStates`] source fabricates plausible values, or a caller can
//! supply its own [`StateSource`] wrapping real data. Used by
//! configuration-time previews, image-generation scripts and the
//! end-to-end tests.
//!
//! # Example
//!
//! ```
//! use embedded_graphics::prelude::Size;
//! use frame_preview::{render_screen_preview, ScreenDescriptor, WidgetDescriptor};
//!
//! let screen = ScreenDescriptor {
//!     layout: "grid_2x2".to_string(),
//!     widgets: vec![WidgetDescriptor::new("clock", 0)],
//! };
//! let png = render_screen_preview(&screen, Size::new(240, 240)).unwrap();
//! assert!(!png.is_empty());
//! ```

mod descriptor;
mod source;

use std::collections::HashMap;

use embedded_graphics::prelude::*;
use frame_layouts::{Layout, LayoutError};
use frame_surface::{encode_png, Canvas, CanvasError, EncodeError};
use frame_system::Theme;
use frame_widgets::{Widget, WidgetState};

pub use descriptor::{ScreenDescriptor, WidgetDescriptor};
pub use source::{sample_time, SampleStates, StateSource};

/// Error raised when a preview cannot be produced.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    /// The target dimensions were degenerate.
    #[error(transparent)]
    Canvas(#[from] CanvasError),
    /// The layout rejected the target dimensions.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// PNG encoding failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl From<core::convert::Infallible> for PreviewError {
    fn from(never: core::convert::Infallible) -> Self {
        match never {}
    }
}

/// Assemble the widget state for one descriptor from a source.
fn build_state(
    descriptor: &WidgetDescriptor,
    widget: &Widget,
    source: &dyn StateSource,
) -> WidgetState {
    let mut state = WidgetState::new().at(source.now());

    if let Some(entity_id) = &descriptor.entity_id {
        state.entity = source.entity(entity_id, &descriptor.widget_type);
        state.history = source.history(entity_id);
        state.forecast = source.forecast(entity_id);
        state.image = source.image(entity_id);
    }

    // Multi-entity widgets list every dependency themselves
    for entity_id in widget.entities() {
        if state.get_entity(&entity_id).is_none() {
            if let Some(entity) = source.entity(&entity_id, &descriptor.widget_type) {
                state.entities.insert(entity_id, entity);
            }
        }
    }
    state
}

/// Render a screen to PNG bytes using the given state source.
///
/// Unknown layout names fall back to the 2×2 grid and unknown widget
/// tags render blank slots; the only errors are degenerate dimensions
/// and encoder failures.
///
/// # Errors
///
/// Returns [`PreviewError`] for zero dimensions or codec failures.
pub fn render_preview(
    layout_name: &str,
    widgets: &[WidgetDescriptor],
    size: Size,
    source: &dyn StateSource,
) -> Result<Vec<u8>, PreviewError> {
    let theme = Theme::classic();
    let mut canvas = Canvas::new(size)?;
    canvas.fill(theme.background);

    let mut layout = Layout::from_name(layout_name, size)?;
    let mut states: HashMap<usize, WidgetState> = HashMap::new();

    for descriptor in widgets {
        let widget = Widget::from_config(descriptor.to_config());
        states.insert(descriptor.slot, build_state(descriptor, &widget, source));
        layout.set_widget(descriptor.slot, widget);
    }

    layout.render(&mut canvas, &states, &theme)?;
    Ok(encode_png(&canvas)?)
}

/// Render a screen description with fabricated sample values.
///
/// # Errors
///
/// Returns [`PreviewError`] for zero dimensions or codec failures.
pub fn render_screen_preview(
    screen: &ScreenDescriptor,
    size: Size,
) -> Result<Vec<u8>, PreviewError> {
    render_preview(&screen.layout, &screen.widgets, size, &SampleStates)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn preview_produces_exact_dimensions() {
        let widgets = [
            WidgetDescriptor::new("clock", 0),
            WidgetDescriptor::new("entity", 1).entity("sensor.temp"),
        ];
        let png = render_preview(
            "grid_2x2",
            &widgets,
            Size::new(240, 240),
            &SampleStates,
        )
        .unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), 240);
        assert_eq!(decoded.height(), 240);
    }

    #[test]
    fn unknown_layout_and_widget_still_render() {
        let widgets = [WidgetDescriptor::new("holo_display", 0)];
        let png =
            render_preview("warp_grid", &widgets, Size::new(240, 240), &SampleStates).unwrap();
        assert!(!png.is_empty());
    }

    #[test]
    fn zero_size_is_an_error() {
        let result = render_preview("grid_2x2", &[], Size::new(0, 0), &SampleStates);
        assert!(result.is_err());
    }

    #[test]
    fn identical_descriptors_yield_identical_bytes() {
        let screen = ScreenDescriptor {
            layout: "hero".to_string(),
            widgets: vec![
                WidgetDescriptor::new("weather", 0).entity("weather.home"),
                WidgetDescriptor::new("clock", 1),
            ],
        };
        let a = render_screen_preview(&screen, Size::new(240, 240)).unwrap();
        let b = render_screen_preview(&screen, Size::new(240, 240)).unwrap();
        assert_eq!(a, b);
    }
}
