//! Camera snapshot widget.

use frame_components::prelude::*;

use crate::config::WidgetConfig;
use crate::state::WidgetState;

/// Shows the pre-fetched camera snapshot, or a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraWidget {
    config: WidgetConfig,
    show_label: bool,
    fit: FitMode,
}

impl CameraWidget {
    /// Build from configuration (`show_label`, `fit` options).
    pub fn new(config: WidgetConfig) -> Self {
        let show_label = config.opt_bool("show_label", false);
        let fit = FitMode::from_name(config.opt_str("fit").unwrap_or("contain"));
        Self {
            config,
            show_label,
            fit,
        }
    }

    /// The configured camera entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the snapshot tree; a missing bitmap yields the placeholder.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let Some(image) = &state.image else {
            return camera_placeholder(self.config.label.as_deref().unwrap_or("No Image"));
        };

        let mut display = CameraImage::new(image.clone()).fit(self.fit);
        if self.show_label {
            let label = self
                .config
                .label
                .clone()
                .or_else(|| {
                    state
                        .entity
                        .as_ref()
                        .map(|e| e.friendly_name().to_string())
                })
                .unwrap_or_else(|| "Camera".to_string());
            display = display.label(label);
            display.color = self.config.color.unwrap_or(frame_system::color::WHITE);
        }
        display.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::{Point, Size};
    use embedded_graphics::primitives::Rectangle;
    use frame_surface::Canvas;

    fn render(widget: &CameraWidget, state: &WidgetState) -> Component {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(224, 148)),
            Theme::classic(),
        );
        widget.render(&ctx, state)
    }

    #[test]
    fn placeholder_without_snapshot() {
        let widget = CameraWidget::new(WidgetConfig::new("camera", 0).entity("camera.door"));
        assert!(matches!(
            render(&widget, &WidgetState::new()),
            Component::Column(_)
        ));
    }

    #[test]
    fn snapshot_flows_through_with_fit() {
        let widget = CameraWidget::new(
            WidgetConfig::new("camera", 0)
                .entity("camera.door")
                .option("fit", "cover")
                .option("show_label", true)
                .label("Door"),
        );
        let snapshot = image::RgbImage::from_pixel(8, 8, image::Rgb([1, 2, 3]));
        let state = WidgetState::new().with_image(snapshot);
        let Component::CameraImage(display) = render(&widget, &state) else {
            panic!("expected camera image");
        };
        assert_eq!(display.fit, FitMode::Cover);
        assert_eq!(display.label.as_deref(), Some("Door"));
    }
}
