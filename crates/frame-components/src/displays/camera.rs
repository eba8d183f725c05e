//! Camera snapshot face.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;
use image::RgbImage;

use crate::component::Component;
use crate::containers::{Align, Column, Justify};
use crate::primitives::{Icon, Text};

/// Placeholder shown when no snapshot is available.
pub fn camera_placeholder(label: &str) -> Component {
    Column::new(vec![
        Icon::new("camera")
            .color(frame_system::color::GRAY)
            .max_size(48)
            .into(),
        Text::new(label)
            .font(FontClass::Small)
            .color(frame_system::color::GRAY)
            .into(),
    ])
    .gap(8)
    .align(Align::Center)
    .justify(Justify::Center)
    .into()
}

/// Decoded snapshot pasted with a fit mode, plus an optional label strip.
#[derive(Debug, Clone)]
pub struct CameraImage {
    /// The decoded snapshot.
    pub image: RgbImage,
    /// Label drawn in the bottom strip.
    pub label: Option<String>,
    /// Label color.
    pub color: Rgb888,
    /// How the snapshot maps onto the slot.
    pub fit: FitMode,
}

impl PartialEq for CameraImage {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
            && self.color == other.color
            && self.fit == other.fit
            && self.image.dimensions() == other.image.dimensions()
            && self.image.as_raw() == other.image.as_raw()
    }
}

impl CameraImage {
    /// New snapshot face.
    pub fn new(image: RgbImage) -> Self {
        Self {
            image,
            label: None,
            color: frame_system::color::WHITE,
            fit: FitMode::Contain,
        }
    }

    /// Attach a label strip.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the fit mode.
    #[must_use]
    pub fn fit(mut self, fit: FitMode) -> Self {
        self.fit = fit;
        self
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        max
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let height = bounds.size.height;

        let (image_rect, label_y) = match &self.label {
            Some(_) => {
                let label_height = (height as f32 * 0.15) as u32;
                (
                    Rectangle::new(
                        bounds.top_left,
                        Size::new(bounds.size.width, height.saturating_sub(label_height)),
                    ),
                    Some(bounds.top_left.y + height as i32 - label_height as i32 / 2),
                )
            }
            None => (bounds, None),
        };

        ctx.draw_image(&self.image, image_rect, self.fit)?;

        if let (Some(label), Some(label_y)) = (&self.label, label_y) {
            let font = ctx.font(FontClass::Small, false);
            ctx.draw_text(
                label,
                Point::new(
                    bounds.top_left.x + bounds.size.width as i32 / 2,
                    label_y,
                ),
                &font,
                self.color,
                Anchor::Center,
            )?;
        }
        Ok(())
    }
}
