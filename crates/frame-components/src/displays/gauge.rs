//! Gauge readouts: bar, ring and arc styles over one percent/value/label
//! model.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::textutil::{estimate_max_chars, truncate, TruncateStyle};

/// Bar-style gauge: label and value on top, bar underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGaugeDisplay {
    /// Fill percentage (0–100).
    pub percent: f32,
    /// Value text (unit already appended); empty hides it.
    pub value: String,
    /// Label drawn upper-cased; empty hides it.
    pub label: String,
    /// Bar and value color.
    pub color: Rgb888,
    /// Optional icon left of the label.
    pub icon: Option<String>,
    /// Track color; `None` uses the theme's bar background.
    pub background: Option<Rgb888>,
}

impl BarGaugeDisplay {
    /// New bar gauge.
    pub fn new(percent: f32, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            percent,
            value: value.into(),
            label: label.into(),
            color: frame_system::color::CYAN,
            icon: None,
            background: None,
        }
    }

    /// Set the accent color.
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Attach an icon.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
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
        let width = bounds.size.width;
        let height = bounds.size.height;
        let padding = (width as f32 * 0.05) as i32;
        let font_label = ctx.font(FontClass::Small, false);
        let font_value = ctx.font(FontClass::Regular, false);

        let top_y = bounds.top_left.y + (height as f32 * 0.30) as i32;
        let mut text_x = bounds.top_left.x + padding;

        if let Some(icon) = &self.icon {
            let icon_size = ((height as f32 * 0.22) as u32).clamp(10, 28);
            ctx.draw_icon(
                icon,
                Point::new(text_x, top_y - icon_size as i32 / 2),
                icon_size,
                self.color,
            )?;
            text_x += icon_size as i32 + 4;
        }

        if !self.label.is_empty() {
            let budget = estimate_max_chars(width / 2, 7, 8);
            let label = truncate(&self.label.to_uppercase(), budget, TruncateStyle::Middle);
            ctx.draw_text(
                &label,
                Point::new(text_x, top_y),
                &font_label,
                frame_system::color::GRAY,
                Anchor::Left,
            )?;
        }

        if !self.value.is_empty() {
            ctx.draw_text(
                &self.value,
                Point::new(bounds.top_left.x + width as i32 - padding, top_y),
                &font_value,
                frame_system::color::WHITE,
                Anchor::Right,
            )?;
        }

        let bar_height = ((height as f32 * 0.17) as u32).max(4);
        let bar_y = bounds.top_left.y + (height as f32 * 0.60) as i32;
        let bar_rect = Rectangle::new(
            Point::new(bounds.top_left.x + padding, bar_y),
            Size::new(
                width.saturating_sub(padding as u32 * 2),
                bar_height,
            ),
        );
        ctx.draw_bar(bar_rect, self.percent, self.color, self.background)
    }
}

/// Ring-style gauge with the value inside the ring.
#[derive(Debug, Clone, PartialEq)]
pub struct RingGaugeDisplay {
    /// Fill percentage (0–100).
    pub percent: f32,
    /// Value text drawn in the ring center.
    pub value: String,
    /// Label drawn upper-cased under the ring; empty hides it.
    pub label: String,
    /// Ring and value color.
    pub color: Rgb888,
    /// Track color; `None` uses the theme's bar background.
    pub background: Option<Rgb888>,
}

impl RingGaugeDisplay {
    /// New ring gauge.
    pub fn new(percent: f32, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            percent,
            value: value.into(),
            label: label.into(),
            color: frame_system::color::CYAN,
            background: None,
        }
    }

    /// Set the accent color.
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
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
        let width = bounds.size.width;
        let height = bounds.size.height;
        let has_label = !self.label.is_empty();
        let ring_area_h = if has_label {
            (height as f32 * 0.80) as u32
        } else {
            height
        };

        let size = width.min(ring_area_h);
        let radius = size / 2;
        let thickness = (radius / 5).max(4);
        let center = Point::new(
            bounds.top_left.x + width as i32 / 2,
            bounds.top_left.y + ring_area_h as i32 / 2,
        );
        ctx.draw_ring_gauge(
            center,
            radius.saturating_sub(thickness).max(1),
            self.percent,
            self.color,
            self.background,
            thickness,
        )?;

        if !self.value.is_empty() {
            let inner = radius.saturating_sub(thickness * 2).saturating_mul(2);
            let font = ctx.fit_text(
                &self.value,
                Size::new(
                    (inner as f32 * 0.85) as u32,
                    (inner as f32 * 0.55) as u32,
                ),
                true,
            );
            ctx.draw_text(&self.value, center, &font, self.color, Anchor::Center)?;
        }

        if has_label {
            let font = ctx.font(FontClass::Small, false);
            let label_y = bounds.top_left.y + (height as f32 * 0.90) as i32;
            ctx.draw_text(
                &self.label.to_uppercase(),
                Point::new(bounds.top_left.x + width as i32 / 2, label_y),
                &font,
                frame_system::color::GRAY,
                Anchor::Center,
            )?;
        }
        Ok(())
    }
}

/// Arc-style gauge (270° meter) with the value in the middle and the
/// label in the bottom opening.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGaugeDisplay {
    /// Fill percentage (0–100).
    pub percent: f32,
    /// Value text drawn in the arc center.
    pub value: String,
    /// Label drawn upper-cased in the arc opening; empty hides it.
    pub label: String,
    /// Arc and value color.
    pub color: Rgb888,
    /// Track color; `None` uses the theme's bar background.
    pub background: Option<Rgb888>,
}

impl ArcGaugeDisplay {
    /// New arc gauge.
    pub fn new(percent: f32, value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            percent,
            value: value.into(),
            label: label.into(),
            color: frame_system::color::CYAN,
            background: None,
        }
    }

    /// Set the accent color.
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
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
        let width = bounds.size.width;
        let height = bounds.size.height;
        let size = width.min(height);
        let arc_width = ((size as f32 * 0.10) as u32).max(6);
        let arc_rect = Rectangle::new(
            Point::new(
                bounds.top_left.x + (width as i32 - size as i32) / 2,
                bounds.top_left.y + (height as i32 - size as i32) / 2,
            ),
            Size::new(size, size),
        );
        ctx.draw_arc_gauge(arc_rect, self.percent, self.color, self.background, arc_width)?;

        let center = arc_rect.center();
        if !self.value.is_empty() {
            let inner = size.saturating_sub(arc_width * 4);
            let font = ctx.fit_text(
                &self.value,
                Size::new(
                    (inner as f32 * 0.90) as u32,
                    (inner as f32 * 0.45) as u32,
                ),
                true,
            );
            ctx.draw_text(&self.value, center, &font, self.color, Anchor::Center)?;
        }

        if !self.label.is_empty() {
            let font = ctx.font(FontClass::Tiny, false);
            let label_y = arc_rect.top_left.y + (size as f32 * 0.92) as i32;
            ctx.draw_text(
                &self.label.to_uppercase(),
                Point::new(center.x, label_y),
                &font,
                frame_system::color::GRAY,
                Anchor::Center,
            )?;
        }
        Ok(())
    }
}
