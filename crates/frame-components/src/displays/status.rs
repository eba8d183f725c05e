//! Binary status faces: single indicator and multi-row list.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::textutil::{estimate_max_chars, truncate, TruncateStyle};

/// One dot + name + status-text row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusIndicator {
    /// Display name.
    pub name: String,
    /// Current binary state.
    pub is_on: bool,
    /// Dot/status color when on.
    pub on_color: Rgb888,
    /// Dot/status color when off.
    pub off_color: Rgb888,
    /// Status text when on.
    pub on_text: String,
    /// Status text when off.
    pub off_text: String,
    /// Optional icon between dot and name.
    pub icon: Option<String>,
    /// Draw the status text on the right.
    pub show_status_text: bool,
}

impl StatusIndicator {
    /// New indicator with ON/OFF texts and lime/red colors.
    pub fn new(name: impl Into<String>, is_on: bool) -> Self {
        Self {
            name: name.into(),
            is_on,
            on_color: frame_system::color::LIME,
            off_color: frame_system::color::RED,
            on_text: "ON".to_string(),
            off_text: "OFF".to_string(),
            icon: None,
            show_status_text: true,
        }
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
        let center_y = bounds.top_left.y + height as i32 / 2;
        let font = ctx.font(FontClass::Small, false);
        let padding = (width as f32 * 0.06) as i32;
        let dot_radius = ((height as f32 * 0.12) as i32).max(3);
        let icon_size = ((height as f32 * 0.20) as u32).clamp(10, 20);

        let color = if self.is_on { self.on_color } else { self.off_color };
        let status_text = if self.is_on { &self.on_text } else { &self.off_text };

        let budget = estimate_max_chars(width, 7, 20);
        let name = truncate(&self.name, budget, TruncateStyle::Middle);

        let dot_x = bounds.top_left.x + padding + dot_radius;
        ctx.draw_ellipse(
            Rectangle::new(
                Point::new(dot_x - dot_radius, center_y - dot_radius),
                Size::new(dot_radius as u32 * 2, dot_radius as u32 * 2),
            ),
            Some(color),
            None,
        )?;

        let mut text_x = dot_x + dot_radius + (width as f32 * 0.06) as i32;
        if let Some(icon) = &self.icon {
            ctx.draw_icon(
                icon,
                Point::new(text_x, center_y - icon_size as i32 / 2),
                icon_size,
                frame_system::color::GRAY,
            )?;
            text_x += icon_size as i32 + 4;
        }

        ctx.draw_text(
            &name,
            Point::new(text_x, center_y),
            &font,
            frame_system::color::WHITE,
            Anchor::Left,
        )?;

        if self.show_status_text {
            ctx.draw_text(
                status_text,
                Point::new(bounds.top_left.x + width as i32 - padding, center_y),
                &font,
                color,
                Anchor::Right,
            )?;
        }
        Ok(())
    }
}

/// One row of a status list.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusItem {
    /// Display name.
    pub label: String,
    /// Current binary state.
    pub is_on: bool,
    /// Dot color when on.
    pub on_color: Rgb888,
    /// Dot color when off.
    pub off_color: Rgb888,
}

/// Compact list of binary statuses with an optional title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusListDisplay {
    /// Rows in display order.
    pub items: Vec<StatusItem>,
    /// Title drawn upper-cased above the rows.
    pub title: Option<String>,
    /// Right-aligned text for rows that are on.
    pub on_text: Option<String>,
    /// Right-aligned text for rows that are off.
    pub off_text: Option<String>,
}

impl StatusListDisplay {
    /// New list over `items`.
    pub fn new(items: Vec<StatusItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
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
        let font_title = ctx.font(FontClass::Small, false);
        let font_label = ctx.font(FontClass::Tiny, false);
        let padding = (width as f32 * 0.05) as i32;
        let mut current_y = bounds.top_left.y + padding;

        if let Some(title) = &self.title {
            ctx.draw_text(
                &title.to_uppercase(),
                Point::new(bounds.top_left.x + padding, current_y),
                &font_title,
                frame_system::color::GRAY,
                Anchor::Left,
            )?;
            current_y += (height as f32 * 0.15) as i32;
        }

        let available = bounds.top_left.y + height as i32 - current_y - padding;
        let row_count = self.items.len().max(1) as i32;
        let row_height = ((height as f32 * 0.17) as i32).min(available / row_count);
        let dot_radius = ((height as f32 * 0.025) as i32).max(2);
        let budget = estimate_max_chars(width, 7, 30);

        for item in &self.items {
            let color = if item.is_on {
                item.on_color
            } else {
                item.off_color
            };
            let label = truncate(&item.label, budget, TruncateStyle::Middle);

            let dot_y = current_y + row_height / 2;
            ctx.draw_ellipse(
                Rectangle::new(
                    Point::new(bounds.top_left.x + padding, dot_y - dot_radius),
                    Size::new(dot_radius as u32 * 2, dot_radius as u32 * 2),
                ),
                Some(color),
                None,
            )?;

            ctx.draw_text(
                &label,
                Point::new(bounds.top_left.x + padding + dot_radius * 2 + 6, dot_y),
                &font_label,
                frame_system::color::WHITE,
                Anchor::Left,
            )?;

            let status_text = if item.is_on {
                self.on_text.as_deref()
            } else {
                self.off_text.as_deref()
            };
            if let Some(text) = status_text {
                ctx.draw_text(
                    text,
                    Point::new(bounds.top_left.x + width as i32 - padding, dot_y),
                    &font_label,
                    color,
                    Anchor::Right,
                )?;
            }

            current_y += row_height;
        }
        Ok(())
    }
}
