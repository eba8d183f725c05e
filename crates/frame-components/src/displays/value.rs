//! Icon/value/label readouts shared by entity-style widgets.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

/// Icon on top, value filling the middle, label at the bottom.
///
/// The three pieces are sized together from the container so the value
/// always dominates.
#[derive(Debug, Clone, PartialEq)]
pub struct IconValueDisplay {
    /// Icon name.
    pub icon: String,
    /// Value text (unit already appended).
    pub value: String,
    /// Label drawn upper-cased under the value.
    pub label: String,
    /// Icon color (theme-aware).
    pub icon_color: ColorSpec,
    /// Value color (theme-aware).
    pub value_color: ColorSpec,
    /// Label color (theme-aware).
    pub label_color: ColorSpec,
    /// Fixed icon size; `None` derives from the container height.
    pub icon_size: Option<u32>,
}

impl IconValueDisplay {
    /// New display with theme-default colors.
    pub fn new(
        icon: impl Into<String>,
        value: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            icon: icon.into(),
            value: value.into(),
            label: label.into(),
            icon_color: ColorSpec::TextPrimary,
            value_color: ColorSpec::TextPrimary,
            label_color: ColorSpec::TextSecondary,
            icon_size: None,
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
        let padding = (width as f32 * 0.06) as u32;
        let inner_width = width.saturating_sub(padding * 2);
        let inner_height = height.saturating_sub(padding * 2);

        let icon_color = ctx.resolve(self.icon_color);
        let value_color = ctx.resolve(self.value_color);
        let label_color = ctx.resolve(self.label_color);

        let icon_size = self
            .icon_size
            .unwrap_or_else(|| ((inner_height as f32 * 0.25) as u32).clamp(16, 48));
        let label_height = (inner_height as f32 * 0.15) as u32;
        let value_height = inner_height
            .saturating_sub(icon_size)
            .saturating_sub(label_height)
            .saturating_sub(12);

        let total_content = icon_size + value_height + label_height + 12;
        let start_y = bounds.top_left.y
            + padding as i32
            + (inner_height as i32 - total_content as i32) / 2;

        let center_x = bounds.top_left.x + width as i32 / 2;
        let mut current_y = start_y;

        ctx.draw_icon(
            &self.icon,
            Point::new(center_x - icon_size as i32 / 2, current_y),
            icon_size,
            icon_color,
        )?;
        current_y += icon_size as i32 + 6;

        let value_font = ctx.fit_text(
            &self.value,
            Size::new(
                (inner_width as f32 * 0.95) as u32,
                (value_height as f32 * 0.90) as u32,
            ),
            true,
        );
        ctx.draw_text(
            &self.value,
            Point::new(center_x, current_y + value_height as i32 / 2),
            &value_font,
            value_color,
            Anchor::Center,
        )?;
        current_y += value_height as i32 + 6;

        let label = self.label.to_uppercase();
        if !label.is_empty() {
            let label_font = ctx.fit_text(
                &label,
                Size::new(
                    (inner_width as f32 * 0.90) as u32,
                    (label_height as f32 * 0.90) as u32,
                ),
                false,
            );
            ctx.draw_text(
                &label,
                Point::new(center_x, current_y + label_height as i32 / 2),
                &label_font,
                label_color,
                Anchor::Center,
            )?;
        }
        Ok(())
    }
}

/// Big centered value with an optional label underneath; the icon-less
/// sibling of [`IconValueDisplay`].
#[derive(Debug, Clone, PartialEq)]
pub struct CenteredValueDisplay {
    /// Value text (unit already appended).
    pub value: String,
    /// Optional label drawn upper-cased under the value.
    pub label: Option<String>,
    /// Value color (theme-aware).
    pub value_color: ColorSpec,
    /// Label color (theme-aware).
    pub label_color: ColorSpec,
}

impl CenteredValueDisplay {
    /// New display with theme-default colors.
    pub fn new(value: impl Into<String>, label: Option<String>) -> Self {
        Self {
            value: value.into(),
            label,
            value_color: ColorSpec::TextPrimary,
            label_color: ColorSpec::TextSecondary,
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
        let center_x = bounds.top_left.x + width as i32 / 2;
        let value_color = ctx.resolve(self.value_color);
        let label_color = ctx.resolve(self.label_color);

        let has_label = self.label.as_deref().is_some_and(|l| !l.is_empty());
        let value_ratio = if has_label { 0.55 } else { 0.70 };

        let value_font = ctx.fit_text(
            &self.value,
            Size::new(
                (width as f32 * 0.90) as u32,
                (height as f32 * value_ratio) as u32,
            ),
            true,
        );
        let value_y = if has_label {
            bounds.top_left.y + (height as f32 * 0.42) as i32
        } else {
            bounds.top_left.y + height as i32 / 2
        };
        ctx.draw_text(
            &self.value,
            Point::new(center_x, value_y),
            &value_font,
            value_color,
            Anchor::Center,
        )?;

        if let Some(label) = &self.label {
            if !label.is_empty() {
                let label = label.to_uppercase();
                let label_font = ctx.fit_text(
                    &label,
                    Size::new(
                        (width as f32 * 0.85) as u32,
                        (height as f32 * 0.15) as u32,
                    ),
                    false,
                );
                ctx.draw_text(
                    &label,
                    Point::new(center_x, bounds.top_left.y + (height as f32 * 0.78) as i32),
                    &label_font,
                    label_color,
                    Anchor::Center,
                )?;
            }
        }
        Ok(())
    }
}
