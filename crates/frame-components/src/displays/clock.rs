//! Clock face: time filling the slot, date and label scaling with it.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

/// Time display with optional date, AM/PM marker and label.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockDisplay {
    /// Formatted time string ("14:05", "2:05:33", ...).
    pub time: String,
    /// Formatted date string; hidden on short slots.
    pub date: Option<String>,
    /// "AM"/"PM" marker for 12h mode.
    pub ampm: Option<String>,
    /// Optional label drawn upper-cased at the top.
    pub label: Option<String>,
    /// Time color.
    pub time_color: Rgb888,
    /// Date color.
    pub date_color: Rgb888,
    /// Label color.
    pub label_color: Rgb888,
}

impl ClockDisplay {
    /// New clock face for a formatted time.
    pub fn new(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            date: None,
            ampm: None,
            label: None,
            time_color: frame_system::color::WHITE,
            date_color: frame_system::color::GRAY,
            label_color: frame_system::color::GRAY,
        }
    }

    /// Attach a date line.
    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Attach an AM/PM marker.
    #[must_use]
    pub fn ampm(mut self, ampm: impl Into<String>) -> Self {
        self.ampm = Some(ampm.into());
        self
    }

    /// Attach a label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the time color.
    #[must_use]
    pub fn time_color(mut self, color: Rgb888) -> Self {
        self.time_color = color;
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
        let center_x = bounds.top_left.x + width as i32 / 2;
        let center_y = bounds.top_left.y + height as i32 / 2;

        // Short slots drop the date, then the label.
        let has_date = self.date.is_some() && height > 60;
        let has_label = self.label.is_some() && height > 80;

        let mut time_ratio = if has_date { 0.55 } else { 0.70 };
        if has_label {
            time_ratio *= 0.85;
        }

        let time_font = ctx.fit_text(
            &self.time,
            Size::new(
                (width as f32 * 0.90) as u32,
                (height as f32 * time_ratio) as u32,
            ),
            false,
        );
        let time_size = ctx.text_size(&self.time, &time_font);

        let (mut time_y, date_y, date_font) = if has_date {
            let date = self.date.as_deref().unwrap_or_default();
            let date_font = ctx.fit_text(
                date,
                Size::new(
                    (width as f32 * 0.90) as u32,
                    (height as f32 * 0.18) as u32,
                ),
                false,
            );
            let date_h = date_font.line_height();
            let gap = (height as f32 * 0.05) as i32;
            let total = time_size.height as i32 + gap + date_h as i32;
            let time_y = center_y - total / 2 + time_size.height as i32 / 2;
            let date_y = time_y + time_size.height as i32 / 2 + gap + date_h as i32 / 2;
            (time_y, date_y, Some(date_font))
        } else {
            (center_y, 0, None)
        };

        let mut date_y = date_y;
        if has_label {
            let offset = (height as f32 * 0.08) as i32;
            time_y += offset / 2;
            date_y += offset / 2;
        }

        ctx.draw_text(
            &self.time,
            Point::new(center_x, time_y),
            &time_font,
            self.time_color,
            Anchor::Center,
        )?;

        if let Some(ampm) = &self.ampm {
            let ampm_font = ctx.font(FontClass::Tiny, false);
            let ampm_x = center_x + time_size.width as i32 / 2 + 3;
            ctx.draw_text(
                ampm,
                Point::new(ampm_x, time_y - time_size.height as i32 / 3),
                &ampm_font,
                frame_system::color::GRAY,
                Anchor::Left,
            )?;
        }

        if has_date {
            if let (Some(date), Some(font)) = (self.date.as_deref(), date_font) {
                ctx.draw_text(
                    date,
                    Point::new(center_x, date_y),
                    &font,
                    self.date_color,
                    Anchor::Center,
                )?;
            }
        }

        if has_label {
            if let Some(label) = self.label.as_deref() {
                let label_font = ctx.font(FontClass::Tiny, false);
                let label_y = bounds.top_left.y + (height as f32 * 0.10) as i32;
                ctx.draw_text(
                    &label.to_uppercase(),
                    Point::new(center_x, label_y),
                    &label_font,
                    self.label_color,
                    Anchor::Center,
                )?;
            }
        }
        Ok(())
    }
}
