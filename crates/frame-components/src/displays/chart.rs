//! History chart: header with label/value, sparkline or binary timeline,
//! optional min/max range footer.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::math::is_binary_series;
use crate::textutil::truncate;
use crate::textutil::TruncateStyle;

/// Sparkline/timeline chart over a history series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDisplay {
    /// Data samples, oldest first.
    pub data: Vec<f64>,
    /// Label drawn upper-cased in the header.
    pub label: Option<String>,
    /// Current value shown top-right.
    pub current_value: Option<f64>,
    /// Unit appended to the current value.
    pub unit: String,
    /// Line/value color.
    pub color: Rgb888,
    /// Show the min/max footer (continuous series only).
    pub show_range: bool,
    /// Shade the area under the sparkline.
    pub fill: bool,
}

impl ChartDisplay {
    /// New chart over `data`.
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            label: None,
            current_value: None,
            unit: String::new(),
            color: frame_system::color::CYAN,
            show_range: true,
            fill: false,
        }
    }

    /// Attach a header label.
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the line color.
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
        let font_label = ctx.font(FontClass::Small, false);
        let font_value = ctx.font(FontClass::Regular, false);
        let padding = (width as f32 * 0.08) as i32;

        let header_height = if self.label.is_some() {
            (height as f32 * 0.15) as i32
        } else {
            (height as f32 * 0.08) as i32
        };
        let is_binary = is_binary_series(&self.data);
        let footer_height = if self.show_range && !is_binary {
            (height as f32 * 0.12) as i32
        } else {
            (height as f32 * 0.04) as i32
        };

        let chart_top = bounds.top_left.y + header_height;
        let chart_bottom = bounds.top_left.y + height as i32 - footer_height;
        let chart_rect = Rectangle::new(
            Point::new(bounds.top_left.x + padding, chart_top),
            Size::new(
                width.saturating_sub(padding as u32 * 2),
                (chart_bottom - chart_top).max(0) as u32,
            ),
        );

        let header_y = bounds.top_left.y + (height as f32 * 0.08) as i32;

        if let Some(label) = &self.label {
            let budget = ((width / 12).max(3)) as usize;
            let display = truncate(&label.to_uppercase(), budget, TruncateStyle::End);
            ctx.draw_text(
                &display,
                Point::new(bounds.top_left.x + padding, header_y),
                &font_label,
                frame_system::color::GRAY,
                Anchor::Left,
            )?;
        }

        if let Some(value) = self.current_value {
            let value_str = format!("{value:.1}{}", self.unit);
            ctx.draw_text(
                &value_str,
                Point::new(bounds.top_left.x + width as i32 - padding, header_y),
                &font_value,
                self.color,
                Anchor::Right,
            )?;
        }

        if self.data.len() >= 2 {
            if is_binary {
                ctx.draw_timeline_bar(chart_rect, &self.data, self.color, None)?;
            } else {
                ctx.draw_sparkline(chart_rect, &self.data, self.color, self.fill)?;

                if self.show_range {
                    let min = self.data.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    let range_y = chart_bottom + (height as f32 * 0.08) as i32;
                    ctx.draw_text(
                        &format!("{min:.1}"),
                        Point::new(bounds.top_left.x + padding, range_y),
                        &font_label,
                        frame_system::color::GRAY,
                        Anchor::Left,
                    )?;
                    ctx.draw_text(
                        &format!("{max:.1}"),
                        Point::new(bounds.top_left.x + width as i32 - padding, range_y),
                        &font_label,
                        frame_system::color::GRAY,
                        Anchor::Right,
                    )?;
                }
            }
        } else {
            let center = Point::new(
                bounds.top_left.x + width as i32 / 2,
                (chart_top + chart_bottom) / 2,
            );
            ctx.draw_text(
                "No data",
                center,
                &font_label,
                frame_system::color::GRAY,
                Anchor::Center,
            )?;
        }
        Ok(())
    }
}
