//! Progress faces: single bar with value/target and the multi-row list.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

/// Bar height presets for progress rows.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum BarHeightStyle {
    /// 10 % of the slot height.
    Thin,
    /// 17 % of the slot height.
    #[default]
    Normal,
    /// 25 % of the slot height.
    Thick,
}

impl BarHeightStyle {
    /// Parse a style name; unknown names fall back to `Normal`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "thin" => BarHeightStyle::Thin,
            "thick" => BarHeightStyle::Thick,
            _ => BarHeightStyle::Normal,
        }
    }

    fn multiplier(self) -> f32 {
        match self {
            BarHeightStyle::Thin => 0.10,
            BarHeightStyle::Normal => 0.17,
            BarHeightStyle::Thick => 0.25,
        }
    }
}

fn target_percent(value: f64, target: f64) -> f32 {
    if target > 0.0 {
        ((value / target) * 100.0).min(100.0) as f32
    } else {
        0.0
    }
}

/// Single progress bar with label, value/target readout and percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressDisplay {
    /// Current value.
    pub value: f64,
    /// Target value ("100 %" point); non-positive yields an empty bar.
    pub target: f64,
    /// Label drawn upper-cased.
    pub label: String,
    /// Unit appended to the value/target readout.
    pub unit: String,
    /// Bar color.
    pub color: Rgb888,
    /// Optional icon left of the label.
    pub icon: Option<String>,
    /// Show "value/target" instead of the bare value.
    pub show_target: bool,
    /// Bar height preset.
    pub bar_height: BarHeightStyle,
}

impl ProgressDisplay {
    /// New progress face.
    pub fn new(value: f64, target: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            target,
            label: label.into(),
            unit: String::new(),
            color: frame_system::color::CYAN,
            icon: None,
            show_target: true,
            bar_height: BarHeightStyle::Normal,
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
        let font_label = ctx.font(FontClass::Small, false);
        let font_value = ctx.font(FontClass::Regular, false);
        let font_percent = ctx.font(FontClass::Small, false);

        let padding = (width as f32 * 0.05) as i32;
        let icon_size = ((height as f32 * 0.23) as u32).max(10);
        let bar_height = ((height as f32 * self.bar_height.multiplier()) as u32).max(4);

        let percent = target_percent(self.value, self.target);
        let top_y = bounds.top_left.y + (height as f32 * 0.25) as i32;

        let mut text_x = bounds.top_left.x + padding;
        if let Some(icon) = &self.icon {
            ctx.draw_icon(
                icon,
                Point::new(text_x, top_y - icon_size as i32 / 2),
                icon_size,
                self.color,
            )?;
            text_x += icon_size as i32 + 4;
        }

        ctx.draw_text(
            &self.label.to_uppercase(),
            Point::new(text_x, top_y),
            &font_label,
            frame_system::color::GRAY,
            Anchor::Left,
        )?;

        let mut value_text = if self.show_target {
            format!("{:.0}/{:.0}", self.value, self.target)
        } else {
            format!("{:.0}", self.value)
        };
        if !self.unit.is_empty() {
            value_text.push(' ');
            value_text.push_str(&self.unit);
        }
        ctx.draw_text(
            &value_text,
            Point::new(bounds.top_left.x + width as i32 - padding, top_y),
            &font_value,
            frame_system::color::WHITE,
            Anchor::Right,
        )?;

        let bar_y = bounds.top_left.y + (height as f32 * 0.60) as i32;
        let percent_width = (width as f32 * 0.22) as u32;
        let bar_rect = Rectangle::new(
            Point::new(bounds.top_left.x + padding, bar_y),
            Size::new(
                width
                    .saturating_sub(padding as u32)
                    .saturating_sub(percent_width),
                bar_height,
            ),
        );
        ctx.draw_bar(bar_rect, percent, self.color, None)?;

        ctx.draw_text(
            &format!("{percent:.0}%"),
            Point::new(
                bounds.top_left.x + width as i32 - padding,
                bar_y + bar_height as i32 / 2,
            ),
            &font_percent,
            frame_system::color::WHITE,
            Anchor::Right,
        )
    }
}

/// One row of a multi-progress list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressItem {
    /// Row label drawn upper-cased.
    pub label: String,
    /// Current value.
    pub value: f64,
    /// Target value.
    pub target: f64,
    /// Bar color.
    pub color: Rgb888,
    /// Optional icon left of the label.
    pub icon: Option<String>,
    /// Unit appended to the value/target readout.
    pub unit: String,
}

/// Stacked progress rows with an optional title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiProgressDisplay {
    /// Rows in display order.
    pub items: Vec<ProgressItem>,
    /// Title drawn upper-cased above the rows.
    pub title: Option<String>,
}

impl MultiProgressDisplay {
    /// New list over `items`.
    pub fn new(items: Vec<ProgressItem>) -> Self {
        Self { items, title: None }
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
            current_y += (height as f32 * 0.14) as i32;
        }

        let available = bounds.top_left.y + height as i32 - current_y - padding;
        let row_count = self.items.len().max(1) as i32;
        let row_height = ((height as f32 * 0.35) as i32).min(available / row_count);
        let bar_height = ((height as f32 * 0.06) as u32).max(4);
        let icon_size = ((height as f32 * 0.09) as u32).max(8);

        for item in &self.items {
            let percent = target_percent(item.value, item.target);

            let mut label_x = bounds.top_left.x + padding;
            if let Some(icon) = &item.icon {
                ctx.draw_icon(
                    icon,
                    Point::new(bounds.top_left.x + padding, current_y + 2),
                    icon_size,
                    item.color,
                )?;
                label_x += icon_size as i32 + 4;
            }

            let header_y = current_y + (row_height as f32 * 0.2) as i32;
            ctx.draw_text(
                &item.label.to_uppercase(),
                Point::new(label_x, header_y),
                &font_label,
                frame_system::color::GRAY,
                Anchor::Left,
            )?;

            let mut value_text = format!("{:.0}/{:.0}", item.value, item.target);
            if !item.unit.is_empty() {
                value_text.push(' ');
                value_text.push_str(&item.unit);
            }
            ctx.draw_text(
                &value_text,
                Point::new(bounds.top_left.x + width as i32 - padding, header_y),
                &font_label,
                frame_system::color::WHITE,
                Anchor::Right,
            )?;

            let bar_y = current_y + (row_height as f32 * 0.55) as i32;
            let percent_width = (width as f32 * 0.20) as u32;
            let bar_rect = Rectangle::new(
                Point::new(bounds.top_left.x + padding, bar_y),
                Size::new(
                    width
                        .saturating_sub(padding as u32)
                        .saturating_sub(percent_width),
                    bar_height,
                ),
            );
            ctx.draw_bar(bar_rect, percent, item.color, None)?;

            ctx.draw_text(
                &format!("{percent:.0}%"),
                Point::new(
                    bounds.top_left.x + width as i32 - padding,
                    bar_y + bar_height as i32 / 2,
                ),
                &font_label,
                frame_system::color::WHITE,
                Anchor::Right,
            )?;

            current_y += row_height;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_against_target() {
        assert!((target_percent(50.0, 100.0) - 50.0).abs() < f32::EPSILON);
        assert!((target_percent(150.0, 100.0) - 100.0).abs() < f32::EPSILON);
        assert!(target_percent(5.0, 0.0).abs() < f32::EPSILON);
        assert!(target_percent(5.0, -10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn bar_height_styles() {
        assert_eq!(BarHeightStyle::from_name("thin"), BarHeightStyle::Thin);
        assert_eq!(BarHeightStyle::from_name("thick"), BarHeightStyle::Thick);
        assert_eq!(BarHeightStyle::from_name("other"), BarHeightStyle::Normal);
    }
}
