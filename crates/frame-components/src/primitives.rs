//! Primitive component nodes: each draws a single visual element.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::component::Component;

/// Horizontal alignment of a primitive inside its allotted box.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum HAlign {
    /// Left edge.
    Start,
    /// Centered.
    #[default]
    Center,
    /// Right edge.
    End,
}

impl HAlign {
    fn anchor(self) -> Anchor {
        match self {
            HAlign::Start => Anchor::Left,
            HAlign::Center => Anchor::Center,
            HAlign::End => Anchor::Right,
        }
    }
}

/// Text in a named font class with a theme-aware color.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// The string to draw.
    pub text: String,
    /// Font size class.
    pub font: FontClass,
    /// Bold face.
    pub bold: bool,
    /// Draw color (theme-aware).
    pub color: ColorSpec,
    /// Horizontal alignment inside the allotted box.
    pub align: HAlign,
    /// Shorten with an ellipsis when the box is too narrow.
    pub truncate: bool,
}

impl Text {
    /// New primary-colored regular text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: FontClass::Regular,
            bold: false,
            color: ColorSpec::TextPrimary,
            align: HAlign::Center,
            truncate: false,
        }
    }

    /// Set the font class.
    #[must_use]
    pub fn font(mut self, font: FontClass) -> Self {
        self.font = font;
        self
    }

    /// Use the bold face.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the alignment.
    #[must_use]
    pub fn align(mut self, align: HAlign) -> Self {
        self.align = align;
        self
    }

    /// Enable ellipsis truncation.
    #[must_use]
    pub fn truncate(mut self) -> Self {
        self.truncate = true;
        self
    }

    fn truncate_to_width<D: Surface>(
        &self,
        ctx: &RenderContext<'_, D>,
        font: &ScaledFont,
        max_width: u32,
    ) -> String {
        if max_width == 0 {
            return String::new();
        }
        if ctx.text_size(&self.text, font).width <= max_width {
            return self.text.clone();
        }
        let mut chars: Vec<char> = self.text.chars().collect();
        while chars.len() > 1 {
            chars.pop();
            let candidate: String = chars.iter().collect::<String>() + "…";
            if ctx.text_size(&candidate, font).width <= max_width {
                return candidate;
            }
        }
        "…".to_string()
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, _max: Size) -> Size {
        // Natural size, deliberately unclamped: priority containers and
        // Adaptive decide visibility by comparing it against their budget.
        let font = ctx.font(self.font, self.bold);
        ctx.text_size(&self.text, &font)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let font = ctx.font(self.font, self.bold);
        let display = if self.truncate {
            self.truncate_to_width(ctx, &font, bounds.size.width)
        } else {
            self.text.clone()
        };

        let x = match self.align {
            HAlign::Start => bounds.top_left.x,
            HAlign::Center => bounds.top_left.x + bounds.size.width as i32 / 2,
            HAlign::End => bounds.top_left.x + bounds.size.width as i32,
        };
        let y = bounds.top_left.y + bounds.size.height as i32 / 2;
        let color = ctx.resolve(self.color);
        ctx.draw_text(&display, Point::new(x, y), &font, color, self.align.anchor())
    }
}

/// Named icon glyph with size bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon {
    /// Icon name (e.g. "weather-sunny").
    pub name: String,
    /// Fixed size in pixels; `None` sizes to the container.
    pub size: Option<u32>,
    /// Draw color (theme-aware).
    pub color: ColorSpec,
    /// Minimum auto size for readability.
    pub min_size: u32,
    /// Maximum auto size so icons do not dominate the layout.
    pub max_size: u32,
}

impl Icon {
    /// New auto-sized icon.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            color: ColorSpec::TextPrimary,
            min_size: 12,
            max_size: 32,
        }
    }

    /// Fix the icon size.
    #[must_use]
    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    /// Raise the auto-size ceiling.
    #[must_use]
    pub fn max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    fn resolved_size(&self, available: u32) -> u32 {
        match self.size {
            Some(size) => size,
            // min wins over a smaller configured max
            None => available.clamp(self.min_size.min(self.max_size), self.max_size),
        }
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let size = self.resolved_size(max.width.min(max.height));
        Size::new(size, size)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let size = self.resolved_size(bounds.size.width.min(bounds.size.height));
        let top_left = Point::new(
            bounds.top_left.x + (bounds.size.width as i32 - size as i32) / 2,
            bounds.top_left.y + (bounds.size.height as i32 - size as i32) / 2,
        );
        let color = ctx.resolve(self.color);
        ctx.draw_icon(&self.name, top_left, size, color)
    }
}

/// Horizontal progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    /// Fill percentage (0–100).
    pub percent: f32,
    /// Fill color.
    pub color: Rgb888,
    /// Track color; `None` uses the theme's bar background.
    pub background: Option<Rgb888>,
    /// Fixed bar height; `None` derives from the container.
    pub height: Option<u32>,
}

impl Bar {
    /// New cyan bar at the given percent.
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            color: frame_system::color::CYAN,
            background: None,
            height: None,
        }
    }

    /// Set the fill color.
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    /// Fix the bar height.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let h = self
            .height
            .unwrap_or_else(|| ((max.height as f32 * 0.15) as u32).max(6));
        Size::new(max.width, h.min(max.height))
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        ctx.draw_bar(bounds, self.percent, self.color, self.background)
    }
}

/// Full-circle ring gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// Fill percentage (0–100).
    pub percent: f32,
    /// Ring color.
    pub color: Rgb888,
    /// Track color; `None` uses the theme's bar background.
    pub background: Option<Rgb888>,
    /// Ring thickness; `None` derives from the radius.
    pub thickness: Option<u32>,
}

impl Ring {
    /// New cyan ring at the given percent.
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            color: frame_system::color::CYAN,
            background: None,
            thickness: None,
        }
    }

    /// Set the ring color.
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let size = max.width.min(max.height);
        Size::new(size, size)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let size = bounds.size.width.min(bounds.size.height);
        let radius = size / 2;
        let thickness = self.thickness.unwrap_or_else(|| (radius / 5).max(4));
        let center = Point::new(
            bounds.top_left.x + bounds.size.width as i32 / 2,
            bounds.top_left.y + bounds.size.height as i32 / 2,
        );
        ctx.draw_ring_gauge(
            center,
            radius.saturating_sub(thickness).max(1),
            self.percent,
            self.color,
            self.background,
            thickness,
        )
    }
}

/// 270° arc gauge.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcGauge {
    /// Fill percentage (0–100).
    pub percent: f32,
    /// Arc color.
    pub color: Rgb888,
    /// Track color; `None` uses the theme's bar background.
    pub background: Option<Rgb888>,
    /// Arc stroke width.
    pub width: u32,
}

impl ArcGauge {
    /// New cyan arc at the given percent.
    pub fn new(percent: f32) -> Self {
        Self {
            percent,
            color: frame_system::color::CYAN,
            background: None,
            width: 8,
        }
    }

    /// Set the arc color.
    #[must_use]
    pub fn color(mut self, color: Rgb888) -> Self {
        self.color = color;
        self
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let size = max.width.min(max.height);
        Size::new(size, size)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        ctx.draw_arc_gauge(bounds, self.percent, self.color, self.background, self.width)
    }
}

/// Sparkline chart over a data series.
#[derive(Debug, Clone, PartialEq)]
pub struct Sparkline {
    /// Data samples, oldest first.
    pub data: Vec<f64>,
    /// Line color.
    pub color: Rgb888,
    /// Shade the area under the line.
    pub fill: bool,
}

impl Sparkline {
    /// New cyan sparkline over `data`.
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data,
            color: frame_system::color::CYAN,
            fill: true,
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
        ctx.draw_sparkline(bounds, &self.data, self.color, self.fill)
    }
}

/// Card/panel background with an optional child.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Content drawn on the panel.
    pub child: Option<Box<Component>>,
    /// Fill; `None` uses the theme surface.
    pub color: Option<Rgb888>,
    /// Corner radius; `None` uses the theme radius.
    pub radius: Option<u32>,
    /// Border; `None` uses the theme border when enabled.
    pub border_color: Option<Rgb888>,
}

impl Panel {
    /// New theme-styled panel around `child`.
    pub fn new(child: Component) -> Self {
        Self {
            child: Some(Box::new(child)),
            color: None,
            radius: None,
            border_color: None,
        }
    }

    /// Empty panel (background only).
    pub fn background() -> Self {
        Self {
            child: None,
            color: None,
            radius: None,
            border_color: None,
        }
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        match &self.child {
            Some(child) => child.measure(ctx, max),
            None => max,
        }
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        ctx.draw_panel(bounds, self.color, self.border_color, self.radius)?;
        if let Some(child) = &self.child {
            child.render(ctx, bounds)?;
        }
        Ok(())
    }
}

/// Flexible spacer expanding into leftover main-axis space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spacer {
    /// Minimum extent on both axes.
    pub min_size: u32,
}

impl Spacer {
    /// Fully flexible spacer.
    pub fn new() -> Self {
        Self { min_size: 0 }
    }

    /// Spacer with a minimum extent.
    pub fn min(min_size: u32) -> Self {
        Self { min_size }
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        Size::new(self.min_size.min(max.width), self.min_size.min(max.height))
    }
}

/// Text that fills the available space, scaled by hierarchy level.
#[derive(Debug, Clone, PartialEq)]
pub struct FillText {
    /// The string to draw.
    pub text: String,
    /// Size hierarchy: primary fills, lower levels scale down from it.
    pub hierarchy: Hierarchy,
    /// Bold face.
    pub bold: bool,
    /// Draw color (theme-aware).
    pub color: ColorSpec,
    /// Maximum container fill ratio.
    pub max_ratio: f32,
    /// Minimum line height; below this the text is skipped entirely.
    pub min_size: u32,
}

/// Fill-text scaling levels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Hierarchy {
    /// Fills the container.
    #[default]
    Primary,
    /// Half the primary height.
    Secondary,
    /// A third of the primary height.
    Tertiary,
}

impl Hierarchy {
    fn ratio(self) -> f32 {
        match self {
            Hierarchy::Primary => 1.0,
            Hierarchy::Secondary => 0.5,
            Hierarchy::Tertiary => 0.3,
        }
    }
}

impl FillText {
    /// New primary fill text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hierarchy: Hierarchy::Primary,
            bold: false,
            color: ColorSpec::TextPrimary,
            max_ratio: 0.95,
            min_size: 12,
        }
    }

    /// Use the bold face.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the color.
    #[must_use]
    pub fn color(mut self, color: impl Into<ColorSpec>) -> Self {
        self.color = color.into();
        self
    }

    /// Set the hierarchy level.
    #[must_use]
    pub fn hierarchy(mut self, hierarchy: Hierarchy) -> Self {
        self.hierarchy = hierarchy;
        self
    }

    fn pick_font<D: Surface>(&self, ctx: &RenderContext<'_, D>, area: Size) -> ScaledFont {
        let max = Size::new(
            (area.width as f32 * self.max_ratio) as u32,
            (area.height as f32 * self.max_ratio) as u32,
        );
        let primary = ctx.fit_text(&self.text, max, self.bold);
        match self.hierarchy {
            Hierarchy::Primary => primary,
            level => {
                let target = ((primary.line_height() as f32 * level.ratio()) as u32)
                    .max(self.min_size);
                ctx.font_for_height(target, self.bold)
            }
        }
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let font = self.pick_font(ctx, max);
        let size = ctx.text_size(&self.text, &font);
        Size::new(size.width.min(max.width), size.height.min(max.height))
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let font = self.pick_font(ctx, bounds.size);
        if font.line_height() < self.min_size {
            return Ok(());
        }
        let color = ctx.resolve(self.color);
        let center = Point::new(
            bounds.top_left.x + bounds.size.width as i32 / 2,
            bounds.top_left.y + bounds.size.height as i32 / 2,
        );
        ctx.draw_text(&self.text, center, &font, color, Anchor::Center)
    }
}
