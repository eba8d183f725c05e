//! Widget-local render context.
//!
//! All widget and component drawing happens in coordinates relative to
//! the owning slot (0,0 = slot top-left). The context translates into
//! absolute canvas coordinates, scopes font sizing to the slot height,
//! and resolves theme-aware colors.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle};
use image::RgbImage;

use crate::color::ColorSpec;
use crate::font::{self, FontClass, ScaledFont};
use crate::surface::Surface;
use crate::{icon, primitives, Theme};

pub use frame_surface::FitMode;

/// Size buckets for responsive widget layouts, keyed off slot height.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SizeCategory {
    /// Under 80 px: single-line presentations only.
    Compact,
    /// 80–119 px: two-row presentations.
    Small,
    /// 120–179 px: full presentations without extras.
    Medium,
    /// 180 px and up: full presentations with forecasts/details.
    Large,
}

/// Categorize a container height against the fixed thresholds.
pub fn size_category(height: u32) -> SizeCategory {
    match height {
        0..=79 => SizeCategory::Compact,
        80..=119 => SizeCategory::Small,
        120..=179 => SizeCategory::Medium,
        _ => SizeCategory::Large,
    }
}

/// Horizontal text anchor; text is always vertically centered on the
/// given y coordinate.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Anchor {
    /// Anchor the left edge at x.
    Left,
    /// Center on x.
    #[default]
    Center,
    /// Anchor the right edge at x.
    Right,
}

/// Per-slot drawing facade handed to widgets and components.
///
/// A fresh context is created for every slot on every render pass; no
/// state survives between passes.
pub struct RenderContext<'a, D> {
    target: &'a mut D,
    origin: Point,
    size: Size,
    theme: Theme,
    scale: f32,
}

impl<'a, D> RenderContext<'a, D>
where
    D: Surface,
{
    /// Create a context scoped to `bounds` (absolute coordinates).
    pub fn new(target: &'a mut D, bounds: Rectangle, theme: Theme) -> Self {
        Self {
            target,
            origin: bounds.top_left,
            size: bounds.size,
            theme,
            scale: 1.0,
        }
    }

    /// Override the font scale factor (supersampled render pipelines).
    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale.max(0.1);
        self
    }

    /// Context width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Context height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Context size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Local bounds rectangle (origin at zero).
    pub fn local_bounds(&self) -> Rectangle {
        Rectangle::new(Point::zero(), self.size)
    }

    /// The active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Responsive size bucket for this context's height.
    pub fn size_category(&self) -> SizeCategory {
        size_category(self.size.height)
    }

    /// Resolve a tagged color against the active theme.
    pub fn resolve(&self, color: ColorSpec) -> Rgb888 {
        color.resolve(&self.theme)
    }

    /// Dim a color toward black.
    pub fn dim(&self, color: Rgb888, factor: f32) -> Rgb888 {
        crate::color::dim(color, factor)
    }

    /// Blend two colors.
    pub fn blend(&self, a: Rgb888, b: Rgb888, factor: f32) -> Rgb888 {
        crate::color::blend(a, b, factor)
    }

    fn to_absolute(&self, point: Point) -> Point {
        point + self.origin
    }

    fn to_absolute_rect(&self, rect: Rectangle) -> Rectangle {
        Rectangle::new(rect.top_left + self.origin, rect.size)
    }

    /// True when the local point lies inside the context.
    pub fn point_in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && point.x <= self.size.width as i32
            && point.y <= self.size.height as i32
    }

    /// True when the local rect lies fully inside the context.
    pub fn rect_in_bounds(&self, rect: Rectangle) -> bool {
        self.point_in_bounds(rect.top_left)
            && self.point_in_bounds(
                rect.top_left + Point::new(rect.size.width as i32, rect.size.height as i32),
            )
    }

    fn check_rect(&self, rect: Rectangle, what: &str) {
        if !self.rect_in_bounds(rect) {
            tracing::debug!(
                what,
                rect = ?rect,
                width = self.size.width,
                height = self.size.height,
                "drawing outside widget bounds"
            );
        }
    }

    fn check_point(&self, point: Point, what: &str) {
        if !self.point_in_bounds(point) {
            tracing::debug!(
                what,
                x = point.x,
                y = point.y,
                width = self.size.width,
                height = self.size.height,
                "drawing outside widget bounds"
            );
        }
    }

    // ------------------------------------------------------------------
    // Fonts
    // ------------------------------------------------------------------

    /// Font for a named size class, scaled to this context's height.
    pub fn font(&self, class: FontClass, bold: bool) -> ScaledFont {
        let target = class.target_height(self.size.height as f32 * self.scale);
        font::font_for_height(target, bold)
    }

    /// Font with an explicit pixel line height.
    pub fn font_for_height(&self, px: u32, bold: bool) -> ScaledFont {
        font::font_for_height(px, bold)
    }

    /// Measure `text` in the given font.
    pub fn text_size(&self, text: &str, font: &ScaledFont) -> Size {
        font.text_size(text)
    }

    /// Largest font whose rendered `text` fits inside `max`.
    pub fn fit_text(&self, text: &str, max: Size, bold: bool) -> ScaledFont {
        font::fit_text(text, max, bold)
    }

    // ------------------------------------------------------------------
    // Drawing — all coordinates LOCAL
    // ------------------------------------------------------------------

    /// Draw anchored text vertically centered on `pos.y`.
    pub fn draw_text(
        &mut self,
        text: &str,
        pos: Point,
        font: &ScaledFont,
        color: Rgb888,
        anchor: Anchor,
    ) -> Result<(), D::Error> {
        if text.is_empty() {
            return Ok(());
        }
        self.check_point(pos, "text");
        let size = font.text_size(text);
        let x = match anchor {
            Anchor::Left => pos.x,
            Anchor::Center => pos.x - size.width as i32 / 2,
            Anchor::Right => pos.x - size.width as i32,
        };
        let y = pos.y - size.height as i32 / 2;
        font::draw_text(
            self.target,
            text,
            self.to_absolute(Point::new(x, y)),
            font,
            color,
        )
    }

    /// Filled/outlined rectangle.
    pub fn draw_rect(
        &mut self,
        rect: Rectangle,
        fill: Option<Rgb888>,
        outline: Option<(Rgb888, u32)>,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "rect");
        let abs = self.to_absolute_rect(rect);
        if let Some(color) = fill {
            abs.into_styled(PrimitiveStyle::with_fill(color))
                .draw(self.target)?;
        }
        if let Some((color, width)) = outline {
            abs.into_styled(
                PrimitiveStyleBuilder::new()
                    .stroke_color(color)
                    .stroke_width(width)
                    .build(),
            )
            .draw(self.target)?;
        }
        Ok(())
    }

    /// Card/panel background using theme defaults for unspecified parts.
    pub fn draw_panel(
        &mut self,
        rect: Rectangle,
        background: Option<Rgb888>,
        border: Option<Rgb888>,
        radius: Option<u32>,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "panel");
        let fill = background.unwrap_or(self.theme.surface);
        let radius = radius.unwrap_or(self.theme.corner_radius);
        let border = if self.theme.border_width > 0 {
            Some((
                border.unwrap_or(self.theme.border),
                self.theme.border_width,
            ))
        } else {
            border.map(|color| (color, 1))
        };
        primitives::draw_panel(self.target, self.to_absolute_rect(rect), fill, border, radius)
    }

    /// Horizontal progress bar.
    pub fn draw_bar(
        &mut self,
        rect: Rectangle,
        percent: f32,
        color: Rgb888,
        background: Option<Rgb888>,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "bar");
        let background = background.unwrap_or(self.theme.bar_background);
        primitives::draw_bar(
            self.target,
            self.to_absolute_rect(rect),
            percent,
            color,
            background,
        )
    }

    /// Full-circle ring gauge.
    pub fn draw_ring_gauge(
        &mut self,
        center: Point,
        radius: u32,
        percent: f32,
        color: Rgb888,
        background: Option<Rgb888>,
        width: u32,
    ) -> Result<(), D::Error> {
        self.check_point(center, "ring");
        let background = background.unwrap_or(self.theme.bar_background);
        primitives::draw_ring_gauge(
            self.target,
            self.to_absolute(center),
            radius,
            percent,
            color,
            background,
            width,
        )
    }

    /// 270° arc gauge.
    pub fn draw_arc_gauge(
        &mut self,
        rect: Rectangle,
        percent: f32,
        color: Rgb888,
        background: Option<Rgb888>,
        width: u32,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "arc");
        let background = background.unwrap_or(self.theme.bar_background);
        primitives::draw_arc_gauge(
            self.target,
            self.to_absolute_rect(rect),
            percent,
            color,
            background,
            width,
        )
    }

    /// Sparkline chart.
    pub fn draw_sparkline(
        &mut self,
        rect: Rectangle,
        data: &[f64],
        color: Rgb888,
        fill: bool,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "sparkline");
        primitives::draw_sparkline(self.target, self.to_absolute_rect(rect), data, color, fill)
    }

    /// Binary on/off timeline bar.
    pub fn draw_timeline_bar(
        &mut self,
        rect: Rectangle,
        data: &[f64],
        on_color: Rgb888,
        off_color: Option<Rgb888>,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "timeline");
        let off_color = off_color.unwrap_or(self.theme.bar_background);
        primitives::draw_timeline_bar(
            self.target,
            self.to_absolute_rect(rect),
            data,
            on_color,
            off_color,
        )
    }

    /// Filled/outlined ellipse.
    pub fn draw_ellipse(
        &mut self,
        rect: Rectangle,
        fill: Option<Rgb888>,
        outline: Option<(Rgb888, u32)>,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "ellipse");
        primitives::draw_ellipse(self.target, self.to_absolute_rect(rect), fill, outline)
    }

    /// Polyline through local points.
    pub fn draw_line(
        &mut self,
        points: &[Point],
        color: Rgb888,
        width: u32,
    ) -> Result<(), D::Error> {
        let abs: Vec<Point> = points.iter().map(|p| self.to_absolute(*p)).collect();
        primitives::draw_polyline(self.target, &abs, color, width)
    }

    /// Named icon glyph in a `size`×`size` box.
    pub fn draw_icon(
        &mut self,
        name: &str,
        top_left: Point,
        size: u32,
        color: Rgb888,
    ) -> Result<(), D::Error> {
        self.check_point(top_left, "icon");
        icon::draw_icon(self.target, name, self.to_absolute(top_left), size, color)
    }

    /// Paste a bitmap with the given fit mode.
    pub fn draw_image(
        &mut self,
        source: &RgbImage,
        rect: Rectangle,
        mode: FitMode,
    ) -> Result<(), D::Error> {
        self.check_rect(rect, "image");
        let abs = self.to_absolute_rect(rect);
        self.target.paste_image(source, abs, mode)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use frame_surface::Canvas;

    const WHITE: Rgb888 = Rgb888::new(255, 255, 255);

    fn slot_context(canvas: &mut Canvas) -> RenderContext<'_, Canvas> {
        RenderContext::new(
            canvas,
            Rectangle::new(Point::new(20, 30), Size::new(100, 80)),
            Theme::classic(),
        )
    }

    #[test]
    fn translation_offsets_drawing() {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        {
            let mut ctx = slot_context(&mut canvas);
            ctx.draw_rect(
                Rectangle::new(Point::new(0, 0), Size::new(10, 10)),
                Some(WHITE),
                None,
            )
            .unwrap();
        }
        assert_eq!(canvas.pixel(20, 30), Some(WHITE));
        assert_eq!(canvas.pixel(19, 29), Some(Rgb888::new(0, 0, 0)));
    }

    #[test]
    fn bounds_predicates() {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = slot_context(&mut canvas);
        assert!(ctx.point_in_bounds(Point::new(0, 0)));
        assert!(ctx.point_in_bounds(Point::new(100, 80)));
        assert!(!ctx.point_in_bounds(Point::new(101, 0)));
        assert!(ctx.rect_in_bounds(Rectangle::new(Point::zero(), Size::new(100, 80))));
        assert!(!ctx.rect_in_bounds(Rectangle::new(Point::new(50, 50), Size::new(100, 80))));
    }

    #[test]
    fn out_of_bounds_draw_does_not_fail() {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let mut ctx = slot_context(&mut canvas);
        // Diagnostic only; the draw itself proceeds
        ctx.draw_rect(
            Rectangle::new(Point::new(90, 70), Size::new(50, 50)),
            Some(WHITE),
            None,
        )
        .unwrap();
    }

    #[test]
    fn anchored_text_positions() {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let mut ctx = slot_context(&mut canvas);
        let font = ctx.font(FontClass::Regular, false);
        for anchor in [Anchor::Left, Anchor::Center, Anchor::Right] {
            ctx.draw_text("ok", Point::new(50, 40), &font, WHITE, anchor)
                .unwrap();
        }
    }

    #[test]
    fn font_scales_with_context_height() {
        let mut tall_canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let tall = RenderContext::new(
            &mut tall_canvas,
            Rectangle::new(Point::zero(), Size::new(240, 224)),
            Theme::classic(),
        );
        let tall_font = tall.font(FontClass::Regular, false);

        let mut short_canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let short = RenderContext::new(
            &mut short_canvas,
            Rectangle::new(Point::zero(), Size::new(240, 70)),
            Theme::classic(),
        );
        let short_font = short.font(FontClass::Regular, false);

        assert!(tall_font.line_height() > short_font.line_height());
    }

    #[test]
    fn size_category_thresholds() {
        assert_eq!(size_category(69), SizeCategory::Compact);
        assert_eq!(size_category(80), SizeCategory::Small);
        assert_eq!(size_category(120), SizeCategory::Medium);
        assert_eq!(size_category(180), SizeCategory::Large);
        assert_eq!(size_category(480), SizeCategory::Large);
    }

    #[test]
    fn theme_sentinels_resolve_through_context() {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = slot_context(&mut canvas);
        assert_eq!(
            ctx.resolve(ColorSpec::TextPrimary),
            Theme::classic().text_primary
        );
        assert_eq!(ctx.resolve(ColorSpec::Rgb(WHITE)), WHITE);
    }

    #[test]
    fn image_paste_lands_inside_slot() {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        {
            let mut ctx = slot_context(&mut canvas);
            let img = image::RgbImage::from_pixel(4, 4, image::Rgb([255, 0, 0]));
            ctx.draw_image(
                &img,
                Rectangle::new(Point::zero(), Size::new(20, 20)),
                FitMode::Stretch,
            )
            .unwrap();
        }
        assert_eq!(canvas.pixel(25, 35), Some(Rgb888::new(255, 0, 0)));
        assert_eq!(canvas.pixel(10, 10), Some(Rgb888::new(0, 0, 0)));
    }
}
