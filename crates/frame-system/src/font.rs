//! Font ladder and scaled text drawing.
//!
//! Device frames render through fixed-cell mono fonts, so continuous font
//! sizing is approximated by a ladder of base fonts multiplied by an
//! integer magnification. A [`ScaledFont`] pairs the two; lookups pick
//! the pair whose effective line height lands closest under a pixel
//! budget.

use embedded_graphics::image::GetPixel;
use embedded_graphics::mono_font::ascii::{
    FONT_10X20, FONT_4X6, FONT_5X8, FONT_6X10, FONT_6X12, FONT_6X13_BOLD, FONT_7X13,
    FONT_7X14_BOLD, FONT_9X15, FONT_9X15_BOLD, FONT_9X18, FONT_9X18_BOLD,
};
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::{BinaryColor, Rgb888};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

/// Regular ladder, ascending line height.
const LADDER: &[&MonoFont<'static>] = &[
    &FONT_4X6,
    &FONT_5X8,
    &FONT_6X10,
    &FONT_6X12,
    &FONT_7X13,
    &FONT_9X15,
    &FONT_9X18,
    &FONT_10X20,
];

/// Bold ladder; the smallest and largest steps have no bold cut and fall
/// back to the regular face.
const LADDER_BOLD: &[&MonoFont<'static>] = &[
    &FONT_4X6,
    &FONT_5X8,
    &FONT_6X10,
    &FONT_6X13_BOLD,
    &FONT_7X14_BOLD,
    &FONT_9X15_BOLD,
    &FONT_9X18_BOLD,
    &FONT_10X20,
];

/// Named font size classes, scaled against the render context height.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum FontClass {
    /// Footnotes and forecast labels.
    Tiny,
    /// Labels and secondary rows.
    Small,
    /// Body text.
    #[default]
    Regular,
    /// Emphasized values.
    Medium,
    /// Slot-dominating values.
    Large,
    /// Hero values.
    XLarge,
    /// Full-slot readouts.
    Huge,
}

impl FontClass {
    /// Parse a class name; unknown names fall back to `Regular`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "tiny" => FontClass::Tiny,
            "small" => FontClass::Small,
            "medium" => FontClass::Medium,
            "large" => FontClass::Large,
            "xlarge" => FontClass::XLarge,
            "huge" => FontClass::Huge,
            _ => FontClass::Regular,
        }
    }

    /// Target line height in pixels for a context of the given height.
    pub(crate) fn target_height(self, context_height: f32) -> u32 {
        let (fraction, floor) = match self {
            FontClass::Tiny => (0.07, 6),
            FontClass::Small => (0.09, 7),
            FontClass::Regular => (0.11, 8),
            FontClass::Medium => (0.14, 10),
            FontClass::Large => (0.18, 12),
            FontClass::XLarge => (0.24, 14),
            FontClass::Huge => (0.32, 16),
        };
        ((context_height * fraction) as u32).max(floor)
    }
}

/// A mono font plus integer magnification.
#[derive(Clone, Copy)]
pub struct ScaledFont {
    base: &'static MonoFont<'static>,
    scale: u32,
}

impl core::fmt::Debug for ScaledFont {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ScaledFont")
            .field("cell", &self.base.character_size)
            .field("scale", &self.scale)
            .finish()
    }
}

impl ScaledFont {
    /// Effective line height in pixels.
    pub fn line_height(&self) -> u32 {
        self.base.character_size.height.saturating_mul(self.scale)
    }

    /// Horizontal pen advance per character.
    pub fn advance(&self) -> u32 {
        (self.base.character_size.width + self.base.character_spacing).saturating_mul(self.scale)
    }

    /// Size of the rendered bounding box for `text`.
    pub fn text_size(&self, text: &str) -> Size {
        let n = text.chars().count() as u32;
        if n == 0 {
            return Size::new(0, self.line_height());
        }
        let width = n * self.advance() - self.base.character_spacing * self.scale;
        Size::new(width, self.line_height())
    }
}

/// Largest ladder font whose line height fits within `px`.
///
/// Requests below the smallest step return that step at magnification 1.
pub fn font_for_height(px: u32, bold: bool) -> ScaledFont {
    let ladder = if bold { LADDER_BOLD } else { LADDER };
    let mut best: Option<ScaledFont> = None;
    let mut best_height = 0;

    for &base in ladder {
        let h = base.character_size.height;
        if h == 0 {
            continue;
        }
        let scale = px / h;
        if scale == 0 {
            continue;
        }
        let effective = h * scale;
        // >= so larger bases win ties over magnified small ones
        if effective >= best_height {
            best_height = effective;
            best = Some(ScaledFont { base, scale });
        }
    }

    best.unwrap_or(ScaledFont {
        base: &FONT_4X6,
        scale: 1,
    })
}

/// Largest ladder font whose rendered `text` fits inside `max`.
///
/// Descending search over the effective-height ladder; when even the
/// smallest entry overflows, that entry is returned and the caller's
/// drawing simply spills by less than one ladder step.
pub fn fit_text(text: &str, max: Size, bold: bool) -> ScaledFont {
    let ladder = if bold { LADDER_BOLD } else { LADDER };
    let n = text.chars().count() as u32;
    let mut best: Option<ScaledFont> = None;
    let mut best_height = 0;

    for &base in ladder {
        let h = base.character_size.height;
        if h == 0 {
            continue;
        }
        let mut scale = max.height / h;
        if n > 0 {
            let advance = base.character_size.width + base.character_spacing;
            let width_at_one = n * advance - base.character_spacing;
            if width_at_one > 0 {
                scale = scale.min(max.width / width_at_one);
            }
        }
        if scale == 0 {
            continue;
        }
        let effective = h * scale;
        if effective >= best_height {
            best_height = effective;
            best = Some(ScaledFont { base, scale });
        }
    }

    best.unwrap_or(ScaledFont {
        base: if bold { LADDER_BOLD[0] } else { LADDER[0] },
        scale: 1,
    })
}

/// Draw `text` with its top-left corner at `top_left`.
///
/// Glyphs are read from the font atlas and magnified by filling
/// scale×scale blocks, which keeps the pixel-art look device frames
/// expect.
pub fn draw_text<D>(
    target: &mut D,
    text: &str,
    top_left: Point,
    font: &ScaledFont,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let cell = font.base.character_size;
    if cell.width == 0 || cell.height == 0 {
        return Ok(());
    }
    let glyphs_per_row = (font.base.image.size().width / cell.width).max(1);
    let style = PrimitiveStyle::with_fill(color);

    let mut pen_x = top_left.x;
    for ch in text.chars() {
        let index = font.base.glyph_mapping.index(ch) as u32;
        let atlas_x = (index % glyphs_per_row) * cell.width;
        let atlas_y = (index / glyphs_per_row) * cell.height;

        for gy in 0..cell.height {
            for gx in 0..cell.width {
                let src = Point::new((atlas_x + gx) as i32, (atlas_y + gy) as i32);
                if font.base.image.pixel(src) == Some(BinaryColor::On) {
                    Rectangle::new(
                        Point::new(
                            pen_x + (gx * font.scale) as i32,
                            top_left.y + (gy * font.scale) as i32,
                        ),
                        Size::new(font.scale, font.scale),
                    )
                    .into_styled(style)
                    .draw(target)?;
                }
            }
        }
        pen_x += font.advance() as i32;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use frame_surface::Canvas;

    #[test]
    fn font_for_height_exact_steps() {
        assert_eq!(font_for_height(20, false).line_height(), 20);
        assert_eq!(font_for_height(10, false).line_height(), 10);
    }

    #[test]
    fn font_for_height_never_exceeds_budget() {
        for px in 6..=96 {
            let font = font_for_height(px, false);
            assert!(font.line_height() <= px, "{} > {}", font.line_height(), px);
        }
    }

    #[test]
    fn font_for_height_magnifies_past_ladder_top() {
        let font = font_for_height(40, false);
        assert_eq!(font.line_height(), 40); // 10x20 at 2x
    }

    #[test]
    fn tiny_request_returns_floor_font() {
        let font = font_for_height(3, false);
        assert_eq!(font.line_height(), 6);
    }

    #[test]
    fn class_heights_are_monotonic() {
        let classes = [
            FontClass::Tiny,
            FontClass::Small,
            FontClass::Regular,
            FontClass::Medium,
            FontClass::Large,
            FontClass::XLarge,
            FontClass::Huge,
        ];
        let heights: Vec<u32> = classes.iter().map(|c| c.target_height(240.0)).collect();
        for pair in heights.windows(2) {
            assert!(pair[0] < pair[1], "{heights:?} not ascending");
        }
    }

    #[test]
    fn class_from_name_falls_back() {
        assert_eq!(FontClass::from_name("huge"), FontClass::Huge);
        assert_eq!(FontClass::from_name("bogus"), FontClass::Regular);
    }

    #[test]
    fn text_size_counts_spacing_between_cells() {
        let font = font_for_height(10, false); // 6x10, spacing 0
        let size = font.text_size("abc");
        assert_eq!(size.height, 10);
        assert_eq!(size.width, font.advance() * 3 - (font.advance() - 6));
    }

    #[test]
    fn fit_text_respects_both_axes() {
        let font = fit_text("12:34", Size::new(200, 200), false);
        assert!(font.text_size("12:34").width <= 200);
        assert!(font.line_height() <= 200);
        // Plenty of room: expect magnification beyond the base ladder
        assert!(font.line_height() > 20);
    }

    #[test]
    fn fit_text_width_limited() {
        // 15 characters: tall fonts overflow 80 px, short ones fit
        let text = "kitchen sensor!";
        let font = fit_text(text, Size::new(80, 100), false);
        assert!(font.text_size(text).width <= 80);
        assert!(font.line_height() < 10);
    }

    #[test]
    fn fit_text_floor_when_nothing_fits() {
        let font = fit_text("wide text", Size::new(4, 4), false);
        assert_eq!(font.line_height(), 6);
    }

    #[test]
    fn draw_text_marks_pixels() {
        let mut canvas = Canvas::new(Size::new(64, 24)).unwrap();
        let font = font_for_height(20, false);
        draw_text(
            &mut canvas,
            "A",
            Point::new(2, 2),
            &font,
            Rgb888::new(255, 255, 255),
        )
        .unwrap();

        let lit = canvas
            .pixels()
            .iter()
            .filter(|px| **px == Rgb888::new(255, 255, 255))
            .count();
        assert!(lit > 0, "glyph left no pixels");
    }

    #[test]
    fn scaled_draw_covers_larger_area() {
        let mut small = Canvas::new(Size::new(120, 60)).unwrap();
        let mut big = Canvas::new(Size::new(120, 60)).unwrap();
        let white = Rgb888::new(255, 255, 255);

        draw_text(
            &mut small,
            "8",
            Point::zero(),
            &font_for_height(20, false),
            white,
        )
        .unwrap();
        draw_text(
            &mut big,
            "8",
            Point::zero(),
            &font_for_height(40, false),
            white,
        )
        .unwrap();

        let count = |c: &Canvas| c.pixels().iter().filter(|px| **px == white).count();
        assert!(count(&big) > count(&small) * 2);
    }
}
