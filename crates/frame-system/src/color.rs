//! Tagged colors and the shared palette.
//!
//! Components never compare magic RGB values to decide whether a color is
//! "theme-aware"; they carry a [`ColorSpec`] and the render context
//! resolves it against the active [`Theme`](crate::Theme) at draw time.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

use crate::Theme;

/// Pure white.
pub const WHITE: Rgb888 = Rgb888::new(255, 255, 255);
/// Pure black.
pub const BLACK: Rgb888 = Rgb888::new(0, 0, 0);
/// Neutral mid gray used for secondary text.
pub const GRAY: Rgb888 = Rgb888::new(140, 140, 140);
/// Dark gray used for gauge/bar backgrounds.
pub const DARK_GRAY: Rgb888 = Rgb888::new(45, 45, 50);
/// Default accent for values and gauges.
pub const CYAN: Rgb888 = Rgb888::new(0, 255, 255);
/// "On"/healthy indicator color.
pub const LIME: Rgb888 = Rgb888::new(80, 220, 80);
/// "Off"/alert indicator color.
pub const RED: Rgb888 = Rgb888::new(235, 70, 70);
/// Weather icon accent.
pub const GOLD: Rgb888 = Rgb888::new(255, 200, 40);
/// Warm accent for thresholds.
pub const ORANGE: Rgb888 = Rgb888::new(255, 150, 40);
/// Card/panel surface color.
pub const PANEL: Rgb888 = Rgb888::new(26, 26, 32);

/// Placeholder shown when an entity has no usable value.
pub const PLACEHOLDER_VALUE: &str = "--";
/// Placeholder shown when an entity has no resolvable name.
pub const PLACEHOLDER_NAME: &str = "Unknown";

/// A color that is either literal or resolved from the theme at render
/// time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColorSpec {
    /// A literal RGB color, passed through unchanged.
    Rgb(Rgb888),
    /// The theme's primary text color.
    TextPrimary,
    /// The theme's secondary (label) text color.
    TextSecondary,
}

impl ColorSpec {
    /// Resolve against a theme. Literal colors pass through unchanged.
    pub fn resolve(self, theme: &Theme) -> Rgb888 {
        match self {
            ColorSpec::Rgb(color) => color,
            ColorSpec::TextPrimary => theme.text_primary,
            ColorSpec::TextSecondary => theme.text_secondary,
        }
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::TextPrimary
    }
}

impl From<Rgb888> for ColorSpec {
    fn from(color: Rgb888) -> Self {
        ColorSpec::Rgb(color)
    }
}

/// Dim a color toward black by `factor` (0.0 = unchanged, 1.0 = black).
pub fn dim(color: Rgb888, factor: f32) -> Rgb888 {
    let keep = (1.0 - factor.clamp(0.0, 1.0)).max(0.0);
    Rgb888::new(
        (f32::from(color.r()) * keep) as u8,
        (f32::from(color.g()) * keep) as u8,
        (f32::from(color.b()) * keep) as u8,
    )
}

/// Blend two colors; `factor` 0.0 yields `a`, 1.0 yields `b`.
pub fn blend(a: Rgb888, b: Rgb888, factor: f32) -> Rgb888 {
    let t = factor.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) * (1.0 - t) + f32::from(y) * t) as u8;
    Rgb888::new(mix(a.r(), b.r()), mix(a.g(), b.g()), mix(a.b(), b.b()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_passes_through() {
        let theme = Theme::classic();
        assert_eq!(ColorSpec::Rgb(CYAN).resolve(&theme), CYAN);
    }

    #[test]
    fn sentinels_resolve_to_theme() {
        let theme = Theme::classic();
        assert_eq!(ColorSpec::TextPrimary.resolve(&theme), theme.text_primary);
        assert_eq!(
            ColorSpec::TextSecondary.resolve(&theme),
            theme.text_secondary
        );
    }

    #[test]
    fn dim_toward_black() {
        assert_eq!(dim(WHITE, 1.0), BLACK);
        assert_eq!(dim(WHITE, 0.0), WHITE);
        let half = dim(Rgb888::new(200, 100, 50), 0.5);
        assert_eq!(half, Rgb888::new(100, 50, 25));
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend(BLACK, WHITE, 0.0), BLACK);
        assert_eq!(blend(BLACK, WHITE, 1.0), WHITE);
    }
}
