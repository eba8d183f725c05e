//! Theme palettes consulted for theme-aware colors.

use embedded_graphics::pixelcolor::Rgb888;

/// Resolved palette for one rendering pass.
///
/// Widgets declare theme-aware colors through
/// [`ColorSpec`](crate::ColorSpec); the concrete values below are only
/// read at render time, never baked into a component at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Main text/value color.
    pub text_primary: Rgb888,
    /// Label/secondary text color.
    pub text_secondary: Rgb888,
    /// Card/panel surface fill.
    pub surface: Rgb888,
    /// Screen background.
    pub background: Rgb888,
    /// Panel border color (drawn when `border_width > 0`).
    pub border: Rgb888,
    /// Background track of bars, rings and arcs.
    pub bar_background: Rgb888,
    /// Panel corner radius in pixels.
    pub corner_radius: u32,
    /// Panel border width in pixels; 0 disables borders.
    pub border_width: u32,
}

impl Theme {
    /// The classic dark theme most frame devices ship with.
    pub fn classic() -> Self {
        Self {
            text_primary: Rgb888::new(255, 255, 255),
            text_secondary: Rgb888::new(140, 140, 140),
            surface: Rgb888::new(26, 26, 32),
            background: Rgb888::new(0, 0, 0),
            border: Rgb888::new(60, 60, 70),
            bar_background: Rgb888::new(45, 45, 50),
            corner_radius: 4,
            border_width: 0,
        }
    }

    /// Light theme for bright rooms.
    pub fn light() -> Self {
        Self {
            text_primary: Rgb888::new(20, 20, 25),
            text_secondary: Rgb888::new(105, 105, 115),
            surface: Rgb888::new(235, 235, 240),
            background: Rgb888::new(250, 250, 252),
            border: Rgb888::new(200, 200, 210),
            bar_background: Rgb888::new(210, 210, 218),
            corner_radius: 4,
            border_width: 1,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_classic() {
        assert_eq!(Theme::default(), Theme::classic());
    }

    #[test]
    fn light_theme_flips_text_contrast() {
        let dark = Theme::classic();
        let light = Theme::light();
        assert_ne!(dark.text_primary, light.text_primary);
        assert!(light.border_width > 0);
    }
}
