//! Display specifications for dashboard frame devices
//!
//! Defines the characteristics of the small square displays the rendering
//! engine targets: pixel dimensions, the reference resolution fonts are
//! scaled against, and the default slot spacing used by layouts.
//!
//! # Example
//!
//! ```
//! use frame_specs::displays::SMART_CLOCK_240;
//!
//! assert_eq!(SMART_CLOCK_240.width, 240);
//! assert!((SMART_CLOCK_240.scale_factor() - 1.0).abs() < f32::EPSILON);
//! ```

pub mod displays;

/// Height of the reference display all relative sizing is calibrated to.
///
/// Font classes and layout defaults were tuned on a 240×240 panel; larger
/// panels scale up proportionally.
pub const REFERENCE_HEIGHT: u32 = 240;

/// Complete specification of a target display.
///
/// Contains the characteristics the rendering engine needs to produce a
/// frame for the device: dimensions plus the default spacing layouts use
/// when the configuration does not override them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DisplaySpec {
    /// Display name (e.g., "SmartClock 240")
    pub name: &'static str,

    /// Width in pixels
    pub width: u32,

    /// Height in pixels
    pub height: u32,

    /// Default padding between the display edge and the outermost slots
    pub default_padding: u32,

    /// Default gap between adjacent slots
    pub default_gap: u32,
}

impl DisplaySpec {
    /// Display aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f32 / self.height as f32
    }

    /// Scale factor relative to the 240 px reference panel.
    ///
    /// Used to scale fonts and spacing so a screen designed for the
    /// reference panel looks proportionally identical on larger devices.
    pub fn scale_factor(&self) -> f32 {
        self.height as f32 / REFERENCE_HEIGHT as f32
    }

    /// Total pixel count of the panel.
    pub fn pixel_count(&self) -> u32 {
        self.width.saturating_mul(self.height)
    }
}
