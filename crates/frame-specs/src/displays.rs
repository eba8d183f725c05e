//! Known display device entries.
//!
//! These mirror the small square IPS panels found in smart-clock style
//! picture frames. Resolutions outside this table work fine; the entries
//! just bundle sensible spacing defaults per device class.

use crate::DisplaySpec;

/// 240×240 smart clock panel — the reference device.
pub const SMART_CLOCK_240: DisplaySpec = DisplaySpec {
    name: "SmartClock 240",
    width: 240,
    height: 240,
    default_padding: 8,
    default_gap: 8,
};

/// 320×240 landscape variant.
pub const SMART_FRAME_320: DisplaySpec = DisplaySpec {
    name: "SmartFrame 320",
    width: 320,
    height: 240,
    default_padding: 8,
    default_gap: 8,
};

/// 480×480 high-resolution panel.
pub const SMART_CLOCK_480: DisplaySpec = DisplaySpec {
    name: "SmartClock 480",
    width: 480,
    height: 480,
    default_padding: 16,
    default_gap: 16,
};

/// Every display this crate knows about.
pub const ALL_DISPLAYS: &[DisplaySpec] = &[SMART_CLOCK_240, SMART_FRAME_320, SMART_CLOCK_480];

/// Look up a display spec by its name.
///
/// Returns `None` for unknown names; callers construct an ad-hoc
/// [`DisplaySpec`] in that case.
pub fn by_name(name: &str) -> Option<&'static DisplaySpec> {
    ALL_DISPLAYS.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name() {
        assert_eq!(by_name("SmartClock 240"), Some(&SMART_CLOCK_240));
        assert_eq!(by_name("nope"), None);
    }

    #[test]
    fn larger_panels_use_wider_spacing() {
        assert!(SMART_CLOCK_480.default_gap > SMART_CLOCK_240.default_gap);
    }
}
