//! Clock widget.

use chrono::{DateTime, NaiveDateTime, Utc};
use frame_components::prelude::*;

use crate::config::WidgetConfig;
use crate::state::WidgetState;

/// Time/date display driven purely by the injected timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockWidget {
    config: WidgetConfig,
    show_date: bool,
    show_seconds: bool,
    twelve_hour: bool,
}

impl ClockWidget {
    /// Build from configuration (`time_format`, `show_date`,
    /// `show_seconds` options).
    pub fn new(config: WidgetConfig) -> Self {
        let show_date = config.opt_bool("show_date", true);
        let show_seconds = config.opt_bool("show_seconds", false);
        let twelve_hour = config.opt_str("time_format") == Some("12h");
        Self {
            config,
            show_date,
            show_seconds,
            twelve_hour,
        }
    }

    /// The clock depends on no entities.
    pub fn entities(&self) -> Vec<String> {
        Vec::new()
    }

    /// Build the clock face for the injected timestamp.
    ///
    /// Format selection is a pure function of the three mode flags; a
    /// missing timestamp renders the epoch rather than reading the wall
    /// clock, keeping the render deterministic.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let now: NaiveDateTime = state
            .now
            .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.naive_utc());

        let (time, ampm) = match (self.twelve_hour, self.show_seconds) {
            (true, true) => (
                now.format("%I:%M:%S").to_string(),
                Some(now.format("%p").to_string()),
            ),
            (true, false) => (
                now.format("%I:%M").to_string(),
                Some(now.format("%p").to_string()),
            ),
            (false, true) => (now.format("%H:%M:%S").to_string(), None),
            (false, false) => (now.format("%H:%M").to_string(), None),
        };

        let mut display = ClockDisplay::new(time)
            .time_color(self.config.color.unwrap_or(frame_system::color::WHITE));
        if self.show_date {
            display = display.date(now.format("%a, %b %d").to_string());
        }
        if let Some(ampm) = ampm {
            display = display.ampm(ampm);
        }
        if let Some(label) = &self.config.label {
            display = display.label(label.clone());
        }
        display.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> WidgetState {
        let now = NaiveDate::from_ymd_opt(2026, 8, 7)
            .and_then(|d| d.and_hms_opt(h, m, s))
            .unwrap_or_default();
        WidgetState::new().at(now)
    }

    fn render_clock(config: WidgetConfig, state: &WidgetState) -> Component {
        let mut canvas =
            frame_surface::Canvas::new(embedded_graphics::prelude::Size::new(240, 240))
                .expect("canvas");
        let ctx = RenderContext::new(
            &mut canvas,
            embedded_graphics::primitives::Rectangle::new(
                embedded_graphics::prelude::Point::zero(),
                embedded_graphics::prelude::Size::new(240, 240),
            ),
            Theme::classic(),
        );
        ClockWidget::new(config).render(&ctx, state)
    }

    #[test]
    fn twenty_four_hour_format() {
        let tree = render_clock(WidgetConfig::new("clock", 0), &at(14, 5, 30));
        let Component::Clock(clock) = tree else {
            panic!("expected clock display");
        };
        assert_eq!(clock.time, "14:05");
        assert!(clock.ampm.is_none());
        assert_eq!(clock.date.as_deref(), Some("Fri, Aug 07"));
    }

    #[test]
    fn twelve_hour_format_with_seconds() {
        let config = WidgetConfig::new("clock", 0)
            .option("time_format", "12h")
            .option("show_seconds", true)
            .option("show_date", false);
        let Component::Clock(clock) = render_clock(config, &at(14, 5, 30)) else {
            panic!("expected clock display");
        };
        assert_eq!(clock.time, "02:05:30");
        assert_eq!(clock.ampm.as_deref(), Some("PM"));
        assert!(clock.date.is_none());
    }

    #[test]
    fn no_entities() {
        assert!(ClockWidget::new(WidgetConfig::new("clock", 0))
            .entities()
            .is_empty());
    }

    #[test]
    fn deterministic_without_timestamp() {
        let config = WidgetConfig::new("clock", 0);
        let a = render_clock(config.clone(), &WidgetState::new());
        let b = render_clock(config, &WidgetState::new());
        assert_eq!(a, b);
    }
}
