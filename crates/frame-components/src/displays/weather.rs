//! Weather face with responsive forecast detail.

use chrono::{Datelike, NaiveDateTime};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::component::Component;
use crate::containers::{Align, Column, Justify, Padding, Row, Stack};
use crate::primitives::{HAlign, Icon, Text};

/// One forecast day record, pre-fetched by the coordinator.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastDay {
    /// ISO datetime string of the forecast day.
    pub datetime: String,
    /// Condition keyword ("sunny", "rainy", ...).
    pub condition: String,
    /// Daily high.
    pub temperature: f64,
    /// Daily low, when the provider supplies one.
    pub templow: Option<f64>,
}

/// Map a condition keyword to its icon name.
///
/// Unmapped conditions fall back to the sunny icon — never an error.
pub fn condition_icon(condition: &str) -> &'static str {
    match condition {
        "sunny" => "weather-sunny",
        "clear-night" => "weather-night",
        "partlycloudy" => "weather-partly-cloudy",
        "cloudy" => "weather-cloudy",
        "rainy" => "weather-rainy",
        "pouring" => "weather-pouring",
        "snowy" => "weather-snowy",
        "snowy-rainy" => "weather-snowy-rainy",
        "fog" => "weather-fog",
        "hail" => "weather-hail",
        "windy" => "weather-windy",
        "windy-variant" => "weather-windy-variant",
        "lightning" => "weather-lightning",
        "lightning-rainy" => "weather-lightning-rainy",
        "exceptional" => "alert-circle",
        _ => "weather-sunny",
    }
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Weekday abbreviation from an ISO datetime string, with a fallback for
/// unparseable input (a leading alphabetic prefix is reused as-is).
fn forecast_day_name(datetime: &str, fallback: &str) -> String {
    if datetime.is_empty() {
        return fallback.to_string();
    }
    let trimmed = datetime
        .split('+')
        .next()
        .unwrap_or(datetime)
        .trim_end_matches('Z');
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return WEEKDAYS[dt.weekday().num_days_from_monday() as usize].to_string();
    }
    let prefix: String = datetime.chars().take(3).collect();
    if prefix.len() == 3 && prefix.chars().all(|c| c.is_ascii_alphabetic()) {
        prefix
    } else {
        fallback.to_string()
    }
}

/// Placeholder column shown when no weather entity is available.
pub fn weather_placeholder() -> Component {
    Column::new(vec![
        Icon::new("weather-cloudy")
            .color(ColorSpec::TextSecondary)
            .max_size(48)
            .into(),
        Text::new("No Weather Data")
            .font(FontClass::Small)
            .color(ColorSpec::TextSecondary)
            .into(),
    ])
    .gap(8)
    .align(Align::Center)
    .justify(Justify::Center)
    .into()
}

/// Current conditions plus an optional multi-day forecast, degrading
/// with the slot height (full → mini icons → icon+temp only).
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherDisplay {
    /// Current temperature text ("--" when unknown).
    pub temperature: String,
    /// Current humidity text ("--" when unknown).
    pub humidity: String,
    /// Current condition keyword.
    pub condition: String,
    /// Forecast day records, soonest first.
    pub forecast: Vec<ForecastDay>,
    /// Show the forecast strip when space allows.
    pub show_forecast: bool,
    /// Show the humidity badge.
    pub show_humidity: bool,
    /// Show high/low pairs instead of highs only.
    pub show_high_low: bool,
    /// Number of forecast days drawn.
    pub forecast_days: usize,
}

impl WeatherDisplay {
    /// New display for a condition and temperature.
    pub fn new(condition: impl Into<String>, temperature: impl Into<String>) -> Self {
        Self {
            temperature: temperature.into(),
            humidity: "--".to_string(),
            condition: condition.into(),
            forecast: Vec::new(),
            show_forecast: true,
            show_humidity: true,
            show_high_low: true,
            forecast_days: 3,
        }
    }

    fn temp_text(&self) -> String {
        if self.temperature == "--" {
            "--".to_string()
        } else {
            format!("{}°", self.temperature)
        }
    }

    fn build_full(&self, width: u32, height: u32, icon_name: &str) -> Component {
        let padding = (width as f32 * 0.04) as u32;
        let icon_size = ((height as f32 * 0.25) as u32).max(24);

        let main_weather: Component = Column::new(vec![
            Icon::new(icon_name)
                .size(icon_size)
                .color(frame_system::color::GOLD)
                .into(),
            Text::new(self.temp_text()).font(FontClass::XLarge).into(),
            Text::new(titlecase(&self.condition))
                .font(FontClass::Small)
                .color(ColorSpec::TextSecondary)
                .into(),
        ])
        .gap((height as f32 * 0.04) as u32)
        .align(Align::Center)
        .justify(Justify::Start)
        .padding(padding)
        .into();

        let humidity_row: Option<Component> = if self.show_humidity {
            let badge_icon = ((height as f32 * 0.07) as u32).max(8);
            Some(
                Row::new(vec![
                    Icon::new("water-percent")
                        .size(badge_icon)
                        .color(frame_system::color::CYAN)
                        .into(),
                    Text::new(format!("{}%", self.humidity))
                        .font(FontClass::Tiny)
                        .color(frame_system::color::CYAN)
                        .align(HAlign::Start)
                        .into(),
                ])
                .gap(4)
                .align(Align::Center)
                .justify(Justify::Start)
                .padding(padding)
                .into(),
            )
        } else {
            None
        };

        let forecast_row: Option<Component> = if self.show_forecast && !self.forecast.is_empty() {
            let icon_size = ((height as f32 * 0.10) as u32).max(10);
            let columns: Vec<Component> = self
                .forecast
                .iter()
                .take(self.forecast_days)
                .enumerate()
                .map(|(i, day)| {
                    let name = forecast_day_name(&day.datetime, &format!("D{}", i + 1));
                    let temp = match (self.show_high_low, day.templow) {
                        (true, Some(low)) => format!("{}°/{}°", day.temperature, low),
                        _ => format!("{}°", day.temperature),
                    };
                    Column::new(vec![
                        Text::new(name.to_uppercase())
                            .font(FontClass::Tiny)
                            .color(ColorSpec::TextSecondary)
                            .into(),
                        Icon::new(condition_icon(&day.condition))
                            .size(icon_size)
                            .color(ColorSpec::TextSecondary)
                            .into(),
                        Text::new(temp).font(FontClass::Tiny).into(),
                    ])
                    .gap((height as f32 * 0.02) as u32)
                    .align(Align::Center)
                    .justify(Justify::Center)
                    .into()
                })
                .collect();
            Some(
                Row::new(columns)
                    .align(Align::Center)
                    .justify(Justify::SpaceAround)
                    .padding(padding)
                    .into(),
            )
        } else {
            None
        };

        match (humidity_row, forecast_row) {
            (Some(humidity), Some(forecast)) => Stack::new(vec![
                main_weather,
                Padding::top_only(humidity, (height as f32 * 0.35) as u32).into(),
                Padding::top_only(forecast, (height as f32 * 0.72) as u32).into(),
            ])
            .into(),
            (Some(humidity), None) => Column::new(vec![main_weather, humidity])
                .gap((height as f32 * 0.05) as u32)
                .align(Align::Start)
                .justify(Justify::Start)
                .into(),
            (None, Some(forecast)) => Column::new(vec![main_weather, forecast])
                .gap((height as f32 * 0.10) as u32)
                .align(Align::Center)
                .justify(Justify::SpaceBetween)
                .into(),
            (None, None) => main_weather,
        }
    }

    fn build_semi_compact(&self, width: u32, height: u32, icon_name: &str) -> Component {
        let padding = (width as f32 * 0.04) as u32;
        let icon_size = ((height as f32 * 0.28) as u32).clamp(16, 28);
        let mini_icon = ((height as f32 * 0.12) as u32).max(10);

        let top_row: Component = Row::new(vec![
            Icon::new(icon_name)
                .size(icon_size)
                .color(frame_system::color::GOLD)
                .into(),
            Text::new(self.temp_text()).font(FontClass::Large).into(),
        ])
        .gap(4)
        .align(Align::Center)
        .justify(Justify::Center)
        .into();

        let icons: Vec<Component> = self
            .forecast
            .iter()
            .take(self.forecast_days.min(3))
            .map(|day| {
                Icon::new(condition_icon(&day.condition))
                    .size(mini_icon)
                    .color(ColorSpec::TextSecondary)
                    .into()
            })
            .collect();

        let mut children = vec![top_row];
        if !icons.is_empty() {
            children.push(
                Row::new(icons)
                    .gap((width as f32 * 0.08) as u32)
                    .align(Align::Center)
                    .justify(Justify::Center)
                    .into(),
            );
        }

        Column::new(children)
            .gap((height as f32 * 0.08) as u32)
            .padding(padding)
            .align(Align::Center)
            .justify(Justify::Center)
            .into()
    }

    fn build_compact(&self, width: u32, height: u32, icon_name: &str) -> Component {
        let padding = (width as f32 * 0.04) as u32;
        let icon_size = ((height as f32 * 0.40) as u32).clamp(16, 32);

        let mut right: Vec<Component> = vec![Text::new(self.temp_text())
            .font(FontClass::Large)
            .align(HAlign::End)
            .into()];
        if self.show_humidity {
            right.push(
                Text::new(format!("{}%", self.humidity))
                    .font(FontClass::Tiny)
                    .color(frame_system::color::CYAN)
                    .align(HAlign::End)
                    .into(),
            );
        }

        Row::new(vec![
            Icon::new(icon_name)
                .size(icon_size)
                .color(frame_system::color::GOLD)
                .into(),
            Column::new(right)
                .gap((height as f32 * 0.08) as u32)
                .align(Align::End)
                .justify(Justify::Center)
                .into(),
        ])
        .gap(padding)
        .align(Align::Center)
        .justify(Justify::SpaceBetween)
        .padding(padding)
        .into()
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        max
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let icon_name = condition_icon(&self.condition);
        let width = bounds.size.width;
        let height = bounds.size.height;

        let tree = match size_category(height) {
            SizeCategory::Medium | SizeCategory::Large if self.show_forecast => {
                self.build_full(width, height, icon_name)
            }
            SizeCategory::Small if self.show_forecast && !self.forecast.is_empty() => {
                self.build_semi_compact(width, height, icon_name)
            }
            _ => self.build_compact(width, height, icon_name),
        };
        tree.render(ctx, bounds)
    }
}

fn titlecase(condition: &str) -> String {
    condition
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_conditions_map() {
        assert_eq!(condition_icon("rainy"), "weather-rainy");
        assert_eq!(condition_icon("clear-night"), "weather-night");
    }

    #[test]
    fn unknown_condition_falls_back_to_sunny() {
        assert_eq!(condition_icon("unknown_condition_xyz"), "weather-sunny");
    }

    #[test]
    fn weekday_from_iso() {
        // 2025-12-29 is a Monday
        assert_eq!(forecast_day_name("2025-12-29T00:00:00+00:00", "D1"), "Mon");
        assert_eq!(forecast_day_name("2026-01-03T12:00:00Z", "D1"), "Sat");
    }

    #[test]
    fn weekday_fallbacks() {
        assert_eq!(forecast_day_name("", "D2"), "D2");
        assert_eq!(forecast_day_name("Tuesday", "D2"), "Tue");
        assert_eq!(forecast_day_name("12/29", "D2"), "D2");
    }

    #[test]
    fn condition_titlecase() {
        assert_eq!(titlecase("partly-cloudy"), "Partly Cloudy");
        assert_eq!(titlecase("sunny"), "Sunny");
    }
}
