//! Name-keyed icon glyphs drawn from graphics primitives.
//!
//! The glyph set covers the weather vocabulary plus the handful of names
//! the built-in widgets use. Unknown names draw the generic fallback
//! glyph — an unmapped icon must never fail a render.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, Triangle,
};

/// Resolved icon shape families.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Glyph {
    Sun,
    Moon,
    Cloud,
    PartlyCloudy,
    Rain,
    Pour,
    Snow,
    Fog,
    Wind,
    Lightning,
    LightningRain,
    Alert,
    Droplet,
    Pause,
    Play,
    Camera,
    Clock,
    Home,
    Thermometer,
    Fallback,
}

fn resolve(name: &str) -> Glyph {
    match name {
        "weather-sunny" | "sun" => Glyph::Sun,
        "weather-night" | "moon" => Glyph::Moon,
        "weather-partly-cloudy" => Glyph::PartlyCloudy,
        "weather-cloudy" | "cloud" => Glyph::Cloud,
        "weather-rainy" | "weather-snowy-rainy" | "weather-hail" => Glyph::Rain,
        "weather-pouring" => Glyph::Pour,
        "weather-snowy" | "snowflake" => Glyph::Snow,
        "weather-fog" => Glyph::Fog,
        "weather-windy" | "weather-windy-variant" => Glyph::Wind,
        "weather-lightning" | "flash" => Glyph::Lightning,
        "weather-lightning-rainy" => Glyph::LightningRain,
        "alert-circle" | "alert" => Glyph::Alert,
        "water-percent" | "water" => Glyph::Droplet,
        "pause" => Glyph::Pause,
        "play" => Glyph::Play,
        "camera" => Glyph::Camera,
        "clock" | "clock-outline" => Glyph::Clock,
        "home" => Glyph::Home,
        "thermometer" => Glyph::Thermometer,
        _ => Glyph::Fallback,
    }
}

/// Draw the named icon into the square `size`×`size` box at `top_left`.
///
/// Coordinates are absolute; the render context translates before
/// calling. Unknown names fall back to the generic glyph.
pub fn draw_icon<D>(
    target: &mut D,
    name: &str,
    top_left: Point,
    size: u32,
    color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if size < 4 {
        return Ok(());
    }
    let glyph = resolve(name);
    if glyph == Glyph::Fallback {
        tracing::debug!(icon = name, "unknown icon name, using fallback glyph");
    }

    let s = size as i32;
    let fill = PrimitiveStyle::with_fill(color);
    let stroke = |w: u32| {
        PrimitiveStyleBuilder::new()
            .stroke_color(color)
            .stroke_width(w)
            .build()
    };
    let line_w = (size / 10).max(1);
    let center = top_left + Point::new(s / 2, s / 2);

    match glyph {
        Glyph::Sun => {
            Circle::with_center(center, size / 2)
                .into_styled(fill)
                .draw(target)?;
            // Four cardinal + four diagonal rays
            let r1 = s / 3;
            let r2 = s / 2;
            for (dx, dy) in [
                (1, 0),
                (-1, 0),
                (0, 1),
                (0, -1),
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
            ] {
                let from = center + Point::new(dx * r1 * 2 / 3, dy * r1 * 2 / 3);
                let to = center + Point::new(dx * r2 * 2 / 3, dy * r2 * 2 / 3);
                Line::new(from, to).into_styled(stroke(line_w)).draw(target)?;
            }
        }
        Glyph::Moon => {
            Circle::with_center(center, size * 3 / 4)
                .into_styled(fill)
                .draw(target)?;
            // Bite taken out with a background-ish offset disc
            Circle::with_center(center + Point::new(s / 5, -s / 8), size / 2)
                .into_styled(PrimitiveStyle::with_fill(Rgb888::new(0, 0, 0)))
                .draw(target)?;
        }
        Glyph::Cloud => draw_cloud(target, top_left, size, color)?,
        Glyph::PartlyCloudy => {
            Circle::with_center(top_left + Point::new(s / 3, s / 3), size / 3)
                .into_styled(fill)
                .draw(target)?;
            draw_cloud(target, top_left + Point::new(s / 6, s / 6), size * 2 / 3, color)?;
        }
        Glyph::Rain => {
            draw_cloud(target, top_left, size * 3 / 4, color)?;
            for i in 0..3 {
                let x = top_left.x + s / 5 + i * s / 4;
                Line::new(
                    Point::new(x, top_left.y + s * 3 / 5),
                    Point::new(x - s / 10, top_left.y + s - 1),
                )
                .into_styled(stroke(line_w))
                .draw(target)?;
            }
        }
        Glyph::Pour => {
            draw_cloud(target, top_left, size * 3 / 4, color)?;
            for i in 0..4 {
                let x = top_left.x + s / 8 + i * s / 5;
                Line::new(
                    Point::new(x, top_left.y + s * 11 / 20),
                    Point::new(x - s / 8, top_left.y + s - 1),
                )
                .into_styled(stroke(line_w))
                .draw(target)?;
            }
        }
        Glyph::Snow => {
            draw_cloud(target, top_left, size * 3 / 4, color)?;
            for i in 0..3i32 {
                let x = top_left.x + s / 5 + i * s / 4;
                let y = top_left.y + s * 3 / 4 + (i % 2) * s / 10;
                Circle::with_center(Point::new(x, y), (size / 8).max(2))
                    .into_styled(fill)
                    .draw(target)?;
            }
        }
        Glyph::Fog => {
            for i in 0..3 {
                let y = top_left.y + s / 4 + i * s / 4;
                Line::new(
                    Point::new(top_left.x + s / 8, y),
                    Point::new(top_left.x + s - s / 8, y),
                )
                .into_styled(stroke(line_w))
                .draw(target)?;
            }
        }
        Glyph::Wind => {
            for (i, frac) in [(0i32, 3i32), (1, 2), (2, 3)] {
                let y = top_left.y + s / 4 + i * s / 4;
                Line::new(
                    Point::new(top_left.x + s / 8, y),
                    Point::new(top_left.x + s - s / frac, y),
                )
                .into_styled(stroke(line_w))
                .draw(target)?;
            }
        }
        Glyph::Lightning => draw_bolt(target, top_left, size, color)?,
        Glyph::LightningRain => {
            draw_cloud(target, top_left, size * 3 / 4, color)?;
            draw_bolt(
                target,
                top_left + Point::new(s / 4, s / 3),
                size * 2 / 3,
                color,
            )?;
        }
        Glyph::Alert => {
            Circle::with_center(center, size)
                .into_styled(stroke(line_w))
                .draw(target)?;
            Line::new(
                center + Point::new(0, -s / 4),
                center + Point::new(0, s / 10),
            )
            .into_styled(stroke(line_w))
            .draw(target)?;
            Circle::with_center(center + Point::new(0, s / 4), (size / 10).max(2))
                .into_styled(fill)
                .draw(target)?;
        }
        Glyph::Droplet => {
            Circle::with_center(
                top_left + Point::new(s / 2, s * 2 / 3),
                size * 3 / 5,
            )
            .into_styled(fill)
            .draw(target)?;
            Triangle::new(
                top_left + Point::new(s / 2, 0),
                top_left + Point::new(s / 5, s * 3 / 5),
                top_left + Point::new(s - s / 5, s * 3 / 5),
            )
            .into_styled(fill)
            .draw(target)?;
        }
        Glyph::Pause => {
            let bar_w = size / 3;
            let gap = size / 6;
            Rectangle::new(top_left, Size::new(bar_w, size))
                .into_styled(fill)
                .draw(target)?;
            Rectangle::new(
                top_left + Point::new((bar_w + gap) as i32, 0),
                Size::new(bar_w, size),
            )
            .into_styled(fill)
            .draw(target)?;
        }
        Glyph::Play => {
            Triangle::new(
                top_left,
                top_left + Point::new(0, s),
                top_left + Point::new(s, s / 2),
            )
            .into_styled(fill)
            .draw(target)?;
        }
        Glyph::Camera => {
            RoundedRectangle::with_equal_corners(
                Rectangle::new(
                    top_left + Point::new(0, s / 6),
                    Size::new(size, size * 2 / 3),
                ),
                Size::new(2, 2),
            )
            .into_styled(stroke(line_w))
            .draw(target)?;
            Circle::with_center(center, size / 3)
                .into_styled(stroke(line_w))
                .draw(target)?;
        }
        Glyph::Clock => {
            Circle::with_center(center, size)
                .into_styled(stroke(line_w))
                .draw(target)?;
            Line::new(center, center + Point::new(0, -s / 3))
                .into_styled(stroke(line_w))
                .draw(target)?;
            Line::new(center, center + Point::new(s / 4, 0))
                .into_styled(stroke(line_w))
                .draw(target)?;
        }
        Glyph::Home => {
            Triangle::new(
                top_left + Point::new(s / 2, 0),
                top_left + Point::new(0, s / 2),
                top_left + Point::new(s, s / 2),
            )
            .into_styled(fill)
            .draw(target)?;
            Rectangle::new(
                top_left + Point::new(s / 6, s / 2),
                Size::new(size * 2 / 3, size / 2),
            )
            .into_styled(fill)
            .draw(target)?;
        }
        Glyph::Thermometer => {
            Line::new(
                top_left + Point::new(s / 2, s / 8),
                top_left + Point::new(s / 2, s * 2 / 3),
            )
            .into_styled(stroke((size / 5).max(2)))
            .draw(target)?;
            Circle::with_center(top_left + Point::new(s / 2, s * 4 / 5), (size * 2 / 5).max(3))
                .into_styled(fill)
                .draw(target)?;
        }
        Glyph::Fallback => {
            RoundedRectangle::with_equal_corners(
                Rectangle::new(top_left, Size::new(size, size)),
                Size::new(2, 2),
            )
            .into_styled(stroke(line_w))
            .draw(target)?;
            Circle::with_center(center, (size / 4).max(2))
                .into_styled(fill)
                .draw(target)?;
        }
    }
    Ok(())
}

/// Two overlapping discs plus a base slab — the shared cloud body.
fn draw_cloud<D>(target: &mut D, top_left: Point, size: u32, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let s = size as i32;
    let fill = PrimitiveStyle::with_fill(color);
    Circle::with_center(top_left + Point::new(s / 3, s / 2), size / 2)
        .into_styled(fill)
        .draw(target)?;
    Circle::with_center(top_left + Point::new(s * 2 / 3, s * 2 / 5), size / 2)
        .into_styled(fill)
        .draw(target)?;
    Rectangle::new(
        top_left + Point::new(s / 6, s / 2),
        Size::new(size * 2 / 3, size / 4),
    )
    .into_styled(fill)
    .draw(target)?;
    Ok(())
}

/// Lightning bolt from two joined triangles.
fn draw_bolt<D>(target: &mut D, top_left: Point, size: u32, color: Rgb888) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let s = size as i32;
    let fill = PrimitiveStyle::with_fill(color);
    Triangle::new(
        top_left + Point::new(s / 2, 0),
        top_left + Point::new(s / 5, s * 3 / 5),
        top_left + Point::new(s / 2, s * 2 / 5),
    )
    .into_styled(fill)
    .draw(target)?;
    Triangle::new(
        top_left + Point::new(s / 2, s * 2 / 5),
        top_left + Point::new(s * 4 / 5, s * 2 / 5),
        top_left + Point::new(s * 2 / 5, s),
    )
    .into_styled(fill)
    .draw(target)?;
    Ok(())
}
