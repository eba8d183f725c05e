//! Mid-level drawing primitives shared by the component tree.
//!
//! All functions take absolute coordinates; the render context translates
//! widget-local rectangles before calling in here.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Arc, Circle, Ellipse, Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle,
    RoundedRectangle,
};

/// Fill percentage clamped to the drawable range.
fn clamp_percent(percent: f32) -> f32 {
    if percent.is_nan() {
        0.0
    } else {
        percent.clamp(0.0, 100.0)
    }
}

/// Horizontal progress bar: background track plus a filled portion.
pub fn draw_bar<D>(
    target: &mut D,
    rect: Rectangle,
    percent: f32,
    color: Rgb888,
    background: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if rect.size.width == 0 || rect.size.height == 0 {
        return Ok(());
    }
    rect.into_styled(PrimitiveStyle::with_fill(background))
        .draw(target)?;

    let fill_width = (rect.size.width as f32 * clamp_percent(percent) / 100.0) as u32;
    if fill_width > 0 {
        Rectangle::new(rect.top_left, Size::new(fill_width, rect.size.height))
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;
    }
    Ok(())
}

/// Full-circle ring gauge filling clockwise from twelve o'clock.
pub fn draw_ring_gauge<D>(
    target: &mut D,
    center: Point,
    radius: u32,
    percent: f32,
    color: Rgb888,
    background: Rgb888,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    if radius == 0 || width == 0 {
        return Ok(());
    }
    let diameter = radius * 2;
    let stroke = |c| {
        PrimitiveStyleBuilder::new()
            .stroke_color(c)
            .stroke_width(width)
            .build()
    };

    Circle::with_center(center, diameter)
        .into_styled(stroke(background))
        .draw(target)?;

    let sweep = 360.0 * clamp_percent(percent) / 100.0;
    if sweep > 0.0 {
        Arc::with_center(
            center,
            diameter,
            Angle::from_degrees(-90.0),
            Angle::from_degrees(sweep),
        )
        .into_styled(stroke(color))
        .draw(target)?;
    }
    Ok(())
}

/// 270° arc gauge, opening at the bottom like an analog meter.
pub fn draw_arc_gauge<D>(
    target: &mut D,
    rect: Rectangle,
    percent: f32,
    color: Rgb888,
    background: Rgb888,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let size = rect.size.width.min(rect.size.height);
    if size <= width || width == 0 {
        return Ok(());
    }
    let center = rect.center();
    let diameter = size - width;
    let stroke = |c| {
        PrimitiveStyleBuilder::new()
            .stroke_color(c)
            .stroke_width(width)
            .build()
    };

    Arc::with_center(
        center,
        diameter,
        Angle::from_degrees(135.0),
        Angle::from_degrees(270.0),
    )
    .into_styled(stroke(background))
    .draw(target)?;

    let sweep = 270.0 * clamp_percent(percent) / 100.0;
    if sweep > 0.0 {
        Arc::with_center(
            center,
            diameter,
            Angle::from_degrees(135.0),
            Angle::from_degrees(sweep),
        )
        .into_styled(stroke(color))
        .draw(target)?;
    }
    Ok(())
}

/// Map a data series onto evenly spaced points inside `rect`.
///
/// Flat series sit on the vertical midline rather than collapsing to an
/// edge.
fn series_points(rect: Rectangle, data: &[f64]) -> Vec<Point> {
    let n = data.len();
    if n < 2 || rect.size.width == 0 || rect.size.height == 0 {
        return Vec::new();
    }
    let min = data.iter().copied().fold(f64::INFINITY, f64::min);
    let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let h = (rect.size.height - 1) as f64;
    let step = rect.size.width as f64 / (n - 1) as f64;

    data.iter()
        .enumerate()
        .map(|(i, v)| {
            let norm = if span > 0.0 { (v - min) / span } else { 0.5 };
            let x = rect.top_left.x + (i as f64 * step) as i32;
            let y = rect.top_left.y + (h - norm * h) as i32;
            Point::new(x.min(rect.top_left.x + rect.size.width as i32 - 1), y)
        })
        .collect()
}

/// Sparkline chart; `fill` shades the area under the line with a dimmed
/// copy of the line color.
pub fn draw_sparkline<D>(
    target: &mut D,
    rect: Rectangle,
    data: &[f64],
    color: Rgb888,
    fill: bool,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let points = series_points(rect, data);
    if points.len() < 2 {
        return Ok(());
    }

    if fill {
        let fill_color = crate::color::dim(color, 0.7);
        let bottom = rect.top_left.y + rect.size.height as i32 - 1;
        for pair in points.windows(2) {
            // One vertical line per column between the two x positions
            for x in pair[0].x..=pair[1].x {
                let range = (pair[1].x - pair[0].x).max(1);
                let t = f64::from(x - pair[0].x) / f64::from(range);
                let y = pair[0].y + ((f64::from(pair[1].y - pair[0].y)) * t) as i32;
                Line::new(Point::new(x, y), Point::new(x, bottom))
                    .into_styled(PrimitiveStyle::with_stroke(fill_color, 1))
                    .draw(target)?;
            }
        }
    }

    for pair in points.windows(2) {
        Line::new(pair[0], pair[1])
            .into_styled(PrimitiveStyle::with_stroke(color, 2))
            .draw(target)?;
    }
    Ok(())
}

/// Discrete on/off timeline for binary history series.
///
/// "On" samples render as full-height segments, "off" samples as a thin
/// baseline strip.
pub fn draw_timeline_bar<D>(
    target: &mut D,
    rect: Rectangle,
    data: &[f64],
    on_color: Rgb888,
    off_color: Rgb888,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let n = data.len() as u32;
    if n == 0 || rect.size.width == 0 || rect.size.height == 0 {
        return Ok(());
    }
    let seg_width = (rect.size.width / n).max(1);
    let off_height = (rect.size.height / 5).max(1);
    let bottom = rect.top_left.y + rect.size.height as i32;

    for (i, sample) in data.iter().enumerate() {
        let x = rect.top_left.x + (i as u32 * seg_width) as i32;
        if x >= rect.top_left.x + rect.size.width as i32 {
            break;
        }
        let on = *sample >= 0.5;
        let (height, color) = if on {
            (rect.size.height, on_color)
        } else {
            (off_height, off_color)
        };
        Rectangle::new(
            Point::new(x, bottom - height as i32),
            Size::new(seg_width, height),
        )
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(target)?;
    }
    Ok(())
}

/// Card background with rounded corners and an optional border.
pub fn draw_panel<D>(
    target: &mut D,
    rect: Rectangle,
    background: Rgb888,
    border: Option<(Rgb888, u32)>,
    radius: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let rounded = RoundedRectangle::with_equal_corners(rect, Size::new(radius, radius));
    rounded
        .into_styled(PrimitiveStyle::with_fill(background))
        .draw(target)?;

    if let Some((color, width)) = border {
        if width > 0 {
            rounded
                .into_styled(
                    PrimitiveStyleBuilder::new()
                        .stroke_color(color)
                        .stroke_width(width)
                        .build(),
                )
                .draw(target)?;
        }
    }
    Ok(())
}

/// Filled or outlined ellipse within a bounding rectangle.
pub fn draw_ellipse<D>(
    target: &mut D,
    rect: Rectangle,
    fill: Option<Rgb888>,
    outline: Option<(Rgb888, u32)>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let ellipse = Ellipse::new(rect.top_left, rect.size);
    if let Some(color) = fill {
        ellipse
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(target)?;
    }
    if let Some((color, width)) = outline {
        ellipse
            .into_styled(
                PrimitiveStyleBuilder::new()
                    .stroke_color(color)
                    .stroke_width(width)
                    .build(),
            )
            .draw(target)?;
    }
    Ok(())
}

/// Polyline through `points`.
pub fn draw_polyline<D>(
    target: &mut D,
    points: &[Point],
    color: Rgb888,
    width: u32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    for pair in points.windows(2) {
        Line::new(pair[0], pair[1])
            .into_styled(PrimitiveStyle::with_stroke(color, width))
            .draw(target)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use frame_surface::Canvas;

    const CYAN: Rgb888 = Rgb888::new(0, 255, 255);
    const GRAY: Rgb888 = Rgb888::new(60, 60, 60);

    fn count(canvas: &Canvas, color: Rgb888) -> usize {
        canvas.pixels().iter().filter(|px| **px == color).count()
    }

    #[test]
    fn bar_fill_matches_percent() {
        let mut canvas = Canvas::new(Size::new(100, 10)).unwrap();
        let rect = Rectangle::new(Point::zero(), Size::new(100, 10));
        draw_bar(&mut canvas, rect, 50.0, CYAN, GRAY).unwrap();

        assert_eq!(count(&canvas, CYAN), 50 * 10);
        assert_eq!(count(&canvas, GRAY), 50 * 10);
    }

    #[test]
    fn bar_percent_out_of_range_is_clamped() {
        let mut canvas = Canvas::new(Size::new(100, 4)).unwrap();
        let rect = Rectangle::new(Point::zero(), Size::new(100, 4));
        draw_bar(&mut canvas, rect, 150.0, CYAN, GRAY).unwrap();
        assert_eq!(count(&canvas, CYAN), 400);

        let mut canvas = Canvas::new(Size::new(100, 4)).unwrap();
        draw_bar(&mut canvas, rect, -20.0, CYAN, GRAY).unwrap();
        assert_eq!(count(&canvas, CYAN), 0);
    }

    #[test]
    fn ring_draws_background_track() {
        let mut canvas = Canvas::new(Size::new(64, 64)).unwrap();
        draw_ring_gauge(&mut canvas, Point::new(32, 32), 20, 0.0, CYAN, GRAY, 4).unwrap();
        assert!(count(&canvas, GRAY) > 0);
        assert_eq!(count(&canvas, CYAN), 0);
    }

    #[test]
    fn ring_fills_with_percent() {
        let mut canvas = Canvas::new(Size::new(64, 64)).unwrap();
        draw_ring_gauge(&mut canvas, Point::new(32, 32), 20, 75.0, CYAN, GRAY, 4).unwrap();
        assert!(count(&canvas, CYAN) > count(&canvas, GRAY));
    }

    #[test]
    fn arc_gauge_renders_within_rect() {
        let mut canvas = Canvas::new(Size::new(60, 60)).unwrap();
        let rect = Rectangle::new(Point::new(5, 5), Size::new(50, 50));
        draw_arc_gauge(&mut canvas, rect, 40.0, CYAN, GRAY, 6).unwrap();
        assert!(count(&canvas, CYAN) > 0);
        assert!(count(&canvas, GRAY) > 0);
    }

    #[test]
    fn sparkline_needs_two_points() {
        let mut canvas = Canvas::new(Size::new(40, 20)).unwrap();
        let rect = Rectangle::new(Point::zero(), Size::new(40, 20));
        draw_sparkline(&mut canvas, rect, &[1.0], CYAN, false).unwrap();
        assert_eq!(count(&canvas, CYAN), 0);

        draw_sparkline(&mut canvas, rect, &[1.0, 5.0, 2.0], CYAN, false).unwrap();
        assert!(count(&canvas, CYAN) > 0);
    }

    #[test]
    fn flat_series_sits_on_midline() {
        let rect = Rectangle::new(Point::zero(), Size::new(40, 21));
        let points = series_points(rect, &[3.0, 3.0, 3.0]);
        assert!(points.iter().all(|p| p.y == 10));
    }

    #[test]
    fn timeline_on_segments_are_taller() {
        let mut canvas = Canvas::new(Size::new(40, 20)).unwrap();
        let rect = Rectangle::new(Point::zero(), Size::new(40, 20));
        draw_timeline_bar(&mut canvas, rect, &[1.0, 0.0], CYAN, GRAY).unwrap();
        assert!(count(&canvas, CYAN) > count(&canvas, GRAY));
    }

    #[test]
    fn panel_with_border() {
        let mut canvas = Canvas::new(Size::new(40, 40)).unwrap();
        let rect = Rectangle::new(Point::new(2, 2), Size::new(30, 30));
        draw_panel(&mut canvas, rect, GRAY, Some((CYAN, 1)), 4).unwrap();
        assert!(count(&canvas, GRAY) > 0);
        assert!(count(&canvas, CYAN) > 0);
    }
}
