//! Media player faces: now-playing and idle.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::component::Component;
use crate::containers::{Align, Column, Justify, Row};
use crate::primitives::{Bar, HAlign, Icon, Spacer, Text};
use crate::textutil::{truncate, TruncateStyle};

/// Seconds as M:SS, or H:MM:SS once the value reaches an hour.
pub fn format_time(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    if total >= 3600 {
        let hours = total / 3600;
        let minutes = (total % 3600) / 60;
        let secs = total % 60;
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        let minutes = total / 60;
        let secs = total % 60;
        format!("{minutes}:{secs:02}")
    }
}

/// Track info with an optional progress bar.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    /// Track title.
    pub title: String,
    /// Artist line; empty hides it.
    pub artist: String,
    /// Album line; empty hides it.
    pub album: String,
    /// Playback position in seconds.
    pub position: f64,
    /// Track duration in seconds; 0 hides the progress section.
    pub duration: f64,
    /// Progress bar color.
    pub color: Rgb888,
    /// Show the artist line.
    pub show_artist: bool,
    /// Show the album line.
    pub show_album: bool,
    /// Show the progress bar and time labels.
    pub show_progress: bool,
}

impl NowPlaying {
    /// New now-playing face for a track title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: String::new(),
            album: String::new(),
            position: 0.0,
            duration: 0.0,
            color: frame_system::color::CYAN,
            show_artist: true,
            show_album: false,
            show_progress: true,
        }
    }

    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        max
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let width = bounds.size.width;
        let height = bounds.size.height;
        let padding = (width as f32 * 0.05) as u32;

        let budget = (width.saturating_sub(padding * 2) / 8).max(4) as usize;
        let title = truncate(&self.title, budget, TruncateStyle::End);
        let artist = truncate(&self.artist, budget, TruncateStyle::End);
        let album = truncate(&self.album, budget, TruncateStyle::End);

        let mut children: Vec<Component> = vec![
            Text::new("NOW PLAYING")
                .font(FontClass::Small)
                .color(frame_system::color::GRAY)
                .into(),
            Spacer::min((height as f32 * 0.03) as u32).into(),
            Text::new(title).color(frame_system::color::WHITE).into(),
        ];

        if self.show_artist && !artist.is_empty() {
            children.push(Spacer::min((height as f32 * 0.02) as u32).into());
            children.push(
                Text::new(artist)
                    .font(FontClass::Small)
                    .color(frame_system::color::GRAY)
                    .into(),
            );
        }
        if self.show_album && !album.is_empty() {
            children.push(Spacer::min((height as f32 * 0.02) as u32).into());
            children.push(
                Text::new(album)
                    .font(FontClass::Small)
                    .color(frame_system::color::GRAY)
                    .into(),
            );
        }

        children.push(Spacer::new().into());

        if self.show_progress && self.duration > 0.0 {
            let progress = ((self.position / self.duration) * 100.0).min(100.0) as f32;
            children.push(
                Bar::new(progress)
                    .color(self.color)
                    .height(((height as f32 * 0.05) as u32).max(4))
                    .into(),
            );
            children.push(Spacer::min((height as f32 * 0.02) as u32).into());
            children.push(
                Row::new(vec![
                    Text::new(format_time(self.position))
                        .font(FontClass::Small)
                        .color(frame_system::color::GRAY)
                        .align(HAlign::Start)
                        .into(),
                    Spacer::new().into(),
                    Text::new(format_time(self.duration))
                        .font(FontClass::Small)
                        .color(frame_system::color::GRAY)
                        .align(HAlign::End)
                        .into(),
                ])
                .into(),
            );
        }

        Column::new(children)
            .padding(padding)
            .align(Align::Center)
            .render(ctx, bounds)
    }
}

/// Paused/idle face: pause glyph over a "PAUSED" caption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaIdle;

impl MediaIdle {
    pub(crate) fn measure<D: Surface>(&self, _ctx: &RenderContext<'_, D>, max: Size) -> Size {
        max
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let icon_size = ((bounds.size.height as f32 * 0.25) as u32).max(24);
        Column::new(vec![
            Icon::new("pause")
                .size(icon_size)
                .color(frame_system::color::GRAY)
                .into(),
            Spacer::min((bounds.size.height as f32 * 0.08) as u32).into(),
            Text::new("PAUSED")
                .font(FontClass::Small)
                .color(frame_system::color::GRAY)
                .into(),
        ])
        .align(Align::Center)
        .justify(Justify::Center)
        .render(ctx, bounds)
    }
}
