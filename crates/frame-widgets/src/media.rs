//! Media player widget.

use frame_components::prelude::*;

use crate::config::WidgetConfig;
use crate::state::WidgetState;

/// States in which the player face shows the idle glyph.
const IDLE_STATES: &[&str] = &["off", "unavailable", "unknown", "idle"];

/// Shows what the configured media player is doing.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaWidget {
    config: WidgetConfig,
    show_artist: bool,
    show_album: bool,
    show_progress: bool,
}

impl MediaWidget {
    /// Build from configuration (`show_artist`, `show_album`,
    /// `show_progress` options).
    pub fn new(config: WidgetConfig) -> Self {
        let show_artist = config.opt_bool("show_artist", true);
        let show_album = config.opt_bool("show_album", false);
        let show_progress = config.opt_bool("show_progress", true);
        Self {
            config,
            show_artist,
            show_album,
            show_progress,
        }
    }

    /// The configured player entity id, when set.
    pub fn entities(&self) -> Vec<String> {
        self.config.entity_id.iter().cloned().collect()
    }

    /// Build the media tree: idle face for off/unavailable/unknown/idle,
    /// now-playing for everything else.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let entity = state.entity.as_ref();

        let Some(entity) = entity else {
            return MediaIdle.into();
        };
        if IDLE_STATES.contains(&entity.state.as_str()) {
            return MediaIdle.into();
        }

        let mut display = NowPlaying::new(
            entity.get_str("media_title").unwrap_or("Unknown"),
        );
        display.artist = entity.get_str("media_artist").unwrap_or("").to_string();
        display.album = entity.get_str("media_album_name").unwrap_or("").to_string();
        display.position = entity.get_f64("media_position").unwrap_or(0.0);
        display.duration = entity.get_f64("media_duration").unwrap_or(0.0);
        display.color = self.config.color.unwrap_or(frame_system::color::CYAN);
        display.show_artist = self.show_artist;
        display.show_album = self.show_album;
        display.show_progress = self.show_progress;
        display.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::state::EntityState;
    use embedded_graphics::prelude::{Point, Size};
    use embedded_graphics::primitives::Rectangle;
    use frame_surface::Canvas;

    fn render(widget: &MediaWidget, state: &WidgetState) -> Component {
        let mut canvas = Canvas::new(Size::new(240, 240)).unwrap();
        let ctx = RenderContext::new(
            &mut canvas,
            Rectangle::new(Point::zero(), Size::new(224, 108)),
            Theme::classic(),
        );
        widget.render(&ctx, state)
    }

    fn widget() -> MediaWidget {
        MediaWidget::new(WidgetConfig::new("media", 0).entity("media_player.living"))
    }

    #[test]
    fn idle_states_show_idle_face() {
        for state_str in ["off", "unavailable", "unknown", "idle"] {
            let state = WidgetState::new()
                .with_entity(EntityState::new("media_player.living", state_str));
            assert!(
                matches!(render(&widget(), &state), Component::MediaIdle(_)),
                "{state_str} should be idle"
            );
        }
    }

    #[test]
    fn missing_entity_is_idle() {
        assert!(matches!(
            render(&widget(), &WidgetState::new()),
            Component::MediaIdle(_)
        ));
    }

    #[test]
    fn playing_shows_track_info() {
        let state = WidgetState::new().with_entity(
            EntityState::new("media_player.living", "playing")
                .attr("media_title", "Sample Track")
                .attr("media_artist", "Sample Artist")
                .attr("media_position", 120)
                .attr("media_duration", 300),
        );
        let Component::NowPlaying(display) = render(&widget(), &state) else {
            panic!("expected now playing");
        };
        assert_eq!(display.title, "Sample Track");
        assert_eq!(display.artist, "Sample Artist");
        assert!((display.position - 120.0).abs() < f64::EPSILON);
        assert!((display.duration - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn paused_still_counts_as_playing_face() {
        let state = WidgetState::new().with_entity(
            EntityState::new("media_player.living", "paused").attr("media_title", "T"),
        );
        assert!(matches!(
            render(&widget(), &state),
            Component::NowPlaying(_)
        ));
    }
}
