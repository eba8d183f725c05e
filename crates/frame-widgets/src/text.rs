//! Static/dynamic text widget.

use frame_components::prelude::*;

use crate::config::WidgetConfig;
use crate::state::WidgetState;

/// Shows configured text, or a dynamic entity state.
#[derive(Debug, Clone, PartialEq)]
pub struct TextWidget {
    config: WidgetConfig,
    text: String,
    size: FontClass,
    align: HAlign,
    dynamic_entity_id: Option<String>,
}

impl TextWidget {
    /// Build from configuration (`text`, `size`, `align`, `entity_id`
    /// options).
    pub fn new(config: WidgetConfig) -> Self {
        let text = config.opt_str("text").unwrap_or_default().to_string();
        let size = FontClass::from_name(config.opt_str("size").unwrap_or("regular"));
        let align = match config.opt_str("align") {
            Some("left") => HAlign::Start,
            Some("right") => HAlign::End,
            _ => HAlign::Center,
        };
        let dynamic_entity_id = config.opt_str("entity_id").map(str::to_string);
        Self {
            config,
            text,
            size,
            align,
            dynamic_entity_id,
        }
    }

    /// The configured entity id plus the dynamic options id, when set.
    pub fn entities(&self) -> Vec<String> {
        let mut ids = Vec::new();
        if let Some(id) = &self.config.entity_id {
            ids.push(id.clone());
        }
        if let Some(id) = &self.dynamic_entity_id {
            if Some(id) != self.config.entity_id.as_ref() {
                ids.push(id.clone());
            }
        }
        ids
    }

    fn resolve_text(&self, state: &WidgetState) -> String {
        if let Some(entity) = &state.entity {
            return entity.state.clone();
        }
        if let Some(id) = &self.dynamic_entity_id {
            if let Some(entity) = state.get_entity(id) {
                return entity.state.clone();
            }
        }
        self.text.clone()
    }

    /// Build the text tree.
    pub fn render<D: Surface>(&self, _ctx: &RenderContext<'_, D>, state: &WidgetState) -> Component {
        let text = self.resolve_text(state);
        let color = self.config.color.unwrap_or(frame_system::color::WHITE);

        let mut children: Vec<Component> = Vec::new();
        if let Some(label) = &self.config.label {
            children.push(
                Text::new(label.to_uppercase())
                    .font(FontClass::Small)
                    .color(frame_system::color::GRAY)
                    .into(),
            );
        }
        children.push(
            Text::new(text)
                .font(self.size)
                .color(color)
                .align(self.align)
                .into(),
        );

        Column::new(children)
            .align(Align::Center)
            .justify(Justify::Center)
            .gap(4)
            .into()
    }
}
