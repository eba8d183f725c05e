//! Key/value attribute list face.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::component::Component;
use crate::containers::{Align, Column, Justify, Row};
use crate::primitives::{HAlign, Spacer, Text};
use crate::textutil::{estimate_max_chars, truncate, TruncateStyle};

/// One attribute row: label on the left, value on the right.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeItem {
    /// Row label.
    pub label: String,
    /// Formatted value text.
    pub value: String,
    /// Value color.
    pub color: Rgb888,
}

/// Rows of "Label … Value" pairs with an optional title.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AttributeListDisplay {
    /// Rows in display order.
    pub items: Vec<AttributeItem>,
    /// Title drawn upper-cased above the rows.
    pub title: Option<String>,
}

impl AttributeListDisplay {
    /// New list over `items`.
    pub fn new(items: Vec<AttributeItem>) -> Self {
        Self { items, title: None }
    }

    /// Attach a title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
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
        let padding = (width as f32 * 0.05) as u32;

        let mut rows: Vec<Component> = Vec::new();
        if let Some(title) = &self.title {
            rows.push(
                Text::new(title.to_uppercase())
                    .font(FontClass::Small)
                    .color(ColorSpec::TextSecondary)
                    .align(HAlign::Start)
                    .into(),
            );
        }

        let budget = estimate_max_chars(width / 2, 7, 10);
        for item in &self.items {
            let label = truncate(&item.label, budget, TruncateStyle::End);
            let value = truncate(&item.value, budget, TruncateStyle::End);
            rows.push(
                Row::new(vec![
                    Text::new(label)
                        .font(FontClass::Small)
                        .color(ColorSpec::TextSecondary)
                        .align(HAlign::Start)
                        .into(),
                    Spacer::new().into(),
                    Text::new(value)
                        .font(FontClass::Small)
                        .bold()
                        .color(item.color)
                        .align(HAlign::End)
                        .into(),
                ])
                .gap(6)
                .align(Align::Center)
                .justify(Justify::Start)
                .into(),
            );
        }

        Column::new(rows)
            .gap(if self.title.is_some() { 4 } else { 2 })
            .padding(padding)
            .align(Align::Stretch)
            .justify(Justify::Start)
            .render(ctx, bounds)
    }
}
