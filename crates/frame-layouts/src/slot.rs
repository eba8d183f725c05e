//! Slots: the rectangular regions widgets render into.

use embedded_graphics::primitives::Rectangle;
use frame_widgets::Widget;

/// One rectangular region of the display, owning at most one widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Stable 0-based index within the layout.
    pub index: usize,
    /// Absolute pixel bounds, always strictly inside the display.
    pub rect: Rectangle,
    /// The assigned widget, if any.
    pub widget: Option<Widget>,
}

impl Slot {
    /// New unassigned slot.
    pub fn new(index: usize, rect: Rectangle) -> Self {
        Self {
            index,
            rect,
            widget: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::*;
    use frame_widgets::WidgetConfig;

    #[test]
    fn new_slot_is_unassigned() {
        let slot = Slot::new(0, Rectangle::new(Point::new(8, 8), Size::new(100, 100)));
        assert_eq!(slot.index, 0);
        assert!(slot.widget.is_none());
    }

    #[test]
    fn slot_holds_widget() {
        let mut slot = Slot::new(1, Rectangle::new(Point::zero(), Size::new(10, 10)));
        slot.widget = Some(Widget::from_config(WidgetConfig::new("clock", 1)));
        assert!(slot.widget.is_some());
    }
}
