//! The layout facade: slots + widget assignment + whole-screen render.

use std::collections::HashMap;

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::{RenderContext, Surface, Theme};
use frame_widgets::{Widget, WidgetState};

use crate::scheme::{compute_slots, scheme_from_name, LayoutScheme};
use crate::slot::Slot;

/// Error raised when a layout cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// Zero-sized target dimensions.
    ///
    /// These indicate a configuration bug upstream and fail loudly
    /// instead of silently producing degenerate geometry.
    #[error("layout dimensions must be nonzero, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
}

/// A screen partition with at most one widget per slot.
///
/// Geometry parameters and target dimensions fully determine the slot
/// rectangles; widget assignment is independent and survives a
/// [`resize`](Layout::resize).
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    scheme: LayoutScheme,
    padding: u32,
    gap: u32,
    width: u32,
    height: u32,
    slots: Vec<Slot>,
}

impl Layout {
    /// New layout with the default 8 px padding and gap.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimensions`] for zero dimensions.
    pub fn new(scheme: LayoutScheme, size: Size) -> Result<Self, LayoutError> {
        Self::with_spacing(scheme, size, 8, 8)
    }

    /// New layout with explicit padding and gap.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimensions`] for zero dimensions.
    pub fn with_spacing(
        scheme: LayoutScheme,
        size: Size,
        padding: u32,
        gap: u32,
    ) -> Result<Self, LayoutError> {
        if size.width == 0 || size.height == 0 {
            return Err(LayoutError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        let slots = compute_slots(scheme, size.width, size.height, padding, gap)
            .into_iter()
            .enumerate()
            .map(|(index, rect)| Slot::new(index, rect))
            .collect();
        Ok(Self {
            scheme,
            padding,
            gap,
            width: size.width,
            height: size.height,
            slots,
        })
    }

    /// New layout from a registered scheme name (unknown names fall back
    /// to the 2×2 grid).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimensions`] for zero dimensions.
    pub fn from_name(name: &str, size: Size) -> Result<Self, LayoutError> {
        Self::new(scheme_from_name(name), size)
    }

    /// The partition scheme.
    pub fn scheme(&self) -> LayoutScheme {
        self.scheme
    }

    /// Target dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Number of slots in this layout.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Slot by index; `None` when out of range.
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// All slots in index order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Assign a widget to a slot. Out-of-range indices are silently
    /// dropped (logged at debug level).
    pub fn set_widget(&mut self, index: usize, widget: Widget) {
        match self.slots.get_mut(index) {
            Some(slot) => slot.widget = Some(widget),
            None => {
                tracing::debug!(
                    index,
                    slots = self.slots.len(),
                    "widget assigned to out-of-range slot, ignoring"
                );
            }
        }
    }

    /// Recompute the slot geometry for new target dimensions, keeping
    /// widget assignments by index.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidDimensions`] for zero dimensions;
    /// the layout is left unchanged in that case.
    pub fn resize(&mut self, size: Size) -> Result<(), LayoutError> {
        if size.width == 0 || size.height == 0 {
            return Err(LayoutError::InvalidDimensions {
                width: size.width,
                height: size.height,
            });
        }
        let rects = compute_slots(self.scheme, size.width, size.height, self.padding, self.gap);
        let mut widgets: Vec<Option<Widget>> =
            self.slots.iter_mut().map(|s| s.widget.take()).collect();
        self.slots = rects
            .into_iter()
            .enumerate()
            .map(|(index, rect)| {
                let mut slot = Slot::new(index, rect);
                if let Some(widget) = widgets.get_mut(index).and_then(Option::take) {
                    slot.widget = Some(widget);
                }
                slot
            })
            .collect();
        self.width = size.width;
        self.height = size.height;
        Ok(())
    }

    /// Every entity id any assigned widget depends on.
    pub fn all_entities(&self) -> Vec<String> {
        let mut ids = Vec::new();
        for slot in &self.slots {
            if let Some(widget) = &slot.widget {
                for id in widget.entities() {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
            }
        }
        ids
    }

    /// Render every assigned slot onto the target.
    ///
    /// Each slot gets a fresh [`RenderContext`] scoped to its rectangle;
    /// the widget's tree is measured and rendered within those bounds.
    /// Unassigned slots are skipped and stay blank. `states` maps slot
    /// index to the widget's state bundle; missing entries render with
    /// an empty state (placeholders).
    pub fn render<D: Surface>(
        &self,
        target: &mut D,
        states: &HashMap<usize, WidgetState>,
        theme: &Theme,
    ) -> Result<(), D::Error> {
        let empty = WidgetState::new();
        for slot in &self.slots {
            let Some(widget) = &slot.widget else {
                continue;
            };
            let state = states.get(&slot.index).unwrap_or(&empty);

            let mut ctx = RenderContext::new(target, slot.rect, theme.clone());
            let tree = widget.render(&ctx, state);
            let local = Rectangle::new(Point::zero(), slot.rect.size);
            let _ = tree.measure(&ctx, slot.rect.size);
            tree.render(&mut ctx, local)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use frame_widgets::WidgetConfig;

    fn grid_2x2() -> Layout {
        Layout::new(LayoutScheme::Grid { rows: 2, cols: 2 }, Size::new(240, 240)).unwrap()
    }

    #[test]
    fn zero_dimensions_fail_construction() {
        assert!(matches!(
            Layout::new(LayoutScheme::Fullscreen, Size::new(0, 240)),
            Err(LayoutError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Layout::new(LayoutScheme::Fullscreen, Size::new(240, 0)),
            Err(LayoutError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn slot_lookup() {
        let layout = grid_2x2();
        assert_eq!(layout.slot_count(), 4);
        assert!(layout.slot(0).is_some());
        assert!(layout.slot(4).is_none());
    }

    #[test]
    fn out_of_range_assignment_is_dropped() {
        let mut layout = grid_2x2();
        layout.set_widget(99, Widget::from_config(WidgetConfig::new("clock", 99)));
        assert!(layout.slots().iter().all(|s| s.widget.is_none()));
    }

    #[test]
    fn assignment_survives_resize() {
        let mut layout = grid_2x2();
        layout.set_widget(1, Widget::from_config(WidgetConfig::new("clock", 1)));

        layout.resize(Size::new(480, 480)).unwrap();
        assert_eq!(layout.slot_count(), 4);
        assert!(layout.slot(1).unwrap().widget.is_some());
        assert!(layout.slot(0).unwrap().widget.is_none());
        // Geometry actually scaled
        assert!(layout.slot(0).unwrap().rect.size.width > 200);
    }

    #[test]
    fn resize_rejects_zero() {
        let mut layout = grid_2x2();
        assert!(layout.resize(Size::new(0, 0)).is_err());
        assert_eq!(layout.size(), Size::new(240, 240));
    }

    #[test]
    fn all_entities_deduplicates() {
        let mut layout = grid_2x2();
        layout.set_widget(
            0,
            Widget::from_config(WidgetConfig::new("entity", 0).entity("sensor.a")),
        );
        layout.set_widget(
            1,
            Widget::from_config(WidgetConfig::new("gauge", 1).entity("sensor.a")),
        );
        layout.set_widget(
            2,
            Widget::from_config(WidgetConfig::new("entity", 2).entity("sensor.b")),
        );
        assert_eq!(layout.all_entities(), vec!["sensor.a", "sensor.b"]);
    }

    #[test]
    fn from_name_falls_back_to_grid() {
        let layout = Layout::from_name("not_a_layout", Size::new(240, 240)).unwrap();
        assert_eq!(layout.scheme(), LayoutScheme::Grid { rows: 2, cols: 2 });
    }
}
