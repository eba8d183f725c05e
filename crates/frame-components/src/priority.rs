//! Priority-based responsive hiding.
//!
//! Children wrapped in [`Prioritized`] carry a rank; [`PriorityRow`] and
//! [`PriorityColumn`] admit them rank-first while budget remains. Rank 1
//! is critical and always shown, even when it overflows the nominal
//! budget. Dropped children disappear from both measurement and
//! rendering for the pass, which is the engine's "auto-hide low-priority
//! elements when space is tight" policy.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::component::Component;
use crate::containers::{arrange, measure_axis, Align, Justify, MainAxis};

/// Rank that is always admitted regardless of fit.
pub const PRIORITY_CRITICAL: u8 = 1;

/// A child plus its visibility metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Prioritized {
    /// The wrapped component.
    pub child: Box<Component>,
    /// Display priority; lower ranks are admitted first and rank 1 is
    /// always shown.
    pub priority: u8,
    /// Minimum width required to show this child at all.
    pub min_width: u32,
    /// Minimum height required to show this child at all.
    pub min_height: u32,
}

impl Prioritized {
    /// Wrap `child` at the given priority.
    pub fn new(child: Component, priority: u8) -> Self {
        Self {
            child: Box::new(child),
            priority,
            min_width: 0,
            min_height: 0,
        }
    }

    /// Require a minimum width for admission.
    #[must_use]
    pub fn min_width(mut self, min_width: u32) -> Self {
        self.min_width = min_width;
        self
    }

    /// Require a minimum height for admission.
    #[must_use]
    pub fn min_height(mut self, min_height: u32) -> Self {
        self.min_height = min_height;
        self
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        self.child.measure(ctx, max)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        self.child.render(ctx, bounds)
    }
}

/// Greedy rank-first admission along one axis.
///
/// Returns references to the admitted children in rank order. The sort
/// is stable, so equal ranks keep their declaration order and the result
/// is deterministic for identical inputs.
fn admit<'c, D: Surface>(
    ctx: &RenderContext<'_, D>,
    children: &'c [Prioritized],
    axis: MainAxis,
    available_main: u32,
    cross: u32,
    gap: u32,
) -> Vec<&'c Prioritized> {
    let mut order: Vec<&Prioritized> = children.iter().collect();
    order.sort_by_key(|c| c.priority);

    let mut budget = available_main as i64;
    let mut gap_needed = 0u32;
    let mut visible = Vec::new();

    for child in order {
        let max = match axis {
            MainAxis::Horizontal => Size::new(budget.max(0) as u32, cross),
            MainAxis::Vertical => Size::new(cross, budget.max(0) as u32),
        };
        let size = child.measure(ctx, max);
        let needed = match axis {
            MainAxis::Horizontal => size.width,
            MainAxis::Vertical => size.height,
        };

        let fits_space = i64::from(needed + gap_needed) <= budget;
        let fits_min = match axis {
            MainAxis::Horizontal => needed >= child.min_width && cross >= child.min_height,
            MainAxis::Vertical => needed >= child.min_height && cross >= child.min_width,
        };

        if (fits_space && fits_min) || child.priority == PRIORITY_CRITICAL {
            visible.push(child);
            budget -= i64::from(needed + gap);
            gap_needed = gap;
        }
    }
    visible
}

/// Row that hides low-priority children when width runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityRow {
    /// Prioritized children.
    pub children: Vec<Prioritized>,
    /// Pixels between admitted children.
    pub gap: u32,
    /// Cross-axis alignment of admitted children.
    pub align: Align,
    /// Main-axis distribution of admitted children.
    pub justify: Justify,
    /// Uniform inner padding.
    pub padding: u32,
}

impl PriorityRow {
    /// New priority row over `children`.
    pub fn new(children: Vec<Prioritized>) -> Self {
        Self {
            children,
            gap: 4,
            align: Align::Center,
            justify: Justify::SpaceBetween,
            padding: 0,
        }
    }

    /// Set the inter-child gap.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    fn visible<'c, D: Surface>(
        &'c self,
        ctx: &RenderContext<'_, D>,
        size: Size,
    ) -> Vec<&'c Prioritized> {
        admit(
            ctx,
            &self.children,
            MainAxis::Horizontal,
            size.width.saturating_sub(self.padding * 2),
            size.height.saturating_sub(self.padding * 2),
            self.gap,
        )
    }

    /// The children that survive admission at the given size, in rank
    /// order. Exposed for tests and introspection.
    pub fn visible_children<D: Surface>(
        &self,
        ctx: &RenderContext<'_, D>,
        size: Size,
    ) -> Vec<&Component> {
        self.visible(ctx, size)
            .into_iter()
            .map(|p| p.child.as_ref())
            .collect()
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let visible = self.visible(ctx, max);
        let refs: Vec<&Component> = visible.iter().map(|p| p.child.as_ref()).collect();
        measure_axis(ctx, MainAxis::Horizontal, max, self.gap, self.padding, &refs)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let visible = self.visible(ctx, bounds.size);
        if visible.is_empty() {
            return Ok(());
        }
        let refs: Vec<&Component> = visible.iter().map(|p| p.child.as_ref()).collect();
        let area = Rectangle::new(
            bounds.top_left + Point::new(self.padding as i32, self.padding as i32),
            Size::new(
                bounds.size.width.saturating_sub(self.padding * 2),
                bounds.size.height.saturating_sub(self.padding * 2),
            ),
        );
        let rects = arrange(
            ctx,
            MainAxis::Horizontal,
            area,
            self.gap,
            self.justify,
            self.align,
            &refs,
        );
        for (child, rect) in refs.iter().zip(rects) {
            child.render(ctx, rect)?;
        }
        Ok(())
    }
}

/// Column that hides low-priority children when height runs out.
#[derive(Debug, Clone, PartialEq)]
pub struct PriorityColumn {
    /// Prioritized children.
    pub children: Vec<Prioritized>,
    /// Pixels between admitted children.
    pub gap: u32,
    /// Cross-axis alignment of admitted children.
    pub align: Align,
    /// Uniform inner padding.
    pub padding: u32,
}

impl PriorityColumn {
    /// New priority column over `children`.
    pub fn new(children: Vec<Prioritized>) -> Self {
        Self {
            children,
            gap: 4,
            align: Align::Center,
            padding: 0,
        }
    }

    /// Set the inter-child gap.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    fn visible<'c, D: Surface>(
        &'c self,
        ctx: &RenderContext<'_, D>,
        size: Size,
    ) -> Vec<&'c Prioritized> {
        admit(
            ctx,
            &self.children,
            MainAxis::Vertical,
            size.height.saturating_sub(self.padding * 2),
            size.width.saturating_sub(self.padding * 2),
            self.gap,
        )
    }

    /// The children that survive admission at the given size, in rank
    /// order. Exposed for tests and introspection.
    pub fn visible_children<D: Surface>(
        &self,
        ctx: &RenderContext<'_, D>,
        size: Size,
    ) -> Vec<&Component> {
        self.visible(ctx, size)
            .into_iter()
            .map(|p| p.child.as_ref())
            .collect()
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let visible = self.visible(ctx, max);
        let refs: Vec<&Component> = visible.iter().map(|p| p.child.as_ref()).collect();
        measure_axis(ctx, MainAxis::Vertical, max, self.gap, self.padding, &refs)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let visible = self.visible(ctx, bounds.size);
        if visible.is_empty() {
            return Ok(());
        }
        let refs: Vec<&Component> = visible.iter().map(|p| p.child.as_ref()).collect();
        let area = Rectangle::new(
            bounds.top_left + Point::new(self.padding as i32, self.padding as i32),
            Size::new(
                bounds.size.width.saturating_sub(self.padding * 2),
                bounds.size.height.saturating_sub(self.padding * 2),
            ),
        );
        let rects = arrange(
            ctx,
            MainAxis::Vertical,
            area,
            self.gap,
            Justify::Center,
            self.align,
            &refs,
        );
        for (child, rect) in refs.iter().zip(rects) {
            child.render(ctx, rect)?;
        }
        Ok(())
    }
}
