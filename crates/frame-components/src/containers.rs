//! Container nodes: the simplified single-level flexbox.
//!
//! Row and Column do one measure pass per child, flex spacer children
//! into leftover main-axis space and distribute the remainder according
//! to the justify mode. There is no wrapping and no intrinsic-size
//! negotiation beyond that single pass.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use frame_system::prelude::*;

use crate::component::Component;

/// Main-axis distribution mode.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Justify {
    /// Pack children at the start.
    #[default]
    Start,
    /// Center the packed children.
    Center,
    /// Pack children at the end.
    End,
    /// Equal spacing between children, none at the edges.
    SpaceBetween,
    /// Equal spacing around children, half-size at the edges.
    SpaceAround,
}

/// Cross-axis alignment mode.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Align {
    /// Align at the cross-axis start.
    Start,
    /// Center on the cross axis.
    #[default]
    Center,
    /// Align at the cross-axis end.
    End,
    /// Stretch to the full cross dimension.
    Stretch,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum MainAxis {
    Horizontal,
    Vertical,
}

impl MainAxis {
    fn main(self, size: Size) -> u32 {
        match self {
            MainAxis::Horizontal => size.width,
            MainAxis::Vertical => size.height,
        }
    }

    fn cross(self, size: Size) -> u32 {
        match self {
            MainAxis::Horizontal => size.height,
            MainAxis::Vertical => size.width,
        }
    }
}

/// Lay the children out inside `area` (local coordinates), returning one
/// rectangle per child in input order. Every rectangle is clipped to
/// `area` so containers can never place a child outside themselves.
pub(crate) fn arrange<D: Surface>(
    ctx: &RenderContext<'_, D>,
    axis: MainAxis,
    area: Rectangle,
    gap: u32,
    justify: Justify,
    align: Align,
    children: &[&Component],
) -> Vec<Rectangle> {
    let n = children.len();
    if n == 0 {
        return Vec::new();
    }
    let inner_main = axis.main(area.size);
    let inner_cross = axis.cross(area.size);

    let sizes: Vec<Size> = children
        .iter()
        .map(|child| child.measure(ctx, area.size))
        .collect();

    let mut main_sizes: Vec<u32> = sizes.iter().map(|s| axis.main(*s)).collect();
    let gaps_total = gap.saturating_mul(n.saturating_sub(1) as u32);

    // Spacer children flex into whatever main-axis budget is left.
    let spacer_indices: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|(_, child)| child.is_spacer())
        .map(|(i, _)| i)
        .collect();
    let used: u32 = main_sizes.iter().sum::<u32>() + gaps_total;
    if !spacer_indices.is_empty() {
        let leftover = inner_main.saturating_sub(used);
        let share = leftover / spacer_indices.len() as u32;
        let mut remainder = leftover % spacer_indices.len() as u32;
        for &i in &spacer_indices {
            let extra = if remainder > 0 {
                remainder -= 1;
                share + 1
            } else {
                share
            };
            main_sizes[i] += extra;
        }
    }

    let total: u32 = main_sizes.iter().sum::<u32>() + gaps_total;
    let remaining = inner_main.saturating_sub(total);

    let (mut cursor, extra_gap) = match justify {
        Justify::Start => (0, 0),
        Justify::Center => (remaining / 2, 0),
        Justify::End => (remaining, 0),
        Justify::SpaceBetween => {
            if n > 1 {
                (0, remaining / (n as u32 - 1))
            } else {
                (0, 0)
            }
        }
        Justify::SpaceAround => {
            let around = remaining / n as u32;
            (around / 2, around)
        }
    };

    let mut rects = Vec::with_capacity(n);
    for (i, size) in sizes.iter().enumerate() {
        let main_size = main_sizes[i];
        let (cross_size, cross_pos) = match align {
            Align::Stretch => (inner_cross, 0),
            Align::Start => (axis.cross(*size).min(inner_cross), 0),
            Align::Center => {
                let c = axis.cross(*size).min(inner_cross);
                (c, ((inner_cross - c) / 2) as i32)
            }
            Align::End => {
                let c = axis.cross(*size).min(inner_cross);
                (c, (inner_cross - c) as i32)
            }
        };

        let rect = match axis {
            MainAxis::Horizontal => Rectangle::new(
                area.top_left + Point::new(cursor as i32, cross_pos),
                Size::new(main_size, cross_size),
            ),
            MainAxis::Vertical => Rectangle::new(
                area.top_left + Point::new(cross_pos, cursor as i32),
                Size::new(cross_size, main_size),
            ),
        };
        rects.push(rect.intersection(&area));
        cursor += main_size + gap + extra_gap;
    }
    rects
}

/// Measure a row/column: children are summed on the main axis and maxed
/// on the cross axis, plus gaps and padding, clamped to the maxima.
pub(crate) fn measure_axis<D: Surface>(
    ctx: &RenderContext<'_, D>,
    axis: MainAxis,
    max: Size,
    gap: u32,
    padding: u32,
    children: &[&Component],
) -> Size {
    let pad2 = padding * 2;
    let inner = Size::new(
        max.width.saturating_sub(if axis == MainAxis::Vertical { pad2 } else { 0 }),
        max.height
            .saturating_sub(if axis == MainAxis::Horizontal { pad2 } else { 0 }),
    );

    let mut total_main = pad2;
    let mut max_cross = 0;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            total_main += gap;
        }
        let size = child.measure(ctx, inner);
        total_main += axis.main(size);
        max_cross = max_cross.max(axis.cross(size));
    }
    let cross_total = max_cross + pad2;

    match axis {
        MainAxis::Horizontal => Size::new(total_main.min(max.width), cross_total.min(max.height)),
        MainAxis::Vertical => Size::new(cross_total.min(max.width), total_main.min(max.height)),
    }
}

fn deflate(bounds: Rectangle, padding: u32) -> Rectangle {
    let pad2 = padding * 2;
    Rectangle::new(
        bounds.top_left + Point::new(padding as i32, padding as i32),
        Size::new(
            bounds.size.width.saturating_sub(pad2),
            bounds.size.height.saturating_sub(pad2),
        ),
    )
}

/// Horizontal layout container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    /// Children in left-to-right order.
    pub children: Vec<Component>,
    /// Pixels between adjacent children.
    pub gap: u32,
    /// Cross-axis (vertical) alignment.
    pub align: Align,
    /// Main-axis (horizontal) distribution.
    pub justify: Justify,
    /// Uniform inner padding.
    pub padding: u32,
}

impl Row {
    /// New row over `children`.
    pub fn new(children: Vec<Component>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Set the inter-child gap.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the main-axis distribution.
    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Set the inner padding.
    #[must_use]
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let visible = visible(&self.children);
        measure_axis(ctx, MainAxis::Horizontal, max, self.gap, self.padding, &visible)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let visible = visible(&self.children);
        if visible.is_empty() {
            return Ok(());
        }
        let area = deflate(bounds, self.padding);
        let rects = arrange(
            ctx,
            MainAxis::Horizontal,
            area,
            self.gap,
            self.justify,
            self.align,
            &visible,
        );
        for (child, rect) in visible.iter().zip(rects) {
            child.render(ctx, rect)?;
        }
        Ok(())
    }
}

/// Vertical layout container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Column {
    /// Children in top-to-bottom order.
    pub children: Vec<Component>,
    /// Pixels between adjacent children.
    pub gap: u32,
    /// Cross-axis (horizontal) alignment.
    pub align: Align,
    /// Main-axis (vertical) distribution.
    pub justify: Justify,
    /// Uniform inner padding.
    pub padding: u32,
}

impl Column {
    /// New column over `children`.
    pub fn new(children: Vec<Component>) -> Self {
        Self {
            children,
            ..Self::default()
        }
    }

    /// Set the inter-child gap.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set the cross-axis alignment.
    #[must_use]
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the main-axis distribution.
    #[must_use]
    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    /// Set the inner padding.
    #[must_use]
    pub fn padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let visible = visible(&self.children);
        measure_axis(ctx, MainAxis::Vertical, max, self.gap, self.padding, &visible)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let visible = visible(&self.children);
        if visible.is_empty() {
            return Ok(());
        }
        let area = deflate(bounds, self.padding);
        let rects = arrange(
            ctx,
            MainAxis::Vertical,
            area,
            self.gap,
            self.justify,
            self.align,
            &visible,
        );
        for (child, rect) in visible.iter().zip(rects) {
            child.render(ctx, rect)?;
        }
        Ok(())
    }
}

/// Overlay container: children render at the full allotted size in list
/// order (later children on top).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stack {
    /// Children in paint order.
    pub children: Vec<Component>,
}

impl Stack {
    /// New stack over `children`.
    pub fn new(children: Vec<Component>) -> Self {
        Self { children }
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let mut size = Size::zero();
        for child in visible(&self.children) {
            let s = child.measure(ctx, max);
            size.width = size.width.max(s.width);
            size.height = size.height.max(s.height);
        }
        size
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        for child in visible(&self.children) {
            child.render(ctx, bounds)?;
        }
        Ok(())
    }
}

/// Row that falls back to a Column when its children do not fit
/// side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct Adaptive {
    /// Children in layout order.
    pub children: Vec<Component>,
    /// Pixels between adjacent children.
    pub gap: u32,
    /// Uniform inner padding.
    pub padding: u32,
}

impl Adaptive {
    /// New adaptive container over `children`.
    pub fn new(children: Vec<Component>) -> Self {
        Self {
            children,
            gap: 6,
            padding: 0,
        }
    }

    /// Set the inter-child gap.
    #[must_use]
    pub fn gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    fn fits_horizontally<D: Surface>(&self, ctx: &RenderContext<'_, D>, bounds: Rectangle) -> bool {
        let visible = visible(&self.children);
        if visible.is_empty() {
            return true;
        }
        let inner_w = bounds.size.width.saturating_sub(self.padding * 2);
        let inner = Size::new(inner_w, bounds.size.height);
        let total: u32 = visible.iter().map(|c| c.measure(ctx, inner).width).sum::<u32>()
            + self.gap * (visible.len() as u32 - 1);
        total <= inner_w
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let visible = visible(&self.children);
        measure_axis(ctx, MainAxis::Horizontal, max, self.gap, self.padding, &visible)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let visible = visible(&self.children);
        if visible.is_empty() {
            return Ok(());
        }
        let area = deflate(bounds, self.padding);
        let rects = if self.fits_horizontally(ctx, bounds) {
            arrange(
                ctx,
                MainAxis::Horizontal,
                area,
                self.gap,
                Justify::SpaceBetween,
                Align::Center,
                &visible,
            )
        } else {
            arrange(
                ctx,
                MainAxis::Vertical,
                area,
                self.gap,
                Justify::Center,
                Align::Center,
                &visible,
            )
        };
        for (child, rect) in visible.iter().zip(rects) {
            child.render(ctx, rect)?;
        }
        Ok(())
    }
}

/// Insets around a single child, clamping to zero when the insets would
/// invert the available space.
#[derive(Debug, Clone, PartialEq)]
pub struct Padding {
    /// The wrapped child.
    pub child: Box<Component>,
    /// Top inset.
    pub top: u32,
    /// Right inset.
    pub right: u32,
    /// Bottom inset.
    pub bottom: u32,
    /// Left inset.
    pub left: u32,
}

impl Padding {
    /// Equal insets on all four sides.
    pub fn all(child: Component, inset: u32) -> Self {
        Self {
            child: Box::new(child),
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }

    /// Separate horizontal and vertical insets.
    pub fn symmetric(child: Component, horizontal: u32, vertical: u32) -> Self {
        Self {
            child: Box::new(child),
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Fully explicit insets.
    pub fn new(child: Component, top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            child: Box::new(child),
            top,
            right,
            bottom,
            left,
        }
    }

    /// Inset only from the top (badge positioning inside stacks).
    pub fn top_only(child: Component, top: u32) -> Self {
        Self::new(child, top, 0, 0, 0)
    }

    fn inner(&self, size: Size) -> Size {
        Size::new(
            size.width.saturating_sub(self.left + self.right),
            size.height.saturating_sub(self.top + self.bottom),
        )
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        let child = self.child.measure(ctx, self.inner(max));
        Size::new(
            (child.width + self.left + self.right).min(max.width),
            (child.height + self.top + self.bottom).min(max.height),
        )
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let inner = self.inner(bounds.size);
        if inner.width == 0 || inner.height == 0 {
            return Ok(());
        }
        let rect = Rectangle::new(
            bounds.top_left + Point::new(self.left as i32, self.top as i32),
            inner,
        );
        self.child.render(ctx, rect)
    }
}

/// Centers a single child at its own measured size.
#[derive(Debug, Clone, PartialEq)]
pub struct Center {
    /// The wrapped child.
    pub child: Box<Component>,
}

impl Center {
    /// Center `child`.
    pub fn new(child: Component) -> Self {
        Self {
            child: Box::new(child),
        }
    }

    pub(crate) fn measure<D: Surface>(&self, ctx: &RenderContext<'_, D>, max: Size) -> Size {
        self.child.measure(ctx, max)
    }

    pub(crate) fn render<D: Surface>(
        &self,
        ctx: &mut RenderContext<'_, D>,
        bounds: Rectangle,
    ) -> Result<(), D::Error> {
        let size = self.child.measure(ctx, bounds.size);
        let rect = Rectangle::new(
            Point::new(
                bounds.top_left.x + (bounds.size.width as i32 - size.width as i32) / 2,
                bounds.top_left.y + (bounds.size.height as i32 - size.height as i32) / 2,
            ),
            size,
        );
        self.child.render(ctx, rect.intersection(&bounds))
    }
}

/// Filter out `Empty` children; they exist so conditional branches still
/// type-check as components, and must not consume gaps.
pub(crate) fn visible(children: &[Component]) -> Vec<&Component> {
    children.iter().filter(|c| !c.is_empty_node()).collect()
}
