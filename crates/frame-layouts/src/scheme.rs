//! Layout schemes and their pure slot-geometry computation.
//!
//! Every scheme partitions the padded display area into an ordered list
//! of non-degenerate rectangles. Geometry is a pure function of the
//! scheme parameters and the target dimensions — recomputing it never
//! touches widget assignments.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

/// Orientation of a two-way split.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SplitAxis {
    /// Two slots side by side (the divider runs vertically).
    Columns,
    /// Two slots stacked (the divider runs horizontally).
    Rows,
}

/// Which corner a corner-hero occupies.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Corner {
    /// Hero in the top-left.
    TopLeft,
    /// Hero in the top-right.
    TopRight,
    /// Hero in the bottom-left.
    BottomLeft,
    /// Hero in the bottom-right.
    BottomRight,
}

/// Geometric partition scheme for a screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LayoutScheme {
    /// Uniform rows×cols cells, row-major slot order.
    Grid {
        /// Number of rows.
        rows: u32,
        /// Number of columns.
        cols: u32,
    },
    /// One slot covering the whole padded area.
    Fullscreen,
    /// Hero band on top plus equal footer cells below.
    Hero {
        /// Hero height as a fraction of the available height.
        hero_ratio: f32,
        /// Number of footer cells.
        footer_count: u32,
    },
    /// Two slots split by a ratio, clamped to [0.2, 0.8].
    Split {
        /// Split orientation.
        axis: SplitAxis,
        /// Share of the first slot.
        ratio: f32,
    },
    /// Three side-by-side columns; ratios are normalized at computation.
    ThreeColumn {
        /// Width shares.
        ratios: [f32; 3],
    },
    /// Three stacked rows; ratios are normalized at computation.
    ThreeRow {
        /// Height shares.
        ratios: [f32; 3],
    },
    /// Wide left panel plus three stacked rows on the right.
    SidebarLeft {
        /// Width share of the wide panel.
        ratio: f32,
    },
    /// Three stacked rows on the left plus a wide right panel.
    SidebarRight {
        /// Width share of the wide panel.
        ratio: f32,
    },
    /// 2×2-equivalent hero in one corner, two stacked side slots and a
    /// three-cell strip; six slots total.
    CornerHero {
        /// The corner holding the hero.
        corner: Corner,
    },
}

/// Default scheme used when a name is not recognized.
pub const DEFAULT_SCHEME: LayoutScheme = LayoutScheme::Grid { rows: 2, cols: 2 };

/// Every registered scheme name.
pub const LAYOUT_REGISTRY: &[(&str, LayoutScheme)] = &[
    ("fullscreen", LayoutScheme::Fullscreen),
    ("grid_2x2", LayoutScheme::Grid { rows: 2, cols: 2 }),
    ("grid_2x3", LayoutScheme::Grid { rows: 2, cols: 3 }),
    ("grid_3x2", LayoutScheme::Grid { rows: 3, cols: 2 }),
    ("grid_3x3", LayoutScheme::Grid { rows: 3, cols: 3 }),
    (
        "hero",
        LayoutScheme::Hero {
            hero_ratio: 0.55,
            footer_count: 3,
        },
    ),
    (
        "hero_simple",
        LayoutScheme::Hero {
            hero_ratio: 0.66,
            footer_count: 1,
        },
    ),
    (
        "hero_tl",
        LayoutScheme::CornerHero {
            corner: Corner::TopLeft,
        },
    ),
    (
        "hero_tr",
        LayoutScheme::CornerHero {
            corner: Corner::TopRight,
        },
    ),
    (
        "hero_bl",
        LayoutScheme::CornerHero {
            corner: Corner::BottomLeft,
        },
    ),
    (
        "hero_br",
        LayoutScheme::CornerHero {
            corner: Corner::BottomRight,
        },
    ),
    (
        "sidebar_left",
        LayoutScheme::SidebarLeft { ratio: 0.67 },
    ),
    (
        "sidebar_right",
        LayoutScheme::SidebarRight { ratio: 0.67 },
    ),
    (
        "split_h",
        LayoutScheme::Split {
            axis: SplitAxis::Columns,
            ratio: 0.5,
        },
    ),
    (
        "split_h_1_2",
        LayoutScheme::Split {
            axis: SplitAxis::Columns,
            ratio: 1.0 / 3.0,
        },
    ),
    (
        "split_h_2_1",
        LayoutScheme::Split {
            axis: SplitAxis::Columns,
            ratio: 2.0 / 3.0,
        },
    ),
    (
        "split_v",
        LayoutScheme::Split {
            axis: SplitAxis::Rows,
            ratio: 0.5,
        },
    ),
    (
        "three_column",
        LayoutScheme::ThreeColumn {
            ratios: [1.0 / 3.0; 3],
        },
    ),
    (
        "three_row",
        LayoutScheme::ThreeRow {
            ratios: [1.0 / 3.0; 3],
        },
    ),
];

/// Resolve a scheme name; unknown names fall back to the 2×2 grid.
pub fn scheme_from_name(name: &str) -> LayoutScheme {
    match LAYOUT_REGISTRY.iter().find(|(n, _)| *n == name) {
        Some((_, scheme)) => *scheme,
        None => {
            tracing::warn!(layout = name, "unknown layout scheme, using grid_2x2");
            DEFAULT_SCHEME
        }
    }
}

fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rectangle {
    Rectangle::new(
        Point::new(x1, y1),
        Size::new((x2 - x1).max(1) as u32, (y2 - y1).max(1) as u32),
    )
}

/// Compute the slot rectangles for a scheme.
///
/// `width`/`height` are the full display dimensions; `padding` insets
/// the outer edge and `gap` separates adjacent slots.
pub fn compute_slots(
    scheme: LayoutScheme,
    width: u32,
    height: u32,
    padding: u32,
    gap: u32,
) -> Vec<Rectangle> {
    let w = width as i32;
    let h = height as i32;
    let pad = padding as i32;
    let gap = gap as i32;
    let avail_w = w - 2 * pad;
    let avail_h = h - 2 * pad;

    match scheme {
        LayoutScheme::Fullscreen => vec![rect(pad, pad, w - pad, h - pad)],

        LayoutScheme::Grid { rows, cols } => {
            let rows = rows.max(1) as i32;
            let cols = cols.max(1) as i32;
            let cell_w = (avail_w - (cols - 1) * gap) / cols;
            let cell_h = (avail_h - (rows - 1) * gap) / rows;

            let mut slots = Vec::with_capacity((rows * cols) as usize);
            for row in 0..rows {
                for col in 0..cols {
                    let x1 = pad + col * (cell_w + gap);
                    let y1 = pad + row * (cell_h + gap);
                    slots.push(rect(x1, y1, x1 + cell_w, y1 + cell_h));
                }
            }
            slots
        }

        LayoutScheme::Hero {
            hero_ratio,
            footer_count,
        } => {
            let footers = footer_count.max(1) as i32;
            let ratio = hero_ratio.clamp(0.2, 0.8);
            let content_h = avail_h - gap;
            let hero_h = (content_h as f32 * ratio) as i32;

            let mut slots = vec![rect(pad, pad, w - pad, pad + hero_h)];

            let footer_y = pad + hero_h + gap;
            let footer_w = (avail_w - (footers - 1) * gap) / footers;
            for i in 0..footers {
                let x1 = pad + i * (footer_w + gap);
                slots.push(rect(x1, footer_y, x1 + footer_w, h - pad));
            }
            slots
        }

        LayoutScheme::Split { axis, ratio } => {
            let ratio = ratio.clamp(0.2, 0.8);
            match axis {
                SplitAxis::Columns => {
                    let first_w = ((avail_w - gap) as f32 * ratio) as i32;
                    vec![
                        rect(pad, pad, pad + first_w, h - pad),
                        rect(pad + first_w + gap, pad, w - pad, h - pad),
                    ]
                }
                SplitAxis::Rows => {
                    let first_h = ((avail_h - gap) as f32 * ratio) as i32;
                    vec![
                        rect(pad, pad, w - pad, pad + first_h),
                        rect(pad, pad + first_h + gap, w - pad, h - pad),
                    ]
                }
            }
        }

        LayoutScheme::ThreeColumn { ratios } => {
            let ratios = normalize(ratios);
            let content_w = avail_w - 2 * gap;
            let w0 = (content_w as f32 * ratios[0]) as i32;
            let w1 = (content_w as f32 * ratios[1]) as i32;
            let x1 = pad + w0 + gap;
            let x2 = x1 + w1 + gap;
            vec![
                rect(pad, pad, pad + w0, h - pad),
                rect(x1, pad, x1 + w1, h - pad),
                rect(x2, pad, w - pad, h - pad),
            ]
        }

        LayoutScheme::ThreeRow { ratios } => {
            let ratios = normalize(ratios);
            let content_h = avail_h - 2 * gap;
            let h0 = (content_h as f32 * ratios[0]) as i32;
            let h1 = (content_h as f32 * ratios[1]) as i32;
            let y1 = pad + h0 + gap;
            let y2 = y1 + h1 + gap;
            vec![
                rect(pad, pad, w - pad, pad + h0),
                rect(pad, y1, w - pad, y1 + h1),
                rect(pad, y2, w - pad, h - pad),
            ]
        }

        LayoutScheme::SidebarLeft { ratio } => {
            let left_w = ((avail_w - gap) as f32 * ratio.clamp(0.2, 0.8)) as i32;
            let row_h = (avail_h - 2 * gap) / 3;
            let right_x = pad + left_w + gap;

            let mut slots = vec![rect(pad, pad, pad + left_w, h - pad)];
            for i in 0..3 {
                let y = pad + i * (row_h + gap);
                slots.push(rect(right_x, y, w - pad, y + row_h));
            }
            slots
        }

        LayoutScheme::SidebarRight { ratio } => {
            let right_w = ((avail_w - gap) as f32 * ratio.clamp(0.2, 0.8)) as i32;
            let left_w = avail_w - right_w - gap;
            let row_h = (avail_h - 2 * gap) / 3;

            let mut slots = Vec::with_capacity(4);
            for i in 0..3 {
                let y = pad + i * (row_h + gap);
                slots.push(rect(pad, y, pad + left_w, y + row_h));
            }
            let right_x = pad + left_w + gap;
            slots.push(rect(right_x, pad, w - pad, h - pad));
            slots
        }

        LayoutScheme::CornerHero { corner } => corner_hero_slots(corner, w, h, pad, gap),
    }
}

fn normalize(ratios: [f32; 3]) -> [f32; 3] {
    let sum: f32 = ratios.iter().sum();
    if sum <= 0.0 {
        return [1.0 / 3.0; 3];
    }
    [ratios[0] / sum, ratios[1] / sum, ratios[2] / sum]
}

/// Six-slot corner-hero geometry, mirrored per corner.
fn corner_hero_slots(corner: Corner, w: i32, h: i32, pad: i32, gap: i32) -> Vec<Rectangle> {
    let avail_w = w - 2 * pad;
    let avail_h = h - 2 * pad;

    // Hero takes ~2/3 of both axes
    let hero_w = ((avail_w - gap) as f32 * 0.67) as i32;
    let hero_h = ((avail_h - gap) as f32 * 0.67) as i32;
    let side_w = avail_w - hero_w - gap;
    let side_h = (hero_h - gap) / 2;
    let strip_h = avail_h - hero_h - gap;
    let strip_cell_w = (avail_w - 2 * gap) / 3;

    let strip_row = |y1: i32, y2: i32| -> Vec<Rectangle> {
        (0..3)
            .map(|i| {
                let x = pad + i * (strip_cell_w + gap);
                rect(x, y1, x + strip_cell_w, y2)
            })
            .collect()
    };

    match corner {
        Corner::TopLeft => {
            let side_x = pad + hero_w + gap;
            let mut slots = vec![
                rect(pad, pad, pad + hero_w, pad + hero_h),
                rect(side_x, pad, w - pad, pad + side_h),
                rect(side_x, pad + side_h + gap, w - pad, pad + hero_h),
            ];
            slots.extend(strip_row(pad + hero_h + gap, h - pad));
            slots
        }
        Corner::TopRight => {
            let hero_x = pad + side_w + gap;
            let mut slots = vec![
                rect(pad, pad, pad + side_w, pad + side_h),
                rect(hero_x, pad, w - pad, pad + hero_h),
                rect(pad, pad + side_h + gap, pad + side_w, pad + hero_h),
            ];
            slots.extend(strip_row(pad + hero_h + gap, h - pad));
            slots
        }
        Corner::BottomLeft => {
            let hero_y = pad + strip_h + gap;
            let side_x = pad + hero_w + gap;
            let mut slots = strip_row(pad, pad + strip_h);
            slots.push(rect(side_x, hero_y, w - pad, hero_y + side_h));
            slots.push(rect(pad, hero_y, pad + hero_w, h - pad));
            slots.push(rect(side_x, hero_y + side_h + gap, w - pad, h - pad));
            slots
        }
        Corner::BottomRight => {
            let hero_y = pad + strip_h + gap;
            let hero_x = pad + side_w + gap;
            let mut slots = strip_row(pad, pad + strip_h);
            slots.push(rect(pad, hero_y, pad + side_w, hero_y + side_h));
            slots.push(rect(hero_x, hero_y, w - pad, h - pad));
            slots.push(rect(pad, hero_y + side_h + gap, pad + side_w, h - pad));
            slots
        }
    }
}
