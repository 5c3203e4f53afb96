// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Rectangle with corner and edge-midpoint handles.
//!
//! The user places two opposite corners. On the second placement the
//! remaining corners and all edge midpoints are synthesized, and the items
//! are stored in clockwise traversal order starting at the first corner:
//!
//! ```text
//!  C0 ---- M1 ---- C2
//!  |                |
//!  M7              M3
//!  |                |
//!  C6 ---- M5 ---- C4
//! ```
//!
//! (shown for a drag towards +x/+y; other drag directions mirror it). The
//! second placed point becomes `C4` and keeps following the pointer.
//!
//! The binding table keeps the layout rectangular under any single-item
//! move. Moving a corner drags its two neighbours along one axis each,
//! moves the midpoints of its own edges by a full axis and half the other,
//! and moves the far midpoints by half an axis. Moving a midpoint moves its
//! edge perpendicular to the edge only.

use super::{ShapeKind, ShapeType, polyline_path, transformed_first_section};
use crate::constraints::{BindingRule, ItemBinding};
use crate::geometry::HitTarget;
use crate::layout::{ItemPosition, Layout, LayoutAction};
use kurbo::{Affine, BezPath, Point, Vec2};

const ITEM_COUNT: usize = 8;

const C0: ItemPosition = ItemPosition::item(0);
const M1: ItemPosition = ItemPosition::item(1);
const C2: ItemPosition = ItemPosition::item(2);
const M3: ItemPosition = ItemPosition::item(3);
const C4: ItemPosition = ItemPosition::item(4);
const M5: ItemPosition = ItemPosition::item(5);
const C6: ItemPosition = ItemPosition::item(6);
const M7: ItemPosition = ItemPosition::item(7);

static BINDINGS: &[BindingRule] = &[
    BindingRule {
        source: C0,
        bindings: &[
            ItemBinding::new(C2, 0.0, 1.0),
            ItemBinding::new(C6, 1.0, 0.0),
            ItemBinding::new(M1, 0.5, 1.0),
            ItemBinding::new(M7, 1.0, 0.5),
            ItemBinding::new(M5, 0.5, 0.0),
            ItemBinding::new(M3, 0.0, 0.5),
        ],
    },
    BindingRule {
        source: C2,
        bindings: &[
            ItemBinding::new(C0, 0.0, 1.0),
            ItemBinding::new(C4, 1.0, 0.0),
            ItemBinding::new(M1, 0.5, 1.0),
            ItemBinding::new(M3, 1.0, 0.5),
            ItemBinding::new(M5, 0.5, 0.0),
            ItemBinding::new(M7, 0.0, 0.5),
        ],
    },
    BindingRule {
        source: C4,
        bindings: &[
            ItemBinding::new(C6, 0.0, 1.0),
            ItemBinding::new(C2, 1.0, 0.0),
            ItemBinding::new(M5, 0.5, 1.0),
            ItemBinding::new(M3, 1.0, 0.5),
            ItemBinding::new(M1, 0.5, 0.0),
            ItemBinding::new(M7, 0.0, 0.5),
        ],
    },
    BindingRule {
        source: C6,
        bindings: &[
            ItemBinding::new(C4, 0.0, 1.0),
            ItemBinding::new(C0, 1.0, 0.0),
            ItemBinding::new(M5, 0.5, 1.0),
            ItemBinding::new(M7, 1.0, 0.5),
            ItemBinding::new(M1, 0.5, 0.0),
            ItemBinding::new(M3, 0.0, 0.5),
        ],
    },
    // Horizontal edges move vertically only
    BindingRule {
        source: M1,
        bindings: &[
            ItemBinding::new(M1, -1.0, 0.0),
            ItemBinding::new(C0, 0.0, 1.0),
            ItemBinding::new(C2, 0.0, 1.0),
            ItemBinding::new(M7, 0.0, 0.5),
            ItemBinding::new(M3, 0.0, 0.5),
        ],
    },
    BindingRule {
        source: M5,
        bindings: &[
            ItemBinding::new(M5, -1.0, 0.0),
            ItemBinding::new(C4, 0.0, 1.0),
            ItemBinding::new(C6, 0.0, 1.0),
            ItemBinding::new(M3, 0.0, 0.5),
            ItemBinding::new(M7, 0.0, 0.5),
        ],
    },
    // Vertical edges move horizontally only
    BindingRule {
        source: M3,
        bindings: &[
            ItemBinding::new(M3, 0.0, -1.0),
            ItemBinding::new(C2, 1.0, 0.0),
            ItemBinding::new(C4, 1.0, 0.0),
            ItemBinding::new(M1, 0.5, 0.0),
            ItemBinding::new(M5, 0.5, 0.0),
        ],
    },
    BindingRule {
        source: M7,
        bindings: &[
            ItemBinding::new(M7, 0.0, -1.0),
            ItemBinding::new(C0, 1.0, 0.0),
            ItemBinding::new(C6, 1.0, 0.0),
            ItemBinding::new(M1, 0.5, 0.0),
            ItemBinding::new(M5, 0.5, 0.0),
        ],
    },
];

/// An axis-aligned rectangle in shape-local coordinates
#[derive(Debug, Clone, Copy, Default)]
pub struct RectangleKind;

/// The eight items spanned by two opposite corners, in traversal order
fn synthesize(origin: Point, corner: Point) -> [Point; ITEM_COUNT] {
    let d = corner - origin;
    [
        origin,
        origin + Vec2::new(d.x / 2.0, 0.0),
        origin + Vec2::new(d.x, 0.0),
        origin + Vec2::new(d.x, d.y / 2.0),
        corner,
        origin + Vec2::new(d.x / 2.0, d.y),
        origin + Vec2::new(0.0, d.y),
        origin + Vec2::new(0.0, d.y / 2.0),
    ]
}

impl ShapeKind for RectangleKind {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn layout_action(&self, layout: &Layout) -> LayoutAction {
        LayoutAction::single_section(ITEM_COUNT, layout)
    }

    /// The table only applies once both corners have been placed
    fn constraints(&self, layout: &Layout) -> &'static [BindingRule] {
        match layout.first_section() {
            Some(items) if items.len() == ITEM_COUNT => BINDINGS,
            _ => &[],
        }
    }

    fn push(&mut self, layout: &mut Layout, point: Point) -> ItemPosition {
        match layout.first_section() {
            Some(&[origin]) => {
                let items = synthesize(origin, point);
                for &item in &items[1..] {
                    layout.push(item);
                }
                C4
            }
            _ => layout.push(point),
        }
    }

    fn main_path(&self, layout: &Layout) -> Option<BezPath> {
        let items = layout.first_section()?;
        if items.len() != ITEM_COUNT {
            return None;
        }
        polyline_path(items, true)
    }

    fn hit_test(&self, layout: &Layout, transform: Affine, target: &HitTarget) -> bool {
        let points = transformed_first_section(layout, transform);
        points.len() == ITEM_COUNT && target.hits_polyline(&points, true)
    }
}
