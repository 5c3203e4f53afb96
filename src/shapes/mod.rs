// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape kinds
//!
//! Each kind declares its item-count policy, its constraint table, its hit
//! test and its paths. The set of kinds is closed: `Kind` wraps one struct
//! per kind and dispatches by `match`.

use crate::constraints::BindingRule;
use crate::geometry::HitTarget;
use crate::layout::{ItemPosition, Layout, LayoutAction};
use kurbo::{Affine, BezPath, Point};

// ===== Shape Type =====

/// Identifier for a shape kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Two-point line segment
    Line,
    /// Three-point closed triangle
    Triangle,
    /// Circle through three boundary points
    Circle,
    /// Rectangle with corners and edge midpoints
    Rectangle,
    /// Freehand strokes
    Freehand,
}

impl ShapeType {
    /// Every kind, in toolbar order
    pub const ALL: [ShapeType; 5] = [
        ShapeType::Line,
        ShapeType::Triangle,
        ShapeType::Circle,
        ShapeType::Rectangle,
        ShapeType::Freehand,
    ];
}

// ===== Shape Kind Trait =====

/// Capabilities every shape kind provides
pub trait ShapeKind {
    /// The kind identifier
    fn shape_type(&self) -> ShapeType;

    /// What the shape accepts next given its layout
    fn layout_action(&self, layout: &Layout) -> LayoutAction;

    /// Item bindings in force for `layout`, empty for unconstrained kinds
    fn constraints(&self, _layout: &Layout) -> &'static [BindingRule] {
        &[]
    }

    /// Whether items can be edited after the shape is finished
    fn is_editable(&self) -> bool {
        true
    }

    /// Accept a user-placed point.
    ///
    /// Returns the position of the item that follows the pointer while the
    /// gesture continues. Kinds may add synthesized items here.
    fn push(&mut self, layout: &mut Layout, point: Point) -> ItemPosition {
        layout.push(point)
    }

    /// Refresh cached geometry after the layout changed
    fn layout_did_update(&mut self, _layout: &Layout) {}

    /// The outline, in shape-local coordinates
    fn main_path(&self, layout: &Layout) -> Option<BezPath>;

    /// Whether the kind draws a dashed outline until it is finished
    fn has_preliminary(&self) -> bool {
        false
    }

    /// The in-progress outline, in shape-local coordinates
    fn preliminary_path(&self, _layout: &Layout) -> Option<BezPath> {
        None
    }

    /// Whether `target` touches the outline once `transform` is applied
    fn hit_test(&self, layout: &Layout, transform: Affine, target: &HitTarget) -> bool;
}

// ===== Kind Enum =====

/// Enum wrapping all shape kinds
#[derive(Debug, Clone)]
pub enum Kind {
    Line(line::LineKind),
    Triangle(triangle::TriangleKind),
    Circle(circle::CircleKind),
    Rectangle(rectangle::RectangleKind),
    Freehand(freehand::FreehandKind),
}

impl Kind {
    /// Create a kind by type
    pub fn for_type(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Line => Kind::Line(line::LineKind),
            ShapeType::Triangle => Kind::Triangle(triangle::TriangleKind),
            ShapeType::Circle => Kind::Circle(circle::CircleKind::default()),
            ShapeType::Rectangle => Kind::Rectangle(rectangle::RectangleKind),
            ShapeType::Freehand => Kind::Freehand(freehand::FreehandKind),
        }
    }

    fn as_kind(&self) -> &dyn ShapeKind {
        match self {
            Kind::Line(kind) => kind,
            Kind::Triangle(kind) => kind,
            Kind::Circle(kind) => kind,
            Kind::Rectangle(kind) => kind,
            Kind::Freehand(kind) => kind,
        }
    }

    fn as_kind_mut(&mut self) -> &mut dyn ShapeKind {
        match self {
            Kind::Line(kind) => kind,
            Kind::Triangle(kind) => kind,
            Kind::Circle(kind) => kind,
            Kind::Rectangle(kind) => kind,
            Kind::Freehand(kind) => kind,
        }
    }
}

impl ShapeKind for Kind {
    fn shape_type(&self) -> ShapeType {
        self.as_kind().shape_type()
    }

    fn layout_action(&self, layout: &Layout) -> LayoutAction {
        self.as_kind().layout_action(layout)
    }

    fn constraints(&self, layout: &Layout) -> &'static [BindingRule] {
        self.as_kind().constraints(layout)
    }

    fn is_editable(&self) -> bool {
        self.as_kind().is_editable()
    }

    fn push(&mut self, layout: &mut Layout, point: Point) -> ItemPosition {
        self.as_kind_mut().push(layout, point)
    }

    fn layout_did_update(&mut self, layout: &Layout) {
        self.as_kind_mut().layout_did_update(layout);
    }

    fn main_path(&self, layout: &Layout) -> Option<BezPath> {
        self.as_kind().main_path(layout)
    }

    fn has_preliminary(&self) -> bool {
        self.as_kind().has_preliminary()
    }

    fn preliminary_path(&self, layout: &Layout) -> Option<BezPath> {
        self.as_kind().preliminary_path(layout)
    }

    fn hit_test(&self, layout: &Layout, transform: Affine, target: &HitTarget) -> bool {
        self.as_kind().hit_test(layout, transform, target)
    }
}

// ===== Shared Helpers =====

/// A polyline through `points`, `None` for fewer than two points
pub(crate) fn polyline_path(points: &[Point], closed: bool) -> Option<BezPath> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(*first);
    for &p in rest {
        path.line_to(p);
    }
    if closed {
        path.close_path();
    }
    Some(path)
}

/// Points of the first section mapped through `transform`
pub(crate) fn transformed_first_section(layout: &Layout, transform: Affine) -> Vec<Point> {
    layout
        .first_section()
        .map(|items| items.iter().map(|&p| transform * p).collect())
        .unwrap_or_default()
}

// ===== Kind Modules =====

pub mod circle;
pub mod freehand;
pub mod line;
pub mod rectangle;
pub mod triangle;
