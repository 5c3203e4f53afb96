// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! A shape: a kind, its layout, and rotation state.
//!
//! The layout is stored in shape-local coordinates and is never rotated.
//! Rotation is an affine transform about the pivot, applied when drawing
//! and when hit testing. Every push or move goes through the shape so the
//! kind's constraint table and cached geometry stay in step with the
//! layout.

use crate::constraints;
use crate::error::LayoutError;
use crate::geometry::{Angle, HitTarget};
use crate::layout::{ItemPosition, Layout, LayoutAction, PointDescriptor};
use crate::model::ShapeId;
use crate::render::Drawable;
use crate::shapes::{Kind, ShapeKind, ShapeType};
use crate::theme;
use kurbo::{Affine, Point, Vec2};
use peniko::Color;

/// Stroke parameters for a shape's outline
#[derive(Debug, Clone, Copy)]
pub struct ShapeStyle {
    pub line_width: f64,
    pub color: Color,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            line_width: theme::shape::LINE_WIDTH,
            color: theme::shape::STROKE,
        }
    }
}

/// Restorable copy of a shape's mutable state
#[derive(Debug, Clone)]
pub struct ShapeSnapshot {
    kind: Kind,
    layout: Layout,
    finished: bool,
    rotation_center: Option<PointDescriptor>,
    rotation_angle: Angle,
}

impl ShapeSnapshot {
    pub fn rotation_center(&self) -> Option<PointDescriptor> {
        self.rotation_center
    }

    pub fn rotation_angle(&self) -> Angle {
        self.rotation_angle
    }
}

/// A drawn shape
#[derive(Debug, Clone)]
pub struct Shape {
    id: ShapeId,
    kind: Kind,
    layout: Layout,
    finished: bool,
    rotation_center: Option<PointDescriptor>,
    rotation_angle: Angle,
    style: ShapeStyle,
}

impl Shape {
    /// Create an empty shape of the given kind
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            id: ShapeId::next(),
            kind: Kind::for_type(shape_type),
            layout: Layout::new(),
            finished: false,
            rotation_center: None,
            rotation_angle: Angle::ZERO,
            style: ShapeStyle::default(),
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn shape_type(&self) -> ShapeType {
        self.kind.shape_type()
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn style(&self) -> ShapeStyle {
        self.style
    }

    pub fn set_style(&mut self, style: ShapeStyle) {
        self.style = style;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_editable(&self) -> bool {
        self.kind.is_editable()
    }

    // ===== Construction =====

    /// What the shape accepts next
    pub fn layout_action(&self) -> LayoutAction {
        self.kind.layout_action(&self.layout)
    }

    /// Append a user-placed point.
    ///
    /// Returns the position of the item that should follow the pointer.
    /// Fails with `LayoutError::Complete` once the shape is finished or its
    /// kind accepts no more points.
    pub fn push(&mut self, point: Point) -> Result<ItemPosition, LayoutError> {
        if self.finished || !self.layout_action().accepts_push() {
            tracing::warn!("{}: rejected push at {:?}", self.id, point);
            return Err(LayoutError::Complete);
        }
        let position = self.kind.push(&mut self.layout, point);
        self.kind.layout_did_update(&self.layout);
        Ok(position)
    }

    /// Open a new section starting at `point`.
    ///
    /// Only kinds with continuous sections accept this once they hold
    /// items; on an empty layout it behaves like `push`.
    pub fn push_section(&mut self, point: Point) -> Result<ItemPosition, LayoutError> {
        if self.layout.is_empty() {
            return self.push(point);
        }
        if self.finished {
            return Err(LayoutError::Complete);
        }
        if self.layout_action() != LayoutAction::ContinuousPushThenFinish {
            return Err(LayoutError::SectionsNotSupported);
        }
        let position = self.layout.push_section(point);
        self.kind.layout_did_update(&self.layout);
        Ok(position)
    }

    /// Move an item and re-derive its dependents.
    ///
    /// Returns the displacement of the moved item.
    pub fn move_item(&mut self, position: ItemPosition, to: Point) -> Result<Vec2, LayoutError> {
        let table = self.kind.constraints(&self.layout);
        let delta = constraints::move_item(&mut self.layout, table, position, to)?;
        self.kind.layout_did_update(&self.layout);
        Ok(delta)
    }

    /// Whether the shape may be finished now
    pub fn can_finish(&self) -> bool {
        !self.layout.is_empty() && self.layout_action().can_finish()
    }

    /// Close the layout to further pushes
    pub fn finish(&mut self) {
        self.finished = true;
    }

    // ===== Rotation =====

    /// Resolve a descriptor against this shape's layout
    pub fn point(&self, descriptor: PointDescriptor) -> Result<Point, LayoutError> {
        match descriptor {
            PointDescriptor::Fixed(point) => Ok(point),
            PointDescriptor::Item(position) => self.layout.item(position),
        }
    }

    pub fn rotation_center(&self) -> Option<PointDescriptor> {
        self.rotation_center
    }

    /// Replace the pivot, returning the previous one
    pub fn set_rotation_center(
        &mut self,
        center: Option<PointDescriptor>,
    ) -> Option<PointDescriptor> {
        std::mem::replace(&mut self.rotation_center, center)
    }

    /// The pivot resolved to a point, if it is set and resolvable
    pub fn pivot(&self) -> Option<Point> {
        let descriptor = self.rotation_center?;
        match self.point(descriptor) {
            Ok(point) => Some(point),
            Err(err) => {
                tracing::error!("{}: unresolvable pivot: {}", self.id, err);
                None
            }
        }
    }

    pub fn rotation_angle(&self) -> Angle {
        self.rotation_angle
    }

    /// Replace the rotation angle, returning the previous one
    pub fn rotate(&mut self, angle: Angle) -> Angle {
        std::mem::replace(&mut self.rotation_angle, angle)
    }

    /// Shape-local to content transform
    pub fn transform(&self) -> Affine {
        match self.pivot() {
            Some(pivot) if self.rotation_angle != Angle::ZERO => {
                Affine::rotate_about(self.rotation_angle.radians(), pivot)
            }
            _ => Affine::IDENTITY,
        }
    }

    // ===== Rendering =====

    /// The outline once committed
    pub fn main_drawables(&self) -> Vec<Drawable> {
        self.kind
            .main_path(&self.layout)
            .map(|path| {
                Drawable::solid(path, self.style.line_width, self.style.color)
                    .with_transform(self.transform())
            })
            .into_iter()
            .collect()
    }

    /// The dashed outline shown while drawing
    pub fn preliminary_drawables(&self) -> Vec<Drawable> {
        if self.finished {
            return Vec::new();
        }
        self.kind
            .preliminary_path(&self.layout)
            .map(|path| {
                Drawable::dashed(
                    path,
                    self.style.line_width,
                    theme::shape::DIMMED,
                    theme::preliminary::DASH_OFFSET,
                    theme::preliminary::DASH,
                )
                .with_transform(self.transform())
            })
            .into_iter()
            .collect()
    }

    /// What to draw right now: the preliminary outline while an in-progress
    /// kind is unfinished, the main outline otherwise
    pub fn drawables(&self) -> Vec<Drawable> {
        if !self.finished && self.kind.has_preliminary() {
            self.preliminary_drawables()
        } else {
            self.main_drawables()
        }
    }

    // ===== Hit Testing =====

    /// Whether `target` (content coordinates) touches the outline
    pub fn hit_test(&self, target: &HitTarget) -> bool {
        self.kind.hit_test(&self.layout, self.transform(), target)
    }

    /// First item within `range` of `location`, in shape-local coordinates.
    ///
    /// Later sections win over earlier ones; within a section the first
    /// item in range wins.
    pub fn item_at(&self, location: Point, range: f64) -> Option<ItemPosition> {
        let range_sq = range * range;
        let sections = self.layout.sections();
        sections.iter().enumerate().rev().find_map(|(section, items)| {
            items
                .iter()
                .position(|&p| (p - location).hypot2() <= range_sq)
                .map(|item| ItemPosition::new(section, item))
        })
    }

    // ===== Snapshots =====

    pub fn snapshot(&self) -> ShapeSnapshot {
        ShapeSnapshot {
            kind: self.kind.clone(),
            layout: self.layout.clone(),
            finished: self.finished,
            rotation_center: self.rotation_center,
            rotation_angle: self.rotation_angle,
        }
    }

    pub fn restore(&mut self, snapshot: ShapeSnapshot) {
        self.kind = snapshot.kind;
        self.layout = snapshot.layout;
        self.finished = snapshot.finished;
        self.rotation_center = snapshot.rotation_center;
        self.rotation_angle = snapshot.rotation_angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn triangle() -> Shape {
        let mut shape = Shape::new(ShapeType::Triangle);
        for p in [(0.0, 0.0), (10.0, 0.0), (5.0, 8.0)] {
            shape.push(Point::new(p.0, p.1)).unwrap();
        }
        shape
    }

    #[test]
    fn fourth_triangle_push_is_rejected() {
        let mut shape = triangle();
        assert_eq!(shape.layout_action(), LayoutAction::Finish);
        assert_eq!(
            shape.push(Point::new(1.0, 1.0)),
            Err(LayoutError::Complete)
        );
        assert_eq!(shape.layout().item_count(), 3);
    }

    #[test]
    fn finished_shape_rejects_push() {
        let mut shape = Shape::new(ShapeType::Freehand);
        shape.push(Point::ZERO).unwrap();
        shape.finish();
        assert_eq!(shape.push(Point::new(1.0, 0.0)), Err(LayoutError::Complete));
        assert_eq!(
            shape.push_section(Point::new(1.0, 0.0)),
            Err(LayoutError::Complete)
        );
    }

    #[test]
    fn sections_only_for_freehand() {
        let mut line = Shape::new(ShapeType::Line);
        line.push(Point::ZERO).unwrap();
        assert_eq!(
            line.push_section(Point::new(1.0, 1.0)),
            Err(LayoutError::SectionsNotSupported)
        );

        let mut freehand = Shape::new(ShapeType::Freehand);
        freehand.push(Point::ZERO).unwrap();
        freehand.push(Point::new(1.0, 0.0)).unwrap();
        let pos = freehand.push_section(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(pos, ItemPosition::new(1, 0));
    }

    #[test]
    fn circle_cache_follows_moves() {
        let mut shape = Shape::new(ShapeType::Circle);
        for p in [(10.0, 0.0), (0.0, 10.0), (-10.0, 0.0)] {
            shape.push(Point::new(p.0, p.1)).unwrap();
        }
        let Kind::Circle(kind) = shape.kind() else {
            panic!("expected a circle kind");
        };
        assert!((kind.circle().unwrap().radius - 10.0).abs() < 1e-9);

        shape
            .move_item(ItemPosition::item(1), Point::new(0.0, 0.0))
            .unwrap();
        let Kind::Circle(kind) = shape.kind() else {
            panic!("expected a circle kind");
        };
        // All three points now lie on the x axis
        assert!(kind.circle().is_none());
        assert!(shape.main_drawables().is_empty());
    }

    #[test]
    fn pivot_tracks_anchored_item() {
        let mut shape = triangle();
        shape.set_rotation_center(Some(PointDescriptor::Item(ItemPosition::item(1))));
        assert_eq!(shape.pivot(), Some(Point::new(10.0, 0.0)));
        shape
            .move_item(ItemPosition::item(1), Point::new(12.0, 2.0))
            .unwrap();
        assert_eq!(shape.pivot(), Some(Point::new(12.0, 2.0)));
    }

    #[test]
    fn missing_pivot_item_resolves_to_none() {
        let mut shape = triangle();
        shape.set_rotation_center(Some(PointDescriptor::Item(ItemPosition::item(7))));
        assert_eq!(shape.pivot(), None);
        assert_eq!(shape.transform(), Affine::IDENTITY);
        assert!(matches!(
            shape.point(PointDescriptor::Item(ItemPosition::item(7))),
            Err(LayoutError::ItemOutOfRange { .. })
        ));
    }

    #[test]
    fn rotation_applies_to_hits_not_layout() {
        let mut shape = Shape::new(ShapeType::Line);
        shape.push(Point::new(0.0, 0.0)).unwrap();
        shape.push(Point::new(10.0, 0.0)).unwrap();
        shape.finish();
        shape.set_rotation_center(Some(PointDescriptor::Fixed(Point::ZERO)));
        shape.rotate(Angle::from_radians(FRAC_PI_2));

        assert_eq!(shape.layout()[ItemPosition::item(1)], Point::new(10.0, 0.0));
        assert!(shape.hit_test(&HitTarget::point(Point::new(0.0, 5.0), 1.0)));
        assert!(!shape.hit_test(&HitTarget::point(Point::new(5.0, 0.0), 1.0)));
        assert_eq!(shape.main_drawables()[0].transform, shape.transform());
    }

    #[test]
    fn triangle_is_dashed_until_finished() {
        let mut shape = triangle();
        let drawables = shape.drawables();
        assert_eq!(drawables.len(), 1);
        assert!(drawables[0].is_dashed());

        shape.finish();
        let drawables = shape.drawables();
        assert_eq!(drawables.len(), 1);
        assert!(!drawables[0].is_dashed());
        assert!(shape.preliminary_drawables().is_empty());
    }

    #[test]
    fn item_at_prefers_later_sections() {
        let mut shape = Shape::new(ShapeType::Freehand);
        shape.push(Point::new(0.0, 0.0)).unwrap();
        shape.push(Point::new(1.0, 0.0)).unwrap();
        shape.push_section(Point::new(0.5, 0.0)).unwrap();
        assert_eq!(
            shape.item_at(Point::new(0.0, 0.0), 2.0),
            Some(ItemPosition::new(1, 0))
        );
        assert_eq!(
            shape.item_at(Point::new(0.9, 0.0), 0.2),
            Some(ItemPosition::new(0, 1))
        );
        assert_eq!(shape.item_at(Point::new(50.0, 0.0), 2.0), None);
    }

    #[test]
    fn restore_undoes_changes() {
        let mut shape = triangle();
        let snapshot = shape.snapshot();
        shape.set_rotation_center(Some(PointDescriptor::Fixed(Point::new(3.0, 3.0))));
        shape.rotate(Angle::from_degrees(45.0));
        shape
            .move_item(ItemPosition::item(0), Point::new(-5.0, -5.0))
            .unwrap();
        shape.restore(snapshot);
        assert_eq!(shape.rotation_center(), None);
        assert_eq!(shape.rotation_angle(), Angle::ZERO);
        assert_eq!(shape.layout()[ItemPosition::item(0)], Point::ZERO);
    }
}
