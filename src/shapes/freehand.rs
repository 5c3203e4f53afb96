// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Freehand strokes smoothed through quadratic midpoints

use super::{ShapeKind, ShapeType};
use crate::geometry::HitTarget;
use crate::layout::{Layout, LayoutAction};
use kurbo::{Affine, BezPath, Point};

/// Any number of strokes, one section per stroke
#[derive(Debug, Clone, Copy, Default)]
pub struct FreehandKind;

/// One smoothed stroke.
///
/// Each sample contributes a quadratic segment that starts at the midpoint
/// of the two samples before it, uses the previous sample as control point,
/// and ends at the midpoint of the previous sample and itself. Indices are
/// clamped at the start of the stroke, so the first segments degenerate.
fn smooth_stroke(path: &mut BezPath, points: &[Point]) {
    for i in 0..points.len() {
        let before = points[i.saturating_sub(2)];
        let previous = points[i.saturating_sub(1)];
        path.move_to(before.midpoint(previous));
        path.quad_to(previous, previous.midpoint(points[i]));
    }
}

impl ShapeKind for FreehandKind {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Freehand
    }

    fn layout_action(&self, layout: &Layout) -> LayoutAction {
        if layout.is_empty() {
            LayoutAction::Push { finishable: false }
        } else {
            LayoutAction::ContinuousPushThenFinish
        }
    }

    fn is_editable(&self) -> bool {
        false
    }

    fn main_path(&self, layout: &Layout) -> Option<BezPath> {
        let mut path = BezPath::new();
        for section in layout.sections().iter().filter(|items| items.len() > 1) {
            smooth_stroke(&mut path, section);
        }
        (!path.elements().is_empty()).then_some(path)
    }

    fn hit_test(&self, _layout: &Layout, _transform: Affine, _target: &HitTarget) -> bool {
        false
    }
}
