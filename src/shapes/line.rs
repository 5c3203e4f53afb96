// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Two-point line segment

use super::{ShapeKind, ShapeType, polyline_path, transformed_first_section};
use crate::geometry::HitTarget;
use crate::layout::{Layout, LayoutAction};
use kurbo::{Affine, BezPath, Line};

/// A straight segment between two items
#[derive(Debug, Clone, Copy, Default)]
pub struct LineKind;

impl ShapeKind for LineKind {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
    }

    fn layout_action(&self, layout: &Layout) -> LayoutAction {
        LayoutAction::single_section(2, layout)
    }

    fn main_path(&self, layout: &Layout) -> Option<BezPath> {
        polyline_path(layout.first_section()?, false)
    }

    fn hit_test(&self, layout: &Layout, transform: Affine, target: &HitTarget) -> bool {
        match transformed_first_section(layout, transform).as_slice() {
            [p0, p1] => target.hits_segment(Line::new(*p0, *p1)),
            _ => false,
        }
    }
}
