// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Three-point triangle

use super::{ShapeKind, ShapeType, polyline_path, transformed_first_section};
use crate::geometry::HitTarget;
use crate::layout::{Layout, LayoutAction};
use kurbo::{Affine, BezPath};

/// A closed polyline through three items, drawn dashed while in progress
#[derive(Debug, Clone, Copy, Default)]
pub struct TriangleKind;

impl ShapeKind for TriangleKind {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    fn layout_action(&self, layout: &Layout) -> LayoutAction {
        LayoutAction::single_section(3, layout)
    }

    fn main_path(&self, layout: &Layout) -> Option<BezPath> {
        polyline_path(layout.first_section()?, true)
    }

    fn has_preliminary(&self) -> bool {
        true
    }

    fn preliminary_path(&self, layout: &Layout) -> Option<BezPath> {
        polyline_path(layout.first_section()?, true)
    }

    fn hit_test(&self, layout: &Layout, transform: Affine, target: &HitTarget) -> bool {
        let points = transformed_first_section(layout, transform);
        target.hits_polyline(&points, true)
    }
}
