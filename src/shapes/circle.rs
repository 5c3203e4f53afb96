// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Circle through three boundary points

use super::{ShapeKind, ShapeType};
use crate::geometry::{HitTarget, circumscribed};
use crate::layout::{Layout, LayoutAction};
use crate::settings;
use kurbo::{Affine, BezPath, Circle, Shape};

/// A circle fitted through three items.
///
/// The fit is cached after every layout change. Collinear items have no
/// fit, and the shape then draws and hits nothing.
#[derive(Debug, Clone, Default)]
pub struct CircleKind {
    circle: Option<Circle>,
}

impl CircleKind {
    /// The cached fit, in shape-local coordinates
    pub fn circle(&self) -> Option<Circle> {
        self.circle
    }
}

impl ShapeKind for CircleKind {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn layout_action(&self, layout: &Layout) -> LayoutAction {
        LayoutAction::single_section(3, layout)
    }

    fn layout_did_update(&mut self, layout: &Layout) {
        self.circle = match layout.first_section() {
            Some(&[a, b, c]) => circumscribed(a, b, c),
            _ => None,
        };
    }

    fn main_path(&self, _layout: &Layout) -> Option<BezPath> {
        self.circle
            .map(|circle| circle.to_path(settings::path::CIRCLE_TOLERANCE))
    }

    fn hit_test(&self, _layout: &Layout, transform: Affine, target: &HitTarget) -> bool {
        let Some(circle) = self.circle else {
            return false;
        };
        // Rotations move the center only
        let placed = Circle::new(transform * circle.center, circle.radius);
        target.hits_circle_outline(placed)
    }
}
