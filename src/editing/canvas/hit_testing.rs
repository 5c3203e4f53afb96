// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Hit testing methods for Canvas

use super::Canvas;
use crate::geometry::HitTarget;
use crate::model::ShapeId;
use kurbo::{Point, Rect};

impl Canvas {
    /// Pick tolerance converted to content units
    pub fn content_range(&self) -> f64 {
        self.settings.selection_range * self.viewport.scale_factors().to_content.x
    }

    /// Topmost shape touched by `target` (content coordinates)
    pub fn shape_at(&self, target: &HitTarget) -> Option<ShapeId> {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.hit_test(target))
            .map(|shape| shape.id())
    }

    /// Topmost shape under a view-space point
    pub fn shape_at_view(&self, screen_pos: Point) -> Option<ShapeId> {
        let location = self.viewport.screen_to_content(screen_pos);
        let target = HitTarget::point(location, self.content_range());
        let hit = self.shape_at(&target);
        tracing::debug!("[shape_at_view] {:?} -> {:?}", location, hit);
        hit
    }

    /// Every shape touched by a view-space rectangle, in paint order
    pub fn shapes_in_view_rect(&self, rect: Rect) -> Vec<ShapeId> {
        let p0 = self.viewport.screen_to_content(Point::new(rect.x0, rect.y0));
        let p1 = self.viewport.screen_to_content(Point::new(rect.x1, rect.y1));
        let target = HitTarget::rect(Rect::from_points(p0, p1));
        self.shapes
            .iter()
            .filter(|shape| shape.hit_test(&target))
            .map(|shape| shape.id())
            .collect()
    }
}
