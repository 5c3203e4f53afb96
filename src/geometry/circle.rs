// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Circle fitting and containment

use kurbo::{Circle, Point};

/// Below this absolute cross product three points count as collinear.
const COLLINEAR_EPSILON: f64 = 1e-9;

/// The circle passing through three points.
///
/// Returns `None` when the points are collinear (including coincident
/// points), since no finite circle passes through them.
pub fn circumscribed(a: Point, b: Point, c: Point) -> Option<Circle> {
    let d = 2.0 * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y));
    if d.abs() < COLLINEAR_EPSILON {
        return None;
    }

    let a2 = a.to_vec2().hypot2();
    let b2 = b.to_vec2().hypot2();
    let c2 = c.to_vec2().hypot2();

    let center = Point::new(
        (a2 * (b.y - c.y) + b2 * (c.y - a.y) + c2 * (a.y - b.y)) / d,
        (a2 * (c.x - b.x) + b2 * (a.x - c.x) + c2 * (b.x - a.x)) / d,
    );
    Some(Circle::new(center, center.distance(a)))
}

/// Containment tests that avoid square roots
pub trait CircleExt {
    /// Whether `point` lies inside or on the circle
    fn contains_point(&self, point: Point) -> bool;

    /// Whether `point` lies within `range` of the circle's outline
    fn outline_within(&self, point: Point, range: f64) -> bool;
}

impl CircleExt for Circle {
    fn contains_point(&self, point: Point) -> bool {
        (point - self.center).hypot2() <= self.radius * self.radius
    }

    fn outline_within(&self, point: Point, range: f64) -> bool {
        let d2 = (point - self.center).hypot2();
        let outer = self.radius + range;
        let inner = (self.radius - range).max(0.0);
        d2 <= outer * outer && d2 >= inner * inner
    }
}
