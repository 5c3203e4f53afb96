// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Signed deltas and angles for `kurbo::Line`

use super::Angle;
use kurbo::{Line, ParamCurveNearest, Point};

/// Extra queries on a line segment
pub trait LineExt {
    /// Signed horizontal extent (`p1.x - p0.x`)
    fn dx(&self) -> f64;

    /// Signed vertical extent (`p1.y - p0.y`)
    fn dy(&self) -> f64;

    /// Direction of the line, `atan2(dy, dx)` wrapped into `(-π, π]`
    fn angle(&self) -> Angle;

    /// Squared distance from `point` to the closest point of the segment
    fn distance_sq_to(&self, point: Point) -> f64;
}

impl LineExt for Line {
    fn dx(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    fn dy(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    fn angle(&self) -> Angle {
        Angle::from_radians(self.dy().atan2(self.dx()))
    }

    fn distance_sq_to(&self, point: Point) -> f64 {
        // Lines are solved exactly; accuracy is ignored.
        self.nearest(point, 1e-9).distance_sq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;
    use std::f64::consts::PI;

    #[test]
    fn signed_deltas() {
        let line = Line::new((10.0, 5.0), (4.0, 9.0));
        assert_eq!(line.dx(), -6.0);
        assert_eq!(line.dy(), 4.0);
    }

    #[test]
    fn angle_is_translation_invariant() {
        let line = Line::new((1.0, 2.0), (-3.0, 7.5));
        let shift = Vec2::new(120.0, -45.0);
        let moved = Line::new(line.p0 + shift, line.p1 + shift);
        assert!(line.angle().approx_eq(moved.angle(), 1e-12));
    }

    #[test]
    fn angle_points_along_axes() {
        let up = Line::new((0.0, 0.0), (0.0, 5.0));
        assert!((up.angle().radians() - PI / 2.0).abs() < 1e-12);
        let back = Line::new((0.0, 0.0), (-5.0, -0.0));
        assert_eq!(back.angle().radians(), PI);
    }

    #[test]
    fn distance_to_segment_clamps_at_endpoints() {
        let line = Line::new((0.0, 0.0), (10.0, 0.0));
        assert!((line.distance_sq_to(Point::new(5.0, 3.0)) - 9.0).abs() < 1e-9);
        assert!((line.distance_sq_to(Point::new(13.0, 4.0)) - 25.0).abs() < 1e-9);
    }
}
