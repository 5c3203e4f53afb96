// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Region hit testing for outlines.
//!
//! A `HitTarget` is either a point pick with a tolerance (a click) or a
//! rectangle (a rubber-band selection). Shape kinds describe their outline
//! as segments, polylines or circles and ask the target whether it touches
//! them. Every predicate compares squared distances.

use super::circle::CircleExt;
use super::line::LineExt;
use kurbo::{Circle, Line, Point, Rect};

/// The region a hit test is performed against
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitTarget {
    /// A point with a pick tolerance (content units)
    Point { location: Point, range: f64 },
    /// An axis-aligned selection rectangle (content units)
    Rect(Rect),
}

impl HitTarget {
    /// A point pick
    pub fn point(location: Point, range: f64) -> Self {
        HitTarget::Point { location, range }
    }

    /// A rectangle selection, normalized so min <= max
    pub fn rect(rect: Rect) -> Self {
        HitTarget::Rect(rect.abs())
    }

    /// Whether the target touches a single point
    pub fn hits_point(&self, point: Point) -> bool {
        match *self {
            HitTarget::Point { location, range } => {
                (point - location).hypot2() <= range * range
            }
            HitTarget::Rect(rect) => rect_contains(rect, point),
        }
    }

    /// Whether the target touches a line segment
    pub fn hits_segment(&self, segment: Line) -> bool {
        match *self {
            HitTarget::Point { location, range } => {
                segment.distance_sq_to(location) <= range * range
            }
            HitTarget::Rect(rect) => segment_meets_rect(segment, rect),
        }
    }

    /// Whether the target touches any edge of the polyline through `points`
    pub fn hits_polyline(&self, points: &[Point], closed: bool) -> bool {
        match points {
            [] => false,
            [only] => self.hits_point(*only),
            _ => {
                let open = points.windows(2).any(|w| self.hits_segment(Line::new(w[0], w[1])));
                open || (closed && {
                    let first = points[0];
                    let last = points[points.len() - 1];
                    self.hits_segment(Line::new(last, first))
                })
            }
        }
    }

    /// Whether the target touches the outline of `circle`
    pub fn hits_circle_outline(&self, circle: Circle) -> bool {
        match *self {
            HitTarget::Point { location, range } => circle.outline_within(location, range),
            HitTarget::Rect(rect) => {
                let r2 = circle.radius * circle.radius;
                let c = circle.center;
                // Closest and farthest points of the rect from the center
                let near = Point::new(c.x.clamp(rect.x0, rect.x1), c.y.clamp(rect.y0, rect.y1));
                let far_x = if (c.x - rect.x0).abs() > (c.x - rect.x1).abs() { rect.x0 } else { rect.x1 };
                let far_y = if (c.y - rect.y0).abs() > (c.y - rect.y1).abs() { rect.y0 } else { rect.y1 };
                let near_d2 = (near - c).hypot2();
                let far_d2 = (Point::new(far_x, far_y) - c).hypot2();
                near_d2 <= r2 && far_d2 >= r2
            }
        }
    }
}

fn rect_contains(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Liang–Barsky clip of a segment against a rectangle
fn segment_meets_rect(segment: Line, rect: Rect) -> bool {
    let d = segment.p1 - segment.p0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-d.x, segment.p0.x - rect.x0),
        (d.x, rect.x1 - segment.p0.x),
        (-d.y, segment.p0.y - rect.y0),
        (d.y, rect.y1 - segment.p0.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return false;
        }
    }
    true
}
