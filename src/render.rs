// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Renderable output and the drawing-context seam.
//!
//! Shapes describe what to draw as `Drawable`s; the host rasterizes them.
//! Overlays such as the rotation handles draw through `DrawTarget`, which
//! hosts implement for their canvas. `DrawList` is a recording target.

use kurbo::{Affine, BezPath, Circle, Stroke};
use peniko::Color;

/// A stroked path in content coordinates
#[derive(Debug, Clone)]
pub struct Drawable {
    pub path: BezPath,
    pub stroke: Stroke,
    pub color: Color,
    /// Transform from shape-local to content coordinates (the rotation)
    pub transform: Affine,
}

impl Drawable {
    /// A solid stroke of `path`
    pub fn solid(path: BezPath, width: f64, color: Color) -> Self {
        Self {
            path,
            stroke: Stroke::new(width),
            color,
            transform: Affine::IDENTITY,
        }
    }

    /// A dashed stroke of `path`
    pub fn dashed(path: BezPath, width: f64, color: Color, offset: f64, dashes: [f64; 2]) -> Self {
        Self {
            path,
            stroke: Stroke::new(width).with_dashes(offset, dashes),
            color,
            transform: Affine::IDENTITY,
        }
    }

    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = transform;
        self
    }

    /// Whether the stroke uses a dash pattern
    pub fn is_dashed(&self) -> bool {
        !self.stroke.dash_pattern.is_empty()
    }
}

/// A drawing context (view coordinates)
pub trait DrawTarget {
    fn fill_circle(&mut self, circle: Circle, color: Color);

    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Color);

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color);

    /// Stroke a drawable, mapping content to view through `view`
    fn draw_drawable(&mut self, drawable: &Drawable, view: Affine) {
        let path = view * drawable.transform * drawable.path.clone();
        self.stroke_path(&path, &drawable.stroke, drawable.color);
    }
}

/// A recorded drawing command
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillCircle { circle: Circle, color: Color },
    StrokeCircle { circle: Circle, width: f64, color: Color },
    StrokePath { path: BezPath, stroke: Stroke, color: Color },
}

/// A `DrawTarget` that records commands in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawTarget for DrawList {
    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::FillCircle { circle, color });
    }

    fn stroke_circle(&mut self, circle: Circle, width: f64, color: Color) {
        self.commands.push(DrawCommand::StrokeCircle { circle, width, color });
    }

    fn stroke_path(&mut self, path: &BezPath, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            color,
        });
    }
}
