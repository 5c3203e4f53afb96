// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Viewport transformation between view (screen) and content coordinates

use kurbo::{Affine, Point, Vec2};

/// Per-axis scale factors between the two coordinate spaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    /// Multiply a view length by this to get a content length
    pub to_content: Vec2,
    /// Multiply a content length by this to get a view length
    pub to_view: Vec2,
}

/// Pan and zoom of the canvas.
///
/// `view = content * zoom + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPort {
    pub offset: Vec2,
    pub zoom: f64,
}

impl ViewPort {
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }

    /// Content to view transform
    pub fn affine(&self) -> Affine {
        Affine::translate(self.offset) * Affine::scale(self.zoom)
    }

    /// Convert a view point to content coordinates
    pub fn screen_to_content(&self, point: Point) -> Point {
        self.affine().inverse() * point
    }

    /// Convert a content point to view coordinates
    pub fn to_screen(&self, point: Point) -> Point {
        self.affine() * point
    }

    pub fn scale_factors(&self) -> ScaleFactors {
        ScaleFactors {
            to_content: Vec2::new(1.0 / self.zoom, 1.0 / self.zoom),
            to_view: Vec2::new(self.zoom, self.zoom),
        }
    }
}

impl Default for ViewPort {
    fn default() -> Self {
        Self::new()
    }
}
