// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors, a dark to light gradient
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x00, 0x00, 0x00);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);
const BASE_M: Color = Color::from_rgb8(0xd3, 0xd3, 0xd3);

// ============================================================================
// SHAPES
// ============================================================================
const SHAPE_STROKE: Color = Color::from_rgb8(0xff, 0xaa, 0x33);
const SHAPE_LINE_WIDTH: f64 = 2.0;

// Preliminary (in-progress) outlines
const PRELIMINARY_DASH: [f64; 2] = [4.0, 4.0];
const PRELIMINARY_DASH_OFFSET: f64 = 4.0;

// ============================================================================
// ROTATION HANDLES
// ============================================================================
const ROTATOR_HIGHLIGHT: Color = Color::from_rgb8(0xff, 0x00, 0x00);
const ROTATOR_PIVOT_FILL: Color = BASE_M;
const ROTATOR_OUTLINE: Color = BASE_A;
const ROTATOR_LINE_WIDTH: f64 = 1.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Default look of shape outlines
pub mod shape {
    use super::Color;
    pub const STROKE: Color = super::SHAPE_STROKE;
    pub const LINE_WIDTH: f64 = super::SHAPE_LINE_WIDTH;
    /// Neutral gray for outlines still being drawn
    pub const DIMMED: Color = super::BASE_L;
}

/// Dashed outline used before a shape is finished
pub mod preliminary {
    /// Dash pattern [dash_length, gap_length]
    pub const DASH: [f64; 2] = super::PRELIMINARY_DASH;
    /// Dash offset
    pub const DASH_OFFSET: f64 = super::PRELIMINARY_DASH_OFFSET;
}

/// Pivot handle and angle ring of the rotate tool
pub mod rotator {
    use super::Color;
    /// Fill or stroke of the handle being dragged
    pub const HIGHLIGHT: Color = super::ROTATOR_HIGHLIGHT;
    /// Pivot disc fill when idle
    pub const PIVOT_FILL: Color = super::ROTATOR_PIVOT_FILL;
    /// Outline of the pivot disc and the idle angle ring
    pub const OUTLINE: Color = super::ROTATOR_OUTLINE;
    pub const LINE_WIDTH: f64 = super::ROTATOR_LINE_WIDTH;
}
