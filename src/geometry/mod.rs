// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry primitives built on kurbo.
//!
//! Points, vectors, lines, circles and affine transforms come from
//! `kurbo`. This module adds what shapes need on top: normalized angles,
//! circle fitting through three points, and region hit testing.

pub mod angle;
pub mod circle;
pub mod hit;
pub mod line;

pub use angle::Angle;
pub use circle::{CircleExt, circumscribed};
pub use hit::HitTarget;
pub use line::LineExt;
