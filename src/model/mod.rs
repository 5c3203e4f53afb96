// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape data model

pub mod shape;
pub mod shape_id;

pub use shape::{Shape, ShapeSnapshot, ShapeStyle};
pub use shape_id::ShapeId;
