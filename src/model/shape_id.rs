// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Unique identifiers for shapes on a canvas.
//!
//! Each `ShapeId` is a monotonically increasing `u64` generated from a
//! global atomic counter. Undo entries and the selection refer to shapes by
//! id, so an id is never reused within a session and an entry that outlives
//! its shape fails cleanly instead of touching a different one.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

static SHAPE_COUNTER: AtomicU64 = AtomicU64::new(1);

impl ShapeId {
    /// Create a new unique shape ID
    pub fn next() -> Self {
        Self(SHAPE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ShapeId {
    fn default() -> Self {
        Self::next()
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "shape#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_increasing() {
        let a = ShapeId::next();
        let b = ShapeId::next();
        assert_ne!(a, b);
        assert!(b > a);
    }
}
