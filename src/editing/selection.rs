// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Selection set for tracking which shapes are selected.
//!
//! `Selection` wraps an `Arc<BTreeSet<ShapeId>>` so it can be cheaply
//! cloned into snapshots. Mutations copy on write via `Arc::make_mut`. The
//! `BTreeSet` keeps iteration in creation order of the ids.

use crate::model::ShapeId;
use std::collections::BTreeSet;
use std::sync::Arc;

/// A set of selected shapes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    inner: Arc<BTreeSet<ShapeId>>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.inner.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeId> + '_ {
        self.inner.iter().copied()
    }

    /// The selected shape when exactly one is selected
    pub fn single(&self) -> Option<ShapeId> {
        match self.len() {
            1 => self.iter().next(),
            _ => None,
        }
    }

    pub fn insert(&mut self, id: ShapeId) {
        Arc::make_mut(&mut self.inner).insert(id);
    }

    pub fn remove(&mut self, id: ShapeId) {
        if self.contains(id) {
            Arc::make_mut(&mut self.inner).remove(&id);
        }
    }

    pub fn clear(&mut self) {
        if !self.is_empty() {
            self.inner = Arc::default();
        }
    }
}
