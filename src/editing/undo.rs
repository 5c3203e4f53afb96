// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Undo/redo history of reversible edits.
//!
//! An `Edit` is a command addressed by shape id. Applying it returns its
//! inverse, so the history only ever moves edits between its two stacks:
//! undo applies the top of the undo stack and pushes the inverse onto the
//! redo stack, and redo does the opposite.

use super::canvas::Canvas;
use crate::error::CanvasError;
use crate::geometry::Angle;
use crate::layout::PointDescriptor;
use crate::model::ShapeId;
use crate::settings;
use std::collections::VecDeque;

/// A reversible change to one shape
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    /// Set the pivot of a shape
    SetRotationCenter {
        shape: ShapeId,
        center: Option<PointDescriptor>,
    },
    /// Set the rotation angle of a shape
    Rotate { shape: ShapeId, angle: Angle },
}

impl Edit {
    /// The shape this edit targets
    pub fn shape(&self) -> ShapeId {
        match self {
            Edit::SetRotationCenter { shape, .. } | Edit::Rotate { shape, .. } => *shape,
        }
    }

    /// Apply the edit and return the edit that reverts it
    pub fn apply(&self, canvas: &mut Canvas) -> Result<Edit, CanvasError> {
        let id = self.shape();
        let shape = canvas
            .shape_mut(id)
            .ok_or(CanvasError::ShapeNotFound(id))?;
        let inverse = match *self {
            Edit::SetRotationCenter { center, .. } => Edit::SetRotationCenter {
                shape: id,
                center: shape.set_rotation_center(center),
            },
            Edit::Rotate { angle, .. } => Edit::Rotate {
                shape: id,
                angle: shape.rotate(angle),
            },
        };
        Ok(inverse)
    }
}

/// Undo and redo stacks with a bounded depth
#[derive(Debug, Clone)]
pub struct UndoHistory {
    undo_stack: VecDeque<Edit>,
    redo_stack: Vec<Edit>,
    max_depth: usize,
}

impl UndoHistory {
    pub fn new() -> Self {
        Self::with_depth(settings::history::DEPTH)
    }

    /// A history that keeps at most `max_depth` undo entries
    pub fn with_depth(max_depth: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Record an edit that reverts a change already applied.
    ///
    /// Clears the redo stack and drops the oldest entry past the depth.
    pub fn register(&mut self, undo: Edit) {
        self.undo_stack.push_back(undo);
        self.redo_stack.clear();
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.pop_front();
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Revert the most recent edit. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self, canvas: &mut Canvas) -> Result<bool, CanvasError> {
        let Some(edit) = self.undo_stack.pop_back() else {
            return Ok(false);
        };
        let redo = edit.apply(canvas)?;
        tracing::debug!("undo {:?}", edit);
        self.redo_stack.push(redo);
        Ok(true)
    }

    /// Reapply the most recently undone edit. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self, canvas: &mut Canvas) -> Result<bool, CanvasError> {
        let Some(edit) = self.redo_stack.pop() else {
            return Ok(false);
        };
        let undo = edit.apply(canvas)?;
        tracing::debug!("redo {:?}", edit);
        self.undo_stack.push_back(undo);
        Ok(true)
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoHistory {
    fn default() -> Self {
        Self::new()
    }
}
