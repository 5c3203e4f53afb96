// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Error types for layout and canvas operations

use crate::layout::ItemPosition;
use crate::model::ShapeId;
use thiserror::Error;

/// Errors raised while reading or mutating a shape layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// An item position does not address an existing item.
    ///
    /// Binding tables are static, so this always means a kind was
    /// authored inconsistently with its item count.
    #[error("item position {position} is out of range")]
    ItemOutOfRange { position: ItemPosition },

    /// The layout accepts no further points
    #[error("layout is complete and accepts no more points")]
    Complete,

    /// The kind does not allow a new section to be opened
    #[error("this shape kind uses a single section")]
    SectionsNotSupported,
}

/// Errors raised by canvas-level operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CanvasError {
    /// The shape was removed from the canvas
    #[error("shape {0:?} not found")]
    ShapeNotFound(ShapeId),

    /// No drawing session is in progress
    #[error("no drawing session in progress")]
    NoDrawingSession,

    /// A layout operation failed
    #[error(transparent)]
    Layout(#[from] LayoutError),
}
