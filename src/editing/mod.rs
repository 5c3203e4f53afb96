// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model and interaction

pub mod canvas;
pub mod mode;
pub mod selection;
pub mod undo;
pub mod viewport;

pub use canvas::Canvas;
pub use mode::InteractionMode;
pub use selection::Selection;
pub use undo::{Edit, UndoHistory};
pub use viewport::{ScaleFactors, ViewPort};
