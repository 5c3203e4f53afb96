// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas interaction modes

/// What the canvas is currently doing with pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionMode {
    #[default]
    Idle,
    /// Items of the selected shape are being dragged
    Editing,
    /// Whole shapes are being dragged
    Moving,
    /// A rubber-band selection is in progress
    Selecting,
    /// A drawing session is in progress
    Drawing,
    /// The rotate tool owns the gesture
    Rotating,
}

impl InteractionMode {
    /// Whether rotation handles are hidden in this mode
    pub fn hides_rotation_handles(self) -> bool {
        matches!(self, InteractionMode::Editing | InteractionMode::Moving)
    }
}
