// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Tool system for shape editing
//!
//! A tool receives pointer phases in view coordinates and edits the canvas.
//! `ToolBox` wraps the concrete tools and dispatches by `match`.

use crate::editing::{Canvas, UndoHistory};
use crate::render::DrawTarget;
use crate::shapes::ShapeType;
use kurbo::Point;

// ===== Tool Identifier =====

/// Tool identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolId {
    /// Draw new shapes of one kind
    Draw,
    /// Move the pivot and rotate the selected shape
    Rotate,
}

// ===== Pointer Phase =====

/// Stage of a pointer gesture, locations in view coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Began { location: Point },
    Moved { location: Point },
    Ended,
}

// ===== Tool Trait =====

/// A tool that edits shapes on a canvas
pub trait Tool {
    /// Get the tool identifier
    fn id(&self) -> ToolId;

    /// Whether the tool takes a gesture starting at `location`
    fn should_begin(&mut self, location: Point, canvas: &Canvas) -> bool;

    /// Advance the current gesture.
    ///
    /// Tools that make reversible changes register them in `history`
    /// when one is given.
    fn update(&mut self, phase: Phase, canvas: &mut Canvas, history: Option<&mut UndoHistory>);

    /// Abandon the current gesture and revert its changes
    fn cancel(&mut self, canvas: &mut Canvas);

    /// Whether the tool has overlays to draw
    fn should_draw(&self, _canvas: &Canvas) -> bool {
        false
    }

    /// Draw tool overlays in view coordinates
    fn draw(&self, _canvas: &Canvas, _target: &mut dyn DrawTarget) {}
}

// ===== ToolBox Enum =====

/// Enum wrapping all tool types
#[derive(Debug, Clone)]
pub enum ToolBox {
    Draw(draw::DrawTool),
    Rotate(rotate::RotateTool),
}

// ===== ToolBox Implementation =====

impl ToolBox {
    /// Create a drawing tool for one shape kind
    pub fn draw(shape_type: ShapeType) -> Self {
        ToolBox::Draw(draw::DrawTool::new(shape_type))
    }

    /// Create a tool by ID
    pub fn for_id(id: ToolId) -> Self {
        match id {
            ToolId::Draw => ToolBox::Draw(draw::DrawTool::default()),
            ToolId::Rotate => ToolBox::Rotate(rotate::RotateTool::default()),
        }
    }

    fn as_tool(&self) -> &dyn Tool {
        match self {
            ToolBox::Draw(tool) => tool,
            ToolBox::Rotate(tool) => tool,
        }
    }

    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            ToolBox::Draw(tool) => tool,
            ToolBox::Rotate(tool) => tool,
        }
    }
}

impl Tool for ToolBox {
    fn id(&self) -> ToolId {
        self.as_tool().id()
    }

    fn should_begin(&mut self, location: Point, canvas: &Canvas) -> bool {
        self.as_tool_mut().should_begin(location, canvas)
    }

    fn update(&mut self, phase: Phase, canvas: &mut Canvas, history: Option<&mut UndoHistory>) {
        self.as_tool_mut().update(phase, canvas, history);
    }

    fn cancel(&mut self, canvas: &mut Canvas) {
        self.as_tool_mut().cancel(canvas);
    }

    fn should_draw(&self, canvas: &Canvas) -> bool {
        self.as_tool().should_draw(canvas)
    }

    fn draw(&self, canvas: &Canvas, target: &mut dyn DrawTarget) {
        self.as_tool().draw(canvas, target);
    }
}

// ===== Tool Modules =====

pub mod draw;
pub mod rotate;

pub use rotate::RotateTool;
