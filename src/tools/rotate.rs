// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Rotate tool for moving the pivot and rotating the selected shape
//!
//! The tool draws two concentric handles around the pivot of the single
//! selected shape. A gesture starting inside the inner circle moves the
//! pivot, snapping it to an item of the shape when the pointer comes within
//! the selection range of one. A gesture starting inside the outer ring
//! rotates the shape so that it faces the pointer. Each completed gesture
//! registers one reversible edit.

use crate::editing::{Canvas, Edit, InteractionMode, UndoHistory};
use crate::geometry::{CircleExt, LineExt};
use crate::layout::PointDescriptor;
use crate::model::{ShapeId, ShapeSnapshot};
use crate::render::DrawTarget;
use crate::theme;
use crate::tools::{Phase, Tool, ToolId};
use kurbo::{Circle, Line, Point};

// ===== Gesture State =====

/// Which handle a gesture grabbed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    /// The inner circle, which moves the pivot
    Pivot,
    /// The ring around it, which sets the angle
    Ring,
}

/// State of the rotation gesture
#[derive(Debug, Clone, Default)]
enum Gesture {
    #[default]
    Idle,
    /// Moving the pivot of `shape`
    DraggingPivot {
        shape: ShapeId,
        snapshot: ShapeSnapshot,
    },
    /// Rotating `shape` about a pivot captured at the start
    DraggingAngle {
        shape: ShapeId,
        center: Point,
        snapshot: ShapeSnapshot,
    },
}

// ===== RotateTool Struct =====

/// The rotate tool
#[derive(Debug, Clone, Default)]
pub struct RotateTool {
    gesture: Gesture,
    /// Handle grabbed by the most recent gesture
    handle: Option<Handle>,
    /// Whether a gesture has begun and not yet ended
    active: bool,
}

impl RotateTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle grabbed by the current or most recent gesture
    pub fn handle(&self) -> Option<Handle> {
        self.handle
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    fn reset(&mut self, canvas: &mut Canvas) {
        self.gesture = Gesture::Idle;
        self.active = false;
        if canvas.mode == InteractionMode::Rotating {
            canvas.mode = InteractionMode::Idle;
        }
    }

    /// Move the pivot to the item under `location`, or to `location` itself
    fn drag_pivot(shape: ShapeId, location: Point, canvas: &mut Canvas) {
        let range = canvas.content_range();
        let Some(shape) = canvas.shape_mut(shape) else {
            tracing::warn!("Rotate tool: {} disappeared while moving pivot", shape);
            return;
        };
        let center = match shape.item_at(location, range) {
            Some(position) => PointDescriptor::Item(position),
            None => PointDescriptor::Fixed(location),
        };
        shape.set_rotation_center(Some(center));
    }

    fn drag_angle(shape: ShapeId, center: Point, location: Point, canvas: &mut Canvas) {
        let Some(shape) = canvas.shape_mut(shape) else {
            tracing::warn!("Rotate tool: {} disappeared while rotating", shape);
            return;
        };
        shape.rotate(Line::new(center, location).angle());
    }

    /// Register the reverting edit for a finished gesture, if anything
    /// changed
    fn commit(&self, canvas: &Canvas, history: Option<&mut UndoHistory>) {
        let undo = match &self.gesture {
            Gesture::Idle => return,
            Gesture::DraggingPivot { shape, snapshot } => {
                let Some(current) = canvas.shape(*shape) else {
                    return;
                };
                if current.rotation_center() == snapshot.rotation_center() {
                    return;
                }
                Edit::SetRotationCenter {
                    shape: *shape,
                    center: snapshot.rotation_center(),
                }
            }
            Gesture::DraggingAngle {
                shape, snapshot, ..
            } => {
                let Some(current) = canvas.shape(*shape) else {
                    return;
                };
                if current.rotation_angle() == snapshot.rotation_angle() {
                    return;
                }
                Edit::Rotate {
                    shape: *shape,
                    angle: snapshot.rotation_angle(),
                }
            }
        };
        match history {
            Some(history) => {
                tracing::debug!("Rotate tool: registered {:?}", undo);
                history.register(undo);
            }
            None => tracing::debug!("Rotate tool: no undo history, edit not registered"),
        }
    }
}

// ===== Tool Implementation =====

impl Tool for RotateTool {
    fn id(&self) -> ToolId {
        ToolId::Rotate
    }

    fn should_begin(&mut self, location: Point, canvas: &Canvas) -> bool {
        self.gesture = Gesture::Idle;
        self.handle = None;
        if canvas.mode.hides_rotation_handles() {
            return false;
        }
        let Some(shape) = canvas.selected_shape() else {
            return false;
        };
        let Some(center) = shape.pivot() else {
            return false;
        };

        let content = canvas.viewport.screen_to_content(location);
        let to_content = canvas.viewport.scale_factors().to_content.x;
        let range = canvas.settings.selection_range;
        let inner = Circle::new(center, range * to_content);
        let ring = Circle::new(
            center,
            (range + canvas.settings.rotation_ring_width) * to_content,
        );

        let (gesture, handle) = if inner.contains_point(content) {
            let gesture = Gesture::DraggingPivot {
                shape: shape.id(),
                snapshot: shape.snapshot(),
            };
            (gesture, Handle::Pivot)
        } else if ring.contains_point(content) {
            let gesture = Gesture::DraggingAngle {
                shape: shape.id(),
                center,
                snapshot: shape.snapshot(),
            };
            (gesture, Handle::Ring)
        } else {
            return false;
        };

        tracing::debug!("Rotate tool: grabbed {:?} of {}", handle, shape.id());
        self.gesture = gesture;
        self.handle = Some(handle);
        true
    }

    fn update(&mut self, phase: Phase, canvas: &mut Canvas, history: Option<&mut UndoHistory>) {
        match phase {
            Phase::Began { .. } => {
                if matches!(self.gesture, Gesture::Idle) {
                    return;
                }
                self.active = true;
                canvas.mode = InteractionMode::Rotating;
            }
            Phase::Moved { location } => {
                let location = canvas.viewport.screen_to_content(location);
                match self.gesture {
                    Gesture::Idle => {}
                    Gesture::DraggingPivot { shape, .. } => {
                        Self::drag_pivot(shape, location, canvas);
                    }
                    Gesture::DraggingAngle { shape, center, .. } => {
                        Self::drag_angle(shape, center, location, canvas);
                    }
                }
            }
            Phase::Ended => {
                self.commit(canvas, history);
                self.reset(canvas);
            }
        }
    }

    fn cancel(&mut self, canvas: &mut Canvas) {
        let gesture = std::mem::take(&mut self.gesture);
        let restore = match gesture {
            Gesture::Idle => None,
            Gesture::DraggingPivot { shape, snapshot }
            | Gesture::DraggingAngle {
                shape, snapshot, ..
            } => Some((shape, snapshot)),
        };
        if let Some((id, snapshot)) = restore
            && let Some(shape) = canvas.shape_mut(id)
        {
            shape.restore(snapshot);
            tracing::debug!("Rotate tool: cancelled, restored {}", id);
        }
        self.reset(canvas);
    }

    fn should_draw(&self, canvas: &Canvas) -> bool {
        if canvas.mode.hides_rotation_handles() {
            return false;
        }
        canvas
            .selected_shape()
            .is_some_and(|shape| shape.pivot().is_some())
    }

    fn draw(&self, canvas: &Canvas, target: &mut dyn DrawTarget) {
        if !self.should_draw(canvas) {
            return;
        }
        let Some(center) = canvas.selected_shape().and_then(|shape| shape.pivot()) else {
            return;
        };
        let center = canvas.viewport.to_screen(center);
        let range = canvas.settings.selection_range;
        let ring_radius = range + canvas.settings.rotation_ring_width;

        let grabbed = |handle| self.active && self.handle == Some(handle);
        let pivot_fill = if grabbed(Handle::Pivot) {
            theme::rotator::HIGHLIGHT
        } else {
            theme::rotator::PIVOT_FILL
        };
        let ring_color = if grabbed(Handle::Ring) {
            theme::rotator::HIGHLIGHT
        } else {
            theme::rotator::OUTLINE
        };

        let inner = Circle::new(center, range);
        target.fill_circle(inner, pivot_fill);
        target.stroke_circle(inner, theme::rotator::LINE_WIDTH, theme::rotator::OUTLINE);
        target.stroke_circle(
            Circle::new(center, ring_radius),
            theme::rotator::LINE_WIDTH,
            ring_color,
        );
    }
}
