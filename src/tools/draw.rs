// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Draw tool for placing new shapes
//!
//! Every press places an item of the shape being drawn and drags move it.
//! Dragging off the first item places the second, so a line or rectangle
//! can be drawn in one gesture. Releases let the canvas commit the shape
//! once its kind is complete.
//! Freehand shapes stay open until `finish` is called.

use crate::editing::{Canvas, UndoHistory};
use crate::shapes::ShapeType;
use crate::tools::{Phase, Tool, ToolId};
use kurbo::Point;

/// The draw tool - places items for one shape kind
#[derive(Debug, Clone)]
pub struct DrawTool {
    shape_type: ShapeType,
    /// Whether a press is in progress
    pressed: bool,
}

impl Default for DrawTool {
    fn default() -> Self {
        Self::new(ShapeType::Line)
    }
}

impl DrawTool {
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            pressed: false,
        }
    }

    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    /// Switch kinds; an unfinished shape is finished or discarded first
    pub fn set_shape_type(&mut self, shape_type: ShapeType, canvas: &mut Canvas) {
        if canvas.is_drawing() {
            canvas.finish_drawing();
        }
        self.shape_type = shape_type;
    }

    /// Commit the shape in progress, if it can be finished
    pub fn finish(&mut self, canvas: &mut Canvas) {
        self.pressed = false;
        if let Some(id) = canvas.finish_drawing() {
            tracing::debug!("Draw tool: finished {}", id);
        }
    }
}

impl Tool for DrawTool {
    fn id(&self) -> ToolId {
        ToolId::Draw
    }

    fn should_begin(&mut self, _location: Point, _canvas: &Canvas) -> bool {
        true
    }

    fn update(&mut self, phase: Phase, canvas: &mut Canvas, _history: Option<&mut UndoHistory>) {
        match phase {
            Phase::Began { location } => {
                if !canvas.is_drawing() {
                    canvas.start_drawing(self.shape_type);
                }
                let content = canvas.viewport.screen_to_content(location);
                match canvas.press(content) {
                    Ok(position) => {
                        self.pressed = true;
                        tracing::debug!("Draw tool: placed {} at {:?}", position, content);
                    }
                    Err(err) => tracing::warn!("Draw tool: press rejected: {}", err),
                }
            }
            Phase::Moved { location } => {
                if !self.pressed {
                    return;
                }
                let content = canvas.viewport.screen_to_content(location);
                if let Err(err) = canvas.drag(content) {
                    tracing::warn!("Draw tool: drag rejected: {}", err);
                }
            }
            Phase::Ended => {
                if !std::mem::take(&mut self.pressed) {
                    return;
                }
                match canvas.release() {
                    Ok(Some(id)) => tracing::debug!("Draw tool: created {}", id),
                    Ok(None) => {}
                    Err(err) => tracing::warn!("Draw tool: release rejected: {}", err),
                }
            }
        }
    }

    fn cancel(&mut self, canvas: &mut Canvas) {
        self.pressed = false;
        canvas.cancel_drawing();
        tracing::debug!("Draw tool: cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editing::InteractionMode;
    use kurbo::Vec2;

    fn click(tool: &mut DrawTool, canvas: &mut Canvas, location: Point) {
        tool.update(Phase::Began { location }, canvas, None);
        tool.update(Phase::Ended, canvas, None);
    }

    #[test]
    fn two_clicks_make_a_line() {
        let mut canvas = Canvas::default();
        let mut tool = DrawTool::new(ShapeType::Line);
        click(&mut tool, &mut canvas, Point::new(0.0, 0.0));
        assert!(canvas.is_drawing());
        click(&mut tool, &mut canvas, Point::new(10.0, 0.0));
        assert!(!canvas.is_drawing());
        assert_eq!(canvas.shapes().len(), 1);
        assert_eq!(canvas.mode, InteractionMode::Idle);
    }

    #[test]
    fn pointer_is_converted_to_content() {
        let mut canvas = Canvas::default();
        canvas.viewport.zoom = 2.0;
        canvas.viewport.offset = Vec2::new(10.0, 10.0);
        let mut tool = DrawTool::new(ShapeType::Line);
        click(&mut tool, &mut canvas, Point::new(10.0, 10.0));
        click(&mut tool, &mut canvas, Point::new(30.0, 10.0));
        let shape = &canvas.shapes()[0];
        let items = shape.layout().first_section().unwrap();
        assert_eq!(items, &[Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);
    }

    #[test]
    fn single_gesture_draws_a_rectangle() {
        let mut canvas = Canvas::default();
        let mut tool = DrawTool::new(ShapeType::Rectangle);
        tool.update(Phase::Began { location: Point::ZERO }, &mut canvas, None);
        for location in [Point::new(20.0, 10.0), Point::new(50.0, 40.0)] {
            tool.update(Phase::Moved { location }, &mut canvas, None);
        }
        tool.update(Phase::Ended, &mut canvas, None);

        assert!(!canvas.is_drawing());
        assert_eq!(canvas.shapes().len(), 1);
        let layout = canvas.shapes()[0].layout();
        assert_eq!(layout.item_count(), 8);
        assert_eq!(layout.first_section().unwrap()[4], Point::new(50.0, 40.0));
        assert_eq!(layout.first_section().unwrap()[2], Point::new(50.0, 0.0));
    }

    #[test]
    fn freehand_needs_explicit_finish() {
        let mut canvas = Canvas::default();
        let mut tool = DrawTool::new(ShapeType::Freehand);
        tool.update(Phase::Began { location: Point::ZERO }, &mut canvas, None);
        for x in 1..5 {
            let location = Point::new(x as f64, 0.0);
            tool.update(Phase::Moved { location }, &mut canvas, None);
        }
        tool.update(Phase::Ended, &mut canvas, None);
        assert!(canvas.is_drawing());

        tool.finish(&mut canvas);
        assert_eq!(canvas.shapes().len(), 1);
        assert_eq!(canvas.shapes()[0].layout().item_count(), 5);
    }

    #[test]
    fn cancel_discards() {
        let mut canvas = Canvas::default();
        let mut tool = DrawTool::new(ShapeType::Triangle);
        click(&mut tool, &mut canvas, Point::ZERO);
        tool.cancel(&mut canvas);
        assert!(!canvas.is_drawing());
        assert!(canvas.shapes().is_empty());
    }
}
