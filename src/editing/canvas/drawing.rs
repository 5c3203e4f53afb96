// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing sessions and rendering for Canvas

use super::{Canvas, DrawingSession};
use crate::editing::mode::InteractionMode;
use crate::error::CanvasError;
use crate::layout::{ItemPosition, LayoutAction, PointDescriptor};
use crate::model::{Shape, ShapeId};
use crate::render::{DrawTarget, Drawable};
use crate::shapes::ShapeType;
use kurbo::Point;

impl Canvas {
    // ===== Drawing Sessions =====

    /// Begin drawing a new shape, discarding any unfinished one
    pub fn start_drawing(&mut self, shape_type: ShapeType) {
        if self.drawing.is_some() {
            self.cancel_drawing();
        }
        tracing::debug!("start drawing {:?}", shape_type);
        self.drawing = Some(DrawingSession {
            shape: Shape::new(shape_type),
            handle: None,
        });
        self.mode = InteractionMode::Drawing;
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing.is_some()
    }

    /// The shape being drawn
    pub fn drawing_shape(&self) -> Option<&Shape> {
        self.drawing.as_ref().map(|session| &session.shape)
    }

    /// Place a point. Kinds with continuous sections start a new section.
    ///
    /// Returns the item that follows the pointer until release.
    pub fn press(&mut self, point: Point) -> Result<ItemPosition, CanvasError> {
        let session = self.drawing.as_mut().ok_or(CanvasError::NoDrawingSession)?;
        let position = match session.shape.layout_action() {
            LayoutAction::ContinuousPushThenFinish => session.shape.push_section(point)?,
            _ => session.shape.push(point)?,
        };
        session.handle = Some(position);
        Ok(position)
    }

    /// Follow the pointer with the last placed item.
    ///
    /// Dragging away from the very first item places the second one, so a
    /// single press-drag spans a line or a rectangle. Continuous kinds
    /// append the point instead.
    pub fn drag(&mut self, point: Point) -> Result<(), CanvasError> {
        let session = self.drawing.as_mut().ok_or(CanvasError::NoDrawingSession)?;
        if session.shape.layout_action() == LayoutAction::ContinuousPushThenFinish {
            session.handle = Some(session.shape.push(point)?);
            return Ok(());
        }
        let Some(handle) = session.handle else {
            tracing::debug!("drag without a placed item ignored");
            return Ok(());
        };
        let layout = session.shape.layout();
        if layout.item_count() == 1 {
            if layout.get(handle) == Some(point) {
                return Ok(());
            }
            let position = session.shape.push(point)?;
            tracing::debug!("drag placed {} at {:?}", position, point);
            session.handle = Some(position);
        } else {
            session.shape.move_item(handle, point)?;
        }
        Ok(())
    }

    /// End the current press. Completes the shape when its kind accepts
    /// no more points.
    pub fn release(&mut self) -> Result<Option<ShapeId>, CanvasError> {
        let session = self.drawing.as_mut().ok_or(CanvasError::NoDrawingSession)?;
        session.handle = None;
        if session.shape.layout_action() == LayoutAction::Finish {
            return Ok(self.finish_drawing());
        }
        Ok(None)
    }

    /// Commit the shape being drawn if it can be finished, discard it
    /// otherwise.
    ///
    /// Editable shapes get their pivot anchored to their first item.
    pub fn finish_drawing(&mut self) -> Option<ShapeId> {
        let session = self.drawing.take()?;
        self.mode = InteractionMode::Idle;

        let mut shape = session.shape;
        if !shape.can_finish() {
            tracing::debug!("discarding unfinished {:?}", shape.shape_type());
            return None;
        }
        shape.finish();
        if shape.is_editable() {
            shape.set_rotation_center(Some(PointDescriptor::Item(ItemPosition::ZERO)));
        }
        let id = shape.id();
        tracing::info!(
            "committed {:?} {} with {} item(s)",
            shape.shape_type(),
            id,
            shape.layout().item_count()
        );
        self.shapes.push(shape);
        Some(id)
    }

    /// Discard the shape being drawn
    pub fn cancel_drawing(&mut self) {
        if let Some(session) = self.drawing.take() {
            tracing::debug!("cancelled drawing {:?}", session.shape.shape_type());
        }
        if self.mode == InteractionMode::Drawing {
            self.mode = InteractionMode::Idle;
        }
    }

    // ===== Rendering =====

    /// Everything to draw, in paint order, in content coordinates
    pub fn drawables(&self) -> Vec<Drawable> {
        self.shapes
            .iter()
            .chain(self.drawing_shape())
            .flat_map(Shape::drawables)
            .collect()
    }

    /// Draw all shapes into a view-space target
    pub fn draw(&self, target: &mut impl DrawTarget) {
        let view = self.viewport.affine();
        for drawable in self.drawables() {
            target.draw_drawable(&drawable, view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::render::DrawList;

    #[test]
    fn press_without_session_fails() {
        let mut canvas = Canvas::default();
        assert_eq!(
            canvas.press(Point::ZERO),
            Err(CanvasError::NoDrawingSession)
        );
        assert_eq!(canvas.drag(Point::ZERO), Err(CanvasError::NoDrawingSession));
    }

    #[test]
    fn rectangle_drag_resizes_before_commit() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Rectangle);
        assert_eq!(canvas.mode, InteractionMode::Drawing);
        canvas.press(Point::new(0.0, 0.0)).unwrap();
        canvas.release().unwrap();
        let handle = canvas.press(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(handle, ItemPosition::item(4));
        canvas.drag(Point::new(10.0, 20.0)).unwrap();
        let id = canvas.release().unwrap().unwrap();

        let shape = canvas.shape(id).unwrap();
        assert!(shape.is_finished());
        assert_eq!(shape.layout()[ItemPosition::item(2)], Point::new(10.0, 0.0));
        assert_eq!(shape.layout()[ItemPosition::item(6)], Point::new(0.0, 20.0));
        assert_eq!(
            shape.rotation_center(),
            Some(PointDescriptor::Item(ItemPosition::ZERO))
        );
        assert_eq!(canvas.mode, InteractionMode::Idle);
        assert!(!canvas.is_drawing());
    }

    #[test]
    fn one_drag_spans_a_rectangle() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Rectangle);
        canvas.press(Point::new(0.0, 0.0)).unwrap();
        canvas.drag(Point::new(3.0, 4.0)).unwrap();
        assert_eq!(canvas.drawing_shape().unwrap().layout().item_count(), 8);
        canvas.drag(Point::new(10.0, 20.0)).unwrap();
        let id = canvas.release().unwrap().unwrap();

        let layout = canvas.shape(id).unwrap().layout();
        assert_eq!(layout[ItemPosition::ZERO], Point::new(0.0, 0.0));
        assert_eq!(layout[ItemPosition::item(2)], Point::new(10.0, 0.0));
        assert_eq!(layout[ItemPosition::item(4)], Point::new(10.0, 20.0));
        assert_eq!(layout[ItemPosition::item(6)], Point::new(0.0, 20.0));
        assert_eq!(layout[ItemPosition::item(7)], Point::new(0.0, 10.0));
        assert!(!canvas.is_drawing());
    }

    #[test]
    fn drag_in_place_keeps_single_item() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Line);
        canvas.press(Point::new(2.0, 2.0)).unwrap();
        canvas.drag(Point::new(2.0, 2.0)).unwrap();
        assert_eq!(canvas.drawing_shape().unwrap().layout().item_count(), 1);
        assert_eq!(canvas.release().unwrap(), None);

        canvas.press(Point::new(8.0, 2.0)).unwrap();
        canvas.drag(Point::new(9.0, 3.0)).unwrap();
        let id = canvas.release().unwrap().unwrap();
        let layout = canvas.shape(id).unwrap().layout();
        assert_eq!(
            layout.first_section(),
            Some(&[Point::new(2.0, 2.0), Point::new(9.0, 3.0)][..])
        );
    }

    #[test]
    fn freehand_drag_appends_and_press_opens_section() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Freehand);
        canvas.press(Point::new(0.0, 0.0)).unwrap();
        canvas.drag(Point::new(1.0, 0.0)).unwrap();
        canvas.drag(Point::new(2.0, 1.0)).unwrap();
        assert_eq!(canvas.release().unwrap(), None);
        let second = canvas.press(Point::new(10.0, 10.0)).unwrap();
        assert_eq!(second, ItemPosition::new(1, 0));
        canvas.drag(Point::new(11.0, 10.0)).unwrap();

        let id = canvas.finish_drawing().unwrap();
        let shape = canvas.shape(id).unwrap();
        assert_eq!(shape.layout().sections().len(), 2);
        assert_eq!(shape.layout().item_count(), 5);
        // Freehand shapes are not editable and get no pivot
        assert_eq!(shape.rotation_center(), None);
    }

    #[test]
    fn unfinishable_shape_is_discarded() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Triangle);
        canvas.press(Point::new(0.0, 0.0)).unwrap();
        canvas.press(Point::new(10.0, 0.0)).unwrap();
        assert_eq!(canvas.finish_drawing(), None);
        assert!(canvas.shapes().is_empty());
        assert_eq!(canvas.mode, InteractionMode::Idle);
    }

    #[test]
    fn triangle_commits_on_third_release() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Triangle);
        for p in [(0.0, 0.0), (10.0, 0.0)] {
            canvas.press(Point::new(p.0, p.1)).unwrap();
            assert_eq!(canvas.release().unwrap(), None);
        }
        canvas.press(Point::new(5.0, 8.0)).unwrap();
        // Still in the session until release
        assert_eq!(
            canvas.press(Point::new(1.0, 1.0)),
            Err(CanvasError::Layout(LayoutError::Complete))
        );
        assert!(canvas.release().unwrap().is_some());
        assert_eq!(canvas.shapes().len(), 1);
    }

    #[test]
    fn cancel_discards_and_goes_idle() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Line);
        canvas.press(Point::ZERO).unwrap();
        canvas.cancel_drawing();
        assert!(!canvas.is_drawing());
        assert!(canvas.shapes().is_empty());
        assert_eq!(canvas.mode, InteractionMode::Idle);
    }

    #[test]
    fn draw_includes_shape_in_progress() {
        let mut canvas = Canvas::default();
        canvas.start_drawing(ShapeType::Line);
        canvas.press(Point::ZERO).unwrap();
        canvas.release().unwrap();
        canvas.press(Point::new(10.0, 0.0)).unwrap();
        canvas.release().unwrap();
        canvas.start_drawing(ShapeType::Triangle);
        canvas.press(Point::ZERO).unwrap();
        canvas.press(Point::new(10.0, 0.0)).unwrap();

        let drawables = canvas.drawables();
        assert_eq!(drawables.len(), 2);
        assert!(!drawables[0].is_dashed());
        assert!(drawables[1].is_dashed());

        let mut list = DrawList::new();
        canvas.draw(&mut list);
        assert_eq!(list.len(), 2);
    }
}
