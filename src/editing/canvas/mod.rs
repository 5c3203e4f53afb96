// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Canvas - owns the shapes and the state needed to edit them

mod drawing;
mod hit_testing;

use super::mode::InteractionMode;
use super::selection::Selection;
use super::viewport::ViewPort;
use crate::layout::ItemPosition;
use crate::model::{Shape, ShapeId};
use crate::settings::EditorSettings;

/// An in-progress shape and the item following the pointer
#[derive(Debug, Clone)]
pub(crate) struct DrawingSession {
    shape: Shape,
    handle: Option<ItemPosition>,
}

/// Editing surface holding every committed shape.
///
/// Shapes are kept in paint order; later shapes are drawn on top and win
/// hit tests. The shape being drawn lives in the drawing session until it
/// is committed.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,

    /// Currently selected shapes
    pub selection: Selection,

    /// What pointer input is currently doing
    pub mode: InteractionMode,

    /// Viewport transformation
    pub viewport: ViewPort,

    /// Pick tolerances and history depth
    pub settings: EditorSettings,

    drawing: Option<DrawingSession>,
}

impl Canvas {
    pub fn new(settings: EditorSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// Committed shapes in paint order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    // ===== Selection =====

    /// Make `id` the only selected shape. Returns false if it does not
    /// exist.
    pub fn select(&mut self, id: ShapeId) -> bool {
        if self.shape(id).is_none() {
            tracing::warn!("cannot select missing {}", id);
            return false;
        }
        self.selection.clear();
        self.selection.insert(id);
        true
    }

    pub fn deselect_all(&mut self) {
        self.selection.clear();
    }

    /// The selected shape when exactly one is selected
    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.single().and_then(|id| self.shape(id))
    }

    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        let id = self.selection.single()?;
        self.shape_mut(id)
    }

    /// Remove every selected shape, returning them in paint order
    pub fn remove_selected(&mut self) -> Vec<Shape> {
        let selection = std::mem::take(&mut self.selection);
        let (removed, kept): (Vec<Shape>, Vec<Shape>) = std::mem::take(&mut self.shapes)
            .into_iter()
            .partition(|shape| selection.contains(shape.id()));
        self.shapes = kept;
        tracing::debug!("removed {} shape(s)", removed.len());
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::ShapeType;
    use kurbo::Point;

    fn draw_line(canvas: &mut Canvas, from: Point, to: Point) -> ShapeId {
        canvas.start_drawing(ShapeType::Line);
        canvas.press(from).unwrap();
        canvas.release().unwrap();
        canvas.press(to).unwrap();
        canvas.release().unwrap().unwrap()
    }

    #[test]
    fn select_replaces_selection() {
        let mut canvas = Canvas::default();
        let a = draw_line(&mut canvas, Point::ZERO, Point::new(10.0, 0.0));
        let b = draw_line(&mut canvas, Point::ZERO, Point::new(0.0, 10.0));
        assert!(canvas.select(a));
        assert!(canvas.select(b));
        assert_eq!(canvas.selected_shape().map(Shape::id), Some(b));
        assert!(!canvas.select(ShapeId::next()));
    }

    #[test]
    fn multiple_selection_has_no_single_shape() {
        let mut canvas = Canvas::default();
        let a = draw_line(&mut canvas, Point::ZERO, Point::new(10.0, 0.0));
        let b = draw_line(&mut canvas, Point::ZERO, Point::new(0.0, 10.0));
        canvas.selection.insert(a);
        canvas.selection.insert(b);
        assert!(canvas.selected_shape().is_none());
        canvas.deselect_all();
        assert!(canvas.selection.is_empty());
    }

    #[test]
    fn remove_selected_keeps_order_of_rest() {
        let mut canvas = Canvas::default();
        let a = draw_line(&mut canvas, Point::ZERO, Point::new(10.0, 0.0));
        let b = draw_line(&mut canvas, Point::ZERO, Point::new(0.0, 10.0));
        let c = draw_line(&mut canvas, Point::ZERO, Point::new(5.0, 5.0));
        canvas.select(b);
        let removed = canvas.remove_selected();
        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id(), b);
        let ids: Vec<_> = canvas.shapes().iter().map(Shape::id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(canvas.selection.is_empty());
    }
}
