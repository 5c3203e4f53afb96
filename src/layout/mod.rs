// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Shape layout: ordered sections of control points.
//!
//! A `Layout` is the canonical state a shape renders from. Items are
//! addressed structurally by `ItemPosition`, which stays meaningful only
//! while the section and index it names exist. Reads and writes through an
//! out-of-range position are errors; nothing is clamped.

mod action;

pub use action::LayoutAction;

use crate::error::LayoutError;
use kurbo::{Affine, Point, Vec2};
use std::fmt;
use std::ops::Index;

/// Structural address of an item inside a layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ItemPosition {
    pub section: usize,
    pub item: usize,
}

impl ItemPosition {
    /// The first item of the first section
    pub const ZERO: ItemPosition = ItemPosition::new(0, 0);

    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }

    /// Item `item` of section 0
    pub const fn item(item: usize) -> Self {
        Self::new(0, item)
    }
}

impl fmt::Display for ItemPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.section, self.item)
    }
}

/// A point that is either literal or tracks a layout item.
///
/// Anchored descriptors are resolved against the owning shape's layout on
/// every read, so they follow the item as it moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointDescriptor {
    /// An absolute point in content coordinates
    Fixed(Point),
    /// The current value of a layout item
    Item(ItemPosition),
}

/// Ordered sections of control points
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    sections: Vec<Vec<Point>>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a layout from explicit sections
    pub fn from_sections(sections: Vec<Vec<Point>>) -> Self {
        Self { sections }
    }

    /// True when the layout has no sections
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[Vec<Point>] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&[Point]> {
        self.sections.get(index).map(Vec::as_slice)
    }

    pub fn first_section(&self) -> Option<&[Point]> {
        self.section(0)
    }

    pub fn last_section(&self) -> Option<&[Point]> {
        self.sections.last().map(Vec::as_slice)
    }

    /// Total number of items across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(Vec::len).sum()
    }

    /// Append a point to the last section, opening the first section if
    /// the layout is empty.
    pub fn push(&mut self, point: Point) -> ItemPosition {
        if self.sections.is_empty() {
            self.sections.push(Vec::new());
        }
        let section = self.sections.len() - 1;
        let items = &mut self.sections[section];
        items.push(point);
        ItemPosition::new(section, items.len() - 1)
    }

    /// Open a new section holding `point`
    pub fn push_section(&mut self, point: Point) -> ItemPosition {
        self.sections.push(vec![point]);
        ItemPosition::new(self.sections.len() - 1, 0)
    }

    pub fn contains(&self, position: ItemPosition) -> bool {
        self.get(position).is_some()
    }

    pub fn get(&self, position: ItemPosition) -> Option<Point> {
        self.sections
            .get(position.section)
            .and_then(|items| items.get(position.item))
            .copied()
    }

    /// Read an item, failing for positions that do not exist
    pub fn item(&self, position: ItemPosition) -> Result<Point, LayoutError> {
        self.get(position)
            .ok_or(LayoutError::ItemOutOfRange { position })
    }

    /// Overwrite an item, returning its previous value
    pub fn set_item(&mut self, position: ItemPosition, point: Point) -> Result<Point, LayoutError> {
        let slot = self.slot_mut(position)?;
        Ok(std::mem::replace(slot, point))
    }

    /// Move an item by `delta`
    pub fn translate_item(&mut self, position: ItemPosition, delta: Vec2) -> Result<(), LayoutError> {
        let slot = self.slot_mut(position)?;
        *slot += delta;
        Ok(())
    }

    /// Iterate over every item with its position, in section order
    pub fn positions(&self) -> impl Iterator<Item = (ItemPosition, Point)> + '_ {
        self.sections.iter().enumerate().flat_map(|(s, items)| {
            items
                .iter()
                .enumerate()
                .map(move |(i, &p)| (ItemPosition::new(s, i), p))
        })
    }

    /// A copy of this layout with every item mapped through `transform`
    pub fn transformed(&self, transform: Affine) -> Layout {
        Layout {
            sections: self
                .sections
                .iter()
                .map(|items| items.iter().map(|&p| transform * p).collect())
                .collect(),
        }
    }

    fn slot_mut(&mut self, position: ItemPosition) -> Result<&mut Point, LayoutError> {
        self.sections
            .get_mut(position.section)
            .and_then(|items| items.get_mut(position.item))
            .ok_or(LayoutError::ItemOutOfRange { position })
    }
}

impl Index<ItemPosition> for Layout {
    type Output = Point;

    fn index(&self, position: ItemPosition) -> &Point {
        match self
            .sections
            .get(position.section)
            .and_then(|items| items.get(position.item))
        {
            Some(point) => point,
            None => panic!("item position {position} is out of range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_opens_first_section() {
        let mut layout = Layout::new();
        assert!(layout.is_empty());
        let pos = layout.push(Point::new(1.0, 2.0));
        assert_eq!(pos, ItemPosition::ZERO);
        assert_eq!(layout.sections().len(), 1);
        assert_eq!(layout[pos], Point::new(1.0, 2.0));
    }

    #[test]
    fn push_section_starts_new_stroke() {
        let mut layout = Layout::new();
        layout.push(Point::new(0.0, 0.0));
        layout.push(Point::new(1.0, 0.0));
        let pos = layout.push_section(Point::new(5.0, 5.0));
        assert_eq!(pos, ItemPosition::new(1, 0));
        let next = layout.push(Point::new(6.0, 5.0));
        assert_eq!(next, ItemPosition::new(1, 1));
        assert_eq!(layout.item_count(), 4);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let mut layout = Layout::new();
        layout.push(Point::ZERO);
        let bad = ItemPosition::new(0, 3);
        assert_eq!(layout.item(bad), Err(LayoutError::ItemOutOfRange { position: bad }));
        assert!(layout.set_item(bad, Point::ZERO).is_err());
        assert!(layout.translate_item(ItemPosition::new(2, 0), Vec2::ZERO).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn indexing_out_of_range_panics() {
        let layout = Layout::new();
        let _ = layout[ItemPosition::ZERO];
    }

    #[test]
    fn set_item_returns_previous() {
        let mut layout = Layout::new();
        let pos = layout.push(Point::new(1.0, 1.0));
        let old = layout.set_item(pos, Point::new(2.0, 2.0)).unwrap();
        assert_eq!(old, Point::new(1.0, 1.0));
        assert_eq!(layout[pos], Point::new(2.0, 2.0));
    }

    #[test]
    fn positions_walk_in_section_order() {
        let layout = Layout::from_sections(vec![
            vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)],
            vec![Point::new(2.0, 0.0)],
        ]);
        let positions: Vec<_> = layout.positions().map(|(pos, _)| pos).collect();
        assert_eq!(
            positions,
            vec![ItemPosition::new(0, 0), ItemPosition::new(0, 1), ItemPosition::new(1, 0)]
        );
    }

    #[test]
    fn transformed_maps_every_item() {
        let layout = Layout::from_sections(vec![vec![Point::new(1.0, 0.0)]]);
        let moved = layout.transformed(Affine::translate((3.0, 4.0)));
        assert_eq!(moved[ItemPosition::ZERO], Point::new(4.0, 4.0));
        assert_eq!(layout[ItemPosition::ZERO], Point::new(1.0, 0.0));
    }
}
