// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Constraint propagation between layout items.
//!
//! A shape kind declares a static table of `BindingRule`s. When the source
//! item of a rule moves by `(dx, dy)`, each bound target moves by
//! `(offset.x * dx, offset.y * dy)`.
//!
//! Propagation is one level deep: a target that moves because of a binding
//! does not trigger its own rules. Bindings under one source are applied in
//! table order, and tables must keep their targets disjoint so that order
//! never matters. A binding may target the source itself, typically with an
//! offset such as `(-1, 0)` that cancels an axis the base move applied.

use crate::error::LayoutError;
use crate::layout::{ItemPosition, Layout};
use kurbo::{Point, Vec2};

/// Moves `target` by a per-axis fraction of the source's displacement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemBinding {
    pub target: ItemPosition,
    /// Fraction of the source displacement applied on each axis, in [-1, 1]
    pub offset: Vec2,
}

impl ItemBinding {
    pub const fn new(target: ItemPosition, x: f64, y: f64) -> Self {
        Self {
            target,
            offset: Vec2::new(x, y),
        }
    }

    /// Displacement this binding applies for a source displacement
    pub fn displacement(&self, delta: Vec2) -> Vec2 {
        Vec2::new(self.offset.x * delta.x, self.offset.y * delta.y)
    }
}

/// All bindings driven by one source item
#[derive(Debug, Clone, Copy)]
pub struct BindingRule {
    pub source: ItemPosition,
    pub bindings: &'static [ItemBinding],
}

/// Bindings registered under `source`, empty when there are none
pub fn bindings_for(table: &[BindingRule], source: ItemPosition) -> &'static [ItemBinding] {
    table
        .iter()
        .find(|rule| rule.source == source)
        .map(|rule| rule.bindings)
        .unwrap_or(&[])
}

/// Fail if any binding of `source` targets an item `layout` lacks
fn check_targets(
    layout: &Layout,
    source: ItemPosition,
    bindings: &[ItemBinding],
) -> Result<(), LayoutError> {
    match bindings.iter().find(|binding| !layout.contains(binding.target)) {
        Some(binding) => {
            let err = LayoutError::ItemOutOfRange {
                position: binding.target,
            };
            tracing::error!("binding from {} targets a missing item: {}", source, err);
            Err(err)
        }
        None => Ok(()),
    }
}

/// Apply the bindings of `source` for a displacement of `delta`.
///
/// Every target is checked first; on error the layout is untouched.
/// Returns how many bindings were applied.
pub fn propagate(
    layout: &mut Layout,
    table: &[BindingRule],
    source: ItemPosition,
    delta: Vec2,
) -> Result<usize, LayoutError> {
    let bindings = bindings_for(table, source);
    check_targets(layout, source, bindings)?;
    for binding in bindings {
        layout.translate_item(binding.target, binding.displacement(delta))?;
    }
    Ok(bindings.len())
}

/// Move `position` to `to` and re-derive its dependents.
///
/// Returns the displacement of the primary item. Nothing moves when the
/// item or any of its targets is missing.
pub fn move_item(
    layout: &mut Layout,
    table: &[BindingRule],
    position: ItemPosition,
    to: Point,
) -> Result<Vec2, LayoutError> {
    let delta = to - layout.item(position)?;
    if delta == Vec2::ZERO {
        return Ok(delta);
    }
    check_targets(layout, position, bindings_for(table, position))?;
    layout.set_item(position, to)?;
    propagate(layout, table, position, delta)?;
    Ok(delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ItemPosition = ItemPosition::item(0);
    const B: ItemPosition = ItemPosition::item(1);
    const C: ItemPosition = ItemPosition::item(2);

    static TABLE: &[BindingRule] = &[
        BindingRule {
            source: A,
            bindings: &[ItemBinding::new(B, 0.5, 1.0), ItemBinding::new(A, 0.0, -1.0)],
        },
        BindingRule {
            source: B,
            bindings: &[ItemBinding::new(C, 1.0, 1.0)],
        },
    ];

    fn layout() -> Layout {
        Layout::from_sections(vec![vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(20.0, 0.0),
        ]])
    }

    #[test]
    fn bound_item_moves_by_fraction() {
        let mut layout = layout();
        let delta = move_item(&mut layout, TABLE, A, Point::new(4.0, 6.0)).unwrap();
        assert_eq!(delta, Vec2::new(4.0, 6.0));
        assert_eq!(layout[B], Point::new(12.0, 6.0));
    }

    #[test]
    fn self_binding_cancels_an_axis() {
        let mut layout = layout();
        move_item(&mut layout, TABLE, A, Point::new(4.0, 6.0)).unwrap();
        assert_eq!(layout[A], Point::new(4.0, 0.0));
    }

    #[test]
    fn propagation_is_one_level_only() {
        let mut layout = layout();
        move_item(&mut layout, TABLE, A, Point::new(4.0, 6.0)).unwrap();
        // B moved, but B's own rule must not fire
        assert_eq!(layout[C], Point::new(20.0, 0.0));
    }

    #[test]
    fn unbound_item_moves_alone() {
        let mut layout = layout();
        move_item(&mut layout, TABLE, C, Point::new(21.0, 1.0)).unwrap();
        assert_eq!(layout[A], Point::new(0.0, 0.0));
        assert_eq!(layout[B], Point::new(10.0, 0.0));
    }

    #[test]
    fn missing_target_is_reported() {
        let mut short = Layout::from_sections(vec![vec![Point::ZERO]]);
        let err = move_item(&mut short, TABLE, A, Point::new(1.0, 1.0)).unwrap_err();
        assert_eq!(err, LayoutError::ItemOutOfRange { position: B });
        assert_eq!(short[A], Point::ZERO);
    }

    #[test]
    fn failed_propagation_leaves_layout_unchanged() {
        static LATE_MISS: &[BindingRule] = &[BindingRule {
            source: A,
            bindings: &[ItemBinding::new(B, 1.0, 1.0), ItemBinding::new(C, 1.0, 1.0)],
        }];
        let mut two = Layout::from_sections(vec![vec![Point::ZERO, Point::new(10.0, 0.0)]]);
        let before = two.clone();
        let err = move_item(&mut two, LATE_MISS, A, Point::new(3.0, 4.0)).unwrap_err();
        assert_eq!(err, LayoutError::ItemOutOfRange { position: C });
        assert_eq!(two, before);

        let err = propagate(&mut two, LATE_MISS, A, Vec2::new(1.0, 1.0)).unwrap_err();
        assert_eq!(err, LayoutError::ItemOutOfRange { position: C });
        assert_eq!(two, before);
    }
}
