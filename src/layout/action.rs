// Copyright 2025 the Pivotal Authors
// SPDX-License-Identifier: Apache-2.0

//! Item-count policy evaluated after every push

use super::Layout;

/// What a shape will accept next, given its current layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutAction {
    /// Accept one more point into the last section.
    ///
    /// `finishable` reports whether the shape could be completed now.
    Push { finishable: bool },
    /// Structurally complete; no more points are accepted
    Finish,
    /// Unlimited points per section; every drag appends, a new press opens
    /// a new section, and finishing is triggered from outside.
    ContinuousPushThenFinish,
}

impl LayoutAction {
    /// Policy for kinds that use exactly one section of `count` items
    pub fn single_section(count: usize, layout: &Layout) -> Self {
        let len = layout.first_section().map_or(0, <[_]>::len);
        if len < count {
            LayoutAction::Push { finishable: false }
        } else {
            LayoutAction::Finish
        }
    }

    /// Whether another point may be pushed
    pub fn accepts_push(self) -> bool {
        !matches!(self, LayoutAction::Finish)
    }

    /// Whether the shape may be finished right now
    pub fn can_finish(self) -> bool {
        match self {
            LayoutAction::Push { finishable } => finishable,
            LayoutAction::Finish | LayoutAction::ContinuousPushThenFinish => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn single_section_counts_items() {
        let mut layout = Layout::new();
        assert_eq!(
            LayoutAction::single_section(2, &layout),
            LayoutAction::Push { finishable: false }
        );
        layout.push(Point::ZERO);
        assert_eq!(
            LayoutAction::single_section(2, &layout),
            LayoutAction::Push { finishable: false }
        );
        layout.push(Point::ZERO);
        assert_eq!(LayoutAction::single_section(2, &layout), LayoutAction::Finish);
    }

    #[test]
    fn finish_rejects_pushes() {
        assert!(!LayoutAction::Finish.accepts_push());
        assert!(LayoutAction::ContinuousPushThenFinish.accepts_push());
        assert!(!LayoutAction::Push { finishable: false }.can_finish());
        assert!(LayoutAction::Push { finishable: true }.can_finish());
    }
}
