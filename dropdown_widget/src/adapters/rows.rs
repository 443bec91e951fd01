// Copyright 2026 the Dropdown Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer resolution for a panel of fixed-height rows.
//!
//! Hosts without a DOM can describe the open panel as a rectangle split into equal rows and
//! let [`RowLayout::hit`] turn pointer positions into [`PointerHit`]s for
//! [`DropdownEvent::Click`](crate::DropdownEvent::Click) and
//! [`DropdownEvent::MouseOver`](crate::DropdownEvent::MouseOver).

use kurbo::{Point, Rect};

use crate::PointerHit;

/// Layout of an open options panel: `len` rows of `row_height`, stacked from the top of
/// `panel`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    /// Panel bounds in the host's coordinate space.
    pub panel: Rect,
    /// Height of each option row; must be positive for rows to be hit.
    pub row_height: f64,
    /// Number of option rows.
    pub len: usize,
}

impl RowLayout {
    /// Create a layout.
    #[must_use]
    pub const fn new(panel: Rect, row_height: f64, len: usize) -> Self {
        Self {
            panel,
            row_height,
            len,
        }
    }

    /// Resolve `point` into a pointer hit.
    ///
    /// Points outside the panel are [`PointerHit::outside`]. Inside, the row under the point
    /// is reported; points below the last row resolve to the last row.
    #[must_use]
    pub fn hit(&self, point: Point) -> PointerHit {
        if !self.panel.contains(point) {
            return PointerHit::outside();
        }
        PointerHit::panel(self.index_at(point.y))
    }

    /// Row index at vertical position `y`, clamped to the rows; `None` without rows or with a
    /// non-positive row height.
    #[must_use]
    pub fn index_at(&self, y: f64) -> Option<usize> {
        if self.len == 0 || self.row_height.is_nan() || self.row_height <= 0.0 {
            return None;
        }
        let offset = (y - self.panel.y0).max(0.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Offset is non-negative and the index is clamped right after the cast"
        )]
        let index = (offset / self.row_height) as usize;
        Some(index.min(self.len - 1))
    }

    /// Bounds of the row at `index`.
    #[must_use]
    pub fn row_rect(&self, index: usize) -> Option<Rect> {
        if index >= self.len {
            return None;
        }
        #[allow(
            clippy::cast_precision_loss,
            reason = "Row counts stay far below the range where f64 loses integer precision"
        )]
        let top = self.panel.y0 + index as f64 * self.row_height;
        Some(Rect::new(
            self.panel.x0,
            top,
            self.panel.x1,
            top + self.row_height,
        ))
    }
}
