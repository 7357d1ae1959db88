//! Placement resolution: turns a [`RowPlan`] into absolute coordinates.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::Range;

use crate::geometry::{ContentBounds, Placement};
use crate::planner::{Row, RowPlan};

/// Result of a layout pass.
///
/// `placements` is index-aligned with the input components. Coordinates are
/// relative to the content area's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLayout {
    /// Bounds the layout was computed for.
    pub bounds: ContentBounds,
    /// Header placement, at the top-left corner, if a header was given.
    pub header: Option<Placement>,
    /// One placement per input component, in input order.
    pub placements: Vec<Placement>,
    /// Input index range of each row, top to bottom.
    pub rows: Vec<Range<usize>>,
    /// Total height consumed, including the bottom margin.
    pub content_height: f32,
    /// Widest extent of any row, including the right margin of flush rows.
    pub content_width: f32,
}

impl FlowLayout {
    /// Whether a fixed-height content area is too short for the content.
    ///
    /// Always `false` for unbounded heights.
    pub fn exceeds_bounds(&self) -> bool {
        self.bounds.height.is_some_and(|h| self.content_height > h)
    }

    /// Number of body components placed.
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// Whether no body components were placed.
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// Row number holding the component at `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows.iter().position(|r| r.contains(&index))
    }
}

/// Prefix-sum a plan into placements.
///
/// Running `y` starts below the header and adds each row's gap above plus the
/// previous row's height; running `x` starts at the row's start offset and
/// adds each member's gap plus the previous member's width. Rows cover
/// contiguous input ranges, so pushing in row order yields input order.
pub fn resolve(plan: RowPlan) -> FlowLayout {
    let header = plan.header.map(|size| Placement::new(0.0, 0.0, size));
    let count = plan.rows.iter().map(|r| r.members.len()).sum();

    let mut placements = Vec::with_capacity(count);
    let mut y = header.map_or(0.0, |h| h.height);
    let mut content_width = header.map_or(0.0, |h| h.width);

    for row in &plan.rows {
        y += row.gap_above;
        let mut x = row.start_x;
        for member in &row.members {
            debug_assert_eq!(member.index, placements.len());
            x += member.gap_before;
            placements.push(Placement::new(x, y, member.size));
            x += member.size.width;
        }
        content_width = content_width.max(row.end_x() + row.trailing.unwrap_or(0.0));
        y += row.height;
    }

    FlowLayout {
        bounds: plan.bounds,
        header,
        placements,
        rows: plan.rows.iter().map(Row::range).collect(),
        content_height: y + plan.bottom_margin,
        content_width,
    }
}
