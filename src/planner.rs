//! Row flow planning.
//!
//! A single forward pass over the components groups them into rows and
//! records every gap the policy asks for. Nothing is positioned absolutely
//! here; the [`resolver`](crate::resolver) turns the resulting [`RowPlan`]
//! into placements.
//!
//! ```text
//!     ┌──────────────── content width ────────────────┐
//!     │          gap_above (Top / header / vertical)  │
//!     │ leading ┌───┐ gap ┌─────┐ gap ┌───┐ trailing  │
//!     │◄───────►│ 0 │◄───►│  1  │◄───►│ 2 │◄─────────►│  flush row
//!     │         └───┘     └─────┘     └───┘           │
//!     │          gap_above (vertical)                 │
//!     │            ┌───────────┐                      │
//!     │            │     3     │                      │  centered row
//!     │            └───────────┘                      │
//!     │          bottom_margin                        │
//!     └───────────────────────────────────────────────┘
//! ```

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::Range;

use log::{debug, trace, warn};

use crate::geometry::{ComponentBox, ContentBounds, Size};
use crate::policy::{ContentEdge, LayoutPolicy};

/// One component on a planned row.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowMember {
    /// Index of the component in the input sequence.
    pub index: usize,
    /// The component's intrinsic size.
    pub size: Size,
    /// Horizontal gap to the previous member. Zero for the first member.
    pub gap_before: f32,
}

/// A run of consecutive components sharing one vertical offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    /// Members in input order. Never empty.
    pub members: Vec<RowMember>,
    /// Vertical gap between the previous row (or header, or top edge) and this
    /// row. On the first row without a header, the largest top edge margin of
    /// its members.
    pub gap_above: f32,
    /// Left edge margin of the first member.
    pub leading: f32,
    /// Horizontal offset of the first member: `leading`, or the centering
    /// offset. Reduced below `leading` when the row would otherwise cross the
    /// right boundary.
    pub start_x: f32,
    /// Sum of member widths and the gaps between them.
    pub content_width: f32,
    /// Tallest member.
    pub height: f32,
    /// Whether the row is horizontally centered.
    pub centered: bool,
    /// Right edge margin of the last member, present only when the row is
    /// flush against the right boundary. Never larger than the space left
    /// between the row and that boundary.
    pub trailing: Option<f32>,
}

impl Row {
    /// Input indices covered by this row.
    pub fn range(&self) -> Range<usize> {
        let first = self.members[0].index;
        first..first + self.members.len()
    }

    /// Right edge of the last member.
    pub fn end_x(&self) -> f32 {
        self.start_x + self.content_width
    }
}

/// Output of [`plan`]: rows in top-to-bottom order plus the spacing that
/// belongs to the content area rather than to a single row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPlan {
    /// Bounds the plan was computed for.
    pub bounds: ContentBounds,
    /// Header size, if a header sits above the body.
    pub header: Option<Size>,
    /// Planned rows.
    pub rows: Vec<Row>,
    /// Space below the last row (largest bottom edge margin on that row).
    pub bottom_margin: f32,
}

/// Row being accumulated.
struct OpenRow {
    members: Vec<RowMember>,
    gap_above: f32,
    leading: f32,
    /// Right edge so far, measured from the left boundary including `leading`.
    right: f32,
    height: f32,
    /// A following component asked to join but did not fit.
    overflowed: bool,
}

impl OpenRow {
    fn start(index: usize, size: Size, gap_above: f32, leading: f32) -> Self {
        let mut members = Vec::with_capacity(4);
        members.push(RowMember {
            index,
            size,
            gap_before: 0.0,
        });
        Self {
            members,
            gap_above,
            leading,
            right: leading + size.width,
            height: size.height,
            overflowed: false,
        }
    }

    fn push(&mut self, index: usize, size: Size, gap: f32) {
        self.members.push(RowMember {
            index,
            size,
            gap_before: gap,
        });
        // Same association as the resolver's running x.
        self.right = self.right + gap + size.width;
        self.height = self.height.max(size.height);
    }

    fn last_index(&self) -> usize {
        self.members[self.members.len() - 1].index
    }

    fn close<P: LayoutPolicy + ?Sized>(
        self,
        policy: &P,
        components: &[ComponentBox],
        width: f32,
    ) -> Row {
        let first = &components[self.members[0].index];
        let centered = policy.should_center(&first.traits);
        for member in &self.members[1..] {
            if policy.should_center(&components[member.index].traits) != centered {
                debug!(
                    "row starting at {} has conflicting centering; first component decides ({centered})",
                    self.members[0].index
                );
                break;
            }
        }

        let content_width = self.right - self.leading;
        let flush = self.overflowed || self.right >= width;
        // A left margin never pushes a box past the right boundary; a box
        // wider than the content area starts at zero.
        let start_x = if centered {
            ((width - content_width) / 2.0).max(0.0)
        } else {
            self.leading.min((width - content_width).max(0.0))
        };
        // The right margin only fills space left inside the boundary.
        let room = (width - (start_x + content_width)).max(0.0);
        let trailing = flush.then(|| {
            let last = &components[self.last_index()];
            clamp_margin(
                policy.edge_margin(&last.traits, ContentEdge::Right),
                "edge_margin(Right)",
            )
            .min(room)
        });

        trace!(
            "row {:?}: start_x={start_x} width={content_width} height={} gap_above={} trailing={trailing:?}",
            self.members[0].index..self.last_index() + 1,
            self.height,
            self.gap_above
        );

        Row {
            members: self.members,
            gap_above: self.gap_above,
            leading: self.leading,
            start_x,
            content_width,
            height: self.height,
            centered,
            trailing,
        }
    }
}

/// Group components into rows and collect every margin from `policy`.
///
/// `should_follow_horizontally` is asked exactly once per component, always
/// against the component immediately before it in input order. A component
/// that declines to follow starts a new row even when space remains; one that
/// wants to follow but does not fit starts a new row too. A component wider
/// than the content width sits alone on its row.
///
/// Inputs are assumed valid; [`FlowEngine::layout`](crate::FlowEngine::layout)
/// checks them before planning.
pub fn plan<P: LayoutPolicy + ?Sized>(
    policy: &P,
    bounds: ContentBounds,
    header: Option<&ComponentBox>,
    components: &[ComponentBox],
) -> RowPlan {
    let width = bounds.width;
    let mut rows: Vec<Row> = Vec::new();
    let mut open: Option<OpenRow> = None;

    for (index, component) in components.iter().enumerate() {
        let preceding = index.checked_sub(1).map(|i| &components[i]);
        let follows =
            policy.should_follow_horizontally(&component.traits, preceding.map(|p| &p.traits));

        if follows && let (Some(row), Some(preceding)) = (open.as_mut(), preceding) {
            let gap = clamp_margin(
                policy.horizontal_margin(&component.traits, &preceding.traits),
                "horizontal_margin",
            );
            if row.right + gap + component.size.width <= width {
                trace!("component {index} follows with gap {gap}");
                row.push(index, component.size, gap);
                if rows.is_empty() && header.is_none() {
                    let top = clamp_margin(
                        policy.edge_margin(&component.traits, ContentEdge::Top),
                        "edge_margin(Top)",
                    );
                    row.gap_above = row.gap_above.max(top);
                }
                continue;
            }
            trace!("component {index} wants to follow but does not fit");
            row.overflowed = true;
        }

        let gap_above = match open.take() {
            Some(row) => {
                let above = &components[row.last_index()];
                rows.push(row.close(policy, components, width));
                clamp_margin(
                    policy.vertical_margin(&component.traits, &above.traits),
                    "vertical_margin",
                )
            }
            None => match header {
                Some(header) => clamp_margin(
                    policy.header_margin(&component.traits, &header.traits),
                    "header_margin",
                ),
                None => clamp_margin(
                    policy.edge_margin(&component.traits, ContentEdge::Top),
                    "edge_margin(Top)",
                ),
            },
        };
        let leading = clamp_margin(
            policy.edge_margin(&component.traits, ContentEdge::Left),
            "edge_margin(Left)",
        );
        if component.size.width > width {
            warn!(
                "component {index} ({} wide) exceeds content width {width}; placing it alone",
                component.size.width
            );
        } else if leading + component.size.width > width {
            debug!("component {index} cannot take its full left margin {leading}");
        }
        open = Some(OpenRow::start(index, component.size, gap_above, leading));
    }

    let mut bottom_margin = 0.0f32;
    if let Some(row) = open {
        for member in &row.members {
            let margin = clamp_margin(
                policy.edge_margin(&components[member.index].traits, ContentEdge::Bottom),
                "edge_margin(Bottom)",
            );
            bottom_margin = bottom_margin.max(margin);
        }
        rows.push(row.close(policy, components, width));
    }

    debug!(
        "planned {} components into {} rows (width {width})",
        components.len(),
        rows.len()
    );

    RowPlan {
        bounds,
        header: header.map(|h| h.size),
        rows,
        bottom_margin,
    }
}

/// Negative and non-finite margins become zero: policy margins may never
/// make components overlap.
fn clamp_margin(margin: f32, query: &str) -> f32 {
    if margin.is_finite() && margin >= 0.0 {
        margin
    } else {
        warn!("{query} returned {margin}; using 0");
        0.0
    }
}
