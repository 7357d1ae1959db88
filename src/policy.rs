//! The layout policy contract and a ready-made trait-driven policy.
//!
//! The engine never decides a margin or a row break on its own: every
//! spacing and flow decision is a query against a [`LayoutPolicy`] supplied
//! by the host application.
//!
//! # Statelessness
//!
//! Policies answer through `&self` and must be pure functions of their
//! arguments: the same trait sets always produce the same answers, within a
//! pass and across passes. One policy may be shared by any number of
//! concurrent layout passes. A policy that caches must do so behind
//! synchronized interior mutability, and the cache must never change an
//! answer.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use crate::traits::{LayoutTrait, TraitSet};

/// A boundary of the content area.
///
/// Content edges map 1:1 to content insets: the top edge usually sits under a
/// navigation bar, the bottom edge above a tab bar or at the screen edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ContentEdge {
    /// Top boundary.
    Top,
    /// Right boundary.
    Right,
    /// Bottom boundary.
    Bottom,
    /// Left boundary.
    Left,
}

impl ContentEdge {
    /// All four edges, clockwise from the top.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// Answers layout questions about trait sets.
///
/// Margins are absolute distances in points. Each adjacent pair is queried at
/// most once, so a margin between two components is the full gap, not a half
/// to be doubled. Negative or non-finite margins are treated as zero by the
/// engine.
pub trait LayoutPolicy {
    /// Margin between a component and a content edge it touches.
    ///
    /// Left and right margins give way when honoring them would push a row
    /// past the right boundary.
    fn edge_margin(&self, traits: &TraitSet, edge: ContentEdge) -> f32;

    /// Vertical gap between a header and a component on the first body row.
    fn header_margin(&self, traits: &TraitSet, header_traits: &TraitSet) -> f32;

    /// Gap between a component and the component to its left.
    fn horizontal_margin(&self, traits: &TraitSet, preceding: &TraitSet) -> f32;

    /// Gap between a component and the component stacked above it.
    fn vertical_margin(&self, traits: &TraitSet, preceding: &TraitSet) -> f32;

    /// Whether a component should share a row with the component before it.
    ///
    /// `preceding` is `None` for the first component of the body, where the
    /// answer says whether the component is row-initiating; it starts a new
    /// row either way.
    fn should_follow_horizontally(&self, traits: &TraitSet, preceding: Option<&TraitSet>) -> bool;

    /// Whether the row anchored by this component should be centered.
    fn should_center(&self, traits: &TraitSet) -> bool;
}

macro_rules! forward_policy {
    ($($ty:ty),*) => {$(
        impl<P: LayoutPolicy + ?Sized> LayoutPolicy for $ty {
            fn edge_margin(&self, traits: &TraitSet, edge: ContentEdge) -> f32 {
                (**self).edge_margin(traits, edge)
            }
            fn header_margin(&self, traits: &TraitSet, header_traits: &TraitSet) -> f32 {
                (**self).header_margin(traits, header_traits)
            }
            fn horizontal_margin(&self, traits: &TraitSet, preceding: &TraitSet) -> f32 {
                (**self).horizontal_margin(traits, preceding)
            }
            fn vertical_margin(&self, traits: &TraitSet, preceding: &TraitSet) -> f32 {
                (**self).vertical_margin(traits, preceding)
            }
            fn should_follow_horizontally(
                &self,
                traits: &TraitSet,
                preceding: Option<&TraitSet>,
            ) -> bool {
                (**self).should_follow_horizontally(traits, preceding)
            }
            fn should_center(&self, traits: &TraitSet) -> bool {
                (**self).should_center(traits)
            }
        }
    )*};
}

forward_policy!(&P, Box<P>, Arc<P>);

/// Margins between a component and each content edge.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EdgeInsets {
    /// Top inset.
    pub top: f32,
    /// Right inset.
    pub right: f32,
    /// Bottom inset.
    pub bottom: f32,
    /// Left inset.
    pub left: f32,
}

impl EdgeInsets {
    /// Same inset on every edge.
    pub const fn uniform(inset: f32) -> Self {
        Self {
            top: inset,
            right: inset,
            bottom: inset,
            left: inset,
        }
    }

    /// Inset for one edge.
    pub fn get(&self, edge: ContentEdge) -> f32 {
        match edge {
            ContentEdge::Top => self.top,
            ContentEdge::Right => self.right,
            ContentEdge::Bottom => self.bottom,
            ContentEdge::Left => self.left,
        }
    }
}

/// Policy driven by the built-in [`LayoutTrait`]s and fixed margins.
///
/// - Components share a row only when both carry
///   [`COMPACT_WIDTH`](LayoutTrait::COMPACT_WIDTH) and neither carries
///   [`FULL_WIDTH`](LayoutTrait::FULL_WIDTH).
/// - `FULL_WIDTH` components get no left or right edge margin.
/// - Two [`STACKABLE`](LayoutTrait::STACKABLE) components, or a component
///   carrying [`ALWAYS_STACK_UPWARDS`](LayoutTrait::ALWAYS_STACK_UPWARDS),
///   are separated by the stacked margin instead of the vertical margin.
/// - [`CENTERED`](LayoutTrait::CENTERED) components center their row.
///
/// # Example
///
/// ```
/// use zenflow::{EdgeInsets, StandardPolicy};
///
/// let policy = StandardPolicy::new()
///     .edge_insets(EdgeInsets::uniform(16.0))
///     .horizontal_margin(8.0)
///     .vertical_margin(12.0)
///     .header_margin(24.0);
/// # let _ = policy;
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StandardPolicy {
    /// Margins against each content edge.
    pub edges: EdgeInsets,
    /// Gap between the header and the first row.
    pub header: f32,
    /// Gap between neighbors on the same row.
    pub horizontal: f32,
    /// Gap between rows.
    pub vertical: f32,
    /// Gap between rows when the lower component stacks onto the upper one.
    pub stacked: f32,
}

impl Default for StandardPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardPolicy {
    /// Zero margins everywhere.
    pub const fn new() -> Self {
        Self {
            edges: EdgeInsets::uniform(0.0),
            header: 0.0,
            horizontal: 0.0,
            vertical: 0.0,
            stacked: 0.0,
        }
    }

    /// Set the content edge insets.
    pub fn edge_insets(mut self, edges: EdgeInsets) -> Self {
        self.edges = edges;
        self
    }

    /// Set the gap below a header.
    pub fn header_margin(mut self, margin: f32) -> Self {
        self.header = margin;
        self
    }

    /// Set the gap between components on the same row.
    pub fn horizontal_margin(mut self, margin: f32) -> Self {
        self.horizontal = margin;
        self
    }

    /// Set the gap between rows.
    pub fn vertical_margin(mut self, margin: f32) -> Self {
        self.vertical = margin;
        self
    }

    /// Set the gap between stacked components.
    pub fn stacked_margin(mut self, margin: f32) -> Self {
        self.stacked = margin;
        self
    }
}

impl LayoutPolicy for StandardPolicy {
    fn edge_margin(&self, traits: &TraitSet, edge: ContentEdge) -> f32 {
        let horizontal_edge = matches!(edge, ContentEdge::Left | ContentEdge::Right);
        if horizontal_edge && traits.contains(&LayoutTrait::FULL_WIDTH) {
            return 0.0;
        }
        self.edges.get(edge)
    }

    fn header_margin(&self, _traits: &TraitSet, _header_traits: &TraitSet) -> f32 {
        self.header
    }

    fn horizontal_margin(&self, _traits: &TraitSet, _preceding: &TraitSet) -> f32 {
        self.horizontal
    }

    fn vertical_margin(&self, traits: &TraitSet, preceding: &TraitSet) -> f32 {
        let stacked = traits.contains(&LayoutTrait::ALWAYS_STACK_UPWARDS)
            || (traits.contains(&LayoutTrait::STACKABLE)
                && preceding.contains(&LayoutTrait::STACKABLE));
        if stacked { self.stacked } else { self.vertical }
    }

    fn should_follow_horizontally(&self, traits: &TraitSet, preceding: Option<&TraitSet>) -> bool {
        let compact = |t: &TraitSet| {
            t.contains(&LayoutTrait::COMPACT_WIDTH) && !t.contains(&LayoutTrait::FULL_WIDTH)
        };
        match preceding {
            Some(preceding) => compact(traits) && compact(preceding),
            // Nothing to follow: every component is row-initiating.
            None => false,
        }
    }

    fn should_center(&self, traits: &TraitSet) -> bool {
        traits.contains(&LayoutTrait::CENTERED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policy() -> StandardPolicy {
        StandardPolicy::new()
            .edge_insets(EdgeInsets {
                top: 1.0,
                right: 2.0,
                bottom: 3.0,
                left: 4.0,
            })
            .header_margin(5.0)
            .horizontal_margin(6.0)
            .vertical_margin(7.0)
            .stacked_margin(8.0)
    }

    #[test]
    fn edge_margins_per_edge() {
        let p = policy();
        let plain = TraitSet::new();
        let got: [f32; 4] = ContentEdge::ALL.map(|e| p.edge_margin(&plain, e));
        assert_eq!(got, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn full_width_is_full_bleed() {
        let p = policy();
        let full = TraitSet::from([LayoutTrait::FULL_WIDTH]);
        assert_eq!(p.edge_margin(&full, ContentEdge::Left), 0.0);
        assert_eq!(p.edge_margin(&full, ContentEdge::Right), 0.0);
        assert_eq!(p.edge_margin(&full, ContentEdge::Top), 1.0);
        assert_eq!(p.edge_margin(&full, ContentEdge::Bottom), 3.0);
    }

    #[test]
    fn compact_pairs_follow() {
        let p = policy();
        let compact = TraitSet::from([LayoutTrait::COMPACT_WIDTH]);
        let full = TraitSet::from([LayoutTrait::FULL_WIDTH]);
        let both = TraitSet::from([LayoutTrait::COMPACT_WIDTH, LayoutTrait::FULL_WIDTH]);
        assert!(p.should_follow_horizontally(&compact, Some(&compact)));
        assert!(!p.should_follow_horizontally(&compact, Some(&full)));
        assert!(!p.should_follow_horizontally(&full, Some(&compact)));
        assert!(!p.should_follow_horizontally(&both, Some(&compact)));
        assert!(!p.should_follow_horizontally(&compact, None));
    }

    #[test]
    fn stacking_uses_stacked_margin() {
        let p = policy();
        let stackable = TraitSet::from([LayoutTrait::STACKABLE]);
        let upwards = TraitSet::from([LayoutTrait::ALWAYS_STACK_UPWARDS]);
        let plain = TraitSet::new();
        assert_eq!(LayoutPolicy::vertical_margin(&p, &stackable, &stackable), 8.0);
        assert_eq!(LayoutPolicy::vertical_margin(&p, &stackable, &plain), 7.0);
        assert_eq!(LayoutPolicy::vertical_margin(&p, &upwards, &plain), 8.0);
        assert_eq!(LayoutPolicy::vertical_margin(&p, &plain, &plain), 7.0);
    }

    #[test]
    fn centered_trait_centers() {
        let p = policy();
        assert!(p.should_center(&TraitSet::from([LayoutTrait::CENTERED])));
        assert!(!p.should_center(&TraitSet::new()));
    }

    fn vertical_of<P: LayoutPolicy>(policy: P) -> f32 {
        policy.vertical_margin(&TraitSet::new(), &TraitSet::new())
    }

    #[test]
    fn forwarding_impls_match() {
        let p = policy();
        let boxed: Box<dyn LayoutPolicy> = Box::new(p);
        assert_eq!(vertical_of(&p), 7.0);
        assert_eq!(vertical_of(Arc::new(p)), 7.0);
        assert_eq!(vertical_of(boxed), 7.0);
    }
}
