//! Sizes, input boxes, content bounds, and output placements.
//!
//! Distances are `f32` points. The engine never rounds; callers that need
//! pixel alignment snap the resolved [`Placement`]s themselves.

use crate::traits::TraitSet;

/// Width × height in points.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Size {
    /// Width in points.
    pub width: f32,
    /// Height in points.
    pub height: f32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        is_positive_finite(self.width) && is_positive_finite(self.height)
    }
}

/// A component's pre-computed intrinsic size plus its layout traits.
///
/// Input only: the engine reads it and never mutates it.
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentBox {
    /// Intrinsic size, computed by the component before layout.
    pub size: Size,
    /// Layout traits describing the component.
    pub traits: TraitSet,
}

impl ComponentBox {
    /// Create a box with the given size and traits.
    pub fn new(width: f32, height: f32, traits: TraitSet) -> Self {
        Self {
            size: Size::new(width, height),
            traits,
        }
    }

    /// Create a box with no layout traits.
    pub fn plain(width: f32, height: f32) -> Self {
        Self::new(width, height, TraitSet::new())
    }
}

/// The area components are laid out in.
///
/// Width is always fixed. Height is either fixed (a non-scrolling area) or
/// unbounded (a scroll view that grows with its content).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ContentBounds {
    /// Available content width.
    pub width: f32,
    /// Available content height. `None` = unbounded.
    pub height: Option<f32>,
}

impl ContentBounds {
    /// Fixed width, unbounded height.
    pub const fn unbounded(width: f32) -> Self {
        Self {
            width,
            height: None,
        }
    }

    /// Fixed width and height.
    pub const fn fixed(width: f32, height: f32) -> Self {
        Self {
            width,
            height: Some(height),
        }
    }

    /// Width finite and positive; height, when fixed, likewise.
    pub fn is_valid(&self) -> bool {
        is_positive_finite(self.width) && self.height.is_none_or(is_positive_finite)
    }
}

/// Absolute placement of one component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Left edge, from the content area's left boundary.
    pub x: f32,
    /// Top edge, from the content area's top boundary.
    pub y: f32,
    /// Echoed component width.
    pub width: f32,
    /// Echoed component height.
    pub height: f32,
}

impl Placement {
    /// Create a placement at `(x, y)` with the given size.
    pub const fn new(x: f32, y: f32, size: Size) -> Self {
        Self {
            x,
            y,
            width: size.width,
            height: size.height,
        }
    }

    /// Right edge.
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// The placed size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the interiors of two placements overlap.
    ///
    /// Rectangles that merely share an edge do not overlap.
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.x < other.max_x()
            && other.x < self.max_x()
            && self.y < other.max_y()
            && other.y < self.max_y()
    }
}

fn is_positive_finite(v: f32) -> bool {
    v.is_finite() && v > 0.0
}
