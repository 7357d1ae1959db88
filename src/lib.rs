//! Component flow layout driven by a pluggable, trait-based policy.
//!
//! Components arrive pre-sized and tagged with [`LayoutTrait`]s. A
//! [`LayoutPolicy`] answers every spacing and flow question about those
//! traits; the engine groups components into rows, applies the margins, and
//! returns absolute placements. Pure geometry, `no_std` + `alloc` compatible.
//!
//! # Modules
//!
//! - [`traits`] — Layout traits and trait sets
//! - [`policy`] — The policy contract, content edges, and [`StandardPolicy`]
//! - [`geometry`] — Sizes, input boxes, bounds, placements
//! - [`planner`] — Row flow planning (phase 1)
//! - [`resolver`] — Absolute placement resolution (phase 2)
//! - [`engine`] — Validation and the [`FlowEngine`] entry point
//!
//! # Example
//!
//! ```
//! use zenflow::{ComponentBox, ContentBounds, EdgeInsets, FlowEngine, LayoutTrait, StandardPolicy, TraitSet};
//!
//! let engine = FlowEngine::new(
//!     StandardPolicy::new()
//!         .edge_insets(EdgeInsets::uniform(20.0))
//!         .vertical_margin(10.0)
//!         .header_margin(12.0),
//! );
//!
//! let header = ComponentBox::plain(375.0, 200.0);
//! let banner = ComponentBox::new(335.0, 80.0, TraitSet::from([LayoutTrait::CENTERED]));
//! let layout = engine
//!     .layout(ContentBounds::unbounded(375.0), Some(&header), &[banner])
//!     .unwrap();
//!
//! assert_eq!(layout.placements[0].x, 20.0);
//! assert_eq!(layout.placements[0].y, 212.0);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod engine;
pub mod geometry;
pub mod planner;
pub mod policy;
pub mod resolver;
#[cfg(feature = "svg")]
pub mod svg;
pub mod traits;

pub use engine::{ComponentSlot, FlowEngine, LayoutError, layout};
pub use geometry::{ComponentBox, ContentBounds, Placement, Size};
pub use planner::{Row, RowMember, RowPlan, plan};
pub use policy::{ContentEdge, EdgeInsets, LayoutPolicy, StandardPolicy};
pub use resolver::{FlowLayout, resolve};
pub use traits::{LayoutTrait, TraitSet};
