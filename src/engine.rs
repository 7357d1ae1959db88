//! Layout entry points and input validation.

use log::debug;

use crate::geometry::{ComponentBox, ContentBounds};
use crate::planner::plan;
use crate::policy::LayoutPolicy;
use crate::resolver::{FlowLayout, resolve};

/// Which input a [`LayoutError::InvalidComponentSize`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ComponentSlot {
    /// The header above the body.
    Header,
    /// A body component, by input index.
    Body(usize),
}

impl core::fmt::Display for ComponentSlot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Header => f.write_str("header"),
            Self::Body(i) => write!(f, "component {i}"),
        }
    }
}

/// Layout input error.
///
/// Raised before planning starts; a pass either fails here or completes.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum LayoutError {
    /// Content width is not positive and finite, or a fixed height is not.
    #[error("invalid content bounds: width {width}, height {height:?}")]
    InvalidContentBounds {
        /// Requested content width.
        width: f32,
        /// Requested fixed height, if any.
        height: Option<f32>,
    },
    /// A component's width or height is not positive and finite.
    #[error("invalid size for {slot}: {width}×{height}")]
    InvalidComponentSize {
        /// Which component was rejected.
        slot: ComponentSlot,
        /// Its width.
        width: f32,
        /// Its height.
        height: f32,
    },
}

/// Flow layout engine configured with a [`LayoutPolicy`].
///
/// The policy is the only configuration. The engine keeps no state between
/// passes, so one engine can lay out any number of screens, from any number
/// of threads when `P: Sync`.
///
/// # Example
///
/// ```
/// use zenflow::{ComponentBox, ContentBounds, EdgeInsets, FlowEngine, LayoutTrait, StandardPolicy, TraitSet};
///
/// let engine = FlowEngine::new(
///     StandardPolicy::new()
///         .edge_insets(EdgeInsets::uniform(16.0))
///         .horizontal_margin(8.0)
///         .vertical_margin(8.0),
/// );
/// let card = || ComponentBox::new(100.0, 120.0, TraitSet::from([LayoutTrait::COMPACT_WIDTH]));
/// let layout = engine
///     .layout(ContentBounds::unbounded(360.0), None, &[card(), card(), card()])
///     .unwrap();
///
/// // 16 + 100 + 8 + 100 + 8 + 100 = 332 fits in 360: one row.
/// assert_eq!(layout.rows, vec![0..3]);
/// assert_eq!(layout.placements[2].x, 232.0);
/// assert_eq!(layout.content_height, 16.0 + 120.0 + 16.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FlowEngine<P> {
    policy: P,
}

impl<P: LayoutPolicy> FlowEngine<P> {
    /// Create an engine that asks `policy` for every layout decision.
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// The configured policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Lay out `components` below an optional `header` within `bounds`.
    pub fn layout(
        &self,
        bounds: ContentBounds,
        header: Option<&ComponentBox>,
        components: &[ComponentBox],
    ) -> Result<FlowLayout, LayoutError> {
        layout(&self.policy, bounds, header, components)
    }
}

/// One layout pass with a borrowed policy.
///
/// Validates every input before asking the policy anything, then plans rows
/// and resolves them into placements.
pub fn layout<P: LayoutPolicy + ?Sized>(
    policy: &P,
    bounds: ContentBounds,
    header: Option<&ComponentBox>,
    components: &[ComponentBox],
) -> Result<FlowLayout, LayoutError> {
    validate(bounds, header, components)?;
    let layout = resolve(plan(policy, bounds, header, components));
    debug!(
        "laid out {} components: {} rows, {}×{}",
        layout.placements.len(),
        layout.rows.len(),
        layout.content_width,
        layout.content_height
    );
    Ok(layout)
}

fn validate(
    bounds: ContentBounds,
    header: Option<&ComponentBox>,
    components: &[ComponentBox],
) -> Result<(), LayoutError> {
    if !bounds.is_valid() {
        return Err(LayoutError::InvalidContentBounds {
            width: bounds.width,
            height: bounds.height,
        });
    }
    let slots = header
        .map(|h| (ComponentSlot::Header, h))
        .into_iter()
        .chain(components.iter().enumerate().map(|(i, c)| (ComponentSlot::Body(i), c)));
    for (slot, component) in slots {
        if !component.size.is_valid() {
            return Err(LayoutError::InvalidComponentSize {
                slot,
                width: component.size.width,
                height: component.size.height,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::StandardPolicy;

    #[test]
    fn zero_width_bounds_error() {
        let engine = FlowEngine::new(StandardPolicy::new());
        assert_eq!(
            engine.layout(ContentBounds::unbounded(0.0), None, &[]),
            Err(LayoutError::InvalidContentBounds {
                width: 0.0,
                height: None
            })
        );
    }

    #[test]
    fn zero_fixed_height_error() {
        let engine = FlowEngine::new(StandardPolicy::new());
        assert!(matches!(
            engine.layout(ContentBounds::fixed(100.0, 0.0), None, &[]),
            Err(LayoutError::InvalidContentBounds { .. })
        ));
    }

    #[test]
    fn bad_component_reports_index() {
        let engine = FlowEngine::new(StandardPolicy::new());
        let components = [
            ComponentBox::plain(10.0, 10.0),
            ComponentBox::plain(10.0, 10.0),
            ComponentBox::plain(10.0, -1.0),
        ];
        assert_eq!(
            engine.layout(ContentBounds::unbounded(100.0), None, &components),
            Err(LayoutError::InvalidComponentSize {
                slot: ComponentSlot::Body(2),
                width: 10.0,
                height: -1.0
            })
        );
    }

    #[test]
    fn bad_header_reported_first() {
        let engine = FlowEngine::new(StandardPolicy::new());
        let header = ComponentBox::plain(0.0, 10.0);
        let components = [ComponentBox::plain(0.0, 10.0)];
        assert!(matches!(
            engine.layout(ContentBounds::unbounded(100.0), Some(&header), &components),
            Err(LayoutError::InvalidComponentSize {
                slot: ComponentSlot::Header,
                ..
            })
        ));
    }

    #[test]
    fn bounds_checked_before_components() {
        let engine = FlowEngine::new(StandardPolicy::new());
        let components = [ComponentBox::plain(0.0, 0.0)];
        assert!(matches!(
            engine.layout(ContentBounds::unbounded(-1.0), None, &components),
            Err(LayoutError::InvalidContentBounds { .. })
        ));
    }

    #[test]
    fn empty_body_is_not_an_error() {
        let engine = FlowEngine::new(StandardPolicy::new());
        let layout = engine
            .layout(ContentBounds::unbounded(100.0), None, &[])
            .unwrap();
        assert!(layout.placements.is_empty());
        assert_eq!(layout.content_height, 0.0);
    }

    #[test]
    fn empty_body_under_header_is_header_height() {
        let engine = FlowEngine::new(StandardPolicy::new().header_margin(30.0));
        let header = ComponentBox::plain(100.0, 44.0);
        let layout = engine
            .layout(ContentBounds::unbounded(100.0), Some(&header), &[])
            .unwrap();
        assert!(layout.placements.is_empty());
        assert_eq!(layout.content_height, 44.0);
    }

    #[test]
    fn error_messages() {
        let err = LayoutError::InvalidComponentSize {
            slot: ComponentSlot::Body(3),
            width: 0.0,
            height: 5.0,
        };
        assert_eq!(err.to_string(), "invalid size for component 3: 0×5");
    }
}
