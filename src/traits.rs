//! Layout traits and trait sets.
//!
//! A [`LayoutTrait`] is an abstract tag describing a component's
//! layout-relevant characteristics (width class, stackability, ...). Components
//! carry a [`TraitSet`], and a [`LayoutPolicy`](crate::LayoutPolicy) turns
//! trait sets into margins and flow decisions. Traits carry no behavior of
//! their own.
//!
//! # Example
//!
//! ```
//! use zenflow::{LayoutTrait, TraitSet};
//!
//! let traits = TraitSet::new()
//!     .with(LayoutTrait::COMPACT_WIDTH)
//!     .with(LayoutTrait::new("promo"));
//!
//! assert!(traits.contains(&LayoutTrait::COMPACT_WIDTH));
//! assert!(traits.contains("promo"));
//! assert!(!traits.contains(&LayoutTrait::FULL_WIDTH));
//! ```

#[cfg(not(feature = "std"))]
use alloc::borrow::Cow;
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::borrow::Cow;

use core::borrow::Borrow;
use core::fmt;

use hashbrown::HashSet;

/// A named layout trait.
///
/// Compared by name only; traits have no ordering. The built-in constants are
/// backed by `&'static str` and share storage across every set that holds
/// them; traits created with [`LayoutTrait::new`] own their name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutTrait(Cow<'static, str>);

impl LayoutTrait {
    /// Component is narrow enough to share a row with other compact components.
    pub const COMPACT_WIDTH: Self = Self::from_static("compactWidth");
    /// Component spans the full content width and is laid out edge to edge.
    pub const FULL_WIDTH: Self = Self::from_static("fullWidth");
    /// Component may be stacked tightly against other stackable components.
    pub const STACKABLE: Self = Self::from_static("stackable");
    /// Component should always be stacked against the component above it.
    pub const ALWAYS_STACK_UPWARDS: Self = Self::from_static("alwaysStackUpwards");
    /// Component (and the row it anchors) prefers horizontal centering.
    pub const CENTERED: Self = Self::from_static("centered");

    /// Trait backed by a static name. Usable in `const` context.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Trait with a runtime name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The trait's name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for LayoutTrait {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for LayoutTrait {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl AsRef<str> for LayoutTrait {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Hash and Eq both delegate to the name, so lookups by `&str` are consistent.
impl Borrow<str> for LayoutTrait {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LayoutTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unordered set of [`LayoutTrait`]s attached to one component.
///
/// Insertion order is not significant: two sets with the same members are
/// equal regardless of how they were built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TraitSet {
    members: HashSet<LayoutTrait>,
}

impl TraitSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a trait, builder style.
    pub fn with(mut self, layout_trait: LayoutTrait) -> Self {
        self.members.insert(layout_trait);
        self
    }

    /// Add a trait. Returns `false` if it was already present.
    pub fn insert(&mut self, layout_trait: LayoutTrait) -> bool {
        self.members.insert(layout_trait)
    }

    /// Remove a trait by name. Returns `true` if it was present.
    pub fn remove(&mut self, name: impl AsRef<str>) -> bool {
        self.members.remove(name.as_ref())
    }

    /// Whether the set holds a trait with this name.
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.members.contains(name.as_ref())
    }

    /// Whether the two sets share at least one trait.
    pub fn intersects(&self, other: &TraitSet) -> bool {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.iter().any(|t| large.members.contains(t))
    }

    /// Number of traits.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over the traits in unspecified order.
    pub fn iter(&self) -> hashbrown::hash_set::Iter<'_, LayoutTrait> {
        self.members.iter()
    }
}

impl FromIterator<LayoutTrait> for TraitSet {
    fn from_iter<I: IntoIterator<Item = LayoutTrait>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl Extend<LayoutTrait> for TraitSet {
    fn extend<I: IntoIterator<Item = LayoutTrait>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<const N: usize> From<[LayoutTrait; N]> for TraitSet {
    fn from(traits: [LayoutTrait; N]) -> Self {
        traits.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a TraitSet {
    type Item = &'a LayoutTrait;
    type IntoIter = hashbrown::hash_set::Iter<'a, LayoutTrait>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_and_owned_traits_compare_by_name() {
        assert_eq!(LayoutTrait::new("compactWidth"), LayoutTrait::COMPACT_WIDTH);
        assert_ne!(LayoutTrait::COMPACT_WIDTH, LayoutTrait::FULL_WIDTH);
        assert_eq!(LayoutTrait::from("stackable"), LayoutTrait::STACKABLE);
    }

    #[test]
    fn insertion_order_is_irrelevant() {
        let a = TraitSet::new()
            .with(LayoutTrait::COMPACT_WIDTH)
            .with(LayoutTrait::CENTERED);
        let b = TraitSet::from([LayoutTrait::CENTERED, LayoutTrait::COMPACT_WIDTH]);
        assert_eq!(a, b);
    }

    #[test]
    fn duplicates_collapse() {
        let mut set = TraitSet::new();
        assert!(set.insert(LayoutTrait::STACKABLE));
        assert!(!set.insert(LayoutTrait::new("stackable")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn lookup_by_str_and_trait() {
        let set = TraitSet::from([LayoutTrait::new("hero")]);
        assert!(set.contains("hero"));
        assert!(set.contains(&LayoutTrait::from_static("hero")));
        assert!(!set.contains("card"));
    }

    #[test]
    fn remove_by_name() {
        let mut set = TraitSet::from([LayoutTrait::FULL_WIDTH, LayoutTrait::STACKABLE]);
        assert!(set.remove("fullWidth"));
        assert!(!set.remove(&LayoutTrait::FULL_WIDTH));
        assert_eq!(set, TraitSet::from([LayoutTrait::STACKABLE]));
    }

    #[test]
    fn intersects_either_direction() {
        let a = TraitSet::from([LayoutTrait::COMPACT_WIDTH, LayoutTrait::CENTERED]);
        let b = TraitSet::from([LayoutTrait::CENTERED]);
        let c = TraitSet::from([LayoutTrait::FULL_WIDTH]);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!TraitSet::new().intersects(&a));
    }

    #[test]
    fn display_is_name() {
        assert_eq!(LayoutTrait::ALWAYS_STACK_UPWARDS.to_string(), "alwaysStackUpwards");
    }
}
