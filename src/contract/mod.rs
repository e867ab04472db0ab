//! Capability contracts shared by every set representation.
//!
//! Two traits describe what a representation can do:
//!
//! - [`ComparableSet`]: read-only queries (`contains`, `len`, enumeration) plus
//!   the operations derived from them (equality, subset tests, union,
//!   intersection). Any two representations can be combined through this trait.
//! - [`Set`]: a [`ComparableSet`] that can also be mutated.
//!
//! A third trait, [`Representation`], lets a concrete type keep its own type
//! through union and intersection instead of boxing into `dyn Set`.
//!
//! Both capability traits are object safe, so mixed collections of sets can be
//! handled through `&dyn ComparableSet<T>` or `Box<dyn Set<T>>`.
//!
//! # Examples
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let array = ArraySet::of([1, 2, 3]);
//! let hashed = HashedSet::of([3, 2, 1]);
//!
//! // Representations compare by their elements only
//! assert!(array.equals(&hashed));
//! assert!(array.is_subset_of(&hashed));
//!
//! // The polymorphic union is boxed, the same-type union is not
//! let boxed: Box<dyn Set<i32>> = array.union(&HashedSet::of([4]));
//! let typed: ArraySet<i32> = array.union_with(&HashedSet::of([4]));
//! assert_eq!(boxed.len(), typed.len());
//! ```

pub mod algebra;

use std::collections::HashSet as StdHashSet;
use std::fmt;
use std::hash::Hash;

use crate::hasher::SetHasher;

/// Values that can be stored in a set.
///
/// Blanket-implemented for every `Clone + Eq + Hash` type.
pub trait Element: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Element for T {}

/// A lazy enumeration of a set's elements.
///
/// Each call to [`ComparableSet::elements`] starts a fresh enumeration.
pub type Elements<'a, T> = Box<dyn Iterator<Item = &'a T> + 'a>;

// =============================================================================
// ComparableSet
// =============================================================================

/// Read-only capability contract of a set.
///
/// Implementors supply the primitives (`contains`, `len`, `elements`,
/// `representation_name`) and the boxed derivations; every comparison is
/// provided on top of the primitives by [`algebra`].
pub trait ComparableSet<T: Element> {
    /// Returns `true` if `element` is in the set.
    fn contains(&self, element: &T) -> bool;

    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enumerates the elements.
    ///
    /// Array-backed data is enumerated in insertion order, hash-backed data in
    /// an unspecified order.
    fn elements(&self) -> Elements<'_, T>;

    /// The name used in the textual representation, e.g. `"ArraySet"`.
    fn representation_name(&self) -> &'static str;

    /// Returns `true` if both sets hold exactly the same elements.
    fn equals(&self, other: &dyn ComparableSet<T>) -> bool {
        algebra::equals(self, other)
    }

    /// Returns `true` if every element of this set is also in `other`.
    fn is_subset_of(&self, other: &dyn ComparableSet<T>) -> bool {
        algebra::is_subset_of(self, other)
    }

    /// Returns `true` if every element of `other` is also in this set.
    fn is_superset_of(&self, other: &dyn ComparableSet<T>) -> bool {
        algebra::is_superset_of(self, other)
    }

    /// Returns `true` if the sets have no element in common.
    fn is_disjoint(&self, other: &dyn ComparableSet<T>) -> bool {
        algebra::is_disjoint(self, other)
    }

    /// Creates a set holding the elements of both sets.
    ///
    /// The boxed set has the same representation as `self`.
    fn union(&self, other: &dyn ComparableSet<T>) -> Box<dyn Set<T>>
    where
        T: 'static;

    /// Creates a set holding the elements present in both sets.
    ///
    /// The boxed set has the same representation as `self`.
    fn intersection(&self, other: &dyn ComparableSet<T>) -> Box<dyn Set<T>>
    where
        T: 'static;

    /// Creates an independent deep copy with the same representation.
    fn copy(&self) -> Box<dyn Set<T>>
    where
        T: 'static;

    /// Snapshots the elements into a `Vec`, in enumeration order.
    fn to_vec(&self) -> Vec<T> {
        self.elements().cloned().collect()
    }

    /// Snapshots the elements into a standard library hash set keyed by element.
    fn to_std_hash_set(&self) -> StdHashSet<T, SetHasher> {
        let mut snapshot = StdHashSet::with_capacity_and_hasher(self.len(), SetHasher::default());
        snapshot.extend(self.elements().cloned());
        snapshot
    }
}

// =============================================================================
// Set
// =============================================================================

/// Mutable capability contract of a set.
pub trait Set<T: Element>: ComparableSet<T> {
    /// Adds `element`, returning `true` if it was not already present.
    fn add(&mut self, element: T) -> bool;

    /// Adds every element of `elements`. Duplicates are stored once.
    fn add_slice(&mut self, elements: &[T]) {
        for element in elements {
            self.add(element.clone());
        }
    }

    /// Adds every element of `other`.
    fn add_from(&mut self, other: &dyn ComparableSet<T>) {
        for element in other.elements() {
            self.add(element.clone());
        }
    }

    /// Removes `element`, returning `true` if it was present.
    fn remove(&mut self, element: &T) -> bool;

    /// Removes every element.
    fn clear(&mut self);
}

// =============================================================================
// Representation
// =============================================================================

/// A concrete representation that keeps its own type through set algebra.
///
/// The polymorphic [`ComparableSet::union`] and [`ComparableSet::intersection`]
/// are thin wrappers that box the results of these methods.
pub trait Representation<T: Element>: Set<T> + Clone + Sized {
    /// Creates an empty set with room for at least `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;

    /// Same-type [`ComparableSet::union`].
    #[must_use]
    fn union_with(&self, other: &dyn ComparableSet<T>) -> Self {
        algebra::union(self, other)
    }

    /// Same-type [`ComparableSet::intersection`].
    #[must_use]
    fn intersection_with(&self, other: &dyn ComparableSet<T>) -> Self {
        algebra::intersection(self, other)
    }

    /// Creates a set with the elements of `self` that are not in `other`.
    #[must_use]
    fn difference_with(&self, other: &dyn ComparableSet<T>) -> Self {
        algebra::difference(self, other)
    }
}

static_assertions::assert_obj_safe!(ComparableSet<i32>, Set<i32>);

// =============================================================================
// Formatting
// =============================================================================

/// Writes `name{a, b, c}`.
pub(crate) fn write_set<'a, T, I>(
    formatter: &mut fmt::Formatter<'_>,
    name: &str,
    elements: I,
) -> fmt::Result
where
    T: fmt::Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    write!(formatter, "{name}{{")?;
    let mut first = true;
    for element in elements {
        if first {
            first = false;
        } else {
            write!(formatter, ", ")?;
        }
        write!(formatter, "{element}")?;
    }
    write!(formatter, "}}")
}

impl<T: Element + fmt::Display> fmt::Display for dyn ComparableSet<T> + '_ {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(formatter, self.representation_name(), self.elements())
    }
}

impl<T: Element + fmt::Display> fmt::Display for dyn Set<T> + '_ {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_set(formatter, self.representation_name(), self.elements())
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for dyn ComparableSet<T> + '_ {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements()).finish()
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for dyn Set<T> + '_ {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.elements()).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
