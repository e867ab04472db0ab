//! Hash-backed set.
//!
//! This module provides [`HashedSet`], a set stored in a hash table keyed by
//! element.
//!
//! # Overview
//!
//! Membership tests hash the element once instead of scanning, which pays off
//! once a set holds more than a handful of elements. Iteration order is
//! unspecified and may differ between two sets with the same elements.
//!
//! The hash builder is [`SetHasher`], chosen by the `fxhash` and `ahash`
//! features.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity     |
//! |------------|----------------|
//! | `contains` | O(1) expected  |
//! | `add`      | O(1) expected  |
//! | `remove`   | O(1) expected  |
//! | `len`      | O(1)           |
//! | `clear`    | O(n), releases the table |
//!
//! # Examples
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let mut set: HashedSet<i32> = (0..100).collect();
//! assert!(set.contains(&42));
//!
//! set.remove(&42);
//! assert!(!set.contains(&42));
//! assert_eq!(set.len(), 99);
//! ```

use std::borrow::Borrow;
use std::collections::HashSet as StdHashSet;
use std::collections::hash_set;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::ArraySet;
use crate::contract::{self, ComparableSet, Element, Elements, Representation, Set};
use crate::hasher::SetHasher;

// =============================================================================
// HashedSet Definition
// =============================================================================

/// A set of unique elements stored in a hash table.
///
/// The default value is an empty set that has not allocated.
///
/// # Examples
///
/// ```rust
/// use setkit::prelude::*;
///
/// let set = HashedSet::of(["x", "y", "x"]);
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("x"));
/// ```
#[derive(Clone)]
pub struct HashedSet<T> {
    elements: StdHashSet<T, SetHasher>,
}

impl<T> HashedSet<T> {
    /// Creates an empty set without allocating.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: StdHashSet::with_hasher(SetHasher::default()),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: StdHashSet::with_capacity_and_hasher(capacity, SetHasher::default()),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns an iterator over the elements in unspecified order.
    #[inline]
    pub fn iter(&self) -> HashedSetIterator<'_, T> {
        HashedSetIterator {
            inner: self.elements.iter(),
        }
    }
}

impl<T: Element> HashedSet<T> {
    /// Creates a set from a list of elements. Duplicates are stored once.
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Creates a set from the distinct elements of `elements`.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.elements.extend(elements.iter().cloned());
        set
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// Accepts any borrowed form of the element type, so a
    /// `HashedSet<String>` can be searched with a `&str`.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.elements.contains(element)
    }

    /// Creates an [`ArraySet`] with clones of the elements.
    ///
    /// The array's order is the hash table's iteration order.
    #[must_use]
    pub fn to_array_set(&self) -> ArraySet<T> {
        ArraySet::from_distinct_vec(self.elements.iter().cloned().collect())
    }

    /// Converts into an [`ArraySet`], moving the elements.
    #[must_use]
    pub fn into_array_set(self) -> ArraySet<T> {
        ArraySet::from_distinct_vec(self.elements.into_iter().collect())
    }
}

// =============================================================================
// Capability Contracts
// =============================================================================

impl<T: Element> ComparableSet<T> for HashedSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn elements(&self) -> Elements<'_, T> {
        Box::new(self.elements.iter())
    }

    fn representation_name(&self) -> &'static str {
        "HashedSet"
    }

    fn union(&self, other: &dyn ComparableSet<T>) -> Box<dyn Set<T>>
    where
        T: 'static,
    {
        Box::new(self.union_with(other))
    }

    fn intersection(&self, other: &dyn ComparableSet<T>) -> Box<dyn Set<T>>
    where
        T: 'static,
    {
        Box::new(self.intersection_with(other))
    }

    fn copy(&self) -> Box<dyn Set<T>>
    where
        T: 'static,
    {
        Box::new(self.clone())
    }

    fn to_std_hash_set(&self) -> StdHashSet<T, SetHasher> {
        self.elements.clone()
    }
}

impl<T: Element> Set<T> for HashedSet<T> {
    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.elements.insert(element)
    }

    fn add_slice(&mut self, elements: &[T]) {
        self.elements.extend(elements.iter().cloned());
    }

    fn add_from(&mut self, other: &dyn ComparableSet<T>) {
        self.elements.reserve(other.len());
        self.elements.extend(other.elements().cloned());
    }

    #[inline]
    fn remove(&mut self, element: &T) -> bool {
        self.elements.remove(element)
    }

    /// Removes every element and releases the table.
    fn clear(&mut self) {
        self.elements = StdHashSet::with_hasher(SetHasher::default());
    }
}

impl<T: Element> Representation<T> for HashedSet<T> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: StdHashSet::with_capacity_and_hasher(capacity, SetHasher::default()),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of a [`HashedSet`], in
/// unspecified order.
pub struct HashedSetIterator<'a, T> {
    inner: hash_set::Iter<'a, T>,
}

impl<'a, T> Iterator for HashedSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashedSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for HashedSetIterator<'_, T> {}

/// Owning iterator over the elements of a [`HashedSet`], in unspecified order.
pub struct HashedSetIntoIterator<T> {
    inner: hash_set::IntoIter<T>,
}

impl<T> Iterator for HashedSetIntoIterator<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for HashedSetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for HashedSetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for HashedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> FromIterator<T> for HashedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.elements.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for HashedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<'a, T: Element + Copy + 'a> Extend<&'a T> for HashedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.elements.extend(iter.into_iter().copied());
    }
}

impl<T: Element> From<Vec<T>> for HashedSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for HashedSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for HashedSet<T> {
    type Item = T;
    type IntoIter = HashedSetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        HashedSetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a HashedSet<T> {
    type Item = &'a T;
    type IntoIter = HashedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for HashedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for HashedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::write_set(formatter, "HashedSet", self.iter())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_add_duplicate_is_noop() {
        let mut set = HashedSet::new();
        assert!(set.add(1));
        assert!(!set.add(1));
        assert_eq!(set.len(), 1);
    }

    #[rstest]
    fn test_remove_absent_is_noop() {
        let mut set = HashedSet::of([1, 2]);
        assert!(!set.remove(&3));
        assert_eq!(set.len(), 2);
    }

    #[rstest]
    fn test_clear_releases_table() {
        let mut set: HashedSet<i32> = (0..64).collect();
        set.clear();

        assert!(set.is_empty());
        assert_eq!(set.capacity(), 0);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let mut original = HashedSet::of([1, 2, 3]);
        let copy = original.clone();
        original.add(4);

        assert_eq!(copy.len(), 3);
        assert!(!copy.contains(&4));
    }

    #[rstest]
    fn test_borrow_contains_with_str() {
        let set = HashedSet::of(["apple".to_string()]);
        assert!(set.contains("apple"));
        assert!(!set.contains("banana"));
    }

    #[rstest]
    fn test_into_array_set_round_trip_preserves_elements() {
        let set = HashedSet::of([3, 1, 2]);
        let array = set.to_array_set();
        let back = array.into_hashed_set();
        assert_eq!(back, set);
    }

    #[rstest]
    fn test_large_conversion_to_array_keeps_every_element_once() {
        const SIZE: u64 = 200_000;
        let set: HashedSet<u64> = (0..SIZE).collect();

        let borrowed = set.to_array_set();
        let moved = set.clone().into_array_set();

        for array in [&borrowed, &moved] {
            assert_eq!(array.len() as u64, SIZE);
            let distinct: StdHashSet<&u64> = array.as_slice().iter().collect();
            assert_eq!(distinct.len() as u64, SIZE);
        }
        assert_eq!(moved, set);
    }

    #[rstest]
    fn test_display_single_element_and_empty() {
        assert_eq!(HashedSet::of([9]).to_string(), "HashedSet{9}");
        assert_eq!(HashedSet::<i32>::new().to_string(), "HashedSet{}");
    }

    #[rstest]
    fn test_display_contains_every_element() {
        let rendered = HashedSet::of([1, 2, 3]).to_string();
        assert!(rendered.starts_with("HashedSet{"));
        assert!(rendered.ends_with('}'));
        for element in ["1", "2", "3"] {
            assert!(rendered.contains(element));
        }
    }

    #[rstest]
    fn test_to_std_hash_set_matches() {
        let set = HashedSet::of([1, 2]);
        let snapshot = set.to_std_hash_set();
        assert_eq!(snapshot.len(), 2);
        assert!(snapshot.contains(&1) && snapshot.contains(&2));
    }
}
