//! Array-backed set.
//!
//! This module provides [`ArraySet`], a set stored as a plain `Vec` of
//! distinct elements.
//!
//! # Overview
//!
//! Every insertion scans the existing elements before appending, so an
//! `ArraySet` never holds duplicates and keeps its elements in insertion order.
//! For small sets a linear scan beats hashing: there is no hash to compute and
//! the elements sit next to each other in memory.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity |
//! |------------|------------|
//! | `contains` | O(n)       |
//! | `add`      | O(n)       |
//! | `remove`   | O(n)       |
//! | `len`      | O(1)       |
//! | `clear`    | O(n), keeps capacity |
//!
//! # Examples
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let mut set = ArraySet::new();
//! set.add("b");
//! set.add("a");
//! set.add("b");
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.as_slice(), &["b", "a"]);
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::iter::FusedIterator;

use super::HashedSet;
use crate::contract::{self, ComparableSet, Element, Elements, Representation, Set};

// =============================================================================
// ArraySet Definition
// =============================================================================

/// A set of unique elements stored in insertion order in a `Vec`.
///
/// The default value is an empty set that has not allocated.
///
/// # Examples
///
/// ```rust
/// use setkit::prelude::*;
///
/// let mut set = ArraySet::of([3, 1, 2]);
/// set.remove(&1);
///
/// // Remaining elements keep their relative order
/// assert_eq!(set.as_slice(), &[3, 2]);
/// ```
pub struct ArraySet<T> {
    elements: Vec<T>,
}

impl<T> ArraySet<T> {
    /// Creates an empty set without allocating.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates an empty set with room for at least `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the elements in insertion order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over the elements in insertion order.
    #[inline]
    pub fn iter(&self) -> ArraySetIterator<'_, T> {
        ArraySetIterator {
            inner: self.elements.iter(),
        }
    }
}

impl<T: Element> ArraySet<T> {
    /// Creates a set from a list of elements. Duplicates are stored once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::prelude::*;
    ///
    /// let set = ArraySet::of([1, 2, 2, 3]);
    /// assert_eq!(set.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Creates a set from the distinct elements of `elements`.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        let mut set = Self::with_capacity(elements.len());
        set.add_slice(elements);
        set
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// Accepts any borrowed form of the element type, so an
    /// `ArraySet<String>` can be searched with a `&str`.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.elements
            .iter()
            .any(|candidate| candidate.borrow() == element)
    }

    /// Creates a [`HashedSet`] with clones of the elements.
    #[must_use]
    pub fn to_hashed_set(&self) -> HashedSet<T> {
        self.elements.iter().cloned().collect()
    }

    /// Converts into a [`HashedSet`], moving the elements.
    #[must_use]
    pub fn into_hashed_set(self) -> HashedSet<T> {
        self.elements.into_iter().collect()
    }

    /// Wraps `elements` without scanning for duplicates.
    ///
    /// The caller guarantees that `elements` holds no two equal values.
    pub(super) fn from_distinct_vec(elements: Vec<T>) -> Self {
        Self { elements }
    }

    fn push_unique(&mut self, element: T) -> bool {
        if self.elements.iter().any(|candidate| candidate == &element) {
            return false;
        }

        self.elements.push(element);
        true
    }
}

// =============================================================================
// Capability Contracts
// =============================================================================

impl<T: Element> ComparableSet<T> for ArraySet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.elements.iter().any(|candidate| candidate == element)
    }

    #[inline]
    fn len(&self) -> usize {
        self.elements.len()
    }

    fn elements(&self) -> Elements<'_, T> {
        Box::new(self.elements.iter())
    }

    fn representation_name(&self) -> &'static str {
        "ArraySet"
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

    fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }
}

impl<T: Element> Set<T> for ArraySet<T> {
    #[inline]
    fn add(&mut self, element: T) -> bool {
        self.push_unique(element)
    }

    fn add_slice(&mut self, elements: &[T]) {
        if self.elements.capacity() == 0 {
            self.elements.reserve(elements.len());
        }

        for element in elements {
            self.push_unique(element.clone());
        }
    }

    fn add_from(&mut self, other: &dyn ComparableSet<T>) {
        if self.elements.capacity() == 0 {
            self.elements.reserve(other.len());
        }

        for element in other.elements() {
            self.push_unique(element.clone());
        }
    }

    fn remove(&mut self, element: &T) -> bool {
        match self
            .elements
            .iter()
            .position(|candidate| candidate == element)
        {
            Some(position) => {
                self.elements.remove(position);
                true
            }
            None => false,
        }
    }

    /// Removes every element, keeping the allocated capacity.
    #[inline]
    fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T: Element> Representation<T> for ArraySet<T> {
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of an [`ArraySet`], in insertion
/// order.
pub struct ArraySetIterator<'a, T> {
    inner: std::slice::Iter<'a, T>,
}

impl<'a, T> Iterator for ArraySetIterator<'a, T> {
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

impl<T> DoubleEndedIterator for ArraySetIterator<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for ArraySetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ArraySetIterator<'_, T> {}

/// Owning iterator over the elements of an [`ArraySet`], in insertion order.
pub struct ArraySetIntoIterator<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for ArraySetIntoIterator<T> {
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

impl<T> ExactSizeIterator for ArraySetIntoIterator<T> {
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for ArraySetIntoIterator<T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for ArraySet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy that keeps the source's capacity.
impl<T: Clone> Clone for ArraySet<T> {
    fn clone(&self) -> Self {
        let mut elements = Vec::with_capacity(self.elements.capacity());
        elements.extend_from_slice(&self.elements);
        Self { elements }
    }
}

impl<T: Element> FromIterator<T> for ArraySet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Element> Extend<T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_unique(element);
        }
    }
}

impl<'a, T: Element + Copy + 'a> Extend<&'a T> for ArraySet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Element> From<Vec<T>> for ArraySet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for ArraySet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> IntoIterator for ArraySet<T> {
    type Item = T;
    type IntoIter = ArraySetIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        ArraySetIntoIterator {
            inner: self.elements.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a ArraySet<T> {
    type Item = &'a T;
    type IntoIter = ArraySetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ArraySet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::write_set(formatter, "ArraySet", self.iter())
    }
}

// =============================================================================
// Tests
// =============================================================================
