//! Set that switches between array and hash storage as it grows and shrinks.
//!
//! This module provides [`AdaptiveSet`], which holds its elements in an
//! [`ArraySet`] while small and in a [`HashedSet`] once large.
//!
//! # Overview
//!
//! A linear scan is faster than hashing for a handful of elements, while a hash
//! table wins once membership tests have more elements to look through. An
//! `AdaptiveSet` follows the size of its contents:
//!
//! - it starts in array storage
//! - an insertion that brings the array to the [`Threshold`] moves every
//!   element into hash storage
//! - a removal that brings the hash table to half the threshold or below moves
//!   every element back into array storage
//!
//! The gap between the two boundaries keeps a set whose size oscillates around
//! the threshold from converting on every insertion and removal.
//!
//! Exactly one storage is active at a time; the other does not exist.
//!
//! # State Transitions
//!
//! ```text
//!                 add (len == threshold)
//!     Array ────────────────────────────────► Hashed
//!       ▲                                        │
//!       │    remove (len <= threshold / 2)       │
//!       └────────────────────────────────────────┘
//!                clear, set_threshold
//! ```
//!
//! [`AdaptiveSet::set_threshold`] re-checks the storage against the new
//! threshold: array storage at or above it becomes hashed, hashed storage below
//! it becomes an array. [`Set::clear`] always leaves array storage.
//!
//! Transitions are reported as `tracing` events at debug level.
//!
//! # Examples
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let mut set = AdaptiveSet::with_threshold(Threshold::new(4).unwrap());
//!
//! set.add_slice(&[1, 2, 3]);
//! assert!(set.is_array_representation());
//!
//! set.add(4);
//! assert!(set.is_hashed_representation());
//!
//! set.remove(&1);
//! assert!(set.is_hashed_representation());
//!
//! set.remove(&2);
//! assert!(set.is_array_representation());
//! ```

use std::borrow::Borrow;
use std::collections::HashSet as StdHashSet;
use std::fmt;
use std::hash::Hash;
use std::iter::FusedIterator;

use super::array::ArraySetIterator;
use super::hashed::HashedSetIterator;
use super::{ArraySet, HashedSet, InvalidThresholdError, Threshold};
use crate::contract::{self, ComparableSet, Element, Elements, Representation, Set};
use crate::hasher::SetHasher;

/// The active storage of an [`AdaptiveSet`].
#[derive(Clone)]
enum Storage<T> {
    Array(ArraySet<T>),
    Hashed(HashedSet<T>),
}

impl<T> Default for Storage<T> {
    #[inline]
    fn default() -> Self {
        Self::Array(ArraySet::new())
    }
}

// =============================================================================
// AdaptiveSet Definition
// =============================================================================

/// A set that keeps small contents in an array and large contents in a hash
/// table.
///
/// The default value is an empty, array-backed set with
/// [`DEFAULT_THRESHOLD`](super::DEFAULT_THRESHOLD) that has not allocated.
///
/// Cloning produces an independent deep copy in the same storage.
///
/// # Examples
///
/// ```rust
/// use setkit::prelude::*;
///
/// let mut set: AdaptiveSet<u32> = AdaptiveSet::default();
/// for value in 0..20 {
///     set.add(value);
/// }
///
/// assert_eq!(set.threshold().get(), 20);
/// assert!(set.is_hashed_representation());
/// ```
#[derive(Clone)]
pub struct AdaptiveSet<T> {
    threshold: Threshold,
    storage: Storage<T>,
}

impl<T> AdaptiveSet<T> {
    /// Creates an empty, array-backed set with the default threshold.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_threshold(Threshold::DEFAULT)
    }

    /// Creates an empty, array-backed set with the given threshold.
    #[inline]
    #[must_use]
    pub const fn with_threshold(threshold: Threshold) -> Self {
        Self {
            threshold,
            storage: Storage::Array(ArraySet::new()),
        }
    }

    /// Creates an empty, array-backed set with the default threshold.
    ///
    /// The array never holds more elements than the threshold, so at most
    /// that many slots are reserved.
    ///
    /// The generic functions in [`algebra`](crate::contract::algebra) build
    /// their result through this constructor, so an adaptive result of
    /// `algebra::union`, `algebra::intersection` or `algebra::difference` has
    /// the default threshold. [`Representation::union_with`] and its siblings
    /// keep the receiver's threshold instead.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let threshold = Threshold::DEFAULT;
        Self {
            threshold,
            storage: Storage::Array(ArraySet::with_capacity(capacity.min(threshold.get()))),
        }
    }

    /// Returns the current threshold.
    #[inline]
    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Returns `true` if the elements are held in an [`ArraySet`].
    ///
    /// Always the opposite of [`is_hashed_representation`](Self::is_hashed_representation).
    #[inline]
    #[must_use]
    pub const fn is_array_representation(&self) -> bool {
        matches!(self.storage, Storage::Array(_))
    }

    /// Returns `true` if the elements are held in a [`HashedSet`].
    #[inline]
    #[must_use]
    pub const fn is_hashed_representation(&self) -> bool {
        matches!(self.storage, Storage::Hashed(_))
    }

    /// Returns an iterator over the elements.
    ///
    /// Array storage yields insertion order, hash storage an unspecified order.
    #[inline]
    pub fn iter(&self) -> AdaptiveSetIterator<'_, T> {
        AdaptiveSetIterator {
            inner: match &self.storage {
                Storage::Array(array) => AdaptiveSetIteratorInner::Array(array.iter()),
                Storage::Hashed(hashed) => AdaptiveSetIteratorInner::Hashed(hashed.iter()),
            },
        }
    }
}

impl<T: Element> AdaptiveSet<T> {
    /// Creates a set from a list of elements with the default threshold.
    ///
    /// Starts directly in hash storage when the distinct elements reach the
    /// threshold.
    #[must_use]
    pub fn of<I: IntoIterator<Item = T>>(elements: I) -> Self {
        elements.into_iter().collect()
    }

    /// Creates a set from the distinct elements of `elements` with the default
    /// threshold.
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self {
        let mut set = Self::new();
        set.add_slice(elements);
        set
    }

    /// Creates a set with the given threshold from the elements of `iter`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::prelude::*;
    ///
    /// let threshold = Threshold::new(3).unwrap();
    /// let set = AdaptiveSet::from_iter_with_threshold([1, 1, 2], threshold);
    /// assert!(set.is_array_representation());
    ///
    /// let set = AdaptiveSet::from_iter_with_threshold([1, 2, 3], threshold);
    /// assert!(set.is_hashed_representation());
    /// ```
    #[must_use]
    pub fn from_iter_with_threshold<I>(iter: I, threshold: Threshold) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::with_threshold(threshold);
        set.extend(iter);
        set
    }

    /// Returns `true` if the set contains `element`.
    ///
    /// Accepts any borrowed form of the element type.
    #[inline]
    #[must_use]
    pub fn contains<Q>(&self, element: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match &self.storage {
            Storage::Array(array) => array.contains(element),
            Storage::Hashed(hashed) => hashed.contains(element),
        }
    }

    /// Changes the threshold and converts the storage if it no longer fits.
    ///
    /// Array storage holding at least `threshold` elements becomes hashed;
    /// hash storage holding fewer than `threshold` elements becomes an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use setkit::prelude::*;
    ///
    /// let mut set = AdaptiveSet::of([1, 2, 3]);
    /// assert!(set.is_array_representation());
    ///
    /// set.set_threshold(Threshold::new(2).unwrap());
    /// assert!(set.is_hashed_representation());
    ///
    /// set.set_threshold(Threshold::new(10).unwrap());
    /// assert!(set.is_array_representation());
    /// ```
    pub fn set_threshold(&mut self, threshold: Threshold) {
        tracing::debug!(
            from = self.threshold.get(),
            to = threshold.get(),
            size = self.len(),
            "adaptive set threshold changed"
        );
        self.threshold = threshold;

        let size = self.len();
        match self.storage {
            Storage::Array(_) if size >= threshold.get() => self.transform_to_hashed(),
            Storage::Hashed(_) if size < threshold.get() => self.transform_to_array(),
            _ => {}
        }
    }

    /// Changes the threshold from a raw size.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThresholdError`] if `threshold` is zero; the set is
    /// left unchanged.
    pub fn try_set_threshold(&mut self, threshold: usize) -> Result<(), InvalidThresholdError> {
        let threshold = Threshold::new(threshold)?;
        self.set_threshold(threshold);
        Ok(())
    }

    /// Creates an [`ArraySet`] with clones of the elements.
    #[must_use]
    pub fn to_array_set(&self) -> ArraySet<T> {
        match &self.storage {
            Storage::Array(array) => array.clone(),
            Storage::Hashed(hashed) => hashed.to_array_set(),
        }
    }

    /// Creates a [`HashedSet`] with clones of the elements.
    #[must_use]
    pub fn to_hashed_set(&self) -> HashedSet<T> {
        match &self.storage {
            Storage::Array(array) => array.to_hashed_set(),
            Storage::Hashed(hashed) => hashed.clone(),
        }
    }

    /// Converts into an [`ArraySet`], moving the elements.
    #[must_use]
    pub fn into_array_set(self) -> ArraySet<T> {
        match self.storage {
            Storage::Array(array) => array,
            Storage::Hashed(hashed) => hashed.into_array_set(),
        }
    }

    /// Converts into a [`HashedSet`], moving the elements.
    #[must_use]
    pub fn into_hashed_set(self) -> HashedSet<T> {
        match self.storage {
            Storage::Array(array) => array.into_hashed_set(),
            Storage::Hashed(hashed) => hashed,
        }
    }

    /// Converts the storage to whichever representation the current size
    /// calls for.
    fn settle(&mut self) {
        let size = self.len();
        if self.is_array_representation() && size >= self.threshold.get() {
            self.transform_to_hashed();
        } else if self.is_hashed_representation() && size <= self.threshold.shrink_boundary() {
            self.transform_to_array();
        }
    }

    fn transform_to_hashed(&mut self) {
        self.storage = match std::mem::take(&mut self.storage) {
            Storage::Array(array) => {
                tracing::debug!(
                    size = array.len(),
                    threshold = self.threshold.get(),
                    "adaptive set switched from array to hashed storage"
                );
                Storage::Hashed(array.into_hashed_set())
            }
            hashed @ Storage::Hashed(_) => hashed,
        };
    }

    fn transform_to_array(&mut self) {
        self.storage = match std::mem::take(&mut self.storage) {
            Storage::Hashed(hashed) => {
                tracing::debug!(
                    size = hashed.len(),
                    threshold = self.threshold.get(),
                    "adaptive set switched from hashed to array storage"
                );
                Storage::Array(hashed.into_array_set())
            }
            array @ Storage::Array(_) => array,
        };
    }
}

// =============================================================================
// Capability Contracts
// =============================================================================

impl<T: Element> ComparableSet<T> for AdaptiveSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        match &self.storage {
            Storage::Array(array) => ComparableSet::contains(array, element),
            Storage::Hashed(hashed) => ComparableSet::contains(hashed, element),
        }
    }

    #[inline]
    fn len(&self) -> usize {
        match &self.storage {
            Storage::Array(array) => array.len(),
            Storage::Hashed(hashed) => hashed.len(),
        }
    }

    fn elements(&self) -> Elements<'_, T> {
        Box::new(self.iter())
    }

    fn representation_name(&self) -> &'static str {
        "AdaptiveSet"
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
        match &self.storage {
            Storage::Array(array) => array.to_vec(),
            Storage::Hashed(hashed) => hashed.to_vec(),
        }
    }

    fn to_std_hash_set(&self) -> StdHashSet<T, SetHasher> {
        match &self.storage {
            Storage::Array(array) => array.to_std_hash_set(),
            Storage::Hashed(hashed) => hashed.to_std_hash_set(),
        }
    }
}

impl<T: Element> Set<T> for AdaptiveSet<T> {
    /// Adds `element`, switching to hash storage if the array reaches the
    /// threshold.
    fn add(&mut self, element: T) -> bool {
        match &mut self.storage {
            Storage::Array(array) => {
                let added = array.add(element);
                if added && array.len() >= self.threshold.get() {
                    self.transform_to_hashed();
                }
                added
            }
            Storage::Hashed(hashed) => hashed.add(element),
        }
    }

    /// Removes `element`, switching to array storage if the hash table falls
    /// to half the threshold or below.
    fn remove(&mut self, element: &T) -> bool {
        match &mut self.storage {
            Storage::Array(array) => array.remove(element),
            Storage::Hashed(hashed) => {
                let removed = hashed.remove(element);
                if removed && hashed.len() <= self.threshold.shrink_boundary() {
                    self.transform_to_array();
                }
                removed
            }
        }
    }

    /// Removes every element and leaves the set in array storage.
    ///
    /// An array keeps its capacity; a hash table is released.
    fn clear(&mut self) {
        match &mut self.storage {
            Storage::Array(array) => array.clear(),
            Storage::Hashed(_) => {
                tracing::debug!(
                    threshold = self.threshold.get(),
                    "adaptive set cleared, switched from hashed to array storage"
                );
                self.storage = Storage::default();
            }
        }
    }
}

impl<T: Element> Representation<T> for AdaptiveSet<T> {
    /// Same as [`AdaptiveSet::with_capacity`]: the threshold is the default.
    #[inline]
    fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity(capacity)
    }

    /// Union that keeps `self`'s threshold.
    ///
    /// An array-backed receiver builds the result incrementally, switching to
    /// hash storage as soon as it reaches the threshold. Its array is
    /// pre-sized for both operands, up to the threshold.
    fn union_with(&self, other: &dyn ComparableSet<T>) -> Self {
        match &self.storage {
            Storage::Array(array) => {
                let capacity = (array.len() + other.len()).min(self.threshold.get());
                let mut union = Self {
                    threshold: self.threshold,
                    storage: Storage::Array(ArraySet::with_capacity(capacity)),
                };
                union.extend(array.iter().cloned());
                union.add_from(other);
                union
            }
            Storage::Hashed(hashed) => {
                let mut union = Self {
                    threshold: self.threshold,
                    storage: Storage::Hashed(hashed.union_with(other)),
                };
                union.settle();
                union
            }
        }
    }

    /// Intersection that keeps `self`'s threshold.
    ///
    /// A hash-backed result at or below half the threshold becomes an array.
    fn intersection_with(&self, other: &dyn ComparableSet<T>) -> Self {
        let storage = match &self.storage {
            Storage::Array(array) => Storage::Array(array.intersection_with(other)),
            Storage::Hashed(hashed) => Storage::Hashed(hashed.intersection_with(other)),
        };
        let mut intersection = Self {
            threshold: self.threshold,
            storage,
        };
        intersection.settle();
        intersection
    }

    /// Difference that keeps `self`'s threshold.
    fn difference_with(&self, other: &dyn ComparableSet<T>) -> Self {
        let storage = match &self.storage {
            Storage::Array(array) => Storage::Array(array.difference_with(other)),
            Storage::Hashed(hashed) => Storage::Hashed(hashed.difference_with(other)),
        };
        let mut difference = Self {
            threshold: self.threshold,
            storage,
        };
        difference.settle();
        difference
    }
}

static_assertions::assert_impl_all!(AdaptiveSet<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(AdaptiveSet<String>: Send, Sync, Clone, Default);

// =============================================================================
// Iterators
// =============================================================================

/// Iterator over references to the elements of an [`AdaptiveSet`].
pub struct AdaptiveSetIterator<'a, T> {
    inner: AdaptiveSetIteratorInner<'a, T>,
}

enum AdaptiveSetIteratorInner<'a, T> {
    Array(ArraySetIterator<'a, T>),
    Hashed(HashedSetIterator<'a, T>),
}

impl<'a, T> Iterator for AdaptiveSetIterator<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            AdaptiveSetIteratorInner::Array(iter) => iter.next(),
            AdaptiveSetIteratorInner::Hashed(iter) => iter.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            AdaptiveSetIteratorInner::Array(iter) => iter.size_hint(),
            AdaptiveSetIteratorInner::Hashed(iter) => iter.size_hint(),
        }
    }
}

impl<T> ExactSizeIterator for AdaptiveSetIterator<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        match &self.inner {
            AdaptiveSetIteratorInner::Array(iter) => iter.len(),
            AdaptiveSetIteratorInner::Hashed(iter) => iter.len(),
        }
    }
}

impl<T> FusedIterator for AdaptiveSetIterator<'_, T> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for AdaptiveSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> FromIterator<T> for AdaptiveSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with_threshold(iter, Threshold::DEFAULT)
    }
}

/// Adds each element in turn, so the storage switches as soon as the array
/// reaches the threshold.
impl<T: Element> Extend<T> for AdaptiveSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<'a, T: Element + Copy + 'a> Extend<&'a T> for AdaptiveSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Element> From<Vec<T>> for AdaptiveSet<T> {
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for AdaptiveSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Element> From<ArraySet<T>> for AdaptiveSet<T> {
    /// Adopts the array with the default threshold, converting it if it is
    /// already too large.
    fn from(array: ArraySet<T>) -> Self {
        let mut set = Self {
            threshold: Threshold::DEFAULT,
            storage: Storage::Array(array),
        };
        set.settle();
        set
    }
}

impl<T: Element> From<HashedSet<T>> for AdaptiveSet<T> {
    /// Adopts the hash set with the default threshold, converting it if it is
    /// small enough for an array.
    fn from(hashed: HashedSet<T>) -> Self {
        let mut set = Self {
            threshold: Threshold::DEFAULT,
            storage: Storage::Hashed(hashed),
        };
        set.settle();
        set
    }
}

impl<'a, T> IntoIterator for &'a AdaptiveSet<T> {
    type Item = &'a T;
    type IntoIter = AdaptiveSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for AdaptiveSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for AdaptiveSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        contract::write_set(formatter, "AdaptiveSet", self.iter())
    }
}

// =============================================================================
// Tests
// =============================================================================
