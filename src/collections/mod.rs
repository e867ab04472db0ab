//! Set representations.
//!
//! This module provides three interchangeable implementations of the
//! [`Set`](crate::contract::Set) contract:
//!
//! - [`ArraySet`]: elements in a `Vec`, insertion-ordered, O(n) membership
//! - [`HashedSet`]: elements in a hash table, expected O(1) membership
//! - [`AdaptiveSet`]: an `ArraySet` that turns into a `HashedSet` at a size
//!   [`Threshold`] and back again at half of it
//!
//! Any two representations can be compared with `==`, which tests set
//! equality regardless of order or representation.
//!
//! # Examples
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let array = ArraySet::of([1, 2, 3]);
//! let hashed = HashedSet::of([3, 2, 1]);
//! let adaptive = AdaptiveSet::of([2, 3, 1]);
//!
//! assert_eq!(array, hashed);
//! assert_eq!(hashed, adaptive);
//!
//! let intersection = adaptive.intersection_with(&HashedSet::of([2, 3, 4]));
//! assert_eq!(intersection, ArraySet::of([2, 3]));
//! ```

mod adaptive;
mod array;
mod hashed;
#[cfg(feature = "serde")]
mod serialization;
mod threshold;

pub use adaptive::AdaptiveSet;
pub use adaptive::AdaptiveSetIterator;
pub use array::ArraySet;
pub use array::ArraySetIntoIterator;
pub use array::ArraySetIterator;
pub use hashed::HashedSet;
pub use hashed::HashedSetIntoIterator;
pub use hashed::HashedSetIterator;
pub use threshold::DEFAULT_THRESHOLD;
pub use threshold::InvalidThresholdError;
pub use threshold::Threshold;

use crate::contract::{Element, algebra};

/// Implements `PartialEq` between representations as set equality.
macro_rules! impl_set_equality {
    ($($left:ident => [$($right:ident),+]),+ $(,)?) => {
        $($(
            impl<T: Element> PartialEq<$right<T>> for $left<T> {
                fn eq(&self, other: &$right<T>) -> bool {
                    algebra::equals(self, other)
                }
            }
        )+)+

        $(
            impl<T: Element> Eq for $left<T> {}
        )+
    };
}

impl_set_equality!(
    ArraySet => [ArraySet, HashedSet, AdaptiveSet],
    HashedSet => [ArraySet, HashedSet, AdaptiveSet],
    AdaptiveSet => [ArraySet, HashedSet, AdaptiveSet],
);

static_assertions::assert_impl_all!(ArraySet<i32>: Send, Sync, Clone, Default, Eq);
static_assertions::assert_impl_all!(HashedSet<i32>: Send, Sync, Clone, Default, Eq);
