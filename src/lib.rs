//! # setkit
//!
//! Interchangeable set representations sharing one set-algebra contract.
//!
//! ## Overview
//!
//! A set is an unordered collection of unique elements. This crate offers it in
//! three representations that can be mixed freely in every set operation:
//!
//! - [`ArraySet`](collections::ArraySet): linear storage, fastest for small sets
//! - [`HashedSet`](collections::HashedSet): hash-table storage, fastest for large sets
//! - [`AdaptiveSet`](collections::AdaptiveSet): starts as an array, switches to a
//!   hash table past a size threshold and back again when it shrinks
//!
//! The shared behaviour lives in two capability traits:
//!
//! - [`ComparableSet`](contract::ComparableSet): read-only queries and derived sets
//! - [`Set`](contract::Set): `ComparableSet` plus insertion and removal
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` / `Deserialize` for all set types
//! - `fxhash`: hash sets use `rustc-hash`'s `FxBuildHasher`
//! - `ahash`: hash sets use `ahash`'s `RandomState`
//! - `full`: Enable all optional integrations
//!
//! ## Example
//!
//! ```rust
//! use setkit::prelude::*;
//!
//! let mut small = AdaptiveSet::with_threshold(Threshold::new(4).unwrap());
//! small.add_slice(&[1, 2, 3]);
//! assert!(small.is_array_representation());
//!
//! small.add(4);
//! assert!(small.is_hashed_representation());
//!
//! let other = HashedSet::of([3, 4, 5]);
//! let union = small.union(&other);
//! assert_eq!(union.len(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits and every set type.
///
/// # Usage
///
/// ```rust
/// use setkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::collections::*;
    pub use crate::contract::*;
    pub use crate::hasher::SetHasher;
}

pub mod collections;
pub mod contract;
pub mod hasher;
