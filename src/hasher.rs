//! Hash builder used by hash-backed sets.
//!
//! The hasher is chosen at compile time:
//!
//! | Feature  | `SetHasher`                    |
//! |----------|--------------------------------|
//! | `fxhash` | `rustc_hash::FxBuildHasher`    |
//! | `ahash`  | `ahash::RandomState`           |
//! | neither  | `std::hash::RandomState`       |
//!
//! `fxhash` wins when both features are enabled.

/// Hash builder for [`HashedSet`](crate::collections::HashedSet).
#[cfg(feature = "fxhash")]
pub type SetHasher = rustc_hash::FxBuildHasher;

/// Hash builder for [`HashedSet`](crate::collections::HashedSet).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type SetHasher = ahash::RandomState;

/// Hash builder for [`HashedSet`](crate::collections::HashedSet).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type SetHasher = std::hash::RandomState;
