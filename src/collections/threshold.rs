//! Size threshold controlling when an [`AdaptiveSet`](super::AdaptiveSet)
//! changes representation.

use std::fmt;
use std::num::NonZeroUsize;

/// Default size at which an adaptive set switches from array to hash storage.
///
/// Membership tests on a hash set overtake a linear scan at around this size
/// for small element types (see `benches/contains_bench.rs`).
pub const DEFAULT_THRESHOLD: usize = 20;

/// Error returned when a threshold of zero is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidThresholdError;

impl fmt::Display for InvalidThresholdError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Threshold: size threshold must be at least 1")
    }
}

impl std::error::Error for InvalidThresholdError {}

/// A size threshold of at least 1.
///
/// An adaptive set grows into hash storage when its array reaches
/// [`get`](Self::get) elements, and shrinks back into array storage when its
/// hash table falls to [`shrink_boundary`](Self::shrink_boundary) elements or
/// fewer.
///
/// # Examples
///
/// ```rust
/// use setkit::collections::Threshold;
///
/// let threshold = Threshold::new(5).unwrap();
/// assert_eq!(threshold.get(), 5);
/// assert_eq!(threshold.shrink_boundary(), 2);
///
/// assert!(Threshold::new(0).is_err());
/// assert_eq!(Threshold::default().get(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(NonZeroUsize);

impl Threshold {
    /// The threshold used when none is given, [`DEFAULT_THRESHOLD`].
    pub const DEFAULT: Self = match NonZeroUsize::new(DEFAULT_THRESHOLD) {
        Some(value) => Self(value),
        None => panic!("DEFAULT_THRESHOLD must be non-zero"),
    };

    /// Creates a threshold.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidThresholdError`] if `value` is zero.
    pub const fn new(value: usize) -> Result<Self, InvalidThresholdError> {
        match NonZeroUsize::new(value) {
            Some(value) => Ok(Self(value)),
            None => Err(InvalidThresholdError),
        }
    }

    /// Creates a threshold from a value already known to be non-zero.
    #[inline]
    #[must_use]
    pub const fn from_non_zero(value: NonZeroUsize) -> Self {
        Self(value)
    }

    /// The size at which array storage turns into hash storage.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The size at or below which hash storage turns back into array storage.
    #[inline]
    #[must_use]
    pub const fn shrink_boundary(self) -> usize {
        self.0.get() / 2
    }
}

impl Default for Threshold {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroUsize> for Threshold {
    #[inline]
    fn from(value: NonZeroUsize) -> Self {
        Self(value)
    }
}

impl TryFrom<usize> for Threshold {
    type Error = InvalidThresholdError;

    #[inline]
    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}
