//! Set algebra expressed once over the capability contract.
//!
//! Every function here only uses `contains`, `len` and `elements`, so it works
//! for any pairing of representations. Functions that build a set return the
//! left operand's representation.
//!
//! # Examples
//!
//! ```rust
//! use setkit::contract::algebra;
//! use setkit::prelude::*;
//!
//! let left = ArraySet::of([1, 2, 3]);
//! let right = HashedSet::of([3, 4, 5]);
//!
//! let union: ArraySet<i32> = algebra::union(&left, &right);
//! assert_eq!(union.len(), 5);
//!
//! let intersection: ArraySet<i32> = algebra::intersection(&left, &right);
//! assert_eq!(intersection.to_vec(), vec![3]);
//! ```

use super::{ComparableSet, Element, Representation};

/// Returns `true` if both sets hold exactly the same elements.
///
/// Neither set holds duplicates, so two sets of equal size where one is a
/// subset of the other are equal.
pub fn equals<T, A, B>(left: &A, right: &B) -> bool
where
    T: Element,
    A: ComparableSet<T> + ?Sized,
    B: ComparableSet<T> + ?Sized,
{
    left.len() == right.len() && is_subset_of(left, right)
}

/// Returns `true` if every element of `left` is contained in `right`.
///
/// Stops at the first element that is missing.
pub fn is_subset_of<T, A, B>(left: &A, right: &B) -> bool
where
    T: Element,
    A: ComparableSet<T> + ?Sized,
    B: ComparableSet<T> + ?Sized,
{
    if left.len() > right.len() {
        return false;
    }

    left.elements().all(|element| right.contains(element))
}

/// Returns `true` if every element of `right` is contained in `left`.
pub fn is_superset_of<T, A, B>(left: &A, right: &B) -> bool
where
    T: Element,
    A: ComparableSet<T> + ?Sized,
    B: ComparableSet<T> + ?Sized,
{
    is_subset_of(right, left)
}

/// Returns `true` if the sets share no element.
pub fn is_disjoint<T, A, B>(left: &A, right: &B) -> bool
where
    T: Element,
    A: ComparableSet<T> + ?Sized,
    B: ComparableSet<T> + ?Sized,
{
    if left.len() <= right.len() {
        !left.elements().any(|element| right.contains(element))
    } else {
        !right.elements().any(|element| left.contains(element))
    }
}

/// Creates a set of `left`'s representation holding the elements of both sets.
///
/// The result is pre-sized for `left.len() + right.len()` elements, which
/// over-allocates when the sets overlap.
///
/// The result comes from [`Representation::with_capacity`], so an
/// [`AdaptiveSet`](crate::collections::AdaptiveSet) result has the default
/// threshold, not `left`'s. Use [`Representation::union_with`] to keep it.
pub fn union<T, A, B>(left: &A, right: &B) -> A
where
    T: Element,
    A: Representation<T>,
    B: ComparableSet<T> + ?Sized,
{
    let mut union = A::with_capacity(left.len() + right.len());

    for element in left.elements() {
        union.add(element.clone());
    }
    for element in right.elements() {
        union.add(element.clone());
    }

    union
}

/// Creates a set of `left`'s representation holding the elements present in
/// both sets.
///
/// Like [`union`], an adaptive result has the default threshold; use
/// [`Representation::intersection_with`] to keep `left`'s.
pub fn intersection<T, A, B>(left: &A, right: &B) -> A
where
    T: Element,
    A: Representation<T>,
    B: ComparableSet<T> + ?Sized,
{
    let mut intersection = A::with_capacity(left.len().min(right.len()));

    for element in left.elements() {
        if right.contains(element) {
            intersection.add(element.clone());
        }
    }

    intersection
}

/// Creates a set of `left`'s representation holding the elements of `left`
/// that are not in `right`.
///
/// Like [`union`], an adaptive result has the default threshold.
pub fn difference<T, A, B>(left: &A, right: &B) -> A
where
    T: Element,
    A: Representation<T>,
    B: ComparableSet<T> + ?Sized,
{
    let mut difference = A::with_capacity(left.len());

    for element in left.elements() {
        if !right.contains(element) {
            difference.add(element.clone());
        }
    }

    difference
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::{AdaptiveSet, ArraySet, HashedSet, Threshold};
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2, 3], vec![3, 2, 1], true)]
    #[case(vec![1, 2, 3], vec![1, 2], false)]
    #[case(vec![1, 2], vec![1, 3], false)]
    #[case(vec![], vec![], true)]
    fn test_equals_across_representations(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: bool,
    ) {
        let left = ArraySet::from(left);
        let right = HashedSet::from(right);

        assert_eq!(equals(&left, &right), expected);
        assert_eq!(equals(&right, &left), expected);
    }

    #[rstest]
    fn test_subset_short_circuits_on_larger_left() {
        let left = HashedSet::of([1, 2, 3]);
        let right = ArraySet::of([1, 2]);
        assert!(!is_subset_of(&left, &right));
        assert!(is_superset_of(&left, &right));
    }

    #[rstest]
    fn test_empty_set_is_subset_of_everything() {
        let empty: ArraySet<i32> = ArraySet::new();
        let other = HashedSet::of([1]);
        assert!(is_subset_of(&empty, &other));
        assert!(is_subset_of(&empty, &empty));
    }

    #[rstest]
    fn test_union_keeps_left_representation() {
        let left = ArraySet::of([1, 2, 3]);
        let right = HashedSet::of([3, 4, 5]);

        let result: ArraySet<i32> = union(&left, &right);

        assert_eq!(result.len(), 5);
        assert_eq!(&result.as_slice()[..3], &[1, 2, 3]);
    }

    #[rstest]
    fn test_union_presizes_for_both_operands() {
        let left = ArraySet::of([1, 2, 3]);
        let right = ArraySet::of([3, 4, 5]);

        let result: ArraySet<i32> = union(&left, &right);

        assert!(result.capacity() >= 6);
    }

    #[rstest]
    fn test_intersection_keeps_left_order() {
        let left = ArraySet::of([4, 3, 2, 1]);
        let right = HashedSet::of([2, 3, 4, 5]);

        let result: ArraySet<i32> = intersection(&left, &right);

        assert_eq!(result.as_slice(), &[4, 3, 2]);
    }

    #[rstest]
    fn test_adaptive_result_takes_default_threshold() {
        let small_threshold = Threshold::new(4).unwrap();
        let left = AdaptiveSet::from_iter_with_threshold([1, 2, 3], small_threshold);
        let right = ArraySet::of([3, 4, 5]);

        let generic: AdaptiveSet<i32> = union(&left, &right);
        let generic_intersection: AdaptiveSet<i32> = intersection(&left, &right);

        assert_eq!(generic.threshold(), Threshold::DEFAULT);
        assert!(generic.is_array_representation());
        assert_eq!(generic_intersection.threshold(), Threshold::DEFAULT);

        let kept = left.union_with(&right);
        assert_eq!(kept.threshold(), small_threshold);
        assert!(kept.is_hashed_representation());
        assert_eq!(kept, generic);
    }

    #[rstest]
    fn test_difference_and_disjoint() {
        let left = HashedSet::of([1, 2, 3]);
        let right = AdaptiveSet::from_iter([2, 3]);

        let result: HashedSet<i32> = difference(&left, &right);

        assert_eq!(result.to_vec(), vec![1]);
        assert!(is_disjoint(&result, &right));
        assert!(!is_disjoint(&left, &right));
    }
}
