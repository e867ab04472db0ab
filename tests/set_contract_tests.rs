//! Integration tests for the capability contracts.
//!
//! Every test runs against each representation through `Box<dyn Set<i32>>`,
//! so the shared contract is checked the same way for all of them.

use rstest::rstest;
use setkit::prelude::*;

fn empty_array() -> Box<dyn Set<i32>> {
    Box::new(ArraySet::new())
}

fn empty_hashed() -> Box<dyn Set<i32>> {
    Box::new(HashedSet::new())
}

fn empty_adaptive() -> Box<dyn Set<i32>> {
    Box::new(AdaptiveSet::new())
}

fn assert_contains_all(set: &dyn ComparableSet<i32>, elements: &[i32]) {
    for element in elements {
        assert!(set.contains(element), "expected {set} to contain {element}");
    }
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_add(#[case] mut set: Box<dyn Set<i32>>) {
    assert!(set.add(1));

    assert_eq!(set.len(), 1);
    assert!(set.contains(&1));
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_add_duplicate(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);
    assert!(!set.add(3));

    assert_eq!(set.len(), 3);
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_add_slice_with_duplicates(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 1, 2, 2, 3]);

    assert_eq!(set.len(), 3);
    assert_contains_all(&*set, &[1, 2, 3]);
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_add_from_other_representation(#[case] mut set: Box<dyn Set<i32>>) {
    set.add(1);
    set.add_from(&HashedSet::of([1, 2, 3]));
    set.add_from(&ArraySet::of([3, 4]));

    assert_eq!(set.len(), 4);
    assert_contains_all(&*set, &[1, 2, 3, 4]);
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_remove(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);
    assert!(set.remove(&2));

    assert_eq!(set.len(), 2);
    assert!(!set.contains(&2));
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_remove_non_existing(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2]);
    assert!(!set.remove(&3));

    assert_eq!(set.len(), 2);
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_clear(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);
    set.clear();

    assert!(set.is_empty());
    assert!(!set.contains(&1));

    set.add(4);
    assert_eq!(set.len(), 1);
}

// =============================================================================
// Queries
// =============================================================================

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_equals(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    assert!(set.equals(&ArraySet::of([3, 2, 1])));
    assert!(set.equals(&HashedSet::of([1, 2, 3])));
    assert!(!set.equals(&AdaptiveSet::of([1, 2])));
    assert!(!set.equals(&ArraySet::of([1, 2, 4])));
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_is_subset_of(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2]);

    assert!(set.is_subset_of(&ArraySet::of([1, 2, 3])));
    assert!(set.is_subset_of(&HashedSet::of([1, 2])));
    assert!(!set.is_subset_of(&AdaptiveSet::of([1, 3])));
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_is_superset_of(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    assert!(set.is_superset_of(&ArraySet::of([1, 2])));
    assert!(set.is_superset_of(&HashedSet::<i32>::new()));
    assert!(!set.is_superset_of(&AdaptiveSet::of([3, 4])));
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_is_disjoint(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    assert!(set.is_disjoint(&ArraySet::of([4, 5])));
    assert!(!set.is_disjoint(&HashedSet::of([3, 4])));
}

// =============================================================================
// Derived Sets
// =============================================================================

#[rstest]
#[case::array(empty_array(), "ArraySet")]
#[case::hashed(empty_hashed(), "HashedSet")]
#[case::adaptive(empty_adaptive(), "AdaptiveSet")]
fn test_union(#[case] mut set: Box<dyn Set<i32>>, #[case] name: &str) {
    set.add_slice(&[1, 2, 3]);

    let union = set.union(&HashedSet::of([3, 4, 5]));

    assert_eq!(union.len(), 5);
    assert_contains_all(&*union, &[1, 2, 3, 4, 5]);
    assert_eq!(union.representation_name(), name);
}

#[rstest]
#[case::array(empty_array(), "ArraySet")]
#[case::hashed(empty_hashed(), "HashedSet")]
#[case::adaptive(empty_adaptive(), "AdaptiveSet")]
fn test_intersection(#[case] mut set: Box<dyn Set<i32>>, #[case] name: &str) {
    set.add_slice(&[1, 2, 3, 4]);

    let intersection = set.intersection(&ArraySet::of([2, 3, 4, 5]));

    assert_eq!(intersection.len(), 3);
    assert_contains_all(&*intersection, &[2, 3, 4]);
    assert!(!intersection.contains(&1));
    assert_eq!(intersection.representation_name(), name);
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_copy_is_independent(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    let copy = set.copy();
    set.add(4);

    assert_eq!(copy.len(), 3);
    assert_contains_all(&*copy, &[1, 2, 3]);
    assert!(!copy.contains(&4));
}

// =============================================================================
// Snapshots and Enumeration
// =============================================================================

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_to_vec(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    let mut elements = set.to_vec();
    elements.sort_unstable();

    assert_eq!(elements, vec![1, 2, 3]);
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_to_std_hash_set(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    let snapshot = set.to_std_hash_set();

    assert_eq!(snapshot.len(), 3);
    assert!([1, 2, 3].iter().all(|element| snapshot.contains(element)));
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_elements_restart_on_each_call(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    let first: Vec<i32> = set.elements().copied().collect();
    let second: Vec<i32> = set.elements().copied().collect();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[rstest]
#[case::array(empty_array())]
#[case::hashed(empty_hashed())]
#[case::adaptive(empty_adaptive())]
fn test_elements_stop_early(#[case] mut set: Box<dyn Set<i32>>) {
    set.add_slice(&[1, 2, 3]);

    let taken: Vec<&i32> = set.elements().take(2).collect();

    assert_eq!(taken.len(), 2);
}

// =============================================================================
// Textual Representation
// =============================================================================

#[rstest]
#[case::array(empty_array(), "ArraySet")]
#[case::hashed(empty_hashed(), "HashedSet")]
#[case::adaptive(empty_adaptive(), "AdaptiveSet")]
fn test_display(#[case] mut set: Box<dyn Set<i32>>, #[case] name: &str) {
    set.add_slice(&[1, 2, 3]);

    let rendered = set.to_string();
    let expected: Vec<String> = [
        [1, 2, 3],
        [1, 3, 2],
        [2, 1, 3],
        [2, 3, 1],
        [3, 1, 2],
        [3, 2, 1],
    ]
    .iter()
    .map(|[a, b, c]| format!("{name}{{{a}, {b}, {c}}}"))
    .collect();

    assert!(
        expected.contains(&rendered),
        "expected one of {expected:?}, got {rendered}"
    );
}

#[rstest]
#[case::array(empty_array(), "ArraySet{}")]
#[case::hashed(empty_hashed(), "HashedSet{}")]
#[case::adaptive(empty_adaptive(), "AdaptiveSet{}")]
fn test_display_empty(#[case] set: Box<dyn Set<i32>>, #[case] expected: &str) {
    assert_eq!(set.to_string(), expected);
}

// =============================================================================
// Constructors
// =============================================================================

#[rstest]
fn test_constructors_from_slice() {
    let slice: Vec<i32> = (1..=10).collect();

    let sets: [Box<dyn ComparableSet<i32>>; 3] = [
        Box::new(ArraySet::from_slice(&slice)),
        Box::new(HashedSet::from_slice(&slice)),
        Box::new(AdaptiveSet::from_slice(&slice)),
    ];

    for set in &sets {
        assert_eq!(set.len(), slice.len());
        assert_contains_all(&**set, &slice);
    }
}

#[rstest]
fn test_constructors_with_capacity_start_empty() {
    let sets: [Box<dyn ComparableSet<i32>>; 3] = [
        Box::new(ArraySet::with_capacity(5)),
        Box::new(HashedSet::with_capacity(5)),
        Box::new(AdaptiveSet::with_capacity(5)),
    ];

    for set in &sets {
        assert!(set.is_empty());
    }
}
