//! Property-based tests for the lazy List sequence.
//!
//! These properties pin down the algebra of the pipeline operators:
//!
//! - **Chain laws**: left identity, right identity, associativity
//! - **Map laws**: identity and composition
//! - **Filter laws**: identity, annihilation, distribution over conjunction
//! - **Replay**: any pipeline traversed twice yields the same elements
//! - **Bounded views**: `take`/`skip` agree with their eager counterparts

#![cfg(feature = "sequence")]

use fluss::sequence::List;
use proptest::prelude::*;

fn small_vecs() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..12)
}

// =============================================================================
// Chain Laws
// =============================================================================

proptest! {
    /// Left identity: `List::of([a]).chain(f)` equals `f(a)`.
    #[test]
    fn prop_chain_left_identity(value in any::<i32>()) {
        let function = |n: i32| List::of([n, n.wrapping_mul(2)]);

        let chained = List::of([value]).chain(function);

        prop_assert_eq!(chained.to_vec(), function(value).to_vec());
    }

    /// Right identity: chaining the singleton constructor changes nothing.
    #[test]
    fn prop_chain_right_identity(values in small_vecs()) {
        let sequence = List::of(values.clone());

        let chained = sequence.chain(|n| List::of([n]));

        prop_assert_eq!(chained.to_vec(), values);
    }

    /// Associativity: `m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))`.
    #[test]
    fn prop_chain_associativity(values in small_vecs()) {
        let first = |n: i32| List::of([n, n.wrapping_add(1)]);
        let second = |n: i32| List::of([n.wrapping_mul(10)]);

        let sequence = List::of(values);
        let left = sequence.chain(first).chain(second);
        let right = sequence.chain(move |x| first(x).chain(second));

        prop_assert_eq!(left.to_vec(), right.to_vec());
    }
}

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    /// Mapping the identity function changes nothing.
    #[test]
    fn prop_map_identity(values in small_vecs()) {
        let sequence = List::of(values.clone());

        prop_assert_eq!(sequence.map(|n| n).to_vec(), values);
    }

    /// Mapping a composition equals composing two maps.
    #[test]
    fn prop_map_composition(values in small_vecs()) {
        let first = |n: i32| n.wrapping_add(3);
        let second = |n: i32| n.wrapping_mul(2);

        let sequence = List::of(values);
        let fused = sequence.map(move |n| second(first(n)));
        let staged = sequence.map(first).map(second);

        prop_assert_eq!(fused.to_vec(), staged.to_vec());
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    /// Filtering with an always-true predicate keeps every element.
    #[test]
    fn prop_filter_true_is_identity(values in small_vecs()) {
        let sequence = List::of(values.clone());

        prop_assert_eq!(sequence.filter(|_| true).to_vec(), values);
    }

    /// Filtering with an always-false predicate empties the sequence.
    #[test]
    fn prop_filter_false_is_empty(values in small_vecs()) {
        let sequence = List::of(values);

        prop_assert!(sequence.filter(|_| false).is_empty());
    }

    /// Two filters in a row equal one filter on the conjunction.
    #[test]
    fn prop_filter_distributes_over_conjunction(values in small_vecs()) {
        let sequence = List::of(values);

        let staged = sequence.filter(|n| n % 2 == 0).filter(|n| *n > 0);
        let fused = sequence.filter(|n| n % 2 == 0 && *n > 0);

        prop_assert_eq!(staged.to_vec(), fused.to_vec());
    }
}

// =============================================================================
// Replay
// =============================================================================

proptest! {
    /// A pipeline traversed twice yields the same elements both times.
    #[test]
    fn prop_traversals_are_repeatable(values in small_vecs()) {
        let pipeline = List::of(values)
            .map(|n| n.wrapping_mul(3))
            .filter(|n| n % 2 == 0);

        prop_assert_eq!(pipeline.to_vec(), pipeline.to_vec());
    }

    /// Clones observe the same elements as the original.
    #[test]
    fn prop_clones_agree(values in small_vecs()) {
        let sequence = List::of(values);
        let cloned = sequence.clone();

        prop_assert_eq!(sequence.to_vec(), cloned.to_vec());
    }
}

// =============================================================================
// Bounded Views
// =============================================================================

proptest! {
    /// `take` agrees with eager truncation.
    #[test]
    fn prop_take_matches_eager(values in small_vecs(), count in 0_usize..16) {
        let sequence = List::of(values.clone());

        let lazy: Vec<i32> = sequence.take(count).to_vec();
        let eager: Vec<i32> = values.into_iter().take(count).collect();

        prop_assert_eq!(lazy, eager);
    }

    /// `skip` agrees with eager dropping.
    #[test]
    fn prop_skip_matches_eager(values in small_vecs(), count in 0_usize..16) {
        let sequence = List::of(values.clone());

        let lazy: Vec<i32> = sequence.skip(count).to_vec();
        let eager: Vec<i32> = values.into_iter().skip(count).collect();

        prop_assert_eq!(lazy, eager);
    }

    /// `take` and `skip` partition the sequence.
    #[test]
    fn prop_take_skip_partition(values in small_vecs(), count in 0_usize..16) {
        let sequence = List::of(values.clone());

        let mut reassembled = sequence.take(count).to_vec();
        reassembled.extend(sequence.skip(count).to_vec());

        prop_assert_eq!(reassembled, values);
    }
}

// =============================================================================
// Consumer Consistency
// =============================================================================

proptest! {
    /// `len` equals the number of materialized elements.
    #[test]
    fn prop_len_matches_to_vec(values in small_vecs()) {
        let sequence = List::of(values);

        prop_assert_eq!(sequence.len(), sequence.to_vec().len());
    }

    /// `is_empty` agrees with `len == 0`.
    #[test]
    fn prop_is_empty_matches_len(values in small_vecs()) {
        let sequence = List::of(values);

        prop_assert_eq!(sequence.is_empty(), sequence.len() == 0);
    }

    /// `fold` over push reproduces `to_vec`.
    #[test]
    fn prop_fold_collect_matches_to_vec(values in small_vecs()) {
        let sequence = List::of(values);

        let folded = sequence.fold(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        });

        prop_assert_eq!(folded, sequence.to_vec());
    }

    /// `contains` agrees with the eager search.
    #[test]
    fn prop_contains_matches_eager(values in small_vecs(), needle in any::<i32>()) {
        let sequence = List::of(values.clone());

        prop_assert_eq!(sequence.contains(&needle), values.contains(&needle));
    }
}
