//! Filterable capability - discarding elements that fail a predicate.
//!
//! This module provides the [`Filterable`] trait for containers that can
//! drop elements while keeping their own shape: the result is the same
//! container type, holding the subset of elements the predicate accepted.
//!
//! Not every container qualifies. A container without an empty state (such
//! as [`Identity`](super::Identity)) has nothing to return when its only
//! element is rejected, and a disjoint union would have to invent a value
//! for its other branch. Those types simply do not implement the trait.
//!
//! # Laws
//!
//! - **Identity**: `fa.filter(|_| true)` keeps every element.
//! - **Annihilation**: `fa.filter(|_| false)` is the empty container.
//! - **Distributivity**: `fa.filter(p).filter(q)` equals
//!   `fa.filter(|x| p(x) && q(x))`.
//!
//! # Examples
//!
//! ```rust
//! use fluss::typeclass::Filterable;
//!
//! let evens = vec![1, 2, 3, 4].filter(|n| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let kept = Some(5).filter(|n| *n > 0);
//! assert_eq!(kept, Some(5));
//! ```

use super::higher::TypeConstructor;

/// A capability for containers that can discard elements by predicate.
///
/// The predicate observes each element by reference and the kept elements
/// are returned in a container of the same type, preserving their original
/// order. The bound is `Fn + 'static` for the same reason as
/// [`Chain`](super::Chain): lazily re-traversed containers store the
/// predicate and re-run it on every traversal.
///
/// # Examples
///
/// ```rust
/// use fluss::typeclass::Filterable;
///
/// let positive = vec![-2, 3, -4, 5].filter(|n| *n > 0);
/// assert_eq!(positive, vec![3, 5]);
/// ```
pub trait Filterable: TypeConstructor {
    /// Keeps the elements satisfying `predicate`, discarding the rest.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Filterable;
    ///
    /// assert_eq!(Some(4).filter(|n| n % 2 == 0), Some(4));
    /// assert_eq!(Some(3).filter(|n| n % 2 == 0), None);
    /// ```
    #[must_use]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&Self::Inner) -> bool + 'static;

    /// Discards the elements satisfying `predicate`, keeping the rest.
    ///
    /// The complement of [`filter`](Filterable::filter).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Filterable;
    ///
    /// let odds = vec![1, 2, 3, 4].reject(|n| n % 2 == 0);
    /// assert_eq!(odds, vec![1, 3]);
    /// ```
    #[must_use]
    fn reject<P>(self, predicate: P) -> Self
    where
        Self: Sized,
        P: Fn(&Self::Inner) -> bool + 'static,
    {
        self.filter(move |element| !predicate(element))
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Filterable for Option<A> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        self.and_then(|element| predicate(&element).then_some(element))
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Filterable for Vec<A> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        self.into_iter().filter(predicate).collect()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_vec_filter_true_is_identity(values in prop::collection::vec(any::<i32>(), 0..20)) {
            prop_assert_eq!(values.clone().filter(|_| true), values);
        }

        #[test]
        fn prop_vec_filter_false_is_empty(values in prop::collection::vec(any::<i32>(), 0..20)) {
            prop_assert!(values.filter(|_| false).is_empty());
        }

        #[test]
        fn prop_vec_filter_result_is_subset(values in prop::collection::vec(any::<i32>(), 0..20)) {
            let kept = values.clone().filter(|n| n % 3 == 0);
            prop_assert!(kept.iter().all(|element| values.contains(element)));
        }

        #[test]
        fn prop_filter_reject_partition(values in prop::collection::vec(any::<i32>(), 0..20)) {
            let kept = values.clone().filter(|n| n % 2 == 0);
            let dropped = values.clone().reject(|n| n % 2 == 0);
            prop_assert_eq!(kept.len() + dropped.len(), values.len());
        }
    }
}
