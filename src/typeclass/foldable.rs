//! Foldable capability - reducing a container to a summary value.
//!
//! This module provides the [`Foldable`] trait: a left fold that walks the
//! container's elements in order, threading an accumulator through a
//! combining function. Everything else the trait offers is derived from that
//! single operation.
//!
//! A right fold is deliberately absent. The containers in this crate include
//! a lazy, potentially unbounded sequence, and folding such a sequence from
//! the right would force complete materialization before the first
//! combination could run.
//!
//! # Examples
//!
//! ```rust
//! use fluss::typeclass::Foldable;
//!
//! let sum = vec![1, 2, 3, 4, 5].fold_left(0, |accumulator, element| accumulator + element);
//! assert_eq!(sum, 15);
//!
//! let present = Some(10).fold_left(5, |accumulator, element| accumulator + element);
//! assert_eq!(present, 15);
//!
//! let absent: Option<i32> = None;
//! assert_eq!(absent.fold_left(5, |accumulator, element| accumulator + element), 5);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A capability for containers whose elements reduce to a single value.
///
/// # Required Methods
///
/// - [`fold_left`](Foldable::fold_left): Left-associative fold
///
/// # Provided Methods
///
/// - [`length`](Foldable::length): Count the elements
/// - [`is_empty`](Foldable::is_empty): Check for the absence of elements
/// - [`to_vec`](Foldable::to_vec): Collect the elements in fold order
///
/// Implementors with cheaper ways to answer `length` or `is_empty` should
/// override the defaults; the defaults visit every element.
///
/// # Examples
///
/// ```rust
/// use fluss::typeclass::Foldable;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(values.clone().fold_left(0, |accumulator, n| accumulator + n), 6);
/// assert_eq!(values.length(), 3);
/// assert!(!values.is_empty());
/// ```
pub trait Foldable: TypeConstructor {
    /// Folds the container from left to right with an accumulator.
    ///
    /// This is the container-agnostic counterpart of `Iterator::fold`: the
    /// accumulator starts at `init` and is combined with every element in
    /// traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Foldable;
    ///
    /// let concatenated = vec!["a", "b", "c"]
    ///     .fold_left(String::new(), |mut accumulator, element| {
    ///         accumulator.push_str(element);
    ///         accumulator
    ///     });
    /// assert_eq!(concatenated, "abc");
    /// ```
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Returns the number of elements in the container.
    ///
    /// The default visits every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Foldable;
    ///
    /// assert_eq!(Some(5).length(), 1);
    /// assert_eq!(None::<i32>.length(), 0);
    /// assert_eq!(vec![1, 2, 3].length(), 3);
    /// ```
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.clone().fold_left(0, |count, _| count + 1)
    }

    /// Returns whether the container holds no elements.
    ///
    /// The default folds the whole container; implementors backed by lazy or
    /// unbounded production must override it with a bounded probe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Foldable;
    ///
    /// assert!(None::<i32>.is_empty());
    /// assert!(!Some(5).is_empty());
    /// assert!(Vec::<i32>::new().is_empty());
    /// ```
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.clone().fold_left(true, |_, _| false)
    }

    /// Collects the elements into a `Vec` in fold order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Foldable;
    ///
    /// assert_eq!(Some(42).to_vec(), vec![42]);
    /// assert_eq!(None::<i32>.to_vec(), Vec::<i32>::new());
    /// ```
    fn to_vec(self) -> Vec<Self::Inner>
    where
        Self: Sized,
    {
        self.fold_left(Vec::new(), |mut accumulator, element| {
            accumulator.push(element);
            accumulator
        })
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Foldable for Option<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match self {
            Some(element) => function(init, element),
            None => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.is_none()
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        usize::from(self.is_some())
    }
}

// =============================================================================
// Result<T, E> Implementation
//
// Err behaves as the empty container: the success value is the only element
// a fold can ever see.
// =============================================================================

impl<T, E> Foldable for Result<T, E> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Ok(element) => function(init, element),
            Err(_) => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        self.is_err()
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        usize::from(self.is_ok())
    }
}

// =============================================================================
// Vec<A> Implementation
// =============================================================================

impl<A> Foldable for Vec<A> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.into_iter().fold(init, function)
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        Self::is_empty(self)
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        self.len()
    }

    #[inline]
    fn to_vec(self) -> Vec<A> {
        self
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Foldable for Identity<A> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        function(init, self.into_inner())
    }

    #[inline]
    fn is_empty(&self) -> bool
    where
        Self: Clone,
    {
        false
    }

    #[inline]
    fn length(&self) -> usize
    where
        Self: Clone,
    {
        1
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_vec_length_matches_len(values in prop::collection::vec(any::<i32>(), 0..20)) {
            prop_assert_eq!(Foldable::length(&values), values.len());
        }

        #[test]
        fn prop_vec_fold_matches_iterator_fold(values in prop::collection::vec(any::<i64>(), 0..20)) {
            let through_trait = values.clone().fold_left(0_i64, |accumulator, n| accumulator.wrapping_add(n));
            let through_iterator = values.into_iter().fold(0_i64, |accumulator, n| accumulator.wrapping_add(n));
            prop_assert_eq!(through_trait, through_iterator);
        }

        #[test]
        fn prop_option_to_vec_length(container in any::<Option<i32>>()) {
            prop_assert_eq!(container.to_vec().len(), Foldable::length(&container));
        }
    }
}
