//! Chain capability - sequencing computations that return containers.
//!
//! This module provides the [`Chain`] trait, the contract for monadic bind:
//! feed each element of a container into a function that itself returns a
//! container of the same family, then flatten exactly that one level of
//! nesting. No deeper structure is ever touched.
//!
//! # Laws
//!
//! All `Chain` implementations must satisfy:
//!
//! ## Left Identity
//!
//! Chaining a function over a freshly wrapped value applies the function:
//!
//! ```text
//! wrap(a).chain(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! Chaining the wrapping constructor returns an equivalent container:
//!
//! ```text
//! m.chain(wrap) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.chain(f).chain(g) == m.chain(|x| f(x).chain(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fluss::typeclass::Chain;
//!
//! let halved = Some(10).chain(|n: i32| if n % 2 == 0 { Some(n / 2) } else { None });
//! assert_eq!(halved, Some(5));
//!
//! let expanded = vec![1, 2].chain(|n| vec![n, n * 10]);
//! assert_eq!(expanded, vec![1, 10, 2, 20]);
//! ```

use super::higher::TypeConstructor;
use super::identity::Identity;

/// A capability for containers whose elements can select the next container.
///
/// `chain` is the flattening counterpart of mapping: where a map would
/// produce a nested `WithType<WithType<B>>`, `chain` removes exactly one
/// level, so the result is a flat `WithType<B>`. Elements of type `B` that
/// happen to be containers themselves pass through untouched.
///
/// The function bound is `Fn + 'static` rather than `FnOnce`: multi-element
/// and lazily re-traversed containers must invoke the function once per
/// element per traversal, and may need to store it beyond the call.
///
/// # Examples
///
/// ```rust
/// use fluss::typeclass::Chain;
///
/// fn parse(input: &str) -> Option<i32> {
///     input.parse().ok()
/// }
///
/// let result = Some("42").chain(parse).chain(|n| Some(n * 2));
/// assert_eq!(result, Some(84));
/// ```
pub trait Chain: TypeConstructor {
    /// Feeds the container's element(s) into `function` and flattens the
    /// resulting containers into one.
    ///
    /// Empty or short-circuited containers (`None`, `Err`, an empty `Vec`)
    /// never invoke `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Chain;
    ///
    /// let present = Some(5).chain(|n| Some(n * 2));
    /// assert_eq!(present, Some(10));
    ///
    /// let absent: Option<i32> = None;
    /// assert_eq!(absent.chain(|n| Some(n * 2)), None);
    /// ```
    fn chain<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Sequences two containers, discarding the first container's values.
    ///
    /// Failure or emptiness of `self` still short-circuits: `next` is only
    /// reached through the elements of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::typeclass::Chain;
    ///
    /// assert_eq!(Some(5).then(Some("next")), Some("next"));
    /// assert_eq!(None::<i32>.then(Some("next")), None);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.chain(move |_| next.clone())
    }
}

// =============================================================================
// Option<A> Implementation
// =============================================================================

impl<A> Chain for Option<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Option<B>
    where
        F: Fn(A) -> Option<B> + 'static,
        B: 'static,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Result<T, E> Implementation
// =============================================================================

impl<T, E> Chain for Result<T, E> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Result<B, E>
    where
        F: Fn(T) -> Result<B, E> + 'static,
        B: 'static,
    {
        Self::and_then(self, function)
    }
}

// =============================================================================
// Vec<A> Implementation
//
// The list interpretation of chain: every element expands into its own Vec
// and the results are concatenated in order.
// =============================================================================

impl<A> Chain for Vec<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Vec<B>
    where
        F: Fn(A) -> Vec<B> + 'static,
        B: 'static,
    {
        self.into_iter().flat_map(function).collect()
    }
}

// =============================================================================
// Identity<A> Implementation
// =============================================================================

impl<A> Chain for Identity<A> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Identity<B>
    where
        F: Fn(A) -> Identity<B> + 'static,
        B: 'static,
    {
        function(self.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Option<A> Tests
    // =========================================================================

    #[rstest]
    fn option_chain_some_to_some() {
        let result = Some(5).chain(|n| Some(n * 2));
        assert_eq!(result, Some(10));
    }

    #[rstest]
    fn option_chain_some_to_none() {
        let result = Some(-5).chain(|n| if n > 0 { Some(n * 2) } else { None });
        assert_eq!(result, None);
    }

    #[rstest]
    fn option_chain_none_never_invokes() {
        let absent: Option<i32> = None;
        let result = absent.chain(|_| -> Option<i32> { panic!("must not be invoked") });
        assert_eq!(result, None);
    }

    #[rstest]
    fn option_then_discards_first_value() {
        assert_eq!(Some(5).then(Some("next")), Some("next"));
        assert_eq!(None::<i32>.then(Some("next")), None);
    }

    // =========================================================================
    // Result<T, E> Tests
    // =========================================================================

    #[rstest]
    fn result_chain_ok_to_ok() {
        let result: Result<i32, &str> = Ok(5).chain(|n: i32| Ok(n * 2));
        assert_eq!(result, Ok(10));
    }

    #[rstest]
    fn result_chain_err_short_circuits() {
        let failed: Result<i32, &str> = Err("boom");
        let result = failed.chain(|n| Ok(n * 2));
        assert_eq!(result, Err("boom"));
    }

    // =========================================================================
    // Vec<A> Tests
    // =========================================================================

    #[rstest]
    fn vec_chain_expands_each_element() {
        let result = vec![1, 2, 3].chain(|n| vec![n, n * 10]);
        assert_eq!(result, vec![1, 10, 2, 20, 3, 30]);
    }

    #[rstest]
    fn vec_chain_flattens_one_level_only() {
        // Elements that are Vecs themselves are ordinary values to chain.
        let nested = vec![1, 2].chain(|n| vec![vec![n], vec![n, n]]);
        assert_eq!(nested, vec![vec![1], vec![1, 1], vec![2], vec![2, 2]]);
    }

    #[rstest]
    fn vec_chain_empty_input_produces_empty() {
        let empty: Vec<i32> = vec![];
        assert!(empty.chain(|n| vec![n]).is_empty());
    }

    #[rstest]
    fn vec_then_repeats_next_per_element() {
        let result = vec![1, 2].then(vec!["a", "b"]);
        assert_eq!(result, vec!["a", "b", "a", "b"]);
    }

    // =========================================================================
    // Identity<A> Tests
    // =========================================================================

    #[rstest]
    fn identity_chain_applies_function() {
        let result = Identity::new(5).chain(|n| Identity::new(n * 2));
        assert_eq!(result, Identity::new(10));
    }

    // =========================================================================
    // Law Tests
    // =========================================================================

    #[rstest]
    fn option_left_identity_law() {
        let function = |n: i32| Some(n * 2);
        assert_eq!(Some(5).chain(function), function(5));
    }

    #[rstest]
    fn option_right_identity_law() {
        let container = Some(42);
        assert_eq!(container.chain(Some), container);
    }

    #[rstest]
    fn vec_associativity_law() {
        let container = vec![1, 2];
        let first = |n: i32| vec![n, n + 10];
        let second = |n: i32| vec![n * 100];

        let left = container.clone().chain(first).chain(second);
        let right = container.chain(move |x| first(x).chain(second));

        assert_eq!(left, right);
    }
}
