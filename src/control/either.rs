//! Either type - a disjoint union of two alternatives.
//!
//! This module provides the `Either<L, R>` type, holding exactly one of a
//! `Left(L)` or a `Right(R)` value. By convention `Left` carries failures
//! and `Right` carries successes, and the transformation operators follow
//! that convention: [`map`](Either::map) and [`chain`](Either::chain) act
//! only on `Right`, while a `Left` propagates through them untouched.
//!
//! There is no third state and no implicit promotion between branches;
//! only explicit operations (`swap`, `fold`, conversions) move values
//! across.
//!
//! # Examples
//!
//! ```rust
//! use fluss::control::Either;
//!
//! fn parse(input: &str) -> Either<String, i32> {
//!     input
//!         .parse()
//!         .map_err(|_| format!("not a number: {input}"))
//!         .into()
//! }
//!
//! let doubled = parse("21").map(|n| n * 2);
//! assert_eq!(doubled, Either::Right(42));
//!
//! let failed = parse("twenty-one").map(|n| n * 2);
//! assert!(failed.is_left());
//! ```

use crate::typeclass::{Chain, Foldable, TypeConstructor};
use std::fmt;

/// A value that is exactly one of two alternatives.
///
/// `Either<L, R>` is the crate's model for fallible outcomes as data:
/// `Left` conventionally holds the failure, `Right` the success. The
/// success-biased operators short-circuit, so a pipeline of `map`/`chain`
/// calls stops transforming as soon as a `Left` appears and delivers that
/// `Left` unchanged.
///
/// # Examples
///
/// ```rust
/// use fluss::control::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Right(84));
/// assert_eq!(failure.clone().map(|x| x * 2), failure);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure.
    Left(L),
    /// The right variant, conventionally representing success.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Branch Predicates
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Branch Extraction (Consuming)
    // =========================================================================

    /// Extracts the left value, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Extracts the right value, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Branch Extraction (Borrowing)
    // =========================================================================

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Transformations (Right-biased)
    // =========================================================================

    /// Applies a function to the right value; a `Left` passes through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let success: Either<String, i32> = Either::Right(5);
    /// assert_eq!(success.map(|n| n * 2), Either::Right(10));
    ///
    /// let failure: Either<String, i32> = Either::Left("boom".to_string());
    /// assert_eq!(failure.map(|n| n * 2), Either::Left("boom".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Feeds the right value into an `Either`-returning function and
    /// flattens the result; a `Left` short-circuits without invoking the
    /// function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// fn checked_half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::Right(n / 2)
    ///     } else {
    ///         Either::Left(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let halved = Either::<String, i32>::Right(10).chain(checked_half);
    /// assert_eq!(halved, Either::Right(5));
    ///
    /// let failed = Either::<String, i32>::Right(5).chain(checked_half);
    /// assert_eq!(failed, Either::Left("5 is odd".to_string()));
    /// ```
    #[inline]
    pub fn chain<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies a function to the left value; a `Right` passes through
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let failure: Either<i32, String> = Either::Left(42);
    /// assert_eq!(failure.map_left(|x| x * 2), Either::Left(84));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two functions depending on the populated branch,
    /// keeping the result wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = value.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Eliminates the either by applying one of two functions.
    ///
    /// This is case analysis as a function: both branches converge on one
    /// result type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let value: Either<i32, String> = Either::Left(42);
    /// let rendered = value.fold(|n| n.to_string(), |s| s);
    /// assert_eq!(rendered, "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the branches: `Left(l)` becomes `Right(l)` and vice versa.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into a pair of `Option`s, populating exactly one side.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.into_options(), (Some(42), None));
    /// ```
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

// =============================================================================
// Same-type Extraction
// =============================================================================

impl<T> Either<T, T> {
    /// Extracts whichever branch is populated when both carry the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let from_left: Either<i32, i32> = Either::Left(1);
    /// let from_right: Either<i32, i32> = Either::Right(2);
    /// assert_eq!(from_left.into_inner(), 1);
    /// assert_eq!(from_right.into_inner(), 2);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Flattening
// =============================================================================

impl<L, R> Either<L, Either<L, R>> {
    /// Removes one level of nesting from the right branch.
    ///
    /// Equivalent to `chain` with the identity function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let nested: Either<String, Either<String, i32>> =
    ///     Either::Right(Either::Right(5));
    /// assert_eq!(nested.flatten(), Either::Right(5));
    /// ```
    #[inline]
    pub fn flatten(self) -> Either<L, R> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or its default if this is a `Right`.
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or its default if this is a `Left`.
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result`: `Ok` becomes `Right` and `Err` becomes `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let either: Either<String, i32> = Ok::<i32, String>(42).into();
    /// assert_eq!(either, Either::Right(42));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either`: `Right` becomes `Ok` and `Left` becomes `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Either;
    ///
    /// let result: Result<i32, String> = Either::<String, i32>::Right(42).into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Capability Contract Implementations
//
// The right branch is the element position: chaining and folding see the
// success value only, and a Left behaves as the empty container.
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Chain for Either<L, R> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        Self::chain(self, function)
    }
}

impl<L, R> Foldable for Either<L, R> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, R) -> B,
    {
        match self {
            Self::Left(_) => init,
            Self::Right(value) => function(init, value),
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_left()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_right())
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Either;
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    /// Accepts exactly the literal `"Either"` in the `type` field.
    #[derive(serde::Deserialize)]
    enum EitherTag {
        Either,
    }

    /// The branch tag picks the value's type, and may arrive before or
    /// after the value; flattening an adjacently tagged enum lets serde
    /// buffer fields until both are known.
    #[derive(serde::Deserialize)]
    #[serde(tag = "branch", content = "value", rename_all = "lowercase")]
    enum EitherBody<L, R> {
        Left(L),
        Right(R),
    }

    #[derive(serde::Deserialize)]
    struct EitherWire<L, R> {
        #[serde(rename = "type")]
        _tag: EitherTag,
        #[serde(flatten)]
        body: EitherBody<L, R>,
    }

    impl<L: Serialize, R: Serialize> Serialize for Either<L, R> {
        /// Produces `{"type": "Either", "branch": "left"|"right", "value": ..}`.
        /// The branch tag is required for round-trip fidelity: without it a
        /// reader could not tell which alternative the value belongs to.
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Either", 3)?;
            state.serialize_field("type", "Either")?;
            match self {
                Self::Left(value) => {
                    state.serialize_field("branch", "left")?;
                    state.serialize_field("value", value)?;
                }
                Self::Right(value) => {
                    state.serialize_field("branch", "right")?;
                    state.serialize_field("value", value)?;
                }
            }
            state.end()
        }
    }

    impl<'de, L, R> Deserialize<'de> for Either<L, R>
    where
        L: Deserialize<'de>,
        R: Deserialize<'de>,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let wire = EitherWire::<L, R>::deserialize(deserializer)?;
            Ok(match wire.body {
                EitherBody::Left(value) => Self::Left(value),
                EitherBody::Right(value) => Self::Right(value),
            })
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_with_branch_tag() {
        let left = serde_json::to_value(Either::<i32, String>::Left(7)).unwrap();
        assert_eq!(
            left,
            serde_json::json!({"type": "Either", "branch": "left", "value": 7})
        );

        let right = serde_json::to_value(Either::<i32, String>::Right("ok".to_string())).unwrap();
        assert_eq!(
            right,
            serde_json::json!({"type": "Either", "branch": "right", "value": "ok"})
        );
    }

    #[test]
    fn deserializes_regardless_of_field_order() {
        let branch_last: Either<i32, String> = serde_json::from_value(
            serde_json::json!({"type": "Either", "value": 7, "branch": "left"}),
        )
        .unwrap();
        assert_eq!(branch_last, Either::Left(7));

        let branch_first: Either<i32, String> = serde_json::from_value(
            serde_json::json!({"branch": "right", "value": "ok", "type": "Either"}),
        )
        .unwrap();
        assert_eq!(branch_first, Either::Right("ok".to_string()));
    }

    #[test]
    fn branch_tag_is_required() {
        let result: Result<Either<i32, String>, _> =
            serde_json::from_value(serde_json::json!({"type": "Either", "value": 7}));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_foreign_type_tag() {
        let result: Result<Either<i32, String>, _> = serde_json::from_value(
            serde_json::json!({"type": "Maybe", "branch": "left", "value": 7}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip_preserves_branch() {
        let original = Either::<String, i32>::Left("preserved".to_string());
        let serialized = serde_json::to_string(&original).unwrap();
        let restored: Either<String, i32> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored, original);
    }
}
