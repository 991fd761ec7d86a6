//! Maybe type - a value or its absence.
//!
//! This module provides the `Maybe<T>` type with exactly two states:
//! `Just(value)` holding a present value, and `Nothing` for absence. There
//! is no null: absence is only representable as `Nothing`, so a `Just` is
//! guaranteed to hold a usable value.
//!
//! Every transformation short-circuits on `Nothing`. Mapping, chaining and
//! applying are no-ops in the `Nothing` state and never invoke the supplied
//! function.
//!
//! # Construction
//!
//! [`Maybe::of`] is the normalizing constructor: a bare value becomes
//! `Just`, an `Option` translates `None` to `Nothing`, a `Maybe` passes
//! through unchanged (never nested), and an `Either` keeps its `Right`
//! branch. Direct variant construction is always available.
//!
//! # Examples
//!
//! ```rust
//! use fluss::control::Maybe;
//!
//! let present: Maybe<i32> = Maybe::of(5);
//! assert_eq!(present.map(|n| n * 2).extract(), Some(10));
//!
//! let absent: Maybe<i32> = Maybe::of(None);
//! assert_eq!(absent.map(|n| n * 2).extract(), None);
//!
//! // A Maybe input is unwrapped, not nested
//! let normalized: Maybe<i32> = Maybe::of(Maybe::Just(8));
//! assert_eq!(normalized.extract(), Some(8));
//! ```

use super::either::Either;
use crate::typeclass::{Chain, Filterable, Foldable, TypeConstructor};

/// An optional value: either `Just(T)` or `Nothing`.
///
/// `Maybe` is the crate's explicit model of absence. It mirrors
/// `Option` closely (and converts to and from it), but participates in the
/// crate's capability contracts and serialization shape, and its
/// constructor normalizes nested wrappers away.
///
/// # Examples
///
/// ```rust
/// use fluss::control::Maybe;
///
/// let value: Maybe<i32> = Maybe::Just(2);
/// let chained = value.chain(|n| if n > 0 { Maybe::Just(n * 10) } else { Maybe::Nothing });
/// assert_eq!(chained, Maybe::Just(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absence of a value.
    Nothing,
}

/// Classifies an input for [`Maybe::of`].
///
/// The implementations encode the normalization rule: plain values wrap,
/// `Option` and `Either` translate their absent branch, and an existing
/// `Maybe` passes through untouched so construction can never nest.
///
/// The target element type selects the classification. When nothing in the
/// surrounding code pins that type (for example `Maybe::of(Maybe::Just(1))`
/// in isolation), annotate the result.
pub trait IntoMaybe<T> {
    /// Converts `self` into a `Maybe<T>`.
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for T {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        Maybe::Just(self)
    }
}

impl<T> IntoMaybe<T> for Maybe<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        self
    }
}

impl<T> IntoMaybe<T> for Option<T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<T, L> IntoMaybe<T> for Either<L, T> {
    #[inline]
    fn into_maybe(self) -> Maybe<T> {
        match self {
            Either::Right(value) => Maybe::Just(value),
            Either::Left(_) => Maybe::Nothing,
        }
    }
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Builds a `Maybe` from anything classifiable as one.
    ///
    /// Normalization rules:
    ///
    /// - a plain value becomes `Just(value)`
    /// - `Option`: `Some` becomes `Just`, `None` becomes `Nothing`
    /// - `Maybe`: passed through unchanged, never double-wrapped
    /// - `Either`: `Right` becomes `Just`, `Left` becomes `Nothing`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::of(0), Maybe::Just(0));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::Nothing);
    /// assert_eq!(Maybe::<i32>::of(Maybe::Just(8)), Maybe::Just(8));
    /// assert_eq!(Maybe::<i32>::of(Either::<(), i32>::Right(3)), Maybe::Just(3));
    /// ```
    #[inline]
    pub fn of(value: impl IntoMaybe<T>) -> Self {
        value.into_maybe()
    }

    // =========================================================================
    // State Predicates
    // =========================================================================

    /// Returns `true` if this is a `Just` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// assert!(Maybe::Just(0).is_just());
    /// assert!(!Maybe::<i32>::Nothing.is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if this is `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// assert!(Maybe::<i32>::Nothing.is_nothing());
    /// assert!(!Maybe::Just(0).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Transformations
    // =========================================================================

    /// Applies a function to the contained value, if any.
    ///
    /// `Nothing` is returned unchanged and `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(5).map(|n| n * 2), Maybe::Just(10));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|n| n * 2), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Feeds the contained value into a `Maybe`-returning function and
    /// flattens the result.
    ///
    /// `Nothing` short-circuits: `function` is never invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// fn half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::Just(n / 2) } else { Maybe::Nothing }
    /// }
    ///
    /// assert_eq!(Maybe::Just(10).chain(half), Maybe::Just(5));
    /// assert_eq!(Maybe::Just(5).chain(half), Maybe::Nothing);
    /// assert_eq!(Maybe::Nothing.chain(half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a wrapped function to the wrapped value.
    ///
    /// Produces `Just` only when both sides are `Just`; if either side is
    /// `Nothing` the result is `Nothing` and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// let double = Maybe::Just(|n: i32| n * 2);
    /// assert_eq!(Maybe::Just(4).apply(double), Maybe::Just(8));
    ///
    /// let absent: Maybe<fn(i32) -> i32> = Maybe::Nothing;
    /// assert_eq!(Maybe::Just(4).apply(absent), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn apply<B, F>(self, function: Maybe<F>) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        match (self, function) {
            (Self::Just(value), Maybe::Just(function)) => Maybe::Just(function(value)),
            _ => Maybe::Nothing,
        }
    }

    /// Replaces `Nothing` with a freshly produced default.
    ///
    /// The default function runs only in the `Nothing` state; a `Just`
    /// passes through with `default` never invoked, so repeated fills are
    /// idempotent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// assert_eq!(Maybe::Nothing.fill(|| 2), Maybe::Just(2));
    /// assert_eq!(Maybe::Just(5).fill(|| 2), Maybe::Just(5));
    /// assert_eq!(Maybe::Nothing.fill(|| 2).fill(|| 99), Maybe::Just(2));
    /// ```
    #[inline]
    #[must_use]
    pub fn fill<F>(self, default: F) -> Self
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => Self::Just(value),
            Self::Nothing => Self::Just(default()),
        }
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Extracts the contained value, with `None` as the absence sentinel.
    ///
    /// This is the designated way out of the wrapper: it never panics, and
    /// absence stays explicit in the returned `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(1).extract(), Some(1));
    /// assert_eq!(Maybe::<i32>::Nothing.extract(), None);
    /// ```
    #[inline]
    pub fn extract(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns a reference to the contained value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// let value = Maybe::Just(String::from("keep"));
    /// assert_eq!(value.just_ref(), Some(&String::from("keep")));
    /// assert!(value.is_just());
    /// ```
    #[inline]
    pub const fn just_ref(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// # Panics
    ///
    /// Panics if this is `Nothing`. Prefer [`extract`](Self::extract) or
    /// [`fill`](Self::fill) outside of tests and invariant checks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// assert_eq!(Maybe::Just(3).unwrap_just(), 3);
    /// ```
    #[inline]
    pub fn unwrap_just(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("called `Maybe::unwrap_just()` on a `Nothing` value"),
        }
    }

    // =========================================================================
    // Conversions
    // =========================================================================

    /// Converts into an `Either`, using `left` as the absent branch.
    ///
    /// `Just(v)` becomes `Right(v)`; `Nothing` becomes `Left(left)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::Just(5).to_either("missing"), Either::Right(5));
    /// assert_eq!(Maybe::<i32>::Nothing.to_either("missing"), Either::Left("missing"));
    /// ```
    #[inline]
    pub fn to_either<L>(self, left: L) -> Either<L, T> {
        match self {
            Self::Just(value) => Either::Right(value),
            Self::Nothing => Either::Left(left),
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    /// Removes one level of nesting.
    ///
    /// Construction through [`Maybe::of`] never produces nesting; this
    /// handles the nesting that mapping with a `Maybe`-returning function
    /// creates.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::Maybe;
    ///
    /// let nested = Maybe::Just(5).map(Maybe::Just);
    /// assert_eq!(nested.flatten(), Maybe::Just(5));
    /// ```
    #[inline]
    pub fn flatten(self) -> Maybe<T> {
        self.chain(|inner| inner)
    }
}

// =============================================================================
// Default Implementation
//
// The empty state is the only default that does not invent a value.
// =============================================================================

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option`, mapping `Some` to `Just` and `None` to `Nothing`.
    #[inline]
    fn from(option: Option<T>) -> Self {
        option.into_maybe()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe`, mapping `Just` to `Some` and `Nothing` to `None`.
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.extract()
    }
}

// =============================================================================
// Capability Contract Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Chain for Maybe<T> {
    #[inline]
    fn chain<B, F>(self, function: F) -> Maybe<B>
    where
        F: Fn(T) -> Maybe<B> + 'static,
        B: 'static,
    {
        Self::chain(self, function)
    }
}

impl<T> Foldable for Maybe<T> {
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Just(value) => function(init, value),
            Self::Nothing => init,
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.is_nothing()
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_just())
    }
}

impl<T> Filterable for Maybe<T> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        match self {
            Self::Just(value) if predicate(&value) => Self::Just(value),
            _ => Self::Nothing,
        }
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::{IntoMaybe, Maybe};
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    /// Accepts exactly the literal `"Maybe"` in the `type` field.
    #[derive(serde::Deserialize)]
    enum MaybeTag {
        Maybe,
    }

    #[derive(serde::Deserialize)]
    #[serde(bound(deserialize = "T: Deserialize<'de>"))]
    struct MaybeWire<T> {
        #[serde(rename = "type")]
        _tag: MaybeTag,
        #[serde(default)]
        value: Option<T>,
    }

    impl<T: Serialize> Serialize for Maybe<T> {
        /// Produces `{"type": "Maybe", "value": <value or null>}`.
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let mut state = serializer.serialize_struct("Maybe", 2)?;
            state.serialize_field("type", "Maybe")?;
            state.serialize_field("value", &self.just_ref())?;
            state.end()
        }
    }

    impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
        /// Restores from the documented shape; a `null` or missing value is
        /// `Nothing`. A `Just` holding a value that serializes to `null`
        /// therefore round-trips to `Nothing`; the wire shape cannot
        /// distinguish the two.
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let wire = MaybeWire::<T>::deserialize(deserializer)?;
            Ok(wire.value.into_maybe())
        }
    }
}
