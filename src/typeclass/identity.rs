//! Identity wrapper type - a container with no behavior of its own.
//!
//! `Identity` wraps exactly one value and adds nothing else. It is the
//! smallest possible implementor of the capability contracts, which makes it
//! the reference model when checking that a law holds independently of any
//! container-specific behavior.

use super::TypeConstructor;

/// The trivial container: one value, no effects, no absence.
///
/// Every capability contract that `Identity` can lawfully implement
/// ([`Chain`](super::Chain), [`Foldable`](super::Foldable)) degenerates to
/// plain function application on the wrapped value. `Identity` has no empty
/// state, so it deliberately does not implement
/// [`Filterable`](super::Filterable): there would be nothing to return when
/// the predicate rejects the value.
///
/// # Examples
///
/// ```rust
/// use fluss::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Tuple-struct syntax also works
/// let wrapped = Identity("direct");
/// assert_eq!(wrapped.0, "direct");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> TypeConstructor for Identity<A> {
    type Inner = A;
    type WithType<B> = Identity<B>;
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_into_inner_unwraps() {
        let wrapped = Identity::new(String::from("hello"));
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<i32> = 42.into();
        assert_eq!(wrapped.into_inner(), 42);
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MAX)]
    fn identity_preserves_values(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }

    #[test]
    fn identity_type_constructor_inner_type() {
        fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
        assert_inner::<Identity<i32>>();
    }
}
