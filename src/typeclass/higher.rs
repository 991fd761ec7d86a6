//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust has no native notion of a type constructor: there is no way to be
//! generic over `Option<_>` or `Vec<_>` themselves, only over fully applied
//! types. This module closes that gap with a Generic Associated Type, giving
//! the capability traits ([`Chain`](super::Chain), [`Foldable`](super::Foldable),
//! [`Filterable`](super::Filterable)) a common vocabulary for "the same
//! container, holding a different element type".
//!
//! # Example
//!
//! ```rust
//! use fluss::typeclass::TypeConstructor;
//!
//! fn rebuild_empty<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let absent: Option<String> = rebuild_empty(Some(42));
//! assert_eq!(absent, None);
//! ```

/// A trait representing a type constructor.
///
/// Implementors are containers applied to some element type `A` (such as
/// `Option<A>` or `Vec<A>`). The associated types recover both the element
/// type and the ability to re-apply the container to a different element
/// type, which is what the capability traits build on.
///
/// # Laws
///
/// For any `F: TypeConstructor`, `F::WithType<F::Inner>` is the same type as
/// `F` itself (re-application with the current element changes nothing).
///
/// # Example
///
/// ```rust
/// use fluss::typeclass::TypeConstructor;
///
/// fn element_is_i32<T: TypeConstructor<Inner = i32>>() {}
///
/// element_is_i32::<Option<i32>>();
/// element_is_i32::<Vec<i32>>();
/// ```
pub trait TypeConstructor {
    /// The element type this container currently holds.
    type Inner;

    /// The same container applied to a different element type `B`.
    ///
    /// The `TypeConstructor<Inner = B>` constraint keeps the result usable
    /// as a container in its own right, so capability methods can be
    /// chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

// =============================================================================
// Standard Library Type Implementations
// =============================================================================

impl<A> TypeConstructor for Option<A> {
    type Inner = A;
    type WithType<B> = Option<B>;
}

impl<T, E> TypeConstructor for Result<T, E> {
    type Inner = T;
    type WithType<B> = Result<B, E>;
}

impl<T> TypeConstructor for Vec<T> {
    type Inner = T;
    type WithType<B> = Vec<B>;
}
