//! Tagged construction input for [`List`](super::List).
//!
//! `List` construction accepts a mixture of bare values, eager element
//! collections and other sequences, and flattens exactly one level: a
//! collection source is spread element by element, a bare value is yielded
//! as a single element. Rather than probing inputs structurally, the
//! accepted shapes are an explicit enum, and [`IntoSource`] classifies
//! each input by its concrete type at the construction boundary.
//!
//! Classification is driven by the target element type. A `Vec<i32>`
//! spreads into a `List<i32>` but is one scalar element of a
//! `List<Vec<i32>>`; nothing recurses deeper than that one level.
//!
//! # Examples
//!
//! ```rust
//! use fluss::list;
//! use fluss::sequence::List;
//!
//! // The vec spreads, the bare values do not.
//! let flat: List<i32> = list!(0, vec![1, 2], 3);
//! assert_eq!(flat.to_vec(), vec![0, 1, 2, 3]);
//!
//! // Same input, different target: the vec is itself an element.
//! let nested: List<Vec<i32>> = list!(vec![1, 2]);
//! assert_eq!(nested.to_vec(), vec![vec![1, 2]]);
//! ```

use super::list::List;
use super::producer::{Cursor, Producer};

/// One construction input for a `List`, classified by shape.
///
/// The three variants cover the recognized input shapes: a single value,
/// an eagerly known element collection, and an already sequential value
/// that is spread lazily.
#[derive(Debug, Clone)]
pub enum Source<T> {
    /// A bare value, yielded as a single element.
    Scalar(T),
    /// An eager element collection, spread element by element.
    Items(Vec<T>),
    /// Another sequence, spread lazily through a fresh cursor.
    Sequence(List<T>),
}

/// Classifies a construction input into a [`Source`].
///
/// The implementations below never overlap for a fixed target element
/// type, which is what makes the scalar-versus-spread decision both
/// unambiguous and statically checked. When the element type is left
/// open and an input could be read either way, the compiler demands an
/// annotation instead of guessing.
pub trait IntoSource<T> {
    /// Performs the classification.
    fn into_source(self) -> Source<T>;
}

impl<T> IntoSource<T> for T {
    #[inline]
    fn into_source(self) -> Source<T> {
        Source::Scalar(self)
    }
}

impl<T> IntoSource<T> for Vec<T> {
    #[inline]
    fn into_source(self) -> Source<T> {
        Source::Items(self)
    }
}

impl<T, const N: usize> IntoSource<T> for [T; N] {
    #[inline]
    fn into_source(self) -> Source<T> {
        Source::Items(self.into())
    }
}

impl<T: Clone> IntoSource<T> for &[T] {
    #[inline]
    fn into_source(self) -> Source<T> {
        Source::Items(self.to_vec())
    }
}

impl<T> IntoSource<T> for List<T> {
    #[inline]
    fn into_source(self) -> Source<T> {
        Source::Sequence(self)
    }
}

/// A source replays on every `open`: scalars and items are cloned out,
/// a nested sequence opens a fresh cursor of its own.
impl<T: Clone + 'static> Producer<T> for Source<T> {
    fn open(&self) -> Cursor<T> {
        match self {
            Self::Scalar(value) => Box::new(std::iter::once(value.clone())),
            Self::Items(values) => Box::new(values.clone().into_iter()),
            Self::Sequence(sequence) => sequence.iter(),
        }
    }
}
