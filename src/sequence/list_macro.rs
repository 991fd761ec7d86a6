//! The `list!` macro for sequence construction.
//!
//! This module provides the [`list!`] macro, the variadic construction
//! surface over [`List::from_sources`](super::List::from_sources).

/// Builds a [`List`](crate::sequence::List) from a mixture of sources.
///
/// Each argument is classified by
/// [`IntoSource`](crate::sequence::IntoSource) against the target element
/// type: bare values become single elements, `Vec`s, arrays and slices are
/// spread element by element, and other `List`s are spread lazily. The
/// spreading goes exactly one level deep.
///
/// Like all construction, this produces no elements by itself; sources are
/// pulled per traversal, and value-holding sources are cloned out per
/// traversal, hence the `Clone` requirement on the element type.
///
/// # Syntax
///
/// - `list!()` - The empty sequence
/// - `list!(a, b, c)` - Scalars in order
/// - `list!(a, vec![b, c], other_list)` - Mixed sources, spread one level
///
/// # Type Requirements
///
/// The element type must be `Clone`, and it must be inferable from the
/// surrounding context. When an argument could be read as either a scalar
/// or a spreadable collection (building a `List<Vec<i32>>` from a
/// `Vec<i32>`, say), annotate the binding; the compiler refuses to guess.
///
/// # Examples
///
/// ## Scalars
///
/// ```rust
/// use fluss::list;
///
/// let digits = list!(1, 2, 3);
/// assert_eq!(digits.to_vec(), vec![1, 2, 3]);
/// ```
///
/// ## One level of spreading
///
/// ```rust
/// use fluss::list;
/// use fluss::sequence::List;
///
/// let flat: List<i32> = list!(0, vec![1, 2], [3, 4], list!(5));
/// assert_eq!(flat.to_vec(), vec![0, 1, 2, 3, 4, 5]);
/// ```
///
/// ## The target type decides scalar versus spread
///
/// ```rust
/// use fluss::list;
/// use fluss::sequence::List;
///
/// let nested: List<Vec<i32>> = list!(vec![1, 2]);
/// assert_eq!(nested.to_vec(), vec![vec![1, 2]]);
/// ```
///
/// ## Empty
///
/// ```rust
/// use fluss::list;
/// use fluss::sequence::List;
///
/// let nothing: List<i32> = list!();
/// assert!(nothing.is_empty());
/// ```
#[macro_export]
macro_rules! list {
    // No sources: the empty sequence
    () => {
        $crate::sequence::List::empty()
    };

    // One or more sources, each classified by IntoSource
    ($($source:expr),+ $(,)?) => {
        $crate::sequence::List::from_sources(::std::vec![
            $($crate::sequence::IntoSource::into_source($source)),+
        ])
    };
}
