//! Lazy, replayable sequence.
//!
//! This module provides [`List`], a pull-based sequence whose elements are
//! produced on demand and reproduced from scratch on every traversal.
//!
//! # Overview
//!
//! A `List<T>` is a handle on a [`Producer`]: a recipe for elements, not a
//! buffer of them. Construction never produces a single element. Every
//! transformation operator (`map`, `filter`, `chain`, `take`, ...) returns
//! a new `List` whose producer wraps the parent's, and only a terminal
//! operation (`to_vec`, `len`, `fold`, `find`, ...) opens a cursor and
//! actually pulls. Because each traversal opens a fresh cursor, the same
//! `List` value can be traversed any number of times and always yields the
//! same elements, re-running upstream production logic each time.
//!
//! Pull-based evaluation is also what makes bounding work: `take(3)` over
//! an infinite sequence terminates because the take cursor simply stops
//! requesting upstream elements after the third.
//!
//! # Examples
//!
//! ```rust
//! use fluss::list;
//! use fluss::sequence::List;
//!
//! let evens: List<i32> = List::iterate(|| (0..).map(|n| n * 2));
//!
//! // Nothing has been produced yet; take(4) bounds the traversal.
//! assert_eq!(evens.take(4).to_vec(), vec![0, 2, 4, 6]);
//!
//! // Mixed construction spreads collections one level deep.
//! let mixed: List<i32> = list!(0, vec![1, 2], 3);
//! assert_eq!(mixed.to_vec(), vec![0, 1, 2, 3]);
//! ```
//!
//! # Evaluation model
//!
//! Evaluation is single-threaded and synchronous. Per-traversal working
//! state (take counters, `unique_by` seen-sets, sort buffers) lives inside
//! the cursor and dies with it, so concurrent traversals of one `List`
//! value never interfere. The handle itself is deliberately neither `Send`
//! nor `Sync`.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::control::Maybe;
use crate::typeclass::{Chain, Filterable, Foldable, TypeConstructor};

use super::producer::{Cursor, Producer};
use super::source::Source;

/// A lazy, replayable sequence of `T`.
///
/// `List` is a cheap immutable handle: cloning copies an `Rc`, never
/// elements. Elements exist only while a cursor is being pulled.
///
/// # Laziness
///
/// ```rust
/// use fluss::list;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let calls = Rc::new(Cell::new(0));
/// let observer = Rc::clone(&calls);
/// let doubled = list!(1, 2, 3).map(move |n| {
///     observer.set(observer.get() + 1);
///     n * 2
/// });
///
/// // Construction ran nothing.
/// assert_eq!(calls.get(), 0);
///
/// // One traversal runs the transform once per element.
/// assert_eq!(doubled.to_vec(), vec![2, 4, 6]);
/// assert_eq!(calls.get(), 3);
/// ```
///
/// # Replayability
///
/// Traversing twice re-executes production logic twice; there is no
/// hidden buffer and no cursor state on the `List` value itself:
///
/// ```rust
/// use fluss::sequence::List;
///
/// let naturals: List<u32> = List::iterate(|| 0..);
/// assert_eq!(naturals.take(2).to_vec(), vec![0, 1]);
/// assert_eq!(naturals.take(2).to_vec(), vec![0, 1]);
/// ```
pub struct List<T> {
    producer: Rc<dyn Producer<T>>,
}

// Static assertions to verify the single-threaded evaluation model
static_assertions::assert_not_impl_any!(List<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(List<String>: Send, Sync);

impl<T: 'static> List<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a producer directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::sequence::List;
    ///
    /// let sequence = List::from_producer(|| vec![1, 2, 3]);
    /// assert_eq!(sequence.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_producer<P>(producer: P) -> Self
    where
        P: Producer<T> + 'static,
    {
        Self {
            producer: Rc::new(producer),
        }
    }

    /// Wraps a production closure, the closure form of [`from_producer`].
    ///
    /// The closure is re-invoked on every traversal, which is what makes
    /// the sequence replayable; it may also describe an infinite sequence,
    /// to be bounded later with [`take`](Self::take).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::sequence::List;
    ///
    /// let squares: List<u32> = List::iterate(|| (1..).map(|n| n * n));
    /// assert_eq!(squares.take(4).to_vec(), vec![1, 4, 9, 16]);
    /// ```
    ///
    /// [`from_producer`]: Self::from_producer
    #[must_use]
    pub fn iterate<I, F>(production: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Self::from_producer(production)
    }

    /// Builds a sequence from classified construction inputs.
    ///
    /// Each [`Source`] is spread or yielded whole according to its
    /// variant, in argument order. This is the function behind the
    /// [`list!`](crate::list) macro, which is the usual way to call it.
    #[must_use]
    pub fn from_sources(sources: Vec<Source<T>>) -> Self
    where
        T: Clone,
    {
        let sources = Rc::new(sources);
        Self::from_producer(move || {
            let sources = Rc::clone(&sources);
            (0..sources.len()).flat_map(move |index| sources[index].open())
        })
    }

    /// Builds a sequence holding the given elements.
    ///
    /// The elements are collected eagerly once and cloned out on every
    /// traversal, so the resulting sequence replays like any other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::sequence::List;
    ///
    /// let sequence = List::of(vec!["a", "b"]);
    /// assert_eq!(sequence.to_vec(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn of<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let elements: Vec<T> = elements.into_iter().collect();
        Self::from_producer(move || elements.clone().into_iter())
    }

    /// The sequence with no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::sequence::List;
    ///
    /// let nothing: List<i32> = List::empty();
    /// assert!(nothing.is_empty());
    /// ```
    #[must_use]
    pub fn empty() -> Self {
        Self::from_producer(std::iter::empty)
    }

    // =========================================================================
    // Transformation Operators (lazy)
    // =========================================================================

    /// Transforms each element, lazily and order-preserving.
    ///
    /// The function runs once per element per traversal, exactly when the
    /// element is pulled.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// let lengths = list!("lazy", "pull").map(str::len);
    /// assert_eq!(lengths.to_vec(), vec![4, 4]);
    /// ```
    #[must_use]
    pub fn map<B, F>(&self, function: F) -> List<B>
    where
        F: Fn(T) -> B + 'static,
        B: 'static,
    {
        let parent = Rc::clone(&self.producer);
        let function = Rc::new(function);
        List::from_producer(move || {
            let function = Rc::clone(&function);
            parent.open().map(move |element| function(element))
        })
    }

    /// Maps each element to a sub-sequence and flattens exactly one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// let repeated = list!(1, 2, 3).chain(|n| list!(n, n));
    /// assert_eq!(repeated.to_vec(), vec![1, 1, 2, 2, 3, 3]);
    /// ```
    ///
    /// Only one level: elements that are themselves collections stay
    /// collections unless the function spreads them.
    ///
    /// ```rust
    /// use fluss::list;
    /// use fluss::sequence::List;
    ///
    /// let pairs: List<Vec<i32>> = list!(vec![1, 2], vec![3]);
    /// let kept: List<Vec<i32>> = pairs.chain(|pair| list!(pair));
    /// assert_eq!(kept.to_vec(), vec![vec![1, 2], vec![3]]);
    /// ```
    #[must_use]
    pub fn chain<B, F>(&self, function: F) -> List<B>
    where
        F: Fn(T) -> List<B> + 'static,
        B: 'static,
    {
        let parent = Rc::clone(&self.producer);
        let function = Rc::new(function);
        List::from_producer(move || {
            let function = Rc::clone(&function);
            parent
                .open()
                .flat_map(move |element| function(element).into_iter())
        })
    }

    /// Concatenates this sequence with others, lazily, in argument order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// let joined = list!(1).join([list!(2, 3), list!(4)]);
    /// assert_eq!(joined.to_vec(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn join<I>(&self, others: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let mut sequences = vec![self.clone()];
        sequences.extend(others);
        let sequences = Rc::new(sequences);
        Self::from_producer(move || {
            let sequences = Rc::clone(&sequences);
            (0..sequences.len()).flat_map(move |index| sequences[index].iter())
        })
    }

    /// Keeps the elements satisfying the predicate, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// let odd = list!(1, 2, 3, 4, 5).filter(|n| n % 2 == 1);
    /// assert_eq!(odd.to_vec(), vec![1, 3, 5]);
    /// ```
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        let parent = Rc::clone(&self.producer);
        let predicate = Rc::new(predicate);
        Self::from_producer(move || {
            let predicate = Rc::clone(&predicate);
            parent.open().filter(move |element| predicate(element))
        })
    }

    /// Concatenation sugar: this sequence followed by the given elements.
    #[must_use]
    pub fn append<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        self.join([Self::of(values)])
    }

    /// Concatenation sugar: the given elements followed by this sequence.
    #[must_use]
    pub fn prepend<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        Self::of(values).join([self.clone()])
    }

    /// De-duplicates by a derived key, lazily; the first occurrence per
    /// key wins and original order is preserved.
    ///
    /// Key equality is the key type's `Eq`/`Hash`. Two structurally equal
    /// elements are distinct unless the key function maps them to equal
    /// keys. The seen-key set is allocated per traversal and discarded
    /// with the cursor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// let first = list!(1, 2, 1, 3, 2).unique_by(|n| *n);
    /// assert_eq!(first.to_vec(), vec![1, 2, 3]);
    ///
    /// let by_length = list!("tin", "cup", "stone").unique_by(|word| word.len());
    /// assert_eq!(by_length.to_vec(), vec!["tin", "stone"]);
    /// ```
    #[must_use]
    pub fn unique_by<K, F>(&self, key: F) -> Self
    where
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + 'static,
    {
        let parent = Rc::clone(&self.producer);
        let key = Rc::new(key);
        Self::from_producer(move || {
            let key = Rc::clone(&key);
            let mut seen = HashSet::new();
            parent.open().filter(move |element| seen.insert(key(element)))
        })
    }

    /// Sorts with the supplied comparator.
    ///
    /// This is the sole operator that cannot stay fully lazy: no element
    /// can be yielded before all of them have been observed. The sequence
    /// is materialized and sorted per traversal (the sort is stable), then
    /// re-exposed element by element; the parent is never consumed early
    /// and the handle stays replayable like any other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// let ascending = list!(3, 1, 2).sort(|left, right| left.cmp(right));
    /// assert_eq!(ascending.to_vec(), vec![1, 2, 3]);
    /// ```
    #[must_use]
    pub fn sort<F>(&self, comparator: F) -> Self
    where
        F: Fn(&T, &T) -> Ordering + 'static,
    {
        let parent = Rc::clone(&self.producer);
        let comparator = Rc::new(comparator);
        Self::from_producer(move || {
            let comparator = Rc::clone(&comparator);
            let mut elements: Vec<T> = parent.open().collect();
            elements.sort_by(move |left, right| comparator(left, right));
            elements.into_iter()
        })
    }

    /// Keeps the first `count` elements, lazily.
    ///
    /// Once `count` elements have been yielded the cursor stops requesting
    /// upstream elements entirely, which is what makes bounding an
    /// infinite sequence terminate. The counter is per cursor; every
    /// traversal starts the window afresh.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::sequence::List;
    ///
    /// let naturals: List<u32> = List::iterate(|| 0..);
    /// assert_eq!(naturals.take(3).to_vec(), vec![0, 1, 2]);
    /// ```
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        let parent = Rc::clone(&self.producer);
        Self::from_producer(move || parent.open().take(count))
    }

    /// Skips the first `count` elements, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// assert_eq!(list!(1, 2, 3, 4).skip(2).to_vec(), vec![3, 4]);
    /// ```
    #[must_use]
    pub fn skip(&self, count: usize) -> Self {
        let parent = Rc::clone(&self.producer);
        Self::from_producer(move || parent.open().skip(count))
    }

    // =========================================================================
    // Terminal Operations
    // =========================================================================

    /// Returns the first element satisfying the predicate, stopping the
    /// traversal at the match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::{Just, Nothing};
    /// use fluss::list;
    ///
    /// assert_eq!(list!(1, 2, 3).find(|n| n % 2 == 0), Just(2));
    /// assert_eq!(list!(1, 3).find(|n| n % 2 == 0), Nothing);
    /// ```
    pub fn find<P>(&self, predicate: P) -> Maybe<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter().find(predicate).into()
    }

    /// Applies a function to each element in order, for its side effect.
    pub fn for_each<F>(&self, function: F)
    where
        F: FnMut(T),
    {
        self.iter().for_each(function);
    }

    /// Tests membership, short-circuiting on the first equal element.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|element| element == *value)
    }

    /// Counts the elements; forces a full traversal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Tests for at least one element by probing, never by counting.
    ///
    /// At most one element is pulled, so this is safe on infinite
    /// sequences.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::sequence::List;
    ///
    /// let naturals: List<u32> = List::iterate(|| 0..);
    /// assert!(!naturals.is_empty());
    /// assert!(List::<u32>::empty().is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Left-folds the elements into an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::list;
    ///
    /// let sum = list!(1, 2, 3, 4).fold(0, |accumulator, n| accumulator + n);
    /// assert_eq!(sum, 10);
    /// ```
    pub fn fold<B, F>(&self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Tests whether any element satisfies the predicate, stopping at the
    /// first that does. Empty sequences yield `false`.
    #[must_use]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Tests whether every element satisfies the predicate, stopping at
    /// the first that does not. Empty sequences yield `true`.
    #[must_use]
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(T) -> bool,
    {
        self.iter().all(predicate)
    }

    /// Materializes one full traversal into an owned `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Opens one cursor over this sequence.
    ///
    /// Unlike the `iter` of an eager collection, the cursor yields owned
    /// elements: each traversal produces them fresh.
    #[must_use]
    pub fn iter(&self) -> Cursor<T> {
        self.producer.open()
    }
}

// =============================================================================
// Absence Removal
// =============================================================================

impl<T: 'static> List<Maybe<T>> {
    /// Drops `Nothing` elements and unwraps the rest, lazily.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fluss::control::{Just, Nothing};
    /// use fluss::list;
    ///
    /// let present = list!(Just(1), Nothing, Just(3)).compress();
    /// assert_eq!(present.to_vec(), vec![1, 3]);
    /// ```
    #[must_use]
    pub fn compress(&self) -> List<T> {
        let parent = Rc::clone(&self.producer);
        List::from_producer(move || parent.open().filter_map(Maybe::extract))
    }
}

impl<T: 'static> List<Option<T>> {
    /// Drops `None` elements and unwraps the rest, lazily.
    #[must_use]
    pub fn compress(&self) -> List<T> {
        let parent = Rc::clone(&self.producer);
        List::from_producer(move || parent.open().flatten())
    }
}

// =============================================================================
// Producer Implementation
// =============================================================================

/// A sequence is itself a producer, so one can feed another directly.
impl<T: 'static> Producer<T> for List<T> {
    fn open(&self) -> Cursor<T> {
        self.producer.open()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

/// Cloning copies the handle, not the elements; both handles replay the
/// same recipe. Written out by hand so `T` itself need not be `Clone`.
impl<T> Clone for List<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            producer: Rc::clone(&self.producer),
        }
    }
}

/// Never traverses: formatting a value must not run production logic.
impl<T> fmt::Debug for List<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("List").finish_non_exhaustive()
    }
}

impl<T: 'static> Default for List<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone + 'static> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl<T: 'static> IntoIterator for &List<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    /// Opens a fresh cursor; `for element in &sequence` is one traversal.
    #[inline]
    fn into_iter(self) -> Cursor<T> {
        self.iter()
    }
}

impl<T: 'static> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    #[inline]
    fn into_iter(self) -> Cursor<T> {
        self.producer.open()
    }
}

// =============================================================================
// Capability Contract Implementations
// =============================================================================

impl<T> TypeConstructor for List<T> {
    type Inner = T;
    type WithType<B> = List<B>;
}

impl<T: 'static> Chain for List<T> {
    #[inline]
    fn chain<B, F>(self, function: F) -> List<B>
    where
        F: Fn(T) -> List<B> + 'static,
        B: 'static,
    {
        Self::chain(&self, function)
    }
}

impl<T: 'static> Foldable for List<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.iter().fold(init, function)
    }

    /// Bounded probe, never a full count.
    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn length(&self) -> usize {
        self.len()
    }

    #[inline]
    fn to_vec(self) -> Vec<T> {
        Self::to_vec(&self)
    }
}

impl<T: 'static> Filterable for List<T> {
    #[inline]
    fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self::filter(&self, predicate)
    }
}

// =============================================================================
// Serialization
// =============================================================================

#[cfg(feature = "serde")]
mod serde_impls {
    use super::List;
    use serde::de::{Deserialize, Deserializer};
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    /// Accepts exactly the literal `"List"` in the `type` field.
    #[derive(serde::Deserialize)]
    enum ListTag {
        List,
    }

    #[derive(serde::Deserialize)]
    struct ListWire<T> {
        #[serde(rename = "type")]
        _tag: ListTag,
        value: Vec<T>,
    }

    impl<T: Serialize + 'static> Serialize for List<T> {
        /// Materializes one full traversal into the documented shape
        /// `{"type": "List", "value": [..]}`. Serializing an unbounded
        /// sequence does not terminate, exactly like any other unbounded
        /// terminal operation.
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let elements = self.to_vec();
            let mut state = serializer.serialize_struct("List", 2)?;
            state.serialize_field("type", "List")?;
            state.serialize_field("value", &elements)?;
            state.end()
        }
    }

    /// Reconstructs an eager, replayable sequence holding the
    /// materialized elements.
    impl<'de, T> Deserialize<'de> for List<T>
    where
        T: Deserialize<'de> + Clone + 'static,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let wire = ListWire::<T>::deserialize(deserializer)?;
            Ok(Self::of(wire.value))
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_to_the_documented_shape() {
        let serialized = serde_json::to_value(List::of(vec![1, 2, 3])).unwrap();
        assert_eq!(
            serialized,
            serde_json::json!({"type": "List", "value": [1, 2, 3]})
        );
    }

    #[test]
    fn serializes_transformed_sequences_materialized() {
        let doubled = List::of(vec![1, 2]).map(|n| n * 2);
        let serialized = serde_json::to_value(doubled).unwrap();
        assert_eq!(
            serialized,
            serde_json::json!({"type": "List", "value": [2, 4]})
        );
    }

    #[test]
    fn deserializes_into_a_replayable_sequence() {
        let restored: List<i32> =
            serde_json::from_value(serde_json::json!({"type": "List", "value": [1, 2, 3]}))
                .unwrap();
        assert_eq!(List::to_vec(&restored), vec![1, 2, 3]);
        assert_eq!(List::to_vec(&restored), vec![1, 2, 3]);
    }

    #[test]
    fn rejects_foreign_type_tag() {
        let result: Result<List<i32>, _> =
            serde_json::from_value(serde_json::json!({"type": "Maybe", "value": [1]}));
        assert!(result.is_err());
    }

    #[test]
    fn roundtrip_matches_to_vec() {
        let original = List::of(vec![1, 2, 3]).filter(|n| n % 2 == 1);
        let serialized = serde_json::to_string(&original).unwrap();
        let restored: List<i32> = serde_json::from_str(&serialized).unwrap();
        assert_eq!(restored.to_vec(), original.to_vec());
    }
}
