//! The pull protocol behind [`List`](super::List).
//!
//! A [`Producer`] is a restartable recipe for elements: every call to
//! [`open`](Producer::open) starts a fresh, independent traversal by
//! handing out a new [`Cursor`]. Nothing is buffered between cursors, so
//! opening twice re-executes all upstream production logic twice.
//!
//! Any `Fn() -> impl IntoIterator` closure is a producer through the
//! blanket implementation, which is how every transformation operator on
//! `List` is built: wrap the parent producer in a closure that opens the
//! parent's cursor and adapts it.
//!
//! # Examples
//!
//! ```rust
//! use fluss::sequence::Producer;
//!
//! let naturals = || 0..;
//!
//! let mut first = naturals.open();
//! let mut second = naturals.open();
//!
//! assert_eq!(first.next(), Some(0));
//! assert_eq!(first.next(), Some(1));
//! // The second cursor is unaffected by pulls on the first.
//! assert_eq!(second.next(), Some(0));
//! ```

/// One independent traversal of a sequence.
///
/// A cursor owns all of its working state; dropping it abandons the
/// traversal without affecting the producer or any sibling cursor.
pub type Cursor<T> = Box<dyn Iterator<Item = T>>;

/// A restartable source of elements.
///
/// Implementors promise that [`open`](Self::open) can be called any number
/// of times and that each returned cursor traverses the sequence from the
/// beginning, independently of every other cursor. A producer therefore
/// never holds traversal state itself; counters, seen-sets and similar
/// bookkeeping belong inside the cursor.
pub trait Producer<T> {
    /// Starts a fresh traversal.
    fn open(&self) -> Cursor<T>;
}

/// Every rerunnable closure yielding something iterable is a producer.
///
/// The closure is invoked once per `open`, so side effects inside it run
/// once per traversal. This is the intended mechanism, not a caveat: it is
/// what makes a sequence built from the closure replayable.
impl<T, I, F> Producer<T> for F
where
    F: Fn() -> I,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'static,
{
    fn open(&self) -> Cursor<T> {
        Box::new(self().into_iter())
    }
}
