//! # fluss
//!
//! A functional programming toolkit for Rust providing lazy replayable
//! sequences, short-circuiting wrappers, and composition macros.
//!
//! ## Overview
//!
//! This library is built around three pieces that share one set of
//! capability contracts:
//!
//! - **Lazy Sequences**: [`List`](sequence::List), a pull-based sequence
//!   whose every traversal restarts production from scratch
//! - **Wrappers**: [`Maybe`](control::Maybe) for optional values and
//!   [`Either`](control::Either) for disjoint unions, both short-circuiting
//! - **Capability Contracts**: [`Chain`](typeclass::Chain),
//!   [`Foldable`](typeclass::Foldable) and [`Filterable`](typeclass::Filterable),
//!   honored identically by the sequence, the wrappers, and the std types
//! - **Function Composition**: `compose!`, `pipe!`, `curry2!`..`curry4!`,
//!   `sequentially!` macros and helper combinators
//!
//! ## Feature Flags
//!
//! - `typeclass`: Capability traits (`Chain`, `Foldable`, `Filterable`)
//! - `compose`: Function composition utilities
//! - `control`: Wrapper types (`Maybe`, `Either`) and `try_catch`
//! - `sequence`: The lazy `List` sequence
//! - `serde`: Serialization for `List`, `Maybe` and `Either`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fluss::prelude::*;
//!
//! let evens = list![1, 2, 3, 4, 5, 6].filter(|value| value % 2 == 0);
//!
//! // Nothing has been produced yet; `to_vec` drives the traversal.
//! assert_eq!(evens.to_vec(), vec![2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fluss::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;
