//! Capability contracts shared by every container in the crate.
//!
//! This module defines the small set of traits that the lazy sequence, the
//! wrappers, and the applicable standard-library types all honor with the
//! same semantics:
//!
//! - [`Chain`]: Feeding elements into container-returning functions and
//!   flattening exactly one level
//! - [`Foldable`]: Reducing elements to a summary value with a left fold
//! - [`Filterable`]: Discarding elements by predicate while keeping the
//!   container's shape
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust has no native higher-kinded types, so the contracts are built on
//! [`TypeConstructor`], a Generic Associated Type that stands in for "the
//! same container with a different element type".
//!
//! ## Foundation Types
//!
//! - [`TypeConstructor`]: The HKT emulation the contracts build on
//! - [`Identity`]: The trivial container, used as the reference model for
//!   law checking
//!
//! # Examples
//!
//! ```rust
//! use fluss::typeclass::{Chain, Foldable, Filterable};
//!
//! // One contract, several containers
//! let chained = Some(2).chain(|n| Some(n * 10));
//! assert_eq!(chained, Some(20));
//!
//! let folded = vec![1, 2, 3].fold_left(0, |accumulator, n| accumulator + n);
//! assert_eq!(folded, 6);
//!
//! let filtered = vec![1, 2, 3, 4].filter(|n| n % 2 == 0);
//! assert_eq!(filtered, vec![2, 4]);
//! ```

mod chain;
mod filterable;
mod foldable;
mod higher;
mod identity;

pub use chain::Chain;
pub use filterable::Filterable;
pub use foldable::Foldable;
pub use higher::TypeConstructor;
pub use identity::Identity;
