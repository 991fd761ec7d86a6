//! Lazy pull-based sequences.
//!
//! This module provides [`List`], a replayable lazy sequence, together
//! with the pull protocol it is built on and its construction surface:
//!
//! - [`Producer`] / [`Cursor`]: the pull protocol; a producer hands out a
//!   fresh independent cursor per traversal
//! - [`Source`] / [`IntoSource`]: classified construction inputs with the
//!   one-level spreading rule
//! - [`list!`]: variadic construction sugar
//!
//! # Overview
//!
//! A `List` is a recipe, not a buffer. Operators wrap the recipe; terminal
//! operations open a cursor and pull. Traversing again re-runs production
//! from scratch, so side-effecting producers fire once per traversal and
//! bounded views (`take`) of infinite sequences terminate.
//!
//! # Examples
//!
//! ## Pipelines stay lazy until forced
//!
//! ```rust
//! use fluss::list;
//!
//! let shouted = list!("thread", "pin")
//!     .map(str::to_uppercase)
//!     .filter(|word| word.len() > 3);
//!
//! assert_eq!(shouted.to_vec(), vec!["THREAD".to_string()]);
//! ```
//!
//! ## Infinite sequences are useful when bounded
//!
//! ```rust
//! use fluss::sequence::List;
//!
//! let powers: List<u64> = List::iterate(|| (0..).map(|n| 1 << n));
//! assert_eq!(powers.take(5).to_vec(), vec![1, 2, 4, 8, 16]);
//! ```

mod list;
mod list_macro;
mod producer;
mod source;

pub use list::List;
pub use producer::{Cursor, Producer};
pub use source::{IntoSource, Source};

// Re-export the macro (it is already at crate root via #[macro_export])
pub use crate::list;
