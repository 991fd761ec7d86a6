//! Short-circuiting control structures.
//!
//! This module provides the two algebraic wrappers the crate is built
//! around, plus the adapters that feed them:
//!
//! - [`Maybe`]: a value or its absence, with absence short-circuiting
//!   every transformation
//! - [`Either`]: exactly one of two alternatives, with `Left` carrying
//!   failures past every success-biased transformation
//! - [`try_catch`] / [`try_catch_with`]: lift `Result`-returning
//!   functions into `Either`-returning ones
//!
//! The variants are re-exported so call sites can pattern-match and
//! construct without the enum prefix, the way `Some`/`None` and
//! `Ok`/`Err` read in std.
//!
//! # Examples
//!
//! ## Absence short-circuits
//!
//! ```rust
//! use fluss::control::{Just, Maybe, Nothing};
//!
//! let present = Maybe::of(21).map(|n| n * 2);
//! assert_eq!(present, Just(42));
//!
//! let absent: Maybe<i32> = Nothing;
//! assert_eq!(absent.map(|n| n * 2), Nothing);
//! ```
//!
//! ## Failures carry through
//!
//! ```rust
//! use fluss::control::{try_catch, Either};
//!
//! let parse = try_catch(|input: &str| input.parse::<i32>().map_err(|_| "unparsable"));
//!
//! let outcome = parse("7").chain(|n| Either::Right(n + 1));
//! assert_eq!(outcome, Either::Right(8));
//!
//! let failed = parse("seven").chain(|n| Either::Right(n + 1));
//! assert_eq!(failed, Either::Left("unparsable"));
//! ```

mod either;
mod maybe;
mod try_catch;

pub use either::Either;
pub use either::Either::{Left, Right};
pub use maybe::Maybe::{Just, Nothing};
pub use maybe::{IntoMaybe, Maybe};
pub use try_catch::{try_catch, try_catch_with};
