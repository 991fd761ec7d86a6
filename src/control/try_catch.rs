//! Adapters from `Result`-returning functions to `Either`-returning ones.
//!
//! A fallible computation in this crate is a plain function returning
//! `Result`. The adapters here lift such a function into one returning
//! [`Either`], so its outcome can flow through the same `map`/`chain`
//! pipelines as any other value: success lands in `Right`, failure in
//! `Left`.
//!
//! Failure means a returned `Err`, nothing else. A function that panics
//! unwinds through the adapter; no panic is ever converted into a `Left`.
//!
//! # Examples
//!
//! ```rust
//! use fluss::control::{try_catch, Either};
//!
//! let parse = try_catch(|input: &str| input.parse::<i32>());
//!
//! assert_eq!(parse("42"), Either::Right(42));
//! assert!(parse("not a number").is_left());
//! ```

use super::either::Either;

/// Lifts a `Result`-returning function into an `Either`-returning one.
///
/// The returned closure applies `operation` and converts the outcome:
/// `Ok(value)` becomes `Right(value)`, `Err(error)` becomes `Left(error)`.
///
/// # Examples
///
/// ```rust
/// use fluss::control::{try_catch, Either};
///
/// fn checked_div(pair: (i32, i32)) -> Result<i32, String> {
///     match pair {
///         (_, 0) => Err("division by zero".to_string()),
///         (numerator, denominator) => Ok(numerator / denominator),
///     }
/// }
///
/// let divide = try_catch(checked_div);
///
/// assert_eq!(divide((10, 2)), Either::Right(5));
/// assert_eq!(divide((10, 0)), Either::Left("division by zero".to_string()));
/// ```
#[inline]
pub fn try_catch<I, T, L, F>(operation: F) -> impl Fn(I) -> Either<L, T>
where
    F: Fn(I) -> Result<T, L>,
{
    move |input| operation(input).into()
}

/// Lifts a `Result`-returning function with a recovery step for failures.
///
/// The returned closure applies `operation`; on `Ok` the recovery is never
/// invoked and the value lands in `Right`. On `Err` the error is handed to
/// `recover`, whose own outcome decides the branch: a recovered `Ok` lands
/// in `Right`, a recovery that fails in turn lands in `Left`.
///
/// # Examples
///
/// ```rust
/// use fluss::control::{try_catch_with, Either};
///
/// let parse_or_zero = try_catch_with(
///     |input: &str| input.parse::<i32>(),
///     |_error| Ok(0),
/// );
///
/// assert_eq!(parse_or_zero("42"), Either::Right(42));
/// assert_eq!(parse_or_zero("not a number"), Either::Right(0));
/// ```
///
/// A recovery may itself fail:
///
/// ```rust
/// use fluss::control::{try_catch_with, Either};
///
/// let strict = try_catch_with(
///     |input: &str| input.parse::<i32>().map_err(|_| "unparsable"),
///     |error| Err(error),
/// );
///
/// assert_eq!(strict("oops"), Either::Left("unparsable"));
/// ```
#[inline]
pub fn try_catch_with<I, T, L, F, R>(operation: F, recover: R) -> impl Fn(I) -> Either<L, T>
where
    F: Fn(I) -> Result<T, L>,
    R: Fn(L) -> Result<T, L>,
{
    move |input| match operation(input) {
        Ok(value) => Either::Right(value),
        Err(error) => recover(error).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn success_lands_in_right() {
        let parse = try_catch(|input: &str| input.parse::<i32>());
        assert_eq!(parse("42").right(), Some(42));
    }

    #[rstest]
    fn failure_lands_in_left() {
        let parse = try_catch(|input: &str| input.parse::<i32>());
        assert!(parse("not a number").is_left());
    }

    #[rstest]
    fn adapted_function_is_reusable() {
        let parse = try_catch(|input: &str| input.parse::<i32>());
        assert_eq!(parse("1"), Either::Right(1));
        assert_eq!(parse("2"), Either::Right(2));
        assert!(parse("three").is_left());
    }

    #[rstest]
    fn recovery_is_skipped_on_success() {
        let recoveries = Cell::new(0);
        let parse = try_catch_with(
            |input: &str| input.parse::<i32>(),
            |error| {
                recoveries.set(recoveries.get() + 1);
                Err(error)
            },
        );

        assert_eq!(parse("42"), Either::Right(42));
        assert_eq!(recoveries.get(), 0);
    }

    #[rstest]
    fn successful_recovery_lands_in_right() {
        let parse_or_zero = try_catch_with(|input: &str| input.parse::<i32>(), |_error| Ok(0));
        assert_eq!(parse_or_zero("oops"), Either::Right(0));
    }

    #[rstest]
    fn failed_recovery_lands_in_left() {
        let doomed = try_catch_with(
            |input: &str| input.parse::<i32>().map_err(|_| "unparsable"),
            |_error| Err("unrecoverable"),
        );
        assert_eq!(doomed("oops"), Either::Left("unrecoverable"));
    }

    #[rstest]
    fn adapter_composes_with_chain() {
        let parse = try_catch(|input: &str| input.parse::<i32>().map_err(|_| "unparsable"));
        let result = parse("21").chain(|n| Either::Right(n * 2));
        assert_eq!(result, Either::Right(42));
    }

    #[rstest]
    #[should_panic(expected = "boom")]
    fn panics_are_not_caught() {
        let explosive = try_catch(|_input: i32| -> Result<i32, &str> { panic!("boom") });
        let _ = explosive(1);
    }
}
