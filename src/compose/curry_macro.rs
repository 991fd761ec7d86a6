//! The curry macro family for converting multi-argument functions to curried form.
//!
//! This module provides macros for currying functions with 2 to 4 arguments.
//! Currying transforms a function that takes multiple arguments into a sequence
//! of functions, each taking a single argument.
//!
//! # Design Decisions
//!
//! The curry macros use `std::rc::Rc` internally to share the function and arguments
//! across multiple closure invocations. This allows:
//!
//! - The curried function to be called multiple times
//! - Partial applications to be reused
//! - Arguments that don't implement `Copy` to work correctly
//!
//! Note: The returned closures implement `Fn`, so they can be used with
//! `compose!`, `pipe!`, and other combinators.

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and returns
/// another closure that takes `b` and returns `c`.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use fluss::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Partial application
///
/// ```
/// use fluss::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
/// let triple = curried(3);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(triple(5), 15);
/// ```
///
/// ## Partial application over a sequence
///
/// ```
/// use fluss::{curry2, list};
///
/// fn scale(factor: i32, value: i32) -> i32 { factor * value }
///
/// let times_ten = curry2!(scale)(10);
/// let scaled = list!(1, 2, 3).map(times_ten);
///
/// assert_eq!(scaled.to_vec(), vec![10, 20, 30]);
/// ```
#[macro_export]
macro_rules! curry2 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                function(
                    ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                    arg2,
                )
            }
        }
    }};
}

/// Converts a 3-argument function into a curried form.
///
/// Given a function `f(a, b, c) -> d`, returns nested closures that take one
/// argument at a time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use fluss::curry3;
///
/// fn add_three(first: i32, second: i32, third: i32) -> i32 {
///     first + second + third
/// }
///
/// let curried = curry3!(add_three);
/// assert_eq!(curried(1)(2)(3), 6);
/// ```
///
/// ## Step-by-step application
///
/// ```
/// use fluss::curry3;
///
/// fn volume(width: f64, height: f64, depth: f64) -> f64 {
///     width * height * depth
/// }
///
/// let curried_volume = curry3!(volume);
/// let with_width = curried_volume(2.0);
/// let with_width_height = with_width(3.0);
/// let result = with_width_height(4.0);
///
/// assert!((result - 24.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! curry3 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    function(
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                        ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                        arg3,
                    )
                }
            }
        }
    }};
}

/// Converts a 4-argument function into a curried form.
///
/// Given a function `f(a, b, c, d) -> e`, returns nested closures that take one
/// argument at a time.
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - Argument types (except the last) must implement [`Clone`]
///
/// # Examples
///
/// ```
/// use fluss::curry4;
///
/// fn sum_four(a: i32, b: i32, c: i32, d: i32) -> i32 {
///     a + b + c + d
/// }
///
/// let curried = curry4!(sum_four);
/// assert_eq!(curried(1)(2)(3)(4), 10);
/// ```
#[macro_export]
macro_rules! curry4 {
    ($function:expr $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |arg1| {
            let function = ::std::rc::Rc::clone(&function);
            let arg1 = ::std::rc::Rc::new(arg1);
            move |arg2| {
                let function = ::std::rc::Rc::clone(&function);
                let arg1 = ::std::rc::Rc::clone(&arg1);
                let arg2 = ::std::rc::Rc::new(arg2);
                move |arg3| {
                    let function = ::std::rc::Rc::clone(&function);
                    let arg1 = ::std::rc::Rc::clone(&arg1);
                    let arg2 = ::std::rc::Rc::clone(&arg2);
                    let arg3 = ::std::rc::Rc::new(arg3);
                    move |arg4| {
                        function(
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg1)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg2)),
                            ::std::rc::Rc::unwrap_or_clone(::std::rc::Rc::clone(&arg3)),
                            arg4,
                        )
                    }
                }
            }
        }
    }};
}
