//! Helper functions (combinators) for function composition.
//!
//! This module provides fundamental combinators that are commonly used
//! in functional programming:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`tap`]: Runs a side effect on a value and passes the value through
//! - [`fork`]: Applies two functions to one input and joins the results
//!
//! These functions serve as building blocks for more complex function compositions.

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Type Parameters
///
/// * `T` - The type of the value to return
///
/// # Examples
///
/// ```
/// use fluss::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
///
/// # Use with function composition
///
/// ```
/// use fluss::compose::identity;
/// use fluss::compose;
///
/// fn double(x: i32) -> i32 { x * 2 }
///
/// let composed = compose!(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator in combinatory logic.
/// Useful when you need a function that always produces the same result
/// regardless of its input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Arguments
///
/// * `value` - The value that the returned function will always return
///
/// # Returns
///
/// A function that takes any input and returns the constant value.
///
/// # Examples
///
/// ```
/// use fluss::compose::constant;
///
/// // Create a function that always returns 5 for i32 input
/// let always_five_from_int = constant::<_, i32>(5);
/// assert_eq!(always_five_from_int(100), 5);
///
/// // Create a function that always returns 5 for &str input
/// let always_five_from_str = constant::<_, &str>(5);
/// assert_eq!(always_five_from_str("ignored"), 5);
/// ```
///
/// # Use with sequences
///
/// ```
/// use fluss::compose::constant;
/// use fluss::list;
///
/// // Replace all elements with zeros
/// let zeroes = list!(1, 2, 3).map(constant(0));
/// assert_eq!(zeroes.to_vec(), vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given a function `f(a, b)`, returns a new function `g(b, a)` such that
/// `g(b, a) = f(a, b)`.
///
/// Also known as the C combinator (flip) in combinatory logic.
/// Useful for partial application when you want to fix the second argument
/// instead of the first.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Type Parameters
///
/// * `A` - The type of the first argument of the original function
/// * `B` - The type of the second argument of the original function
/// * `C` - The return type of the function
/// * `F` - The function type (must implement [`Fn`])
///
/// # Arguments
///
/// * `function` - The binary function whose arguments should be swapped
///
/// # Returns
///
/// A new function with swapped argument order.
///
/// # Examples
///
/// ```
/// use fluss::compose::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
///
/// // divide(10.0, 2.0) = 5.0
/// assert_eq!(divide(10.0, 2.0), 5.0);
///
/// // flipped_divide(10.0, 2.0) = divide(2.0, 10.0) = 0.2
/// assert!((flipped_divide(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
///
/// # Double flip is identity
///
/// ```
/// use fluss::compose::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 {
///     minuend - subtrahend
/// }
///
/// let flipped_once = flip(subtract);
/// let flipped_twice = flip(flipped_once);
///
/// assert_eq!(subtract(10, 3), flipped_twice(10, 3));
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Runs a side effect on a value, then returns the value unchanged.
///
/// The effect receives the value by reference, so the returned function
/// behaves like [`identity`] with an observation attached. Useful for
/// inspecting intermediate values inside a [`pipe!`](crate::pipe!) chain
/// without disturbing the data flow.
///
/// # Type Parameters
///
/// * `T` - The type of the value passing through
/// * `F` - The effect type (must implement [`Fn`] over `&T`)
///
/// # Examples
///
/// ## Observing a pipeline step
///
/// ```
/// use std::cell::Cell;
/// use fluss::compose::tap;
/// use fluss::pipe;
///
/// let observed = Cell::new(0);
///
/// let result = pipe!(
///     5,
///     |n: i32| n * 2,
///     tap(|n: &i32| observed.set(*n)),
///     |n: i32| n + 1,
/// );
///
/// assert_eq!(result, 11);
/// assert_eq!(observed.get(), 10);
/// ```
///
/// ## The value passes through untouched
///
/// ```
/// use fluss::compose::tap;
///
/// let pass_through = tap(|_: &Vec<i32>| {});
/// assert_eq!(pass_through(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn tap<T, F>(effect: F) -> impl Fn(T) -> T
where
    F: Fn(&T),
{
    move |value| {
        effect(&value);
        value
    }
}

/// Applies two functions to one input and joins their results.
///
/// `fork(join, first, second)(x)` computes `join(first(x), second(x))`.
/// The first function receives a clone of the input; the second consumes
/// the input itself. Both results are handed to the joining function.
///
/// Also known as converge (Ramda) or the Phi combinator.
///
/// # Type Parameters
///
/// * `T` - The input type (must implement [`Clone`])
/// * `A` - The result type of the first function
/// * `B` - The result type of the second function
/// * `C` - The joined result type
///
/// # Examples
///
/// ## Computing an average
///
/// ```
/// use fluss::compose::fork;
///
/// fn total(values: Vec<i32>) -> i32 { values.into_iter().sum() }
/// fn count(values: Vec<i32>) -> i32 { values.len() as i32 }
///
/// let average = fork(|sum, len| sum / len, total, count);
/// assert_eq!(average(vec![2, 4, 6]), 4);
/// ```
///
/// ## Joining heterogeneous results
///
/// ```
/// use fluss::compose::fork;
///
/// let describe = fork(
///     |upper: String, length: usize| format!("{upper} ({length})"),
///     |word: String| word.to_uppercase(),
///     |word: String| word.len(),
/// );
///
/// assert_eq!(describe("needle".to_string()), "NEEDLE (6)");
/// ```
#[inline]
pub fn fork<T, A, B, C, F, G, J>(join: J, first: F, second: G) -> impl Fn(T) -> C
where
    T: Clone,
    F: Fn(T) -> A,
    G: Fn(T) -> B,
    J: Fn(A, B) -> C,
{
    move |input| {
        let first_result = first(input.clone());
        let second_result = second(input);
        join(first_result, second_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_constant_with_reference() {
        let always_hello = constant("hello");
        assert_eq!(always_hello(42), "hello");
    }

    #[test]
    fn test_flip_with_asymmetric_function() {
        fn power(base: i32, exponent: u32) -> i32 {
            base.pow(exponent)
        }

        let flipped_power = flip(power);
        // power(2, 3) = 8
        assert_eq!(power(2, 3), 8);
        // flipped_power(3, 2) = power(2, 3) = 8
        assert_eq!(flipped_power(3, 2), 8);
    }

    #[test]
    fn test_tap_returns_the_value_unchanged() {
        let silent = tap(|_: &i32| {});
        assert_eq!(silent(42), 42);
    }

    #[test]
    fn test_tap_runs_the_effect_each_call() {
        let calls = Cell::new(0);
        let observe = tap(|_: &i32| calls.set(calls.get() + 1));

        assert_eq!(observe(1), 1);
        assert_eq!(observe(2), 2);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_fork_joins_both_results() {
        let bounds = fork(
            |low: i32, high: i32| (low, high),
            |n: i32| n - 1,
            |n: i32| n + 1,
        );
        assert_eq!(bounds(10), (9, 11));
    }

    #[test]
    fn test_fork_applies_both_functions_to_the_same_input() {
        let seen_by_first = Cell::new(0);
        let seen_by_second = Cell::new(0);

        let record = fork(
            |_: (), _: ()| (),
            |n: i32| seen_by_first.set(n),
            |n: i32| seen_by_second.set(n),
        );

        record(7);
        assert_eq!(seen_by_first.get(), 7);
        assert_eq!(seen_by_second.get(), 7);
    }
}
