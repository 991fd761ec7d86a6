//! The `sequentially!` macro for applying several functions to one input.
//!
//! This module provides the [`sequentially!`] macro which builds a closure
//! that applies every given function, in order, to the same input value and
//! returns all of the results.

/// Builds a closure that applies every function to the same input, in order.
///
/// `sequentially!(f, g, h)(x)` evaluates `f`, `g` and `h` left to right on
/// the same input and returns `(f(x), g(x), h(x))`.
///
/// Where [`pipe!`](crate::pipe!) threads a value *through* a chain of
/// functions, `sequentially!` fans a value *out*: every function sees the
/// original input, not the previous function's output. Side effects run in
/// the order the functions are written.
///
/// # Syntax
///
/// - `sequentially!(f)` - Returns `|x| (f(x),)`
/// - `sequentially!(f, g)` - Returns `|x| (f(x), g(x))`
/// - `sequentially!(f, g, h, ...)` - Any number of functions, one result each
///
/// # Type Requirements
///
/// - Every function must implement [`Fn`] and accept the same input type
///   by value
/// - The input type must implement [`Clone`] when more than one function is
///   given (the last function consumes the input itself; every earlier one
///   receives a clone)
/// - Result types may differ; they are collected into a tuple
///
/// # Examples
///
/// ## Fanning one value out
///
/// ```
/// use fluss::sequentially;
///
/// fn double(n: i32) -> i32 { n * 2 }
/// fn square(n: i32) -> i32 { n * n }
///
/// let both = sequentially!(double, square);
/// assert_eq!(both(3), (6, 9));
/// ```
///
/// ## Heterogeneous results
///
/// ```
/// use fluss::sequentially;
///
/// let describe = sequentially!(
///     |word: String| word.to_uppercase(),
///     |word: String| word.len(),
/// );
///
/// assert_eq!(describe("hello".to_string()), ("HELLO".to_string(), 5));
/// ```
///
/// ## Side effects run in order
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use fluss::sequentially;
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let first = Rc::clone(&log);
/// let second = Rc::clone(&log);
///
/// let record = sequentially!(
///     move |n: i32| first.borrow_mut().push(n),
///     move |n: i32| second.borrow_mut().push(n * 10),
/// );
///
/// record(7);
/// assert_eq!(*log.borrow(), vec![7, 70]);
/// ```
///
/// ## The returned closure is reusable
///
/// ```
/// use fluss::sequentially;
///
/// let neighbours = sequentially!(|n: i32| n - 1, |n: i32| n + 1);
/// assert_eq!(neighbours(10), (9, 11));
/// assert_eq!(neighbours(20), (19, 21));
/// ```
#[macro_export]
macro_rules! sequentially {
    // Entry: capture the functions once, return a closure applying them in order
    ($($function:expr),+ $(,)?) => {{
        let functions = ($($function,)+);
        move |input| $crate::sequentially!(@apply functions, input; []; []; $($function),+)
    }};

    // ==========================================================================
    // Internal rules (@apply): peel one function per level; the skip prefix
    // accumulates one `_,` per applied function to reach the next tuple slot
    // ==========================================================================

    // Terminal case: the final function consumes the input itself
    (@apply $functions:ident, $input:ident; [$($skip:tt)*]; [$($result:expr),*]; $function:expr) => {{
        ($($result,)* {
            let ($($skip)* ref step, ..) = $functions;
            step($input)
        },)
    }};

    // More functions follow: the current one receives a clone of the input
    (@apply $functions:ident, $input:ident; [$($skip:tt)*]; [$($result:expr),*]; $function:expr, $($rest:expr),+) => {
        $crate::sequentially!(
            @apply $functions, $input;
            [$($skip)* _,];
            [$($result,)* {
                let ($($skip)* ref step, ..) = $functions;
                step(::std::clone::Clone::clone(&$input))
            }];
            $($rest),+
        )
    };
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_sequentially_single() {
        let double = |n: i32| n * 2;
        let lone = sequentially!(double);
        assert_eq!(lone(5), (10,));
    }

    #[test]
    fn test_sequentially_applies_every_function_to_the_same_input() {
        let keep = |n: i32| n;
        let square = |n: i32| n * n;
        let both = sequentially!(keep, square);
        assert_eq!(both(2), (2, 4));
    }

    #[test]
    fn test_sequentially_runs_functions_in_written_order() {
        let log = Rc::new(RefCell::new(String::new()));
        let first = Rc::clone(&log);
        let second = Rc::clone(&log);
        let third = Rc::clone(&log);

        let record = sequentially!(
            move |_: i32| first.borrow_mut().push('1'),
            move |_: i32| second.borrow_mut().push('2'),
            move |_: i32| third.borrow_mut().push('3'),
        );

        record(0);
        assert_eq!(*log.borrow(), "123");
    }

    #[test]
    fn test_sequentially_every_function_sees_the_original_input() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&seen);
        let second = Rc::clone(&seen);
        let third = Rc::clone(&seen);

        let record = sequentially!(
            move |n: i32| first.borrow_mut().push(n),
            move |n: i32| second.borrow_mut().push(n),
            move |n: i32| third.borrow_mut().push(n),
        );

        record(7);
        assert_eq!(*seen.borrow(), vec![7, 7, 7]);
    }

    #[test]
    fn test_sequentially_mixed_result_types() {
        let stringify = |n: i32| n.to_string();
        let negate = |n: i32| -n;
        let is_even = |n: i32| n % 2 == 0;

        let fan_out = sequentially!(stringify, negate, is_even);
        assert_eq!(fan_out(4), ("4".to_string(), -4, true));
    }

    #[test]
    fn test_sequentially_reusable() {
        let neighbours = sequentially!(|n: i32| n - 1, |n: i32| n + 1);
        assert_eq!(neighbours(10), (9, 11));
        assert_eq!(neighbours(0), (-1, 1));
    }

    #[test]
    fn test_sequentially_trailing_comma() {
        let both = sequentially!(|n: i32| n, |n: i32| n + 1,);
        assert_eq!(both(1), (1, 2));
    }
}
