//! The curry macro family for converting multi-argument functions to curried form.
//!
//! Currying transforms a function that takes multiple arguments into a
//! sequence of functions, each taking a single argument. This library
//! carries the 2- and 3-argument forms; higher arities have no use here.
//!
//! # Design Decisions
//!
//! The curry macros use `std::rc::Rc` internally to share the function and
//! already-supplied arguments across closure invocations. This allows:
//!
//! - The curried function to be called multiple times
//! - Partial applications to be reused
//! - Arguments that don't implement `Copy` to work correctly
//!
//! The returned closures implement `Fn`, so they compose with
//! [`compose!`](crate::compose!) and [`pipe!`](crate::pipe!).

/// Converts a 2-argument function into a curried form.
///
/// Given a function `f(a, b) -> c`, returns a closure that takes `a` and
/// returns another closure that takes `b` and returns `c`. This is the
/// minimal single-step curry: each application supplies exactly one
/// argument.
///
/// # Laws
///
/// - **Equivalence**: `curry2!(f)(a)(b) == f(a, b)`
///
/// # Type Requirements
///
/// - The function must implement [`Fn`]
/// - The first argument type must implement [`Clone`] (so partial
///   applications are reusable)
///
/// # Examples
///
/// ## Basic currying
///
/// ```
/// use combinars::curry2;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let curried_add = curry2!(add);
/// assert_eq!(curried_add(5)(3), 8);
/// ```
///
/// ## Reusable partial applications
///
/// ```
/// use combinars::curry2;
///
/// fn multiply(first: i32, second: i32) -> i32 { first * second }
///
/// let curried = curry2!(multiply);
/// let double = curried(2);
///
/// assert_eq!(double(5), 10);
/// assert_eq!(double(7), 14);
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
/// Given a function `f(a, b, c) -> d`, returns nested closures taking one
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
/// use combinars::curry3;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let curried = curry3!(clamp);
/// let percent = curried(0)(100);
///
/// assert_eq!(percent(150), 100);
/// assert_eq!(percent(-3), 0);
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
