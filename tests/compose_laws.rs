#![cfg(feature = "compose")]
//! Property-based tests for combinator laws.
//!
//! ## Composition Laws
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Left Identity**: `compose!(identity, f) == f`
//! - **Right Identity**: `compose!(f, identity) == f`
//!
//! ## Pipe Laws
//! - **Consistency with Compose**: `pipe!(x, f, g) == compose!(g, f)(x)`
//!
//! ## Flip Laws
//! - **Double Flip Identity**: `flip(flip(f)) == f`
//! - **Flip Definition**: `flip(f)(a, b) == f(b, a)`
//!
//! ## Curry Laws
//! - **Equivalence**: `curry2!(f)(a)(b) == f(a, b)`
//!
//! ## Dispatch Laws
//! - **First match wins**; **all-pass chains produce nothing**

use combinars::compose::{flip, identity};
use combinars::{compose, curry2, dispatch, partial, pipe};
use proptest::prelude::*;

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    /// Left Identity Law: compose!(identity, f)(x) == f(x)
    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        let composed = compose!(identity, function);
        prop_assert_eq!(composed(x), function(x));
    }

    /// Right Identity Law: compose!(f, identity)(x) == f(x)
    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);

        let composed = compose!(function, identity);
        prop_assert_eq!(composed(x), function(x));
    }

    /// Associativity Law: compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);
        let function3 = |n: i32| n.wrapping_sub(3);

        let left_associative = compose!(function1, compose!(function2, function3));
        let right_associative = compose!(compose!(function1, function2), function3);

        prop_assert_eq!(left_associative(x), right_associative(x));
    }
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    /// Consistency: pipe!(x, f, g) == compose!(g, f)(x)
    #[test]
    fn prop_pipe_consistent_with_compose(x in any::<i32>()) {
        let function1 = |n: i32| n.wrapping_add(7);
        let function2 = |n: i32| n.wrapping_mul(5);

        prop_assert_eq!(
            pipe!(x, function1, function2),
            compose!(function2, function1)(x)
        );
    }
}

// =============================================================================
// Flip Laws
// =============================================================================

proptest! {
    /// Flip Definition: flip(f)(a, b) == f(b, a)
    #[test]
    fn prop_flip_definition(a in any::<i32>(), b in any::<i32>()) {
        let function = |left: i32, right: i32| left.wrapping_sub(right);

        prop_assert_eq!(flip(function)(a, b), function(b, a));
    }

    /// Double Flip Identity: flip(flip(f))(a, b) == f(a, b)
    #[test]
    fn prop_double_flip_identity(a in any::<i32>(), b in any::<i32>()) {
        let function = |left: i32, right: i32| left.wrapping_sub(right);

        prop_assert_eq!(flip(flip(function))(a, b), function(a, b));
    }
}

// =============================================================================
// Curry / Partial Laws
// =============================================================================

proptest! {
    /// Equivalence: curry2!(f)(a)(b) == f(a, b)
    #[test]
    fn prop_curry2_equivalence(a in any::<i32>(), b in any::<i32>()) {
        let function = |left: i32, right: i32| left.wrapping_add(right);

        prop_assert_eq!(curry2!(function)(a)(b), function(a, b));
    }

    /// Fixing the first argument: partial!(f, a, __)(b) == f(a, b)
    #[test]
    fn prop_partial_prefix_equivalence(a in any::<i32>(), b in any::<i32>()) {
        let function = |left: i32, right: i32| left.wrapping_add(right);

        let partially_applied = partial!(function, a, __);
        prop_assert_eq!(partially_applied(b), function(a, b));
    }
}

// =============================================================================
// Dispatch Laws
// =============================================================================

proptest! {
    /// First match wins: a handler that always claims shadows the rest.
    #[test]
    fn prop_dispatch_first_match_wins(x in any::<i32>()) {
        let claims = |n: &i32| Some(n.wrapping_add(1));
        let never_reached = |_: &i32| Some(i32::MIN);

        let chain = dispatch!(claims, never_reached);
        prop_assert_eq!(chain(&x), Some(x.wrapping_add(1)));
    }

    /// All-pass chains produce nothing.
    #[test]
    fn prop_dispatch_all_pass_is_none(x in any::<i32>()) {
        let passes = |_: &i32| None::<i32>;

        let chain = dispatch!(passes, |_: &i32| None::<i32>, |_: &i32| None::<i32>);
        prop_assert_eq!(chain(&x), None);
    }
}
