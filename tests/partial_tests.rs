#![cfg(feature = "compose")]
//! Unit tests for the partial! macro.

use combinars::{compose, partial};
use rstest::rstest;

#[rstest]
fn test_partial_fixes_first_argument() {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    let add_five = partial!(add, 5, __);
    assert_eq!(add_five(3), 8);
    assert_eq!(add_five(10), 15);
}

#[rstest]
fn test_partial_fixes_second_argument() {
    fn divide(numerator: f64, denominator: f64) -> f64 {
        numerator / denominator
    }

    let half = partial!(divide, __, 2.0);
    assert_eq!(half(10.0), 5.0);
}

#[rstest]
fn test_partial_bound_arguments_come_first() {
    // The fixed argument lands in the leading position; call-time
    // arguments fill the placeholders.
    fn describe(label: &str, count: usize) -> String {
        format!("{label}: {count}")
    }

    let describe_errors = partial!(describe, "errors", __);
    assert_eq!(describe_errors(3), "errors: 3");
}

#[rstest]
fn test_partial_three_argument_combinations() {
    fn weave(a: &str, b: &str, c: &str) -> String {
        format!("{a}{b}{c}")
    }

    let outer = partial!(weave, "(", __, ")");
    assert_eq!(outer("x"), "(x)");

    let leading = partial!(weave, "<", __, __);
    assert_eq!(leading("y", ">"), "<y>");
}

#[rstest]
fn test_partial_thunk_defers_the_call() {
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    let thunk = partial!(add, 3, 5);
    assert_eq!(thunk(), 8);
    assert_eq!(thunk(), 8); // repeatable
}

#[rstest]
fn test_partial_result_composes() {
    fn multiply(first: i32, second: i32) -> i32 {
        first * second
    }
    fn add(first: i32, second: i32) -> i32 {
        first + second
    }

    let double = partial!(multiply, 2, __);
    let add_ten = partial!(add, 10, __);

    let composed = compose!(add_ten, double);
    assert_eq!(composed(4), 18);
}
