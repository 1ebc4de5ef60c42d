mod common;

use common::run;
use glintsh::Value;

#[test]
fn operator_precedence_matches_standard_arithmetic() {
    assert_eq!(run("1 + 2 * 3").unwrap(), Value::Integer(7));
}

#[test]
fn power_is_right_associative() {
    // 2 ^ 3 ^ 2 == 2 ^ (3 ^ 2) == 2 ^ 9 == 512, not (2 ^ 3) ^ 2 == 64
    assert_eq!(run("2 ^ 3 ^ 2").unwrap(), Value::Integer(512));
}

#[test]
fn integer_division_promotes_to_float_only_when_inexact() {
    assert_eq!(run("6 / 3").unwrap(), Value::Integer(2));
    assert_eq!(run("7 / 2").unwrap(), Value::Float(3.5));
}

#[test]
fn mixed_integer_float_arithmetic_promotes_to_float() {
    assert_eq!(run("1 + 2.5").unwrap(), Value::Float(3.5));
}

#[test]
fn division_by_zero_is_a_runtime_error() {
    assert!(run("1 / 0").is_err());
}

#[test]
fn unary_minus_and_plus() {
    assert_eq!(run("-5").unwrap(), Value::Integer(-5));
    assert_eq!(run("+5").unwrap(), Value::Integer(5));
    assert_eq!(run("- -5").unwrap(), Value::Integer(5));
}

#[test]
fn comparisons_yield_integer_booleans() {
    assert_eq!(run("1 < 2").unwrap(), Value::Integer(1));
    assert_eq!(run("1 > 2").unwrap(), Value::Integer(0));
}

#[test]
fn not_operator() {
    assert_eq!(run("not 0").unwrap(), Value::Integer(1));
    assert_eq!(run("not 1").unwrap(), Value::Integer(0));
}

#[test]
fn short_circuit_and_skips_the_right_operand() {
    // calling an undefined function on the right side would error if evaluated
    assert_eq!(run("0 and undefined_fn()").unwrap(), Value::Integer(0));
}

#[test]
fn short_circuit_or_skips_the_right_operand() {
    assert_eq!(run("1 or undefined_fn()").unwrap(), Value::Integer(1));
}

#[test]
fn and_or_return_normalized_booleans_not_raw_operands() {
    assert_eq!(run("5 and 10").unwrap(), Value::Integer(1));
    assert_eq!(run("0 or 10").unwrap(), Value::Integer(1));
}
