mod common;

use common::run;

#[test]
fn undefined_name_is_a_runtime_error() {
    let err = run("undefined_name").unwrap_err();
    assert!(err.contains("not defined"));
}

#[test]
fn type_mismatch_on_a_binary_operator_is_a_runtime_error() {
    let err = run(r#"1 + "a""#).unwrap_err();
    assert!(err.contains("not defined for"));
}

#[test]
fn parse_error_on_a_missing_then() {
    assert!(run("if 1 2").is_err());
}

#[test]
fn parse_error_on_an_unclosed_paren() {
    assert!(run("(1 + 2").is_err());
}

#[test]
fn lex_error_on_an_unterminated_string_propagates_through_run() {
    let err = run("\"abc").unwrap_err();
    assert!(err.contains("unterminated"));
}

#[test]
fn deep_recursion_raises_a_stack_overflow_error_instead_of_crashing() {
    let src = "func f(n) -> f(n + 1); f(0)";
    let err = run(src).unwrap_err();
    assert!(err.contains("stack overflow"));
}
