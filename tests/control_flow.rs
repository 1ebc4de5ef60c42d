mod common;

use common::run;
use glintsh::Value;

#[test]
fn program_with_multiple_statements_collects_a_list() {
    assert_eq!(
        run("1 + 2; 3 * 4; 5 + 6 * 7").unwrap(),
        Value::list(vec![Value::Integer(3), Value::Integer(12), Value::Integer(47)])
    );
}

#[test]
fn empty_program_is_null() {
    assert_eq!(run("").unwrap(), Value::Null);
}

#[test]
fn if_expression_form_chooses_the_matching_branch() {
    let src = r#"var x = 10; if x < 5 then "a" elif x >= 5 and x < 8 then "b" else "c""#;
    assert_eq!(run(src).unwrap(), Value::str("c"));
}

#[test]
fn if_block_form_yields_null() {
    let src = "if 1 then\nvar x = 1\nend";
    assert_eq!(run(src).unwrap(), Value::Null);
}

#[test]
fn for_loop_end_is_exclusive_and_collects_expression_values() {
    assert_eq!(
        run("for i = 1 to 5 do i * i").unwrap(),
        Value::list(vec![
            Value::Integer(1),
            Value::Integer(4),
            Value::Integer(9),
            Value::Integer(16),
        ])
    );
}

#[test]
fn for_loop_with_negative_step_counts_down() {
    assert_eq!(
        run("for i = 5 to 0 step -1 do i").unwrap(),
        Value::list(vec![
            Value::Integer(5),
            Value::Integer(4),
            Value::Integer(3),
            Value::Integer(2),
            Value::Integer(1),
        ])
    );
}

#[test]
fn zero_step_is_a_runtime_error() {
    assert!(run("for i = 1 to 5 step 0 do i").is_err());
}

#[test]
fn while_loop_collects_expression_values() {
    assert_eq!(
        run("var x = 0; while x < 5 do var x = x + 1").unwrap(),
        Value::list(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
            Value::Integer(4),
            Value::Integer(5),
        ])
    );
}

#[test]
fn break_stops_the_loop_early() {
    assert_eq!(
        run("for i = 1 to 10 do if i == 3 then break else i").unwrap(),
        Value::list(vec![Value::Integer(1), Value::Integer(2)])
    );
}

#[test]
fn continue_skips_appending_for_that_iteration() {
    assert_eq!(
        run("for i = 1 to 5 do if i == 2 then continue else i").unwrap(),
        Value::list(vec![Value::Integer(1), Value::Integer(3), Value::Integer(4)])
    );
}

#[test]
fn break_outside_a_loop_is_a_runtime_error() {
    assert!(run("break").is_err());
}

#[test]
fn continue_outside_a_loop_is_a_runtime_error() {
    assert!(run("continue").is_err());
}

#[test]
fn return_outside_a_function_is_a_runtime_error() {
    assert!(run("return 1").is_err());
}
