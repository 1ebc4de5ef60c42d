mod common;

use common::run;
use glintsh::Value;

#[test]
fn list_literal_evaluates_each_element() {
    assert_eq!(
        run("[1, 2, 3]").unwrap(),
        Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)])
    );
}

#[test]
fn plus_appends_a_single_element() {
    assert_eq!(
        run("[1,2,3] + 4").unwrap(),
        Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3), Value::Integer(4)])
    );
}

#[test]
fn minus_removes_the_element_at_an_index() {
    assert_eq!(
        run("[1,2,3,4] - 2").unwrap(),
        Value::list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(4)])
    );
}

#[test]
fn star_concatenates_two_lists() {
    assert_eq!(
        run("[1,2,3] * [4,5]").unwrap(),
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
fn slash_indexes_into_the_list() {
    assert_eq!(run("[10,20,30] / 1").unwrap(), Value::Integer(20));
}

#[test]
fn negative_index_is_out_of_range() {
    assert!(run("[1,2,3] / -1").is_err());
}

#[test]
fn out_of_range_index_is_a_runtime_error() {
    assert!(run("[1,2,3] / 5").is_err());
    assert!(run("[1,2,3] - 5").is_err());
}

#[test]
fn list_equality_is_elementwise() {
    assert_eq!(run("[1,2] == [1,2]").unwrap(), Value::Integer(1));
    assert_eq!(run("[1,2] == [1,3]").unwrap(), Value::Integer(0));
}
