mod common;

use common::run;
use glintsh::Value;

#[test]
fn strings_concatenate_with_plus() {
    assert_eq!(run(r#""foo" + "bar""#).unwrap(), Value::str("foobar"));
}

#[test]
fn string_repeats_with_star_and_an_integer() {
    assert_eq!(run(r#""ab" * 3"#).unwrap(), Value::str("ababab"));
}

#[test]
fn string_equality() {
    assert_eq!(run(r#""a" == "a""#).unwrap(), Value::Integer(1));
    assert_eq!(run(r#""a" != "b""#).unwrap(), Value::Integer(1));
}

#[test]
fn string_ordering_is_rejected() {
    assert!(run(r#""a" < "b""#).is_err());
}

#[test]
fn string_minus_is_rejected() {
    assert!(run(r#""a" - "b""#).is_err());
}

#[test]
fn empty_string_is_falsy() {
    assert_eq!(run(r#"if "" then 1 else 2"#).unwrap(), Value::Integer(2));
}
