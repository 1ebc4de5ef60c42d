mod common;

use common::{new_env, run, run_in};
use glintsh::Value;

#[test]
fn len_of_string_and_list() {
    assert_eq!(run(r#"len("hello")"#).unwrap(), Value::Integer(5));
    assert_eq!(run("len([1,2,3])").unwrap(), Value::Integer(3));
}

#[test]
fn type_of_reports_each_value_kind() {
    assert_eq!(run("type_of(1)").unwrap(), Value::str("integer"));
    assert_eq!(run("type_of(1.0)").unwrap(), Value::str("float"));
    assert_eq!(run(r#"type_of("s")"#).unwrap(), Value::str("string"));
    assert_eq!(run("type_of([1])").unwrap(), Value::str("list"));
    assert_eq!(run("type_of(func () -> 1)").unwrap(), Value::str("function"));
}

#[test]
fn to_int_and_to_float_conversions() {
    assert_eq!(run(r#"to_int("42")"#).unwrap(), Value::Integer(42));
    assert_eq!(run("to_int(3.9)").unwrap(), Value::Integer(3));
    assert_eq!(run(r#"to_float("1.5")"#).unwrap(), Value::Float(1.5));
}

#[test]
fn to_str_renders_the_shell_surface_representation() {
    assert_eq!(run("to_str(42)").unwrap(), Value::str("42"));
    assert_eq!(run("to_str([1,2])").unwrap(), Value::str("[1, 2]"));
    // a bare string quotes and escapes the same way it does nested inside a list
    assert_eq!(run(r#"to_str("hi")"#).unwrap(), Value::str("\"hi\""));
    assert_eq!(run(r#"to_str("a\nb")"#).unwrap(), Value::str("\"a\\nb\""));
}

#[test]
fn run_evaluates_in_the_callers_environment() {
    let dir = std::env::temp_dir();
    let path = dir.join("glintsh_host_builtins_run_test_lib.glintsh");
    std::fs::write(&path, "func double(n) -> n * 2").unwrap();

    let env = new_env();
    let source = format!(r#"run("{}")"#, path.to_string_lossy().replace('\\', "\\\\"));
    run_in(&source, &env).unwrap();
    // the function the loaded file defined is visible in the caller's own environment
    assert_eq!(run_in("double(21)", &env).unwrap(), Value::Integer(42));

    std::fs::remove_file(&path).ok();
}

#[test]
fn is_predicates() {
    assert_eq!(run("is_num(1)").unwrap(), Value::Integer(1));
    assert_eq!(run(r#"is_str("a")"#).unwrap(), Value::Integer(1));
    assert_eq!(run("is_list([1])").unwrap(), Value::Integer(1));
    assert_eq!(run("is_fun(func () -> 1)").unwrap(), Value::Integer(1));
    assert_eq!(run("is_num(\"a\")").unwrap(), Value::Integer(0));
}

#[test]
fn unknown_numeric_string_fails_to_convert() {
    assert!(run(r#"to_int("not a number")"#).is_err());
}

#[test]
fn builtins_have_fixed_arity() {
    assert!(run("len(1, 2)").is_err());
}
