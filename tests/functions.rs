mod common;

use common::{run, run_in, new_env};
use glintsh::Value;

#[test]
fn expression_bodied_recursive_function() {
    let src = "func fact(n) -> if n <= 1 then 1 else n * fact(n - 1); fact(5)";
    assert_eq!(run(src).unwrap(), Value::Integer(120));
}

#[test]
fn anonymous_function_assigned_to_a_variable() {
    let src = r#"var add = func (a, b) -> a + b; add("foo", "bar")"#;
    assert_eq!(run(src).unwrap(), Value::str("foobar"));
}

#[test]
fn block_bodied_function_falls_through_to_null_without_return() {
    let src = "func f()\nvar x = 1\nend\nf()";
    assert_eq!(run(src).unwrap(), Value::Null);
}

#[test]
fn block_bodied_function_returns_the_returned_value() {
    let src = "func f(n)\nreturn n * 2\nend\nf(21)";
    assert_eq!(run(src).unwrap(), Value::Integer(42));
}

#[test]
fn wrong_arity_is_a_runtime_error() {
    let src = "func f(a, b) -> a + b; f(1)";
    assert!(run(src).is_err());
}

#[test]
fn calling_a_non_function_is_a_runtime_error() {
    assert!(run("var x = 1; x()").is_err());
}

#[test]
fn closures_capture_the_defining_scope_not_the_call_site() {
    // `make_adder` closes over `n` at definition time; calling the returned closure later, from
    // a different scope, must still resolve `n` through the captured environment.
    let src = "
func make_adder(n)
  return func (x) -> x + n
end
var add5 = make_adder(5)
add5(10)
";
    assert_eq!(run(src).unwrap(), Value::Integer(15));
}

#[test]
fn break_escaping_a_function_body_is_a_runtime_error() {
    let src = "func f()\nbreak\nend\nf()";
    assert!(run(src).is_err());
}

#[test]
fn functions_persist_across_separate_evaluations_in_the_same_environment() {
    let env = new_env();
    run_in("func square(n) -> n * n", &env).unwrap();
    assert_eq!(run_in("square(6)", &env).unwrap(), Value::Integer(36));
}
