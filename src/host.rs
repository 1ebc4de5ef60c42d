//! Host builtin library: `print`, `run`, conversions and introspection.
//!
//! These are deliberately not part of the core language (see `make_global_env` in `lib.rs`);
//! they are registered as [`crate::value::Value::NativeFunction`]s by [`register_builtins`],
//! mirroring how a Rhai [`crate::fn_native`]-style host registers native functions into an
//! engine rather than baking them into the grammar.

use std::rc::Rc;

use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::position::Span;
use crate::value::Value;
use crate::{evaluate, parse, tokenize};

/// Populates `env` with the standard host builtins. Call this on the environment returned by
/// [`crate::make_global_env`] before running a script; `make_global_env` itself returns a bare
/// environment so that embedders who want a different or smaller builtin surface can skip this.
pub fn register_builtins(env: &Environment) {
    define_native(env, "print", print_fn);
    define_native(env, "run", run_fn);
    define_native(env, "len", len_fn);
    define_native(env, "to_str", to_str_fn);
    define_native(env, "to_int", to_int_fn);
    define_native(env, "to_float", to_float_fn);
    define_native(env, "type_of", type_of_fn);
    define_native(env, "is_num", is_num_fn);
    define_native(env, "is_str", is_str_fn);
    define_native(env, "is_list", is_list_fn);
    define_native(env, "is_fun", is_fun_fn);
}

fn define_native(
    env: &Environment,
    name: &'static str,
    func: impl Fn(&[Value], &Environment, &Span) -> Result<Value, RuntimeError> + 'static,
) {
    env.define(
        name,
        Value::NativeFunction {
            name: Rc::from(name),
            func: Rc::new(func),
        },
    );
}

fn require_arity(args: &[Value], n: usize, span: &Span) -> Result<(), RuntimeError> {
    if args.len() != n {
        return Err(RuntimeError::arity_mismatch(n, args.len(), span.clone()));
    }
    Ok(())
}

fn print_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    println!("{}", args[0].display_repr());
    Ok(Value::Null)
}

/// Evaluates `path` in the *same* environment the caller is running in, so a script can `run` a
/// library file and then call the functions or see the variables it defined.
fn run_fn(args: &[Value], env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    let path = match &args[0] {
        Value::Str(s) => s.as_str().to_string(),
        other => {
            return Err(RuntimeError::new(
                format!("run() expects a string path, found {}", other.type_name()),
                span.clone(),
            ))
        }
    };
    let source = std::fs::read_to_string(&path)
        .map_err(|e| RuntimeError::new(format!("cannot read '{}': {}", path, e), span.clone()))?;
    let tokens = tokenize(&path, &source)
        .map_err(|e| RuntimeError::new(format!("in {}: {}", path, e), span.clone()))?;
    let ast = parse(tokens).map_err(|e| RuntimeError::new(format!("in {}: {}", path, e), span.clone()))?;
    evaluate(&ast, env)
}

fn len_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    match &args[0] {
        Value::Str(s) => Ok(Value::Integer(s.len() as i64)),
        Value::List(l) => Ok(Value::Integer(l.len() as i64)),
        other => Err(RuntimeError::new(
            format!("len() is not defined for {}", other.type_name()),
            span.clone(),
        )),
    }
}

fn to_str_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    Ok(Value::str(args[0].display_repr()))
}

fn to_int_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    match &args[0] {
        Value::Integer(n) => Ok(Value::Integer(*n)),
        Value::Float(f) => Ok(Value::Integer(*f as i64)),
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| RuntimeError::new(format!("cannot convert '{}' to an integer", s), span.clone())),
        other => Err(RuntimeError::new(
            format!("to_int() is not defined for {}", other.type_name()),
            span.clone(),
        )),
    }
}

fn to_float_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    match &args[0] {
        Value::Integer(n) => Ok(Value::Float(*n as f64)),
        Value::Float(f) => Ok(Value::Float(*f)),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| RuntimeError::new(format!("cannot convert '{}' to a float", s), span.clone())),
        other => Err(RuntimeError::new(
            format!("to_float() is not defined for {}", other.type_name()),
            span.clone(),
        )),
    }
}

fn type_of_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    Ok(Value::str(args[0].type_name()))
}

fn is_num_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    Ok(Value::bool_value(matches!(args[0], Value::Integer(_) | Value::Float(_))))
}

fn is_str_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    Ok(Value::bool_value(matches!(args[0], Value::Str(_))))
}

fn is_list_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    Ok(Value::bool_value(matches!(args[0], Value::List(_))))
}

fn is_fun_fn(args: &[Value], _env: &Environment, span: &Span) -> Result<Value, RuntimeError> {
    require_arity(args, 1, span)?;
    Ok(Value::bool_value(matches!(
        args[0],
        Value::Function(_) | Value::NativeFunction { .. }
    )))
}
