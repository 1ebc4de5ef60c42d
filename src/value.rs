//! Runtime value model.

use std::fmt;
use std::rc::Rc;

use crate::ast::Ast;
use crate::environment::Environment;
use crate::error::RuntimeError;
use crate::position::Span;

/// A boxed host callable registered into the global environment (see `host.rs`). Receives the
/// caller's environment so builtins like `run` can evaluate against it rather than a throwaway
/// one.
pub type NativeFn = Rc<dyn Fn(&[Value], &Environment, &Span) -> Result<Value, RuntimeError>>;

#[derive(Debug, Clone)]
pub struct FunctionData {
    pub name: Option<String>,
    pub arg_names: Vec<String>,
    pub body: Rc<Ast>,
    pub captured_env: Environment,
    pub is_expression: bool,
}

#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Str(Rc<String>),
    List(Rc<Vec<Value>>),
    Function(Rc<FunctionData>),
    NativeFunction { name: Rc<str>, func: NativeFn },
    Null,
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Function(_) | Value::NativeFunction { .. } => "function",
            Value::Null => "null",
        }
    }

    /// Truthiness per the language's boolean-coercion rule (used by `if`/`while`/`and`/`or`).
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Integer(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::List(l) => !l.is_empty(),
            Value::Function(_) | Value::NativeFunction { .. } => true,
            Value::Null => false,
        }
    }

    pub fn bool_value(b: bool) -> Value {
        Value::Integer(if b { 1 } else { 0 })
    }

    pub fn str(s: impl Into<String>) -> Value {
        Value::Str(Rc::new(s.into()))
    }

    pub fn list(v: Vec<Value>) -> Value {
        Value::List(Rc::new(v))
    }

    /// The "shell surface" rendering rules from the spec: how a value is printed by `print`,
    /// by the REPL, and by `to_str`. Strings are quoted and escaped here too, not just when
    /// nested inside a list, so the rule is the same wherever a value surfaces.
    pub fn display_repr(&self) -> String {
        match self {
            Value::Integer(n) => n.to_string(),
            Value::Float(f) => {
                if f.fract() == 0.0 && f.is_finite() {
                    format!("{:.1}", f)
                } else {
                    f.to_string()
                }
            }
            Value::Str(s) => format!("\"{}\"", escape_string(s)),
            Value::List(items) => {
                let inner: Vec<String> = items.iter().map(|v| v.display_repr()).collect();
                format!("[{}]", inner.join(", "))
            }
            Value::Function(f) => match &f.name {
                Some(name) => format!("<function {}>", name),
                None => "<function anonymous>".to_string(),
            },
            Value::NativeFunction { name, .. } => format!("<function {}>", name),
            Value::Null => "null".to_string(),
        }
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c => out.push(c),
        }
    }
    out
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_repr())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Integer(a), Value::Float(b)) | (Value::Float(b), Value::Integer(a)) => {
                *a as f64 == *b
            }
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}
