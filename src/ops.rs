//! Binary and unary operator semantics, dispatched by value-kind pair.

use crate::ast::{BinOp, UnaryOp};
use crate::error::RuntimeError;
use crate::position::Span;
use crate::value::Value;

pub fn apply_binop(op: BinOp, l: Value, r: Value, span: &Span) -> Result<Value, RuntimeError> {
    use BinOp::*;
    match op {
        Add => add(l, r, span),
        Sub => sub(l, r, span),
        Mul => mul(l, r, span),
        Div => div(l, r, span),
        Pow => pow(l, r, span),
        Eq => Ok(Value::bool_value(l == r)),
        NotEq => Ok(Value::bool_value(l != r)),
        Lt | Gt | LtEq | GtEq => compare(op, l, r, span),
        And | Or => unreachable!("and/or are short-circuited before reaching apply_binop"),
    }
}

pub fn apply_unary(op: UnaryOp, v: Value, span: &Span) -> Result<Value, RuntimeError> {
    match op {
        UnaryOp::Not => Ok(Value::bool_value(!v.is_truthy())),
        UnaryOp::Plus => match v {
            Value::Integer(_) | Value::Float(_) => Ok(v),
            other => Err(RuntimeError::new(
                format!("unary '+' is not defined for {}", other.type_name()),
                span.clone(),
            )),
        },
        UnaryOp::Minus => match v {
            Value::Integer(n) => Ok(Value::Integer(-n)),
            Value::Float(f) => Ok(Value::Float(-f)),
            other => Err(RuntimeError::new(
                format!("unary '-' is not defined for {}", other.type_name()),
                span.clone(),
            )),
        },
    }
}

fn as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Integer(n) => Some(*n as f64),
        Value::Float(f) => Some(*f),
        _ => None,
    }
}

fn add(l: Value, r: Value, span: &Span) -> Result<Value, RuntimeError> {
    match (&l, &r) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a + b)),
        (Value::Str(a), Value::Str(b)) => Ok(Value::str(format!("{}{}", a, b))),
        (Value::List(a), _) => {
            let mut items = (**a).clone();
            items.push(r);
            Ok(Value::list(items))
        }
        _ => match (as_f64(&l), as_f64(&r)) {
            (Some(a), Some(b)) => Ok(Value::Float(a + b)),
            _ => Err(RuntimeError::type_error("+", &l, &r, span.clone())),
        },
    }
}

fn sub(l: Value, r: Value, span: &Span) -> Result<Value, RuntimeError> {
    match (&l, &r) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a - b)),
        (Value::List(items), Value::Integer(idx)) => list_remove(items, *idx, span),
        _ => match (as_f64(&l), as_f64(&r)) {
            (Some(a), Some(b)) => Ok(Value::Float(a - b)),
            _ => Err(RuntimeError::type_error("-", &l, &r, span.clone())),
        },
    }
}

fn mul(l: Value, r: Value, span: &Span) -> Result<Value, RuntimeError> {
    match (&l, &r) {
        (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a * b)),
        (Value::Str(s), Value::Integer(n)) | (Value::Integer(n), Value::Str(s)) => {
            if *n < 0 {
                return Err(RuntimeError::new("cannot repeat a string a negative number of times", span.clone()));
            }
            Ok(Value::str(s.repeat(*n as usize)))
        }
        (Value::List(a), Value::List(b)) => {
            let mut items = (**a).clone();
            items.extend((**b).iter().cloned());
            Ok(Value::list(items))
        }
        _ => match (as_f64(&l), as_f64(&r)) {
            (Some(a), Some(b)) => Ok(Value::Float(a * b)),
            _ => Err(RuntimeError::type_error("*", &l, &r, span.clone())),
        },
    }
}

fn div(l: Value, r: Value, span: &Span) -> Result<Value, RuntimeError> {
    match (&l, &r) {
        (Value::List(items), Value::Integer(idx)) => list_index(items, *idx, span),
        (Value::Integer(a), Value::Integer(b)) => {
            if *b == 0 {
                return Err(RuntimeError::division_by_zero(span.clone()));
            }
            if a % b == 0 {
                Ok(Value::Integer(a / b))
            } else {
                Ok(Value::Float(*a as f64 / *b as f64))
            }
        }
        _ => match (as_f64(&l), as_f64(&r)) {
            (Some(_), Some(b)) if b == 0.0 => Err(RuntimeError::division_by_zero(span.clone())),
            (Some(a), Some(b)) => Ok(Value::Float(a / b)),
            _ => Err(RuntimeError::type_error("/", &l, &r, span.clone())),
        },
    }
}

fn pow(l: Value, r: Value, span: &Span) -> Result<Value, RuntimeError> {
    match (&l, &r) {
        (Value::Integer(a), Value::Integer(b)) if *b >= 0 && u32::try_from(*b).is_ok() => {
            match a.checked_pow(*b as u32) {
                Some(v) => Ok(Value::Integer(v)),
                None => Ok(Value::Float((*a as f64).powf(*b as f64))),
            }
        }
        _ => match (as_f64(&l), as_f64(&r)) {
            (Some(a), Some(b)) => Ok(Value::Float(a.powf(b))),
            _ => Err(RuntimeError::type_error("^", &l, &r, span.clone())),
        },
    }
}

fn compare(op: BinOp, l: Value, r: Value, span: &Span) -> Result<Value, RuntimeError> {
    let (a, b) = match (as_f64(&l), as_f64(&r)) {
        (Some(a), Some(b)) => (a, b),
        _ => return Err(RuntimeError::type_error(comparison_symbol(op), &l, &r, span.clone())),
    };
    let result = match op {
        BinOp::Lt => a < b,
        BinOp::Gt => a > b,
        BinOp::LtEq => a <= b,
        BinOp::GtEq => a >= b,
        _ => unreachable!(),
    };
    Ok(Value::bool_value(result))
}

fn comparison_symbol(op: BinOp) -> &'static str {
    match op {
        BinOp::Lt => "<",
        BinOp::Gt => ">",
        BinOp::LtEq => "<=",
        BinOp::GtEq => ">=",
        _ => unreachable!(),
    }
}

fn list_index(items: &[Value], idx: i64, span: &Span) -> Result<Value, RuntimeError> {
    if idx < 0 || idx as usize >= items.len() {
        return Err(RuntimeError::index_out_of_range(idx, span.clone()));
    }
    Ok(items[idx as usize].clone())
}

fn list_remove(items: &[Value], idx: i64, span: &Span) -> Result<Value, RuntimeError> {
    if idx < 0 || idx as usize >= items.len() {
        return Err(RuntimeError::index_out_of_range(idx, span.clone()));
    }
    let mut out = items.to_vec();
    out.remove(idx as usize);
    Ok(Value::list(out))
}
