//! Module containing error definitions for the evaluation process.

use std::fmt;

use crate::position::{render_span, Span};
use crate::value::Value;

/// An error raised while evaluating an AST. Always fatal: there is no in-language
/// `try`/`catch`, so a `RuntimeError` unwinds all the way to the caller of [`crate::evaluate`].
#[derive(Debug, Clone)]
pub struct RuntimeError {
    pub detail: String,
    pub span: Span,
}

impl RuntimeError {
    pub fn new(detail: impl Into<String>, span: Span) -> Self {
        Self {
            detail: detail.into(),
            span,
        }
    }

    pub fn undefined_name(name: &str, span: Span) -> Self {
        Self::new(format!("'{}' is not defined", name), span)
    }

    pub fn type_error(op: &str, lhs: &Value, rhs: &Value, span: Span) -> Self {
        Self::new(
            format!(
                "operator '{}' is not defined for {} and {}",
                op,
                lhs.type_name(),
                rhs.type_name()
            ),
            span,
        )
    }

    pub fn division_by_zero(span: Span) -> Self {
        Self::new("division by zero", span)
    }

    pub fn index_out_of_range(index: i64, span: Span) -> Self {
        Self::new(format!("index {} is out of range", index), span)
    }

    pub fn zero_step(span: Span) -> Self {
        Self::new("for-loop step cannot be zero", span)
    }

    pub fn not_callable(value: &Value, span: Span) -> Self {
        Self::new(format!("{} is not callable", value.type_name()), span)
    }

    pub fn arity_mismatch(expected: usize, found: usize, span: Span) -> Self {
        Self::new(
            format!("expected {} argument(s), found {}", expected, found),
            span,
        )
    }

    pub fn signal_outside_construct(which: &str, span: Span) -> Self {
        Self::new(format!("'{}' used outside of its enclosing construct", which), span)
    }

    pub fn stack_overflow(span: Span) -> Self {
        Self::new("stack overflow: recursion too deep", span)
    }

    pub fn render(&self, source: &str) -> String {
        format!("{} at {}\n{}", self.detail, self.span, render_span(source, &self.span))
    }
}

impl fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.detail, self.span)
    }
}

impl std::error::Error for RuntimeError {}

/// The non-`Value` results a statement evaluation can produce: `return`, `break`, `continue`.
///
/// Modeled as an explicit sum type rather than folded into [`RuntimeError`] and propagated via
/// exceptions, per this language's design: every visitor returns `Result<Flow, RuntimeError>` and
/// each enclosing construct pattern-matches on `Flow` to decide whether to consume or
/// re-propagate it.
#[derive(Debug, Clone)]
pub enum Flow {
    Value(Value),
    Return(Value),
    Break,
    Continue,
}

impl Flow {
    /// Unwraps a plain value, turning a stray `Return`/`Break`/`Continue` into a `RuntimeError`.
    /// Used at the top level and inside expression contexts where no enclosing construct is
    /// present to consume a signal.
    pub fn into_value(self, span: &Span) -> Result<Value, RuntimeError> {
        match self {
            Flow::Value(v) => Ok(v),
            Flow::Return(_) => Err(RuntimeError::signal_outside_construct("return", span.clone())),
            Flow::Break => Err(RuntimeError::signal_outside_construct("break", span.clone())),
            Flow::Continue => Err(RuntimeError::signal_outside_construct("continue", span.clone())),
        }
    }
}
