//! Module containing error definitions for the lexing and parsing process.

use std::fmt;

use crate::position::{render_span, Span};
use crate::token::TokenKind;

/// An error raised while turning source text into tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub detail: String,
    pub span: Span,
}

impl LexError {
    pub fn malformed_number(span: Span) -> Self {
        Self {
            detail: "malformed number literal".into(),
            span,
        }
    }

    pub fn unterminated_string(span: Span) -> Self {
        Self {
            detail: "unterminated string literal".into(),
            span,
        }
    }

    pub fn bad_escape(span: Span) -> Self {
        Self {
            detail: "malformed escape sequence".into(),
            span,
        }
    }

    pub fn unexpected_char(ch: char, span: Span) -> Self {
        Self {
            detail: format!("unexpected character '{}'", ch),
            span,
        }
    }

    pub fn render(&self, source: &str) -> String {
        format!("{} at {}\n{}", self.detail, self.span, render_span(source, &self.span))
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.detail, self.span)
    }
}

impl std::error::Error for LexError {}

/// An error raised while building an AST from a token stream.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxError {
    pub detail: String,
    pub span: Span,
}

impl SyntaxError {
    pub fn expected(what: &str, found: &TokenKind, span: Span) -> Self {
        Self {
            detail: format!("expected {}, found {:?}", what, found),
            span,
        }
    }

    pub fn generic(detail: impl Into<String>, span: Span) -> Self {
        Self {
            detail: detail.into(),
            span,
        }
    }

    pub fn render(&self, source: &str) -> String {
        format!("{} at {}\n{}", self.detail, self.span, render_span(source, &self.span))
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.detail, self.span)
    }
}

impl std::error::Error for SyntaxError {}
