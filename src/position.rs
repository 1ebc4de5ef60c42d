//! Source positions and spans used throughout lexing, parsing and diagnostics.

use std::fmt;
use std::rc::Rc;

/// A single point in a source file: 1-based line and column, plus the raw byte offset.
///
/// Kept deliberately small and `Copy` so every token and AST node can carry one (or two, for a
/// `Span`) without indirection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl Position {
    pub const START: Self = Self {
        line: 1,
        column: 1,
        offset: 0,
    };

    pub fn new(line: u32, column: u32, offset: u32) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// Advance past a single character, updating line/column bookkeeping.
    pub fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8() as u32;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A half-open range over a source file, from `start` up to and including `end`.
///
/// `file_name` is shared (`Rc<str>`) rather than owned per-span: every token and node in a single
/// parse shares the same file name, so cloning a span should not allocate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub file_name: Rc<str>,
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(file_name: Rc<str>, start: Position, end: Position) -> Self {
        Self {
            file_name,
            start,
            end,
        }
    }

    /// A span covering just the single position `pos` (used for synthetic/zero-width spans).
    pub fn point(file_name: Rc<str>, pos: Position) -> Self {
        Self::new(file_name, pos, pos)
    }

    /// Merge two spans from the same file into one that encloses both.
    pub fn merge(&self, other: &Span) -> Span {
        debug_assert!(Rc::ptr_eq(&self.file_name, &other.file_name));
        let start = if self.start.offset <= other.start.offset {
            self.start
        } else {
            other.start
        };
        let end = if self.end.offset >= other.end.offset {
            self.end
        } else {
            other.end
        };
        Span::new(self.file_name.clone(), start, end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name, self.start)
    }
}

/// Render `source` with a `^^^` span indicator under the offending line, in the style of a
/// compiler diagnostic. Used by [`crate::error::LexError`], [`crate::error::SyntaxError`] and
/// [`crate::error::RuntimeError`] `Display` impls.
pub fn render_span(source: &str, span: &Span) -> String {
    let line_text = source.lines().nth((span.start.line - 1) as usize).unwrap_or("");
    let caret_start = span.start.column.saturating_sub(1) as usize;
    let width = if span.end.line == span.start.line {
        (span.end.column.saturating_sub(span.start.column)).max(1) as usize
    } else {
        line_text.len().saturating_sub(caret_start).max(1)
    };
    let caret_line: String = " ".repeat(caret_start) + &"^".repeat(width);
    format!("{}\n{}", line_text, caret_line)
}
