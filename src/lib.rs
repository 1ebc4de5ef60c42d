//! # glintsh
//!
//! A small dynamically-typed, expression-oriented scripting language: variables, arithmetic,
//! short-circuit boolean connectives, `if`/`for`/`while` control flow, and first-class
//! user-defined functions with lexical closures.
//!
//! The core pipeline is three stages, each with its own module:
//!
//! - [`token`] — the [`token::Lexer`] turns source text into a token stream.
//! - [`parse`] — the [`parse::Parser`] builds an [`ast::Ast`] from that stream via recursive
//!   descent with operator-precedence climbing.
//! - [`engine`] — the [`engine::Interpreter`] walks the tree against an [`environment::Environment`],
//!   producing [`value::Value`]s and propagating [`error::Flow`] control signals.
//!
//! [`host`] is explicitly *not* part of the core: it is the native-function library (`print`,
//! `run`, conversions) a caller registers on top of the bare environment [`make_global_env`]
//! returns.

pub mod ast;
pub mod cli_error;
pub mod config;
pub mod engine;
pub mod environment;
pub mod error;
pub mod error_parsing;
pub mod host;
pub mod ops;
pub mod parse;
pub mod position;
pub mod token;
pub mod value;

pub use ast::Ast;
pub use environment::Environment;
pub use error::RuntimeError;
pub use error_parsing::{LexError, SyntaxError};
pub use host::register_builtins;
pub use position::{Position, Span};
pub use token::{Lexer, Token};
pub use value::Value;

/// Tokenizes `source`, a file whose diagnostics should refer to it as `file_name`.
pub fn tokenize(file_name: &str, source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(file_name, source).tokenize()
}

/// Parses a token stream (see [`tokenize`]) into an [`Ast`].
pub fn parse(tokens: Vec<Token>) -> Result<Ast, SyntaxError> {
    parse::Parser::new(tokens).parse_program()
}

/// Evaluates `ast` against `env`, returning its result value or the first [`RuntimeError`]
/// encountered.
pub fn evaluate(ast: &Ast, env: &Environment) -> Result<Value, RuntimeError> {
    engine::Interpreter::new().evaluate(ast, env)
}

/// Produces a fresh, empty root [`Environment`]. Per this language's design, the core library
/// itself registers no callables here — call [`register_builtins`] on the result (or register
/// your own host functions) before evaluating a script that expects `print`/`run`/etc. to exist.
pub fn make_global_env() -> Environment {
    Environment::root()
}
