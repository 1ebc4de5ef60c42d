//! CLI-layer error type. Never produced by the core language (see `error.rs`); wraps the I/O and
//! config-parsing failures the host layer can hit, in the style of `faxt::error::FaxtError`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{0}")]
    Lex(String),

    #[error("{0}")]
    Syntax(String),

    #[error("{0}")]
    Runtime(String),
}
