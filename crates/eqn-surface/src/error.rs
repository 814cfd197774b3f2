//! Errors produced while reading definitions.

use thiserror::Error;

/// Why a single line is not a valid definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("missing `=`")]
    MissingEquals,

    #[error("missing variable name before `=`")]
    MissingName,

    #[error("unexpected `=` at column {column}")]
    UnexpectedEquals { column: usize },

    #[error("empty term in expression")]
    EmptyTerm,

    #[error("integer literal `{0}` is out of range")]
    LiteralOutOfRange(String),

    #[error("invalid character at column {column}")]
    InvalidCharacter { column: usize },
}

/// A failure to parse an input document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line number is 1-based.
    #[error("malformed line {line}: {error}")]
    MalformedLine { line: usize, error: SyntaxError },
}
