//! Error types for KV parsing, serialization and value access.
//!
//! This module provides one [`Error`] enum covering every failure the crate
//! can report, grouped into a few [`ErrorKind`] classes:
//!
//! - **Lex errors**: malformed tokens, such as a quoted string that never ends
//! - **Parse errors**: grammar violations (unexpected token, unterminated
//!   container, nesting too deep)
//! - **Type mismatches**: a checked [`Value`](crate::Value) accessor called on
//!   the wrong variant
//! - **Data errors**: Serde values that the KV format cannot represent
//! - **I/O errors**: reader/writer failures in the convenience helpers
//!
//! Lex and parse errors always carry the [`Position`] of the offending token.
//!
//! ## Examples
//!
//! ```rust
//! use serde_kv::{parse, ErrorKind};
//!
//! let err = parse("\"Key\" [1 2").unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Parse);
//! assert_eq!(err.position().map(|p| p.line), Some(1));
//! ```

use std::fmt;
use thiserror::Error;

/// A location in KV source text.
///
/// `line` and `column` are 1-based and count characters; `offset` is the byte
/// offset from the start of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Position {
    /// The position of the first character of an input.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed token.
    Lex,
    /// Token stream does not match the grammar.
    Parse,
    /// Value accessor used on the wrong variant.
    TypeMismatch,
    /// Serde data the format cannot represent.
    Data,
    /// Reading or writing failed.
    Io,
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// A quoted string reached the end of input before its closing quote
    #[error("Unterminated string starting at {position}")]
    UnterminatedString { position: Position },

    /// A token that does not fit the grammar at this point
    #[error("Unexpected {found} at {position}, expected {expected}")]
    UnexpectedToken {
        position: Position,
        found: String,
        expected: &'static str,
    },

    /// End of input before the matching close delimiter
    #[error("Unterminated container: '{delimiter}' opened at {position} is never closed")]
    UnterminatedContainer { position: Position, delimiter: char },

    /// Containers nested deeper than the parser allows
    #[error("Recursion limit exceeded at {position}")]
    RecursionLimitExceeded { position: Position },

    /// Checked accessor called on the wrong variant
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Unsupported type for serialization
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A `None` or unit value outside of an object field
    #[error("Unsupported value: none/unit has no KV representation")]
    UnsupportedNone,

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unexpected-token error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kv::{Error, Position};
    ///
    /// let err = Error::unexpected_token(Position::START, "']'", "a key string");
    /// assert!(err.to_string().contains("1:1"));
    /// ```
    pub fn unexpected_token(position: Position, found: &str, expected: &'static str) -> Self {
        Error::UnexpectedToken {
            position,
            found: found.to_string(),
            expected,
        }
    }

    /// Creates a type mismatch error for a checked accessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_kv::Error;
    ///
    /// let err = Error::type_mismatch("string", "number");
    /// assert!(err.to_string().contains("expected string"));
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates an unsupported type error for Serde data with no KV form.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Returns the class this error belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_) => ErrorKind::Io,
            Error::UnterminatedString { .. } => ErrorKind::Lex,
            Error::UnexpectedToken { .. }
            | Error::UnterminatedContainer { .. }
            | Error::RecursionLimitExceeded { .. } => ErrorKind::Parse,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::UnsupportedType(_) | Error::UnsupportedNone | Error::Custom(_) => {
                ErrorKind::Data
            }
        }
    }

    /// Returns the source position for lex and parse errors.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Error::UnterminatedString { position }
            | Error::UnexpectedToken { position, .. }
            | Error::UnterminatedContainer { position, .. }
            | Error::RecursionLimitExceeded { position } => Some(*position),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
