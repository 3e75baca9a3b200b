//! Error types for TOON encoding and decoding.
//!
//! Decoder errors carry the 1-based line number where the problem was
//! detected; encoder errors describe the offending value. Every strict-mode
//! validation failure has its own variant so callers can match on the kind
//! of violation rather than parse a message.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{decode, Error};
//!
//! let result = decode("items[3]: a,b");
//! match result {
//!     Err(Error::LengthMismatch { line, declared, actual }) => {
//!         assert_eq!((line, declared, actual), (1, 3, 2));
//!     }
//!     other => panic!("expected a length mismatch, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by the codec.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// Encoder input falls outside the JSON data model and cannot be
    /// normalized (for example a map with a non-string, non-coercible key).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Strict decode: a declared `[N]` disagrees with the actual element or
    /// row count.
    #[error("line {line}: declared length {declared} does not match actual count {actual}")]
    LengthMismatch {
        line: usize,
        declared: usize,
        actual: usize,
    },

    /// Strict decode: a tabular row's token count differs from the declared
    /// field count.
    #[error("line {line}: row has {actual} values but the header declares {declared} fields")]
    FieldArityMismatch {
        line: usize,
        declared: usize,
        actual: usize,
    },

    /// Strict decode: indentation is not a multiple of the configured width,
    /// uses tabs, or lands at an impossible depth.
    #[error("line {line}: {message}")]
    Indent { line: usize, message: String },

    /// A quoted string reaches the end of its line without a closing quote.
    #[error("line {line}: unterminated quoted string")]
    UnterminatedString { line: usize },

    /// An unknown escape sequence inside a quoted string.
    #[error("line {line}: invalid escape sequence `\\{escape}`")]
    InvalidEscape { line: usize, escape: char },

    /// An array header declares a delimiter outside the allowed set
    /// (comma, tab, pipe).
    #[error("line {line}: unknown delimiter {found:?} in array header")]
    UnknownDelimiter { line: usize, found: char },

    /// Strict decode: an object contains the same key twice.
    #[error("line {line}: duplicate key `{key}`")]
    DuplicateKey { line: usize, key: String },

    /// Strict path expansion: expanding a dotted key would overwrite a
    /// sibling of a different shape.
    #[error("path expansion conflict at key `{key}`")]
    PathExpansionConflict { key: String },

    /// Residual malformed syntax not covered by a dedicated variant.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The recursion depth bound was exceeded while encoding or decoding.
    #[error("maximum nesting depth of {0} exceeded")]
    DepthLimit(usize),

    /// IO error while reading or writing.
    #[error("io error: {0}")]
    Io(String),

    /// Generic message, used for serde bridge errors.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates a residual parse error with line information.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }

    /// Creates an indentation error with line information.
    pub fn indent(line: usize, message: impl Into<String>) -> Self {
        Error::Indent {
            line,
            message: message.into(),
        }
    }

    /// Creates an invalid-input error for values outside the JSON domain.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput(message.into())
    }

    /// Creates a generic message error.
    pub fn message(message: impl Into<String>) -> Self {
        Error::Message(message.into())
    }

    /// Creates an IO error.
    pub fn io(message: impl fmt::Display) -> Self {
        Error::Io(message.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
