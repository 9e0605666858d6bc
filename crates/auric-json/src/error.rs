//! Error types for parsing and for navigating a parsed value tree.

use thiserror::Error;

/// Errors raised by the parser or by the [`Value`](crate::Value) accessors.
///
/// Parser variants carry the byte `offset` into the input where the problem was
/// detected. Accessor variants are raised lazily, only when a caller navigates to
/// the offending node.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JsonError {
    /// The input ended while a value or delimiter was still expected.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEndOfInput { offset: usize },

    /// The lead character cannot start any JSON value.
    #[error("invalid token {found:?} at offset {offset}")]
    InvalidToken { offset: usize, found: char },

    /// A `null`/`true`/`false` lead character was not followed by the rest of the literal.
    #[error("invalid literal at offset {offset}: expected '{expected}'")]
    InvalidLiteral {
        offset: usize,
        expected: &'static str,
    },

    /// A backslash escape inside a string was not recognized, or a `\u`
    /// escape was malformed or an unpaired surrogate.
    #[error("invalid escape sequence at offset {offset}: {message}")]
    InvalidEscape { offset: usize, message: String },

    /// Numeral text could not be converted (malformed or out of range).
    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    /// A required `,`, `:`, `]` or `}` was missing.
    #[error("expected {expected} at offset {offset}, found {found:?}")]
    ExpectedDelimiter {
        offset: usize,
        expected: &'static str,
        found: char,
    },

    /// Arrays/objects were nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {limit} at offset {offset}")]
    NestingTooDeep { offset: usize, limit: usize },

    /// No object member has the requested key.
    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    /// Array index is past the last element.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The value is not the requested variant.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl JsonError {
    /// True when the failure means "the input was cut short" rather than
    /// "the input is malformed".
    pub fn is_truncation(&self) -> bool {
        matches!(self, JsonError::UnexpectedEndOfInput { .. })
    }

    /// Byte offset of a parse failure. `None` for accessor errors.
    pub fn offset(&self) -> Option<usize> {
        match self {
            JsonError::UnexpectedEndOfInput { offset }
            | JsonError::InvalidToken { offset, .. }
            | JsonError::InvalidLiteral { offset, .. }
            | JsonError::InvalidEscape { offset, .. }
            | JsonError::InvalidNumber { offset, .. }
            | JsonError::ExpectedDelimiter { offset, .. }
            | JsonError::NestingTooDeep { offset, .. } => Some(*offset),
            JsonError::KeyNotFound { .. }
            | JsonError::IndexOutOfRange { .. }
            | JsonError::TypeMismatch { .. } => None,
        }
    }
}

/// Convenience alias used throughout auric-json.
pub type Result<T> = std::result::Result<T, JsonError>;
