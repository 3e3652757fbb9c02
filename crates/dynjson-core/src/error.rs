//! Error types for decoding, coercion, mutation and validation.
//!
//! Every variant is a recoverable data error returned to the caller. Calling-code
//! bugs (such as attaching a scalar as a document root) panic instead and never
//! show up here.

use crate::validate::Violation;
use thiserror::Error;

/// Errors that can occur while working with a [`crate::Value`] tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DynJsonError {
    /// A node did not have the tag (or numeric range) an operation required.
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A required object key was absent.
    #[error("{0} not exist")]
    KeyMissing(String),

    /// An array index was negative or past the end.
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: isize, len: usize },

    /// The input was not valid JSON.
    #[error("JSON parse error: {0}")]
    Parse(String),

    /// A tree could not be written out as JSON text.
    #[error("JSON encode error: {0}")]
    Encode(String),

    /// A validation rule rejected the value stored under `key`.
    #[error("{key} {rule}")]
    Validation { key: String, rule: Violation },

    /// Reading or writing a document file failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DynJsonError {
    fn from(err: std::io::Error) -> Self {
        DynJsonError::Io(err.to_string())
    }
}

/// Convenience alias used throughout dynjson-core.
pub type Result<T> = std::result::Result<T, DynJsonError>;
