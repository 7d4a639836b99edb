use thiserror::Error;

use crate::value::ValueKind;

/// Errors produced by value model conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("expected {expected}, got {actual}")]
    UnexpectedKind {
        expected: ValueKind,
        actual: ValueKind,
    },

    #[error("serialization error: {0}")]
    Serialization(String),
}
