//! Error types for the diff engine.

use std::fmt;

use recdiff_types::ValueKind;

use crate::dispatch::Operation;

/// Which positional argument of a diff operation a failure refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Argument {
    Before,
    After,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Before => f.write_str("1st"),
            Argument::After => f.write_str("2nd"),
        }
    }
}

/// Errors that can occur during diff operations.
///
/// All of them are contract violations detected before any comparison
/// work starts; none are transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// Fewer than two values were supplied.
    #[error("missing required arguments: expected 2, got {supplied}")]
    MissingArguments { supplied: usize },

    /// A supplied value has the wrong shape for the operation.
    #[error("{operation}: {argument} argument should be a {expected}, got {actual}")]
    InvalidArgumentType {
        operation: Operation,
        argument: Argument,
        expected: &'static str,
        actual: ValueKind,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_arguments_message() {
        let err = DiffError::MissingArguments { supplied: 1 };
        let msg = err.to_string();
        assert!(msg.contains("missing"));
        assert!(msg.contains("arguments"));
    }

    #[test]
    fn invalid_type_message() {
        let err = DiffError::InvalidArgumentType {
            operation: Operation::Collections,
            argument: Argument::After,
            expected: "collection",
            actual: ValueKind::Record,
        };
        assert_eq!(
            err.to_string(),
            "collection diff: 2nd argument should be a collection, got record"
        );
    }
}
