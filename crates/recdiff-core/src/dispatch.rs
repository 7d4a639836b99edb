//! Entry points over untyped [`Value`]s.
//!
//! Both arguments are shape-checked here before any comparison starts. The
//! typed [`record_diff`] never fails; [`collection_diff`] only rejects
//! matched entries it cannot diff as records.

use std::fmt;

use recdiff_types::{Collection, Record, Value};
use tracing::debug;

use crate::collection_diff::collection_diff;
use crate::delta::{Delta, RecordDelta};
use crate::error::{Argument, DiffError, DiffResult};
use crate::record_diff::record_diff;

/// Which diff an argument list is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Operation {
    /// Route on the shape of the first argument.
    #[default]
    Auto,
    /// Record diff only.
    Records,
    /// Collection diff only.
    Collections,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Auto => f.write_str("diff"),
            Operation::Records => f.write_str("record diff"),
            Operation::Collections => f.write_str("collection diff"),
        }
    }
}

/// Diff two values, routing on the shape of `before` only.
///
/// A collection `before` selects the collection diff keyed by `key_field`; a
/// record `before` selects the record diff. Any other `before` is rejected.
pub fn diff(before: &Value, after: &Value, key_field: Option<&str>) -> DiffResult<Delta> {
    match before {
        Value::Collection(_) => diff_collections(before, after, key_field).map(Delta::from),
        Value::Record(_) => diff_records(before, after).map(Delta::from),
        Value::Primitive(_) => Err(DiffError::InvalidArgumentType {
            operation: Operation::Auto,
            argument: Argument::Before,
            expected: "record or collection",
            actual: before.kind(),
        }),
    }
}

/// Diff two values that must both be records.
pub fn diff_records(before: &Value, after: &Value) -> DiffResult<RecordDelta> {
    let before = expect_record(before, Argument::Before)?;
    let after = expect_record(after, Argument::After)?;
    Ok(record_diff(before, after))
}

/// Diff two values that must both be collections.
pub fn diff_collections(
    before: &Value,
    after: &Value,
    key_field: Option<&str>,
) -> DiffResult<Collection> {
    let before = expect_collection(before, Argument::Before)?;
    let after = expect_collection(after, Argument::After)?;
    collection_diff(before, after, key_field)
}

/// Apply `op` to a supplied argument list.
///
/// The first two values are `before` and `after`; extra values are ignored.
/// Fewer than two values fail with [`DiffError::MissingArguments`] before
/// any shape is checked.
pub fn apply(op: Operation, args: &[Value], key_field: Option<&str>) -> DiffResult<Delta> {
    let [before, after, ..] = args else {
        return Err(DiffError::MissingArguments {
            supplied: args.len(),
        });
    };
    debug!(operation = %op, supplied = args.len(), "applying diff");

    match op {
        Operation::Auto => diff(before, after, key_field),
        Operation::Records => diff_records(before, after).map(Delta::from),
        Operation::Collections => diff_collections(before, after, key_field).map(Delta::from),
    }
}

fn expect_record(value: &Value, argument: Argument) -> DiffResult<&Record> {
    value.as_record().ok_or_else(|| DiffError::InvalidArgumentType {
        operation: Operation::Records,
        argument,
        expected: "record",
        actual: value.kind(),
    })
}

fn expect_collection(value: &Value, argument: Argument) -> DiffResult<&Collection> {
    value.as_collection().ok_or_else(|| DiffError::InvalidArgumentType {
        operation: Operation::Collections,
        argument,
        expected: "collection",
        actual: value.kind(),
    })
}
