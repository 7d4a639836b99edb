//! Collection-level diff: correlate entries by a key field, then diff
//! matched pairs as records.
//!
//! Both collections are re-indexed by key first, so the pass over "after"
//! is a single lookup per entry. Entries that exist only in "before" are
//! never reported.

use recdiff_types::{Collection, Value};
use tracing::debug;

use crate::dispatch::Operation;
use crate::error::{Argument, DiffError, DiffResult};
use crate::index::KeyedIndex;
use crate::record_diff::{field_change, record_diff};

/// Compute the after-biased diff of two collections keyed by `key_field`.
///
/// The result holds, in "after" order:
/// - for each entry whose key also exists in `before` and that changed, the
///   changed fields plus the key field carrying the entry's key value;
/// - each entry whose key does not exist in `before`, verbatim.
///
/// With no `key_field`, no entry correlates and nothing is indexed, so the
/// result is empty.
///
/// # Errors
///
/// A matched pair where either entry is a primitive fails with
/// [`DiffError::InvalidArgumentType`]. Matched entries are diffed as
/// records, and a primitive is never a record.
pub fn collection_diff(
    before: &Collection,
    after: &Collection,
    key_field: Option<&str>,
) -> DiffResult<Collection> {
    let before_index = KeyedIndex::build(before, key_field);
    let after_index = KeyedIndex::build(after, key_field);
    let mut result = Collection::new();

    for (key, new_entry) in after_index.iter() {
        let Some(old_entry) = before_index.get(key) else {
            result.push(new_entry.clone());
            continue;
        };
        expect_structured(old_entry, Argument::Before)?;
        expect_structured(new_entry, Argument::After)?;

        match new_entry {
            Value::Record(new_rec) => {
                let delta = record_diff(&old_entry.as_record_or_empty(), new_rec);
                if let Some(mut changed) = delta.into_record() {
                    let key_value = key_field.and_then(|field| Some((field, new_rec.get(field)?)));
                    if let Some((field, value)) = key_value {
                        changed.insert(field, value.clone());
                    }
                    result.push(changed);
                }
            }
            // Nested collections: equal ones drop out, others are reported whole.
            other => {
                if let Some(change) = field_change(Some(old_entry), other) {
                    result.push(change);
                }
            }
        }
    }

    debug!(
        before = before.len(),
        after = after.len(),
        key_field = ?key_field,
        reported = result.len(),
        "collection diff complete"
    );
    Ok(result)
}

fn expect_structured(entry: &Value, argument: Argument) -> DiffResult<()> {
    match entry {
        Value::Primitive(_) => Err(DiffError::InvalidArgumentType {
            operation: Operation::Records,
            argument,
            expected: "record",
            actual: entry.kind(),
        }),
        Value::Record(_) | Value::Collection(_) => Ok(()),
    }
}
