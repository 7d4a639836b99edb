//! Diff results.
//!
//! "Nothing changed" is its own variant, never an empty record, so callers
//! can tell a record with no reported fields from no difference at all.

use recdiff_types::{Collection, Record, Value};
use serde::{Serialize, Serializer};

/// The result of comparing two records.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordDelta {
    /// No field of "after" differs from "before".
    Unchanged,
    /// The changed fields, with their "after" values. Never empty.
    Changed(Record),
}

impl RecordDelta {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, RecordDelta::Unchanged)
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            RecordDelta::Unchanged => None,
            RecordDelta::Changed(r) => Some(r),
        }
    }

    pub fn into_record(self) -> Option<Record> {
        match self {
            RecordDelta::Unchanged => None,
            RecordDelta::Changed(r) => Some(r),
        }
    }

    /// Number of top-level fields reported as changed.
    pub fn changed_fields(&self) -> usize {
        self.as_record().map_or(0, Record::len)
    }
}

/// The result of the shape-routed [`diff`](crate::diff) entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Delta {
    /// Record inputs with no difference.
    Unchanged,
    /// Record inputs: the changed fields.
    Record(Record),
    /// Collection inputs: changed and new entries, possibly empty.
    Collection(Collection),
}

impl Delta {
    /// Returns `true` only for the record-level sentinel.
    ///
    /// A collection result is never the sentinel, even when empty.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Delta::Unchanged)
    }

    /// Returns `true` if anything is reported.
    pub fn has_changes(&self) -> bool {
        match self {
            Delta::Unchanged => false,
            Delta::Record(r) => !r.is_empty(),
            Delta::Collection(c) => !c.is_empty(),
        }
    }

    /// Number of reported fields (records) or entries (collections).
    pub fn len(&self) -> usize {
        match self {
            Delta::Unchanged => 0,
            Delta::Record(r) => r.len(),
            Delta::Collection(c) => c.len(),
        }
    }

    /// The reported value, or `None` for [`Delta::Unchanged`].
    pub fn into_value(self) -> Option<Value> {
        match self {
            Delta::Unchanged => None,
            Delta::Record(r) => Some(Value::Record(r)),
            Delta::Collection(c) => Some(Value::Collection(c)),
        }
    }
}

impl From<RecordDelta> for Delta {
    fn from(delta: RecordDelta) -> Self {
        match delta {
            RecordDelta::Unchanged => Delta::Unchanged,
            RecordDelta::Changed(r) => Delta::Record(r),
        }
    }
}

impl From<Collection> for Delta {
    fn from(c: Collection) -> Self {
        Delta::Collection(c)
    }
}

// Unchanged serializes as the boolean `true`, matching the established wire
// form of this sentinel.
impl Serialize for RecordDelta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RecordDelta::Unchanged => serializer.serialize_bool(true),
            RecordDelta::Changed(r) => r.serialize(serializer),
        }
    }
}

impl Serialize for Delta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Delta::Unchanged => serializer.serialize_bool(true),
            Delta::Record(r) => r.serialize(serializer),
            Delta::Collection(c) => c.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(json: serde_json::Value) -> Record {
        Record::try_from(Value::from(json)).unwrap()
    }

    #[test]
    fn unchanged_serializes_as_true() {
        assert_eq!(serde_json::to_value(Delta::Unchanged).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(RecordDelta::Unchanged).unwrap(),
            json!(true)
        );
    }

    #[test]
    fn changed_serializes_as_record() {
        let delta = RecordDelta::Changed(record(json!({"a": 2})));
        assert_eq!(serde_json::to_value(&delta).unwrap(), json!({"a": 2}));
        assert_eq!(delta.changed_fields(), 1);
    }

    #[test]
    fn empty_collection_is_not_unchanged() {
        let delta = Delta::from(Collection::new());
        assert!(!delta.is_unchanged());
        assert!(!delta.has_changes());
        assert_eq!(serde_json::to_value(&delta).unwrap(), json!([]));
    }

    #[test]
    fn record_delta_converts() {
        assert_eq!(Delta::from(RecordDelta::Unchanged), Delta::Unchanged);
        let r = record(json!({"x": 1}));
        assert_eq!(
            Delta::from(RecordDelta::Changed(r.clone())),
            Delta::Record(r.clone())
        );
        assert_eq!(Delta::Record(r.clone()).into_value(), Some(Value::Record(r)));
        assert_eq!(Delta::Unchanged.into_value(), None);
    }
}
