//! Record-level diff: compare two records field by field.
//!
//! Only fields of the "after" record are visited. A field that is new or
//! whose value differs is reported with its "after" value; when the "after"
//! value is itself a record the comparison recurses and only the changed
//! sub-fields are reported. Fields present only in "before" never appear.

use recdiff_types::{Record, Value};
use tracing::trace;

use crate::delta::RecordDelta;

/// Compute the after-biased diff of two records.
///
/// Returns [`RecordDelta::Unchanged`] when no field of `after` differs from
/// `before`.
pub fn record_diff(before: &Record, after: &Record) -> RecordDelta {
    let mut result = Record::new();

    for (field, new_val) in after {
        if let Some(change) = field_change(before.get(field), new_val) {
            result.insert(field.clone(), change);
        }
    }

    if result.is_empty() {
        RecordDelta::Unchanged
    } else {
        RecordDelta::Changed(result)
    }
}

/// Decide what, if anything, to report for one field.
///
/// Also used for collection entries matched by key, which follow the same
/// rule as record fields.
pub(crate) fn field_change(old_val: Option<&Value>, new_val: &Value) -> Option<Value> {
    let Some(old_val) = old_val else {
        // An added field is reported whole, even when it is a record.
        return Some(new_val.clone());
    };
    if old_val == new_val {
        return None;
    }

    match new_val {
        Value::Record(new_rec) => {
            trace!(before = %old_val.kind(), "recursing into nested record");
            record_diff(&old_val.as_record_or_empty(), new_rec)
                .into_record()
                .map(Value::Record)
        }
        other => Some(other.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(json: serde_json::Value) -> Record {
        Record::try_from(Value::from(json)).unwrap()
    }

    fn changed(json: serde_json::Value) -> RecordDelta {
        RecordDelta::Changed(record(json))
    }

    #[test]
    fn identical_records_unchanged() {
        let r = record(json!({"a": 1, "b": {"c": [1, 2]}}));
        assert_eq!(record_diff(&r, &r), RecordDelta::Unchanged);
    }

    #[test]
    fn value_change_reports_after_value() {
        let diff = record_diff(&record(json!({"a": 1})), &record(json!({"a": 2})));
        assert_eq!(diff, changed(json!({"a": 2})));
    }

    #[test]
    fn added_field_reported() {
        let diff = record_diff(&record(json!({"a": 1})), &record(json!({"a": 1, "b": 2})));
        assert_eq!(diff, changed(json!({"b": 2})));
    }

    #[test]
    fn added_record_field_reported_whole() {
        let diff = record_diff(
            &record(json!({})),
            &record(json!({"nested": {"x": 1, "y": 2}})),
        );
        assert_eq!(diff, changed(json!({"nested": {"x": 1, "y": 2}})));
    }

    #[test]
    fn removed_field_not_reported() {
        let diff = record_diff(&record(json!({"a": 1, "gone": true})), &record(json!({"a": 1})));
        assert_eq!(diff, RecordDelta::Unchanged);
    }

    #[test]
    fn nested_change_reports_only_changed_subfields() {
        let diff = record_diff(
            &record(json!({"a": {"b": 1, "c": 1}})),
            &record(json!({"a": {"b": 2, "c": 1}})),
        );
        assert_eq!(diff, changed(json!({"a": {"b": 2}})));
    }

    #[test]
    fn structurally_equal_nested_records_contribute_nothing() {
        let diff = record_diff(
            &record(json!({"a": {"b": 1}, "x": 1})),
            &record(json!({"a": {"b": 1}, "x": 2})),
        );
        assert_eq!(diff, changed(json!({"x": 2})));
    }

    #[test]
    fn nested_record_over_scalar_reads_as_all_added() {
        let diff = record_diff(
            &record(json!({"a": 5})),
            &record(json!({"a": {"b": 1, "c": 2}})),
        );
        assert_eq!(diff, changed(json!({"a": {"b": 1, "c": 2}})));
    }

    #[test]
    fn empty_record_over_scalar_is_unchanged() {
        let diff = record_diff(&record(json!({"a": 5})), &record(json!({"a": {}})));
        assert_eq!(diff, RecordDelta::Unchanged);
    }

    #[test]
    fn collection_field_reported_whole() {
        let diff = record_diff(
            &record(json!({"tags": ["a", "b"]})),
            &record(json!({"tags": ["a", "c"]})),
        );
        assert_eq!(diff, changed(json!({"tags": ["a", "c"]})));
    }

    #[test]
    fn equal_collection_field_skipped() {
        let diff = record_diff(
            &record(json!({"tags": ["a"], "n": 1})),
            &record(json!({"tags": ["a"], "n": 1})),
        );
        assert_eq!(diff, RecordDelta::Unchanged);
    }

    #[test]
    fn type_change_detected() {
        let diff = record_diff(&record(json!({"v": 42})), &record(json!({"v": "forty-two"})));
        assert_eq!(diff, changed(json!({"v": "forty-two"})));
    }

    #[test]
    fn null_handling() {
        let diff = record_diff(&record(json!({"v": null})), &record(json!({"v": "set"})));
        assert_eq!(diff, changed(json!({"v": "set"})));

        let diff = record_diff(&record(json!({"v": 1})), &record(json!({"v": null})));
        assert_eq!(diff, changed(json!({"v": null})));
    }

    #[test]
    fn deep_nesting() {
        let diff = record_diff(
            &record(json!({"a": {"b": {"c": {"d": 1, "e": 1}}}})),
            &record(json!({"a": {"b": {"c": {"d": 1, "e": 2}}}})),
        );
        assert_eq!(diff, changed(json!({"a": {"b": {"c": {"e": 2}}}})));
    }

    #[test]
    fn diff_of_diff_against_itself_unchanged() {
        let diff = record_diff(&record(json!({"a": 1})), &record(json!({"a": 2, "b": {"c": 3}})));
        let d = diff.into_record().unwrap();
        assert_eq!(record_diff(&d, &d), RecordDelta::Unchanged);
    }
}
