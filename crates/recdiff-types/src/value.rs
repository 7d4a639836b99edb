use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::collection::Collection;
use crate::error::TypeError;
use crate::primitive::Primitive;
use crate::record::Record;

/// Any value the diff engine accepts.
///
/// The variant is chosen when the value is constructed (for example by
/// `From<serde_json::Value>`), so callers match on it instead of probing the
/// shape on every use.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Primitive(Primitive),
    Record(Record),
    Collection(Collection),
}

/// The shape of a [`Value`], without its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Record,
    Collection,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Record => "record",
            ValueKind::Collection => "collection",
        };
        f.write_str(name)
    }
}

impl Value {
    /// The null primitive.
    pub const fn null() -> Self {
        Value::Primitive(Primitive::Null)
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Primitive(Primitive::Null) => ValueKind::Null,
            Value::Primitive(Primitive::Bool(_)) => ValueKind::Bool,
            Value::Primitive(Primitive::Number(_)) => ValueKind::Number,
            Value::Primitive(Primitive::String(_)) => ValueKind::String,
            Value::Record(_) => ValueKind::Record,
            Value::Collection(_) => ValueKind::Collection,
        }
    }

    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    pub fn is_collection(&self) -> bool {
        matches!(self, Value::Collection(_))
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_collection(&self) -> Option<&Collection> {
        match self {
            Value::Collection(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_primitive(&self) -> Option<&Primitive> {
        match self {
            Value::Primitive(p) => Some(p),
            _ => None,
        }
    }

    /// View this value as a record, treating any non-record as the empty record.
    ///
    /// This is the coercion applied when a nested "after" record is compared
    /// against a "before" value of some other shape: every field of the
    /// "after" record then reads as added.
    pub fn as_record_or_empty(&self) -> std::borrow::Cow<'_, Record> {
        match self {
            Value::Record(r) => std::borrow::Cow::Borrowed(r),
            _ => std::borrow::Cow::Owned(Record::new()),
        }
    }

    /// Compact JSON text for this value.
    pub fn to_json_string(&self) -> String {
        serde_json::Value::from(self.clone()).to_string()
    }
}

impl FromStr for Value {
    type Err = TypeError;

    /// Parse a JSON document into a [`Value`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<serde_json::Value>(s)
            .map(Value::from)
            .map_err(|e| TypeError::Serialization(e.to_string()))
    }
}

impl TryFrom<Value> for Record {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Record(r) => Ok(r),
            other => Err(TypeError::UnexpectedKind {
                expected: ValueKind::Record,
                actual: other.kind(),
            }),
        }
    }
}

impl TryFrom<Value> for Collection {
    type Error = TypeError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Collection(c) => Ok(c),
            other => Err(TypeError::UnexpectedKind {
                expected: ValueKind::Collection,
                actual: other.kind(),
            }),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Primitive(Primitive::Null),
            serde_json::Value::Bool(b) => Value::Primitive(Primitive::Bool(b)),
            serde_json::Value::Number(n) => Value::Primitive(Primitive::Number(n)),
            serde_json::Value::String(s) => Value::Primitive(Primitive::String(s)),
            serde_json::Value::Array(items) => {
                Value::Collection(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Value::Record(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        match value {
            Value::Primitive(Primitive::Null) => serde_json::Value::Null,
            Value::Primitive(Primitive::Bool(b)) => serde_json::Value::Bool(b),
            Value::Primitive(Primitive::Number(n)) => serde_json::Value::Number(n),
            Value::Primitive(Primitive::String(s)) => serde_json::Value::String(s),
            Value::Record(r) => serde_json::Value::Object(
                r.into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            Value::Collection(c) => serde_json::Value::Array(
                c.into_iter().map(serde_json::Value::from).collect(),
            ),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Primitive(p) => p.serialize(serializer),
            Value::Record(r) => r.serialize(serializer),
            Value::Collection(c) => c.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Value::from)
    }
}

impl From<Primitive> for Value {
    fn from(p: Primitive) -> Self {
        Value::Primitive(p)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}

impl From<Collection> for Value {
    fn from(c: Collection) -> Self {
        Value::Collection(c)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Primitive(b.into())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Primitive(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Primitive(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Primitive(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Primitive(s.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_is_decided_at_construction() {
        assert_eq!(Value::from(json!({"a": 1})).kind(), ValueKind::Record);
        assert_eq!(Value::from(json!([1, 2])).kind(), ValueKind::Collection);
        assert_eq!(Value::from(json!(null)).kind(), ValueKind::Null);
        assert_eq!(Value::from(json!("s")).kind(), ValueKind::String);
        assert_eq!(Value::from(json!(1.5)).kind(), ValueKind::Number);
        assert_eq!(Value::from(json!(false)).kind(), ValueKind::Bool);
    }

    #[test]
    fn nested_json_becomes_nested_records() {
        let v = Value::from(json!({"a": {"b": [ {"c": 1} ]}}));
        let a = v.as_record().unwrap().get("a").unwrap();
        let b = a.as_record().unwrap().get("b").unwrap();
        let first = b.as_collection().unwrap().iter().next().unwrap();
        assert!(first.is_record());
    }

    #[test]
    fn json_conversion_is_lossless() {
        let json = json!({"n": 1, "f": 2.5, "s": "x", "z": null, "l": [true, {"k": []}]});
        let back = serde_json::Value::from(Value::from(json.clone()));
        assert_eq!(back, json);
    }

    #[test]
    fn serde_matches_json_conversion() {
        let v: Value = serde_json::from_str(r#"{"id": 7, "tags": ["a"]}"#).unwrap();
        assert_eq!(v, Value::from(json!({"id": 7, "tags": ["a"]})));
        assert_eq!(
            serde_json::to_value(&v).unwrap(),
            json!({"id": 7, "tags": ["a"]})
        );
    }

    #[test]
    fn non_record_coerces_to_empty() {
        assert!(Value::from(1i64).as_record_or_empty().is_empty());
        assert!(Value::from(json!([1])).as_record_or_empty().is_empty());

        let v = Value::from(json!({"a": 1}));
        assert_eq!(v.as_record_or_empty().len(), 1);
    }

    #[test]
    fn try_from_reports_kinds() {
        let err = Record::try_from(Value::from(1i64)).unwrap_err();
        assert_eq!(
            err,
            TypeError::UnexpectedKind {
                expected: ValueKind::Record,
                actual: ValueKind::Number,
            }
        );
        assert!(Collection::try_from(Value::from(json!([]))).is_ok());
    }

    #[test]
    fn parse_from_str() {
        let v: Value = "[1, 2]".parse().unwrap();
        assert!(v.is_collection());

        let err = "{not json".parse::<Value>().unwrap_err();
        assert!(matches!(err, TypeError::Serialization(_)));
    }

    #[test]
    fn compact_json_text() {
        let v = Value::from(json!({"b": 1, "a": [null]}));
        assert_eq!(v.to_json_string(), r#"{"a":[null],"b":1}"#);
    }
}
