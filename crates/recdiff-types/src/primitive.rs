use std::fmt;

use serde::{Serialize, Serializer};
use serde_json::Number;

/// A scalar leaf value.
///
/// Numbers keep their `serde_json` representation so integers and floats
/// survive a trip through the engine unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Primitive {
    /// Returns `true` for [`Primitive::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::Null)
    }

    /// The string form used when this primitive identifies a collection entry.
    ///
    /// Strings render as their contents, so the number `1` and the string
    /// `"1"` produce the same key. Integral floats render without a fraction,
    /// so `1.0` keys the same as `1`.
    pub fn to_key_string(&self) -> String {
        match self {
            Primitive::Null => "null".to_string(),
            Primitive::Bool(b) => b.to_string(),
            Primitive::Number(n) => number_key(n),
            Primitive::String(s) => s.clone(),
        }
    }
}

fn number_key(n: &Number) -> String {
    match n.as_f64() {
        // Below 1e21 an integral double prints without exponent or fraction.
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => {
            if f == 0.0 {
                "0".to_string()
            } else {
                format!("{f:.0}")
            }
        }
        _ => n.to_string(),
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Null => write!(f, "null"),
            Primitive::Bool(b) => write!(f, "{b}"),
            Primitive::Number(n) => write!(f, "{n}"),
            Primitive::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl Serialize for Primitive {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Primitive::Null => serializer.serialize_unit(),
            Primitive::Bool(b) => serializer.serialize_bool(*b),
            Primitive::Number(n) => n.serialize(serializer),
            Primitive::String(s) => serializer.serialize_str(s),
        }
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Primitive::Number(n.into())
    }
}

impl From<u64> for Primitive {
    fn from(n: u64) -> Self {
        Primitive::Number(n.into())
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::String(s.to_string())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::String(s)
    }
}
