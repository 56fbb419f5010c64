//! Loosely typed input accepted by every predicate.
//!
//! Callers frequently hold values whose type is only known at runtime (JSON
//! payloads, link attributes, raw buffers). [`Value`] captures those shapes so
//! that the "only strings can match" rule is checked explicitly by each
//! predicate instead of being assumed from the caller's types.

use cid::Cid;

/// An input of any shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    /// A text string, the only shape most predicates can match.
    Str(&'a str),
    /// Raw bytes. Never matched, even when they hold a binary CID.
    Bytes(&'a [u8]),
    /// An already parsed CID.
    Cid(&'a Cid),
    /// A number.
    Number(f64),
    /// A boolean.
    Bool(bool),
    /// An explicit null.
    Null,
    /// A missing value.
    Undefined,
    /// A structured value (map or list).
    Object,
}

impl<'a> Value<'a> {
    /// Returns the string payload, or `None` for every other shape.
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the shape, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Cid(_) => "cid",
            Value::Number(_) => "number",
            Value::Bool(_) => "bool",
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Object => "object",
        }
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(s: &'a str) -> Self {
        Value::Str(s)
    }
}

impl<'a> From<&'a String> for Value<'a> {
    fn from(s: &'a String) -> Self {
        Value::Str(s.as_str())
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Value::Bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Value<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Value::Bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Value<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Value::Bytes(bytes.as_slice())
    }
}

impl<'a> From<&'a Cid> for Value<'a> {
    fn from(cid: &'a Cid) -> Self {
        Value::Cid(cid)
    }
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value<'_> {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<()> for Value<'_> {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<'a, T> From<Option<T>> for Value<'a>
where
    T: Into<Value<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Undefined, Into::into)
    }
}

impl<'a> From<&'a serde_json::Value> for Value<'a> {
    fn from(json: &'a serde_json::Value) -> Self {
        match json {
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Number(n) => n.as_f64().map_or(Value::Object, Value::Number),
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => Value::Object,
        }
    }
}
