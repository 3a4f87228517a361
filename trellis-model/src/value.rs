//! The runtime value union handed to ordering strategies.
//!
//! A traversal produces heterogeneous values: numbers of several
//! representations, text, booleans, timestamps, and key/value entries drawn
//! from maps. `Value` is the closed union of those shapes. Comparison policy
//! lives in `trellis-core`; this type only carries data and answers
//! capability questions (`is_numeric`, `as_entry`).

use std::fmt;

use chrono::{DateTime, Utc};
use num_bigint::BigInt;

use crate::entry::Entry;

/// A single runtime value flowing through a traversal.
///
/// The union is closed: comparison code matches exhaustively, so adding a
/// variant is a compile error until every comparison path handles it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Fixed-precision signed integer.
    Int(i64),
    /// Arbitrary-precision signed integer.
    Big(BigInt),
    /// IEEE-754 double-precision float.
    Float(f64),
    /// UTF-8 text.
    Text(String),
    /// Boolean.
    Bool(bool),
    /// UTC timestamp.
    Date(DateTime<Utc>),
    /// Key/value entry, e.g. produced by traversing a map.
    Entry(Box<Entry>),
}

/// Fieldless discriminant mirror of [`Value`], used in capability checks
/// and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueKind {
    Int,
    Big,
    Float,
    Text,
    Bool,
    Date,
    Entry,
}

impl ValueKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Big => "bigint",
            Self::Float => "float",
            Self::Text => "text",
            Self::Bool => "bool",
            Self::Date => "date",
            Self::Entry => "entry",
        }
    }

    /// Whether values of this kind participate in numeric-magnitude
    /// comparison.
    pub const fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Big | Self::Float)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Value {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Big(_) => ValueKind::Big,
            Value::Float(_) => ValueKind::Float,
            Value::Text(_) => ValueKind::Text,
            Value::Bool(_) => ValueKind::Bool,
            Value::Date(_) => ValueKind::Date,
            Value::Entry(_) => ValueKind::Entry,
        }
    }

    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Borrow the inner entry when this value is pair-like.
    pub fn as_entry(&self) -> Option<&Entry> {
        match self {
            Value::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Big(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Date(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Entry(entry) => write!(f, "{entry}"),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<BigInt> for Value {
    fn from(v: BigInt) -> Self {
        Value::Big(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Date(v)
    }
}

impl From<Entry> for Value {
    fn from(entry: Entry) -> Self {
        Value::Entry(Box::new(entry))
    }
}

impl From<(Value, Value)> for Value {
    fn from((key, value): (Value, Value)) -> Self {
        Entry::new(key, value).into()
    }
}
