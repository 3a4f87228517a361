//! Pair-like key/value entries.

use std::fmt;

use crate::value::Value;

/// A key/value pair produced by traversing a map-shaped step.
///
/// `key` and `value` are the preferred way to order entries: extract the
/// component and compare it with an ascending or descending strategy,
/// rather than using the deprecated entry-aware strategies.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub key: Value,
    pub value: Value,
}

impl Entry {
    pub fn new(key: Value, value: Value) -> Self {
        Entry { key, value }
    }

    /// Borrow the key component.
    pub fn key(&self) -> &Value {
        &self.key
    }

    /// Borrow the value component.
    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn into_parts(self) -> (Value, Value) {
        (self.key, self.value)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_borrow_components() {
        let entry = Entry::new(Value::from("year"), Value::from(1999));
        assert_eq!(entry.key(), &Value::from("year"));
        assert_eq!(entry.value(), &Value::from(1999));
    }

    #[test]
    fn into_parts_moves_components() {
        let entry = Entry::new(Value::from(1), Value::from("a"));
        let (key, value) = entry.into_parts();
        assert_eq!(key, Value::from(1));
        assert_eq!(value, Value::from("a"));
    }
}
