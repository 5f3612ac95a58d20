/*
 * value.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Parsed frontmatter data.
//!
//! [`FrontmatterValue`] is the common currency between frontmatter parsers
//! and the export synthesizer. It mirrors the value shapes a JavaScript
//! module can express as literals: `undefined`, `null`, booleans, numbers,
//! strings, dates, arrays and key-ordered objects.

use indexmap::IndexMap;

/// Key-ordered mapping from export (or property) name to value.
pub type FrontmatterRecord = IndexMap<String, FrontmatterValue>;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FrontmatterValue {
    /// No value at all; exported as `undefined`.
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    /// A date-time, kept as its RFC 3339 text (`new Date("...")`).
    Date(String),
    Array(Vec<FrontmatterValue>),
    Object(FrontmatterRecord),
}

impl FrontmatterValue {
    /// Build an object from key/value pairs, keeping their order.
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FrontmatterValue)>,
    {
        FrontmatterValue::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn as_object(&self) -> Option<&FrontmatterRecord> {
        match self {
            FrontmatterValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut FrontmatterRecord> {
        match self {
            FrontmatterValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Get a field if this is an object.
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// JavaScript truthiness.
    ///
    /// `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy. Everything
    /// else, including empty arrays and objects, is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            FrontmatterValue::Undefined | FrontmatterValue::Null => false,
            FrontmatterValue::Bool(b) => *b,
            FrontmatterValue::Integer(i) => *i != 0,
            FrontmatterValue::Float(f) => *f != 0.0 && !f.is_nan(),
            FrontmatterValue::String(s) => !s.is_empty(),
            FrontmatterValue::Date(_)
            | FrontmatterValue::Array(_)
            | FrontmatterValue::Object(_) => true,
        }
    }

    /// A short name for the kind of value, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FrontmatterValue::Undefined => "undefined",
            FrontmatterValue::Null => "null",
            FrontmatterValue::Bool(_) => "boolean",
            FrontmatterValue::Integer(_) | FrontmatterValue::Float(_) => "number",
            FrontmatterValue::String(_) => "string",
            FrontmatterValue::Date(_) => "date",
            FrontmatterValue::Array(_) => "array",
            FrontmatterValue::Object(_) => "object",
        }
    }
}

impl From<bool> for FrontmatterValue {
    fn from(value: bool) -> Self {
        FrontmatterValue::Bool(value)
    }
}

impl From<i64> for FrontmatterValue {
    fn from(value: i64) -> Self {
        FrontmatterValue::Integer(value)
    }
}

impl From<f64> for FrontmatterValue {
    fn from(value: f64) -> Self {
        FrontmatterValue::Float(value)
    }
}

impl From<&str> for FrontmatterValue {
    fn from(value: &str) -> Self {
        FrontmatterValue::String(value.to_string())
    }
}

impl From<String> for FrontmatterValue {
    fn from(value: String) -> Self {
        FrontmatterValue::String(value)
    }
}

impl From<Vec<FrontmatterValue>> for FrontmatterValue {
    fn from(value: Vec<FrontmatterValue>) -> Self {
        FrontmatterValue::Array(value)
    }
}

impl From<FrontmatterRecord> for FrontmatterValue {
    fn from(value: FrontmatterRecord) -> Self {
        FrontmatterValue::Object(value)
    }
}

impl From<serde_json::Value> for FrontmatterValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FrontmatterValue::Null,
            serde_json::Value::Bool(b) => FrontmatterValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FrontmatterValue::Integer(i),
                None => FrontmatterValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => FrontmatterValue::String(s),
            serde_json::Value::Array(items) => {
                FrontmatterValue::Array(items.into_iter().map(FrontmatterValue::from).collect())
            }
            serde_json::Value::Object(map) => FrontmatterValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, FrontmatterValue::from(v)))
                    .collect(),
            ),
        }
    }
}
