//! Leaf emission: turning a path and a scalar into one form field.

use std::fmt;

use serde::Serialize;

use crate::{node::Scalar, path::Path};

/// The value of an emitted form field.
///
/// Unlike [`Scalar`] there is no null: missing values are emitted as empty
/// text. Booleans and numbers keep their type; [`Display`](fmt::Display)
/// gives the string sent over the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// The empty text value.
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Returns true for empty text.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Float(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<Scalar> for FieldValue {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Null => FieldValue::empty(),
            Scalar::Bool(b) => FieldValue::Bool(b),
            Scalar::Int(n) => FieldValue::Int(n),
            Scalar::Float(n) => FieldValue::Float(n),
            Scalar::Text(s) => FieldValue::Text(s),
        }
    }
}

impl From<&Scalar> for FieldValue {
    fn from(value: &Scalar) -> Self {
        FieldValue::from(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

/// One `(name, value)` form field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldPair {
    /// Bracketed field name, e.g. `user[emails][0]`
    pub name: String,
    /// Field value
    pub value: FieldValue,
}

impl FieldPair {
    /// Creates a pair from anything convertible to a field value.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for FieldPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Emits the field for a leaf at `path`, normalizing null to `""`.
///
/// ```
/// # use bracketform::{node::Scalar, path::Path, serializer::{emit, FieldValue}};
/// let pair = emit(&Path::root().join("user").join("age"), &Scalar::Null);
/// assert_eq!(pair.name, "user[age]");
/// assert_eq!(pair.value, FieldValue::empty());
/// ```
pub fn emit(path: &Path, value: &Scalar) -> FieldPair {
    FieldPair {
        name: path.serialize(),
        value: FieldValue::from(value),
    }
}
