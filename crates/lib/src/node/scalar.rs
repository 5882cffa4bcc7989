//! Scalar leaf values.

use std::fmt;

/// A terminal value carried by a leaf node.
///
/// `Null` stands in for missing or undefined values and is normalized to the
/// empty string when a leaf is emitted.
///
/// ```
/// # use bracketform::node::Scalar;
/// assert!(Scalar::from("hello") == "hello");
/// assert!(Scalar::from(42) == 42);
/// assert!(Scalar::from(true) == true);
/// assert!(Scalar::from(None::<i64>).is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Scalar {
    /// Missing value
    #[default]
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Text string value
    Text(String),
}

impl Scalar {
    /// Returns true if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Scalar::Null => "null",
            Scalar::Bool(_) => "bool",
            Scalar::Int(_) => "int",
            Scalar::Float(_) => "float",
            Scalar::Text(_) => "text",
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to convert to an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Scalar::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to convert to a string
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Float(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<u32> for Scalar {
    fn from(value: u32) -> Self {
        Scalar::Int(value as i64)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::Text(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Scalar::Null)
    }
}

impl PartialEq<str> for Scalar {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Scalar::Text(s) if s == other)
    }
}

impl PartialEq<&str> for Scalar {
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Scalar::Text(s) if s == *other)
    }
}

impl PartialEq<i64> for Scalar {
    fn eq(&self, other: &i64) -> bool {
        matches!(self, Scalar::Int(n) if n == other)
    }
}

impl PartialEq<i32> for Scalar {
    fn eq(&self, other: &i32) -> bool {
        matches!(self, Scalar::Int(n) if *n == *other as i64)
    }
}

impl PartialEq<bool> for Scalar {
    fn eq(&self, other: &bool) -> bool {
        matches!(self, Scalar::Bool(b) if b == other)
    }
}
