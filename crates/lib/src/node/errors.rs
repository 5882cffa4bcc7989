//! Error types for decoding form trees from JSON.

use thiserror::Error;

/// Errors raised while decoding a tagged AST from JSON.
///
/// `location` is a JSON pointer (`/0/children/2`) to the offending value.
#[non_exhaustive]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The `type` key of a tagged node is not a string
    #[error("Invalid node type at '{location}': expected string, found {found}")]
    InvalidTag {
        location: String,
        found: &'static str,
    },

    /// The `name` key of a tagged node is not a string
    #[error("Invalid node name at '{location}': expected string, found {found}")]
    InvalidName {
        location: String,
        found: &'static str,
    },

    /// The `value` key of a tagged node is not a scalar
    #[error("Invalid node value at '{location}': expected scalar, found {found}")]
    InvalidValue {
        location: String,
        found: &'static str,
    },

    /// The `children` key of a tagged node is not an array
    #[error("Invalid node children at '{location}': expected array, found {found}")]
    InvalidChildren {
        location: String,
        found: &'static str,
    },
}

impl DecodeError {
    /// Get the JSON pointer of the offending value
    pub fn location(&self) -> &str {
        match self {
            DecodeError::InvalidTag { location, .. }
            | DecodeError::InvalidName { location, .. }
            | DecodeError::InvalidValue { location, .. }
            | DecodeError::InvalidChildren { location, .. } => location,
        }
    }

    /// Get the JSON type that was found instead of the expected one
    pub fn found(&self) -> &'static str {
        match self {
            DecodeError::InvalidTag { found, .. }
            | DecodeError::InvalidName { found, .. }
            | DecodeError::InvalidValue { found, .. }
            | DecodeError::InvalidChildren { found, .. } => found,
        }
    }
}

// Conversion from DecodeError to the main Error type
impl From<DecodeError> for crate::Error {
    fn from(err: DecodeError) -> Self {
        crate::Error::Decode(err)
    }
}
