//! Error types for form tree serialization.
//!
//! Every error aborts the whole serialization call. A partial set of field
//! names would let the backend rebuild a different structure than the one
//! submitted, so no pairs are returned alongside an error.

use thiserror::Error;

/// Structured error types for serialization.
///
/// Paths are reported in their serialized bracket form, with `(root)` for
/// the empty path.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializeError {
    /// A tagged node uses a tag with no registered behavior
    #[error("Unknown field type '{tag}' at {path}")]
    UnknownFieldType { tag: String, path: String },

    /// A tagged node is missing something its behavior requires
    #[error("Malformed node at {path}: {reason}")]
    MalformedNode { path: String, reason: String },

    /// The tree nests deeper than the configured limit
    #[error("Maximum depth of {limit} exceeded at {path}")]
    MaxDepthExceeded { path: String, limit: usize },
}

impl SerializeError {
    /// Check if this error is an unregistered tag
    pub fn is_unknown_field_type(&self) -> bool {
        matches!(self, SerializeError::UnknownFieldType { .. })
    }

    /// Check if this error is a shape violation
    pub fn is_malformed(&self) -> bool {
        matches!(self, SerializeError::MalformedNode { .. })
    }

    /// Check if this error is the depth guard
    pub fn is_max_depth(&self) -> bool {
        matches!(self, SerializeError::MaxDepthExceeded { .. })
    }

    /// Get the serialized path at which the error occurred
    pub fn path(&self) -> &str {
        match self {
            SerializeError::UnknownFieldType { path, .. }
            | SerializeError::MalformedNode { path, .. }
            | SerializeError::MaxDepthExceeded { path, .. } => path,
        }
    }

    /// Get the tag if this is an unknown field type error
    pub fn tag(&self) -> Option<&str> {
        match self {
            SerializeError::UnknownFieldType { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

// Conversion from SerializeError to the main Error type
impl From<SerializeError> for crate::Error {
    fn from(err: SerializeError) -> Self {
        crate::Error::Serialize(err)
    }
}
