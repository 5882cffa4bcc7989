//!
//! bracketform: flatten nested form trees into bracket-named form fields.
//! This library turns the in-memory model of a form builder into the flat
//! `name=value` pairs a traditional HTML form submission carries, using the
//! `parent[child][0][grandchild]` naming most backend parameter parsers
//! understand.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: The input tree. Plain scalars, lists and maps, or tagged AST nodes such as `attr` and `many` groups.
//! * **Paths (`path::Path`)**: The segments accumulated on the way down to a leaf, serialized as `first[second][third]`.
//! * **Registry (`registry::FieldTypeRegistry`)**: Maps node type tags to one of four traversal behaviors. Built once, shared read-only.
//! * **Serializer (`serializer::serialize`, `FormSerializer`)**: Walks a tree and emits one `serializer::FieldPair` per leaf, in input order.
//! * **Rendering (`render`)**: Turns emitted pairs into hidden inputs or a urlencoded body.
//!
//! ```
//! use bracketform::{FormSerializer, node::Node, render};
//! use serde_json::json;
//!
//! let tree = Node::from_data(json!({ "field-one": 123, "field-two": "Title" }));
//! let pairs = FormSerializer::new().serialize(&tree)?;
//! assert_eq!(render::form_urlencoded(&pairs), "field-one=123&field-two=Title");
//! # Ok::<(), bracketform::Error>(())
//! ```

pub mod constants;
pub mod node;
pub mod path;
pub mod registry;
pub mod render;
pub mod serializer;

pub use node::{Node, Scalar, TaggedNode};
pub use path::{Path, Segment};
pub use registry::{FieldBehavior, FieldTypeRegistry};
/// Re-export the `FormSerializer` struct for easier access.
pub use serializer::FormSerializer;
pub use serializer::{FieldPair, FieldValue, Indexing, SerializeOptions, serialize};

/// Result type used throughout the bracketform library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the bracketform library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Structured serialization errors from the serializer module
    #[error(transparent)]
    Serialize(serializer::SerializeError),

    /// Structured decoding errors from the node module
    #[error(transparent)]
    Decode(node::DecodeError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Serialize(_) => "serializer",
            Error::Decode(_) => "node",
            Error::Io(_) => "io",
            Error::Json(_) => "json",
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialize_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }

    /// Check if this error is an unregistered field type.
    pub fn is_unknown_field_type(&self) -> bool {
        match self {
            Error::Serialize(err) => err.is_unknown_field_type(),
            _ => false,
        }
    }

    /// Check if this error indicates malformed input, in the tree or the JSON.
    pub fn is_malformed_input(&self) -> bool {
        match self {
            Error::Serialize(err) => err.is_malformed(),
            Error::Decode(_) | Error::Json(_) => true,
            _ => false,
        }
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}
