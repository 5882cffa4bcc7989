//! Form tree serialization.
//!
//! [`serialize`] flattens a [`Node`] tree into an ordered list of
//! [`FieldPair`]s whose names follow the bracket convention:
//!
//! ```
//! use bracketform::{
//!     node::Node,
//!     registry::FieldTypeRegistry,
//!     serializer::{FieldPair, SerializeOptions, serialize},
//! };
//!
//! let registry = FieldTypeRegistry::with_builtins();
//! let options = SerializeOptions::default().with_prefix("form");
//!
//! let tree = Node::many(
//!     "items",
//!     vec![
//!         Node::list(vec![Node::field("string", "x", "a")]),
//!         Node::list(vec![Node::field("string", "x", "b")]),
//!     ],
//! );
//!
//! let pairs = serialize(&tree, &registry, &options)?;
//! assert_eq!(
//!     pairs,
//!     vec![
//!         FieldPair::new("form[items][0][x]", "a"),
//!         FieldPair::new("form[items][1][x]", "b"),
//!     ]
//! );
//! # Ok::<(), bracketform::serializer::SerializeError>(())
//! ```
//!
//! # Traversal rules
//!
//! - A scalar emits one pair at the current path.
//! - A list walks each item under an index segment. An empty list emits one
//!   empty pair at its own path so that clearing it reaches the backend.
//! - A map walks each value under its key, in insertion order.
//! - A tagged node is resolved through the registry: leaf fields emit under
//!   their name, pass-through wrappers add nothing, `attr` groups add their
//!   name once, `many` groups add their name and then an index per
//!   repetition. An empty `many` emits one empty pair at the group path.
//!
//! Output order always equals visit order, which equals input order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
    constants::DEFAULT_MAX_DEPTH,
    node::Node,
    path::{Path, Segment},
    registry::FieldTypeRegistry,
};

pub mod emit;
pub mod errors;
mod walker;

pub use emit::{FieldPair, FieldValue, emit};
pub use errors::SerializeError;

use walker::TreeWalker;

/// How repetition indices are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indexing {
    /// Zero-based positions: `items[0][x]`, `items[1][x]`.
    #[default]
    Explicit,
    /// Empty brackets, leaving positions to the backend: `items[][x]`.
    Implicit,
}

impl Indexing {
    /// The segment for the item at `position`.
    pub fn segment(&self, position: usize) -> Segment {
        match self {
            Indexing::Explicit => Segment::Index(position),
            Indexing::Implicit => Segment::Placeholder,
        }
    }
}

/// Per-call serialization settings.
///
/// Deserializable so it can be loaded from a config file; missing keys take
/// their defaults.
///
/// ```
/// # use bracketform::serializer::{Indexing, SerializeOptions};
/// let options: SerializeOptions =
///     serde_json::from_str(r#"{ "prefix": "user", "indexing": "implicit" }"#)?;
/// assert_eq!(options.prefix.as_deref(), Some("user"));
/// assert_eq!(options.indexing, Indexing::Implicit);
/// assert!(!options.list_map_marker);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerializeOptions {
    /// Namespace every field name under this leading segment.
    pub prefix: Option<String>,
    /// Extra tags treated as leaf fields for this call.
    pub additional_field_types: Vec<String>,
    /// How list and repetition indices are written.
    pub indexing: Indexing,
    /// Emit a placeholder field ahead of each map inside a list.
    pub list_map_marker: bool,
    /// Nesting limit; deeper trees fail with
    /// [`SerializeError::MaxDepthExceeded`].
    pub max_depth: usize,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            prefix: None,
            additional_field_types: Vec::new(),
            indexing: Indexing::default(),
            list_map_marker: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl SerializeOptions {
    /// Sets the namespace prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Adds extra leaf tags for this call.
    pub fn with_additional_field_types<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.additional_field_types
            .extend(tags.into_iter().map(Into::into));
        self
    }

    /// Sets the indexing style.
    pub fn with_indexing(mut self, indexing: Indexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Enables or disables the list-of-maps marker.
    pub fn with_list_map_marker(mut self, enabled: bool) -> Self {
        self.list_map_marker = enabled;
        self
    }

    /// Sets the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Serializes `node` into ordered form fields.
///
/// The walk starts at the path seeded from `options.prefix`. Tags listed in
/// `options.additional_field_types` are treated as leaf fields for this call
/// only; `registry` itself is never modified.
///
/// # Errors
/// Returns the first [`SerializeError`] met during traversal. No pairs are
/// returned in that case.
pub fn serialize(
    node: &Node,
    registry: &FieldTypeRegistry,
    options: &SerializeOptions,
) -> Result<Vec<FieldPair>, SerializeError> {
    tracing::debug!(
        prefix = ?options.prefix,
        indexing = ?options.indexing,
        list_map_marker = options.list_map_marker,
        "Serializing form tree"
    );

    let registry = registry.with_additional_leaves(&options.additional_field_types);
    let root = Path::seed(options.prefix.as_deref());

    match TreeWalker::new(&registry, options).walk(node, &root) {
        Ok(pairs) => {
            tracing::debug!(fields = pairs.len(), "Serialized form tree");
            Ok(pairs)
        }
        Err(err) => {
            tracing::debug!(error = %err, "Form tree serialization failed");
            Err(err)
        }
    }
}

/// A registry and options bundled for repeated use.
///
/// The registry sits behind an [`Arc`], so clones are cheap and any number of
/// serializers (one per form, one per thread) can share one table.
///
/// ```
/// use bracketform::{FormSerializer, node::Node, serializer::FieldPair};
///
/// let serializer = FormSerializer::new().prefix("user");
/// let pairs = serializer.serialize(&Node::attr(
///     "profile",
///     vec![Node::field("string", "name", "Bob")],
/// ))?;
/// assert_eq!(pairs, vec![FieldPair::new("user[profile][name]", "Bob")]);
/// # Ok::<(), bracketform::serializer::SerializeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FormSerializer {
    registry: Arc<FieldTypeRegistry>,
    options: SerializeOptions,
}

impl Default for FormSerializer {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSerializer {
    /// Creates a serializer over the built-in registry with default options.
    pub fn new() -> Self {
        Self::with_registry(Arc::new(FieldTypeRegistry::with_builtins()))
    }

    /// Creates a serializer over a shared registry.
    pub fn with_registry(registry: Arc<FieldTypeRegistry>) -> Self {
        Self {
            registry,
            options: SerializeOptions::default(),
        }
    }

    /// Replaces all options.
    pub fn with_options(mut self, options: SerializeOptions) -> Self {
        self.options = options;
        self
    }

    /// Sets the namespace prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.prefix = Some(prefix.into());
        self
    }

    /// Sets the indexing style.
    pub fn indexing(mut self, indexing: Indexing) -> Self {
        self.options.indexing = indexing;
        self
    }

    /// Enables or disables the list-of-maps marker.
    pub fn list_map_marker(mut self, enabled: bool) -> Self {
        self.options.list_map_marker = enabled;
        self
    }

    /// Adds extra leaf tags.
    pub fn additional_field_types<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.with_additional_field_types(tags);
        self
    }

    /// Sets the nesting limit.
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.options.max_depth = max_depth;
        self
    }

    /// The shared registry.
    pub fn registry(&self) -> &FieldTypeRegistry {
        &self.registry
    }

    /// The current options.
    pub fn options(&self) -> &SerializeOptions {
        &self.options
    }

    /// Serializes `node` with this serializer's registry and options.
    pub fn serialize(&self, node: &Node) -> Result<Vec<FieldPair>, SerializeError> {
        serialize(node, &self.registry, &self.options)
    }
}
