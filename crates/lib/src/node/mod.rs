//! Form tree nodes.
//!
//! A form tree arrives in one of two shapes, or a mix of both:
//!
//! - **Plain data**: scalars, ordered lists and keyed maps, as produced by a
//!   data-object renderer. Map keys supply the field names.
//! - **Tagged AST**: [`TaggedNode`]s whose type tag is resolved through the
//!   [`FieldTypeRegistry`](crate::registry::FieldTypeRegistry) to decide how
//!   the node contributes to field names.
//!
//! # Usage
//!
//! ```
//! use bracketform::node::Node;
//!
//! // Tagged AST: an attr group holding one text field
//! let profile = Node::attr("profile", vec![Node::field("string", "name", "Bob")]);
//!
//! // Plain data
//! let data = Node::map([("title", Node::from("Hello")), ("count", Node::from(3))]);
//! assert!(data.is_map());
//! assert!(profile.is_tagged());
//! ```

use indexmap::IndexMap;

pub mod decode;
pub mod errors;
pub mod scalar;

pub use errors::DecodeError;
pub use scalar::Scalar;

/// A node of a form tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Terminal value
    Scalar(Scalar),
    /// Ordered sequence of nodes sharing their parent's path
    List(Vec<Node>),
    /// Insertion-ordered keyed children, each key adds one path segment
    Map(IndexMap<String, Node>),
    /// Domain node whose traversal is chosen by its type tag
    Tagged(TaggedNode),
}

/// A node carrying a type tag, resolved through the field type registry.
///
/// Which fields are required depends on the behavior the tag resolves to:
/// leaf fields need a `name`, attr and many groups need a `name` and
/// `children`, pass-through wrappers need neither.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaggedNode {
    /// Type tag, e.g. `"string"`, `"attr"` or `"many"`
    pub tag: String,
    /// Field name contributed to the path
    pub name: Option<String>,
    /// Current value of a leaf field
    pub value: Scalar,
    /// Child nodes of a group. For many groups each child is one repetition.
    pub children: Option<Vec<Node>>,
}

impl TaggedNode {
    /// Creates a tagged node with only its tag set.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Sets the name contributed to the path.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the leaf value.
    pub fn with_value(mut self, value: impl Into<Scalar>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the children.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = Some(children);
        self
    }
}

impl Node {
    /// A null scalar.
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Builds a map from `(key, node)` pairs, keeping their order.
    pub fn map<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Node)>,
    {
        Node::Map(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Builds a list node.
    pub fn list(items: Vec<Node>) -> Self {
        Node::List(items)
    }

    /// A leaf field of type `tag`.
    pub fn field(
        tag: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> Self {
        Node::Tagged(TaggedNode::new(tag).with_name(name).with_value(value))
    }

    /// An `attr` group nesting `children` under `name`.
    pub fn attr(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Tagged(
            TaggedNode::new("attr")
                .with_name(name)
                .with_children(children),
        )
    }

    /// A `many` group; each entry of `repetitions` is one repeated set, either
    /// a single node or a [`Node::List`] of nodes.
    pub fn many(name: impl Into<String>, repetitions: Vec<Node>) -> Self {
        Node::Tagged(
            TaggedNode::new("many")
                .with_name(name)
                .with_children(repetitions),
        )
    }

    /// A `group` wrapper, which contributes nothing to field names.
    pub fn group(children: Vec<Node>) -> Self {
        Node::Tagged(TaggedNode::new("group").with_children(children))
    }

    /// A `section` wrapper, which contributes nothing to field names.
    pub fn section(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Tagged(
            TaggedNode::new("section")
                .with_name(name)
                .with_children(children),
        )
    }

    /// An arbitrary tagged node.
    pub fn tagged(node: TaggedNode) -> Self {
        Node::Tagged(node)
    }

    /// Returns true if this is a scalar
    pub fn is_scalar(&self) -> bool {
        matches!(self, Node::Scalar(_))
    }

    /// Returns true if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Node::List(_))
    }

    /// Returns true if this is a map
    pub fn is_map(&self) -> bool {
        matches!(self, Node::Map(_))
    }

    /// Returns true if this is a tagged node
    pub fn is_tagged(&self) -> bool {
        matches!(self, Node::Tagged(_))
    }

    /// Returns the shape name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Scalar(_) => "scalar",
            Node::List(_) => "list",
            Node::Map(_) => "map",
            Node::Tagged(_) => "tagged",
        }
    }

    /// Attempts to view this node as a scalar
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view this node as a tagged node
    pub fn as_tagged(&self) -> Option<&TaggedNode> {
        match self {
            Node::Tagged(t) => Some(t),
            _ => None,
        }
    }
}

impl From<Scalar> for Node {
    fn from(value: Scalar) -> Self {
        Node::Scalar(value)
    }
}

macro_rules! impl_node_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

impl_node_from_scalar!(bool, i64, i32, u32, f64, String, &str);

impl From<TaggedNode> for Node {
    fn from(node: TaggedNode) -> Self {
        Node::Tagged(node)
    }
}
