//! Registry mapping node type tags to traversal behaviors.
//!
//! Every [`TaggedNode`](crate::node::TaggedNode) is resolved through a
//! [`FieldTypeRegistry`] to one of four [`FieldBehavior`]s. The baseline table
//! from [`FieldTypeRegistry::with_builtins`] covers the common leaf field types
//! and the structural `group`/`section`/`attr`/`many` tags; applications add
//! their own leaf types with [`FieldTypeRegistry::register_leaf`].
//!
//! Registration takes `&mut self`, so a registry is configured up front and
//! then shared read-only (typically behind an `Arc`) by every serialization
//! call. No locking is involved.
//!
//! ```
//! use bracketform::registry::{FieldBehavior, FieldTypeRegistry};
//!
//! let mut registry = FieldTypeRegistry::with_builtins();
//! registry.register_leaf("color_picker");
//!
//! assert_eq!(registry.get("color_picker"), Some(FieldBehavior::EmitLeaf));
//! assert_eq!(registry.get("many"), Some(FieldBehavior::ManyGroup));
//! assert_eq!(registry.get("bogus"), None);
//! ```

use std::{borrow::Cow, collections::HashMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{ATTR, LEAF_TAGS, MANY, PASS_THROUGH_TAGS},
    path::Path,
    serializer::SerializeError,
};

/// How a tagged node contributes to field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldBehavior {
    /// Emits one pair at the parent path extended by the node's name.
    EmitLeaf,
    /// Walks the children at the parent path, adding no segment.
    PassThrough,
    /// Adds the node's name once and walks every child under it.
    AttrGroup,
    /// Adds the node's name once and walks each repetition under an index.
    ManyGroup,
}

impl FieldBehavior {
    /// Returns the behavior name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldBehavior::EmitLeaf => "emit_leaf",
            FieldBehavior::PassThrough => "pass_through",
            FieldBehavior::AttrGroup => "attr_group",
            FieldBehavior::ManyGroup => "many_group",
        }
    }

    /// Returns true if the node needs a name to be serialized.
    pub fn requires_name(&self) -> bool {
        !matches!(self, FieldBehavior::PassThrough)
    }

    /// Returns true if the node needs a children collection to be serialized.
    pub fn requires_children(&self) -> bool {
        matches!(self, FieldBehavior::AttrGroup | FieldBehavior::ManyGroup)
    }
}

impl fmt::Display for FieldBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table of tag to [`FieldBehavior`] mappings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTypeRegistry {
    behaviors: HashMap<String, FieldBehavior>,
}

impl FieldTypeRegistry {
    /// Creates an empty registry. Every tag is unknown until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in leaf and structural tags.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_leaves(LEAF_TAGS.iter().copied());
        for tag in PASS_THROUGH_TAGS {
            registry.register(*tag, FieldBehavior::PassThrough);
        }
        registry.register(ATTR, FieldBehavior::AttrGroup);
        registry.register(MANY, FieldBehavior::ManyGroup);
        registry
    }

    /// Registers `tag`, returning the behavior it replaced, if any.
    pub fn register(
        &mut self,
        tag: impl Into<String>,
        behavior: FieldBehavior,
    ) -> Option<FieldBehavior> {
        self.behaviors.insert(tag.into(), behavior)
    }

    /// Registers `tag` as a leaf field type.
    pub fn register_leaf(&mut self, tag: impl Into<String>) -> Option<FieldBehavior> {
        self.register(tag, FieldBehavior::EmitLeaf)
    }

    /// Registers every tag in `tags` as a leaf field type.
    pub fn register_leaves<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tag in tags {
            self.register_leaf(tag);
        }
    }

    /// Looks up the behavior registered for `tag`.
    pub fn get(&self, tag: &str) -> Option<FieldBehavior> {
        self.behaviors.get(tag).copied()
    }

    /// Resolves `tag` for a node found at `path`.
    ///
    /// # Errors
    /// Returns [`SerializeError::UnknownFieldType`] if `tag` is not registered.
    pub fn resolve(&self, tag: &str, path: &Path) -> Result<FieldBehavior, SerializeError> {
        self.get(tag).ok_or_else(|| SerializeError::UnknownFieldType {
            tag: tag.to_string(),
            path: path.to_string(),
        })
    }

    /// Returns true if `tag` is registered.
    pub fn contains(&self, tag: &str) -> bool {
        self.behaviors.contains_key(tag)
    }

    /// Returns the number of registered tags.
    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Returns true if no tags are registered.
    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    /// Returns all registrations sorted by tag.
    pub fn entries(&self) -> Vec<(&str, FieldBehavior)> {
        let mut entries: Vec<_> = self
            .behaviors
            .iter()
            .map(|(tag, behavior)| (tag.as_str(), *behavior))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Returns this registry with every unknown tag in `tags` added as a leaf.
    ///
    /// Tags that are already registered keep their behavior; shadowing a
    /// structural tag logs a warning. `self` is never modified, and it is
    /// borrowed as-is when `tags` adds nothing new.
    pub fn with_additional_leaves<S: AsRef<str>>(
        &self,
        tags: &[S],
    ) -> Cow<'_, FieldTypeRegistry> {
        if tags.iter().all(|tag| self.contains(tag.as_ref())) {
            for tag in tags {
                self.warn_if_shadowed(tag.as_ref());
            }
            return Cow::Borrowed(self);
        }

        let mut overlay = self.clone();
        for tag in tags.iter().map(AsRef::as_ref) {
            if overlay.contains(tag) {
                overlay.warn_if_shadowed(tag);
            } else {
                overlay.register_leaf(tag);
            }
        }
        Cow::Owned(overlay)
    }

    fn warn_if_shadowed(&self, tag: &str) {
        if let Some(behavior) = self.get(tag)
            && behavior != FieldBehavior::EmitLeaf
        {
            tracing::warn!(
                tag,
                %behavior,
                "Additional field type already registered, keeping existing behavior"
            );
        }
    }
}
