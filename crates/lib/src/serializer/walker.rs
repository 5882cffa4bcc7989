//! Recursive traversal of a form tree.

use std::borrow::Cow;

use crate::{
    constants::LIST_MAP_MARKER,
    node::{Node, Scalar, TaggedNode},
    path::Path,
    registry::{FieldBehavior, FieldTypeRegistry},
};

use super::{FieldPair, SerializeError, SerializeOptions, emit};

/// Walks a tree depth-first and collects one pair per leaf, in visit order.
///
/// Paths are passed down by reference and every nesting level builds its own
/// extended copy. Only the output buffer is mutable.
pub(crate) struct TreeWalker<'a> {
    registry: &'a FieldTypeRegistry,
    options: &'a SerializeOptions,
    pairs: Vec<FieldPair>,
}

impl<'a> TreeWalker<'a> {
    pub(crate) fn new(registry: &'a FieldTypeRegistry, options: &'a SerializeOptions) -> Self {
        Self {
            registry,
            options,
            pairs: Vec::new(),
        }
    }

    /// Walks `node` starting at `path` and returns every emitted pair.
    pub(crate) fn walk(
        mut self,
        node: &Node,
        path: &Path,
    ) -> Result<Vec<FieldPair>, SerializeError> {
        self.visit(node, path, 0)?;
        Ok(self.pairs)
    }

    fn visit(&mut self, node: &Node, path: &Path, depth: usize) -> Result<(), SerializeError> {
        if depth > self.options.max_depth {
            return Err(SerializeError::MaxDepthExceeded {
                path: path.to_string(),
                limit: self.options.max_depth,
            });
        }

        match node {
            Node::Scalar(value) => {
                self.emit(path, value);
                Ok(())
            }
            Node::List(items) => self.visit_list(items, path, depth),
            Node::Map(entries) => {
                for (key, child) in entries {
                    self.visit(child, &path.join(key), depth + 1)?;
                }
                Ok(())
            }
            Node::Tagged(tagged) => self.visit_tagged(tagged, path, depth),
        }
    }

    fn visit_list(
        &mut self,
        items: &[Node],
        path: &Path,
        depth: usize,
    ) -> Result<(), SerializeError> {
        // An emptied list still has to reach the backend to clear it
        if items.is_empty() {
            self.emit(path, &Scalar::Null);
            return Ok(());
        }

        for (i, item) in items.iter().enumerate() {
            let item_path = path.with_index(self.options.indexing.segment(i));
            if self.options.list_map_marker && item.is_map() {
                self.emit(&item_path.join(LIST_MAP_MARKER), &Scalar::Null);
            }
            self.visit(item, &item_path, depth + 1)?;
        }
        Ok(())
    }

    fn visit_tagged(
        &mut self,
        node: &TaggedNode,
        path: &Path,
        depth: usize,
    ) -> Result<(), SerializeError> {
        let behavior = self.registry.resolve(&node.tag, path)?;

        let node_path = if behavior.requires_name() {
            match node.name.as_deref() {
                Some(name) if !name.is_empty() => Cow::Owned(path.join(name)),
                _ => {
                    return Err(malformed(
                        path,
                        format!("'{}' node ({behavior}) has no name", node.tag),
                    ));
                }
            }
        } else {
            Cow::Borrowed(path)
        };

        let children = match node.children.as_deref() {
            Some(children) => children,
            None if behavior.requires_children() => {
                return Err(malformed(
                    path,
                    format!("'{}' group has no children", node.tag),
                ));
            }
            None => &[],
        };

        match behavior {
            FieldBehavior::EmitLeaf => self.emit(&node_path, &node.value),
            FieldBehavior::PassThrough | FieldBehavior::AttrGroup => {
                for child in children {
                    self.visit(child, &node_path, depth + 1)?;
                }
            }
            FieldBehavior::ManyGroup => self.visit_repetitions(children, &node_path, depth)?,
        }
        Ok(())
    }

    fn visit_repetitions(
        &mut self,
        repetitions: &[Node],
        group_path: &Path,
        depth: usize,
    ) -> Result<(), SerializeError> {
        if repetitions.is_empty() {
            self.emit(group_path, &Scalar::Null);
            return Ok(());
        }

        for (i, repetition) in repetitions.iter().enumerate() {
            let set_path = group_path.with_index(self.options.indexing.segment(i));
            match repetition {
                // A set of member fields sharing one index
                Node::List(members) => {
                    for member in members {
                        self.visit(member, &set_path, depth + 1)?;
                    }
                }
                single => self.visit(single, &set_path, depth + 1)?,
            }
        }
        Ok(())
    }

    fn emit(&mut self, path: &Path, value: &Scalar) {
        let pair = emit(path, value);
        tracing::trace!(name = %pair.name, value = %pair.value, "Emitted form field");
        self.pairs.push(pair);
    }
}

fn malformed(path: &Path, reason: String) -> SerializeError {
    SerializeError::MalformedNode {
        path: path.to_string(),
        reason,
    }
}
