//! Decoding form trees from JSON.
//!
//! Two input shapes are supported:
//!
//! - [`Node::from_data`] reads plain data. Objects become maps (key order is
//!   kept), arrays become lists and everything else becomes a scalar. This
//!   never fails.
//! - [`Node::from_ast`] reads a tagged AST. An object with a string `"type"`
//!   key is a [`TaggedNode`] with optional `"name"`, `"value"` and
//!   `"children"` keys; any other object is a plain map. Unknown keys on a
//!   tagged node (`"errors"`, `"options"`, ...) are ignored. A top-level
//!   array holds the form's root nodes and decodes as a `group`, so the roots
//!   are not indexed; nested arrays decode as lists.
//!
//! ```
//! use bracketform::node::Node;
//! use serde_json::json;
//!
//! let ast = Node::from_ast(json!([
//!     { "type": "attr", "name": "profile", "children": [
//!         { "type": "string", "name": "name", "value": "Bob" }
//!     ]}
//! ]))?;
//! assert_eq!(ast.as_tagged().map(|root| root.tag.as_str()), Some("group"));
//! # Ok::<(), bracketform::node::DecodeError>(())
//! ```

use serde_json::{Map as JsonMap, Number, Value as Json};

use super::{DecodeError, Node, Scalar, TaggedNode};
use crate::constants::{CHILDREN_KEY, NAME_KEY, TYPE_KEY, VALUE_KEY};

impl Node {
    /// Decodes plain nested data.
    pub fn from_data(value: Json) -> Node {
        match value {
            Json::Array(items) => Node::List(items.into_iter().map(Node::from_data).collect()),
            Json::Object(object) => Node::Map(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Node::from_data(value)))
                    .collect(),
            ),
            scalar => Node::Scalar(scalar_from_json(scalar)),
        }
    }

    /// Decodes a tagged AST.
    ///
    /// # Errors
    /// Returns a [`DecodeError`] when a tagged node carries a `type`, `name`,
    /// `value` or `children` of the wrong JSON type.
    pub fn from_ast(value: Json) -> Result<Node, DecodeError> {
        match value {
            Json::Array(roots) => Ok(Node::group(decode_list(roots, "")?)),
            other => decode_ast(other, ""),
        }
    }
}

impl From<Json> for Node {
    fn from(value: Json) -> Self {
        Node::from_data(value)
    }
}

fn decode_ast(value: Json, location: &str) -> Result<Node, DecodeError> {
    match value {
        Json::Array(items) => decode_list(items, location).map(Node::List),
        Json::Object(object) if object.contains_key(TYPE_KEY) => {
            decode_tagged(object, location).map(Node::Tagged)
        }
        Json::Object(object) => {
            let mut map = indexmap::IndexMap::with_capacity(object.len());
            for (key, value) in object {
                let child = pointer(location, &key);
                map.insert(key, decode_ast(value, &child)?);
            }
            Ok(Node::Map(map))
        }
        scalar => Ok(Node::Scalar(scalar_from_json(scalar))),
    }
}

fn decode_list(items: Vec<Json>, location: &str) -> Result<Vec<Node>, DecodeError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| decode_ast(item, &pointer(location, &i.to_string())))
        .collect()
}

fn decode_tagged(
    mut object: JsonMap<String, Json>,
    location: &str,
) -> Result<TaggedNode, DecodeError> {
    let tag = match object.remove(TYPE_KEY) {
        Some(Json::String(tag)) => tag,
        other => {
            return Err(DecodeError::InvalidTag {
                location: pointer(location, TYPE_KEY),
                found: json_type_name(other.as_ref()),
            });
        }
    };

    let name = match object.remove(NAME_KEY) {
        None | Some(Json::Null) => None,
        Some(Json::String(name)) => Some(name),
        Some(other) => {
            return Err(DecodeError::InvalidName {
                location: pointer(location, NAME_KEY),
                found: json_type_name(Some(&other)),
            });
        }
    };

    let value = match object.remove(VALUE_KEY) {
        None => Scalar::Null,
        Some(value @ (Json::Array(_) | Json::Object(_))) => {
            return Err(DecodeError::InvalidValue {
                location: pointer(location, VALUE_KEY),
                found: json_type_name(Some(&value)),
            });
        }
        Some(scalar) => scalar_from_json(scalar),
    };

    let children_location = pointer(location, CHILDREN_KEY);
    let children = match object.remove(CHILDREN_KEY) {
        None | Some(Json::Null) => None,
        Some(Json::Array(items)) => Some(decode_list(items, &children_location)?),
        Some(other) => {
            return Err(DecodeError::InvalidChildren {
                location: children_location,
                found: json_type_name(Some(&other)),
            });
        }
    };

    Ok(TaggedNode {
        tag,
        name,
        value,
        children,
    })
}

fn scalar_from_json(value: Json) -> Scalar {
    match value {
        Json::Null => Scalar::Null,
        Json::Bool(b) => Scalar::Bool(b),
        Json::Number(n) => scalar_from_number(&n),
        Json::String(s) => Scalar::Text(s),
        // Callers only pass scalars; containers are flattened to their JSON text
        other => Scalar::Text(other.to_string()),
    }
}

fn scalar_from_number(n: &Number) -> Scalar {
    if let Some(i) = n.as_i64() {
        Scalar::Int(i)
    } else if n.is_u64() {
        // Beyond i64 a float would lose digits
        Scalar::Text(n.to_string())
    } else {
        n.as_f64()
            .map(Scalar::Float)
            .unwrap_or_else(|| Scalar::Text(n.to_string()))
    }
}

fn json_type_name(value: Option<&Json>) -> &'static str {
    match value {
        None => "nothing",
        Some(Json::Null) => "null",
        Some(Json::Bool(_)) => "bool",
        Some(Json::Number(_)) => "number",
        Some(Json::String(_)) => "string",
        Some(Json::Array(_)) => "array",
        Some(Json::Object(_)) => "object",
    }
}

/// Appends one reference token to a JSON pointer.
fn pointer(base: &str, token: &str) -> String {
    format!("{base}/{}", token.replace('~', "~0").replace('/', "~1"))
}
