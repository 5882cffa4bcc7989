//! Serialization failures: unknown tags, malformed nodes and the depth guard.

use bracketform::{
    FieldTypeRegistry, FormSerializer, Node, SerializeOptions, TaggedNode,
    serializer::SerializeError,
};
use std::sync::Arc;

use crate::helpers::*;

#[test]
fn test_unknown_tag_scenario() {
    let node = Node::tagged(TaggedNode::new("bogus").with_name("x"));
    let err = try_serialize(&node, &SerializeOptions::default()).unwrap_err();

    assert_eq!(
        err,
        SerializeError::UnknownFieldType {
            tag: "bogus".to_string(),
            path: "(root)".to_string(),
        }
    );
    assert!(err.is_unknown_field_type());
    assert_eq!(err.tag(), Some("bogus"));
}

#[test]
fn test_unknown_tag_reports_nested_path() {
    let node = Node::attr(
        "profile",
        vec![
            Node::field("string", "name", "Bob"),
            Node::many(
                "links",
                vec![Node::list(vec![Node::field("bogus", "href", "/x")])],
            ),
        ],
    );
    let options = SerializeOptions::default().with_prefix("user");
    let err = try_serialize(&node, &options).unwrap_err();

    assert_eq!(err.tag(), Some("bogus"));
    assert_eq!(err.path(), "user[profile][links][0]");
}

#[test]
fn test_error_discards_pairs_emitted_before_it() {
    // Valid leaves precede the failing node; none of them may leak out
    let node = Node::group(vec![
        Node::field("string", "a", "1"),
        Node::field("string", "b", "2"),
        Node::field("bogus", "c", "3"),
    ]);
    let result = try_serialize(&node, &SerializeOptions::default());
    assert!(matches!(
        result,
        Err(SerializeError::UnknownFieldType { .. })
    ));
}

#[test]
fn test_empty_registry_rejects_every_tag() {
    let serializer = FormSerializer::with_registry(Arc::new(FieldTypeRegistry::new()));
    let err = serializer.serialize(&attr_form()).unwrap_err();
    assert_eq!(err.tag(), Some("attr"));

    // Plain data needs no registry at all
    let data = Node::map([("a", Node::from(1))]);
    assert!(serializer.serialize(&data).is_ok());
}

#[test]
fn test_leaf_without_name_is_malformed() {
    let node = Node::attr(
        "profile",
        vec![Node::tagged(TaggedNode::new("string").with_value("Bob"))],
    );
    let err = try_serialize(&node, &SerializeOptions::default()).unwrap_err();

    assert!(err.is_malformed());
    assert_eq!(err.path(), "profile");
}

#[test]
fn test_attr_without_children_is_malformed() {
    let node = Node::tagged(TaggedNode::new("attr").with_name("profile"));
    let err = try_serialize(&node, &SerializeOptions::default()).unwrap_err();
    match err {
        SerializeError::MalformedNode { path, reason } => {
            assert_eq!(path, "(root)");
            assert!(reason.contains("attr"), "{reason}");
        }
        other => panic!("Expected MalformedNode, got {other:?}"),
    }
}

#[test]
fn test_many_without_name_is_malformed() {
    let node = Node::tagged(TaggedNode::new("many").with_children(vec![]));
    let err = try_serialize(&node, &SerializeOptions::default()).unwrap_err();
    assert!(err.is_malformed());
}

#[test]
fn test_many_without_repetitions_is_malformed() {
    let node = Node::attr(
        "profile",
        vec![Node::tagged(TaggedNode::new("many").with_name("rows"))],
    );
    let err = try_serialize(&node, &SerializeOptions::default().with_prefix("user")).unwrap_err();
    match err {
        SerializeError::MalformedNode { path, reason } => {
            assert_eq!(path, "user[profile]");
            assert_eq!(reason, "'many' group has no children");
        }
        other => panic!("Expected MalformedNode, got {other:?}"),
    }
}

#[test]
fn test_depth_guard() {
    let mut node = Node::from("bottom");
    for _ in 0..10 {
        node = Node::map([("level", node)]);
    }

    let options = SerializeOptions::default().with_max_depth(5);
    let err = try_serialize(&node, &options).unwrap_err();
    assert!(err.is_max_depth());
    assert_eq!(
        err.to_string(),
        "Maximum depth of 5 exceeded at level[level][level][level][level][level]"
    );

    let options = SerializeOptions::default().with_max_depth(10);
    assert_eq!(serialize_with(&node, &options).len(), 1);
}

#[test]
fn test_error_messages() {
    let err = SerializeError::MalformedNode {
        path: "a[b]".to_string(),
        reason: "'attr' group has no children".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Malformed node at a[b]: 'attr' group has no children"
    );
}
