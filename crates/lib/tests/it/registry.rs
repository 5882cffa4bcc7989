//! Field type registry: built-in table, custom registration and resolution.

use std::sync::Arc;

use bracketform::{
    FieldBehavior, FieldTypeRegistry, FormSerializer, Node, Path, TaggedNode,
    constants::LEAF_TAGS,
};

use crate::helpers::names;

#[test]
fn test_builtin_structural_tags() {
    let registry = FieldTypeRegistry::with_builtins();
    assert_eq!(registry.get("group"), Some(FieldBehavior::PassThrough));
    assert_eq!(registry.get("section"), Some(FieldBehavior::PassThrough));
    assert_eq!(registry.get("compound"), Some(FieldBehavior::PassThrough));
    assert_eq!(registry.get("attr"), Some(FieldBehavior::AttrGroup));
    assert_eq!(registry.get("many"), Some(FieldBehavior::ManyGroup));
}

#[test]
fn test_builtin_leaf_tags() {
    let registry = FieldTypeRegistry::with_builtins();
    for tag in LEAF_TAGS {
        assert_eq!(registry.get(tag), Some(FieldBehavior::EmitLeaf), "{tag}");
    }
    for tag in ["string", "int", "bool", "date", "date_time", "decimal", "upload"] {
        assert!(registry.contains(tag), "{tag}");
    }
}

#[test]
fn test_new_registry_is_empty() {
    let registry = FieldTypeRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.resolve("string", &Path::root()).is_err());
}

#[test]
fn test_register_returns_previous_behavior() {
    let mut registry = FieldTypeRegistry::new();
    assert_eq!(registry.register_leaf("widget"), None);
    assert_eq!(
        registry.register("widget", FieldBehavior::AttrGroup),
        Some(FieldBehavior::EmitLeaf)
    );
    assert_eq!(registry.get("widget"), Some(FieldBehavior::AttrGroup));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_custom_structural_tag_drives_traversal() {
    let mut registry = FieldTypeRegistry::with_builtins();
    registry.register("fieldset", FieldBehavior::AttrGroup);
    registry.register("repeater", FieldBehavior::ManyGroup);
    registry.register("panel", FieldBehavior::PassThrough);

    let node = Node::tagged(
        TaggedNode::new("panel").with_children(vec![
            Node::tagged(
                TaggedNode::new("fieldset")
                    .with_name("address")
                    .with_children(vec![Node::field("string", "city", "Oslo")]),
            ),
            Node::tagged(
                TaggedNode::new("repeater")
                    .with_name("phones")
                    .with_children(vec![Node::field("string", "number", "123")]),
            ),
        ]),
    );

    let serializer = FormSerializer::with_registry(Arc::new(registry));
    let pairs = serializer.serialize(&node).unwrap();
    let names: Vec<&str> = pairs.iter().map(|pair| pair.name.as_str()).collect();
    assert_eq!(names, vec!["address[city]", "phones[0][number]"]);
}

#[test]
fn test_resolve_reports_tag_and_path() {
    let registry = FieldTypeRegistry::with_builtins();
    let path = Path::seed(Some("user")).join("profile");
    let err = registry.resolve("bogus", &path).unwrap_err();
    assert_eq!(err.tag(), Some("bogus"));
    assert_eq!(err.path(), "user[profile]");
}

#[test]
fn test_entries_are_sorted() {
    let mut registry = FieldTypeRegistry::new();
    registry.register_leaves(["zeta", "alpha", "mid"]);
    let tags: Vec<&str> = registry.entries().into_iter().map(|(tag, _)| tag).collect();
    assert_eq!(tags, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn test_behavior_names() {
    assert_eq!(FieldBehavior::EmitLeaf.to_string(), "emit_leaf");
    assert_eq!(FieldBehavior::AttrGroup.to_string(), "attr_group");
    assert_eq!(
        serde_json::to_value(FieldBehavior::PassThrough).unwrap(),
        serde_json::json!("pass_through")
    );
}

#[test]
fn test_additional_leaves_match_serializer_overlay() {
    let registry = FieldTypeRegistry::with_builtins();
    let extra = vec!["slider".to_string(), "many".to_string()];

    let overlay = registry.with_additional_leaves(&extra);
    assert_eq!(overlay.get("slider"), Some(FieldBehavior::EmitLeaf));
    assert_eq!(overlay.get("many"), Some(FieldBehavior::ManyGroup));
    assert!(!registry.contains("slider"));

    let node = Node::group(vec![
        Node::field("slider", "volume", 3),
        Node::many("rows", vec![Node::field("string", "x", "a")]),
    ]);
    let pairs = FormSerializer::with_registry(Arc::new(registry))
        .additional_field_types(extra)
        .serialize(&node)
        .unwrap();
    assert_eq!(names(&pairs), vec!["volume", "rows[0][x]"]);
}
