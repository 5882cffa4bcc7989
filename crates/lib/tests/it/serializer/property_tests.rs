//! Laws that hold for any form tree: path composition, namespacing, order
//! preservation, empty-collection fallback and null normalization.

use bracketform::{
    FieldValue, Indexing, Node, Scalar, SerializeOptions,
    path::{self, Path, Segment},
};
use serde_json::json;

use crate::helpers::*;

fn fixtures() -> Vec<(&'static str, Node)> {
    vec![
        ("simple", simple_form()),
        ("attr", attr_form()),
        ("many", many_form()),
        ("mixed", mixed_form()),
        (
            "data",
            Node::from_data(json!({
                "title": "Hello",
                "tags": ["a", "b"],
                "author": { "name": "Ann", "links": [] },
                "rows": [{ "a": 1 }, { "a": 2 }]
            })),
        ),
    ]
}

#[test]
fn test_path_composition_law() {
    let a = path::extend(&Path::root(), Some("a"), None);
    assert_eq!(a.serialize(), "a");
    assert_eq!(path::extend(&a, Some("b"), None).serialize(), "a[b]");

    // Index lands before the name in a single extension
    let member = path::extend(&a, Some("x"), Some(Segment::Index(3)));
    assert_eq!(member.serialize(), "a[3][x]");
}

#[test]
fn test_extension_leaves_parent_untouched() {
    let parent = Path::seed(Some("form")).join("items");
    let first = parent.with_index(Segment::Index(0)).join("x");
    let second = parent.with_index(Segment::Index(1)).join("x");

    assert_eq!(parent.serialize(), "form[items]");
    assert_eq!(first.serialize(), "form[items][0][x]");
    assert_eq!(second.serialize(), "form[items][1][x]");
}

#[test]
fn test_namespacing_law() {
    for indexing in [Indexing::Explicit, Indexing::Implicit] {
        for (label, tree) in fixtures() {
            let plain = SerializeOptions::default().with_indexing(indexing);
            let prefixed = plain.clone().with_prefix("P");

            let without = serialize_with(&tree, &plain);
            let with = serialize_with(&tree, &prefixed);

            assert_eq!(without.len(), with.len(), "{label}");
            for (bare, namespaced_pair) in without.iter().zip(&with) {
                assert_eq!(
                    namespaced_pair.name,
                    namespaced("P", &bare.name),
                    "{label}"
                );
                assert_eq!(namespaced_pair.value, bare.value, "{label}");
            }
        }
    }
}

#[test]
fn test_map_order_preservation() {
    let node = Node::map([
        ("k3", Node::map([("x", Node::from(1)), ("y", Node::from(2))])),
        ("k1", Node::list(vec![Node::from(3), Node::from(4)])),
        ("k2", Node::from(5)),
    ]);
    assert_eq!(
        names(&serialize_default(&node)),
        vec!["k3[x]", "k3[y]", "k1[0]", "k1[1]", "k2"]
    );
}

#[test]
fn test_decoded_data_keeps_key_order() {
    let node = Node::from_data(json!({ "zeta": 1, "alpha": 2, "mid": 3 }));
    assert_eq!(
        names(&serialize_default(&node)),
        vec!["zeta", "alpha", "mid"]
    );
}

#[test]
fn test_child_order_preservation_in_groups() {
    let children: Vec<Node> = (0..20)
        .map(|i| Node::field("int", format!("f{i:02}"), i))
        .collect();
    let node = Node::attr("g", children);
    let expected: Vec<String> = (0..20).map(|i| format!("g[f{i:02}]")).collect();
    assert_eq!(names(&serialize_default(&node)), expected);
}

#[test]
fn test_empty_collection_fallback() {
    for prefix in [None, Some("form")] {
        let mut options = SerializeOptions::default();
        if let Some(prefix) = prefix {
            options = options.with_prefix(prefix);
        }
        let at = |name: &str| match prefix {
            Some(prefix) => namespaced(prefix, name),
            None => name.to_string(),
        };

        let list = Node::map([("p", Node::list(vec![]))]);
        let pairs = serialize_with(&list, &options);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, at("p"));
        assert!(pairs[0].value.is_empty());

        let many = Node::attr("p", vec![Node::many("q", vec![])]);
        let pairs = serialize_with(&many, &options);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].name, at("p[q]"));
        assert!(pairs[0].value.is_empty());
    }
}

#[test]
fn test_null_normalization() {
    let node = Node::group(vec![
        Node::field("string", "title", Scalar::Null),
        Node::field("date", "published", Option::<&str>::None),
        Node::map([("note", Node::null())]),
    ]);
    let pairs = serialize_default(&node);

    assert_eq!(names(&pairs), vec!["title", "published", "note"]);
    for pair in &pairs {
        assert_eq!(pair.value, FieldValue::empty(), "{}", pair.name);
    }
}

#[test]
fn test_one_pair_per_leaf() {
    let leaves = 7;
    let node = Node::many(
        "rows",
        (0..leaves)
            .map(|i| Node::list(vec![Node::field("int", "n", i)]))
            .collect(),
    );
    assert_eq!(serialize_default(&node).len(), leaves as usize);
}
