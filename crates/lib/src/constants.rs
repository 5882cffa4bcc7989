//! Constants used throughout the bracketform library.
//!
//! Tag names for the built-in field types, keys of the JSON AST encoding and
//! serializer defaults.

/// Tag of a group that nests its children under one name.
pub const ATTR: &str = "attr";

/// Tag of a repeatable group.
pub const MANY: &str = "many";

/// Tags of organizational wrappers that contribute nothing to field names.
pub const PASS_THROUGH_TAGS: &[&str] = &["group", "section", "compound", "compound_field"];

/// Tags of the built-in leaf field types.
pub const LEAF_TAGS: &[&str] = &[
    // Primitive types
    "bool",
    "int",
    "date",
    "date_time",
    "decimal",
    "float",
    "string",
    "text",
    "number",
    "boolean",
    "selection",
    "upload",
    // Form-builder display types
    "check_box",
    "date_field",
    "date_time_field",
    "hidden_field",
    "number_field",
    "radio_buttons",
    "select_box",
    "selection_field",
    "multi_selection_field",
    "text_field",
    "text_area",
    "rich_text_area",
    "upload_field",
    "multi_upload_field",
    "tags_field",
    "search_selection_field",
    "search_multi_selection_field",
];

/// Key holding the type tag of a JSON-encoded AST node.
pub const TYPE_KEY: &str = "type";

/// Key holding the field name of a JSON-encoded AST node.
pub const NAME_KEY: &str = "name";

/// Key holding the leaf value of a JSON-encoded AST node.
pub const VALUE_KEY: &str = "value";

/// Key holding the children of a JSON-encoded AST node.
pub const CHILDREN_KEY: &str = "children";

/// Key of the placeholder field emitted ahead of each map in a list when the
/// list-of-maps marker is enabled. Rack needs it to tell a list of maps from a
/// map (rack/rack#951).
pub const LIST_MAP_MARKER: &str = "__rack_workaround";

/// Default nesting limit for a single serialization call.
pub const DEFAULT_MAX_DEPTH: usize = 128;
