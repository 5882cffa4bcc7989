//! Rendering serialized fields for submission.
//!
//! Two output forms are provided: hidden `<input>` elements to embed in an
//! HTML form, and an `application/x-www-form-urlencoded` body to POST
//! directly.
//!
//! ```
//! use bracketform::{render, serializer::FieldPair};
//!
//! let pairs = vec![
//!     FieldPair::new("user[name]", "Bob & Alice"),
//!     FieldPair::new("user[age]", 42),
//! ];
//!
//! assert_eq!(
//!     render::hidden_inputs(&pairs),
//!     "<input type=\"hidden\" name=\"user[name]\" value=\"Bob &amp; Alice\">\n\
//!      <input type=\"hidden\" name=\"user[age]\" value=\"42\">"
//! );
//! assert_eq!(
//!     render::form_urlencoded(&pairs),
//!     "user%5Bname%5D=Bob+%26+Alice&user%5Bage%5D=42"
//! );
//! ```

use url::form_urlencoded;

use crate::serializer::FieldPair;

/// Renders one hidden input per pair, newline separated.
pub fn hidden_inputs(pairs: &[FieldPair]) -> String {
    pairs
        .iter()
        .map(hidden_input)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders a single `<input type="hidden">` element.
pub fn hidden_input(pair: &FieldPair) -> String {
    format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
        escape_attribute(&pair.name),
        escape_attribute(&pair.value.to_string())
    )
}

/// Encodes the pairs as an `application/x-www-form-urlencoded` body.
pub fn form_urlencoded(pairs: &[FieldPair]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for pair in pairs {
        serializer.append_pair(&pair.name, &pair.value.to_string());
    }
    serializer.finish()
}

/// Escapes text for use inside a double-quoted HTML attribute.
pub fn escape_attribute(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            c => escaped.push(c),
        }
    }
    escaped
}
