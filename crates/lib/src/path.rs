//! Field paths and bracketed name serialization.
//!
//! A [`Path`] is the ordered list of [`Segment`]s accumulated while walking a
//! form tree. Serialized, the first segment renders bare and every following
//! segment is wrapped in brackets, which is the convention most backend
//! parameter parsers use to rebuild nested structures:
//!
//! ```rust
//! use bracketform::path::{Path, Segment};
//!
//! let path = Path::seed(Some("user"))
//!     .join("addresses")
//!     .with_index(Segment::Index(0))
//!     .join("street");
//! assert_eq!(path.serialize(), "user[addresses][0][street]");
//!
//! // Placeholders leave index assignment to the backend
//! let path = Path::root().join("tags").with_index(Segment::Placeholder);
//! assert_eq!(path.serialize(), "tags[]");
//! ```
//!
//! Paths are values. Every extension returns a new path and leaves the
//! receiver untouched, so sibling subtrees never observe each other's segments.

use std::fmt;

/// One atomic component of an accumulated field name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A field name or map key.
    Name(String),
    /// A zero-based repetition index.
    Index(usize),
    /// The empty index `[]`, asking the backend to append.
    Placeholder,
}

impl Segment {
    /// Builds a name segment.
    pub fn name(name: impl Into<String>) -> Self {
        Segment::Name(name.into())
    }

    /// Returns true for [`Segment::Index`] and [`Segment::Placeholder`].
    pub fn is_index(&self) -> bool {
        matches!(self, Segment::Index(_) | Segment::Placeholder)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Name(name) => f.write_str(name),
            Segment::Index(index) => write!(f, "{index}"),
            Segment::Placeholder => Ok(()),
        }
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Segment::Name(name.to_string())
    }
}

impl From<String> for Segment {
    fn from(name: String) -> Self {
        Segment::Name(name)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// An ordered, immutable sequence of path segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<Segment>,
}

impl Path {
    /// The empty path.
    pub fn root() -> Self {
        Self::default()
    }

    /// Seeds the root path with an optional namespace prefix.
    ///
    /// Returns `[prefix]` for a non-empty prefix and the empty path otherwise.
    ///
    /// ```rust
    /// # use bracketform::path::Path;
    /// assert_eq!(Path::seed(Some("form")).serialize(), "form");
    /// assert!(Path::seed(Some("")).is_empty());
    /// assert!(Path::seed(None).is_empty());
    /// ```
    pub fn seed(prefix: Option<&str>) -> Self {
        match prefix {
            Some(prefix) if !prefix.is_empty() => Self {
                segments: vec![Segment::name(prefix)],
            },
            _ => Self::root(),
        }
    }

    /// Returns a new path extended by an optional index and an optional name.
    ///
    /// The index lands before the name, so a repeated member's position sits
    /// between its group and its own field: `many[0][child_field]`.
    pub fn extend(&self, name: Option<&str>, index: Option<Segment>) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 2);
        segments.extend_from_slice(&self.segments);
        if let Some(index) = index {
            segments.push(index);
        }
        if let Some(name) = name {
            segments.push(Segment::name(name));
        }
        Self { segments }
    }

    /// Returns a new path with `name` appended.
    pub fn join(&self, name: impl AsRef<str>) -> Self {
        self.extend(Some(name.as_ref()), None)
    }

    /// Returns a new path with an index segment appended.
    pub fn with_index(&self, index: Segment) -> Self {
        self.extend(None, Some(index))
    }

    /// Returns the segments of this path in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the path has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the last segment, or `None` at the root.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// Renders the bracketed field name, e.g. `user[profile][name]`.
    pub fn serialize(&self) -> String {
        serialize_name(&self.segments)
    }
}

impl FromIterator<Segment> for Path {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Segment>> for Path {
    fn from(segments: Vec<Segment>) -> Self {
        Self { segments }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "(root)")
        } else {
            f.write_str(&self.serialize())
        }
    }
}

/// Free-function form of [`Path::extend`].
pub fn extend(path: &Path, name: Option<&str>, index: Option<Segment>) -> Path {
    path.extend(name, index)
}

/// Free-function form of [`Path::seed`].
pub fn seed(prefix: Option<&str>) -> Path {
    Path::seed(prefix)
}

/// Joins segments into a bracketed name.
///
/// The empty slice renders as the empty string.
///
/// ```rust
/// # use bracketform::path::{serialize_name, Segment};
/// let segments = [Segment::name("foo"), Segment::name("bar"), Segment::Index(2)];
/// assert_eq!(serialize_name(&segments), "foo[bar][2]");
/// assert_eq!(serialize_name(&[]), "");
/// ```
pub fn serialize_name(segments: &[Segment]) -> String {
    let mut name = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i == 0 {
            name.push_str(&segment.to_string());
        } else {
            name.push('[');
            name.push_str(&segment.to_string());
            name.push(']');
        }
    }
    name
}
