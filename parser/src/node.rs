//! The in-memory representation of a parsed document.

#![allow(clippy::module_name_repetitions)]

use std::fmt;

use hashlink::LinkedHashMap;

/// The type contained in the [`Node::Sequence`] variant.
pub type Sequence = Vec<Node>;

/// The type contained in the [`Node::Mapping`] variant.
///
/// Keys are always scalars in the supported grammar, hence `String` keys. Insertion order is
/// preserved.
pub type Mapping = LinkedHashMap<String, Node>;

/// A parsed node.
///
/// There is no implicit typing: `33` is parsed as the scalar `"33"`. Empty nodes (a key with no
/// value, a `-` with nothing after it, an empty document) are represented as an empty scalar.
///
/// ```
/// # use yamlet_parser::{Node, Parser};
/// let node = Parser::new_from_str("name: Max\nage: 33").parse().unwrap();
/// assert_eq!(node["name"].as_str(), Some("Max"));
/// assert_eq!(node["age"].as_str(), Some("33"));
/// assert!(node.is_mapping());
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Node {
    /// A plain scalar, stored verbatim.
    Scalar(String),
    /// A block sequence.
    Sequence(Sequence),
    /// A block mapping.
    Mapping(Mapping),
}

/// The node standing for an absent value.
pub(crate) static EMPTY: Node = Node::Scalar(String::new());

impl Node {
    define_as_ref!(as_str, &str, Scalar);
    define_as_ref!(as_sequence, &Sequence, Sequence);
    define_as_ref!(as_mapping, &Mapping, Mapping);

    define_as_ref_mut!(as_sequence_mut, &mut Sequence, Sequence);
    define_as_ref_mut!(as_mapping_mut, &mut Mapping, Mapping);

    define_into!(into_string, String, Scalar);
    define_into!(into_sequence, Sequence, Sequence);
    define_into!(into_mapping, Mapping, Mapping);

    define_is!(is_scalar, Self::Scalar(_));
    define_is!(is_sequence, Self::Sequence(_));
    define_is!(is_mapping, Self::Mapping(_));

    /// Create an empty node.
    #[must_use]
    pub fn empty() -> Node {
        Node::Scalar(String::new())
    }

    /// Return whether the node is an empty scalar.
    #[must_use]
    pub fn is_empty_scalar(&self) -> bool {
        matches!(self, Node::Scalar(s) if s.is_empty())
    }

    /// Return the value associated to `key` if `self` is a mapping containing it.
    #[must_use]
    pub fn as_mapping_get(&self, key: &str) -> Option<&Node> {
        self.as_mapping().and_then(|mapping| mapping.get(key))
    }

    /// Return whether `self` is a mapping containing `key`.
    #[must_use]
    pub fn contains_mapping_key(&self, key: &str) -> bool {
        self.as_mapping_get(key).is_some()
    }

    /// Return the `idx`-th element if `self` is a sequence long enough.
    #[must_use]
    pub fn as_sequence_get(&self, idx: usize) -> Option<&Node> {
        self.as_sequence().and_then(|sequence| sequence.get(idx))
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Scalar(value.to_owned())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Scalar(value)
    }
}

impl From<Sequence> for Node {
    fn from(value: Sequence) -> Self {
        Node::Sequence(value)
    }
}

impl From<Mapping> for Node {
    fn from(value: Mapping) -> Self {
        Node::Mapping(value)
    }
}

impl<K: Into<String>, V: Into<Node>> FromIterator<(K, V)> for Node {
    /// Build a mapping. Later duplicates overwrite earlier values in place.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut mapping = Mapping::new();
        for (key, value) in iter {
            mapping.replace(key.into(), value.into());
        }
        Node::Mapping(mapping)
    }
}

/// Flow-style rendering: `{name: Max, friends: [Fritz, Moritz]}`.
///
/// Empty scalars are shown as `''`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Scalar(s) if s.is_empty() => f.write_str("''"),
            Node::Scalar(s) => f.write_str(s),
            Node::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Node::Mapping(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
