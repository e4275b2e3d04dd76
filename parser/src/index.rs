//! Indexing into [`Node`]s without panicking.

use std::ops::Index;

use crate::node::{Node, EMPTY};

/// A trait to index without panicking into a structure through an [`Accessor`].
///
/// This is similar to [`Index`]ing, except that the [`get`] method returns [`None`] rather than an
/// empty node when the requested element does not exist.
///
/// ```
/// # use yamlet_parser::{parse_from_text, SafelyIndex};
/// let node = parse_from_text("a:\n  - x\n  - y").unwrap();
/// assert_eq!(node.get("a").get(1).and_then(|n| n.as_str()), Some("y"));
/// assert!(node.get("b").is_none());
/// ```
///
/// [`get`]: SafelyIndex::get
pub trait SafelyIndex<T = Self> {
    /// Access an element of `self`.
    ///
    /// # Return
    /// If the given index is valid within `self`, [`Some`] is returned with a reference to the
    /// indexed node. If `self` is not indexable or the index is out of bounds, this function
    /// returns [`None`].
    fn get(&self, key: impl Into<Accessor>) -> Option<&T>;
}

/// A trait to index mutably without panicking into a structure through an [`Accessor`].
pub trait SafelyIndexMut<T = Self> {
    /// Access an element of `self` (mutable).
    ///
    /// See [`SafelyIndex::get`].
    fn get_mut(&mut self, key: impl Into<Accessor>) -> Option<&mut T>;
}

/// A [`SafelyIndex`] / [`SafelyIndexMut`] accessor.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Accessor {
    /// A key of a mapping.
    Field(String),
    /// An element of a sequence. On a mapping, the key with the same decimal representation.
    Index(usize),
}

impl From<usize> for Accessor {
    fn from(val: usize) -> Self {
        Accessor::Index(val)
    }
}

impl From<String> for Accessor {
    fn from(val: String) -> Self {
        Accessor::Field(val)
    }
}

impl From<&str> for Accessor {
    fn from(val: &str) -> Self {
        Accessor::Field(val.to_owned())
    }
}

impl SafelyIndex for Node {
    fn get(&self, key: impl Into<Accessor>) -> Option<&Node> {
        match (self, key.into()) {
            (Node::Sequence(sequence), Accessor::Index(idx)) => sequence.get(idx),
            (Node::Mapping(mapping), Accessor::Field(key)) => mapping.get(&key),
            (Node::Mapping(mapping), Accessor::Index(idx)) => mapping.get(&idx.to_string()),
            _ => None,
        }
    }
}

impl SafelyIndexMut for Node {
    fn get_mut(&mut self, key: impl Into<Accessor>) -> Option<&mut Node> {
        match (self, key.into()) {
            (Node::Sequence(sequence), Accessor::Index(idx)) => sequence.get_mut(idx),
            (Node::Mapping(mapping), Accessor::Field(key)) => mapping.get_mut(&key),
            (Node::Mapping(mapping), Accessor::Index(idx)) => mapping.get_mut(&idx.to_string()),
            _ => None,
        }
    }
}

impl<T: SafelyIndex> SafelyIndex<T> for Option<&T> {
    fn get(&self, key: impl Into<Accessor>) -> Option<&T> {
        self.and_then(|data| data.get(key))
    }
}

impl<T: SafelyIndexMut> SafelyIndexMut<T> for Option<&mut T> {
    fn get_mut(&mut self, key: impl Into<Accessor>) -> Option<&mut T> {
        self.as_mut().and_then(|data| data.get_mut(key))
    }
}

/// Index into a mapping. Missing keys and non-mappings yield an empty scalar.
impl<'a> Index<&'a str> for Node {
    type Output = Node;

    fn index(&self, idx: &'a str) -> &Node {
        self.get(idx).unwrap_or(&EMPTY)
    }
}

/// Index into a sequence. Out-of-range indices and non-sequences yield an empty scalar.
impl Index<usize> for Node {
    type Output = Node;

    fn index(&self, idx: usize) -> &Node {
        self.get(idx).unwrap_or(&EMPTY)
    }
}
