//! A line source over an iterator of lines.

use std::io;

use crate::input::Input;

/// A line source over an [`Iterator`] of lines.
///
/// Each item of the iterator is one physical line. Items should keep their terminator; the
/// tokenizer relies on terminators to emit `newline` tokens.
///
/// ```
/// # use yamlet_parser::{Node, Parser};
/// let lines = vec!["- a\n", "- b\n"];
/// let node = Parser::new_from_lines(lines).parse().unwrap();
/// assert_eq!(node, Node::Sequence(vec!["a".into(), "b".into()]));
/// ```
#[allow(clippy::module_name_repetitions)]
pub struct LineInput<T> {
    /// The iterator source.
    input: T,
}

impl<T, S> LineInput<T>
where
    T: Iterator<Item = S>,
    S: Into<String>,
{
    /// Create a new [`LineInput`] with the given iterator.
    pub fn new(input: T) -> Self {
        Self { input }
    }
}

impl<T, S> Input for LineInput<T>
where
    T: Iterator<Item = S>,
    S: Into<String>,
{
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.next().map(Into::into))
    }
}
