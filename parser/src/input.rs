//! Sources of physical lines for the [`Tokenizer`].
//!
//! [`Tokenizer`]: crate::Tokenizer

pub mod lines;
pub mod reader;
pub mod str;

#[allow(clippy::module_name_repetitions)]
pub use lines::LineInput;
#[allow(clippy::module_name_repetitions)]
pub use reader::ReaderInput;

use std::io;

/// Interface for a source of physical lines.
///
/// The tokenizer pulls lines on demand, one at a time, and never asks for a line before it has
/// finished tokenizing the previous one. Hiding the source behind this trait allows tokenizing a
/// string, an iterator of lines or a reader with the same code.
pub trait Input {
    /// Fetch the next physical line.
    ///
    /// The returned line must keep its terminator (`\n`, `\r\n` or `\r`), if it had one. Only the
    /// last line of a source may lack a terminator.
    ///
    /// # Return
    /// Returns `Ok(None)` once the source is exhausted. Implementors must keep returning
    /// `Ok(None)` on subsequent calls.
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be read (e.g.: invalid UTF-8 in a file).
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: Input + ?Sized> Input for &mut T {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}

impl<T: Input + ?Sized> Input for Box<T> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        (**self).next_line()
    }
}
