//! A line source over a string.

use std::io;

use crate::input::Input;

/// A line source over a borrowed string.
///
/// Lines are split on `\n`, `\r\n` and lone `\r`. Terminators stay attached to their line.
#[allow(clippy::module_name_repetitions)]
pub struct StrInput<'a> {
    /// The part of the input that has not been handed out yet.
    buffer: &'a str,
}

impl<'a> StrInput<'a> {
    /// Create a new [`StrInput`] with the given str.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self { buffer: input }
    }

    /// Split the next line off the buffer, terminator included.
    pub(crate) fn split_line(&mut self) -> Option<&'a str> {
        if self.buffer.is_empty() {
            return None;
        }
        let end = match self.buffer.find(['\n', '\r']) {
            Some(pos) if self.buffer[pos..].starts_with("\r\n") => pos + 2,
            Some(pos) => pos + 1,
            None => self.buffer.len(),
        };
        let (line, rest) = self.buffer.split_at(end);
        self.buffer = rest;
        Some(line)
    }
}

impl<'a> Iterator for StrInput<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.split_line()
    }
}

impl Input for StrInput<'_> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.split_line().map(str::to_owned))
    }
}
