//! A line source over a buffered reader.

use std::io::{self, BufRead};

use crate::input::Input;

/// A line source over a [`BufRead`]er.
///
/// Lines are read one at a time with [`BufRead::read_line`], so only the line being tokenized
/// is held in memory. The reader must yield UTF-8; anything else is reported as an
/// [`io::ErrorKind::InvalidData`] error.
#[allow(clippy::module_name_repetitions)]
pub struct ReaderInput<R> {
    /// The reader source.
    reader: R,
    /// Set once the reader returned EOF or an error.
    done: bool,
}

impl<R: BufRead> ReaderInput<R> {
    /// Create a new [`ReaderInput`] with the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Input for ReaderInput<R> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        if self.done {
            return Ok(None);
        }
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                self.done = true;
                Ok(None)
            }
            Ok(_) => Ok(Some(line)),
            Err(e) => {
                self.done = true;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::ReaderInput;
    use crate::input::Input;

    #[test]
    fn reads_lines_with_terminators() {
        let mut input = ReaderInput::new("a: 1\r\nb: 2\nc".as_bytes());
        assert_eq!(input.next_line().unwrap().as_deref(), Some("a: 1\r\n"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("b: 2\n"));
        assert_eq!(input.next_line().unwrap().as_deref(), Some("c"));
        assert_eq!(input.next_line().unwrap(), None);
        assert_eq!(input.next_line().unwrap(), None);
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let bytes: &[u8] = &[b'a', b':', b' ', 0xff, 0xfe, b'\n'];
        let mut input = ReaderInput::new(bytes);
        assert_eq!(
            input.next_line().unwrap_err().kind(),
            std::io::ErrorKind::InvalidData
        );
        assert_eq!(input.next_line().unwrap(), None);
    }
}
