//! Loading documents from strings, readers and files.

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    sync::Arc,
};

use thiserror::Error;
use tracing::debug;
use yamlet_parser::{ErrorKind, Node, ParseError, Parser, ReaderInput};

/// An error that happened when loading a document.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// An I/O error, including invalid UTF-8 in the input.
    #[error("{0}")]
    Io(Arc<io::Error>),
    /// The input does not follow the supported grammar.
    #[error(transparent)]
    Parse(ParseError),
}

impl From<io::Error> for LoadError {
    fn from(error: io::Error) -> Self {
        LoadError::Io(Arc::new(error))
    }
}

impl From<ParseError> for LoadError {
    /// Failures of the line source are reported as [`LoadError::Io`].
    fn from(error: ParseError) -> Self {
        match error.kind() {
            ErrorKind::Io(e) => LoadError::Io(Arc::clone(e)),
            _ => LoadError::Parse(error),
        }
    }
}

/// Load a document from a string.
///
/// # Errors
/// Returns `LoadError::Parse` if the input is not a valid document.
pub fn load_from_str(source: &str) -> Result<Node, LoadError> {
    Ok(Parser::new_from_str(source).parse()?)
}

/// Load a document from a reader, one line at a time.
///
/// # Errors
/// Returns `LoadError::Io` if the reader fails or yields invalid UTF-8, `LoadError::Parse` if the
/// input is not a valid document.
pub fn load_from_reader<R: BufRead>(reader: R) -> Result<Node, LoadError> {
    Ok(Parser::new(ReaderInput::new(reader)).parse()?)
}

/// Load a document from a file.
///
/// ```no_run
/// let doc = yamlet::load_from_file("config.yaml").unwrap();
/// println!("{doc}");
/// ```
///
/// # Errors
/// Returns `LoadError::Io` if the file cannot be opened or read, `LoadError::Parse` if its
/// contents are not a valid document.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Node, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading file");
    let file = File::open(path)?;
    load_from_reader(BufReader::new(file))
}
