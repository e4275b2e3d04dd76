//! Errors raised while parsing.

use std::{fmt, io, sync::Arc};

use thiserror::Error;

use crate::token::{Marker, Token, TokenKind};

/// What went wrong.
#[derive(Clone, Debug, Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The token at hand does not fit the rule being parsed.
    #[error("expected {expected}")]
    UnexpectedToken {
        /// A description of what the grammar would have accepted.
        expected: &'static str,
    },
    /// An alias refers to an anchor that has not been defined (yet).
    #[error("undefined alias `{0}`")]
    UndefinedAlias(String),
    /// An entry is indented deeper than its block without opening a nested value.
    #[error("bad indentation")]
    BadIndentation,
    /// Too many nested blocks.
    #[error("exceeded the maximum nesting depth of {0}")]
    DepthLimit(usize),
    /// A mapping key is longer than allowed.
    #[error("mapping key longer than {0} characters")]
    KeyTooLong(usize),
    /// A construct the tokenizer recognizes but the grammar does not support.
    #[error("{0} are not supported")]
    Unsupported(&'static str),
    /// The line source failed.
    #[error("I/O error: {0}")]
    Io(Arc<io::Error>),
}

impl ErrorKind {
    /// The construct a token of the given kind introduces, if the grammar rejects it.
    pub(crate) fn unsupported(kind: TokenKind) -> Option<ErrorKind> {
        let what = match kind {
            TokenKind::ComplexMappingKey => "complex mapping keys",
            TokenKind::Literal | TokenKind::Folded => "block scalars",
            TokenKind::SequenceStart | TokenKind::MappingStart => "flow collections",
            _ => return None,
        };
        Some(ErrorKind::Unsupported(what))
    }
}

/// A parse failure.
///
/// Carries the token the parser was looking at and the one after it, if any. No partial tree is
/// ever returned alongside it.
#[derive(Clone, Debug)]
pub struct ParseError {
    /// Boxed so that `Result<Node, ParseError>` stays small in every recursive frame.
    inner: Box<ErrorImpl>,
}

#[derive(Clone, Debug)]
struct ErrorImpl {
    kind: ErrorKind,
    current: Option<Token>,
    lookahead: Option<Token>,
}

impl ParseError {
    /// Create a new error.
    #[must_use]
    pub fn new(kind: ErrorKind, current: Option<Token>, lookahead: Option<Token>) -> ParseError {
        ParseError {
            inner: Box::new(ErrorImpl {
                kind,
                current,
                lookahead,
            }),
        }
    }

    /// Return what went wrong.
    #[must_use]
    pub fn kind(&self) -> &ErrorKind {
        &self.inner.kind
    }

    /// Return the token the parser failed at, or `None` at the end of the input.
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        self.inner.current.as_ref()
    }

    /// Return the token following [`Self::current`], if any.
    #[must_use]
    pub fn lookahead(&self) -> Option<&Token> {
        self.inner.lookahead.as_ref()
    }

    /// Return the position of the failing token, if there is one.
    #[must_use]
    pub fn marker(&self) -> Option<Marker> {
        self.current().map(Token::marker)
    }
}

impl From<io::Error> for ParseError {
    fn from(error: io::Error) -> Self {
        ParseError::new(ErrorKind::Io(Arc::new(error)), None, None)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind() {
            ErrorKind::Io(e) => Some(&**e),
            _ => None,
        }
    }
}

/// Writes a token, or `end of input` in its absence.
struct OrEnd<'a>(Option<&'a Token>);

impl fmt::Display for OrEnd<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(token) => fmt::Display::fmt(token, f),
            None => f.write_str("end of input"),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: parse failed at {}, next token is {}",
            self.kind(),
            OrEnd(self.current()),
            OrEnd(self.lookahead())
        )
    }
}
