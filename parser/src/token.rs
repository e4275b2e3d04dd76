//! Tokens produced by the [`Tokenizer`].
//!
//! [`Tokenizer`]: crate::Tokenizer

use std::fmt;

/// The kind of a [`Token`].
///
/// This is a closed set: every character of the input ends up in a token of one of these kinds,
/// or in a blank separating two tokens.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Leading blanks of a physical line. Emitted for every line, possibly empty.
    Indentation,
    /// A line terminator (`\n`, `\r\n` or `\r`).
    Newline,
    /// A `#` comment, up to the end of the line.
    Comment,
    /// A `:` followed by a blank or the end of the line.
    MappingValue,
    /// A `-` followed by a blank or the end of the line.
    SequenceEntry,
    /// A `?` followed by a blank or the end of the line.
    ComplexMappingKey,
    /// A `|` block scalar header, with its optional chomping indicator.
    Literal,
    /// A `>` block scalar header, with its optional chomping indicator.
    Folded,
    /// `[`
    SequenceStart,
    /// `]`
    SequenceEnd,
    /// `{`
    MappingStart,
    /// `}`
    MappingEnd,
    /// `,`
    Comma,
    /// `---` at the start of a line.
    Directive,
    /// `...` at the start of a line.
    EndOfDocument,
    /// `&name`
    Anchor,
    /// `*name`
    Alias,
    /// `!tag`
    Tag,
    /// An unquoted scalar.
    PlainScalar,
    /// A character no other rule matched.
    Unknown,
}

impl TokenKind {
    /// All token kinds, in declaration order.
    pub const ALL: [TokenKind; 20] = [
        TokenKind::Indentation,
        TokenKind::Newline,
        TokenKind::Comment,
        TokenKind::MappingValue,
        TokenKind::SequenceEntry,
        TokenKind::ComplexMappingKey,
        TokenKind::Literal,
        TokenKind::Folded,
        TokenKind::SequenceStart,
        TokenKind::SequenceEnd,
        TokenKind::MappingStart,
        TokenKind::MappingEnd,
        TokenKind::Comma,
        TokenKind::Directive,
        TokenKind::EndOfDocument,
        TokenKind::Anchor,
        TokenKind::Alias,
        TokenKind::Tag,
        TokenKind::PlainScalar,
        TokenKind::Unknown,
    ];

    /// The stable, `snake_case` name of the kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Indentation => "indentation",
            TokenKind::Newline => "newline",
            TokenKind::Comment => "comment",
            TokenKind::MappingValue => "mapping_value",
            TokenKind::SequenceEntry => "sequence_entry",
            TokenKind::ComplexMappingKey => "complex_mapping_key",
            TokenKind::Literal => "literal",
            TokenKind::Folded => "folded",
            TokenKind::SequenceStart => "sequence_start",
            TokenKind::SequenceEnd => "sequence_end",
            TokenKind::MappingStart => "mapping_start",
            TokenKind::MappingEnd => "mapping_end",
            TokenKind::Comma => "comma",
            TokenKind::Directive => "directive",
            TokenKind::EndOfDocument => "end_of_document",
            TokenKind::Anchor => "anchor",
            TokenKind::Alias => "alias",
            TokenKind::Tag => "tag",
            TokenKind::PlainScalar => "plain_scalar",
            TokenKind::Unknown => "unknown",
        }
    }

    /// Whether tokens of this kind open a flow collection.
    #[must_use]
    pub fn opens_flow(self) -> bool {
        matches!(self, TokenKind::SequenceStart | TokenKind::MappingStart)
    }

    /// Whether tokens of this kind close a flow collection.
    #[must_use]
    pub fn closes_flow(self) -> bool {
        matches!(self, TokenKind::SequenceEnd | TokenKind::MappingEnd)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A location in the input.
///
/// Both fields are 1-based. The column counts characters (not bytes) from the start of the line.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
pub struct Marker {
    /// The line (1-indexed).
    line: usize,
    /// The column (1-indexed).
    col: usize,
}

impl Marker {
    /// Create a new [`Marker`] at the given position.
    #[must_use]
    pub fn new(line: usize, col: usize) -> Marker {
        Marker { line, col }
    }

    /// Return the line of the marker.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Return the column of the marker.
    #[must_use]
    pub fn col(&self) -> usize {
        self.col
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.col)
    }
}

/// A lexical token: its kind, the exact text it matched and where it starts.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Token {
    kind: TokenKind,
    text: String,
    marker: Marker,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, marker: Marker) -> Token {
        Token {
            kind,
            text: text.into(),
            marker,
        }
    }

    /// Return the kind of the token.
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Return the exact text the token matched.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the token, returning its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Return the position of the first character of the token.
    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Return the line the token starts on (1-indexed).
    #[must_use]
    pub fn line(&self) -> usize {
        self.marker.line
    }

    /// Return the column the token starts on (1-indexed).
    #[must_use]
    pub fn col(&self) -> usize {
        self.marker.col
    }

    /// Whether the token is of the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// The width of an [`Indentation`] token, in characters.
    ///
    /// [`Indentation`]: TokenKind::Indentation
    #[must_use]
    pub fn indentation_width(&self) -> usize {
        self.text.chars().count()
    }

    /// The name of an [`Anchor`] token, without its leading `&`.
    ///
    /// [`Anchor`]: TokenKind::Anchor
    #[must_use]
    pub fn anchor_name(&self) -> &str {
        self.text.strip_prefix('&').unwrap_or(&self.text)
    }

    /// The name of an [`Alias`] token, without its leading `*`.
    ///
    /// [`Alias`]: TokenKind::Alias
    #[must_use]
    pub fn alias_name(&self) -> &str {
        self.text.strip_prefix('*').unwrap_or(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" at {}",
            self.kind,
            self.text.escape_debug(),
            self.marker
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = TokenKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), TokenKind::ALL.len());
    }

    #[test]
    fn display() {
        let token = Token::new(TokenKind::PlainScalar, "foo", Marker::new(2, 5));
        assert_eq!(token.to_string(), "plain_scalar \"foo\" at line 2 column 5");
        let token = Token::new(TokenKind::Newline, "\n", Marker::new(1, 9));
        assert_eq!(token.to_string(), "newline \"\\n\" at line 1 column 9");
    }

    #[test]
    fn names_of_properties() {
        let anchor = Token::new(TokenKind::Anchor, "&foo", Marker::new(1, 1));
        assert_eq!(anchor.anchor_name(), "foo");
        let alias = Token::new(TokenKind::Alias, "*foo", Marker::new(1, 1));
        assert_eq!(alias.alias_name(), "foo");
        let indent = Token::new(TokenKind::Indentation, " \t ", Marker::new(1, 1));
        assert_eq!(indent.indentation_width(), 3);
    }
}
