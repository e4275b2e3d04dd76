//! Colourised rendering of token streams.
//!
//! Each token is written verbatim, wrapped in an ANSI style chosen from its kind, and followed by
//! a space unless it ends a line. Line breaks are preceded by a visible `\n` marker. The output
//! is meant for a terminal and is not parsable back.

use std::{fmt, io};

use yamlet_parser::{Input, Token, TokenKind, Tokenizer};

/// Reset both the background and the foreground colour.
const RESET: &str = "\x1b[49m\x1b[39m";

/// The ANSI escape sequence a token of the given kind is rendered with.
#[must_use]
pub fn style(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::Indentation | TokenKind::Newline => "\x1b[46m",
        TokenKind::Comment => "\x1b[104m",
        TokenKind::MappingValue
        | TokenKind::SequenceEntry
        | TokenKind::ComplexMappingKey
        | TokenKind::Directive
        | TokenKind::EndOfDocument => "\x1b[41m",
        TokenKind::SequenceStart
        | TokenKind::SequenceEnd
        | TokenKind::MappingStart
        | TokenKind::MappingEnd
        | TokenKind::Comma => "\x1b[43m\x1b[34m",
        TokenKind::Anchor | TokenKind::Alias => "\x1b[44m",
        TokenKind::Literal | TokenKind::Folded => "\x1b[45m",
        TokenKind::PlainScalar => "\x1b[42m",
        TokenKind::Tag => "\x1b[101m\x1b[36m",
        TokenKind::Unknown => "",
    }
}

/// Write a single token.
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn render_token<W: fmt::Write>(token: &Token, out: &mut W) -> fmt::Result {
    out.write_str(style(token.kind()))?;
    if token.is(TokenKind::Newline) {
        out.write_str("\\n")?;
    }
    out.write_str(token.text())?;
    out.write_str(RESET)?;
    if !token.text().ends_with(['\n', '\r']) {
        out.write_char(' ')?;
    }
    Ok(())
}

/// Render the tokens of a string.
///
/// ```
/// let out = yamlet::pretty::render("a: b");
/// assert!(out.contains("\x1b[42ma\x1b[49m\x1b[39m "));
/// ```
#[must_use]
pub fn render(source: &str) -> String {
    let mut out = String::new();
    for token in yamlet_parser::tokenize(source) {
        push_token(&token, &mut out);
    }
    out
}

/// Render the tokens of an input.
///
/// # Errors
/// Returns an error if the input fails to be read.
pub fn render_input<I: Input>(input: I) -> io::Result<String> {
    let mut out = String::new();
    for token in Tokenizer::new(input) {
        push_token(&token?, &mut out);
    }
    Ok(out)
}

/// Append a rendered token to `out`.
fn push_token(token: &Token, out: &mut String) {
    // `fmt::Write` for `String` never returns an error.
    let _ = render_token(token, out);
}
