//! Holds functions to determine if a character belongs to a specific character set.

/// Check whether the character is a line break (`\r` or `\n`).
#[inline]
#[must_use]
pub fn is_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Check whether the character is a whitespace (` ` or `\t`).
#[inline]
#[must_use]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Check whether the character is a whitespace or a line break.
#[inline]
#[must_use]
pub fn is_blank_or_break(c: char) -> bool {
    is_blank(c) || is_break(c)
}

/// Check whether the (optional) character ends a word: a blank, a line break or the end of the
/// line.
///
/// `None` stands for "past the end of the current line".
#[inline]
#[must_use]
pub fn is_blank_or_breakz(c: Option<char>) -> bool {
    c.map_or(true, is_blank_or_break)
}

/// Check whether the character is a YAML flow character (one of `,[]{}`).
#[inline]
#[must_use]
pub fn is_flow(c: char) -> bool {
    matches!(c, ',' | '[' | ']' | '{' | '}')
}

/// Check whether the character is a YAML indicator.
///
/// Indicators cannot start a plain scalar, with the exception of `-`, `?` and `:` when they are
/// directly followed by a "safe" character.
#[inline]
#[must_use]
pub fn is_indicator(c: char) -> bool {
    matches!(
        c,
        '-' | '?'
            | ':'
            | ','
            | '['
            | ']'
            | '{'
            | '}'
            | '#'
            | '&'
            | '*'
            | '!'
            | '|'
            | '>'
            | '\''
            | '"'
            | '%'
            | '@'
            | '`'
    )
}

/// Check whether the character is a valid YAML anchor name character.
#[inline]
#[must_use]
pub fn is_anchor_char(c: char) -> bool {
    !is_blank_or_break(c) && !is_flow(c) && c != '\u{FEFF}'
}
