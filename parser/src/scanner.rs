//! Home to the YAML tokenizer.
//!
//! The tokenizer turns a line source into a lazy stream of [`Token`]s. Each physical line starts
//! with an [`Indentation`] token; the rest of the line is matched against an ordered table of
//! rules, the first matching rule winning. Two tables exist, one for block context and one for
//! flow context (inside `[...]` / `{...}`), and the tokenizer picks one from its [`LexContext`].
//!
//! [`Indentation`]: TokenKind::Indentation

use std::{collections::VecDeque, io};

use tracing::trace;

use crate::{
    char_traits::{
        is_anchor_char, is_blank, is_blank_or_break, is_blank_or_breakz, is_break, is_flow,
        is_indicator,
    },
    input::{str::StrInput, Input, LineInput},
    token::{Marker, Token, TokenKind},
};

/// The lexical context the tokenizer is in.
///
/// This selects the rule table used to match tokens. It is the only state carried from one line
/// to the next besides the line counter.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LexContext {
    /// Outside of any flow collection.
    #[default]
    Block,
    /// Inside `depth` nested flow collections (`depth > 0`).
    Flow {
        /// How many flow collections are open.
        depth: usize,
    },
}

impl LexContext {
    /// Whether flow indicators terminate plain scalars in this context.
    #[must_use]
    pub fn in_flow(self) -> bool {
        matches!(self, LexContext::Flow { .. })
    }

    /// The context after a token of the given kind has been emitted.
    ///
    /// A closing bracket in block context is left for the parser to reject.
    #[must_use]
    pub fn after(self, kind: TokenKind) -> LexContext {
        match (self, kind) {
            (LexContext::Block, k) if k.opens_flow() => LexContext::Flow { depth: 1 },
            (LexContext::Flow { depth }, k) if k.opens_flow() => {
                LexContext::Flow { depth: depth + 1 }
            }
            (LexContext::Flow { depth: 1 }, k) if k.closes_flow() => LexContext::Block,
            (LexContext::Flow { depth }, k) if k.closes_flow() => {
                LexContext::Flow { depth: depth - 1 }
            }
            (ctx, _) => ctx,
        }
    }

    fn rules(self) -> &'static [Rule] {
        if self.in_flow() {
            &INSIDE_FLOW
        } else {
            &OUTSIDE_FLOW
        }
    }
}

/// A position within the line being tokenized.
struct Cursor<'a> {
    line: &'a [char],
    pos: usize,
}

impl Cursor<'_> {
    /// Return the `n`-th character from the cursor, if it is within the line.
    #[inline]
    fn peek(&self, n: usize) -> Option<char> {
        self.line.get(self.pos + n).copied()
    }

    /// Return whether the next characters are exactly `pat`.
    #[inline]
    fn next_is(&self, pat: &str) -> bool {
        pat.chars().enumerate().all(|(i, c)| self.peek(i) == Some(c))
    }

    /// Return the character right before the cursor, if any.
    #[inline]
    fn prev(&self) -> Option<char> {
        self.pos.checked_sub(1).and_then(|p| self.line.get(p).copied())
    }

    /// Count the characters satisfying `pred`, starting `from` characters after the cursor.
    fn count_from(&self, from: usize, pred: impl Fn(char) -> bool) -> usize {
        self.line
            .get(self.pos + from..)
            .map_or(0, |rest| rest.iter().take_while(|&&c| pred(c)).count())
    }
}

/// A matcher returns the length (in characters) of the token it recognizes at the cursor.
type Matcher = fn(&Cursor<'_>) -> Option<usize>;

/// One entry of a rule table.
struct Rule {
    kind: TokenKind,
    matcher: Matcher,
}

const fn rule(kind: TokenKind, matcher: Matcher) -> Rule {
    Rule { kind, matcher }
}

/// Rules used outside of flow collections, in priority order.
static OUTSIDE_FLOW: [Rule; 18] = [
    rule(TokenKind::Newline, newline),
    rule(TokenKind::Comment, comment),
    rule(TokenKind::MappingValue, mapping_value_block),
    rule(TokenKind::SequenceEntry, sequence_entry),
    rule(TokenKind::ComplexMappingKey, complex_mapping_key),
    rule(TokenKind::Literal, literal),
    rule(TokenKind::Folded, folded),
    rule(TokenKind::SequenceStart, sequence_start),
    rule(TokenKind::SequenceEnd, sequence_end),
    rule(TokenKind::MappingStart, mapping_start),
    rule(TokenKind::MappingEnd, mapping_end),
    rule(TokenKind::Comma, comma),
    rule(TokenKind::Directive, directive),
    rule(TokenKind::EndOfDocument, end_of_document),
    rule(TokenKind::Anchor, anchor),
    rule(TokenKind::Alias, alias),
    rule(TokenKind::Tag, tag_block),
    rule(TokenKind::PlainScalar, plain_scalar_block),
];

/// Rules used inside flow collections, in priority order.
static INSIDE_FLOW: [Rule; 18] = [
    rule(TokenKind::Newline, newline),
    rule(TokenKind::Comment, comment),
    rule(TokenKind::MappingValue, mapping_value_flow),
    rule(TokenKind::SequenceEntry, sequence_entry),
    rule(TokenKind::ComplexMappingKey, complex_mapping_key),
    rule(TokenKind::Literal, literal),
    rule(TokenKind::Folded, folded),
    rule(TokenKind::SequenceStart, sequence_start),
    rule(TokenKind::SequenceEnd, sequence_end),
    rule(TokenKind::MappingStart, mapping_start),
    rule(TokenKind::MappingEnd, mapping_end),
    rule(TokenKind::Comma, comma),
    rule(TokenKind::Directive, directive),
    rule(TokenKind::EndOfDocument, end_of_document),
    rule(TokenKind::Anchor, anchor),
    rule(TokenKind::Alias, alias),
    rule(TokenKind::Tag, tag_flow),
    rule(TokenKind::PlainScalar, plain_scalar_flow),
];

fn newline(c: &Cursor<'_>) -> Option<usize> {
    match (c.peek(0)?, c.peek(1)) {
        ('\r', Some('\n')) => Some(2),
        (ch, _) if is_break(ch) => Some(1),
        _ => None,
    }
}

fn comment(c: &Cursor<'_>) -> Option<usize> {
    // YAML comments must be preceded by whitespace (or start the line).
    if c.peek(0)? != '#' || !c.prev().map_or(true, is_blank) {
        return None;
    }
    Some(1 + c.count_from(1, |ch| !is_break(ch)))
}

/// Match a single `indicator` that must be followed by a blank or the end of the line.
#[inline]
fn separated_indicator(c: &Cursor<'_>, indicator: char) -> Option<usize> {
    (c.peek(0)? == indicator && is_blank_or_breakz(c.peek(1))).then_some(1)
}

fn mapping_value_block(c: &Cursor<'_>) -> Option<usize> {
    separated_indicator(c, ':')
}

fn mapping_value_flow(c: &Cursor<'_>) -> Option<usize> {
    separated_indicator(c, ':').or_else(|| {
        (c.peek(0)? == ':' && c.peek(1).is_some_and(is_flow)).then_some(1)
    })
}

fn sequence_entry(c: &Cursor<'_>) -> Option<usize> {
    separated_indicator(c, '-')
}

fn complex_mapping_key(c: &Cursor<'_>) -> Option<usize> {
    separated_indicator(c, '?')
}

/// Match a block scalar header: `indicator` and an optional chomping indicator.
#[inline]
fn block_scalar_header(c: &Cursor<'_>, indicator: char) -> Option<usize> {
    if c.peek(0)? != indicator {
        return None;
    }
    match c.peek(1) {
        Some('+' | '-') => Some(2),
        _ => Some(1),
    }
}

fn literal(c: &Cursor<'_>) -> Option<usize> {
    block_scalar_header(c, '|')
}

fn folded(c: &Cursor<'_>) -> Option<usize> {
    block_scalar_header(c, '>')
}

#[inline]
fn single(c: &Cursor<'_>, ch: char) -> Option<usize> {
    (c.peek(0)? == ch).then_some(1)
}

fn sequence_start(c: &Cursor<'_>) -> Option<usize> {
    single(c, '[')
}

fn sequence_end(c: &Cursor<'_>) -> Option<usize> {
    single(c, ']')
}

fn mapping_start(c: &Cursor<'_>) -> Option<usize> {
    single(c, '{')
}

fn mapping_end(c: &Cursor<'_>) -> Option<usize> {
    single(c, '}')
}

fn comma(c: &Cursor<'_>) -> Option<usize> {
    single(c, ',')
}

/// Match a document marker (`---` or `...`) in the first column.
#[inline]
fn document_marker(c: &Cursor<'_>, marker: &str) -> Option<usize> {
    (c.pos == 0 && c.next_is(marker) && is_blank_or_breakz(c.peek(marker.len())))
        .then_some(marker.len())
}

fn directive(c: &Cursor<'_>) -> Option<usize> {
    document_marker(c, "---")
}

fn end_of_document(c: &Cursor<'_>) -> Option<usize> {
    document_marker(c, "...")
}

/// Match a node property (`&anchor`, `*alias`) with a non-empty name.
#[inline]
fn property(c: &Cursor<'_>, indicator: char) -> Option<usize> {
    if c.peek(0)? != indicator {
        return None;
    }
    match c.count_from(1, is_anchor_char) {
        0 => None,
        n => Some(1 + n),
    }
}

fn anchor(c: &Cursor<'_>) -> Option<usize> {
    property(c, '&')
}

fn alias(c: &Cursor<'_>) -> Option<usize> {
    property(c, '*')
}

fn tag_block(c: &Cursor<'_>) -> Option<usize> {
    (c.peek(0)? == '!').then(|| 1 + c.count_from(1, |ch| !is_blank_or_break(ch)))
}

fn tag_flow(c: &Cursor<'_>) -> Option<usize> {
    (c.peek(0)? == '!').then(|| 1 + c.count_from(1, |ch| !is_blank_or_break(ch) && !is_flow(ch)))
}

fn plain_scalar_block(c: &Cursor<'_>) -> Option<usize> {
    plain_scalar(c, false)
}

fn plain_scalar_flow(c: &Cursor<'_>) -> Option<usize> {
    plain_scalar(c, true)
}

/// Match a single-line plain scalar.
///
/// The head must not be an indicator, unless it is one of `-?:` followed by a "safe" character.
/// The tail may contain blanks, but never ends with one. `:` and `#` are only part of the scalar
/// when not followed by a blank (and, for `#`, not preceded by one). Inside flow collections, flow
/// indicators end the scalar.
fn plain_scalar(c: &Cursor<'_>, in_flow: bool) -> Option<usize> {
    let is_safe = |ch: Option<char>| !is_blank_or_breakz(ch) && !(in_flow && ch.is_some_and(is_flow));

    let head = c.peek(0)?;
    if is_blank_or_break(head) {
        return None;
    }
    if is_indicator(head) && !(matches!(head, '-' | '?' | ':') && is_safe(c.peek(1))) {
        return None;
    }

    let mut end = 1;
    let mut i = 1;
    while let Some(ch) = c.peek(i) {
        match ch {
            _ if is_break(ch) => break,
            _ if is_blank(ch) => {
                i += 1;
                continue;
            }
            ':' if !is_safe(c.peek(i + 1)) => break,
            '#' if is_blank(c.line[c.pos + i - 1]) || is_blank_or_breakz(c.peek(i + 1)) => break,
            _ if in_flow && is_flow(ch) => break,
            _ => {}
        }
        i += 1;
        end = i;
    }
    Some(end)
}

/// A lazy, forward-only tokenizer.
///
/// The tokenizer pulls physical lines from its [`Input`] on demand and yields one [`Token`] at a
/// time. Blanks between tokens are skipped. Characters that no rule matches are yielded as
/// single-character [`Unknown`] tokens; the tokenizer itself never fails on malformed input.
/// Only errors of the [`Input`] are reported, after which the tokenizer is exhausted.
///
/// ```
/// # use yamlet_parser::{TokenKind, Tokenizer};
/// let kinds: Vec<TokenKind> = Tokenizer::new_from_str("- a")
///     .map(|token| token.unwrap().kind())
///     .collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Indentation, TokenKind::SequenceEntry, TokenKind::PlainScalar]
/// );
/// ```
pub struct Tokenizer<I> {
    /// The source of lines.
    input: I,
    /// Physical lines split off a chunk returned by the input, not yet tokenized.
    pending: VecDeque<String>,
    /// The line being tokenized.
    line: Vec<char>,
    /// Index, in characters, of the next character to tokenize in `line`.
    pos: usize,
    /// The 1-indexed number of `line`; 0 before the first line is fetched.
    line_no: usize,
    /// Selects which rule table applies.
    context: LexContext,
    /// Set once the input is exhausted or failed.
    done: bool,
}

impl<I: Input> Tokenizer<I> {
    /// Create a new tokenizer over the given input.
    pub fn new(input: I) -> Self {
        Tokenizer {
            input,
            pending: VecDeque::new(),
            line: Vec::new(),
            pos: 0,
            line_no: 0,
            context: LexContext::Block,
            done: false,
        }
    }

    /// Return the current lexical context.
    #[must_use]
    pub fn context(&self) -> LexContext {
        self.context
    }

    /// Load the next physical line.
    ///
    /// # Return
    /// Returns `Ok(false)` if there are no more lines.
    fn fetch_line(&mut self) -> io::Result<bool> {
        if self.pending.is_empty() {
            let Some(chunk) = self.input.next_line()? else {
                return Ok(false);
            };
            // An input may hand out several physical lines at once (e.g.: a lone `\r` in a file).
            if chunk.is_empty() {
                self.pending.push_back(chunk);
            } else {
                self.pending.extend(StrInput::new(&chunk).map(str::to_owned));
            }
        }
        let Some(line) = self.pending.pop_front() else {
            return Ok(false);
        };
        self.line = line.chars().collect();
        self.pos = 0;
        self.line_no += 1;
        Ok(true)
    }

    /// Produce a token of `len` characters at the current position and move past it.
    fn emit(&mut self, kind: TokenKind, len: usize) -> Token {
        let start = self.pos;
        self.pos += len;
        let text: String = self.line[start..self.pos].iter().collect();
        Token::new(kind, text, Marker::new(self.line_no, start + 1))
    }

    /// Consume the leading blanks of a freshly fetched line.
    fn scan_indentation(&mut self) -> Token {
        let len = self.line.iter().take_while(|&&c| is_blank(c)).count();
        self.emit(TokenKind::Indentation, len)
    }

    fn skip_blanks(&mut self) {
        while self.line.get(self.pos).copied().is_some_and(is_blank) {
            self.pos += 1;
        }
    }

    /// Match the token at the current position against the active rule table.
    fn scan_token(&mut self) -> Token {
        let cursor = Cursor {
            line: &self.line,
            pos: self.pos,
        };
        let (kind, len) = self
            .context
            .rules()
            .iter()
            .find_map(|rule| (rule.matcher)(&cursor).map(|len| (rule.kind, len)))
            .filter(|&(_, len)| len > 0)
            .unwrap_or((TokenKind::Unknown, 1));

        let token = self.emit(kind, len);
        let context = self.context.after(kind);
        if context != self.context {
            trace!(from = ?self.context, to = ?context, at = %token.marker(), "lexical context switch");
            self.context = context;
        }
        token
    }
}

impl<'a> Tokenizer<StrInput<'a>> {
    /// Create a new tokenizer over the given string.
    #[must_use]
    pub fn new_from_str(source: &'a str) -> Self {
        Tokenizer::new(StrInput::new(source))
    }
}

impl<T, S> Tokenizer<LineInput<T>>
where
    T: Iterator<Item = S>,
    S: Into<String>,
{
    /// Create a new tokenizer over the given lines.
    pub fn new_from_lines<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = T>,
    {
        Tokenizer::new(LineInput::new(lines.into_iter()))
    }
}

impl<I: Input> Iterator for Tokenizer<I> {
    type Item = io::Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            self.skip_blanks();
            if self.pos < self.line.len() {
                return Some(Ok(self.scan_token()));
            }
            match self.fetch_line() {
                Ok(true) => return Some(Ok(self.scan_indentation())),
                Ok(false) => {
                    self.done = true;
                    return None;
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

impl<I: Input> std::iter::FusedIterator for Tokenizer<I> {}

/// Tokenize a whole string.
///
/// ```
/// # use yamlet_parser::{tokenize, TokenKind};
/// let tokens = tokenize("one: foo\ntwo: bar");
/// let colon = tokens
///     .iter()
///     .filter(|token| token.kind() == TokenKind::MappingValue)
///     .nth(1)
///     .unwrap();
/// assert_eq!((colon.line(), colon.col()), (2, 4));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token> {
    // Reading from a string cannot fail.
    Tokenizer::new_from_str(source)
        .filter_map(Result::ok)
        .collect()
}
