//! Home to the recursive-descent [`Parser`].
//!
//! The grammar is a subset of the YAML 1.2 block grammar: block mappings with plain scalar keys,
//! block sequences, plain scalars, anchors and aliases, and an optional `---` marker before the
//! single document. Each rule returns `Ok(Some(node))` when it matched, `Ok(None)` when the tokens
//! at hand do not start its construct (so that the caller may try another rule), or an error.

use std::{cmp::Ordering, collections::BTreeMap};

use arraydeque::{ArrayDeque, Wrapping};
use tracing::{debug, trace};

use crate::{
    error::{ErrorKind, ParseError},
    input::{str::StrInput, Input, LineInput},
    node::{Mapping, Node, Sequence},
    scanner::Tokenizer,
    token::{Token, TokenKind},
};

/// The maximum number of nested block collections.
pub const MAX_DEPTH: usize = 128;

/// The maximum length, in characters, of a mapping key.
pub const MAX_KEY_LENGTH: usize = 1024;

/// The level of the document root. Any indentation is deeper than it.
const BASE_LEVEL: isize = -1;

/// Where a node appears.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Context {
    /// Document root or sequence entry. Collections may start on the same line.
    BlockIn,
    /// Mapping value. A sequence may sit at the indentation of its key.
    BlockOut,
    /// Mapping key.
    BlockKey,
}

type ParseResult<T> = Result<T, ParseError>;

/// Convert a column or width into a level comparable with the indentation register.
fn level(width: usize) -> isize {
    isize::try_from(width).unwrap_or(isize::MAX)
}

/// A recursive-descent parser over a stream of [`Token`]s.
///
/// The parser pulls tokens from a [`Tokenizer`] on demand and keeps exactly two of them alive:
/// the current token and one token of lookahead. `tag` and `comment` tokens are dropped before
/// they enter that window.
///
/// ```
/// # use yamlet_parser::{Node, Parser};
/// let node = Parser::new_from_str("- a\n- &x b\n- *x").parse().unwrap();
/// assert_eq!(node, Node::Sequence(vec!["a".into(), "b".into(), "b".into()]));
/// ```
pub struct Parser<I> {
    tokens: Tokenizer<I>,
    /// The current token, followed by the lookahead token.
    window: ArrayDeque<Token, 2, Wrapping>,
    /// Width of the most recent line indentation.
    indentation: isize,
    /// Whether the current token is the first of its line.
    at_line_start: bool,
    /// Number of block collections being parsed.
    depth: usize,
    /// Nodes bound to anchors so far.
    anchors: BTreeMap<String, Node>,
}

impl<I: Input> Parser<I> {
    /// Create a new parser over the given input.
    pub fn new(input: I) -> Self {
        Parser {
            tokens: Tokenizer::new(input),
            window: ArrayDeque::new(),
            indentation: BASE_LEVEL,
            at_line_start: false,
            depth: 0,
            anchors: BTreeMap::new(),
        }
    }

    /// Parse the first document of the input.
    ///
    /// An empty input yields an empty scalar.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if the input does not follow the supported grammar or if the
    /// input fails to be read. No partial tree is returned.
    pub fn parse(mut self) -> Result<Node, ParseError> {
        self.fill()?;
        self.stream()
    }

    // ---------------------------------------------------------------------------------------
    // Token window
    // ---------------------------------------------------------------------------------------

    /// Pull tokens until the window is full or the input is exhausted.
    fn fill(&mut self) -> ParseResult<()> {
        while !self.window.is_full() {
            let Some(token) = self.tokens.next().transpose()? else {
                break;
            };
            if token.is(TokenKind::Tag) || token.is(TokenKind::Comment) {
                continue;
            }
            self.window.push_back(token);
        }
        Ok(())
    }

    fn current(&self) -> Option<&Token> {
        self.window.front()
    }

    fn current_kind(&self) -> Option<TokenKind> {
        self.current().map(Token::kind)
    }

    fn lookahead_kind(&self) -> Option<TokenKind> {
        self.window.get(1).map(Token::kind)
    }

    fn current_is(&self, kind: TokenKind) -> bool {
        self.current_kind() == Some(kind)
    }

    /// Whether the current token starts a `key:` entry.
    fn at_mapping_key(&self) -> bool {
        self.current_is(TokenKind::PlainScalar)
            && self.lookahead_kind() == Some(TokenKind::MappingValue)
    }

    /// Whether the current token ends the document.
    fn at_document_end(&self) -> bool {
        matches!(
            self.current_kind(),
            None | Some(TokenKind::EndOfDocument | TokenKind::Directive)
        )
    }

    /// Consume the current token.
    fn advance(&mut self) -> ParseResult<Token> {
        let Some(token) = self.window.pop_front() else {
            return Err(self.error(ErrorKind::UnexpectedToken {
                expected: "more input",
            }));
        };
        self.at_line_start = false;
        self.fill()?;
        Ok(token)
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(kind, self.current().cloned(), self.window.get(1).cloned())
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        self.error(ErrorKind::UnexpectedToken { expected })
    }

    /// Consume line breaks and line indentations, updating the indentation register.
    fn indent(&mut self) -> ParseResult<()> {
        loop {
            match self.current() {
                Some(token) if token.is(TokenKind::Newline) => {
                    self.advance()?;
                    self.indentation = 0;
                }
                Some(token) if token.is(TokenKind::Indentation) => {
                    let width = level(token.indentation_width());
                    self.advance()?;
                    self.indentation = width;
                    self.at_line_start = true;
                }
                _ => return Ok(()),
            }
        }
    }

    /// Register a new block collection starting at the current token.
    ///
    /// # Return
    /// The level of the block: the 0-based column of its first token.
    fn open_block(&mut self) -> ParseResult<usize> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(ErrorKind::DepthLimit(MAX_DEPTH)));
        }
        self.depth += 1;
        Ok(self.current().map_or(0, |token| token.col() - 1))
    }

    fn close_block(&mut self) {
        self.depth -= 1;
    }

    // ---------------------------------------------------------------------------------------
    // Grammar
    // ---------------------------------------------------------------------------------------

    /// `stream ::= directive? block_node(-1, block-in) (end_of_document | directive)?`
    fn stream(&mut self) -> ParseResult<Node> {
        self.indent()?;
        if self.current_is(TokenKind::Directive) {
            trace!("explicit document");
            self.advance()?;
        }
        let node = self.block_node(BASE_LEVEL, Context::BlockIn)?;
        self.indent()?;
        if self.at_document_end() {
            Ok(node)
        } else {
            Err(self.unexpected("end of document"))
        }
    }

    /// A node at a block position: an optionally anchored collection or scalar.
    fn block_node(&mut self, n: isize, ctx: Context) -> ParseResult<Node> {
        self.indent()?;
        let anchor = if self.current_is(TokenKind::Anchor) {
            Some(self.advance()?.anchor_name().to_owned())
        } else {
            None
        };

        let node = match self.block_collection(n, ctx)? {
            Some(node) => node,
            None => self.flow_in_block(n, ctx)?,
        };

        if let Some(name) = anchor {
            debug!(anchor = %name, "binding anchor");
            self.anchors.insert(name, node.clone());
        }
        Ok(node)
    }

    /// A block mapping or a block sequence, if the tokens at hand start one.
    fn block_collection(&mut self, n: isize, ctx: Context) -> ParseResult<Option<Node>> {
        self.indent()?;
        let allowed = if self.at_line_start {
            self.indentation > n
                || (self.indentation == n
                    && ctx == Context::BlockOut
                    && self.current_is(TokenKind::SequenceEntry))
        } else {
            // Compact forms: `- - a`, `- a: b`.
            ctx == Context::BlockIn
        };
        if !allowed {
            trace!(n, ?ctx, indentation = self.indentation, "no block collection here");
            return Ok(None);
        }

        if let Some(node) = self.block_mapping()? {
            return Ok(Some(node));
        }
        self.block_sequence()
    }

    /// `block_mapping ::= (plain_scalar ':' block_node(m, block-out))+`, all keys at level `m`.
    fn block_mapping(&mut self) -> ParseResult<Option<Node>> {
        if self.current_is(TokenKind::ComplexMappingKey) {
            return Err(self.error(ErrorKind::Unsupported("complex mapping keys")));
        }
        if !self.at_mapping_key() {
            return Ok(None);
        }

        let m = self.open_block()?;
        trace!(level = m, depth = self.depth, "block mapping");
        let mut mapping = Mapping::new();
        loop {
            let key = self.flow_content(Context::BlockKey)?;
            if !self.current_is(TokenKind::MappingValue) {
                return Err(self.unexpected("`:`"));
            }
            self.advance()?;
            let value = self.block_node(level(m), Context::BlockOut)?;
            if let Some(previous) = mapping.replace(key, value) {
                trace!(%previous, "duplicate key overwritten");
            }
            if !self.next_entry(m, TokenKind::MappingValue)? {
                break;
            }
        }
        self.close_block();
        Ok(Some(Node::Mapping(mapping)))
    }

    /// `block_sequence ::= ('-' block_node(m, block-in))+`, all dashes at level `m`.
    fn block_sequence(&mut self) -> ParseResult<Option<Node>> {
        if !self.current_is(TokenKind::SequenceEntry) {
            return Ok(None);
        }

        let m = self.open_block()?;
        trace!(level = m, depth = self.depth, "block sequence");
        let mut sequence = Sequence::new();
        loop {
            self.advance()?;
            sequence.push(self.block_node(level(m), Context::BlockIn)?);
            if !self.next_entry(m, TokenKind::SequenceEntry)? {
                break;
            }
        }
        self.close_block();
        Ok(Some(Node::Sequence(sequence)))
    }

    /// Move to the next entry of a block at level `m`.
    ///
    /// `entry` is [`TokenKind::MappingValue`] for mappings and [`TokenKind::SequenceEntry`] for
    /// sequences.
    ///
    /// # Return
    /// `Ok(true)` if the current token starts another entry of the block, `Ok(false)` if the block
    /// ended.
    fn next_entry(&mut self, m: usize, entry: TokenKind) -> ParseResult<bool> {
        self.indent()?;
        if self.at_document_end() {
            return Ok(false);
        }
        if !self.at_line_start {
            return Err(self.unexpected("end of line"));
        }
        match self.indentation.cmp(&level(m)) {
            Ordering::Less => Ok(false),
            Ordering::Greater => Err(self.error(ErrorKind::BadIndentation)),
            Ordering::Equal if entry == TokenKind::SequenceEntry => {
                // A dedented mapping key may share the level of the sequence.
                Ok(self.current_is(TokenKind::SequenceEntry))
            }
            Ordering::Equal => {
                if self.current_is(TokenKind::ComplexMappingKey) {
                    Err(self.error(ErrorKind::Unsupported("complex mapping keys")))
                } else if self.at_mapping_key() {
                    Ok(true)
                } else {
                    Err(self.unexpected("mapping key"))
                }
            }
        }
    }

    /// A scalar at a block position, or an empty node if the value is absent.
    fn flow_in_block(&mut self, n: isize, ctx: Context) -> ParseResult<Node> {
        if self.at_document_end() || (self.at_line_start && self.indentation <= n) {
            trace!(n, ?ctx, "empty node");
            return Ok(Node::empty());
        }
        self.flow_node(ctx)
    }

    /// `flow_node ::= alias | flow_content`
    fn flow_node(&mut self, ctx: Context) -> ParseResult<Node> {
        if !self.current_is(TokenKind::Alias) {
            return self.flow_content(ctx).map(Node::Scalar);
        }
        let name = self
            .current()
            .map(|token| token.alias_name().to_owned())
            .unwrap_or_default();
        let Some(node) = self.anchors.get(&name).cloned() else {
            return Err(self.error(ErrorKind::UndefinedAlias(name)));
        };
        debug!(alias = %name, "resolved alias");
        self.advance()?;
        Ok(node)
    }

    /// `flow_content ::= plain_scalar`
    fn flow_content(&mut self, ctx: Context) -> ParseResult<String> {
        let Some(kind) = self.current_kind() else {
            return Err(self.unexpected("plain scalar"));
        };
        if kind != TokenKind::PlainScalar {
            return Err(match ErrorKind::unsupported(kind) {
                Some(kind) => self.error(kind),
                None => self.unexpected("plain scalar"),
            });
        }
        if ctx == Context::BlockKey
            && self
                .current()
                .is_some_and(|token| token.text().chars().count() > MAX_KEY_LENGTH)
        {
            return Err(self.error(ErrorKind::KeyTooLong(MAX_KEY_LENGTH)));
        }
        Ok(self.advance()?.into_text())
    }
}

impl<'a> Parser<StrInput<'a>> {
    /// Create a new parser over the given string.
    #[must_use]
    pub fn new_from_str(source: &'a str) -> Self {
        Parser::new(StrInput::new(source))
    }
}

impl<T, S> Parser<LineInput<T>>
where
    T: Iterator<Item = S>,
    S: Into<String>,
{
    /// Create a new parser over the given lines.
    ///
    /// Lines should keep their terminators.
    pub fn new_from_lines<L>(lines: L) -> Self
    where
        L: IntoIterator<IntoIter = T>,
    {
        Parser::new(LineInput::new(lines.into_iter()))
    }
}

/// Parse a document from a string.
///
/// ```
/// # use yamlet_parser::parse_from_text;
/// let node = parse_from_text("--- !<http://foo.bar>\na: 1\nb: 2").unwrap();
/// assert_eq!(node.to_string(), "{a: 1, b: 2}");
/// ```
///
/// # Errors
/// Returns a [`ParseError`] if the input does not follow the supported grammar.
pub fn parse_from_text(source: &str) -> Result<Node, ParseError> {
    Parser::new_from_str(source).parse()
}

/// Parse a document from an iterator of lines.
///
/// # Errors
/// Returns a [`ParseError`] if the input does not follow the supported grammar.
pub fn parse_from_lines<L, S>(lines: L) -> Result<Node, ParseError>
where
    L: IntoIterator<Item = S>,
    S: Into<String>,
{
    Parser::new_from_lines(lines).parse()
}
