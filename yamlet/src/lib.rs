// Copyright 2026, Yamlet contributors.
// See the LICENSE file at the top-level directory of this distribution.

//! A parser for an indentation-based subset of YAML, with its file loader and token renderer.
//!
//! The tokenizer and the parser live in [`yamlet_parser`] and are re-exported here. This crate
//! adds:
//!   - loading from files and readers ([`load_from_file`], [`load_from_reader`]),
//!   - colourised rendering of token streams ([`pretty`]),
//!   - the `yamlet` command-line tool.
//!
//! # Examples
//! ```
//! use yamlet::{load_from_str, Node};
//!
//! let doc = load_from_str("- a\n- b: c").unwrap();
//! assert_eq!(doc[0].as_str(), Some("a"));
//! assert_eq!(doc[1]["b"], Node::from("c"));
//! assert_eq!(doc.to_string(), "[a, {b: c}]");
//! ```

#![warn(missing_docs, clippy::pedantic)]

mod loader;
pub mod pretty;

pub use crate::loader::{load_from_file, load_from_reader, load_from_str, LoadError};

// Re-export the core for convenience.
pub use yamlet_parser::{
    parse_from_lines, parse_from_text, tokenize, Accessor, ErrorKind, Input, LexContext,
    LineInput, Mapping, Marker, Node, ParseError, Parser, ReaderInput, SafelyIndex,
    SafelyIndexMut, Sequence, StrInput, Token, TokenKind, Tokenizer,
};
