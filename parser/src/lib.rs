// Copyright 2026, Yamlet contributors.
// See the LICENSE file at the top-level directory of this distribution.

//! A tokenizer and parser for a subset of YAML, in pure Rust.
//!
//! **If you want to load files or render token streams, use `yamlet` instead of `yamlet-parser`.
//! This crate contains only the tokenizer and the parser.**
//!
//! The supported subset is block mappings with plain scalar keys, block sequences, plain scalars,
//! anchors and aliases, and a single document optionally introduced by `---`. Tags and comments
//! are ignored. Flow collections, quoted scalars, block scalars, complex keys and multiple
//! documents are recognized by the tokenizer and rejected by the parser.
//!
//! # Usage
//!
//! ```
//! use yamlet_parser::{parse_from_text, Node};
//!
//! let node = parse_from_text("name: Max\nfriends:\n  - Fritz\n  - Moritz").unwrap();
//! assert_eq!(node["name"].as_str(), Some("Max"));
//! assert_eq!(node["friends"][1], Node::from("Moritz"));
//! ```
//!
//! There is no implicit typing: every scalar is a string.
//!
//! # Logging
//! The tokenizer and the parser emit [`tracing`](https://docs.rs/tracing) events at the `trace`
//! and `debug` levels. No subscriber is installed by this crate.

#![warn(missing_docs, clippy::pedantic)]

#[macro_use]
mod macros;

mod char_traits;
mod error;
mod index;
pub mod input;
mod node;
mod parser;
mod scanner;
mod token;

pub use crate::error::{ErrorKind, ParseError};
pub use crate::index::{Accessor, SafelyIndex, SafelyIndexMut};
pub use crate::input::{str::StrInput, Input, LineInput, ReaderInput};
pub use crate::node::{Mapping, Node, Sequence};
pub use crate::parser::{parse_from_lines, parse_from_text, Parser, MAX_DEPTH, MAX_KEY_LENGTH};
pub use crate::scanner::{tokenize, LexContext, Tokenizer};
pub use crate::token::{Marker, Token, TokenKind};
