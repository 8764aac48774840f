//! Tokenizer for Luja, a Lua-shaped scripting language.
//!
//! Turns source text into a flat [`TokenTable`] (parallel arrays of start
//! offset, span and [`TokenKind`]) in one pass, then hands out
//! [`Navigator`]s that walk the table in either direction, compare token
//! text and resolve line/column positions for diagnostics.
//!
//! ```
//! use luja_lexer::{lex, TokenKind};
//!
//! let tokenized = lex("x = 1").unwrap();
//! let mut nav = tokenized.navigator();
//! nav.next().unwrap();
//! assert_eq!(nav.kind(), Some(TokenKind::Namespace));
//! assert!(nav.text_equals("x"));
//! ```
//!
//! Scanning itself happens in `luja_lexer_core`; this crate adds the
//! token kinds, the table, error reporting and navigation.

mod error;
mod input;
mod kind;
mod lexer;
mod navigator;
mod token_table;

pub use error::{Direction, OutOfRange, ReadError, ScanError};
pub use input::{FileInput, Input, ReaderInput};
pub use kind::TokenKind;
pub use lexer::{lex, Lexer, ScanConfig, Tokenized, UnrecognizedPolicy};
pub use luja_lexer_core::{LineColumn, SourceBuffer};
pub use navigator::Navigator;
pub use token_table::TokenTable;
