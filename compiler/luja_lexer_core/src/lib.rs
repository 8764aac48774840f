//! Low-level scanner for Luja sources.
//!
//! Standalone building blocks with no `luja_*` dependencies:
//!
//! - [`SourceBuffer`]: the decoded source text as an indexable, immutable
//!   character buffer with sentinel padding, plus line/column resolution.
//! - [`Cursor`]: a `Copy` read position over that buffer.
//! - [`RawScanner`]: classifies one lexeme per call and returns a
//!   [`RawToken`] (`tag` + character length). Trivia and errors are tags,
//!   not `Result`s.
//!
//! The token table, keyword kinds and error reporting live in
//! `luja_lexer`.

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{is_namespace, RawScanner};
pub use source_buffer::{LineColumn, SourceBuffer, NEW_LINE};
pub use tag::{RawTag, RawToken};
