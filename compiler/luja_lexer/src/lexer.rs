//! The tokenizer: one left-to-right pass from text to [`TokenTable`].
//!
//! Drives [`RawScanner`] over the whole source, drops whitespace and
//! comments, and records every other lexeme in a [`TokenTable`]. Raw error
//! tags become [`ScanError`]s; the first one aborts the scan.
//!
//! All scan state (the raw scanner and the table under construction) lives
//! on the stack of a single [`Lexer::scan`] call, so one `Lexer` can be
//! shared across threads tokenizing unrelated inputs.

use luja_lexer_core::{RawScanner, RawTag, SourceBuffer};
use tracing::{debug, trace};

use crate::{Input, Navigator, ReadError, ScanError, TokenKind, TokenTable};

/// What to do with characters the grammar has no rule for
/// (`<`, `>`, `/`, `%`, `^`, `&`, `|`, a stray `\`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnrecognizedPolicy {
    /// Drop them without emitting a token.
    #[default]
    Skip,
    /// Fail with [`ScanError::UnrecognizedCharacter`].
    Reject,
}

/// Tokenizer configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanConfig {
    pub unrecognized: UnrecognizedPolicy,
}

impl ScanConfig {
    /// Configuration that rejects unrecognized characters.
    pub fn strict() -> Self {
        ScanConfig {
            unrecognized: UnrecognizedPolicy::Reject,
        }
    }

    #[must_use]
    pub fn with_unrecognized(mut self, policy: UnrecognizedPolicy) -> Self {
        self.unrecognized = policy;
        self
    }
}

/// Tokenizer. Cheap to construct; holds only configuration.
#[derive(Clone, Debug, Default)]
pub struct Lexer {
    config: ScanConfig,
}

impl Lexer {
    pub fn new(config: ScanConfig) -> Self {
        Lexer { config }
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Materialize `input` and tokenize it.
    pub fn read(&self, mut input: impl Input) -> Result<Tokenized, ReadError> {
        let text = input.input()?;
        Ok(self.scan(&text)?)
    }

    /// Tokenize `text`.
    pub fn scan(&self, text: &str) -> Result<Tokenized, ScanError> {
        let source = SourceBuffer::new(text);
        let tokens = self.scan_buffer(&source)?;
        Ok(Tokenized { source, tokens })
    }

    /// Tokenize an already decoded buffer.
    ///
    /// The table is pre-sized to one slot per source character, which no
    /// scan can exceed.
    #[tracing::instrument(level = "debug", skip_all, fields(chars = source.len()))]
    pub fn scan_buffer(&self, source: &SourceBuffer) -> Result<TokenTable, ScanError> {
        let mut tokens = TokenTable::with_capacity(source.len() as usize, true);
        let mut scanner = RawScanner::new(source.cursor());

        loop {
            let start = scanner.pos();
            let raw = scanner.next_token();
            if let Some(kind) = kind_for(raw.tag) {
                tokens.push(start, raw.len, kind);
                continue;
            }

            match raw.tag {
                RawTag::Eof => break,
                RawTag::LineComment | RawTag::BlockComment => {
                    trace!(start, len = raw.len, "dropped comment");
                }
                tag if tag.is_trivia() => {}
                RawTag::Unrecognized
                    if self.config.unrecognized == UnrecognizedPolicy::Skip =>
                {
                    trace!(start, found = ?source.char_at(start), "skipped unrecognized character");
                }
                tag if tag.is_error() => return Err(scan_error(source, tag, start)),
                // Every other tag maps to a kind above.
                _ => {}
            }
        }

        debug!(tokens = tokens.len(), "scan complete");
        Ok(tokens)
    }
}

/// Tokenize `text` with the default configuration.
pub fn lex(text: &str) -> Result<Tokenized, ScanError> {
    Lexer::default().scan(text)
}

/// Error for a raw error tag at `start`.
fn scan_error(source: &SourceBuffer, tag: RawTag, start: u32) -> ScanError {
    let location = source.line_column(start);
    match tag {
        RawTag::UnterminatedString => ScanError::UnterminatedString { start, location },
        RawTag::UnterminatedBlockComment => {
            ScanError::UnterminatedBlockComment { start, location }
        }
        _ => ScanError::UnrecognizedCharacter {
            found: source.char_at(start).unwrap_or('\0'),
            start,
            location,
        },
    }
}

/// Token kind for a raw tag, or `None` for trivia, errors and EOF.
fn kind_for(tag: RawTag) -> Option<TokenKind> {
    Some(match tag {
        RawTag::Namespace => TokenKind::Namespace,
        RawTag::Number => TokenKind::Number,
        RawTag::String => TokenKind::String,
        RawTag::LeftBrace => TokenKind::ObjectStart,
        RawTag::RightBrace => TokenKind::ObjectEnd,
        RawTag::LeftParen => TokenKind::FunctionStart,
        RawTag::RightParen => TokenKind::FunctionEnd,
        RawTag::LeftBracket => TokenKind::ArrayStart,
        RawTag::RightBracket => TokenKind::ArrayEnd,
        RawTag::Colon => TokenKind::Colon,
        RawTag::Question => TokenKind::Question,
        RawTag::Semicolon => TokenKind::SemiColon,
        RawTag::Comma => TokenKind::Comma,
        RawTag::Dot => TokenKind::Period,
        RawTag::Hash => TokenKind::Hash,
        RawTag::Newline => TokenKind::Eol,
        RawTag::Equal => TokenKind::Equal,
        RawTag::Plus => TokenKind::Add,
        RawTag::Minus => TokenKind::Sub,
        RawTag::Star => TokenKind::Mul,
        RawTag::DotDot => TokenKind::Concat,
        RawTag::DotDotDot => TokenKind::Varargs,
        RawTag::Bang => TokenKind::Not,
        RawTag::Tilde => TokenKind::LogicNot,
        tag => {
            debug_assert!(tag.is_trivia() || tag.is_error() || tag == RawTag::Eof);
            return None;
        }
    })
}

/// Result of a successful scan: the source buffer and its token table.
///
/// Both are immutable from here on. Any number of [`Navigator`]s can walk
/// them at the same time.
#[derive(Clone, Debug)]
pub struct Tokenized {
    source: SourceBuffer,
    tokens: TokenTable,
}

impl Tokenized {
    pub fn source(&self) -> &SourceBuffer {
        &self.source
    }

    pub fn tokens(&self) -> &TokenTable {
        &self.tokens
    }

    /// A fresh navigator positioned before the first token.
    pub fn navigator(&self) -> Navigator<'_> {
        Navigator::new(&self.source, &self.tokens)
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
