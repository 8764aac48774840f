//! Bidirectional cursor over a finished token table.
//!
//! A [`Navigator`] borrows a [`SourceBuffer`] and the [`TokenTable`] built
//! from it and never mutates either. It starts *before* the first token:
//! call [`Navigator::next`] once to land on slot 0.
//!
//! Field accessors (`position`, `span`, `kind`, `text`, ...) require the
//! navigator to sit on a token and panic otherwise.

use luja_lexer_core::{LineColumn, SourceBuffer};

use crate::error::Direction;
use crate::{OutOfRange, TokenKind, TokenTable};

/// Movable read position over a token table.
#[derive(Clone, Copy, Debug)]
pub struct Navigator<'a> {
    source: &'a SourceBuffer,
    tokens: &'a TokenTable,
    /// Current slot; `None` means before the first token.
    index: Option<u32>,
    /// Where [`reset_position`](Self::reset_position) returns to.
    start_index: Option<u32>,
}

impl<'a> Navigator<'a> {
    /// Navigator positioned before the first token.
    pub fn new(source: &'a SourceBuffer, tokens: &'a TokenTable) -> Self {
        Self::starting_at(source, tokens, None)
    }

    /// Navigator positioned on `index` (`None` = before the first token).
    pub fn starting_at(source: &'a SourceBuffer, tokens: &'a TokenTable, index: Option<u32>) -> Self {
        debug_assert!(
            index.map_or(true, |i| (i as usize) < tokens.len()),
            "starting index {index:?} out of range (size {})",
            tokens.len()
        );
        Navigator {
            source,
            tokens,
            index,
            start_index: index,
        }
    }

    // === Movement ===

    pub fn has_next(&self) -> bool {
        self.next_index() < self.tokens.len()
    }

    /// Move to the following token.
    #[allow(
        clippy::should_implement_trait,
        reason = "fallible, chainable step; not an Iterator"
    )]
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token count is bounded by the u32 source length"
    )]
    pub fn next(&mut self) -> Result<&mut Self, OutOfRange> {
        if !self.has_next() {
            return Err(self.out_of_range(Direction::Next));
        }
        self.index = Some(self.next_index() as u32);
        Ok(self)
    }

    /// `true` when there is a token before the current one.
    ///
    /// Stepping back from the first token to "before first" is not a
    /// move; use [`reset_position`](Self::reset_position) for that.
    pub fn has_previous(&self) -> bool {
        self.index.is_some_and(|i| i > 0)
    }

    /// Move to the preceding token.
    pub fn previous(&mut self) -> Result<&mut Self, OutOfRange> {
        match self.index {
            Some(i) if i > 0 => {
                self.index = Some(i - 1);
                Ok(self)
            }
            _ => Err(self.out_of_range(Direction::Previous)),
        }
    }

    /// Return to the position the navigator was created with.
    pub fn reset_position(&mut self) {
        self.index = self.start_index;
    }

    /// Current slot (`None` = before the first token).
    pub fn index(&self) -> Option<u32> {
        self.index
    }

    /// Number of tokens in the table.
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    // === Current token ===

    /// Start offset of the current token.
    pub fn position(&self) -> u32 {
        self.tokens.start(self.current())
    }

    /// Length in characters of the current token.
    pub fn span(&self) -> u32 {
        self.tokens.span(self.current())
    }

    /// Kind of the current token; `None` if the table has no kinds.
    pub fn kind(&self) -> Option<TokenKind> {
        self.tokens.kind(self.current())
    }

    /// Display name of the current kind, `"UNDEFINED"` without kinds.
    pub fn kind_name(&self) -> &'static str {
        self.kind().map_or("UNDEFINED", TokenKind::name)
    }

    /// Copy the current token's characters into a new `String`.
    pub fn text(&self) -> String {
        self.source.text(self.position(), self.span())
    }

    /// Compare the current token's text with `candidate` without copying.
    ///
    /// Lengths must match: `"function"` does not equal a token `"fun"`.
    pub fn text_equals(&self, candidate: &str) -> bool {
        let token = self.source.slice(self.position(), self.span());
        candidate.chars().eq(token.iter().copied())
    }

    /// Line (1-based) and column (0-based) of the current token.
    ///
    /// Rescans the source from the beginning on every call.
    pub fn line_column(&self) -> LineColumn {
        self.source.line_column(self.position())
    }

    /// `"Line #<line>, Char #<column>"` for the current token.
    pub fn cursor_position(&self) -> String {
        self.line_column().to_string()
    }

    /// `true` only for a namespace token spelled `true` (any ASCII case).
    pub fn as_boolean(&self) -> bool {
        if self.kind() != Some(TokenKind::Namespace) {
            return false;
        }
        let token = self.source.slice(self.position(), self.span());
        token.len() == 4
            && token
                .iter()
                .zip("true".chars())
                .all(|(c, expected)| c.eq_ignore_ascii_case(&expected))
    }

    /// Keyword kind of the current namespace token, if its text is a
    /// reserved word.
    pub fn keyword(&self) -> Option<TokenKind> {
        if self.kind() != Some(TokenKind::Namespace) {
            return None;
        }
        TokenKind::keyword(&self.text())
    }

    // === Internals ===

    /// Slot `next()` would move to.
    fn next_index(&self) -> usize {
        self.index.map_or(0, |i| i as usize + 1)
    }

    fn current(&self) -> usize {
        match self.index {
            Some(i) => i as usize,
            None => panic!("navigator is before the first token; call next() first"),
        }
    }

    fn out_of_range(&self, direction: Direction) -> OutOfRange {
        OutOfRange {
            direction,
            index: self.index,
            size: u32::try_from(self.tokens.len()).unwrap_or(u32::MAX),
        }
    }
}
