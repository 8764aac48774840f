//! Struct-of-arrays token storage.
//!
//! A token is a slot index shared by parallel arrays: start offset, span
//! length and (optionally) kind. Nothing is allocated per token; the
//! arrays are sized up front from the source length and only grow if that
//! estimate is ever exceeded.

use std::fmt;

use crate::TokenKind;

/// Parallel arrays of token starts, spans and kinds.
///
/// # Invariants
///
/// - `starts.len() == spans.len()`, and `kinds` is either empty (kind
///   tracking off) or the same length.
/// - Every span is at least one character.
/// - Starts are strictly increasing and tokens never overlap.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenTable {
    starts: Vec<u32>,
    spans: Vec<u32>,
    /// Empty when the table was built without kind tracking.
    kinds: Vec<TokenKind>,
    track_kinds: bool,
}

impl TokenTable {
    /// Create an empty table with room for `capacity` tokens.
    pub fn with_capacity(capacity: usize, track_kinds: bool) -> Self {
        TokenTable {
            starts: Vec::with_capacity(capacity),
            spans: Vec::with_capacity(capacity),
            kinds: if track_kinds {
                Vec::with_capacity(capacity)
            } else {
                Vec::new()
            },
            track_kinds,
        }
    }

    /// Append a token. `kind` is dropped when kinds are not tracked.
    #[inline]
    pub fn push(&mut self, start: u32, span: u32, kind: TokenKind) {
        debug_assert!(span >= 1, "zero-length token at {start}");
        debug_assert!(
            self.starts
                .last()
                .zip(self.spans.last())
                .map_or(true, |(&prev, &prev_span)| prev + prev_span <= start),
            "token at {start} overlaps its predecessor"
        );
        self.starts.push(start);
        self.spans.push(span);
        if self.track_kinds {
            self.kinds.push(kind);
        }
    }

    /// Number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.starts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    /// Slots allocated before the arrays have to grow.
    pub fn capacity(&self) -> usize {
        self.starts.capacity()
    }

    #[inline]
    pub fn tracks_kinds(&self) -> bool {
        self.track_kinds
    }

    /// Start offset of token `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn start(&self, index: usize) -> u32 {
        self.starts[index]
    }

    /// Length in characters of token `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn span(&self, index: usize) -> u32 {
        self.spans[index]
    }

    /// Kind of token `index`, or `None` when kinds are not tracked.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[inline]
    pub fn kind(&self, index: usize) -> Option<TokenKind> {
        assert!(
            index < self.len(),
            "token index {index} out of range (len {})",
            self.len()
        );
        self.kinds.get(index).copied()
    }

    pub fn starts(&self) -> &[u32] {
        &self.starts
    }

    pub fn spans(&self) -> &[u32] {
        &self.spans
    }

    /// Dense kind array; empty when kinds are not tracked.
    pub fn kinds(&self) -> &[TokenKind] {
        &self.kinds
    }
}

impl fmt::Debug for TokenTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TokenTable({} tokens)", self.len())
    }
}
