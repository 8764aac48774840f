//! Error types for scanning and navigation.

use luja_lexer_core::LineColumn;
use thiserror::Error;

/// A fatal tokenizer error. The whole input is rejected; there is no
/// resynchronisation.
///
/// `start` is the character offset where the offending construct begins
/// and `location` is that offset resolved to a line and column.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A quote was opened and the input ended before its closing quote.
    #[error("unexpected end of string: {location}")]
    UnterminatedString { start: u32, location: LineColumn },

    /// `--[[` was opened and the input ended before `]]`.
    #[error("unexpected end of block comment: {location}")]
    UnterminatedBlockComment { start: u32, location: LineColumn },

    /// A character outside the grammar, only raised by
    /// [`UnrecognizedPolicy::Reject`](crate::UnrecognizedPolicy::Reject).
    #[error("unrecognized character {found:?}: {location}")]
    UnrecognizedCharacter {
        found: char,
        start: u32,
        location: LineColumn,
    },
}

impl ScanError {
    /// Character offset of the offending construct.
    pub fn start(&self) -> u32 {
        match self {
            Self::UnterminatedString { start, .. }
            | Self::UnterminatedBlockComment { start, .. }
            | Self::UnrecognizedCharacter { start, .. } => *start,
        }
    }

    pub fn location(&self) -> LineColumn {
        match self {
            Self::UnterminatedString { location, .. }
            | Self::UnterminatedBlockComment { location, .. }
            | Self::UnrecognizedCharacter { location, .. } => *location,
        }
    }

    /// Short label for the offending construct, used by diagnostic
    /// renderers next to the source snippet.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnterminatedString { .. } => "string opened here is never closed",
            Self::UnterminatedBlockComment { .. } => "block comment opened here is never closed",
            Self::UnrecognizedCharacter { .. } => "character is not part of the grammar",
        }
    }
}

/// Moving a navigator past either end of its token table.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("navigator out of range: cannot move {direction} from {index:?} in a table of {size} tokens")]
pub struct OutOfRange {
    pub direction: Direction,
    /// Slot the navigator was on (`None` = before the first token).
    pub index: Option<u32>,
    pub size: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Next => "forward",
            Self::Previous => "backward",
        })
    }
}

/// Failure of [`Lexer::read`](crate::Lexer::read): either the input could
/// not be materialized or its text did not scan.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
}
