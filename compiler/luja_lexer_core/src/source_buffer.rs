//! Sentinel-terminated character buffer for bounds-check-free scanning.
//!
//! The buffer stores the decoded characters of the source followed by a
//! run of `'\0'` sentinels, so the scanner can detect EOF and look a few
//! characters ahead without explicit bounds checks. All offsets handed out
//! by this crate are character offsets into this buffer, never byte
//! offsets into the original `&str`.
//!
//! The buffer is immutable once built. Everything downstream (the raw
//! scanner, token tables, navigators) borrows it read-only.

use std::fmt;

use crate::Cursor;

/// Number of `'\0'` characters appended after the source content.
///
/// The scanner peeks at most one character past the current one, and the
/// current position may itself sit on the first sentinel.
const SENTINEL_PADDING: usize = 4;

/// The line feed character, the only line terminator the scanner knows.
pub const NEW_LINE: char = '\n';

/// Sentinel-terminated character buffer.
///
/// # Layout
///
/// ```text
/// [source_chars..., '\0', '\0', '\0', '\0']
///  ^                ^
///  0                source_len (sentinel)
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceBuffer {
    /// Owned buffer: `[source_chars..., sentinel padding...]`.
    buf: Vec<char>,
    /// Number of source characters (excludes the sentinels).
    source_len: u32,
}

impl SourceBuffer {
    /// Decode `source` into a sentinel-terminated character buffer.
    ///
    /// Sources longer than `u32::MAX` characters saturate the recorded
    /// length; nothing past that point is ever scanned.
    pub fn new(source: &str) -> Self {
        let mut buf = Vec::with_capacity(source.len() + SENTINEL_PADDING);
        buf.extend(source.chars());
        let source_len = buf.len();
        buf.resize(source_len + SENTINEL_PADDING, '\0');

        Self {
            buf,
            source_len: u32::try_from(source_len).unwrap_or(u32::MAX),
        }
    }

    /// Returns the source characters (without sentinels).
    pub fn as_chars(&self) -> &[char] {
        &self.buf[..self.source_len as usize]
    }

    /// Create a [`Cursor`] positioned at offset 0.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Number of source characters.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    /// Returns `true` if the source is empty.
    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }

    /// Character at `offset`, or `None` past the end of the source.
    pub fn char_at(&self, offset: u32) -> Option<char> {
        self.as_chars().get(offset as usize).copied()
    }

    /// The `len` characters starting at `start`.
    ///
    /// # Panics
    ///
    /// Panics if the range reaches past the end of the source.
    pub fn slice(&self, start: u32, len: u32) -> &[char] {
        let start = start as usize;
        &self.as_chars()[start..start + len as usize]
    }

    /// Copy the `len` characters starting at `start` into a new `String`.
    pub fn text(&self, start: u32, len: u32) -> String {
        self.slice(start, len).iter().collect()
    }

    /// Resolve a character offset to a line (1-based) and column (0-based).
    ///
    /// Walks the buffer from the start on every call. Offsets past the end
    /// resolve to the position just after the last character.
    pub fn line_column(&self, offset: u32) -> LineColumn {
        let end = offset.min(self.source_len) as usize;
        let mut location = LineColumn { line: 1, column: 0 };
        for &c in &self.buf[..end] {
            if c == NEW_LINE {
                location.line += 1;
                location.column = 0;
            } else {
                location.column += 1;
            }
        }
        location
    }
}

/// A resolved source position: 1-based line, 0-based column.
///
/// Columns count characters since the last line feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineColumn {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line #{}, Char #{}", self.line, self.column)
    }
}
