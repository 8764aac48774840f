//! Zero-cost cursor over a sentinel-terminated character buffer.
//!
//! The cursor advances through the buffer one character at a time. EOF is
//! detected when the current character is the sentinel (`'\0'`) and the
//! position has reached the source length.
//!
//! # Interior Null Characters
//!
//! A `'\0'` at `pos < source_len` is part of the source, not the end of
//! it. [`Cursor::is_eof`] compares positions to tell the two apart.

/// Cursor over a sentinel-terminated character buffer.
///
/// Created via [`SourceBuffer::cursor()`](crate::SourceBuffer::cursor).
/// The cursor is [`Copy`], so snapshots for lookahead are free.
///
/// # Invariant
///
/// `buf[source_len..]` is all `'\0'` and at least a few characters long.
/// This is guaranteed by [`SourceBuffer`](crate::SourceBuffer) construction.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Sentinel-terminated buffer (source + padding).
    buf: &'a [char],
    /// Current read position (character index into `buf`).
    pos: u32,
    /// Number of source characters (excludes padding).
    source_len: u32,
}

/// &[char] = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub(crate) fn new(buf: &'a [char], source_len: u32) -> Self {
        debug_assert!(
            (source_len as usize) < buf.len(),
            "sentinel must be within buffer bounds"
        );
        debug_assert!(buf[source_len as usize] == '\0', "sentinel must be '\\0'");
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Character at the current position (`'\0'` at EOF).
    #[inline]
    pub fn current(&self) -> char {
        self.buf[self.pos as usize]
    }

    /// Character one position ahead of current.
    #[inline]
    pub fn peek(&self) -> char {
        self.buf[self.pos as usize + 1]
    }

    /// Character immediately before the current position.
    ///
    /// Returns `'\0'` at position 0.
    #[inline]
    pub fn previous(&self) -> char {
        match self.pos.checked_sub(1) {
            Some(prev) => self.buf[prev as usize],
            None => '\0',
        }
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// Returns `true` once the cursor sits on the sentinel.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.current() == '\0' && self.pos >= self.source_len
    }

    /// Current character offset in the source.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Advance while `pred` returns `true` for the current character.
    ///
    /// # Contract
    ///
    /// `pred('\0')` must return `false`, otherwise the loop runs into the
    /// padding and panics on the bounds check at its end.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while pred(self.buf[self.pos as usize]) {
            self.pos += 1;
        }
    }

    /// Advance until `target` is found or EOF is reached.
    ///
    /// Returns the number of characters consumed. Interior nulls are
    /// stepped over.
    pub fn eat_until(&mut self, target: char) -> u32 {
        let start = self.pos;
        loop {
            let c = self.buf[self.pos as usize];
            if c == target {
                break;
            }
            if c == '\0' && self.pos >= self.source_len {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Advance to the next `'\n'` (not consuming it) or to EOF.
    pub fn eat_until_newline_or_eof(&mut self) {
        self.eat_until(crate::source_buffer::NEW_LINE);
    }
}
