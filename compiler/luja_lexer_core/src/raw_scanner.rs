//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords or parse numeric values, and it never fails: unterminated
//! constructs and stray characters come back as error tags, and the
//! integration layer decides whether they are fatal.
//!
//! # Design
//!
//! One dispatch on the current character per call. Each arm calls a
//! focused method that advances the cursor and returns the token. Every
//! call that does not return `Eof` advances by at least one character.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Offset where the next token will start.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            '\0' if self.cursor.is_eof() => RawToken {
                tag: RawTag::Eof,
                len: 0,
            },
            '\n' => self.single(start, RawTag::Newline),
            c if is_namespace(c) => self.namespace(start),
            '0'..='9' => self.number(start),
            quote @ ('\'' | '"') => self.string(start, quote),
            '{' => self.single(start, RawTag::LeftBrace),
            '}' => self.single(start, RawTag::RightBrace),
            '(' => self.single(start, RawTag::LeftParen),
            ')' => self.single(start, RawTag::RightParen),
            '[' => self.single(start, RawTag::LeftBracket),
            ']' => self.single(start, RawTag::RightBracket),
            ':' => self.single(start, RawTag::Colon),
            '?' => self.single(start, RawTag::Question),
            ';' => self.single(start, RawTag::Semicolon),
            ',' => self.single(start, RawTag::Comma),
            '#' => self.single(start, RawTag::Hash),
            '=' => self.single(start, RawTag::Equal),
            '+' => self.single(start, RawTag::Plus),
            '*' => self.single(start, RawTag::Star),
            '!' => self.single(start, RawTag::Bang),
            '~' => self.single(start, RawTag::Tilde),
            '.' => self.dot(start),
            '-' => self.minus_or_comment(start),
            c if is_horizontal_whitespace(c) => self.whitespace(start),
            // `<`, `>`, `/`, `%`, `^`, `&`, `|`, `\`, interior nulls, ...
            _ => self.single(start, RawTag::Unrecognized),
        }
    }

    /// Single-character token: advance one character and emit `tag`.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token_from(start, tag)
    }

    #[inline]
    fn token_from(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Whitespace ────────────────────────────────────────────────

    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(is_horizontal_whitespace);
        self.token_from(start, RawTag::Whitespace)
    }

    // ─── Namespaces & Numbers ──────────────────────────────────────

    /// Alphabetic/`_` run. Digits end the run: `a1` is `a` then `1`.
    fn namespace(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(is_namespace);
        self.token_from(start, RawTag::Namespace)
    }

    /// Decimal digit run. A `.` after the digits starts a new token.
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.cursor.eat_while(|c| c.is_ascii_digit());
        self.token_from(start, RawTag::Number)
    }

    // ─── Strings ───────────────────────────────────────────────────

    /// Quoted string closed by the same quote character.
    ///
    /// A quote immediately preceded by `\` does not close the string.
    fn string(&mut self, start: u32, quote: char) -> RawToken {
        self.cursor.advance(); // consume opening quote
        loop {
            self.cursor.eat_while(|c| c != quote && c != '\0');
            if self.cursor.is_eof() {
                return self.token_from(start, RawTag::UnterminatedString);
            }
            if self.cursor.current() == '\0' {
                // Interior null, part of the string body.
                self.cursor.advance();
                continue;
            }
            let escaped = self.cursor.previous() == '\\';
            self.cursor.advance(); // consume quote
            if !escaped {
                return self.token_from(start, RawTag::String);
            }
        }
    }

    // ─── Dots ──────────────────────────────────────────────────────

    fn dot(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '.'
        if self.cursor.current() != '.' {
            return self.token_from(start, RawTag::Dot);
        }
        self.cursor.advance(); // consume second '.'
        if self.cursor.current() == '.' {
            self.cursor.advance();
            self.token_from(start, RawTag::DotDotDot)
        } else {
            self.token_from(start, RawTag::DotDot)
        }
    }

    // ─── Minus & Comments ──────────────────────────────────────────

    fn minus_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '-'
        if self.cursor.current() != '-' {
            return self.token_from(start, RawTag::Minus);
        }
        self.cursor.advance(); // consume second '-'
        if self.cursor.current() == '[' && self.cursor.peek() == '[' {
            self.cursor.advance_n(2);
            self.block_comment(start)
        } else {
            // The terminating '\n' is left for the next call.
            self.cursor.eat_until_newline_or_eof();
            self.token_from(start, RawTag::LineComment)
        }
    }

    /// Body of a `--[[` comment, up to and including the first `]]`.
    fn block_comment(&mut self, start: u32) -> RawToken {
        loop {
            self.cursor.eat_until(']');
            if self.cursor.is_eof() {
                return self.token_from(start, RawTag::UnterminatedBlockComment);
            }
            if self.cursor.peek() == ']' {
                self.cursor.advance_n(2);
                return self.token_from(start, RawTag::BlockComment);
            }
            self.cursor.advance();
        }
    }
}

/// First and continuing characters of a namespace token.
#[inline]
pub fn is_namespace(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Whitespace that is not a line feed (spaces, tabs, `\r`, ...).
#[inline]
fn is_horizontal_whitespace(c: char) -> bool {
    c != '\n' && c.is_whitespace()
}

#[cfg(test)]
mod tests;
