//! Raw token tags produced by the scanner.
//!
//! A raw tag says what the scanner saw, nothing more. Trivia, comments,
//! unrecognized characters and unterminated constructs all get a tag of
//! their own so that the token lengths of a full scan add up to the source
//! length. The integration layer (`luja_lexer`) decides what to keep.

/// Raw token tag, laid out in semantic ranges.
///
/// | Range   | Category    |
/// |---------|-------------|
/// | 0-15    | Literals    |
/// | 16-31   | Brackets    |
/// | 32-47   | Punctuation |
/// | 48-63   | Operators   |
/// | 112-115 | Trivia      |
/// | 240-247 | Errors      |
/// | 255     | EOF         |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Literals (0-15) ===
    /// Run of alphabetic characters and `_`.
    Namespace = 0,
    /// Run of ASCII decimal digits.
    Number = 1,
    /// Quoted string, delimiters included.
    String = 2,

    // === Brackets (16-31) ===
    LeftBrace = 16,
    RightBrace = 17,
    LeftParen = 18,
    RightParen = 19,
    LeftBracket = 20,
    RightBracket = 21,

    // === Punctuation (32-47) ===
    Colon = 32,
    Question = 33,
    Semicolon = 34,
    Comma = 35,
    Dot = 36,
    Hash = 37,
    Newline = 38,

    // === Operators (48-63) ===
    Equal = 48,
    Plus = 49,
    Minus = 50,
    Star = 51,
    DotDot = 52,
    DotDotDot = 53,
    Bang = 54,
    Tilde = 55,

    // === Trivia (112-115) ===
    /// Horizontal whitespace (anything `char::is_whitespace` except `\n`).
    Whitespace = 112,
    /// `--` up to, but not including, the next `\n`.
    LineComment = 113,
    /// `--[[ ... ]]`.
    BlockComment = 114,

    // === Errors (240-247) ===
    /// A single character outside the grammar.
    Unrecognized = 240,
    /// Quote opened, input ended before the closing quote.
    UnterminatedString = 241,
    /// `--[[` opened, input ended before `]]`.
    UnterminatedBlockComment = 242,

    Eof = 255,
}

impl RawTag {
    /// Whitespace and comments: consumed, never turned into tokens.
    pub const fn is_trivia(self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::LineComment | Self::BlockComment
        )
    }

    pub const fn is_error(self) -> bool {
        (self as u8) >= 240 && (self as u8) < 255
    }
}

/// One scanner step: what was seen and how many characters it covered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
