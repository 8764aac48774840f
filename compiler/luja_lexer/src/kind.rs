//! The closed set of token kinds.
//!
//! Discriminants are stable and grouped by category with gaps between
//! groups. The scanner only ever assigns the structural, bracket,
//! punctuation, operator and logic kinds; the keyword kinds exist for
//! consumers that classify namespace tokens themselves (see
//! [`TokenKind::keyword`]).

use std::fmt;

/// Lexical category of a token.
///
/// | Range | Category    |
/// |-------|-------------|
/// | 1-4   | Structural  |
/// | 10-15 | Brackets    |
/// | 20-26 | Punctuation |
/// | 30-36 | Operators   |
/// | 46    | Logic       |
/// | 70-90 | Keywords    |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Structural (1-4) ===
    /// Alphabetic/`_` run with no meaning assigned yet.
    Namespace = 1,
    Number = 2,
    /// Quoted with `'` or `"`, delimiters included.
    String = 3,
    /// Never emitted: comments are dropped by the tokenizer.
    Comment = 4,

    // === Brackets (10-15) ===
    ObjectStart = 10,
    ObjectEnd = 11,
    FunctionStart = 12,
    FunctionEnd = 13,
    ArrayStart = 14,
    ArrayEnd = 15,

    // === Punctuation (20-26) ===
    Colon = 20,
    Question = 21,
    SemiColon = 22,
    Comma = 23,
    Period = 24,
    Hash = 25,
    Eol = 26,

    // === Operators (30-36) ===
    Equal = 30,
    Add = 31,
    Sub = 32,
    Mul = 33,
    /// Never emitted: `/` is outside the scanned grammar.
    Div = 34,
    Concat = 35,
    Varargs = 36,

    // === Logic (46) ===
    /// `~`
    LogicNot = 46,

    // === Keywords (70-90) ===
    And = 70,
    Break = 71,
    Do = 72,
    Else = 73,
    ElseIf = 74,
    End = 75,
    False = 76,
    For = 77,
    Function = 78,
    If = 79,
    In = 80,
    Local = 81,
    Nil = 82,
    /// The `not` keyword, also assigned to `!`.
    Not = 83,
    Or = 84,
    Repeat = 85,
    Return = 86,
    Then = 87,
    True = 88,
    Until = 89,
    While = 90,
}

impl TokenKind {
    /// Canonical upper-case name used in token dumps and diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Namespace => "NAMESPACE",
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Comment => "COMMENT",
            Self::ObjectStart => "OBJECT_START",
            Self::ObjectEnd => "OBJECT_END",
            Self::FunctionStart => "FUNCTION_START",
            Self::FunctionEnd => "FUNCTION_END",
            Self::ArrayStart => "ARRAY_START",
            Self::ArrayEnd => "ARRAY_END",
            Self::Colon => "COLON",
            Self::Question => "QUESTION",
            Self::SemiColon => "SEMI_COLON",
            Self::Comma => "COMMA",
            Self::Period => "PERIOD",
            Self::Hash => "HASH",
            Self::Eol => "EOL",
            Self::Equal => "EQUAL",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Concat => "CONCAT",
            Self::Varargs => "VARARGS",
            Self::LogicNot => "LOGIC_NOT",
            Self::And => "AND",
            Self::Break => "BREAK",
            Self::Do => "DO",
            Self::Else => "ELSE",
            Self::ElseIf => "ELSEIF",
            Self::End => "END",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Function => "FUNCTION",
            Self::If => "IF",
            Self::In => "IN",
            Self::Local => "LOCAL",
            Self::Nil => "NIL",
            Self::Not => "NOT",
            Self::Or => "OR",
            Self::Repeat => "REPEAT",
            Self::Return => "RETURN",
            Self::Then => "THEN",
            Self::True => "TRUE",
            Self::Until => "UNTIL",
            Self::While => "WHILE",
        }
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        let tag = self as u8;
        tag >= 70 && tag <= 90
    }

    /// Look up a reserved word by text.
    ///
    /// Returns `None` for anything that is not one of the 21 reserved
    /// words. Matching is case-sensitive. The length check rejects most
    /// identifiers before any comparison: reserved words are 2-8 chars.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        if !(2..=8).contains(&text.len()) {
            return None;
        }

        match text.len() {
            2 => match text {
                "do" => Some(Self::Do),
                "if" => Some(Self::If),
                "in" => Some(Self::In),
                "or" => Some(Self::Or),
                _ => None,
            },
            3 => match text {
                "and" => Some(Self::And),
                "end" => Some(Self::End),
                "for" => Some(Self::For),
                "nil" => Some(Self::Nil),
                "not" => Some(Self::Not),
                _ => None,
            },
            4 => match text {
                "else" => Some(Self::Else),
                "then" => Some(Self::Then),
                "true" => Some(Self::True),
                _ => None,
            },
            5 => match text {
                "break" => Some(Self::Break),
                "false" => Some(Self::False),
                "local" => Some(Self::Local),
                "until" => Some(Self::Until),
                "while" => Some(Self::While),
                _ => None,
            },
            6 => match text {
                "elseif" => Some(Self::ElseIf),
                "repeat" => Some(Self::Repeat),
                "return" => Some(Self::Return),
                _ => None,
            },
            8 => match text {
                "function" => Some(Self::Function),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
