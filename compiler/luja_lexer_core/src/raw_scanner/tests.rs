use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    let buf = SourceBuffer::new(source);
    let mut scanner = RawScanner::new(buf.cursor());
    let mut tokens = Vec::new();
    loop {
        let tok = scanner.next_token();
        if tok.tag == RawTag::Eof {
            break;
        }
        tokens.push(tok);
    }
    tokens
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_texts(source: &str) -> Vec<(RawTag, String)> {
    let chars: Vec<char> = source.chars().collect();
    let mut offset = 0usize;
    scan(source)
        .into_iter()
        .map(|tok| {
            let end = offset + tok.len as usize;
            let text = chars[offset..end].iter().collect();
            offset = end;
            (tok.tag, text)
        })
        .collect()
}

fn pair(tag: RawTag, text: &str) -> (RawTag, String) {
    (tag, text.to_string())
}

// ─── Coverage ──────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "local x = 10",
        "a..b...c.d",
        "-- line\n--[[ block ]] y",
        "'it\\'s' \"q\"",
        "x < y % z",
        "'never closed",
        "--[[ never closed",
        "\u{e9}t\u{e9} = 1\r\n",
    ];
    for source in sources {
        let total_len: u32 = scan(source).iter().map(|t| t.len).sum();
        assert_eq!(
            total_len as usize,
            source.chars().count(),
            "total token length mismatch for {source:?}",
        );
    }
}

#[test]
fn empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token(), RawToken { tag: RawTag::Eof, len: 0 });
}

#[test]
fn eof_is_sticky() {
    let buf = SourceBuffer::new("x");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Namespace);
    for _ in 0..3 {
        assert_eq!(scanner.next_token(), RawToken { tag: RawTag::Eof, len: 0 });
    }
    assert_eq!(scanner.pos(), 1);
}

// ─── Namespaces & Numbers ──────────────────────────────────────

#[test]
fn namespace_run() {
    assert_eq!(
        scan_texts("local _G"),
        vec![
            pair(RawTag::Namespace, "local"),
            pair(RawTag::Whitespace, " "),
            pair(RawTag::Namespace, "_G"),
        ]
    );
}

#[test]
fn namespace_does_not_extend_over_digits() {
    assert_eq!(
        scan_texts("abc123def"),
        vec![
            pair(RawTag::Namespace, "abc"),
            pair(RawTag::Number, "123"),
            pair(RawTag::Namespace, "def"),
        ]
    );
}

#[test]
fn namespace_accepts_unicode_letters() {
    assert_eq!(scan_texts("\u{e9}t\u{e9}"), vec![pair(RawTag::Namespace, "\u{e9}t\u{e9}")]);
}

#[test]
fn number_stops_at_dot() {
    assert_eq!(
        scan_texts("3.14"),
        vec![
            pair(RawTag::Number, "3"),
            pair(RawTag::Dot, "."),
            pair(RawTag::Number, "14"),
        ]
    );
}

#[test]
fn hex_literal_splits() {
    assert_eq!(
        scan_texts("0xFF"),
        vec![pair(RawTag::Number, "0"), pair(RawTag::Namespace, "xFF")]
    );
}

// ─── Strings ───────────────────────────────────────────────────

#[test]
fn single_and_double_quoted() {
    assert_eq!(
        scan_texts("'a' \"b\""),
        vec![
            pair(RawTag::String, "'a'"),
            pair(RawTag::Whitespace, " "),
            pair(RawTag::String, "\"b\""),
        ]
    );
}

#[test]
fn empty_string() {
    assert_eq!(scan_texts("''"), vec![pair(RawTag::String, "''")]);
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(scan_texts("'a\\'b'"), vec![pair(RawTag::String, "'a\\'b'")]);
}

#[test]
fn other_quote_does_not_close() {
    assert_eq!(scan_texts("\"it's\""), vec![pair(RawTag::String, "\"it's\"")]);
}

#[test]
fn string_spans_newlines() {
    assert_eq!(scan_texts("'a\nb'"), vec![pair(RawTag::String, "'a\nb'")]);
}

#[test]
fn unterminated_string_runs_to_eof() {
    assert_eq!(
        scan_texts("x = 'abc"),
        vec![
            pair(RawTag::Namespace, "x"),
            pair(RawTag::Whitespace, " "),
            pair(RawTag::Equal, "="),
            pair(RawTag::Whitespace, " "),
            pair(RawTag::UnterminatedString, "'abc"),
        ]
    );
}

#[test]
fn lone_quote_is_unterminated() {
    assert_eq!(scan_tags("\""), vec![RawTag::UnterminatedString]);
}

#[test]
fn escaped_final_quote_is_unterminated() {
    assert_eq!(scan_tags("'abc\\'"), vec![RawTag::UnterminatedString]);
}

// ─── Punctuation ───────────────────────────────────────────────

#[test]
fn single_character_punctuation() {
    assert_eq!(
        scan_tags("{}()[]:?;,#=+*!~"),
        vec![
            RawTag::LeftBrace,
            RawTag::RightBrace,
            RawTag::LeftParen,
            RawTag::RightParen,
            RawTag::LeftBracket,
            RawTag::RightBracket,
            RawTag::Colon,
            RawTag::Question,
            RawTag::Semicolon,
            RawTag::Comma,
            RawTag::Hash,
            RawTag::Equal,
            RawTag::Plus,
            RawTag::Star,
            RawTag::Bang,
            RawTag::Tilde,
        ]
    );
}

#[test]
fn dots_disambiguate() {
    assert_eq!(
        scan_texts("a.b..c...d"),
        vec![
            pair(RawTag::Namespace, "a"),
            pair(RawTag::Dot, "."),
            pair(RawTag::Namespace, "b"),
            pair(RawTag::DotDot, ".."),
            pair(RawTag::Namespace, "c"),
            pair(RawTag::DotDotDot, "..."),
            pair(RawTag::Namespace, "d"),
        ]
    );
}

#[test]
fn four_dots_are_varargs_then_dot() {
    assert_eq!(scan_tags("...."), vec![RawTag::DotDotDot, RawTag::Dot]);
}

#[test]
fn dots_at_end_of_input() {
    assert_eq!(scan_tags(".."), vec![RawTag::DotDot]);
    assert_eq!(scan_tags("."), vec![RawTag::Dot]);
}

#[test]
fn newline_is_a_token() {
    assert_eq!(
        scan_tags("a\r\nb"),
        vec![
            RawTag::Namespace,
            RawTag::Whitespace,
            RawTag::Newline,
            RawTag::Namespace,
        ]
    );
}

#[test]
fn unsupported_operators_are_unrecognized() {
    assert_eq!(
        scan_texts("<>/%"),
        vec![
            pair(RawTag::Unrecognized, "<"),
            pair(RawTag::Unrecognized, ">"),
            pair(RawTag::Unrecognized, "/"),
            pair(RawTag::Unrecognized, "%"),
        ]
    );
}

#[test]
fn interior_null_is_unrecognized() {
    assert_eq!(
        scan_tags("a\0b"),
        vec![RawTag::Namespace, RawTag::Unrecognized, RawTag::Namespace]
    );
}

// ─── Minus & Comments ──────────────────────────────────────────

#[test]
fn lone_minus() {
    assert_eq!(
        scan_texts("a-b"),
        vec![
            pair(RawTag::Namespace, "a"),
            pair(RawTag::Minus, "-"),
            pair(RawTag::Namespace, "b"),
        ]
    );
}

#[test]
fn line_comment_stops_before_newline() {
    assert_eq!(
        scan_texts("-- comment\nx"),
        vec![
            pair(RawTag::LineComment, "-- comment"),
            pair(RawTag::Newline, "\n"),
            pair(RawTag::Namespace, "x"),
        ]
    );
}

#[test]
fn line_comment_at_eof() {
    assert_eq!(scan_texts("--"), vec![pair(RawTag::LineComment, "--")]);
}

#[test]
fn single_bracket_is_line_comment() {
    assert_eq!(
        scan_texts("--[ not block\n"),
        vec![
            pair(RawTag::LineComment, "--[ not block"),
            pair(RawTag::Newline, "\n"),
        ]
    );
}

#[test]
fn block_comment() {
    assert_eq!(
        scan_texts("--[[ block ]]x"),
        vec![
            pair(RawTag::BlockComment, "--[[ block ]]"),
            pair(RawTag::Namespace, "x"),
        ]
    );
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        scan_tags("--[[ a\nb ] c ]]\n"),
        vec![RawTag::BlockComment, RawTag::Newline]
    );
}

#[test]
fn empty_block_comment() {
    assert_eq!(scan_texts("--[[]]"), vec![pair(RawTag::BlockComment, "--[[]]")]);
}

#[test]
fn unterminated_block_comment() {
    assert_eq!(
        scan_texts("--[[ never closes"),
        vec![pair(RawTag::UnterminatedBlockComment, "--[[ never closes")]
    );
}

#[test]
fn block_comment_with_single_close_bracket_is_unterminated() {
    assert_eq!(scan_tags("--[[ x ]"), vec![RawTag::UnterminatedBlockComment]);
    assert_eq!(scan_tags("--[["), vec![RawTag::UnterminatedBlockComment]);
}

// ─── Property tests ────────────────────────────────────────────

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_scanner {
    use super::scan;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn scan_covers_every_character(source in "[a-z0-9 .\\-\\[\\]'\"\\\\\n{}()=<]{0,64}") {
            let total: u32 = scan(&source).iter().map(|t| t.len).sum();
            prop_assert_eq!(total as usize, source.chars().count());
        }

        #[test]
        fn every_token_makes_progress(source in any::<String>()) {
            for tok in scan(&source) {
                prop_assert!(tok.len >= 1, "zero-length {:?} in {:?}", tok.tag, source);
            }
        }
    }
}
