//! `luja lex`: dump the token table of each file.

use std::fmt::Write as _;

use luja_lexer::Tokenized;

use super::{tokenize_all, Operands, SourceText};

/// Tokenize each file and print one `KIND: text` line per token.
///
/// Returns `false` if any file could not be read or scanned.
pub fn lex_files(operands: &Operands) -> bool {
    tokenize_all(operands, token_dump)
}

pub(crate) fn token_dump(source: &SourceText, tokenized: &Tokenized) -> String {
    let mut out = format!(
        "Tokens for '{}' ({} tokens):\n",
        source.name,
        tokenized.len()
    );
    let mut nav = tokenized.navigator();
    while let Ok(token) = nav.next() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "  {}: {}",
            token.kind_name(),
            escape_newlines(&token.text())
        );
    }
    out
}

fn escape_newlines(text: &str) -> String {
    text.replace('\n', "\\n")
}
