//! `luja check`: scan each file and report errors only.

use luja_lexer::Tokenized;

use super::{tokenize_all, Operands, SourceText};

/// Scan each file, printing a one-line summary for clean files.
///
/// Returns `false` if any file could not be read or scanned.
pub fn check_files(operands: &Operands) -> bool {
    tokenize_all(operands, summary)
}

pub(crate) fn summary(source: &SourceText, tokenized: &Tokenized) -> String {
    format!("'{}': ok ({} tokens)\n", source.name, tokenized.len())
}
