//! Command handlers for the `luja` CLI.
//!
//! `lex` and `check` share one pipeline: every operand is read and
//! tokenized on the rayon pool, then results are printed in argument
//! order. Shared helpers (operand parsing, file reading, diagnostic
//! rendering) live here in the module root.

use std::io::{self, IsTerminal};

use ariadne::{Config, Label, Report, ReportKind, Source};
use luja_lexer::{
    FileInput, Input, Lexer, ReaderInput, ScanConfig, ScanError, Tokenized, UnrecognizedPolicy,
};
use rayon::prelude::*;
use tracing::debug;

mod check;
mod lex;

pub use check::check_files;
pub use lex::lex_files;

/// Operand name that reads standard input.
pub const STDIN_OPERAND: &str = "-";

/// Parsed `<file>... [--strict]` operands of `lex` and `check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Operands {
    pub config: ScanConfig,
    pub paths: Vec<String>,
}

/// Split command operands into flags and file paths.
///
/// `-` is a path (standard input); any other argument starting with `-`
/// must be a known flag.
pub fn parse_operands(args: &[String]) -> Result<Operands, String> {
    let mut operands = Operands::default();
    for arg in args {
        match arg.as_str() {
            "--strict" => {
                operands.config = operands
                    .config
                    .with_unrecognized(UnrecognizedPolicy::Reject);
            }
            STDIN_OPERAND => operands.paths.push(arg.clone()),
            flag if flag.starts_with('-') => return Err(format!("unknown option '{flag}'")),
            path => operands.paths.push(path.to_owned()),
        }
    }
    Ok(operands)
}

/// One operand read into memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SourceText {
    pub name: String,
    pub text: String,
}

/// Read an operand, turning I/O failures into a user-facing message.
pub(crate) fn read_source(path: &str) -> Result<SourceText, String> {
    if path == STDIN_OPERAND {
        return ReaderInput::new(io::stdin().lock())
            .input()
            .map(|text| SourceText {
                name: "<stdin>".to_owned(),
                text,
            })
            .map_err(|e| format!("error reading standard input: {e}"));
    }

    FileInput::new(path)
        .input()
        .map(|text| SourceText {
            name: path.to_owned(),
            text,
        })
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
            io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
            io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
            _ => format!("error reading '{path}': {e}"),
        })
}

/// Render a scan error as a labelled source snippet.
///
/// Offsets are character offsets, which is what ariadne expects.
pub(crate) fn render_scan_error(source: &SourceText, error: &ScanError, color: bool) -> String {
    let name = source.name.as_str();
    let start = error.start() as usize;
    let mut out = Vec::new();
    let written = Report::build(ReportKind::Error, name, start)
        .with_config(Config::default().with_color(color))
        .with_message(error)
        .with_label(Label::new((name, start..start + 1)).with_message(error.label()))
        .finish()
        .write((name, Source::from(source.text.as_str())), &mut out);

    match written {
        Ok(()) => String::from_utf8_lossy(&out).into_owned(),
        // Rendering only fails on a broken writer; fall back to the plain message.
        Err(_) => format!("error: {error}\n"),
    }
}

/// What happened to one operand.
enum Outcome {
    Scanned(String),
    Failed { source: SourceText, error: ScanError },
    Unreadable(String),
}

/// Read and tokenize every path in parallel, then print results in order.
///
/// `report` formats a successful scan for stdout. Returns `true` when every
/// operand was read and scanned without error.
pub(crate) fn tokenize_all<F>(operands: &Operands, report: F) -> bool
where
    F: Fn(&SourceText, &Tokenized) -> String + Sync,
{
    let lexer = Lexer::new(operands.config.clone());
    debug!(files = operands.paths.len(), "tokenizing");

    let outcomes: Vec<Outcome> = operands
        .paths
        .par_iter()
        .map(|path| {
            let source = match read_source(path) {
                Ok(source) => source,
                Err(msg) => return Outcome::Unreadable(msg),
            };
            match lexer.scan(&source.text) {
                Ok(tokenized) => Outcome::Scanned(report(&source, &tokenized)),
                Err(error) => Outcome::Failed { source, error },
            }
        })
        .collect();

    let color = io::stderr().is_terminal();
    let mut ok = true;
    for outcome in outcomes {
        match outcome {
            Outcome::Scanned(text) => print!("{text}"),
            Outcome::Failed { source, error } => {
                ok = false;
                eprint!("{}", render_scan_error(&source, &error, color));
            }
            Outcome::Unreadable(msg) => {
                ok = false;
                eprintln!("{msg}");
            }
        }
    }
    ok
}

#[cfg(test)]
mod tests;
