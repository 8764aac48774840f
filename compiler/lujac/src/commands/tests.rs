use super::check::summary;
use super::lex::token_dump;
use super::*;
use luja_lexer::lex as scan;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

fn source(name: &str, text: &str) -> SourceText {
    SourceText {
        name: name.to_owned(),
        text: text.to_owned(),
    }
}

// === Operands ===

#[test]
fn operands_default_to_skipping() {
    let operands = parse_operands(&args(&["a.lua", "b.lua"])).unwrap();
    assert_eq!(operands.config, ScanConfig::default());
    assert_eq!(operands.paths, args(&["a.lua", "b.lua"]));
}

#[test]
fn strict_flag_anywhere() {
    let operands = parse_operands(&args(&["a.lua", "--strict", "-"])).unwrap();
    assert_eq!(operands.config, ScanConfig::strict());
    assert_eq!(operands.paths, args(&["a.lua", "-"]));
}

#[test]
fn unknown_flag_is_rejected() {
    let err = parse_operands(&args(&["--fast", "a.lua"])).unwrap_err();
    assert_eq!(err, "unknown option '--fast'");
}

// === Reading ===

#[test]
fn missing_file_message() {
    let err = read_source("no/such/script.lua").unwrap_err();
    assert_eq!(err, "cannot find file 'no/such/script.lua'");
}

// === Output ===

#[test]
fn token_dump_lists_kinds_and_text() {
    let src = source("demo.lua", "x = 'a'\n");
    let tokenized = scan(&src.text).unwrap();
    assert_eq!(
        token_dump(&src, &tokenized),
        "Tokens for 'demo.lua' (4 tokens):\n  NAMESPACE: x\n  EQUAL: =\n  STRING: 'a'\n  EOL: \\n\n"
    );
}

#[test]
fn check_summary_counts_tokens() {
    let src = source("demo.lua", "a..b");
    let tokenized = scan(&src.text).unwrap();
    assert_eq!(summary(&src, &tokenized), "'demo.lua': ok (3 tokens)\n");
}

#[test]
fn rendered_error_names_file_and_problem() {
    let src = source("bad.lua", "x = 1\ny = 'oops\n");
    let error = scan(&src.text).unwrap_err();
    let rendered = render_scan_error(&src, &error, false);
    assert!(rendered.contains("unexpected end of string: Line #2, Char #4"));
    assert!(rendered.contains("bad.lua"));
    assert!(rendered.contains(error.label()));
}
