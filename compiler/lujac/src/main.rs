//! Luja CLI
//!
//! Tokenizes Luja sources and reports scan errors.

use lujac::commands::{check_files, lex_files, parse_operands, Operands};
use lujac::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let operands = operands_or_exit("lex", &args[2..]);
            if !lex_files(&operands) {
                std::process::exit(1);
            }
        }
        "check" => {
            let operands = operands_or_exit("check", &args[2..]);
            if !check_files(&operands) {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("Luja tokenizer {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// Parse `<file>... [--strict]`, exiting with usage on bad input.
fn operands_or_exit(command: &str, rest: &[String]) -> Operands {
    match parse_operands(rest) {
        Ok(operands) if !operands.paths.is_empty() => operands,
        Ok(_) => {
            eprintln!("Usage: luja {command} <file>... [--strict]");
            eprintln!();
            eprintln!("Use `-` to read from standard input.");
            std::process::exit(1);
        }
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!("Usage: luja {command} <file>... [--strict]");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Luja tokenizer");
    println!();
    println!("Usage: luja <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...        Tokenize and display tokens");
    println!("  check <file>...      Tokenize and report scan errors only");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --strict             Reject characters outside the grammar");
    println!();
    println!("A file named `-` is read from standard input.");
    println!("Set RUST_LOG (e.g. RUST_LOG=luja_lexer=debug) for scan tracing.");
}
