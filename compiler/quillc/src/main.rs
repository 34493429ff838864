//! Quill Compiler CLI

use quillc::commands::lex_file;
use quillc::config::{LexConfig, LOG_ENV};
use quillc::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => match LexConfig::parse(&args[2..]) {
            Ok(config) => lex_file(&config),
            Err(e) => {
                eprintln!("error: {e}");
                print_lex_usage();
                std::process::exit(1);
            }
        },
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("Quill Compiler {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

const LEX_OPTIONS: &str = "\
  --format=<name>   Output layout: block (default), line
  --punctuators     Scan punctuators such as ';'
  --strict          Report unresolved tokens and exit 1 if any remain
  --registry        Also print the declared identifiers
";

fn print_lex_usage() {
    eprintln!("Usage: quill lex <file> [options]");
    eprintln!();
    eprintln!("Options:");
    eprint!("{LEX_OPTIONS}");
}

fn print_usage() {
    println!("Quill Compiler");
    println!();
    println!("Usage: quill <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>        Tokenize and display tokens");
    println!("  help              Show this help message");
    println!("  version           Show version information");
    println!();
    println!("Lex options:");
    print!("{LEX_OPTIONS}");
    println!();
    println!("Environment:");
    println!("  {LOG_ENV}         Tracing filter, e.g. {LOG_ENV}=quill_lexer=debug");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_lex_option_parses() {
        for line in LEX_OPTIONS.lines() {
            let flag = line.split_whitespace().next().unwrap();
            let flag = flag.replace("<name>", "line");
            let args = [flag, "main.ql".to_string()];
            assert!(LexConfig::parse(&args).is_ok(), "{line}");
        }
    }
}
