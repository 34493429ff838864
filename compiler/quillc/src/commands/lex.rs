//! `quill lex`: run the lexer and print the token stream.

use std::io::{self, Write};

use quill_ir::{LexTables, Text};
use quill_lexer::{lex, LexOutput, TokenStream};

use super::read_source;
use crate::config::LexConfig;
use crate::diagnostics::emit_reports;

/// Lex `text` and write the token stream (and optionally the registry) to `out`.
pub fn run_lex<W: Write>(
    text: &mut Text,
    config: &LexConfig,
    mut out: W,
) -> io::Result<LexOutput> {
    let tables = LexTables::DEFAULT;
    let output = lex(text, &tables, &config.lex_options());

    write!(out, "{}", TokenStream::new(&output.tokens, &tables, config.format))?;

    if config.registry {
        writeln!(out, "Identifiers ({}):", output.identifiers.len())?;
        for name in &output.identifiers {
            writeln!(out, "  {name}")?;
        }
    }
    Ok(output)
}

/// Entry point for `quill lex <file>`.
///
/// Recorded errors are always reported. With `--strict`, unresolved tokens
/// are reported too and any error exits with status 1.
pub fn lex_file(config: &LexConfig) {
    let mut text = read_source(&config.path);

    let stdout = io::stdout();
    let output = match run_lex(&mut text, config, stdout.lock()) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("error writing token stream: {e}");
            std::process::exit(1);
        }
    };

    let source = text.as_bytes();
    if config.strict {
        let errors = output.all_errors();
        emit_reports(&config.path, source, &errors);
        if output.validate().is_err() {
            eprintln!("lexing '{}' left {} error(s)", config.path, errors.len());
            std::process::exit(1);
        }
    } else {
        emit_reports(&config.path, source, &output.errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_lexer::RenderFormat;

    fn config(format: RenderFormat, registry: bool) -> LexConfig {
        LexConfig {
            path: "test.ql".into(),
            format,
            punctuators: false,
            strict: false,
            registry,
        }
    }

    fn run(source: &str, config: &LexConfig) -> (String, LexOutput) {
        let mut text = Text::from(source);
        let mut out = Vec::new();
        let output = run_lex(&mut text, config, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), output)
    }

    #[test]
    fn line_format_with_registry() {
        let (printed, output) = run("int x;\r\nx = 5", &config(RenderFormat::Line, true));
        assert_eq!(
            printed,
            "KEYWORD \"int\" NONE @ 0..3\n\
             IDENTIFIER \"x\" NONE @ 4..5\n\
             UNCLASSIFIED \";\" NONE @ 5..6\n\
             IDENTIFIER \"x\" NONE @ 7..8\n\
             OPERATOR \"=\" NONE @ 9..10\n\
             LITERAL \"5\" INT_LITERAL @ 11..12\n\
             Identifiers (1):\n  x\n"
        );
        assert_eq!(output.unresolved().count(), 1);
    }

    #[test]
    fn block_format_without_registry() {
        let (printed, _) = run("+", &config(RenderFormat::Block, false));
        assert_eq!(printed, "TYPE: OPERATOR\nVAL: +\nMDATA: NONE\n\n");
    }

    #[test]
    fn punctuators_flag_reaches_the_lexer() {
        let mut cfg = config(RenderFormat::Line, false);
        cfg.punctuators = true;
        let (_, output) = run("int x;", &cfg);
        assert!(output.is_clean());
    }
}
