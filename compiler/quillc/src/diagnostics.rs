//! Rendering lexer errors as annotated source snippets.

use std::io::{self, Write};
use std::ops::Range;

use ariadne::{Config, Label, Report, ReportKind};
use quill_ir::Span;
use quill_lexer::LexError;

/// Write one report per error to `out`.
///
/// `source` is the raw buffer the spans index into. It is shown decoded
/// lossily, so files that are not valid UTF-8 still get snippets.
pub fn write_reports<W: Write>(
    path: &str,
    source: &[u8],
    errors: &[LexError],
    color: bool,
    mut out: W,
) -> io::Result<()> {
    let decoded = String::from_utf8_lossy(source);
    for error in errors {
        let range = char_range(source, error.span());
        let mut builder = Report::<(String, Range<usize>)>::build(
            ReportKind::Error,
            path.to_string(),
            range.start,
        )
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(Label::new((path.to_string(), range)).with_message(error.label()));
        if let Some(help) = error.help() {
            builder = builder.with_help(help);
        }
        builder
            .finish()
            .write(ariadne::sources([(path.to_string(), &*decoded)]), &mut out)?;
    }
    Ok(())
}

/// Print reports for `errors` to stderr.
pub fn emit_reports(path: &str, source: &[u8], errors: &[LexError]) {
    let stderr = io::stderr();
    if let Err(e) = write_reports(path, source, errors, true, stderr.lock()) {
        tracing::warn!(error = %e, "failed to write diagnostics");
    }
}

/// Convert a byte span into the character offsets the report labels use.
///
/// Offsets are counted in the lossily decoded text: every invalid sequence
/// becomes one replacement character. Token boundaries never split a
/// multi-byte sequence, so decoding a prefix agrees with decoding the whole.
fn char_range(source: &[u8], span: Span) -> Range<usize> {
    let to_chars = |byte: usize| {
        let prefix = source.get(..byte).unwrap_or(source);
        String::from_utf8_lossy(prefix).chars().count()
    };
    let range = span.to_range();
    to_chars(range.start)..to_chars(range.end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use quill_ir::{LexTables, Text};
    use quill_lexer::{lex, LexOptions};

    fn render(source: &[u8], errors: &[LexError]) -> String {
        let mut out = Vec::new();
        write_reports("main.ql", source, errors, false, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn char_offsets_skip_multibyte_sequences() {
        // "é" is two bytes
        let source = "é foo".as_bytes();
        assert_eq!(char_range(source, Span::new(3, 6)), 2..5);
        assert_eq!(char_range(source, Span::new(0, 2)), 0..1);
    }

    #[test]
    fn invalid_utf8_counts_one_char_per_bad_byte() {
        let source: &[u8] = b"\xff\xfe x \xc3 foo";
        let mut text = Text::from_bytes(source);
        let output = lex(&mut text, &LexTables::DEFAULT, &LexOptions::default());
        let foo = output
            .tokens
            .iter()
            .find(|t| t.text() == Some("foo"))
            .unwrap()
            .span();
        assert_eq!(foo, Span::new(7, 10));

        let chars = char_range(source, foo);
        let labelled: String = String::from_utf8_lossy(source)
            .chars()
            .skip(chars.start)
            .take(chars.len())
            .collect();
        assert_eq!(labelled, "foo");
    }

    #[test]
    fn report_on_invalid_utf8_labels_the_token() {
        let source: &[u8] = b"\xff foo";
        let rendered = render(
            source,
            &[LexError::Unresolved {
                span: Span::new(2, 5),
                text: "foo".into(),
            }],
        );
        assert!(rendered.contains("unrecognized token `foo`"), "{rendered}");
        assert!(rendered.contains("\u{fffd} foo"), "{rendered}");
    }

    #[test]
    fn report_mentions_message_label_and_help() {
        let source = b"int x;\nfoo = 1\n";
        let rendered = render(
            source,
            &[LexError::Unresolved {
                span: Span::new(7, 10),
                text: "foo".into(),
            }],
        );
        assert!(rendered.contains("unrecognized token `foo`"), "{rendered}");
        assert!(rendered.contains("main.ql"), "{rendered}");
        assert!(rendered.contains("not an operator, keyword"), "{rendered}");
        assert!(rendered.contains("declare the name first"), "{rendered}");
    }

    #[test]
    fn one_report_per_error() {
        let source = b"a \"b";
        let rendered = render(
            source,
            &[
                LexError::UnterminatedString {
                    span: Span::new(2, 4),
                },
                LexError::Unresolved {
                    span: Span::new(0, 1),
                    text: "a".into(),
                },
            ],
        );
        assert_eq!(rendered.matches("Error:").count(), 2, "{rendered}");
    }

    #[test]
    fn no_errors_no_output() {
        assert_eq!(render(b"int x", &[]), "");
    }
}
