//! Lexer error types.
//!
//! None of these stop the lexer. Each pass records what it could not handle
//! and keeps going, so a token list is always produced; the errors travel
//! alongside it in [`LexOutput`](crate::LexOutput).

use quill_ir::Span;

/// A soft lexical error, located by span.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexError {
    /// A `"` with no closing partner before end of input.
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    /// A digit-only token too large for a signed 64-bit integer.
    #[error("integer literal `{text}` does not fit in 64 bits")]
    IntegerOverflow { span: Span, text: String },
    /// A token no pass could classify.
    #[error("unrecognized token `{text}`")]
    Unresolved { span: Span, text: String },
}

impl LexError {
    /// Where the error occurred.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnterminatedString { span }
            | LexError::IntegerOverflow { span, .. }
            | LexError::Unresolved { span, .. } => *span,
        }
    }

    /// Short label describing the highlighted source.
    pub fn label(&self) -> &'static str {
        match self {
            LexError::UnterminatedString { .. } => "string starts here and never closes",
            LexError::IntegerOverflow { .. } => "exceeds the signed 64-bit range",
            LexError::Unresolved { .. } => "not an operator, keyword, identifier, or literal",
        }
    }

    /// Actionable hint, if one applies.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnterminatedString { .. } => Some("add a closing `\"`"),
            LexError::IntegerOverflow { .. } => None,
            LexError::Unresolved { .. } => {
                Some("declare the name first, for example `int name`, or separate it with spaces")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_accessor() {
        let err = LexError::IntegerOverflow {
            span: Span::new(3, 25),
            text: "9".repeat(22),
        };
        assert_eq!(err.span(), Span::new(3, 25));
        assert!(err.help().is_none());
    }

    #[test]
    fn messages() {
        let err = LexError::Unresolved {
            span: Span::new(0, 3),
            text: "foo".into(),
        };
        assert_eq!(err.to_string(), "unrecognized token `foo`");
        assert_eq!(
            LexError::UnterminatedString {
                span: Span::new(0, 1)
            }
            .to_string(),
            "unterminated string literal"
        );
    }
}
