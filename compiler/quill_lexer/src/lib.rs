//! Lexer for Quill: three passes over a normalized byte buffer.
//!
//! 1. [`normalize`] strips carriage returns.
//! 2. [`scan`] emits keywords, operators, string literals, and
//!    unclassified runs.
//! 3. [`discover_identifiers`] promotes names that follow a variable-type
//!    keyword and records them.
//! 4. [`resolve`] turns the remaining runs into identifiers or integer
//!    literals where it can.
//!
//! [`lex`] runs all of them in order. Lexing never fails: problems are
//! collected as [`LexError`]s next to the token list, and whether every
//! token was resolved is a separate check ([`LexOutput::validate`]).

pub mod cursor;
mod discover;
mod lex_error;
mod normalize;
mod raw_scanner;
mod registry;
pub mod render;
mod resolve;

use quill_ir::{LexTables, Text, Token, TokenList};

pub use discover::discover_identifiers;
pub use lex_error::LexError;
pub use normalize::normalize;
pub use raw_scanner::{scan, ScanOutput};
pub use registry::IdentifierRegistry;
pub use render::{RenderFormat, TokenStream};
pub use resolve::resolve;

/// Knobs for a lexing run. The tables themselves are passed separately.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    /// Match punctuator table entries during the raw scan. Off by default,
    /// in which case `;` and friends end up as unclassified runs.
    pub scan_punctuators: bool,
}

/// Result of a full lexing run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LexOutput {
    pub tokens: TokenList,
    /// Errors recorded by the passes, in the order they were found.
    pub errors: Vec<LexError>,
    /// Names declared in pass 2, in declaration order (duplicates kept).
    pub identifiers: Vec<String>,
}

impl LexOutput {
    /// Tokens that no pass could classify.
    pub fn unresolved(&self) -> impl Iterator<Item = &Token> {
        self.tokens.unresolved().map(|(_, token)| token)
    }

    /// No recorded errors and no unclassified tokens.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.unresolved().next().is_none()
    }

    /// Recorded errors followed by one [`LexError::Unresolved`] per
    /// unclassified token.
    ///
    /// A digit run that overflowed is already reported and is not repeated.
    pub fn all_errors(&self) -> Vec<LexError> {
        let mut errors = self.errors.clone();
        for token in self.unresolved() {
            let span = token.span();
            let reported = self
                .errors
                .iter()
                .any(|e| matches!(e, LexError::IntegerOverflow { span: s, .. } if *s == span));
            if !reported {
                errors.push(LexError::Unresolved {
                    span,
                    text: token.text().unwrap_or_default().to_owned(),
                });
            }
        }
        errors
    }

    /// Check that the token list is fully resolved.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`all_errors`](Self::all_errors).
    pub fn validate(&self) -> Result<(), LexError> {
        match self.all_errors().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// Lex `text` with the given tables and options.
///
/// `text` is normalized in place before scanning.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn lex(text: &mut Text, tables: &LexTables<'_>, options: &LexOptions) -> LexOutput {
    normalize(text);

    let ScanOutput { mut tokens, mut errors } = scan(text, tables, options);
    let registry = discover_identifiers(&mut tokens, tables);
    errors.extend(resolve(&mut tokens, &registry));

    let output = LexOutput {
        tokens,
        errors,
        identifiers: registry.into_names(),
    };
    tracing::debug!(
        tokens = output.tokens.len(),
        identifiers = output.identifiers.len(),
        unresolved = output.unresolved().count(),
        errors = output.errors.len(),
        "lex complete"
    );
    output
}

/// Lex a source string with [`LexTables::DEFAULT`] and default options.
pub fn lex_source(source: &str) -> LexOutput {
    let mut text = Text::from(source);
    lex(&mut text, &LexTables::DEFAULT, &LexOptions::default())
}
