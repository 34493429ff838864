//! Pass 3: resolve the remaining unclassified tokens.
//!
//! Each unclassified token, in order, becomes an identifier if its text was
//! declared in pass 2, otherwise an integer literal if its text is all ASCII
//! digits. Anything else stays unclassified for the consumer to reject.
//! Registry lookup comes first, so a declared name always wins over a number.

use quill_ir::{Token, TokenList};

use crate::registry::IdentifierRegistry;
use crate::LexError;

/// Outcome of resolving a single token.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Resolution {
    Identifier,
    Integer(i64),
    Overflow,
    Unresolved,
}

/// Resolve unclassified tokens in place.
///
/// Returns one [`LexError::IntegerOverflow`] per digit run too large for
/// `i64`; such tokens are left unclassified.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(tokens = tokens.len(), registry = registry.len())
)]
pub fn resolve(tokens: &mut TokenList, registry: &IdentifierRegistry) -> Vec<LexError> {
    let mut errors = Vec::new();
    let mut resolved = 0usize;

    for token in tokens.iter_mut().filter(|t| t.is_unclassified()) {
        match classify(token, registry) {
            Resolution::Identifier => {
                token.promote_to_identifier();
                resolved += 1;
            }
            Resolution::Integer(value) => {
                token.resolve_integer(value);
                resolved += 1;
            }
            Resolution::Overflow => {
                let text = token.text().unwrap_or_default().to_owned();
                tracing::debug!(%text, span = %token.span(), "integer literal overflows i64");
                errors.push(LexError::IntegerOverflow {
                    span: token.span(),
                    text,
                });
            }
            Resolution::Unresolved => {}
        }
    }

    tracing::debug!(resolved, overflowed = errors.len(), "resolution complete");
    errors
}

fn classify(token: &Token, registry: &IdentifierRegistry) -> Resolution {
    let Some(text) = token.text() else {
        return Resolution::Unresolved;
    };
    if registry.contains(text) {
        return Resolution::Identifier;
    }
    if !is_digit_run(text) {
        return Resolution::Unresolved;
    }
    match text.parse::<i64>() {
        Ok(value) => Resolution::Integer(value),
        Err(_) => Resolution::Overflow,
    }
}

/// Non-empty and made only of ASCII decimal digits.
fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
