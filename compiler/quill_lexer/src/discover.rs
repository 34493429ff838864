//! Pass 2: identifier discovery from declaration context.
//!
//! An unclassified token directly after a variable-type keyword (one of the
//! table's declarator slots) is a declared name. It becomes an identifier and
//! its text goes into the registry, which pass 3 consults for every later
//! use of the name.

use quill_ir::{LexTables, Token, TokenKind, TokenList};

use crate::registry::IdentifierRegistry;

/// Promote declared names to identifiers and collect them.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = tokens.len()))]
pub fn discover_identifiers(tokens: &mut TokenList, tables: &LexTables<'_>) -> IdentifierRegistry {
    let mut registry = IdentifierRegistry::new();

    for index in 1..tokens.len() {
        if !declares_variable(&tokens[index - 1], tables) {
            continue;
        }
        let Some(token) = tokens.get_mut(index) else {
            continue;
        };
        if token.promote_to_identifier() {
            if let Some(name) = token.text() {
                tracing::trace!(identifier = name, span = %token.span(), "declared identifier");
                registry.insert(name);
            }
        }
    }

    tracing::debug!(declarations = registry.len(), "identifier discovery complete");
    registry
}

fn declares_variable(token: &Token, tables: &LexTables<'_>) -> bool {
    token.kind() == TokenKind::Keyword
        && token
            .table_index()
            .is_some_and(|i| tables.is_declarator(i))
}
