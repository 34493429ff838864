//! Token types for lexer output.
//!
//! A token is a kind, a value, and (for literals) a literal subkind. The
//! value is a closed sum type, so which payload a token owns is always
//! explicit: a table index for operators, keywords, and punctuators; owned
//! text for strings, identifiers, and unclassified runs; a parsed integer
//! once an unclassified run resolves to an integer literal.

use std::borrow::Cow;
use std::fmt;

use crate::{LexTables, Span};

mod list;

pub use list::TokenList;

/// Sentinel rendered for a token whose kind and value do not belong together.
pub const ERROR_VALUE: &str = "ERROR";

/// Lexical category of a token.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `+`, `-`, `*`, `/`, ...
    Operator,
    /// Integer, float, and string literals.
    Literal,
    /// Variable names.
    Identifier,
    /// Reserved words such as `int`.
    Keyword,
    /// `;` and friends.
    Punctuator,
    /// Text the scanner could not classify. Either resolved by a later pass
    /// or left for the parser to reject.
    Unclassified,
}

impl TokenKind {
    /// Upper-case name used in token stream output.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Operator => "OPERATOR",
            TokenKind::Literal => "LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Punctuator => "PUNCTUATOR",
            TokenKind::Unclassified => "UNCLASSIFIED",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal subkind. Only meaningful on [`TokenKind::Literal`] tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    /// Reserved: no pass produces float literals yet.
    Float,
    String,
}

impl LiteralKind {
    pub fn name(self) -> &'static str {
        match self {
            LiteralKind::Integer => "INT_LITERAL",
            LiteralKind::Float => "FLOAT_LITERAL",
            LiteralKind::String => "STRING_LITERAL",
        }
    }
}

/// Token payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenValue {
    /// Index into the operator, keyword, or punctuator table.
    TableIndex(u32),
    /// Owned source text.
    Text(String),
    /// Parsed integer literal.
    Integer(i64),
}

/// A single classified lexical unit.
///
/// Fields are private so the kind/value pairing can only change through the
/// resolution transitions below.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    value: TokenValue,
    literal: Option<LiteralKind>,
    span: Span,
}

impl Token {
    fn from_table(kind: TokenKind, index: u32, span: Span) -> Self {
        Token {
            kind,
            value: TokenValue::TableIndex(index),
            literal: None,
            span,
        }
    }

    pub fn operator(index: u32, span: Span) -> Self {
        Self::from_table(TokenKind::Operator, index, span)
    }

    pub fn keyword(index: u32, span: Span) -> Self {
        Self::from_table(TokenKind::Keyword, index, span)
    }

    pub fn punctuator(index: u32, span: Span) -> Self {
        Self::from_table(TokenKind::Punctuator, index, span)
    }

    /// String literal holding the text between the quotes.
    pub fn string_literal(text: String, span: Span) -> Self {
        Token {
            kind: TokenKind::Literal,
            value: TokenValue::Text(text),
            literal: Some(LiteralKind::String),
            span,
        }
    }

    pub fn integer_literal(value: i64, span: Span) -> Self {
        Token {
            kind: TokenKind::Literal,
            value: TokenValue::Integer(value),
            literal: Some(LiteralKind::Integer),
            span,
        }
    }

    pub fn identifier(text: String, span: Span) -> Self {
        Token {
            kind: TokenKind::Identifier,
            value: TokenValue::Text(text),
            literal: None,
            span,
        }
    }

    pub fn unclassified(text: String, span: Span) -> Self {
        Token {
            kind: TokenKind::Unclassified,
            value: TokenValue::Text(text),
            literal: None,
            span,
        }
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    /// Literal subkind, `None` for non-literals.
    #[inline]
    pub fn literal(&self) -> Option<LiteralKind> {
        self.literal
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Owned text payload, if this token carries one.
    pub fn text(&self) -> Option<&str> {
        match &self.value {
            TokenValue::Text(text) => Some(text),
            TokenValue::TableIndex(_) | TokenValue::Integer(_) => None,
        }
    }

    /// Table index payload, if this token carries one.
    pub fn table_index(&self) -> Option<u32> {
        match self.value {
            TokenValue::TableIndex(index) => Some(index),
            TokenValue::Text(_) | TokenValue::Integer(_) => None,
        }
    }

    /// Parsed integer payload, if this token carries one.
    pub fn integer(&self) -> Option<i64> {
        match self.value {
            TokenValue::Integer(value) => Some(value),
            TokenValue::TableIndex(_) | TokenValue::Text(_) => None,
        }
    }

    #[inline]
    pub fn is_unclassified(&self) -> bool {
        self.kind == TokenKind::Unclassified
    }

    /// Reclassify an unclassified token as an identifier, keeping its text.
    ///
    /// Returns `false` (and changes nothing) for any other kind.
    pub fn promote_to_identifier(&mut self) -> bool {
        if !self.is_unclassified() {
            return false;
        }
        self.kind = TokenKind::Identifier;
        true
    }

    /// Reclassify an unclassified token as an integer literal.
    ///
    /// The owned text is dropped and replaced by `value`. Returns `false`
    /// (and changes nothing) for any other kind.
    pub fn resolve_integer(&mut self, value: i64) -> bool {
        if !self.is_unclassified() {
            return false;
        }
        self.kind = TokenKind::Literal;
        self.literal = Some(LiteralKind::Integer);
        self.value = TokenValue::Integer(value);
        true
    }

    /// The token's value as text.
    ///
    /// Table-indexed kinds look their text up in `tables`, text payloads are
    /// returned as-is, and integers are printed in decimal. A kind/value pair
    /// that does not belong together, or an index past the end of its table,
    /// renders as [`ERROR_VALUE`].
    pub fn display_value<'a>(&'a self, tables: &LexTables<'a>) -> Cow<'a, str> {
        let looked_up = match (self.kind, &self.value) {
            (TokenKind::Operator, TokenValue::TableIndex(i)) => tables.operator(*i),
            (TokenKind::Keyword, TokenValue::TableIndex(i)) => tables.keyword(*i),
            (TokenKind::Punctuator, TokenValue::TableIndex(i)) => tables.punctuator(*i),
            (
                TokenKind::Literal | TokenKind::Identifier | TokenKind::Unclassified,
                TokenValue::Text(text),
            ) => Some(text.as_str()),
            (TokenKind::Literal, TokenValue::Integer(value)) => {
                return Cow::Owned(value.to_string());
            }
            _ => None,
        };
        Cow::Borrowed(looked_up.unwrap_or(ERROR_VALUE))
    }
}

#[cfg(test)]
mod tests;
