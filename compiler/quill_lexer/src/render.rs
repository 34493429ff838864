//! Read-only token stream rendering.
//!
//! [`TokenStream`] borrows a token list and prints it without touching it.
//! Two layouts are supported:
//!
//! - [`RenderFormat::Block`]: three lines per token followed by a blank line.
//!
//!   ```text
//!   TYPE: KEYWORD
//!   VAL: int
//!   MDATA: NONE
//!   ```
//!
//! - [`RenderFormat::Line`]: one line per token with its span.
//!
//!   ```text
//!   KEYWORD "int" NONE @ 0..3
//!   ```

use std::fmt;

use quill_ir::{LexTables, Token, TokenList};

/// Layout used by [`TokenStream`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RenderFormat {
    #[default]
    Block,
    Line,
}

impl RenderFormat {
    /// Parse a format name as given on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "block" => Some(RenderFormat::Block),
            "line" => Some(RenderFormat::Line),
            _ => None,
        }
    }
}

/// Display adapter over a token list.
pub struct TokenStream<'a> {
    tokens: &'a TokenList,
    tables: &'a LexTables<'a>,
    format: RenderFormat,
}

impl<'a> TokenStream<'a> {
    pub fn new(tokens: &'a TokenList, tables: &'a LexTables<'a>, format: RenderFormat) -> Self {
        TokenStream {
            tokens,
            tables,
            format,
        }
    }

    fn write_token(&self, f: &mut fmt::Formatter<'_>, token: &Token) -> fmt::Result {
        let value = token.display_value(self.tables);
        let subkind = token.literal().map_or("NONE", |kind| kind.name());
        match self.format {
            RenderFormat::Block => {
                writeln!(f, "TYPE: {}", token.kind())?;
                writeln!(f, "VAL: {value}")?;
                writeln!(f, "MDATA: {subkind}")?;
                writeln!(f)
            }
            RenderFormat::Line => {
                writeln!(f, "{} {:?} {subkind} @ {}", token.kind(), value, token.span())
            }
        }
    }
}

impl fmt::Display for TokenStream<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in self.tokens {
            self.write_token(f, token)?;
        }
        Ok(())
    }
}
