//! Pass 1: raw scanning into an initial token list.
//!
//! One left-to-right traversal. At each position the scanner:
//!
//! 1. skips whitespace (ending any pending run),
//! 2. opens or closes a string literal on `"`,
//! 3. tries every keyword in table order (word boundary required), then
//!    every operator in table order, then (if enabled) every punctuator,
//! 4. otherwise appends the byte to the pending run.
//!
//! Pending runs become [`TokenKind::Unclassified`](quill_ir::TokenKind)
//! tokens. They are resolved later by discovery and resolution. A run is
//! always flushed before the token that ends it is emitted, so the token
//! list is in source order.
//!
//! # Pending Runs
//!
//! A run ends at whitespace, at a quote, at a table match, at end of input,
//! and wherever the byte class switches between word bytes and other bytes
//! (see [`is_word_byte`]). Each run is therefore a contiguous slice of the
//! source.

use quill_ir::{LexTables, Span, TableKind, Text, Token, TokenList};

use crate::cursor::{is_whitespace, is_word_byte, Cursor};
use crate::{LexError, LexOptions};

/// Tokens and errors produced by pass 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanOutput {
    pub tokens: TokenList,
    pub errors: Vec<LexError>,
}

/// Scan `source` into raw tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &Text, tables: &LexTables<'_>, options: &LexOptions) -> ScanOutput {
    let output = RawScanner::new(source, tables, *options).run();
    tracing::debug!(
        tokens = output.tokens.len(),
        errors = output.errors.len(),
        "raw scan complete"
    );
    output
}

/// Scanner state for a single pass over one buffer.
struct RawScanner<'a> {
    source: &'a Text,
    cursor: Cursor<'a>,
    tables: &'a LexTables<'a>,
    options: LexOptions,
    tokens: TokenList,
    errors: Vec<LexError>,
    /// Bytes accumulated since the last emitted token.
    pending: Text,
    /// Source offset of the first pending byte.
    pending_start: usize,
    /// Offset of the opening quote while inside a string literal.
    open_quote: Option<usize>,
}

impl<'a> RawScanner<'a> {
    fn new(source: &'a Text, tables: &'a LexTables<'a>, options: LexOptions) -> Self {
        RawScanner {
            source,
            cursor: Cursor::new(source.as_bytes()),
            tables,
            options,
            tokens: TokenList::new(),
            errors: Vec::new(),
            pending: Text::new(),
            pending_start: 0,
            open_quote: None,
        }
    }

    fn run(mut self) -> ScanOutput {
        while !self.cursor.is_eof() {
            let byte = self.cursor.current();

            if let Some(open) = self.open_quote {
                if byte == b'"' {
                    self.close_string(open);
                }
                self.cursor.advance();
                continue;
            }

            if is_whitespace(byte) {
                self.flush_pending();
                self.cursor.advance();
            } else if byte == b'"' {
                self.flush_pending();
                self.open_quote = Some(self.cursor.pos());
                self.cursor.advance();
            } else if let Some((kind, index, len)) = self.match_table() {
                self.flush_pending();
                self.emit_table(kind, index, len);
            } else {
                self.accumulate(byte);
            }
        }

        if let Some(open) = self.open_quote.take() {
            let span = Span::from_range_saturating(open..self.cursor.source_len());
            tracing::debug!(%span, "unterminated string literal");
            self.errors.push(LexError::UnterminatedString { span });
        }
        self.flush_pending();

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    /// Find the first table entry matching at the cursor.
    ///
    /// Keywords are tried first and need a word boundary on both sides.
    /// Operators and punctuators match anywhere.
    fn match_table(&self) -> Option<(TableKind, u32, usize)> {
        let keyword = self.tables.indexed(TableKind::Keyword).find(|(_, kw)| {
            self.cursor.starts_with(kw.as_bytes()) && self.cursor.at_word_boundary(kw.len())
        });
        if let Some((index, kw)) = keyword {
            return Some((TableKind::Keyword, index, kw.len()));
        }

        let unbounded: &[TableKind] = if self.options.scan_punctuators {
            &[TableKind::Operator, TableKind::Punctuator]
        } else {
            &[TableKind::Operator]
        };
        unbounded.iter().find_map(|&kind| {
            self.tables
                .indexed(kind)
                .find(|(_, entry)| self.cursor.starts_with(entry.as_bytes()))
                .map(|(index, entry)| (kind, index, entry.len()))
        })
    }

    fn emit_table(&mut self, kind: TableKind, index: u32, len: usize) {
        let start = self.cursor.pos();
        let span = Span::from_range_saturating(start..start + len);
        let token = match kind {
            TableKind::Keyword => Token::keyword(index, span),
            TableKind::Operator => Token::operator(index, span),
            TableKind::Punctuator => Token::punctuator(index, span),
        };
        self.push(token);
        self.cursor.advance_n(len);
    }

    fn accumulate(&mut self, byte: u8) {
        let class_changed = self
            .pending
            .as_bytes()
            .last()
            .is_some_and(|&last| is_word_byte(last) != is_word_byte(byte));
        if class_changed {
            self.flush_pending();
        }
        if self.pending.is_empty() {
            self.pending_start = self.cursor.pos();
        }
        self.pending.push(byte);
        self.cursor.advance();
    }

    /// Emit the string literal whose closing quote is at the cursor.
    fn close_string(&mut self, open: usize) {
        let close = self.cursor.pos();
        let text = self.source.substr(open + 1, close);
        let span = Span::from_range_saturating(open..close + 1);
        self.push(Token::string_literal(text.to_string_lossy().into_owned(), span));
        self.open_quote = None;
    }

    /// Emit the pending run as an unclassified token, if there is one.
    fn flush_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let text = self.pending.take();
        let span =
            Span::from_range_saturating(self.pending_start..self.pending_start + text.len());
        self.push(Token::unclassified(text.to_string_lossy().into_owned(), span));
    }

    fn push(&mut self, token: Token) {
        tracing::trace!(kind = %token.kind(), span = %token.span(), "emit");
        self.tokens.push(token);
    }
}
