//! Quill IR - data types shared by the lexer and its consumers.
//!
//! This crate contains:
//! - [`GrowVec`], the one growable sequence behind every buffer
//! - [`Text`], the owned byte buffer the lexer reads from
//! - [`Span`] for source locations
//! - [`LexTables`], the operator/keyword/punctuator tables
//! - [`Token`] and [`TokenList`] for lexer output
//!
//! # Design Philosophy
//!
//! - **Indices into tables**: operator and keyword tokens store a table
//!   index, never a copy of the text.
//! - **Closed payloads**: a token's value is a sum type, so a token can never
//!   hold a string and a parsed integer at the same time.
//! - **One growth policy**: tokens, text bytes, and identifier names all grow
//!   and shrink through [`GrowVec`] with the same thresholds.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

pub mod grow_vec;
mod span;
pub mod tables;
pub mod text;
pub mod token;

pub use grow_vec::GrowVec;
pub use span::Span;
pub use tables::{LexTables, TableError, TableKind};
pub use text::{Text, TextError};
pub use token::{LiteralKind, Token, TokenKind, TokenList, TokenValue};
