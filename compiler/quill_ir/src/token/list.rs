//! Ordered token sequence.

use std::fmt;
use std::ops::Index;

use super::Token;
use crate::GrowVec;

/// A list of tokens in source order.
///
/// Owns every text payload its tokens carry. Built by the scanner, edited in
/// place by the resolution passes, then handed intact to the consumer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: GrowVec<Token>,
}

impl TokenList {
    /// Create a new empty token list.
    #[inline]
    pub fn new() -> Self {
        TokenList {
            tokens: GrowVec::new(),
        }
    }

    /// Create from a Vec of tokens.
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Append a token.
    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Insert a token at `index`, shifting later tokens right.
    pub fn insert(&mut self, index: usize, token: Token) {
        self.tokens.insert(index, token);
    }

    /// Remove and return the token at `index`.
    pub fn remove(&mut self, index: usize) -> Token {
        self.tokens.remove(index)
    }

    /// Get the number of tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Get token at index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Get a mutable token at index.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Token> {
        self.tokens.get_mut(index)
    }

    /// Iterate over tokens.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Iterate mutably over tokens.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Token> {
        self.tokens.iter_mut()
    }

    /// Tokens still unclassified, with their positions.
    pub fn unresolved(&self) -> impl Iterator<Item = (usize, &Token)> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_unclassified())
    }

    /// Consume the list, returning the tokens.
    pub fn into_vec(self) -> Vec<Token> {
        self.tokens.into_vec()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    #[inline]
    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}
