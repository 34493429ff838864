//! Byte cursor over a source buffer.
//!
//! The cursor advances through the buffer byte-by-byte. [`Cursor::current`]
//! returns `0` once the position reaches the end, so callers can match on a
//! byte without a separate bounds check; [`Cursor::is_eof`] is the
//! authoritative end test since the source may itself contain NUL bytes.

/// Returns `true` for bytes the scanner skips: space, tab, newline.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n')
}

/// Returns `true` for bytes that make up words: ASCII alphanumerics, `_`,
/// `.`, and every non-ASCII byte.
///
/// A pending run never mixes word bytes with other bytes, so `x;` scans as
/// two runs while `3.14` and multi-byte UTF-8 sequences stay whole.
#[inline]
pub fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.' || byte >= 0x80
}

/// Forward-only cursor over a byte slice.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor positioned at byte 0.
    pub fn new(buf: &'a [u8]) -> Self {
        Cursor { buf, pos: 0 }
    }

    /// Byte at the current position, or `0` at end of input.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf.get(self.pos).copied().unwrap_or(0)
    }

    /// Byte just before the current position, `None` at the start.
    #[inline]
    pub fn prev(&self) -> Option<u8> {
        self.pos.checked_sub(1).and_then(|p| self.buf.get(p).copied())
    }

    /// Byte `offset` positions ahead of the current one.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<u8> {
        self.buf.get(self.pos + offset).copied()
    }

    /// Advance by one byte. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Advance by `n` bytes, stopping at end of input.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.buf.len());
    }

    /// Returns `true` once every byte has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.buf.len()
    }

    /// Unconsumed bytes from the current position on.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.buf[self.pos..]
    }

    /// Returns `true` if the unconsumed input starts with `needle`.
    #[inline]
    pub fn starts_with(&self, needle: &[u8]) -> bool {
        self.rest().starts_with(needle)
    }

    /// Returns `true` if a match of `len` bytes at the current position is
    /// flanked by word boundaries: start of input or whitespace before it,
    /// end of input or whitespace after it.
    pub fn at_word_boundary(&self, len: usize) -> bool {
        let before = self.prev().map_or(true, is_whitespace);
        let after = self.peek_at(len).map_or(true, is_whitespace);
        before && after
    }
}

#[cfg(test)]
mod tests;
