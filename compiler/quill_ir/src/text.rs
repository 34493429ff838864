//! Owned, length-tracked byte buffer.
//!
//! `Text` is the buffer the lexer scans and the buffer it accumulates pending
//! characters into. Length is explicit (no terminator byte), and storage is a
//! [`GrowVec<u8>`], so it follows the shared growth policy.
//!
//! Contents are raw bytes: files are loaded as-is and are not required to be
//! UTF-8. [`Text::to_string_lossy`] decodes for display and for token text;
//! for valid UTF-8 input the decoding is exact.

use std::borrow::Cow;
use std::fmt;
use std::path::{Path, PathBuf};

use memchr::memmem;

use crate::GrowVec;

/// Error loading a [`Text`] from disk.
#[derive(Debug, thiserror::Error)]
pub enum TextError {
    /// The file could not be read.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TextError {
    /// The underlying I/O error kind.
    pub fn io_kind(&self) -> std::io::ErrorKind {
        match self {
            TextError::Read { source, .. } => source.kind(),
        }
    }
}

/// Growable byte buffer with explicit length.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Text {
    bytes: GrowVec<u8>,
}

impl Text {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Text {
            bytes: GrowVec::new(),
        }
    }

    /// Create a buffer holding a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut text = Text::new();
        text.bytes.extend_from_slice(bytes);
        text
    }

    /// Read a whole file into a new buffer.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, TextError> {
        let path = path.as_ref();
        let raw = std::fs::read(path).map_err(|source| TextError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Text::from_bytes(&raw))
    }

    /// Number of bytes in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// Append one byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    /// Append the bytes of `s`.
    pub fn push_str(&mut self, s: &str) {
        self.bytes.extend_from_slice(s.as_bytes());
    }

    /// Append the contents of another buffer.
    pub fn append(&mut self, other: &Text) {
        self.bytes.extend_from_slice(other.as_bytes());
    }

    /// Copy out the half-open byte range `from..to`.
    ///
    /// Bounds are clamped to the buffer; an empty or inverted range yields an
    /// empty buffer.
    pub fn substr(&self, from: usize, to: usize) -> Text {
        let to = to.min(self.len());
        if from >= to {
            return Text::new();
        }
        Text::from_bytes(&self.bytes[from..to])
    }

    /// Position of the first occurrence of `needle` at or after `from`.
    ///
    /// An empty needle never matches.
    pub fn find(&self, needle: &[u8], from: usize) -> Option<usize> {
        if needle.is_empty() || from >= self.len() {
            return None;
        }
        memmem::find(&self.bytes[from..], needle).map(|pos| from + pos)
    }

    /// Replace the first occurrence of `needle` with `replacement`.
    ///
    /// Returns `true` if a replacement was made.
    pub fn find_replace(&mut self, needle: &[u8], replacement: &[u8]) -> bool {
        let Some(at) = self.find(needle, 0) else {
            return false;
        };
        let mut out = GrowVec::with_capacity(self.bytes.capacity());
        out.extend_from_slice(&self.bytes[..at]);
        out.extend_from_slice(replacement);
        out.extend_from_slice(&self.bytes[at + needle.len()..]);
        self.bytes = out;
        true
    }

    /// Replace every non-overlapping occurrence of `needle` in one pass.
    ///
    /// Returns the number of replacements. Equivalent to calling
    /// [`find_replace`](Self::find_replace) until it returns `false` whenever
    /// `replacement` cannot recreate `needle`.
    pub fn replace_all(&mut self, needle: &[u8], replacement: &[u8]) -> usize {
        if needle.is_empty() {
            return 0;
        }
        let mut out = GrowVec::with_capacity(self.bytes.capacity());
        let mut count = 0;
        let mut last = 0;
        for at in memmem::find_iter(&self.bytes, needle) {
            out.extend_from_slice(&self.bytes[last..at]);
            out.extend_from_slice(replacement);
            last = at + needle.len();
            count += 1;
        }
        if count > 0 {
            out.extend_from_slice(&self.bytes[last..]);
            self.bytes = out;
        }
        count
    }

    /// Move the contents out, leaving an empty buffer behind.
    pub fn take(&mut self) -> Text {
        std::mem::take(self)
    }

    /// Decode the contents as UTF-8, replacing invalid sequences.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::from_bytes(s.as_bytes())
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Text({:?})", self.to_string_lossy())
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}
