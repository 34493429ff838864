//! Operator, keyword, and punctuator tables.
//!
//! Tables are immutable once built and are passed by reference into the
//! scanner. Tokens store a `u32` index into the matching table, so the table
//! must outlive every token list that refers to it. [`LexTables::DEFAULT`]
//! is `'static` and covers the built-in language profile.
//!
//! # Declarators
//!
//! The first `declarators` keyword slots are variable-type keywords
//! (`int`, `float`, `string` in the default profile). An unclassified token
//! right after one of them is a variable declaration.

use std::fmt;

/// Which table an index refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TableKind {
    Operator,
    Keyword,
    Punctuator,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableKind::Operator => "operator",
            TableKind::Keyword => "keyword",
            TableKind::Punctuator => "punctuator",
        })
    }
}

/// A table configuration that the scanner could not use.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("{kind} table entry {index} is empty")]
    EmptyEntry { kind: TableKind, index: usize },
    #[error("{kind} table entry {index} ({entry:?}) contains whitespace or a quote")]
    SeparatorInEntry {
        kind: TableKind,
        index: usize,
        entry: String,
    },
    #[error("{kind} table has {len} entries, more than a token index can address")]
    TooManyEntries { kind: TableKind, len: usize },
    #[error("{declarators} declarator slots requested but only {keywords} keywords exist")]
    TooManyDeclarators { declarators: usize, keywords: usize },
}

/// Fixed lookup tables for one language profile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexTables<'t> {
    operators: &'t [&'t str],
    keywords: &'t [&'t str],
    punctuators: &'t [&'t str],
    declarators: usize,
}

impl<'t> LexTables<'t> {
    /// The built-in profile.
    pub const DEFAULT: LexTables<'static> = LexTables {
        operators: &["+", "-", "*", "/", "=", "<", ">"],
        keywords: &["int", "float", "string"],
        punctuators: &[";"],
        declarators: 3,
    };

    /// Build and validate a custom profile.
    ///
    /// Entries must be non-empty and must not contain whitespace or `"`,
    /// since the scanner treats those bytes as separators before it ever
    /// consults a table.
    pub fn new(
        operators: &'t [&'t str],
        keywords: &'t [&'t str],
        punctuators: &'t [&'t str],
        declarators: usize,
    ) -> Result<Self, TableError> {
        validate(TableKind::Operator, operators)?;
        validate(TableKind::Keyword, keywords)?;
        validate(TableKind::Punctuator, punctuators)?;
        if declarators > keywords.len() {
            return Err(TableError::TooManyDeclarators {
                declarators,
                keywords: keywords.len(),
            });
        }
        Ok(LexTables {
            operators,
            keywords,
            punctuators,
            declarators,
        })
    }

    /// All entries of one table, in table order.
    pub fn entries(&self, kind: TableKind) -> &'t [&'t str] {
        match kind {
            TableKind::Operator => self.operators,
            TableKind::Keyword => self.keywords,
            TableKind::Punctuator => self.punctuators,
        }
    }

    /// Entries of one table paired with their token index.
    pub fn indexed(&self, kind: TableKind) -> impl Iterator<Item = (u32, &'t str)> {
        (0u32..).zip(self.entries(kind).iter().copied())
    }

    /// Look up an entry by token index.
    pub fn get(&self, kind: TableKind, index: u32) -> Option<&'t str> {
        self.entries(kind).get(index as usize).copied()
    }

    pub fn operator(&self, index: u32) -> Option<&'t str> {
        self.get(TableKind::Operator, index)
    }

    pub fn keyword(&self, index: u32) -> Option<&'t str> {
        self.get(TableKind::Keyword, index)
    }

    pub fn punctuator(&self, index: u32) -> Option<&'t str> {
        self.get(TableKind::Punctuator, index)
    }

    /// Returns `true` if keyword `index` declares a variable.
    pub fn is_declarator(&self, index: u32) -> bool {
        (index as usize) < self.declarators
    }
}

impl Default for LexTables<'static> {
    fn default() -> Self {
        LexTables::DEFAULT
    }
}

fn validate(kind: TableKind, entries: &[&str]) -> Result<(), TableError> {
    if u32::try_from(entries.len()).is_err() {
        return Err(TableError::TooManyEntries {
            kind,
            len: entries.len(),
        });
    }
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_empty() {
            return Err(TableError::EmptyEntry { kind, index });
        }
        if entry
            .bytes()
            .any(|b| b.is_ascii_whitespace() || b == b'"')
        {
            return Err(TableError::SeparatorInEntry {
                kind,
                index,
                entry: (*entry).to_string(),
            });
        }
    }
    Ok(())
}
