//! Names declared in the source, collected during identifier discovery.

use quill_ir::GrowVec;
use rustc_hash::FxHashSet;

/// Insertion-ordered record of declared identifier names.
///
/// Every declaration is recorded, including redeclarations of the same
/// name. Lookups go through a hash set so resolution stays linear in the
/// number of tokens.
#[derive(Clone, Debug, Default)]
pub struct IdentifierRegistry {
    names: GrowVec<String>,
    lookup: FxHashSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration of `name`.
    pub fn insert(&mut self, name: &str) {
        self.names.push(name.to_owned());
        self.lookup.insert(name.to_owned());
    }

    /// Returns `true` if `name` has been declared at least once.
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains(name)
    }

    /// Number of declarations recorded (duplicates included).
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Declared names in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Consume the registry, returning the names in declaration order.
    pub fn into_names(self) -> Vec<String> {
        self.names.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keeps_duplicates_in_order() {
        let mut registry = IdentifierRegistry::new();
        registry.insert("x");
        registry.insert("y");
        registry.insert("x");
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.iter().collect::<Vec<_>>(), vec!["x", "y", "x"]);
        assert_eq!(registry.into_names(), vec!["x", "y", "x"]);
    }

    #[test]
    fn membership() {
        let mut registry = IdentifierRegistry::new();
        assert!(registry.is_empty());
        registry.insert("count");
        assert!(registry.contains("count"));
        assert!(!registry.contains("coun"));
        assert!(!registry.contains("counter"));
    }

    #[test]
    fn redeclaration_keeps_membership() {
        let mut registry = IdentifierRegistry::new();
        registry.insert("n");
        registry.insert("n");
        assert!(registry.contains("n"));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.lookup.len(), 1);
    }
}
