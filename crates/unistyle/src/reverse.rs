//! Inverse lookup from styled characters back to plain ASCII.
//!
//! The reverse table is the union of every [`SubstitutionTable`], inverted.
//! The process-wide instance is built on first use and never modified afterwards.
//!
//! # Collision Policy
//!
//! If two tables ever mapped different source characters to the same styled
//! character, the table inserted later wins. Every such overwrite is counted
//! and logged at `warn` level. The published tables occupy disjoint ranges of
//! the Mathematical Alphanumeric Symbols block, so the global table has no
//! collisions.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::tables::{SubstitutionTable, SUBSTITUTION_TABLES};

static GLOBAL: Lazy<ReverseTable> = Lazy::new(|| ReverseTable::build(&SUBSTITUTION_TABLES));

/// Mapping from a styled character to the plain character it was made from.
#[derive(Debug, Clone, Default)]
pub struct ReverseTable {
    entries: HashMap<char, char>,
    collisions: usize,
}

impl ReverseTable {
    /// Inverts `tables` in order. Later tables overwrite earlier ones on collision.
    pub fn build(tables: &[&SubstitutionTable]) -> Self {
        let capacity = tables.iter().map(|table| table.len()).sum();
        let mut entries = HashMap::with_capacity(capacity);
        let mut collisions = 0;

        for table in tables {
            for (plain, styled) in table.iter() {
                if let Some(previous) = entries.insert(styled, plain) {
                    collisions += 1;
                    tracing::warn!(
                        styled = %styled.escape_unicode(),
                        previous = %previous,
                        replacement = %plain,
                        table = table.name(),
                        "reverse table collision"
                    );
                }
            }
        }

        tracing::debug!(entries = entries.len(), collisions, "built reverse table");
        Self {
            entries,
            collisions,
        }
    }

    /// The shared table built from every substitution style.
    pub fn global() -> &'static ReverseTable {
        &GLOBAL
    }

    /// Returns the plain character for `styled`, if it is a styled character.
    pub fn get(&self, styled: char) -> Option<char> {
        self.entries.get(&styled).copied()
    }

    pub fn contains(&self, styled: char) -> bool {
        self.entries.contains_key(&styled)
    }

    /// Number of overwrites that happened while building.
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{BOLD, ITALIC, MONOSPACE};

    #[test]
    fn test_global_table_is_collision_free() {
        let table = ReverseTable::global();
        assert_eq!(table.collisions(), 0);
        assert_eq!(table.len(), 62 + 52 + 52 + 62);
    }

    #[test]
    fn test_global_is_built_once() {
        let a = ReverseTable::global() as *const ReverseTable;
        let b = ReverseTable::global() as *const ReverseTable;
        assert_eq!(a, b);
    }

    #[test]
    fn test_lookup() {
        let table = ReverseTable::global();
        assert_eq!(table.get('\u{1D5D4}'), Some('A'));
        assert_eq!(table.get('\u{1D7FF}'), Some('9'));
        assert_eq!(table.get('A'), None);
        assert!(!table.contains('\u{332}'));
    }

    #[test]
    fn test_every_table_entry_inverts() {
        let table = ReverseTable::global();
        for source in SUBSTITUTION_TABLES {
            for (plain, styled) in source.iter() {
                assert_eq!(table.get(styled), Some(plain));
            }
        }
    }

    #[test]
    fn test_duplicate_table_counts_collisions_last_wins() {
        let table = ReverseTable::build(&[&BOLD, &BOLD]);
        assert_eq!(table.collisions(), BOLD.len());
        assert_eq!(table.len(), BOLD.len());
    }

    #[test]
    fn test_collision_last_table_wins() {
        static FIRST: SubstitutionTable = SubstitutionTable::new("first", &[('a', '\u{1D5EE}')]);
        static SECOND: SubstitutionTable =
            SubstitutionTable::new("second", &[('b', '\u{1D5EE}')]);

        let table = ReverseTable::build(&[&FIRST, &SECOND]);
        assert_eq!(table.collisions(), 1);
        assert_eq!(table.get('\u{1D5EE}'), Some('b'));
    }

    #[test]
    fn test_build_subset() {
        let table = ReverseTable::build(&[&ITALIC, &MONOSPACE]);
        assert_eq!(table.len(), ITALIC.len() + MONOSPACE.len());
        assert_eq!(table.get('\u{1D5D4}'), None);
    }

    #[test]
    fn test_empty_build() {
        let table = ReverseTable::build(&[]);
        assert!(table.is_empty());
        assert_eq!(table.collisions(), 0);
    }
}
