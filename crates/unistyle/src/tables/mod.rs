//! Static lookup data for the six styles.
//!
//! This module provides the leaf data the engine is built on:
//!
//! - [`SubstitutionTable`]: per-style mapping from an ASCII letter or digit to one
//!   styled code point
//! - [`CombiningMark`]: a combining code point attached after every character
//!
//! All values are `'static` and never mutated.

mod data;

/// An immutable mapping from a plain ASCII character to its styled counterpart.
///
/// Within a table the mapping is injective, so every destination character
/// identifies exactly one source character.
///
/// # Example
///
/// ```rust
/// use unistyle::tables::{BOLD, ITALIC};
///
/// assert_eq!(BOLD.get('5'), Some('𝟱'));
/// assert_eq!(ITALIC.get('5'), None);
/// ```
#[derive(Debug)]
pub struct SubstitutionTable {
    name: &'static str,
    entries: &'static [(char, char)],
}

impl SubstitutionTable {
    /// Creates a table over `(plain, styled)` pairs.
    ///
    /// The caller guarantees that no two pairs share a styled character.
    pub const fn new(name: &'static str, entries: &'static [(char, char)]) -> Self {
        Self { name, entries }
    }

    /// Name of the style this table belongs to.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the styled character for `c`, or `None` when `c` is not mapped.
    pub fn get(&self, c: char) -> Option<char> {
        if !c.is_ascii_alphanumeric() {
            return None;
        }
        self.entries
            .iter()
            .find(|(source, _)| *source == c)
            .map(|(_, styled)| *styled)
    }

    /// Returns true if `c` is one of the table's source characters.
    pub fn contains(&self, c: char) -> bool {
        self.get(c).is_some()
    }

    /// Iterates `(plain, styled)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Sans-serif bold letters and digits.
pub static BOLD: SubstitutionTable = SubstitutionTable::new("bold", &data::BOLD_ENTRIES);

/// Sans-serif italic letters. Digits have no italic form and pass through.
pub static ITALIC: SubstitutionTable = SubstitutionTable::new("italic", &data::ITALIC_ENTRIES);

/// Sans-serif bold italic letters. Digits pass through.
pub static BOLD_ITALIC: SubstitutionTable =
    SubstitutionTable::new("boldItalic", &data::BOLD_ITALIC_ENTRIES);

/// Monospace letters and digits.
pub static MONOSPACE: SubstitutionTable =
    SubstitutionTable::new("monospace", &data::MONOSPACE_ENTRIES);

/// Every substitution table, in reverse-table insertion order.
pub static SUBSTITUTION_TABLES: [&SubstitutionTable; 4] =
    [&BOLD, &ITALIC, &BOLD_ITALIC, &MONOSPACE];

/// A combining code point that attaches to the preceding character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombiningMark(char);

impl CombiningMark {
    /// COMBINING LOW LINE.
    pub const UNDERLINE: CombiningMark = CombiningMark('\u{0332}');
    /// COMBINING LONG STROKE OVERLAY.
    pub const STRIKETHROUGH: CombiningMark = CombiningMark('\u{0336}');

    /// Both marks recognized by [`strip`](crate::strip).
    pub const ALL: [CombiningMark; 2] = [Self::UNDERLINE, Self::STRIKETHROUGH];

    pub fn as_char(self) -> char {
        self.0
    }

    /// Returns true if `c` is one of the recognized marks.
    pub fn is_mark(c: char) -> bool {
        Self::ALL.iter().any(|mark| mark.0 == c)
    }
}

impl From<CombiningMark> for char {
    fn from(mark: CombiningMark) -> Self {
        mark.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_sizes() {
        assert_eq!(BOLD.len(), 62);
        assert_eq!(ITALIC.len(), 52);
        assert_eq!(BOLD_ITALIC.len(), 52);
        assert_eq!(MONOSPACE.len(), 62);
    }

    #[test]
    fn test_tables_are_injective() {
        for table in SUBSTITUTION_TABLES {
            let destinations: HashSet<char> = table.iter().map(|(_, styled)| styled).collect();
            assert_eq!(
                destinations.len(),
                table.len(),
                "{} is not injective",
                table.name()
            );
        }
    }

    #[test]
    fn test_tables_cover_ascii_letters() {
        for table in SUBSTITUTION_TABLES {
            for c in ('a'..='z').chain('A'..='Z') {
                assert!(table.contains(c), "{} is missing '{}'", table.name(), c);
            }
        }
    }

    #[test]
    fn test_digits_only_in_bold_and_monospace() {
        for d in '0'..='9' {
            assert!(BOLD.contains(d));
            assert!(MONOSPACE.contains(d));
            assert!(!ITALIC.contains(d));
            assert!(!BOLD_ITALIC.contains(d));
        }
    }

    #[test]
    fn test_known_code_points() {
        assert_eq!(BOLD.get('A'), Some('\u{1D5D4}'));
        assert_eq!(BOLD.get('0'), Some('\u{1D7EC}'));
        assert_eq!(ITALIC.get('z'), Some('\u{1D63B}'));
        assert_eq!(BOLD_ITALIC.get('A'), Some('\u{1D63C}'));
        assert_eq!(MONOSPACE.get('9'), Some('\u{1D7FF}'));
    }

    #[test]
    fn test_unmapped_characters() {
        assert_eq!(BOLD.get(' '), None);
        assert_eq!(BOLD.get('é'), None);
        assert_eq!(MONOSPACE.get('\u{1D5D4}'), None);
    }

    #[test]
    fn test_combining_marks() {
        assert_eq!(CombiningMark::UNDERLINE.as_char(), '\u{332}');
        assert_eq!(char::from(CombiningMark::STRIKETHROUGH), '\u{336}');
        assert!(CombiningMark::is_mark('\u{332}'));
        assert!(!CombiningMark::is_mark('\u{301}'));
    }
}
