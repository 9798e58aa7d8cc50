//! Forward and reverse text transforms.
//!
//! Both directions walk the input one Unicode scalar value at a time and
//! allocate only the returned string.

use std::str::FromStr;

use crate::reverse::ReverseTable;
use crate::style::{StyleError, StyleKind, StyleTag};
use crate::tables::{CombiningMark, SubstitutionTable};

/// Renders `text` in the given style.
///
/// Substitution styles replace every character their table maps and leave the
/// rest untouched, so the character count never changes. Combining styles
/// append the mark after every character, including spaces, digits,
/// punctuation and characters that already carry marks.
///
/// # Example
///
/// ```rust
/// use unistyle::{apply, StyleTag};
///
/// assert_eq!(apply("Hello", StyleTag::Bold), "𝗛𝗲𝗹𝗹𝗼");
/// assert_eq!(apply("5", StyleTag::Italic), "5");
/// assert_eq!(apply("Hi", StyleTag::Underline), "H\u{332}i\u{332}");
/// ```
pub fn apply(text: &str, style: StyleTag) -> String {
    tracing::trace!(%style, len = text.len(), "apply");
    match style.kind() {
        StyleKind::Substitution(table) => substitute(text, table),
        StyleKind::Combining(mark) => combine(text, mark),
    }
}

/// Renders `text` in the style named `style`.
///
/// # Errors
///
/// Returns [`StyleError::UnknownStyleTag`] if `style` names none of the six styles.
/// An unknown name is never treated as a no-op.
pub fn apply_named(text: &str, style: &str) -> Result<String, StyleError> {
    let tag = StyleTag::from_str(style)?;
    Ok(apply(text, tag))
}

/// Recovers plain text from styled or partially styled input.
///
/// Underline and strikethrough marks are dropped wherever they appear, and
/// every character from any substitution style is mapped back to its ASCII
/// source. Everything else passes through, so `strip` is idempotent.
///
/// # Example
///
/// ```rust
/// use unistyle::strip;
///
/// assert_eq!(strip("𝗔𝗠𝗕𝗮𝗾𝗿\u{332}\u{336}"), "AMBaqr");
/// assert_eq!(strip("plain"), "plain");
/// ```
pub fn strip(text: &str) -> String {
    let reverse = ReverseTable::global();
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if CombiningMark::is_mark(c) {
            continue;
        }
        out.push(reverse.get(c).unwrap_or(c));
    }
    out
}

/// Returns true if [`strip`] would change `text`.
pub fn is_styled(text: &str) -> bool {
    let reverse = ReverseTable::global();
    text.chars()
        .any(|c| CombiningMark::is_mark(c) || reverse.contains(c))
}

fn substitute(text: &str, table: &SubstitutionTable) -> String {
    // Styled letters take four bytes each in UTF-8.
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        out.push(table.get(c).unwrap_or(c));
    }
    out
}

fn combine(text: &str, mark: CombiningMark) -> String {
    let mark = mark.as_char();
    let mut out = String::with_capacity(text.len() + text.chars().count() * mark.len_utf8());
    for c in text.chars() {
        out.push(c);
        out.push(mark);
    }
    out
}
