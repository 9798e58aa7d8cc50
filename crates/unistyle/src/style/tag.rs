//! The closed set of style tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StyleError;
use crate::tables::{CombiningMark, SubstitutionTable, BOLD, BOLD_ITALIC, ITALIC, MONOSPACE};

/// Sample word used for style previews.
const PREVIEW_SAMPLE: &str = "Hello";

/// One of the six supported text transformations.
///
/// Tags serialize to their canonical camelCase names (`"bold"`, `"boldItalic"`, ...).
///
/// # Example
///
/// ```rust
/// use unistyle::StyleTag;
///
/// let tag: StyleTag = "bold-italic".parse().unwrap();
/// assert_eq!(tag, StyleTag::BoldItalic);
/// assert_eq!(tag.name(), "boldItalic");
/// assert!("blod".parse::<StyleTag>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StyleTag {
    Bold,
    Italic,
    BoldItalic,
    Underline,
    Strikethrough,
    Monospace,
}

/// What a [`StyleTag`] does to each character.
#[derive(Debug, Clone, Copy)]
pub enum StyleKind {
    /// Replace mapped characters, pass the rest through.
    Substitution(&'static SubstitutionTable),
    /// Append the mark after every character.
    Combining(CombiningMark),
}

impl StyleTag {
    /// All tags, in toolbar order.
    pub const ALL: [StyleTag; 6] = [
        StyleTag::Bold,
        StyleTag::Italic,
        StyleTag::BoldItalic,
        StyleTag::Underline,
        StyleTag::Strikethrough,
        StyleTag::Monospace,
    ];

    /// Canonical name, as used in serialized form.
    pub fn name(self) -> &'static str {
        match self {
            StyleTag::Bold => "bold",
            StyleTag::Italic => "italic",
            StyleTag::BoldItalic => "boldItalic",
            StyleTag::Underline => "underline",
            StyleTag::Strikethrough => "strikethrough",
            StyleTag::Monospace => "monospace",
        }
    }

    /// Human readable label.
    pub fn label(self) -> &'static str {
        match self {
            StyleTag::Bold => "Bold",
            StyleTag::Italic => "Italic",
            StyleTag::BoldItalic => "Bold Italic",
            StyleTag::Underline => "Underline",
            StyleTag::Strikethrough => "Strikethrough",
            StyleTag::Monospace => "Monospace",
        }
    }

    /// Compact label for toolbar buttons.
    pub fn short_label(self) -> &'static str {
        match self {
            StyleTag::Bold => "B",
            StyleTag::Italic => "I",
            StyleTag::BoldItalic => "BI",
            StyleTag::Underline => "U",
            StyleTag::Strikethrough => "S",
            StyleTag::Monospace => "M",
        }
    }

    /// Resolves the tag to its table or mark.
    pub fn kind(self) -> StyleKind {
        match self {
            StyleTag::Bold => StyleKind::Substitution(&BOLD),
            StyleTag::Italic => StyleKind::Substitution(&ITALIC),
            StyleTag::BoldItalic => StyleKind::Substitution(&BOLD_ITALIC),
            StyleTag::Monospace => StyleKind::Substitution(&MONOSPACE),
            StyleTag::Underline => StyleKind::Combining(CombiningMark::UNDERLINE),
            StyleTag::Strikethrough => StyleKind::Combining(CombiningMark::STRIKETHROUGH),
        }
    }

    /// The word "Hello" rendered in this style.
    pub fn preview(self) -> String {
        crate::apply(PREVIEW_SAMPLE, self)
    }

    /// Canonical names of every tag.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|tag| tag.name()).collect()
    }
}

impl fmt::Display for StyleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleTag {
    type Err = StyleError;

    /// Parses a tag name, ignoring ASCII case.
    ///
    /// `boldItalic` may also be spelled `bold-italic` or `bold_italic`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.trim().to_ascii_lowercase().as_str() {
            "bold" => StyleTag::Bold,
            "italic" => StyleTag::Italic,
            "bolditalic" | "bold-italic" | "bold_italic" => StyleTag::BoldItalic,
            "underline" => StyleTag::Underline,
            "strikethrough" => StyleTag::Strikethrough,
            "monospace" => StyleTag::Monospace,
            _ => {
                return Err(StyleError::UnknownStyleTag {
                    tag: s.to_string(),
                    available: Self::names(),
                })
            }
        };
        Ok(tag)
    }
}
