//! Unicode text styling that survives copy and paste.
//!
//! Plain text is restyled by swapping each ASCII letter or digit for its
//! counterpart in a Mathematical Alphanumeric alphabet, or by attaching a
//! combining mark to every character. The output is still plain text: no
//! markup, no formatting metadata, so it pastes anywhere Unicode renders.
//!
//! # Operations
//!
//! - [`apply`]: Render text in one of the six [`StyleTag`]s
//! - [`apply_named`]: Same, resolving the style from its name
//! - [`strip`]: Recover plain text from styled or partially styled input
//! - [`is_styled`]: Check whether [`strip`] has anything to remove
//!
//! # Styles
//!
//! | Tag | Effect | Digits |
//! |-----|--------|--------|
//! | `bold` | sans-serif bold letters | styled |
//! | `italic` | sans-serif italic letters | unchanged |
//! | `boldItalic` | sans-serif bold italic letters | unchanged |
//! | `monospace` | monospace letters | styled |
//! | `underline` | U+0332 after every character | marked |
//! | `strikethrough` | U+0336 after every character | marked |
//!
//! Characters a style does not cover pass through unchanged.
//!
//! # Example
//!
//! ```rust
//! use unistyle::{apply, strip, StyleTag};
//!
//! let styled = apply("Ship it", StyleTag::Bold);
//! assert_eq!(styled, "𝗦𝗵𝗶𝗽 𝗶𝘁");
//! assert_eq!(strip(&styled), "Ship it");
//! ```
//!
//! Every function is pure and safe to call from any number of threads. The
//! only lazily built state is the [`ReverseTable`], constructed once on first
//! use.

mod engine;
mod reverse;
pub mod style;
pub mod tables;

pub use engine::{apply, apply_named, is_styled, strip};
pub use reverse::ReverseTable;
pub use style::{StyleError, StyleKind, StyleTag};
pub use tables::{CombiningMark, SubstitutionTable};
