//! Style tags and their errors.
//!
//! This module provides the selector half of the engine:
//!
//! - [`StyleTag`]: The closed set of six styles
//! - [`StyleKind`]: What a tag resolves to (a substitution table or a combining mark)
//! - [`StyleError`]: Errors from resolving a tag by name

mod error;
mod tag;

pub use error::StyleError;
pub use tag::{StyleKind, StyleTag};
