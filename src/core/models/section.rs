//! Document sections
//!
//! A section is a level-2 heading plus every raw line up to the next one.

use serde::Serialize;

/// A heading-delimited block of a markdown document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Heading text without the leading `##`
    pub title: String,
    /// Raw body lines, in document order
    pub body: Vec<String>,
}

impl Section {
    /// Create an empty section with the given title
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
        }
    }
}

/// A logical required section and the heading spellings that satisfy it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredSection {
    /// Label used in diagnostics
    pub label: &'static str,
    /// Accepted heading spellings (any language)
    pub aliases: &'static [&'static str],
}
