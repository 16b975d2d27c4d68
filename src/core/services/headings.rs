//! Heading parser - splits markdown text into level-2 sections
//!
//! Pure text processing, no I/O.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Section;

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^\s*##\s+(.+?)\s*$").unwrap()
});

static SUB_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"^\s*#{3,6}\s+(.+?)\s*$").unwrap()
});

/// Split a document into its level-2 sections
///
/// A section heading is exactly two `#`, whitespace, then text. Everything
/// up to the next section heading belongs to the section body, including
/// deeper headings. Text before the first heading is dropped.
#[must_use]
pub fn parse_sections(content: &str) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut current: Option<Section> = None;

    for line in content.lines() {
        if let Some(title) = capture_title(&SECTION_HEADING, line) {
            if let Some(done) = current.take() {
                sections.push(done);
            }
            current = Some(Section::new(title));
            continue;
        }

        if let Some(section) = current.as_mut() {
            section.body.push(line.to_string());
        }
    }

    if let Some(done) = current {
        sections.push(done);
    }
    sections
}

/// Level 3-6 headings found in a section body, in order
#[must_use]
pub fn subheadings(section: &Section) -> Vec<String> {
    section
        .body
        .iter()
        .filter_map(|line| capture_title(&SUB_HEADING, line))
        .collect()
}

/// Whether a section has at least one substantive line
///
/// Blank lines and lines starting with `#` do not count.
#[must_use]
pub fn has_content(section: &Section) -> bool {
    section.body.iter().map(|line| line.trim()).any(|line| !line.is_empty() && !line.starts_with('#'))
}

fn capture_title(pattern: &Regex, line: &str) -> Option<String> {
    pattern.captures(line).and_then(|c| c.get(1)).map(|m| m.as_str().trim().to_string())
}
