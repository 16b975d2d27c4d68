//! Heading matcher - compares headings against alias sets
//!
//! Plan documents are written by hand in mixed languages, so matching is done
//! on a normalized form and tolerates a trailing qualifier such as
//! `Scope: API surface`.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::Section;

static TRAILING_HASHES: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"(?:\s+#+)+$").unwrap()
});

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\s+").unwrap()
});

static SLASH_SPACING: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\s*/\s*").unwrap()
});

/// What may follow an alias for a prefix match to count
const ALIAS_SEPARATORS: [&str; 5] = [":", " ", " -", " /", "("];

/// Normalize heading text for comparison
///
/// Trims, drops closing `#` runs, maps full-width `：（）` to ASCII, collapses
/// whitespace, removes spaces around `/` and lowercases. Idempotent.
#[must_use]
pub fn normalize_heading(text: &str) -> String {
    let text = TRAILING_HASHES.replace(text.trim(), "");
    let text = text.replace('：', ":").replace('（', "(").replace('）', ")");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    let text = SLASH_SPACING.replace_all(&text, "/");
    text.to_lowercase().trim().to_string()
}

/// Check if a heading satisfies any alias
///
/// Equal after normalization, or the alias followed by a separator
/// (`:`, space, ` -`, ` /`, `(`).
#[must_use]
pub fn heading_matches(title: &str, aliases: &[&str]) -> bool {
    let normalized = normalize_heading(title);
    aliases.iter().any(|alias| {
        let alias = normalize_heading(alias);
        normalized == alias
            || normalized
                .strip_prefix(alias.as_str())
                .is_some_and(|rest| ALIAS_SEPARATORS.iter().any(|sep| rest.starts_with(sep)))
    })
}

/// All sections whose title matches one of the aliases
#[must_use]
pub fn find_sections<'a>(sections: &'a [Section], aliases: &[&str]) -> Vec<&'a Section> {
    sections.iter().filter(|s| heading_matches(&s.title, aliases)).collect()
}
