//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use plangate::core::services::{heading_matches, normalize_heading, parse_sections, subheadings};
use test_case::test_case;

// =============================================================================
// Normalization
// =============================================================================

#[test_case("Scope", "scope" ; "lowercases")]
#[test_case("  Scope  ", "scope" ; "trims")]
#[test_case("Scope ##", "scope" ; "drops closing hashes")]
#[test_case("Open    Questions", "open questions" ; "collapses spaces")]
#[test_case("目的 / 背景", "目的/背景" ; "tightens slash")]
#[test_case("機能要件（FR）", "機能要件(fr)" ; "full width parentheses")]
#[test_case("スコープ：詳細", "スコープ:詳細" ; "full width colon")]
#[test_case("Rollout\u{3000}Plan", "rollout plan" ; "ideographic space")]
fn test_normalize(input: &str, expected: &str) {
    assert_eq!(normalize_heading(input), expected);
}

// =============================================================================
// Alias matching
// =============================================================================

#[test_case("Scope", true ; "exact")]
#[test_case("scope", true ; "case insensitive")]
#[test_case("スコープ", true ; "japanese")]
#[test_case("スコープ: 詳細", true ; "colon qualifier")]
#[test_case("スコープ：詳細", true ; "full width colon qualifier")]
#[test_case("Scope: API surface", true ; "english qualifier")]
#[test_case("Scope (v2)", true ; "space qualifier")]
#[test_case("Scope(v2)", true ; "parenthesis qualifier")]
#[test_case("Scope - draft", true ; "dash qualifier")]
#[test_case("Scope ##", true ; "closing hashes")]
#[test_case("Scoped", false ; "longer word")]
#[test_case("Out of scope", false ; "alias not at start")]
#[test_case("", false ; "empty")]
fn test_scope_alias(title: &str, expected: bool) {
    assert_eq!(heading_matches(title, &["スコープ", "scope"]), expected);
}

#[test_case("受け入れ条件（Acceptance Criteria）", true ; "bilingual heading")]
#[test_case("AC", true ; "abbreviation")]
#[test_case("Acceptance", false ; "abbreviation prefix of word")]
#[test_case("Acceptance criteria: v1", true ; "qualified english")]
fn test_acceptance_alias(title: &str, expected: bool) {
    let aliases = ["受け入れ条件(acceptance criteria)", "受け入れ条件", "acceptance criteria", "ac"];
    assert_eq!(heading_matches(title, &aliases), expected);
}

// =============================================================================
// Heading levels
// =============================================================================

#[test_case("## Scope", 1 ; "level two")]
#[test_case("   ## Scope", 1 ; "indented")]
#[test_case("# Scope", 0 ; "level one")]
#[test_case("### Scope", 0 ; "level three")]
#[test_case("##Scope", 0 ; "no space")]
fn test_section_heading_levels(line: &str, sections: usize) {
    assert_eq!(parse_sections(line).len(), sections);
}

#[test_case("### In scope", 1 ; "level three")]
#[test_case("###### In scope", 1 ; "level six")]
#[test_case("####### In scope", 0 ; "level seven")]
#[test_case("#### ", 0 ; "no text")]
fn test_subheading_levels(line: &str, count: usize) {
    let doc = format!("## Scope\n{line}\n");
    assert_eq!(subheadings(&parse_sections(&doc)[0]).len(), count);
}
