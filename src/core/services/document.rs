//! Document validators - PRD and SPEC required-section checks
//!
//! Both validators read one markdown artifact through [`PlanSource`], split it
//! into level-2 sections and look each required section up by alias.

use log::debug;

use crate::core::models::{RequiredSection, Section, StageOutcome};
use crate::core::ports::PlanSource;

use super::headings::{has_content, parse_sections, subheadings};
use super::matcher::{find_sections, heading_matches};

/// Required sections of a requirements document (PRD)
pub const PRD_SECTIONS: &[RequiredSection] = &[
    RequiredSection {
        label: "目的/背景",
        aliases: &["目的/背景", "目的", "背景", "purpose", "background"],
    },
    RequiredSection {
        label: "スコープ",
        aliases: SCOPE_ALIASES,
    },
    RequiredSection {
        label: "機能要件/FR",
        aliases: &["機能要件(fr)", "機能要件", "fr", "functional requirements"],
    },
    RequiredSection {
        label: "非機能要件/NFR",
        aliases: &["非機能要件(nfr)", "非機能要件", "nfr", "non-functional requirements"],
    },
    RequiredSection {
        label: "受け入れ条件/AC",
        aliases: &["受け入れ条件(acceptance criteria)", "受け入れ条件", "acceptance criteria", "ac"],
    },
    RequiredSection {
        label: "Open Questions/未決事項",
        aliases: &["open questions(未決事項)", "open questions", "未決事項"],
    },
];

/// Required sections of a design document (SPEC)
pub const SPEC_SECTIONS: &[RequiredSection] = &[
    RequiredSection {
        label: "アーキテクチャ/変更点",
        aliases: &["アーキテクチャ/変更点", "アーキテクチャ", "変更点", "architecture"],
    },
    RequiredSection {
        label: "インターフェース",
        aliases: &["インターフェース", "interface"],
    },
    RequiredSection {
        label: "タスク分解/実装タスク",
        aliases: &[
            "実装タスク分解(若衆に渡す粒度)",
            "実装タスク分解",
            "タスク分解",
            "実装タスク",
            "task breakdown",
        ],
    },
    RequiredSection {
        label: "テスト",
        aliases: &["テスト計画", "テスト", "test"],
    },
    RequiredSection {
        label: "ロールアウト/互換性",
        aliases: &["ロールアウト/互換性", "ロールアウト", "互換性", "rollout"],
    },
    RequiredSection {
        label: "リスク",
        aliases: &["リスクと対策", "リスク", "risk"],
    },
];

const SCOPE_ALIASES: &[&str] = &["スコープ", "scope"];

/// Sub-headings every scope section group must carry
pub const SCOPE_SUBSECTIONS: &[RequiredSection] = &[
    RequiredSection {
        label: "In scope",
        aliases: &["In scope"],
    },
    RequiredSection {
        label: "Out of scope",
        aliases: &["Out of scope"],
    },
];

/// Structural problems found in one document, by category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFindings {
    /// Required sections with no matching heading
    pub missing_sections: Vec<&'static str>,
    /// Required sections whose every match has no content
    pub empty_sections: Vec<&'static str>,
    /// Required sub-headings missing under the scope section
    pub missing_subsections: Vec<&'static str>,
}

impl DocumentFindings {
    /// Whether the document has no problem in any category
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing_sections.is_empty()
            && self.empty_sections.is_empty()
            && self.missing_subsections.is_empty()
    }

    /// Composite detail text, categories joined by ` / `
    #[must_use]
    pub fn details(&self) -> String {
        let mut details = Vec::new();
        if !self.missing_sections.is_empty() {
            details.push(format!("必須セクション欠落: {}", self.missing_sections.join(", ")));
        }
        if !self.empty_sections.is_empty() {
            details.push(format!("本文不足: {}", self.empty_sections.join(", ")));
        }
        if !self.missing_subsections.is_empty() {
            details.push(format!(
                "スコープ配下サブセクション欠落: {}",
                self.missing_subsections.join(", ")
            ));
        }
        details.join(" / ")
    }
}

/// Check PRD text: presence, non-emptiness and scope sub-sections
#[must_use]
pub fn check_prd(content: &str) -> DocumentFindings {
    let sections = parse_sections(content);
    let mut findings = DocumentFindings::default();

    for required in PRD_SECTIONS {
        let matched = find_sections(&sections, required.aliases);
        if matched.is_empty() {
            findings.missing_sections.push(required.label);
        } else if !matched.iter().any(|&section| has_content(section)) {
            findings.empty_sections.push(required.label);
        }
    }

    let scope_sections = find_sections(&sections, SCOPE_ALIASES);
    if !scope_sections.is_empty() {
        findings.missing_subsections = missing_subsections(&scope_sections);
    }

    findings
}

/// Check SPEC text: presence only
#[must_use]
pub fn check_spec(content: &str) -> DocumentFindings {
    let sections = parse_sections(content);
    DocumentFindings {
        missing_sections: SPEC_SECTIONS
            .iter()
            .filter(|required| find_sections(&sections, required.aliases).is_empty())
            .map(|required| required.label)
            .collect(),
        ..DocumentFindings::default()
    }
}

/// Validate the requirements document named `name`
#[must_use]
pub fn validate_prd(source: &dyn PlanSource, name: &str) -> StageOutcome {
    validate_document(source, name, check_prd)
}

/// Validate the design document named `name`
#[must_use]
pub fn validate_spec(source: &dyn PlanSource, name: &str) -> StageOutcome {
    validate_document(source, name, check_spec)
}

fn validate_document(
    source: &dyn PlanSource,
    name: &str,
    check: fn(&str) -> DocumentFindings,
) -> StageOutcome {
    let content = match source.read(name) {
        Ok(content) => content,
        Err(err) => return StageOutcome::fail(format!("{name}: {err}")),
    };

    let findings = check(&content);
    debug!("{name}: {findings:?}");

    if findings.is_clean() {
        StageOutcome::pass(format!("{name}: 必須セクション OK"))
    } else {
        StageOutcome::fail(format!("{name}: {}", findings.details()))
    }
}

fn missing_subsections(scope_sections: &[&Section]) -> Vec<&'static str> {
    let headings: Vec<String> = scope_sections.iter().flat_map(|&section| subheadings(section)).collect();
    SCOPE_SUBSECTIONS
        .iter()
        .filter(|required| !headings.iter().any(|h| heading_matches(h, required.aliases)))
        .map(|required| required.label)
        .collect()
}
