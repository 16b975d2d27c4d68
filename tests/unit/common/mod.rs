//! Shared test fixtures and helpers
//!
//! This module provides plan documents that pass every check, an on-disk
//! plan directory builder and an in-memory `PlanSource`.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use plangate::core::ports::{PlanSource, SourceError};
use tempfile::TempDir;

/// A requirements document with every required section filled in
pub const VALID_PRD: &str = "\
# Demo plan

## 目的/背景
Agents need a gate before execution.

## スコープ
### In scope
- PRD/SPEC/tasks checks
### Out of scope
- Auto-fixing documents

## 機能要件（FR）
- FR-1: validate sections

## 非機能要件（NFR）
- NFR-1: under one second

## 受け入れ条件（Acceptance Criteria）
- AC-1: broken plans fail

## Open Questions（未決事項）
- none
";

/// A design document with every required section present
pub const VALID_SPEC: &str = "\
## アーキテクチャ/変更点
Single binary.

## インターフェース
CLI.

## 実装タスク分解（若衆に渡す粒度）
See tasks.yaml.

## テスト計画
Unit and integration tests.

## ロールアウト/互換性
Opt-in.

## リスクと対策
Low.
";

/// Task file header with one requirement; append a `tasks:` block
pub const TASKS_HEADER: &str = "\
version: 1
epic: demo
objective: ship the gate
requirements:
  - id: R1
    title: \"x\"
    acceptance: \"y\"
";

/// A task file with a single valid task
pub const VALID_TASKS: &str = "\
version: 1
epic: demo
objective: ship the gate
requirements:
  - id: R1
    title: \"x\"
    acceptance: \"y\"
tasks:
  - id: T1
    owner: \"alice\"
    depends_on: []
    requirement_ids: [R1]
    definition_of_done: [\"done\"]
    deliverables: [\"d\"]
";

/// YAML for one well-formed task
pub fn task_yaml(id: &str, depends_on: &[&str]) -> String {
    format!(
        "  - id: {id}\n    owner: alice\n    depends_on: [{}]\n    requirement_ids: [R1]\n    \
         definition_of_done: [done]\n    deliverables: [d]\n",
        depends_on.join(", ")
    )
}

/// A full task file from `(id, depends_on)` pairs
pub fn tasks_file(tasks: &[(&str, &[&str])]) -> String {
    let mut out = format!("{TASKS_HEADER}tasks:\n");
    if tasks.is_empty() {
        out = format!("{TASKS_HEADER}tasks: []\n");
    }
    for (id, deps) in tasks {
        out.push_str(&task_yaml(id, deps));
    }
    out
}

/// A plan directory on disk
pub struct TestPlan {
    dir: TempDir,
}

impl TestPlan {
    /// An empty plan directory
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// A plan directory whose artifacts pass every check
    pub fn valid() -> Self {
        let plan = Self::empty();
        plan.write("PRD.md", VALID_PRD);
        plan.write("SPEC.md", VALID_SPEC);
        plan.write("tasks.yaml", VALID_TASKS);
        plan
    }

    /// Root of the plan directory
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write (or overwrite) an artifact
    pub fn write(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).unwrap();
    }

    /// Remove an artifact
    pub fn remove(&self, name: &str) {
        fs::remove_file(self.dir.path().join(name)).unwrap();
    }
}

/// In-memory `PlanSource`
#[derive(Default)]
pub struct MockPlanSource {
    files: HashMap<String, String>,
    unreadable: HashSet<String>,
}

impl MockPlanSource {
    /// A source holding the three valid artifacts
    pub fn valid() -> Self {
        Self::default()
            .with("PRD.md", VALID_PRD)
            .with("SPEC.md", VALID_SPEC)
            .with("tasks.yaml", VALID_TASKS)
    }

    /// Add or replace a file
    pub fn with(mut self, name: &str, content: &str) -> Self {
        self.files.insert(name.to_string(), content.to_string());
        self
    }

    /// Drop a file
    pub fn without(mut self, name: &str) -> Self {
        self.files.remove(name);
        self
    }

    /// Make a file fail to read
    pub fn unreadable(mut self, name: &str) -> Self {
        self.unreadable.insert(name.to_string());
        self
    }
}

impl PlanSource for MockPlanSource {
    fn read(&self, name: &str) -> Result<String, SourceError> {
        if self.unreadable.contains(name) {
            return Err(SourceError::Unreadable("permission denied".to_string()));
        }
        self.files.get(name).cloned().ok_or(SourceError::Missing)
    }
}
