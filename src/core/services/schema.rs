//! Task schema validator - field contracts for the structured task file
//!
//! Degenerate inputs (missing, unreadable, blank, unparsable, wrong root shape)
//! short-circuit with a single reason. A well-shaped root is checked entry by
//! entry and every violation is reported.

use log::debug;
use serde_json::{Map, Value};

use crate::core::models::{StageOutcome, Task, TaskPlan, task_label};
use crate::core::ports::{PlanSource, StructuredParser};

/// Keys the root mapping must carry
pub const ROOT_KEYS: &[&str] = &["version", "epic", "objective", "requirements"];

/// Keys every requirement must carry
pub const REQUIREMENT_KEYS: &[&str] = &["id", "title", "acceptance"];

/// Keys every task must carry
pub const TASK_KEYS: &[&str] =
    &["id", "owner", "depends_on", "requirement_ids", "definition_of_done", "deliverables"];

/// Outcome of the schema stage plus the typed plan for the graph stages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaReport {
    /// Stage verdict
    pub outcome: StageOutcome,
    /// Present whenever the root was well-shaped, even if entries failed
    pub plan: Option<TaskPlan>,
}

impl SchemaReport {
    fn without_plan(outcome: StageOutcome) -> Self {
        Self {
            outcome,
            plan: None,
        }
    }
}

/// Read, parse and check the task file named `name`
///
/// `parser` is `None` in degraded mode: only existence and non-blankness are
/// checked and the stage warns instead of failing.
#[must_use]
pub fn validate_tasks(
    source: &dyn PlanSource,
    name: &str,
    parser: Option<&dyn StructuredParser>,
) -> SchemaReport {
    let raw = match source.read(name) {
        Ok(raw) => raw,
        Err(err) => return SchemaReport::without_plan(StageOutcome::fail(format!("{name}: {err}"))),
    };

    if raw.trim().is_empty() {
        return SchemaReport::without_plan(StageOutcome::fail(format!("{name}: 空ファイルです")));
    }

    let Some(parser) = parser else {
        return SchemaReport::without_plan(StageOutcome::warn(format!(
            "{name}: 構造化パーサ無効: 詳細チェックをスキップ"
        )));
    };

    match parser.parse(&raw) {
        Ok(root) => check_structure(name, &root),
        Err(err) => SchemaReport::without_plan(StageOutcome::fail(format!(
            "{name}: {} parse 失敗: {err}",
            parser.format_name()
        ))),
    }
}

/// Check an already parsed task file
#[must_use]
pub fn check_structure(name: &str, root: &Value) -> SchemaReport {
    let Some(root) = root.as_object() else {
        return SchemaReport::without_plan(StageOutcome::fail(format!(
            "{name}: ルートはマップ形式である必要があります"
        )));
    };

    let missing_root: Vec<&str> = ROOT_KEYS.iter().copied().filter(|key| !root.contains_key(*key)).collect();
    if !missing_root.is_empty() {
        return SchemaReport::without_plan(StageOutcome::fail(format!(
            "{name}: ルート必須キー欠落: {}",
            missing_root.join(", ")
        )));
    }

    let Some(tasks) = root.get("tasks").and_then(Value::as_array) else {
        return SchemaReport::without_plan(StageOutcome::fail(format!(
            "{name}: `tasks` キーが存在し、リストである必要があります"
        )));
    };

    let Some(requirements) = root.get("requirements").and_then(Value::as_array) else {
        return SchemaReport::without_plan(StageOutcome::fail(format!(
            "{name}: `requirements` キーが存在し、リストである必要があります"
        )));
    };

    let mut reasons = Vec::new();
    for (index, requirement) in requirements.iter().enumerate() {
        check_requirement(name, index, requirement, &mut reasons);
    }
    for (index, task) in tasks.iter().enumerate() {
        check_task(name, index, task, &mut reasons);
    }
    debug!("{name}: {} requirement(s), {} task(s), {} violation(s)", requirements.len(), tasks.len(), reasons.len());

    let plan = TaskPlan {
        tasks: tasks.iter().enumerate().filter_map(|(i, t)| Task::from_value(i, t)).collect(),
    };

    SchemaReport {
        outcome: StageOutcome::from_reasons(reasons, format!("{name}: 構造 OK ({} tasks)", tasks.len())),
        plan: Some(plan),
    }
}

fn check_requirement(name: &str, index: usize, requirement: &Value, reasons: &mut Vec<String>) {
    let label = requirement_label(requirement, index);
    let Some(fields) = requirement.as_object() else {
        reasons.push(format!("{name}: requirement {label} がマップ形式ではありません"));
        return;
    };

    for key in REQUIREMENT_KEYS {
        if !fields.contains_key(*key) {
            reasons.push(format!("{name}: requirement {label} に {key} がない"));
        }
    }
}

fn check_task(name: &str, index: usize, task: &Value, reasons: &mut Vec<String>) {
    let label = task_label(task.get("id").and_then(Value::as_str), index);
    let Some(fields) = task.as_object() else {
        reasons.push(format!("{name}: {label} がマップ形式ではありません"));
        return;
    };

    for key in TASK_KEYS {
        if !fields.contains_key(*key) {
            reasons.push(format!("{name}: {label} に {key} がない"));
        }
    }

    let blank_owner = fields
        .get("owner")
        .is_some_and(|owner| owner.as_str().is_none_or(|owner| owner.trim().is_empty()));
    if blank_owner {
        reasons.push(format!("{name}: {label} の owner が空文字列です"));
    }

    check_list(name, &label, fields, "depends_on", false, reasons);
    check_list(name, &label, fields, "definition_of_done", true, reasons);
    check_list(name, &label, fields, "deliverables", false, reasons);
    check_list(name, &label, fields, "requirement_ids", true, reasons);
}

/// A present field must be a list, and non-empty when `non_empty` is set
fn check_list(
    name: &str,
    label: &str,
    fields: &Map<String, Value>,
    key: &str,
    non_empty: bool,
    reasons: &mut Vec<String>,
) {
    match fields.get(key) {
        None => {},
        Some(Value::Array(items)) => {
            if non_empty && items.is_empty() {
                reasons.push(format!("{name}: {label} の {key} が空です"));
            }
        },
        Some(_) => reasons.push(format!("{name}: {label} の {key} はリストである必要があります")),
    }
}

fn requirement_label(requirement: &Value, index: usize) -> String {
    match requirement.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(id @ (Value::Number(_) | Value::Bool(_))) => id.to_string(),
        _ => format!("#{}", index + 1),
    }
}
