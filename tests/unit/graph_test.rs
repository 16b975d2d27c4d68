//! Tests for duplicate-id, cycle and unknown-dependency detection

use plangate::adapters::yaml::YamlParser;
use plangate::core::models::Status;
use plangate::core::services::{GraphFinding, analyze, unknown_dependencies, validate_dag, validate_tasks};

use crate::common::{MockPlanSource, TASKS_HEADER, tasks_file};

fn plan(content: &str) -> plangate::core::models::TaskPlan {
    let source = MockPlanSource::default().with("tasks.yaml", content);
    validate_tasks(&source, "tasks.yaml", Some(&YamlParser)).plan.expect("task plan")
}

#[test]
fn three_task_cycle_reports_closed_path() {
    let plan = plan(&tasks_file(&[("A", &["B"]), ("B", &["C"]), ("C", &["A"])]));
    let outcome = validate_dag("tasks.yaml", Some(&plan), Status::Pass);
    assert_eq!(outcome.status, Status::Fail);
    assert_eq!(outcome.message, "tasks.yaml: 依存関係に循環があります: A → B → C → A");
}

#[test]
fn acyclic_plan_passes() {
    let plan = plan(&tasks_file(&[("A", &[]), ("B", &["A"]), ("C", &["A", "B"])]));
    let outcome = validate_dag("tasks.yaml", Some(&plan), Status::Pass);
    assert_eq!(outcome.status, Status::Pass);
    assert_eq!(outcome.message, "tasks.yaml: DAG OK (no cycles)");
}

#[test]
fn duplicate_ids_are_reported_sorted() {
    let plan = plan(&tasks_file(&[("T2", &[]), ("T1", &[]), ("T2", &[]), ("T1", &[])]));
    let outcome = validate_dag("tasks.yaml", Some(&plan), Status::Pass);
    assert_eq!(outcome.message, "tasks.yaml: 重複した task id があります: T1, T2");
}

#[test]
fn duplicate_detection_uses_trimmed_ids() {
    let content = format!(
        "{TASKS_HEADER}tasks:\n  - id: \"T1 \"\n    depends_on: []\n  - id: \" T1\"\n    depends_on: []\n"
    );
    assert_eq!(analyze(&plan(&content).tasks), GraphFinding::DuplicateIds(vec!["T1".into()]));
}

#[test]
fn duplicates_take_precedence_over_cycle() {
    let plan = plan(&tasks_file(&[("A", &["B"]), ("B", &["A"]), ("A", &[])]));
    assert_eq!(analyze(&plan.tasks), GraphFinding::DuplicateIds(vec!["A".into()]));
}

#[test]
fn tasks_without_id_are_not_nodes() {
    let content = format!("{TASKS_HEADER}tasks:\n  - owner: x\n    depends_on: [A]\n  - id: A\n    depends_on: []\n");
    assert_eq!(analyze(&plan(&content).tasks), GraphFinding::Acyclic);
}

#[test]
fn unknown_dependency_yields_one_warning() {
    let plan = plan(&tasks_file(&[("A", &["EXT-9"]), ("B", &["A"])]));
    let warnings = unknown_dependencies("tasks.yaml", Some(&plan));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].status, Status::Warn);
    assert_eq!(warnings[0].message, "tasks.yaml: task A の depends_on に未知のID 'EXT-9' があります");
    assert_eq!(validate_dag("tasks.yaml", Some(&plan), Status::Pass).status, Status::Pass);
}

#[test]
fn unknown_dependency_label_uses_position_without_id() {
    let content = format!("{TASKS_HEADER}tasks:\n  - owner: x\n    depends_on: [\" GHOST \", \"\", 7]\n");
    let warnings = unknown_dependencies("tasks.yaml", Some(&plan(&content)));
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].message, "tasks.yaml: task #1 の depends_on に未知のID 'GHOST' があります");
}

#[test]
fn no_plan_means_no_unknown_dependency_warnings() {
    assert!(unknown_dependencies("tasks.yaml", None).is_empty());
}
