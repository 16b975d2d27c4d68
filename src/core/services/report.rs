//! Report aggregator - runs every stage in a fixed order
//!
//! PRD, SPEC, task schema, unknown dependencies, dependency graph. The run
//! fails iff at least one line is FAIL; WARN lines are advisory.

use std::collections::HashSet;

use log::{debug, info};
use serde::Serialize;

use crate::core::models::{PlanFiles, StageOutcome, Status};
use crate::core::ports::{PlanSource, StructuredParser};

use super::{document, graph, schema};

/// One `[STATUS] message` line of the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    /// Stage verdict
    pub status: Status,
    /// Stage message
    pub message: String,
}

/// Aggregated result of one validation run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Lines in stage order
    pub lines: Vec<ReportLine>,
    /// Reasons of failed stages, de-duplicated, first occurrence kept
    pub fail_reasons: Vec<String>,
}

impl Report {
    /// Whether no stage failed
    #[must_use]
    pub fn passed(&self) -> bool {
        !self.lines.iter().any(|line| line.status.is_fail())
    }

    /// Number of lines with the given status
    #[must_use]
    pub fn count(&self, status: Status) -> usize {
        self.lines.iter().filter(|line| line.status == status).count()
    }

    fn push(&mut self, outcome: StageOutcome) {
        if outcome.status.is_fail() {
            self.fail_reasons.extend(outcome.reasons);
        }
        self.lines.push(ReportLine {
            status: outcome.status,
            message: outcome.message,
        });
    }

    fn dedup_reasons(&mut self) {
        let mut seen = HashSet::new();
        self.fail_reasons.retain(|reason| seen.insert(reason.clone()));
    }
}

/// Validate every artifact of a plan
///
/// `parser` is checked once: `None` runs both task stages in degraded mode.
#[must_use]
pub fn validate_plan(
    source: &dyn PlanSource,
    parser: Option<&dyn StructuredParser>,
    files: &PlanFiles,
) -> Report {
    let mut report = Report::default();

    report.push(document::validate_prd(source, &files.prd));
    report.push(document::validate_spec(source, &files.spec));

    let schema = schema::validate_tasks(source, &files.tasks, parser);
    let schema_status = schema.outcome.status;
    report.push(schema.outcome);

    if parser.is_some() {
        for warning in graph::unknown_dependencies(&files.tasks, schema.plan.as_ref()) {
            report.push(warning);
        }
        report.push(graph::validate_dag(&files.tasks, schema.plan.as_ref(), schema_status));
    } else {
        debug!("no structured parser, graph checks skipped");
        report.push(StageOutcome::warn(format!(
            "{}: DAGチェックをスキップ (構造化パーサ無効)",
            files.tasks
        )));
    }

    report.dedup_reasons();
    info!(
        "plan validation finished: {} pass, {} warn, {} fail",
        report.count(Status::Pass),
        report.count(Status::Warn),
        report.count(Status::Fail)
    );
    report
}
