//! Output formatting for human and JSON modes
//!
//! The human form is the line report consumed by people and workflow logs;
//! the JSON form carries the same data for machines.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::Status;
use crate::core::services::Report;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Header printed before the stage lines
pub const REPORT_HEADER: &str = "=== Plan Static Validation ===";

/// Result of a validation run, ready to render
#[derive(Debug, Serialize)]
pub struct ValidationResult {
    /// Whether no stage failed
    pub passed: bool,
    /// One entry per report line
    pub lines: Vec<LineResult>,
    /// De-duplicated reasons (empty on success)
    pub fail_reasons: Vec<String>,
}

/// A single report line
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// PASS, FAIL or WARN
    pub status: Status,
    /// Stage message
    pub message: String,
}

impl From<&Report> for ValidationResult {
    fn from(report: &Report) -> Self {
        Self {
            passed: report.passed(),
            lines: report
                .lines
                .iter()
                .map(|line| LineResult {
                    status: line.status,
                    message: line.message.clone(),
                })
                .collect(),
            fail_reasons: report.fail_reasons.clone(),
        }
    }
}

impl ValidationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Plain (uncoloured) text lines of the human report
    #[must_use]
    pub fn human_lines(&self) -> Vec<String> {
        let mut out = vec![REPORT_HEADER.to_string()];
        out.extend(self.lines.iter().map(|line| format!("[{}] {}", line.status, line.message)));
        out.push(format!("--- Result: {} ---", self.verdict()));

        if !self.passed {
            out.push("Fail reasons:".to_string());
            out.extend(self.fail_reasons.iter().map(|reason| format!("- {reason}")));
        }
        out
    }

    const fn verdict(&self) -> Status {
        if self.passed { Status::Pass } else { Status::Fail }
    }

    fn render_human(&self) {
        println!("{REPORT_HEADER}");
        for line in &self.lines {
            println!("[{}] {}", paint(line.status), line.message);
        }
        println!("--- Result: {} ---", paint(self.verdict()));

        if !self.passed {
            println!("Fail reasons:");
            for reason in &self.fail_reasons {
                println!("- {reason}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn paint(status: Status) -> colored::ColoredString {
    match status {
        Status::Pass => status.as_str().green(),
        Status::Fail => status.as_str().red().bold(),
        Status::Warn => status.as_str().yellow(),
    }
}
