//! Domain models for plangate
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Section`] - A level-2 heading and its body
//! - [`RequiredSection`] - A logical section and its alias set
//! - [`Status`] - PASS / FAIL / WARN
//! - [`StageOutcome`] - What one validator reports
//! - [`TaskPlan`] - Task ids and dependencies from the task file
//! - [`PlanFiles`] - Artifact file names

mod files;
mod outcome;
mod plan;
mod section;
mod status;

pub use files::{DEFAULT_PRD_FILE, DEFAULT_SPEC_FILE, DEFAULT_TASKS_FILE, PlanFiles};
pub use outcome::StageOutcome;
pub use plan::{Task, TaskPlan, task_label};
pub use section::{RequiredSection, Section};
pub use status::Status;
