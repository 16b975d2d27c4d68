//! Names of the plan artifacts inside a plan directory

use serde::{Deserialize, Serialize};

/// Default requirements document name
pub const DEFAULT_PRD_FILE: &str = "PRD.md";

/// Default design document name
pub const DEFAULT_SPEC_FILE: &str = "SPEC.md";

/// Default task file name
pub const DEFAULT_TASKS_FILE: &str = "tasks.yaml";

/// File names of the three artifacts, relative to the plan directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanFiles {
    /// Requirements document
    pub prd: String,
    /// Design document
    pub spec: String,
    /// Structured task file
    pub tasks: String,
}

impl Default for PlanFiles {
    fn default() -> Self {
        Self {
            prd: DEFAULT_PRD_FILE.to_string(),
            spec: DEFAULT_SPEC_FILE.to_string(),
            tasks: DEFAULT_TASKS_FILE.to_string(),
        }
    }
}
