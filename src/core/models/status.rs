//! Stage status levels
//!
//! Defines the verdict a single validation stage can produce.

use serde::{Deserialize, Serialize};

/// Verdict of one validation stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// The stage found nothing wrong
    #[default]
    Pass,
    /// The stage found a blocking problem
    Fail,
    /// Advisory only - shown but never blocks
    Warn,
}

impl Status {
    /// Whether this status blocks the plan
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }

    /// Upper-case tag used in the line report
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Warn => "WARN",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
