//! Stage outcomes
//!
//! Every validator produces one [`StageOutcome`]. The aggregator turns them
//! into report lines and fail reasons.

use serde::Serialize;

use super::Status;

/// Result of a single validation stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageOutcome {
    /// Verdict of the stage
    pub status: Status,
    /// One-line summary shown in the report
    pub message: String,
    /// Every blocking reason the stage found (empty unless failed)
    pub reasons: Vec<String>,
}

impl StageOutcome {
    /// A passing stage
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            status: Status::Pass,
            message: message.into(),
            reasons: Vec::new(),
        }
    }

    /// A warning stage (never contributes fail reasons)
    #[must_use]
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            status: Status::Warn,
            message: message.into(),
            reasons: Vec::new(),
        }
    }

    /// A failing stage whose single reason is its message
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            status: Status::Fail,
            reasons: vec![message.clone()],
            message,
        }
    }

    /// A failing stage with several reasons; the first one becomes the summary
    ///
    /// Returns a passing outcome with `pass_message` when `reasons` is empty.
    #[must_use]
    pub fn from_reasons(reasons: Vec<String>, pass_message: impl Into<String>) -> Self {
        match reasons.first() {
            Some(first) => Self {
                status: Status::Fail,
                message: first.clone(),
                reasons,
            },
            None => Self::pass(pass_message),
        }
    }
}
