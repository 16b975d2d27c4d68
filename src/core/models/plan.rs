//! Typed view of the task file
//!
//! The schema validator checks every field on the raw value tree first. What
//! survives into these types is only what the graph checks need: position,
//! id and declared dependencies.

use serde::Serialize;
use serde_json::Value;

/// One entry of the `tasks` list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Zero-based position in the `tasks` list
    pub position: usize,
    /// Trimmed identifier; `None` when absent, blank or not text
    pub id: Option<String>,
    /// Trimmed, non-blank text entries of `depends_on`
    pub depends_on: Vec<String>,
}

impl Task {
    /// Project a task mapping at `position`; `None` for anything else
    #[must_use]
    pub fn from_value(position: usize, value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            position,
            id: map.get("id").and_then(trimmed_text),
            depends_on: id_list(map.get("depends_on")),
        })
    }

    /// Label used in diagnostics: `task <id>` or `task #<n>`
    #[must_use]
    pub fn label(&self) -> String {
        task_label(self.id.as_deref(), self.position)
    }
}

/// The task list handed from the schema check to the graph checks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskPlan {
    /// Mapping entries of `tasks`
    pub tasks: Vec<Task>,
}

impl TaskPlan {
    /// Every declared task id (trimmed, non-blank)
    pub fn task_ids(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().filter_map(|t| t.id.as_deref())
    }
}

/// Label a task by trimmed id or by 1-based position
#[must_use]
pub fn task_label(id: Option<&str>, position: usize) -> String {
    match id.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => format!("task {id}"),
        None => format!("task #{}", position + 1),
    }
}

fn trimmed_text(value: &Value) -> Option<String> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

fn id_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(trimmed_text).collect())
        .unwrap_or_default()
}
