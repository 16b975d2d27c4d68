//! Dependency graph validator - duplicate ids, cycles and unknown references
//!
//! Nodes are task ids in declaration order; an edge points from a task to a
//! declared task it depends on. Duplicate ids are rejected before any
//! adjacency is built, so cycle detection only ever sees an unambiguous id
//! space.

use std::collections::{BTreeSet, HashMap, HashSet};

use log::debug;

use crate::core::models::{StageOutcome, Status, Task, TaskPlan};

/// What the graph analysis found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphFinding {
    /// No duplicate ids and no cycle
    Acyclic,
    /// Ids declared more than once, sorted ascending
    DuplicateIds(Vec<String>),
    /// A cycle, closed by repeating its first node at the end
    Cycle(Vec<String>),
}

/// Adjacency view over tasks with unique, non-blank ids
#[derive(Debug)]
struct DependencyGraph<'a> {
    order: Vec<&'a str>,
    edges: HashMap<&'a str, &'a [String]>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph, or return the duplicated ids instead
    fn build(tasks: &'a [Task]) -> Result<Self, Vec<String>> {
        let duplicates = duplicate_ids(tasks);
        if !duplicates.is_empty() {
            return Err(duplicates);
        }

        let mut order = Vec::new();
        let mut edges = HashMap::new();
        for task in tasks {
            if let Some(id) = task.id.as_deref() {
                order.push(id);
                edges.insert(id, task.depends_on.as_slice());
            }
        }
        Ok(Self { order, edges })
    }

    fn contains(&self, id: &str) -> bool {
        self.edges.contains_key(id)
    }

    fn dependencies(&self, id: &str) -> &'a [String] {
        self.edges.get(id).copied().unwrap_or_default()
    }

    /// Depth-first search from every unvisited node with an explicit frame
    /// stack. Each frame is `(node, index of the next dependency to follow)`;
    /// the frames themselves are the current path.
    fn find_cycle(&self) -> Option<Vec<String>> {
        let mut visited: HashSet<&str> = HashSet::new();

        for &start in &self.order {
            if !visited.insert(start) {
                continue;
            }

            let mut on_path: HashSet<&str> = HashSet::from([start]);
            let mut frames: Vec<(&str, usize)> = vec![(start, 0)];

            while let Some(&(node, next)) = frames.last() {
                let Some(dep) = self.dependencies(node).get(next).map(String::as_str) else {
                    frames.pop();
                    on_path.remove(node);
                    continue;
                };
                let top = frames.len() - 1;
                frames[top].1 += 1;

                if !self.contains(dep) {
                    continue;
                }

                if on_path.contains(dep) {
                    let cycle_start = frames.iter().position(|&(n, _)| n == dep).unwrap_or(0);
                    let mut cycle: Vec<String> =
                        frames[cycle_start..].iter().map(|&(n, _)| n.to_string()).collect();
                    cycle.push(dep.to_string());
                    return Some(cycle);
                }

                if visited.insert(dep) {
                    on_path.insert(dep);
                    frames.push((dep, 0));
                }
            }
        }

        None
    }
}

/// Every trimmed, non-blank id declared more than once, sorted ascending
#[must_use]
pub fn duplicate_ids(tasks: &[Task]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut duplicates = BTreeSet::new();
    for id in tasks.iter().filter_map(|t| t.id.as_deref()) {
        if !seen.insert(id) {
            duplicates.insert(id.to_string());
        }
    }
    duplicates.into_iter().collect()
}

/// Analyse the dependency graph of `tasks`
///
/// Duplicate ids take precedence over cycles.
#[must_use]
pub fn analyze(tasks: &[Task]) -> GraphFinding {
    match DependencyGraph::build(tasks) {
        Err(duplicates) => GraphFinding::DuplicateIds(duplicates),
        Ok(graph) => graph.find_cycle().map_or(GraphFinding::Acyclic, GraphFinding::Cycle),
    }
}

/// Graph stage for the task file named `name`
///
/// Without a task list the stage warns, unless the schema stage already
/// failed, in which case it fails too.
#[must_use]
pub fn validate_dag(name: &str, plan: Option<&TaskPlan>, schema_status: Status) -> StageOutcome {
    let Some(plan) = plan else {
        let reason = format!("{name}: DAGチェックを実行できません (tasks未取得)");
        return if schema_status.is_fail() {
            StageOutcome::fail(reason)
        } else {
            StageOutcome::warn(reason)
        };
    };

    let finding = analyze(&plan.tasks);
    debug!("{name}: graph finding {finding:?}");

    match finding {
        GraphFinding::Acyclic => StageOutcome::pass(format!("{name}: DAG OK (no cycles)")),
        GraphFinding::DuplicateIds(ids) => {
            StageOutcome::fail(format!("{name}: 重複した task id があります: {}", ids.join(", ")))
        },
        GraphFinding::Cycle(path) => {
            StageOutcome::fail(format!("{name}: 依存関係に循環があります: {}", path.join(" → ")))
        },
    }
}

/// One advisory line per dependency on an undeclared task id
#[must_use]
pub fn unknown_dependencies(name: &str, plan: Option<&TaskPlan>) -> Vec<StageOutcome> {
    let Some(plan) = plan else {
        return Vec::new();
    };

    let declared: HashSet<&str> = plan.task_ids().collect();
    let declared = &declared;
    plan.tasks
        .iter()
        .flat_map(|task| {
            task.depends_on
                .iter()
                .filter(move |dep| !declared.contains(dep.as_str()))
                .map(move |dep| {
                    StageOutcome::warn(format!(
                        "{name}: {} の depends_on に未知のID '{dep}' があります",
                        task.label()
                    ))
                })
        })
        .collect()
}
