//! Validation services
//!
//! Pure logic over text and value trees. Everything that touches the outside
//! world goes through the port traits passed in by the caller.
//!
//! - [`headings`] - Split markdown into sections and sub-headings
//! - [`matcher`] - Normalize headings and match them against aliases
//! - [`document`] - PRD and SPEC required-section checks
//! - [`schema`] - Task file field contracts
//! - [`graph`] - Duplicate ids, cycles and unknown dependencies
//! - [`report`] - Fixed-order aggregation into one report

pub mod document;
pub mod graph;
pub mod headings;
pub mod matcher;
pub mod report;
pub mod schema;

pub use document::{DocumentFindings, check_prd, check_spec, validate_prd, validate_spec};
pub use graph::{GraphFinding, analyze, duplicate_ids, unknown_dependencies, validate_dag};
pub use headings::{has_content, parse_sections, subheadings};
pub use matcher::{find_sections, heading_matches, normalize_heading};
pub use report::{Report, ReportLine, validate_plan};
pub use schema::{SchemaReport, check_structure, validate_tasks};
