//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the validation logic and the
//! outside world (filesystem, structured-text parsers).
//!
//! Implementations live in the `adapters` module.

mod plan_source;
mod structured;

pub use plan_source::{PlanSource, SourceError};
pub use structured::StructuredParser;
