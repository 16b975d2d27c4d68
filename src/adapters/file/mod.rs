//! Filesystem plan source
//!
//! Implements `PlanSource` by reading files from a plan directory.

mod source;

pub use source::FsPlanSource;
