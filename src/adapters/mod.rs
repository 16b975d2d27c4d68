//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Plan directory access (`PlanSource`)
//! - `yaml/` - YAML task-file parsing (`StructuredParser`, `yaml` feature)

pub mod file;
#[cfg(feature = "yaml")]
pub mod yaml;

use crate::core::ports::StructuredParser;

/// The structured parser compiled into this build, if any
///
/// Builds without the `yaml` feature run the task checks in degraded mode.
#[must_use]
pub fn structured_parser() -> Option<Box<dyn StructuredParser>> {
    #[cfg(feature = "yaml")]
    {
        Some(Box::new(yaml::YamlParser))
    }
    #[cfg(not(feature = "yaml"))]
    {
        None
    }
}
