//! Structured parser port
//!
//! The task file is parsed through this capability. When no parser is
//! available the aggregator runs in degraded mode and only checks that the
//! file exists and is not blank.

use serde_json::Value;

/// Turns task-file text into a neutral value tree
pub trait StructuredParser {
    /// Short format name used in diagnostics (e.g. `YAML`)
    fn format_name(&self) -> &'static str;

    /// Parse the raw text
    ///
    /// The error string is surfaced verbatim in the report.
    fn parse(&self, raw: &str) -> Result<Value, String>;
}
