//! YAML task-file parser
//!
//! Implements `StructuredParser` with `serde_yaml`, converting the YAML tree
//! into the neutral `serde_json::Value` the validators work on.

mod parser;

pub use parser::YamlParser;
