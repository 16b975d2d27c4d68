//! Core validation logic for plangate
//!
//! This module contains pure validation logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Section, Task, Status, StageOutcome)
//! - `services/` - Parsers, validators and the report aggregator
//! - `ports/` - Trait definitions for file access and structured parsing

pub mod models;
pub mod ports;
pub mod services;
