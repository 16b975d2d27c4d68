//! Plan source port
//!
//! Defines how validators obtain the raw text of a plan artifact.

use thiserror::Error;

/// Why a plan file could not be read
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file does not exist (or is not a regular file)
    #[error("ファイルが存在しません")]
    Missing,

    /// The file exists but reading it failed
    #[error("読み込み失敗: {0}")]
    Unreadable(String),
}

/// Read-only access to the artifacts of one plan directory
///
/// Implementations must never write; the gate only observes.
pub trait PlanSource {
    /// Read the named artifact as UTF-8 text
    fn read(&self, name: &str) -> Result<String, SourceError>;
}
