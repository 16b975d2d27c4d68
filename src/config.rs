//! Per-plan configuration
//!
//! An optional `.plangate.toml` in the plan directory renames the artifacts:
//!
//! ```toml
//! [files]
//! prd = "requirements.md"
//! spec = "design.md"
//! tasks = "plan.yaml"
//! ```
//!
//! Every key falls back to its default.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::PlanFiles;
use crate::paths;

/// Errors that can occur when loading the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        /// Config file path
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },
}

/// plangate configuration for one plan directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanConfig {
    /// Artifact file names
    #[serde(default)]
    pub files: PlanFiles,
}

impl PlanConfig {
    /// Load `.plangate.toml` from `plan_dir`, or defaults if there is none
    pub fn load(plan_dir: &Path) -> Result<Self, ConfigError> {
        let path = paths::config_file(plan_dir);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }
}
