//! Read-only access to a plan directory on disk

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::ports::{PlanSource, SourceError};

/// Plan source backed by a directory
#[derive(Debug, Clone)]
pub struct FsPlanSource {
    /// Directory holding the plan artifacts
    plan_dir: PathBuf,
}

impl FsPlanSource {
    /// Create a source rooted at `plan_dir`
    #[must_use]
    pub const fn new(plan_dir: PathBuf) -> Self {
        Self { plan_dir }
    }

    /// The plan directory
    #[must_use]
    pub fn plan_dir(&self) -> &Path {
        &self.plan_dir
    }
}

impl PlanSource for FsPlanSource {
    fn read(&self, name: &str) -> Result<String, SourceError> {
        let path = self.plan_dir.join(name);
        if !path.is_file() {
            debug!("{} is not a file", path.display());
            return Err(SourceError::Missing);
        }

        debug!("reading {}", path.display());
        fs::read_to_string(&path).map_err(|e| SourceError::Unreadable(e.to_string()))
    }
}
