//! Centralized path handling for plangate
//!
//! ## Plan Directory Layout
//!
//! ```text
//! plan/
//! ├── PRD.md            # Requirements document
//! ├── SPEC.md           # Design document
//! ├── tasks.yaml        # Structured task breakdown
//! └── .plangate.toml    # Optional: overrides the names above
//! ```

use std::path::{Path, PathBuf};

/// Optional per-plan configuration filename
pub const CONFIG_FILE: &str = ".plangate.toml";

/// Resolve a user-supplied plan directory
///
/// Expands a leading `~` to the home directory and canonicalizes the result
/// when it exists. A directory that does not exist is returned as given so
/// the validators can report the missing artifacts.
#[must_use]
pub fn resolve_plan_dir(raw: &str) -> PathBuf {
    let expanded = expand_home(raw);
    expanded.canonicalize().unwrap_or(expanded)
}

/// Path of the config file inside `plan_dir`
#[must_use]
pub fn config_file(plan_dir: &Path) -> PathBuf {
    plan_dir.join(CONFIG_FILE)
}

fn expand_home(raw: &str) -> PathBuf {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return PathBuf::from(raw),
    };

    match dirs::home_dir() {
        Some(home) => home.join(rest.trim_start_matches(['/', '\\'])),
        None => PathBuf::from(raw),
    }
}
