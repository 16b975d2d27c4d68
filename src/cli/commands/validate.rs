//! Validate the artifacts of a plan directory

use log::{debug, warn};

use plangate::adapters::{self, file::FsPlanSource};
use plangate::config::PlanConfig;
use plangate::core::services::validate_plan;
use plangate::output::{OutputMode, ValidationResult};
use plangate::paths;

/// Validate a plan directory and exit non-zero if any stage failed
pub fn validate(plan_dir: &str, mode: OutputMode) -> anyhow::Result<()> {
    let plan_dir = paths::resolve_plan_dir(plan_dir);
    let config = PlanConfig::load(&plan_dir)?;

    let parser = adapters::structured_parser();
    if parser.is_none() {
        warn!("built without a structured parser; task checks run in degraded mode");
    }

    let source = FsPlanSource::new(plan_dir);
    debug!("validating {} with {:?}", source.plan_dir().display(), config.files);
    let report = validate_plan(&source, parser.as_deref(), &config.files);

    let result = ValidationResult::from(&report);
    result.render(mode);

    if !result.passed {
        std::process::exit(1);
    }

    Ok(())
}
