use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use tracing::info;

use crate::config::Config;
use crate::outputs::OutputValidator;
use crate::report::{self, Format};

pub fn run(output: Option<String>, format: String, config_path: Option<String>) -> Result<()> {
    let format = Format::from_str(&format)
        .map_err(|()| anyhow!("Unknown format: {} (expected text or json)", format))?;
    let config = Config::load_with_path(config_path)?;

    let output_dir = output.unwrap_or_else(|| config.generate.output_dir.clone());

    info!("Validating workflow outputs in {}", output_dir);
    let outcomes = OutputValidator::new(output_dir).run_all();
    report::print_outcomes(&outcomes, format)?;

    let failures = outcomes.iter().filter(|o| !o.passed).count();
    if failures > 0 {
        bail!("{} output check(s) failed", failures);
    }

    Ok(())
}
