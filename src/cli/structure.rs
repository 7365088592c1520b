use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use tracing::info;

use crate::config::Config;
use crate::report::{self, Format};
use crate::structure::StructureValidator;

pub fn run(path: String, format: String, config_path: Option<String>) -> Result<()> {
    let root = Path::new(&path);
    if !root.is_dir() {
        bail!("Skill root is not a directory: {}", path);
    }

    let format = Format::from_str(&format)
        .map_err(|()| anyhow!("Unknown format: {} (expected text or json)", format))?;
    let config = Config::load_with_path(config_path)?;

    info!("Validating skill structure under {}", path);
    let outcomes = StructureValidator::new(root, &config).run_all();
    report::print_outcomes(&outcomes, format)?;

    let failures = outcomes.iter().filter(|o| !o.passed).count();
    if failures > 0 {
        bail!("{} structure check(s) failed", failures);
    }

    Ok(())
}
