use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::skeleton::{
    SkeletonGenerator, ADR_TEMPLATE, DECISION_MATRIX_TEMPLATE, WAF_REVIEW_TEMPLATE,
};

#[allow(clippy::too_many_arguments)]
pub fn run(
    path: String,
    workload: Option<String>,
    decision: Option<String>,
    adr: Option<u32>,
    output: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    let root = Path::new(&path);
    let config = Config::load_with_path(config_path)?;

    let output_dir = PathBuf::from(output.unwrap_or_else(|| config.generate.output_dir.clone()));
    fs::create_dir_all(&output_dir)?;

    let assets_dir = root.join(&config.paths.assets_dir);
    let generator = SkeletonGenerator::new(&assets_dir, &output_dir);

    let mut generated = false;

    if let Some(workload) = &workload {
        info!("Generating WAF review skeleton for '{}'", workload);
        announce(generator.waf_review(workload)?, WAF_REVIEW_TEMPLATE, &assets_dir);
        generated = true;
    }

    if let Some(decision) = &decision {
        info!("Generating decision matrix skeleton for '{}'", decision);
        announce(
            generator.decision_matrix(decision)?,
            DECISION_MATRIX_TEMPLATE,
            &assets_dir,
        );
        generated = true;
    }

    if let Some(number) = adr {
        // An explicit decision title names the ADR; otherwise derive one from
        // the number.
        let title = decision
            .clone()
            .unwrap_or_else(|| format!("Decision-{}", number));
        info!("Generating ADR skeleton '{}' (#{})", title, number);
        announce(generator.adr(&title, number)?, ADR_TEMPLATE, &assets_dir);
        generated = true;
    }

    if !generated {
        println!("Usage: archdoc generate -w <workload> | -d <decision> | -a <adr_number>");
    }

    Ok(())
}

fn announce(result: Option<PathBuf>, template: &str, assets_dir: &Path) {
    match result {
        Some(path) => println!("Generated: {}", path.display()),
        None => eprintln!("ERROR: {} not found in {}", template, assets_dir.display()),
    }
}
