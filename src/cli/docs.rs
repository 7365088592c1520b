use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use tracing::info;

use crate::config::Config;
use crate::registry::{load_registry, DocsValidator};
use crate::report::Format;

pub fn run(path: String, format: String, config_path: Option<String>) -> Result<()> {
    let root = Path::new(&path);
    let format = Format::from_str(&format)
        .map_err(|()| anyhow!("Unknown format: {} (expected text or json)", format))?;
    let config = Config::load_with_path(config_path)?;

    let registry = load_registry(&root.join(&config.paths.registry))?;
    info!(
        "Validating {} registry section(s) under {}",
        registry.len(),
        path
    );

    let errors = DocsValidator::new(root, &config.paths.docs_index).validate(&registry);

    match format {
        Format::Text => {
            if errors.is_empty() {
                println!("All documentation entries validated successfully.");
            } else {
                println!("\nValidation failed with {} issue(s):", errors.len());
                for err in &errors {
                    println!("- {}", err);
                }
                println!();
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(&errors)?);
        }
    }

    if !errors.is_empty() {
        bail!("{} documentation issue(s) found", errors.len());
    }

    Ok(())
}
