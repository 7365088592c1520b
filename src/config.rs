use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Tool configuration: overrides for the conventional skill-package layout.
/// Every field has a default matching the fixed layout, so running without a
/// config file validates the standard structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Workflow registry, relative to the skill root
    #[serde(default = "default_registry")]
    pub registry: String,

    /// Top-level docs index that must mention every router file
    #[serde(default = "default_docs_index")]
    pub docs_index: String,

    #[serde(default = "default_references_dir")]
    pub references_dir: String,

    #[serde(default = "default_assets_dir")]
    pub assets_dir: String,

    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Where generated skeletons and workflow artifacts land
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_registry() -> String {
    "scripts/workflow_registry.yaml".to_string()
}

fn default_docs_index() -> String {
    "docs/index.md".to_string()
}

fn default_references_dir() -> String {
    "references".to_string()
}

fn default_assets_dir() -> String {
    "assets".to_string()
}

fn default_scripts_dir() -> String {
    "scripts".to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            registry: default_registry(),
            docs_index: default_docs_index(),
            references_dir: default_references_dir(),
            assets_dir: default_assets_dir(),
            scripts_dir: default_scripts_dir(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: PathsConfig::default(),
            generate: GenerateConfig::default(),
        }
    }
}

impl Config {
    /// Load config from the working directory or user config directory
    #[allow(dead_code)]
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // If explicit path provided, use it
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        // Try working directory first (per-skill config)
        if let Ok(config) = Self::load_from_path("archdoc.toml") {
            debug!("Loaded config from ./archdoc.toml");
            return Ok(config);
        }

        // Try user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("archdoc").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        // Return defaults
        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.registry, "scripts/workflow_registry.yaml");
        assert_eq!(config.paths.docs_index, "docs/index.md");
        assert_eq!(config.paths.references_dir, "references");
        assert_eq!(config.generate.output_dir, ".");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("registry = \"scripts/workflow_registry.yaml\""));
        assert!(toml_str.contains("output_dir = \".\""));
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
[paths]
docs_index = "docs/README.md"
"#,
        )
        .unwrap();
        assert_eq!(config.paths.docs_index, "docs/README.md");
        // Unset fields fall back to the conventional layout
        assert_eq!(config.paths.registry, "scripts/workflow_registry.yaml");
        assert_eq!(config.generate.output_dir, ".");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let result = Config::load_with_path(Some("/tmp/nonexistent-archdoc-xyz.toml".to_string()));
        assert!(result.is_err());
    }
}
