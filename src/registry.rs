use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// One registry entry: a router document that must point readers at the
/// canonical source document. Both paths are relative to the skill root.
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryEntry {
    pub router: String,
    pub canonical: String,
}

/// Section name -> entry name -> {router, canonical}.
/// BTreeMap keeps the problem list in a stable order across runs.
pub type Registry = BTreeMap<String, BTreeMap<String, RegistryEntry>>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Registry file missing: {0}")]
    Missing(PathBuf),

    #[error("Failed to read registry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed registry {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load the workflow registry. An empty file is an empty registry.
pub fn load_registry(path: &Path) -> Result<Registry, RegistryError> {
    if !path.exists() {
        return Err(RegistryError::Missing(path.to_path_buf()));
    }

    let text = fs::read_to_string(path).map_err(|source| RegistryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if text.trim().is_empty() {
        return Ok(Registry::new());
    }

    serde_yaml::from_str(&text).map_err(|source| RegistryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks that canonical docs, router files, and the docs index agree with the
/// registry. Every problem is collected; a single run surfaces the complete
/// defect set.
pub struct DocsValidator {
    root: PathBuf,
    docs_index: PathBuf,
}

impl DocsValidator {
    pub fn new(root: &Path, docs_index: impl AsRef<Path>) -> Self {
        Self {
            root: root.to_path_buf(),
            docs_index: root.join(docs_index.as_ref()),
        }
    }

    pub fn validate(&self, registry: &Registry) -> Vec<String> {
        let mut errors = Vec::new();

        for (section, entries) in registry {
            for (name, entry) in entries {
                if !self.root.join(&entry.canonical).exists() {
                    errors.push(format!(
                        "Canonical file missing for {}.{}: {}",
                        section, name, entry.canonical
                    ));
                }
                self.ensure_router(entry, &mut errors);
            }
            self.check_index_mentions(section, entries, &mut errors);
        }

        errors
    }

    /// The router file must exist and textually contain the canonical path as
    /// written in the registry, so navigation files cannot go silently stale.
    fn ensure_router(&self, entry: &RegistryEntry, errors: &mut Vec<String>) {
        let router_path = self.root.join(&entry.router);
        if !router_path.exists() {
            errors.push(format!("Missing router file: {}", entry.router));
            return;
        }

        match fs::read_to_string(&router_path) {
            Ok(content) => {
                if !content.contains(&entry.canonical) {
                    errors.push(format!(
                        "Router {} does not reference canonical {}",
                        entry.router, entry.canonical
                    ));
                }
            }
            Err(err) => {
                errors.push(format!("Failed to read router {}: {}", entry.router, err));
            }
        }
    }

    /// The docs index must mention each router's filename stem somewhere in
    /// its text.
    fn check_index_mentions(
        &self,
        section: &str,
        entries: &BTreeMap<String, RegistryEntry>,
        errors: &mut Vec<String>,
    ) {
        if !self.docs_index.exists() {
            errors.push(format!(
                "Docs index missing at {}",
                self.docs_index.display()
            ));
            return;
        }

        let index_text = match fs::read_to_string(&self.docs_index) {
            Ok(text) => text,
            Err(err) => {
                errors.push(format!(
                    "Failed to read docs index {}: {}",
                    self.docs_index.display(),
                    err
                ));
                return;
            }
        };

        for (name, entry) in entries {
            let stem = Path::new(&entry.router)
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(entry.router.as_str());
            if !index_text.contains(stem) {
                errors.push(format!(
                    "Docs index missing link mention for {} entry '{}' (router {})",
                    section, name, entry.router
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_registry_missing_file() {
        let err = load_registry(Path::new("/tmp/nonexistent-registry-xyz.yaml")).unwrap_err();
        assert!(matches!(err, RegistryError::Missing(_)));
        assert!(err.to_string().contains("Registry file missing"));
    }

    #[test]
    fn test_load_registry_empty_file_is_empty_registry() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("workflow_registry.yaml");
        fs::File::create(&path).unwrap();

        let registry = load_registry(&path).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_registry_parses_sections_and_entries() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("workflow_registry.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(
            file,
            r#"workflows:
  discovery:
    router: docs/routers/discovery.md
    canonical: references/discovery-questions-enhanced.md
  migration:
    router: docs/routers/migration.md
    canonical: references/migration-patterns.md"#
        )
        .unwrap();

        let registry = load_registry(&path).unwrap();
        let workflows = registry.get("workflows").unwrap();
        assert_eq!(workflows.len(), 2);
        assert_eq!(
            workflows.get("discovery").unwrap().canonical,
            "references/discovery-questions-enhanced.md"
        );
    }

    #[test]
    fn test_load_registry_malformed_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("workflow_registry.yaml");
        fs::write(&path, "workflows: [unclosed").unwrap();

        let err = load_registry(&path).unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
    }
}
