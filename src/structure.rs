use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::report::CheckOutcome;

pub const SKILL_REQUIRED_FRONTMATTER_FIELDS: &[&str] = &["name", "description"];

pub const REQUIRED_REFERENCE_FILES: &[&str] = &[
    "discovery-questions-enhanced.md",
    "well-architected-pillars.md",
    "service-decisions-enhanced.md",
    "service-comparisons.md",
    "migration-patterns.md",
    "architecture-patterns.md",
    "compliance-framework.md",
];

pub const REQUIRED_ASSET_FILES: &[&str] = &[
    "ADR_TEMPLATE.md",
    "WAF_REVIEW_REPORT_TEMPLATE.md",
    "ARCH_DECISION_MATRIX_TEMPLATE.md",
    "DIAGRAM_SPEC_TEMPLATE.md",
    "SERVICE_SELECTION_SCORECARD_TEMPLATE.yml",
];

pub const REQUIRED_SCRIPT_FILES: &[&str] = &["workflow_registry.yaml"];

/// Markdown links into references/, e.g. `[Pillars](references/well-architected-pillars.md)`
static SKILL_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\((references/[^)]+\.md)\)").unwrap());

/// Return the frontmatter region: the text between the first two `---` lines.
/// This is a delimiter scan, not a YAML parse: a field is "present" when
/// `<name>:` occurs as a substring of the region.
fn frontmatter_region(content: &str) -> Option<String> {
    if !content.starts_with("---") {
        return None;
    }

    let mut in_frontmatter = false;
    let mut region = Vec::new();
    for line in content.lines() {
        if line.trim() == "---" {
            if !in_frontmatter {
                in_frontmatter = true;
                continue;
            }
            break;
        }
        if in_frontmatter {
            region.push(line);
        }
    }
    Some(region.join("\n"))
}

/// Validates the fixed layout of a skill package: the SKILL.md descriptor,
/// the closed lists of reference/asset/script files, and that every reference
/// link in SKILL.md resolves.
pub struct StructureValidator {
    root: PathBuf,
    references_dir: PathBuf,
    assets_dir: PathBuf,
    scripts_dir: PathBuf,
}

type Check = (&'static str, fn(&StructureValidator) -> Result<(bool, String)>);

impl StructureValidator {
    pub fn new(root: &Path, config: &Config) -> Self {
        Self {
            root: root.to_path_buf(),
            references_dir: root.join(&config.paths.references_dir),
            assets_dir: root.join(&config.paths.assets_dir),
            scripts_dir: root.join(&config.paths.scripts_dir),
        }
    }

    /// Run every check in order. A check that fails, or errors internally,
    /// never stops the remaining checks.
    pub fn run_all(&self) -> Vec<CheckOutcome> {
        let checks: &[Check] = &[
            ("SKILL.md structure", Self::check_skill_md),
            ("Reference files", Self::check_references),
            ("Asset templates", Self::check_assets),
            ("Workflow scripts", Self::check_scripts),
            ("SKILL.md references", Self::check_skill_links),
        ];

        checks
            .iter()
            .map(|(name, check)| CheckOutcome::from_result(name, check(self)))
            .collect()
    }

    /// SKILL.md exists at root and carries the required frontmatter fields.
    fn check_skill_md(&self) -> Result<(bool, String)> {
        let skill_path = self.root.join("SKILL.md");
        if !skill_path.exists() {
            return Ok((false, "SKILL.md not found at root".to_string()));
        }

        let content = fs::read_to_string(&skill_path)?;
        let Some(frontmatter) = frontmatter_region(&content) else {
            return Ok((false, "SKILL.md missing YAML frontmatter".to_string()));
        };

        for field in SKILL_REQUIRED_FRONTMATTER_FIELDS {
            if !frontmatter.contains(&format!("{}:", field)) {
                return Ok((false, format!("SKILL.md missing {} in frontmatter", field)));
            }
        }

        Ok((true, "SKILL.md valid".to_string()))
    }

    fn check_references(&self) -> Result<(bool, String)> {
        self.check_required_files(&self.references_dir, REQUIRED_REFERENCE_FILES, "reference")
    }

    fn check_assets(&self) -> Result<(bool, String)> {
        self.check_required_files(&self.assets_dir, REQUIRED_ASSET_FILES, "asset")
    }

    fn check_scripts(&self) -> Result<(bool, String)> {
        self.check_required_files(&self.scripts_dir, REQUIRED_SCRIPT_FILES, "script")
    }

    fn check_required_files(
        &self,
        dir: &Path,
        required: &[&str],
        kind: &str,
    ) -> Result<(bool, String)> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| !dir.join(name).exists())
            .map(|name| dir.join(name).display().to_string())
            .collect();

        if missing.is_empty() {
            Ok((
                true,
                format!("All {} {} files present", required.len(), kind),
            ))
        } else {
            Ok((
                false,
                format!("Missing {} files: {}", kind, missing.join(", ")),
            ))
        }
    }

    /// Every `[text](references/...md)` link in SKILL.md points at an existing
    /// file under the skill root.
    fn check_skill_links(&self) -> Result<(bool, String)> {
        let content = fs::read_to_string(self.root.join("SKILL.md"))?;

        let broken: Vec<String> = SKILL_LINK_RE
            .captures_iter(&content)
            .map(|cap| cap[2].to_string())
            .filter(|target| !self.root.join(target).exists())
            .collect();

        if broken.is_empty() {
            Ok((true, "All references in SKILL.md are valid".to_string()))
        } else {
            Ok((
                false,
                format!("Broken references in SKILL.md: {}", broken.join(", ")),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_region_between_delimiters() {
        let content = "---\nname: archdoc\ndescription: a skill\n---\n\n# Body\nname: not me\n";
        let region = frontmatter_region(content).unwrap();
        assert!(region.contains("name: archdoc"));
        assert!(region.contains("description:"));
        assert!(!region.contains("Body"));
        assert!(!region.contains("not me"));
    }

    #[test]
    fn test_frontmatter_region_requires_leading_delimiter() {
        assert!(frontmatter_region("# Just a doc\n").is_none());
        assert!(frontmatter_region("").is_none());
    }

    #[test]
    fn test_frontmatter_region_unclosed_block() {
        // A single --- with no closing delimiter yields everything after it.
        let region = frontmatter_region("---\nname: x\n").unwrap();
        assert_eq!(region, "name: x");
    }

    #[test]
    fn test_link_regex_captures_reference_targets() {
        let content =
            "See [Pillars](references/well-architected-pillars.md) and [ext](https://example.com).";
        let targets: Vec<&str> = SKILL_LINK_RE
            .captures_iter(content)
            .map(|cap| cap.get(2).unwrap().as_str())
            .collect();
        assert_eq!(targets, vec!["references/well-architected-pillars.md"]);
    }
}
