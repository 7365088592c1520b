use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

use crate::util::{slugify, today_compact, today_iso};

pub const WAF_REVIEW_TEMPLATE: &str = "WAF_REVIEW_REPORT_TEMPLATE.md";
pub const DECISION_MATRIX_TEMPLATE: &str = "ARCH_DECISION_MATRIX_TEMPLATE.md";
pub const ADR_TEMPLATE: &str = "ADR_TEMPLATE.md";

/// Literal placeholder substitution. Every occurrence of each token is
/// replaced verbatim; tokens with no supplied value are left as-is rather
/// than treated as an error.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (token, value) in values {
        out = out.replace(token, value);
    }
    out
}

/// Generates skeleton review documents from the skill's templates.
/// One file is written per requested artifact; a missing template skips that
/// artifact without failing the run.
pub struct SkeletonGenerator {
    assets_dir: PathBuf,
    output_dir: PathBuf,
}

impl SkeletonGenerator {
    pub fn new(assets_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Generate a Well-Architected Review Report skeleton.
    pub fn waf_review(&self, workload_name: &str) -> Result<Option<PathBuf>> {
        let Some(template) = self.load_template(WAF_REVIEW_TEMPLATE)? else {
            return Ok(None);
        };

        let skeleton = render(
            &template,
            &[
                ("{WORKLOAD_NAME}", workload_name),
                ("{YYYY-MM-DD}", &today_iso()),
            ],
        );

        let output_path = self.output_dir.join(format!(
            "waf-review-{}-{}.md",
            slugify(workload_name),
            today_compact()
        ));
        fs::write(&output_path, skeleton)?;
        Ok(Some(output_path))
    }

    /// Generate an Architecture Decision Matrix skeleton.
    pub fn decision_matrix(&self, decision_title: &str) -> Result<Option<PathBuf>> {
        let Some(template) = self.load_template(DECISION_MATRIX_TEMPLATE)? else {
            return Ok(None);
        };

        let skeleton = render(
            &template,
            &[
                ("{DECISION_TITLE}", decision_title),
                ("{YYYY-MM-DD}", &today_iso()),
            ],
        );

        let output_path = self.output_dir.join(format!(
            "decision-matrix-{}-{}.md",
            slugify(decision_title),
            today_compact()
        ));
        fs::write(&output_path, skeleton)?;
        Ok(Some(output_path))
    }

    /// Generate an Architecture Decision Record skeleton.
    /// The ADR number is zero-padded to two digits in both the body and the
    /// filename.
    pub fn adr(&self, decision_title: &str, adr_number: u32) -> Result<Option<PathBuf>> {
        let Some(template) = self.load_template(ADR_TEMPLATE)? else {
            return Ok(None);
        };

        let number = format!("{:02}", adr_number);
        let skeleton = render(
            &template,
            &[
                ("{TITLE}", decision_title),
                ("{YYYY-MM-DD}", &today_iso()),
                ("{NUMBER}", &number),
            ],
        );

        let output_path = self
            .output_dir
            .join(format!("ADR-{}-{}.md", number, slugify(decision_title)));
        fs::write(&output_path, skeleton)?;
        Ok(Some(output_path))
    }

    /// Read a template from the assets directory. A missing template is not an
    /// error: the caller skips that artifact and continues with the others.
    fn load_template(&self, name: &str) -> Result<Option<String>> {
        let path = self.assets_dir.join(name);
        if !path.exists() {
            warn!("Template not found: {}", path.display());
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }
}
