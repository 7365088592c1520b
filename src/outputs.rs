use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::CheckOutcome;

/// Declared shape of one workflow artifact: which field keywords its file must
/// contain and which filename pattern identifies it.
pub struct ArtifactSpec {
    pub name: &'static str,
    pub required_fields: &'static [&'static str],
    pub filename_pattern: &'static str,
}

/// Every artifact a complete skill run is expected to produce.
pub const OUTPUT_ARTIFACTS: &[ArtifactSpec] = &[
    ArtifactSpec {
        name: "discovery",
        required_fields: &[
            "business_context",
            "technical_requirements",
            "constraints",
            "success_metrics",
        ],
        filename_pattern: "discovery-output-*.md",
    },
    ArtifactSpec {
        name: "architecture",
        required_fields: &[
            "components",
            "data_flow",
            "service_selections",
            "well_architected_review",
        ],
        filename_pattern: "architecture-rec-*.md",
    },
    ArtifactSpec {
        name: "waf_review",
        required_fields: &[
            "operational_excellence",
            "security",
            "reliability",
            "performance_efficiency",
            "cost_optimization",
            "sustainability",
        ],
        filename_pattern: "waf-review-*.md",
    },
    ArtifactSpec {
        name: "decision_matrix",
        required_fields: &[
            "options_evaluated",
            "criteria_weights",
            "scores",
            "recommendation",
        ],
        filename_pattern: "decision-matrix-*.md",
    },
    ArtifactSpec {
        name: "migration_plan",
        required_fields: &[
            "current_state",
            "migration_strategy",
            "phase_roadmap",
            "rollback_procedures",
        ],
        filename_pattern: "migration-plan-*.md",
    },
];

/// Check one artifact file: every required field name must appear as a
/// case-insensitive substring anywhere in the text. Values are not parsed.
pub fn validate_artifact_file(path: &Path, spec: &ArtifactSpec) -> Result<(bool, String)> {
    let content = fs::read_to_string(path)?.to_lowercase();

    let missing: Vec<&str> = spec
        .required_fields
        .iter()
        .filter(|field| !content.contains(&field.to_lowercase()))
        .copied()
        .collect();

    if missing.is_empty() {
        Ok((true, format!("Valid {} output", spec.name)))
    } else {
        Ok((
            false,
            format!("Missing required fields: {}", missing.join(", ")),
        ))
    }
}

/// Validates the artifacts a workflow run left in the output directory.
/// Artifact types are independent: a missing file for one type does not block
/// validation of the others.
pub struct OutputValidator {
    output_dir: PathBuf,
}

impl OutputValidator {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn run_all(&self) -> Vec<CheckOutcome> {
        let mut outcomes = Vec::new();

        for spec in OUTPUT_ARTIFACTS {
            let files = self.matching_files(spec);

            if files.is_empty() {
                outcomes.push(CheckOutcome::fail(
                    spec.name,
                    format!("No output file found matching {}", spec.filename_pattern),
                ));
                continue;
            }

            for file in files {
                let name = file
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file.display().to_string());
                outcomes.push(CheckOutcome::from_result(
                    &name,
                    validate_artifact_file(&file, spec),
                ));
            }
        }

        outcomes
    }

    fn matching_files(&self, spec: &ArtifactSpec) -> Vec<PathBuf> {
        let pattern = self.output_dir.join(spec.filename_pattern);
        let Some(pattern) = pattern.to_str() else {
            return Vec::new();
        };
        match glob::glob(pattern) {
            Ok(paths) => {
                let mut files: Vec<PathBuf> = paths.filter_map(|p| p.ok()).collect();
                files.sort();
                files
            }
            Err(_) => Vec::new(),
        }
    }
}
