use anyhow::Result;
use serde::Serialize;
use std::str::FromStr;

/// Result of one independent validation check.
/// Failures accumulate; a failed check never stops the remaining checks.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    pub name: String,
    pub passed: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            message: message.into(),
        }
    }

    /// Fold a check's own error into a failed outcome so one unreadable file
    /// cannot abort the rest of the run.
    pub fn from_result(name: &str, result: Result<(bool, String)>) -> Self {
        match result {
            Ok((true, message)) => Self::pass(name, message),
            Ok((false, message)) => Self::fail(name, message),
            Err(err) => Self::fail(name, format!("check error: {}", err)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            _ => Err(()),
        }
    }
}

/// Print one PASS/FAIL line per outcome plus an aggregate summary.
pub fn print_outcomes(outcomes: &[CheckOutcome], format: Format) -> Result<()> {
    match format {
        Format::Text => {
            for outcome in outcomes {
                let status = if outcome.passed { "PASS" } else { "FAIL" };
                println!("{}: {} - {}", status, outcome.name, outcome.message);
            }
            println!();
            if all_passed(outcomes) {
                println!("All validations passed!");
            } else {
                println!("Some validations failed");
            }
        }
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(outcomes)?);
        }
    }
    Ok(())
}

pub fn all_passed(outcomes: &[CheckOutcome]) -> bool {
    outcomes.iter().all(|o| o.passed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(Format::from_str("text").unwrap(), Format::Text);
        assert_eq!(Format::from_str("JSON").unwrap(), Format::Json);
        assert_eq!(Format::from_str(" json ").unwrap(), Format::Json);
        assert!(Format::from_str("yaml").is_err());
    }

    #[test]
    fn test_from_result_folds_errors_into_failures() {
        let outcome =
            CheckOutcome::from_result("broken", Err(anyhow::anyhow!("permission denied")));
        assert!(!outcome.passed);
        assert!(outcome.message.contains("permission denied"));
    }

    #[test]
    fn test_all_passed() {
        let outcomes = vec![
            CheckOutcome::pass("a", "ok"),
            CheckOutcome::fail("b", "missing"),
        ];
        assert!(!all_passed(&outcomes));
        assert!(all_passed(&outcomes[..1]));
        assert!(all_passed(&[]));
    }

    #[test]
    fn test_outcomes_serialize_to_json() {
        let outcomes = vec![CheckOutcome::pass("SKILL.md structure", "SKILL.md valid")];
        let json = serde_json::to_string(&outcomes).unwrap();
        assert!(json.contains("\"passed\":true"));
        assert!(json.contains("SKILL.md structure"));
    }
}
