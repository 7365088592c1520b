//! Shared helpers for slugs and dated filenames

use chrono::Local;

/// Turn a document parameter into its filename slug.
/// Lowercases and replaces spaces with hyphens; everything else passes through
/// verbatim so "Payments API" and "payments-api" produce the same slug.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Today's date as it appears inside generated documents (YYYY-MM-DD).
pub fn today_iso() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}

/// Today's date as it appears in generated filenames (YYYYMMDD).
pub fn today_compact() -> String {
    Local::now().format("%Y%m%d").to_string()
}
