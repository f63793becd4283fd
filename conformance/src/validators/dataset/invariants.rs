//! Dataset invariant validator.
//!
//! Checks the embedded dataset and the `data/chart_data.json` written next to
//! the dashboard against every dataset invariant.

use std::path::Path;

use anyhow::{Context, Result};
use audit_dataset::{json, Dataset, DatasetError};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "dataset/invariants";

/// Validates the embedded dataset.
pub fn validate_embedded() -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let violations: Vec<String> = Dataset::fallback()
        .violations()
        .iter()
        .map(ToString::to_string)
        .collect();
    report.push(TestResult::from_issues(
        VALIDATOR,
        "Embedded dataset satisfies every invariant",
        "Embedded dataset breaks invariants",
        violations,
    ));
    report
}

/// Validates `data/chart_data.json` under `artifacts`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let path = artifacts.join("data").join("chart_data.json");
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            "data/chart_data.json not found",
        ));
        return Ok(report);
    }

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match json::from_json_validated(&text) {
        Ok(dataset) => report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "data/chart_data.json is valid ({} trend points, {} regions, {} events)",
                dataset.trend.len(),
                dataset.comparison.len(),
                dataset.timeline.len()
            ),
        )),
        Err(DatasetError::Malformed(e)) => report.push(TestResult::fail(
            VALIDATOR,
            format!("data/chart_data.json is malformed: {e}"),
        )),
        Err(DatasetError::Invalid(violations)) => report.push(TestResult::fail_with_details(
            VALIDATOR,
            "data/chart_data.json breaks invariants",
            violations.iter().map(ToString::to_string).collect(),
        )),
    }

    Ok(report)
}
