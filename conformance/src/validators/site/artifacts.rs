//! Output file validator.
//!
//! Checks that every file the generator writes is present and that the chart
//! spec file holds one spec per chart, each targeting a known mount point.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use audit_dashboard::charts::ChartKind;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "site/artifacts";

/// Files the generator writes, relative to the output directory.
pub const EXPECTED_FILES: [&str; 6] = [
    "index.html",
    "chart-specs.json",
    "citations.json",
    "data/chart_data.json",
    "css/style.css",
    "js/dashboard.js",
];

/// Validates the output directory layout and `chart-specs.json`.
///
/// # Errors
///
/// Returns an error if `chart-specs.json` exists but cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let missing: Vec<String> = EXPECTED_FILES
        .iter()
        .filter(|file| !artifacts.join(file).is_file())
        .map(|file| format!("{file} not found"))
        .collect();
    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} output files present", EXPECTED_FILES.len()),
        "Output files missing",
        missing,
    ));

    let specs_path = artifacts.join("chart-specs.json");
    if !specs_path.is_file() {
        return Ok(report);
    }
    let text = std::fs::read_to_string(&specs_path)
        .with_context(|| format!("Failed to read {}", specs_path.display()))?;
    let specs: Vec<serde_json::Value> = match serde_json::from_str(&text) {
        Ok(specs) => specs,
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("chart-specs.json is not a JSON array: {e}"),
            ));
            return Ok(report);
        }
    };

    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("chart-specs.json holds {} well-formed chart specs", specs.len()),
        "chart-specs.json has malformed specs",
        check_specs(&specs),
    ));

    Ok(report)
}

fn check_specs(specs: &[serde_json::Value]) -> Vec<String> {
    let known: BTreeSet<&str> = ChartKind::ALL.iter().map(|k| k.mount().id()).collect();
    let mut issues = Vec::new();
    let mut mounts = BTreeSet::new();

    for (i, spec) in specs.iter().enumerate() {
        let mount = spec["mount"].as_str().unwrap_or_default();
        if !known.contains(mount) {
            issues.push(format!("spec {i}: unknown mount `{mount}`"));
        } else if !mounts.insert(mount) {
            issues.push(format!("spec {i}: second chart in `{mount}`"));
        }
        let labels = spec["labels"].as_array().map_or(0, Vec::len);
        for series in spec["series"].as_array().into_iter().flatten() {
            let values = series["values"].as_array().map_or(0, Vec::len);
            if values != labels {
                issues.push(format!(
                    "spec {i} ({mount}): {values} values for {labels} labels"
                ));
            }
        }
    }

    if specs.len() > ChartKind::ALL.len() {
        issues.push(format!(
            "{} specs for {} chart kinds",
            specs.len(),
            ChartKind::ALL.len()
        ));
    }
    issues
}
