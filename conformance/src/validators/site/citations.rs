//! Citation affordance validator.
//!
//! Every `data-citation` key on a generated page, and inside the rendered
//! citation bodies in `citations.json`, must name a registered entry.
//! `citations.json` must hold exactly the registry's keys.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use audit_dataset::CitationRegistry;
use regex::Regex;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "site/citations";

/// Validates citation affordances against the standard registry.
///
/// # Errors
///
/// Returns an error if `citations.json` exists but cannot be read.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    validate_with(artifacts, CitationRegistry::standard())
}

/// Validates citation affordances against `registry`.
///
/// # Errors
///
/// Returns an error if `citations.json` exists but cannot be read.
pub fn validate_with(artifacts: &Path, registry: &CitationRegistry) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let pattern = Regex::new(r#"data-citation=\\?"([^"\\]*)\\?""#)?;

    let mut unresolved: Vec<String> = Vec::new();
    let mut affordances = 0usize;
    for entry in WalkDir::new(artifacts)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|x| x == "html").unwrap_or(false))
    {
        let Ok(content) = std::fs::read_to_string(entry.path()) else {
            continue;
        };
        let rel_path = entry
            .path()
            .strip_prefix(artifacts)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        for key in extract_keys(&pattern, &content) {
            affordances += 1;
            if registry.lookup(&key).is_none() {
                unresolved.push(format!("{rel_path}: data-citation=\"{key}\" is not registered"));
            }
        }
    }
    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {affordances} page citation affordances resolve"),
        "Unregistered citation affordances on generated pages",
        unresolved,
    ));

    let index_path = artifacts.join("citations.json");
    if !index_path.exists() {
        report.push(TestResult::fail(VALIDATOR, "citations.json not found"));
        return Ok(report);
    }
    let text = std::fs::read_to_string(&index_path)
        .with_context(|| format!("Failed to read {}", index_path.display()))?;
    let index: serde_json::Map<String, serde_json::Value> = match serde_json::from_str(&text) {
        Ok(index) => index,
        Err(e) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("citations.json is not a JSON object: {e}"),
            ));
            return Ok(report);
        }
    };

    let written: BTreeSet<&str> = index.keys().map(String::as_str).collect();
    let registered: BTreeSet<&str> = registry.keys().collect();
    let mut index_issues: Vec<String> = registered
        .difference(&written)
        .map(|key| format!("missing entry `{key}`"))
        .chain(written.difference(&registered).map(|key| format!("unexpected entry `{key}`")))
        .collect();
    for (key, value) in &index {
        let html = value["html"].as_str().unwrap_or_default();
        if html.trim().is_empty() {
            index_issues.push(format!("`{key}` has no content"));
        }
        for target in extract_keys(&pattern, html) {
            if registry.lookup(&target).is_none() {
                index_issues.push(format!("`{key}` links to unknown `{target}`"));
            }
        }
    }
    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("citations.json holds all {} registry entries", registry.len()),
        "citations.json does not match the registry",
        index_issues,
    ));

    Ok(report)
}

fn extract_keys(pattern: &Regex, content: &str) -> Vec<String> {
    pattern
        .captures_iter(content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn extracts_plain_and_json_escaped_attributes() {
        let pattern = Regex::new(r#"data-citation=\\?"([^"\\]*)\\?""#).expect("compile pattern");
        assert_eq!(
            extract_keys(&pattern, r#"<a data-citation="moj-stats">"#),
            vec!["moj-stats"]
        );
        assert_eq!(
            extract_keys(&pattern, r#"{"html":"<a data-citation=\"ngo-estimation\">"}"#),
            vec!["ngo-estimation"]
        );
    }

    #[test]
    fn unknown_affordance_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(
            dir.path().join("index.html"),
            r#"<button data-citation="ghost-source">x</button>"#,
        ).expect("write test file");
        let report = validate(dir.path()).expect("run validator");
        assert!(report
            .failures()
            .any(|r| r.details.iter().any(|d| d.contains("ghost-source"))));
    }
}
