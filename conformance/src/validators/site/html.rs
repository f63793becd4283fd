//! HTML structure validator for the generated dashboard.
//!
//! Checks every `.html` file under the output directory:
//! - `<title>`, `<main>`, and `<footer>` elements present
//! - `lang` attribute on the `<html>` element
//! - element ids unique within the page
//!
//! `index.html` must additionally expose every mount point id.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use audit_dashboard::MountPoint;
use regex::Regex;
use walkdir::WalkDir;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "site/html";

/// Validates HTML structure of all dashboard pages.
///
/// # Errors
///
/// Returns an error if the id pattern fails to compile.
pub fn validate(artifacts: &Path) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    if !artifacts.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            "Output directory not found",
        ));
        return Ok(report);
    }

    let id_pattern = Regex::new(r#"\sid="([^"]+)""#)?;
    let mut issues: Vec<String> = Vec::new();
    let mut pages_checked = 0u32;

    for entry in WalkDir::new(artifacts)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map(|x| x == "html").unwrap_or(false))
    {
        let path = entry.path();
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                issues.push(format!("Cannot read {}: {}", path.display(), e));
                continue;
            }
        };

        let rel_path = path
            .strip_prefix(artifacts)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/");

        issues.extend(check_html_structure(&rel_path, &content));
        let ids = collect_ids(&id_pattern, &rel_path, &content, &mut issues);
        if rel_path == "index.html" {
            for mount in MountPoint::ALL {
                if !ids.contains(mount.id()) {
                    issues.push(format!("{rel_path}: missing mount point #{}", mount.id()));
                }
            }
        }
        pages_checked += 1;
    }

    if pages_checked == 0 {
        report.push(TestResult::fail(
            VALIDATOR,
            "No HTML files found in output directory",
        ));
        return Ok(report);
    }

    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} HTML pages pass structural validation", pages_checked),
        format!("HTML structure issues across {} pages checked", pages_checked),
        issues,
    ));
    Ok(report)
}

/// Checks a single HTML file for structural issues using string-based heuristics.
fn check_html_structure(path: &str, content: &str) -> Vec<String> {
    let lower = content.to_lowercase();
    let mut issues = Vec::new();

    for element in ["<title", "<main", "<footer"] {
        if !lower.contains(element) {
            issues.push(format!("{path}: missing {element}> element"));
        }
    }

    if !lower.contains("<html lang=") {
        issues.push(format!("{path}: <html> missing lang attribute"));
    }

    issues
}

/// Returns the element ids on the page, recording duplicates as issues.
fn collect_ids<'c>(
    pattern: &Regex,
    path: &str,
    content: &'c str,
    issues: &mut Vec<String>,
) -> HashSet<&'c str> {
    let mut ids = HashSet::new();
    for capture in pattern.captures_iter(content) {
        if let Some(id) = capture.get(1) {
            if !ids.insert(id.as_str()) {
                issues.push(format!("{path}: duplicate id #{}", id.as_str()));
            }
        }
    }
    ids
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn structure_check_reports_missing_elements() {
        let issues = check_html_structure("x.html", "<html><body></body></html>");
        assert_eq!(issues.len(), 4);
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let pattern = Regex::new(r#"\sid="([^"]+)""#).expect("compile pattern");
        let mut issues = Vec::new();
        let ids = collect_ids(
            &pattern,
            "x.html",
            r#"<div id="a"></div><div id="b"></div><p id="a"></p>"#,
            &mut issues,
        );
        assert_eq!(ids.len(), 2);
        assert_eq!(issues, vec!["x.html: duplicate id #a"]);
    }

    #[test]
    fn missing_directory_fails() {
        let report = validate(Path::new("/nonexistent/public")).expect("run validator");
        assert!(!report.all_passed());
    }
}
