//! Citation registry completeness validator.
//!
//! Every entry needs a title and non-empty content, every cross-reference
//! must resolve, and every affordance the page offers must name a registered
//! key. Entries the page never offers are reported as warnings.

use std::collections::HashSet;

use audit_dashboard::model::affordance_keys;
use audit_dataset::CitationRegistry;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "dataset/citations";

/// Validates the standard registry.
pub fn validate() -> ConformanceReport {
    validate_registry(CitationRegistry::standard())
}

/// Validates `registry` against the page affordances.
pub fn validate_registry(registry: &CitationRegistry) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut seen = HashSet::new();
    let mut content_issues = Vec::new();
    for entry in registry.entries() {
        if !seen.insert(entry.key) {
            content_issues.push(format!("{}: duplicate key", entry.key));
        }
        if entry.title.trim().is_empty() {
            content_issues.push(format!("{}: empty title", entry.key));
        }
        if entry.content.is_empty() {
            content_issues.push(format!("{}: no content", entry.key));
        }
        if entry.content.iter().any(|block| block.is_empty()) {
            content_issues.push(format!("{}: empty content block", entry.key));
        }
    }
    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} citation entries have a title and content", registry.len()),
        "Incomplete citation entries",
        content_issues,
    ));

    let dangling: Vec<String> = registry
        .entries()
        .iter()
        .flat_map(|entry| {
            entry
                .cross_references()
                .filter(move |key| registry.lookup(key).is_none())
                .map(move |key| format!("{} links to unknown `{}`", entry.key, key))
        })
        .collect();
    report.push(TestResult::from_issues(
        VALIDATOR,
        "All citation cross-references resolve",
        "Dangling citation cross-references",
        dangling,
    ));

    let offered: Vec<&str> = affordance_keys().collect();
    let unresolved: Vec<String> = match registry.verify_keys(offered.iter().copied()) {
        Ok(()) => Vec::new(),
        Err(e) => vec![e.to_string()],
    };
    report.push(TestResult::from_issues(
        VALIDATOR,
        format!("All {} page affordances resolve", offered.len()),
        "Page affordances name unregistered keys",
        unresolved,
    ));

    let unreachable: Vec<&str> = registry.keys().filter(|key| !offered.contains(key)).collect();
    if !unreachable.is_empty() {
        report.push(TestResult::warn(
            VALIDATOR,
            format!("Entries not offered on the page: {}", unreachable.join(", ")),
        ));
    }

    report
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use audit_dataset::citations::{Block, LinkTarget};
    use audit_dataset::CitationEntry;

    #[test]
    fn standard_registry_passes() {
        let report = validate();
        assert!(report.all_passed(), "{:#?}", report.results);
        assert!(report.results.iter().all(|r| r.severity == crate::Severity::Pass));
    }

    #[test]
    fn dangling_reference_fails() {
        let mut entries = CitationRegistry::standard().entries().to_vec();
        entries.push(CitationEntry {
            key: "orphan",
            title: "Orphan",
            content: &[Block::Link {
                label: "nowhere",
                target: LinkTarget::Citation("no-such-key"),
            }],
        });
        let report = validate_registry(&CitationRegistry::new(entries));
        assert_eq!(report.failure_count(), 1);
        assert!(report.results.iter().any(|r| r.message.contains("orphan")));
    }

    #[test]
    fn empty_registry_fails_affordances() {
        let report = validate_registry(&CitationRegistry::new(Vec::new()));
        assert!(report
            .failures()
            .any(|r| r.message == "Page affordances name unregistered keys"));
    }
}
