//! Ansan childcare audit conformance suite.
//!
//! Validates the embedded dataset, the citation registry, and a generated
//! dashboard directory. Each validator returns a [`ConformanceReport`]; the
//! runner concatenates them.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Dataset | Every dataset invariant, embedded copy and written copy |
//! | Citation registry | Complete entries, resolvable cross-references, every affordance registered |
//! | HTML | `lang`, `<title>`, landmarks, unique ids, every mount point present |
//! | CSS | Tokenizes cleanly, responsive breakpoints, modal open state |
//! | Citation links | `citations.json` matches the registry, every embedded link resolves |
//! | Output files | All files present, one well-formed spec per chart |
//!
//! # Entry Point
//!
//! ```no_run
//! use audit_conformance::run_all;
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let report = run_all(Path::new("public"))?;
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::Path;

use tracing::info;

pub use report::{ConformanceReport, Severity, Summary, TestResult};

/// Runs all conformance validators against the dashboard in `artifacts`.
///
/// Validators are run in this order:
/// 1. Embedded dataset invariants
/// 2. Written dataset invariants
/// 3. Citation registry
/// 4. Output files and chart specs
/// 5. HTML structure
/// 6. CSS
/// 7. Citation links in the generated pages
///
/// # Errors
///
/// Returns an error only if a file system operation fails.
pub fn run_all(artifacts: &Path) -> anyhow::Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    // 1-2. Dataset
    report.extend(validators::dataset::invariants::validate_embedded());
    report.extend(validators::dataset::invariants::validate(artifacts)?);

    // 3. Registry
    report.extend(validators::dataset::citations::validate());

    // 4-7. Generated site
    report.extend(validators::site::artifacts::validate(artifacts)?);
    report.extend(validators::site::html::validate(artifacts)?);
    report.extend(validators::site::css::validate(artifacts)?);
    report.extend(validators::site::citations::validate(artifacts)?);

    info!(artifacts = %artifacts.display(), summary = %report.summary(), "conformance run complete");
    Ok(report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests_unit {
    use super::*;

    #[test]
    fn embedded_dataset_passes() {
        let report = validators::dataset::invariants::validate_embedded();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "Dataset failures: {:#?}", failures);
    }

    #[test]
    fn standard_registry_passes() {
        let report = validators::dataset::citations::validate();
        let failures: Vec<_> = report.failures().collect();
        assert!(failures.is_empty(), "Registry failures: {:#?}", failures);
    }

    #[test]
    fn empty_directory_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let report = run_all(dir.path()).expect("run conformance suite");
        assert!(!report.all_passed());
    }
}
