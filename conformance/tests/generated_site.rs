//! Generates a dashboard into a temporary directory and runs the full suite on it.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use audit_conformance::run_all;
use audit_dashboard::{generate, DashboardConfig, DatasetSource};

#[tokio::test]
async fn generated_dashboard_conforms() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = DashboardConfig {
        source: DatasetSource::Embedded,
        out_dir: dir.path().to_path_buf(),
        ..DashboardConfig::default()
    };
    assert!(generate(&config).await.is_ok());

    let report = run_all(dir.path()).expect("run conformance suite");
    let failures: Vec<_> = report.failures().collect();
    assert!(failures.is_empty(), "Conformance failures: {:#?}", failures);
    assert!(report.summary().passed > 10);
}

#[tokio::test]
async fn error_page_does_not_conform() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let mut dataset = audit_dataset::Dataset::fallback().clone();
    dataset.support.estimated_unregistered_max = 0;
    let data_path = dir.path().join("chart_data.json");
    std::fs::write(
        &data_path,
        audit_dataset::json::to_json(&dataset).expect("serialize dataset"),
    ).expect("write test file");

    let out = dir.path().join("public");
    let config = DashboardConfig {
        source: DatasetSource::Path(data_path),
        out_dir: out.clone(),
        ..DashboardConfig::default()
    };
    assert!(generate(&config).await.is_err());

    let report = run_all(&out).expect("run conformance suite");
    assert!(!report.all_passed());
}
