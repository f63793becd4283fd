//! Dataset export: `chart_data.json` plus a `metadata.json` manifest.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use audit_dashboard::model::SECTIONS;
use audit_dataset::{json, CitationRegistry, Dataset};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

/// Manifest written next to the exported dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    /// Dashboard title, from the dataset metadata when present.
    pub title: String,
    /// RFC 3339 export time.
    pub generated_at: String,
    /// Section ids in page order.
    pub sections: Vec<&'static str>,
    /// Number of registered citation keys.
    pub citation_keys: usize,
}

impl ExportMetadata {
    /// Describes `dataset` as exported now.
    #[must_use]
    pub fn describe(dataset: &Dataset, registry: &CitationRegistry) -> Self {
        let title = dataset
            .metadata
            .as_ref()
            .map(|m| m.title.clone())
            .unwrap_or_else(|| audit_dashboard::renderer::DEFAULT_TITLE.to_string());
        Self {
            title,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            sections: SECTIONS.iter().map(|s| s.id).collect(),
            citation_keys: registry.len(),
        }
    }
}

/// Writes `chart_data.json` and `metadata.json` into `out_dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, serialization fails,
/// or either file cannot be written.
pub fn export(dataset: &Dataset, registry: &CitationRegistry, out_dir: &Path) -> Result<ExportMetadata> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Cannot create directory: {}", out_dir.display()))?;

    let data_path = out_dir.join("chart_data.json");
    let data = json::to_json(dataset).context("Failed to serialize dataset")?;
    fs::write(&data_path, data)
        .with_context(|| format!("Cannot write file: {}", data_path.display()))?;

    let metadata = ExportMetadata::describe(dataset, registry);
    let meta_path = out_dir.join("metadata.json");
    let meta = serde_json::to_string_pretty(&metadata).context("Failed to serialize metadata")?;
    fs::write(&meta_path, meta)
        .with_context(|| format!("Cannot write file: {}", meta_path.display()))?;

    info!(out_dir = %out_dir.display(), sections = metadata.sections.len(), "dataset exported");
    Ok(metadata)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_both_files() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = export(Dataset::fallback(), CitationRegistry::standard(), dir.path());
        assert!(matches!(result, Ok(ref m) if m.sections.len() == 7 && m.citation_keys == 16));

        let data = fs::read_to_string(dir.path().join("chart_data.json")).expect("read output file");
        assert!(data.contains("안산시"));
        assert!(matches!(json::from_json_validated(&data), Ok(ref d) if d == Dataset::fallback()));

        let meta: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(dir.path().join("metadata.json")).expect("read output file"),
        )
        .expect("parse metadata");
        assert_eq!(meta["sections"][0], "trend");
        assert!(meta["generated_at"].as_str().is_some_and(|t| t.ends_with('Z')));
    }
}
