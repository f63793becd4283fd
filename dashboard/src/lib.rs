//! Ansan childcare audit dashboard generator.
//!
//! Loads the dataset (falling back to the embedded copy), validates it, builds
//! every chart spec and card, and writes a self-contained static dashboard.
//! The client script only draws the precomputed specs and toggles the source
//! modal; all data shaping happens here.
//!
//! # Entry Point
//!
//! ```no_run
//! use audit_dashboard::{generate, DashboardConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = DashboardConfig::default();
//! let outcome = generate(&config).await?;
//! println!("{} charts drawn", outcome.surface.charts().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Output Structure
//!
//! ```text
//! public/
//!   index.html
//!   chart-specs.json
//!   citations.json
//!   data/chart_data.json
//!   css/style.css
//!   js/dashboard.js
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assets;
pub mod cards;
pub mod charts;
pub mod citation;
pub mod config;
pub mod error;
pub mod model;
pub mod orchestrator;
pub mod provider;
pub mod renderer;
pub mod surface;
pub mod writer;

use std::path::Path;

use anyhow::{Context, Result};
use audit_dataset::{json, CitationRegistry};
use tracing::{error, info};

pub use config::{DashboardConfig, DatasetSource};
pub use error::PipelineError;
pub use orchestrator::{Orchestrator, RenderOutcome};
pub use provider::{DatasetOrigin, DatasetProvider, LoadedDataset};
pub use surface::{MountPoint, PageSurface, RenderStatus, RenderSurface};

/// Files that only exist for a rendered dashboard, relative to the output
/// directory. They are removed when the error notice is written.
pub const DASHBOARD_FILES: [&str; 4] = [
    "chart-specs.json",
    "citations.json",
    "data/chart_data.json",
    "js/dashboard.js",
];

/// Runs the pipeline for `config` and writes the site to `config.out_dir`.
///
/// When the pipeline fails, an error notice page is written as `index.html`,
/// dashboard files left by an earlier run are removed, and the failure is
/// returned.
///
/// # Errors
///
/// Returns an error if the dataset is invalid, a citation affordance is
/// unresolved, or any output file cannot be written.
pub async fn generate(config: &DashboardConfig) -> Result<RenderOutcome> {
    let registry = CitationRegistry::standard();
    let provider = DatasetProvider::new(config.source.clone());
    let orchestrator = Orchestrator::new(registry, config.subject_region.as_str());
    let surface = PageSurface::without(&config.omit);

    match orchestrator.run(&provider, surface).await {
        Ok(outcome) => {
            write_site(&config.out_dir, &outcome, registry)?;
            info!(out_dir = %config.out_dir.display(), "site written");
            Ok(outcome)
        }
        Err(err) => {
            error!(error = %err, "dashboard not rendered");
            write_error_site(&config.out_dir, &err)?;
            Err(err.into())
        }
    }
}

/// Writes every output file for a rendered dashboard into `out_dir`.
///
/// # Errors
///
/// Returns an error if serialization fails or any file cannot be written.
pub fn write_site(out_dir: &Path, outcome: &RenderOutcome, registry: &CitationRegistry) -> Result<()> {
    let charts = outcome.surface.charts();
    let chart_specs_json =
        serde_json::to_string(charts).context("Failed to serialize chart specs")?;
    let citations_json = citation::citation_index_json(registry)?;

    let html = renderer::render_dashboard(&renderer::PageContext {
        dataset: &outcome.dataset,
        origin: &outcome.origin,
        surface: &outcome.surface,
        registry,
        chart_specs_json: &chart_specs_json,
        citations_json: &citations_json,
    });
    writer::write(&out_dir.join("index.html"), &html)?;

    writer::write_json(&out_dir.join("chart-specs.json"), charts)?;
    writer::write(&out_dir.join("citations.json"), &citations_json)?;

    let dataset_json = json::to_json(&outcome.dataset).context("Failed to serialize dataset")?;
    writer::write(&out_dir.join("data").join("chart_data.json"), &dataset_json)?;

    writer::write(&out_dir.join("css").join("style.css"), assets::style_css())?;
    writer::write(&out_dir.join("js").join("dashboard.js"), assets::dashboard_js())?;
    Ok(())
}

/// Writes the error notice page and removes every file of a previous
/// dashboard from `out_dir`.
///
/// # Errors
///
/// Returns an error if a file cannot be written or removed.
pub fn write_error_site(out_dir: &Path, err: &PipelineError) -> Result<()> {
    for file in DASHBOARD_FILES {
        writer::remove(&out_dir.join(file))?;
    }
    let page = renderer::render_error_page(&err.to_string(), &err.details());
    writer::write(&out_dir.join("index.html"), &page)?;
    writer::write(&out_dir.join("css").join("style.css"), assets::style_css())?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn chart_specs_serialize_with_mount_ids() {
        let outcome = Orchestrator::new(CitationRegistry::standard(), audit_dataset::SUBJECT_REGION)
            .render(
                LoadedDataset {
                    dataset: audit_dataset::Dataset::fallback().clone(),
                    origin: DatasetOrigin::Embedded,
                },
                PageSurface::full(),
            );
        let outcome = outcome.expect("embedded dataset renders");
        let json = serde_json::to_string(outcome.surface.charts()).expect("serialize to JSON");
        for id in ["trend-chart", "comparison-chart", "support-chart", "wongok-chart", "budget-chart"] {
            assert!(json.contains(&format!("\"mount\":\"{id}\"")), "{id} missing");
        }
    }
}
