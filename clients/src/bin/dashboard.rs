//! `audit-dashboard` — Generates the Ansan childcare audit dashboard.
//!
//! **Outputs (`public/`):**
//! - `index.html` — Dashboard page, or the error notice if the dataset is invalid
//! - `chart-specs.json` — Every rendered chart spec
//! - `citations.json` — Citation key → rendered source text
//! - `data/chart_data.json` — The dataset actually rendered
//! - `css/style.css`, `js/dashboard.js` — Page assets
//!
//! **Usage:**
//! ```text
//! audit-dashboard [--config <toml>] [--data <path|url|embedded>] [--out <dir>] [--subject <region>] [--log-json]
//! ```
//!
//! Command-line flags override values from the config file. Exits non-zero if
//! the dashboard could not be rendered.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use audit_clients::init_logging;
use audit_dashboard::{generate, DashboardConfig, DatasetSource};
use clap::Parser;

/// Generate the Ansan childcare audit dashboard.
#[derive(Parser)]
#[command(
    name = "audit-dashboard",
    about = "Generate the Ansan childcare audit dashboard"
)]
struct Args {
    /// TOML config file with `source`, `out_dir`, `subject_region`, `omit`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset location: a file path, an http(s) URL, or `embedded`.
    #[arg(long)]
    data: Option<DatasetSource>,

    /// Output directory for the generated dashboard.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Region highlighted in the comparison chart.
    #[arg(long)]
    subject: Option<String>,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

impl Args {
    fn into_config(self) -> Result<DashboardConfig> {
        let mut config = match &self.config {
            Some(path) => DashboardConfig::load(path)?,
            None => DashboardConfig::default(),
        };
        if let Some(source) = self.data {
            config.source = source;
        }
        if let Some(out) = self.out {
            config.out_dir = out;
        }
        if let Some(subject) = self.subject {
            config.subject_region = subject;
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);
    let config = args.into_config()?;

    match generate(&config).await {
        Ok(outcome) => {
            println!("Dashboard generated successfully.");
            println!("  Output: {}", config.out_dir.display());
            println!("  Dataset: {}", outcome.origin);
            println!("  Charts: {}", outcome.surface.charts().len());
            Ok(())
        }
        Err(err) => {
            eprintln!("Dashboard FAILED: {err:#}");
            eprintln!("  Error notice written to {}", config.out_dir.join("index.html").display());
            process::exit(1);
        }
    }
}
