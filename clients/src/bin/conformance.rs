//! `audit-conformance` — Validates a generated dashboard.
//!
//! Runs the complete conformance suite across:
//! - Dataset invariants (embedded copy and `data/chart_data.json`)
//! - Citation registry completeness
//! - Generated files, HTML structure, CSS, and citation links
//!
//! **Usage:**
//! ```text
//! audit-conformance [--artifacts <path>] [--json]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use audit_clients::init_logging;
use audit_conformance::run_all;
use clap::Parser;

/// Run the dashboard conformance suite.
#[derive(Parser)]
#[command(
    name = "audit-conformance",
    about = "Validate the generated audit dashboard"
)]
struct Args {
    /// Path to the generated dashboard directory (default: public/).
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(false);

    let report = run_all(&args.artifacts)?;
    let summary = report.summary();

    if args.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{json}");
    } else {
        println!("Ansan Childcare Audit Conformance Report");
        println!("========================================");
        println!();

        for result in &report.results {
            println!("[{}] {} — {}", result.severity.tag(), result.validator, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }

        println!();
        println!("Summary: {summary}");
    }

    if summary.failed > 0 {
        eprintln!("Conformance FAILED: {} check(s) did not pass.", summary.failed);
        process::exit(1);
    }

    if !args.json {
        println!("Conformance PASSED.");
    }
    Ok(())
}
