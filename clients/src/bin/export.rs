//! `audit-export` — Writes the embedded dataset and its manifest.
//!
//! **Outputs (`data/`):**
//! - `chart_data.json` — Embedded dataset, pretty-printed
//! - `metadata.json` — Export time, section ids, citation key count
//!
//! **Usage:**
//! ```text
//! audit-export [--out <dir>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use anyhow::Result;
use audit_clients::{export::export, init_logging};
use audit_dataset::{CitationRegistry, Dataset};
use clap::Parser;

/// Export the embedded audit dataset.
#[derive(Parser)]
#[command(name = "audit-export", about = "Export the embedded audit dataset")]
struct Args {
    /// Output directory for the exported files.
    #[arg(long, default_value = "data")]
    out: PathBuf,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_json);

    let metadata = export(Dataset::fallback(), CitationRegistry::standard(), &args.out)?;

    println!("Dataset exported successfully.");
    println!("  Output: {}", args.out.display());
    println!("  Generated at: {}", metadata.generated_at);
    Ok(())
}
