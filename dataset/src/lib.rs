//! Ansan childcare audit dataset encoded as typed Rust data.
//!
//! The `audit-dataset` crate provides the dashboard's single structured
//! document. Its seven sections cover the foreign population trend, regional
//! comparison, subsidy coverage, perception gaps, the Wongok-dong zone, the
//! budget, and the policy timeline. Alongside it live an embedded fallback
//! copy, invariant validation, a JSON codec, and the source citation registry.
//!
//! # Entry Point
//!
//! ```
//! let dataset = audit_dataset::Dataset::fallback();
//! assert_eq!(dataset.comparison.len(), 6);
//! assert!(dataset.validate().is_ok());
//! ```
//!
//! # Citations
//!
//! ```
//! use audit_dataset::citations::{keys, CitationRegistry};
//!
//! let registry = CitationRegistry::standard();
//! let entry = registry.resolve(keys::POLICY_DOCUMENT).expect("registered");
//! assert_eq!(entry.title, "안산시 정책 문서");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod citations;
pub mod error;
mod fallback;
pub mod json;
pub mod model;
pub mod validate;

pub use citations::{CitationEntry, CitationRegistry};
pub use error::{CitationError, DatasetError, Violation};
pub use model::{
    BudgetAnalysis, DataSource, Dataset, EventDate, EventKind, GapSeverity, Metadata,
    PerceptionGap, RegionComparison, SupportStatus, TimelineEvent, TrendPoint, WongokZone,
};

/// Name of the subject municipality in the embedded dataset.
pub const SUBJECT_REGION: &str = "안산시";

impl Dataset {
    /// Returns the embedded dataset used when retrieval fails.
    ///
    /// The copy satisfies every invariant checked by [`Dataset::validate`].
    #[must_use]
    pub fn fallback() -> &'static Dataset {
        static FALLBACK: std::sync::OnceLock<Dataset> = std::sync::OnceLock::new();
        FALLBACK.get_or_init(fallback::dataset)
    }
}
