//! Pipeline failures.

use audit_dataset::{CitationError, DatasetError};
use thiserror::Error;

use crate::provider::DatasetOrigin;

/// A failure that stops the dashboard from rendering.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The loaded dataset breaks one or more invariants.
    #[error("invalid dataset from {origin}: {source}")]
    InvalidDataset {
        /// Where the dataset came from.
        origin: DatasetOrigin,
        /// Every violation found.
        source: DatasetError,
    },
    /// A citation affordance on the page names an unregistered key.
    #[error(transparent)]
    UnresolvedCitations(#[from] CitationError),
}

impl PipelineError {
    /// Returns one line per problem, for the error notice page.
    #[must_use]
    pub fn details(&self) -> Vec<String> {
        match self {
            PipelineError::InvalidDataset {
                source: DatasetError::Invalid(violations),
                ..
            } => violations.iter().map(ToString::to_string).collect(),
            PipelineError::UnresolvedCitations(CitationError::Unresolved(keys)) => keys
                .iter()
                .map(|key| format!("unregistered citation key `{key}`"))
                .collect(),
            other => vec![other.to_string()],
        }
    }
}
