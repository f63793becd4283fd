//! Error types for dataset decoding, validation, and citation lookup.

use std::fmt;

use thiserror::Error;

/// A single broken invariant, tagged with the section it was found in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dataset section name (`"trend"`, `"wongok"`, ...).
    pub section: &'static str,
    /// What is wrong.
    pub detail: String,
}

impl Violation {
    /// Creates a violation for `section`.
    pub fn new(section: &'static str, detail: impl Into<String>) -> Self {
        Self {
            section,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.section, self.detail)
    }
}

/// Failure to decode or accept a dataset document.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The document is not JSON, or a section has the wrong shape.
    #[error("malformed dataset document: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The document decoded but breaks one or more invariants.
    #[error("dataset breaks {} invariant(s): {}", .0.len(), join(.0))]
    Invalid(Vec<Violation>),
}

/// Failure to resolve a citation key against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitationError {
    /// No entry is registered under the key.
    #[error("unknown citation key `{0}`")]
    UnknownKey(String),
    /// Several keys referenced by the render surface have no entry.
    #[error("unresolved citation keys: {}", .0.join(", "))]
    Unresolved(Vec<String>),
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
