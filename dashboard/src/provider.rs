//! Dataset retrieval with fallback.
//!
//! [`DatasetProvider::load`] never fails: any I/O, transport, status, or
//! decoding problem yields the embedded dataset, tagged with the reason.
//! Invariants are not checked here.

use std::fmt;
use std::path::PathBuf;

use audit_dataset::{json, Dataset, DatasetError};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::DatasetSource;

/// Why retrieval did not produce a dataset.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// The request failed before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server answered HTTP {0}")]
    Status(u16),
    /// The document is not a dataset.
    #[error(transparent)]
    Decode(#[from] DatasetError),
}

/// Where the dataset in use came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetOrigin {
    /// Retrieved from the configured source.
    Retrieved(String),
    /// The embedded copy was requested directly.
    Embedded,
    /// Retrieval failed and the embedded copy was used instead.
    Fallback {
        /// Source that failed.
        source: String,
        /// Failure, as displayed text.
        reason: String,
    },
}

impl DatasetOrigin {
    /// Returns true if the embedded copy is in use.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        !matches!(self, DatasetOrigin::Retrieved(_))
    }
}

impl fmt::Display for DatasetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetOrigin::Retrieved(source) => write!(f, "{source}"),
            DatasetOrigin::Embedded => f.write_str("embedded dataset"),
            DatasetOrigin::Fallback { source, .. } => {
                write!(f, "embedded dataset (fallback for {source})")
            }
        }
    }
}

/// A dataset together with its origin.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// The dataset.
    pub dataset: Dataset,
    /// Where it came from.
    pub origin: DatasetOrigin,
}

/// Obtains the dataset from the configured source.
#[derive(Debug, Clone)]
pub struct DatasetProvider {
    source: DatasetSource,
    client: reqwest::Client,
}

impl DatasetProvider {
    /// Creates a provider for `source`.
    #[must_use]
    pub fn new(source: DatasetSource) -> Self {
        Self {
            source,
            client: reqwest::Client::new(),
        }
    }

    /// Returns the configured source.
    #[must_use]
    pub fn source(&self) -> &DatasetSource {
        &self.source
    }

    /// Loads the dataset, falling back to the embedded copy on any failure.
    pub async fn load(&self) -> LoadedDataset {
        if self.source == DatasetSource::Embedded {
            info!("using embedded dataset");
            return LoadedDataset {
                dataset: Dataset::fallback().clone(),
                origin: DatasetOrigin::Embedded,
            };
        }

        let source = self.source.to_string();
        match self.fetch().await {
            Ok(dataset) => {
                info!(%source, "dataset loaded");
                LoadedDataset {
                    dataset,
                    origin: DatasetOrigin::Retrieved(source),
                }
            }
            Err(err) => {
                warn!(%source, error = %err, "dataset unavailable; using embedded copy");
                LoadedDataset {
                    dataset: Dataset::fallback().clone(),
                    origin: DatasetOrigin::Fallback {
                        source,
                        reason: err.to_string(),
                    },
                }
            }
        }
    }

    /// Retrieves and decodes the document without falling back.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] describing the first failure.
    pub async fn fetch(&self) -> Result<Dataset, FetchError> {
        let text = match &self.source {
            DatasetSource::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| FetchError::Io {
                        path: path.clone(),
                        source,
                    })?
            }
            DatasetSource::Url(url) => {
                let response = self.client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(FetchError::Status(status.as_u16()));
                }
                response.text().await?
            }
            DatasetSource::Embedded => return Ok(Dataset::fallback().clone()),
        };
        Ok(json::from_json(&text)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn write_temp(dir: &tempfile::TempDir, text: &str) -> PathBuf {
        let path = dir.path().join("chart_data.json");
        std::fs::write(&path, text).expect("write test file");
        path
    }

    #[tokio::test]
    async fn embedded_source_skips_retrieval() {
        let loaded = DatasetProvider::new(DatasetSource::Embedded).load().await;
        assert_eq!(loaded.origin, DatasetOrigin::Embedded);
        assert_eq!(&loaded.dataset, Dataset::fallback());
    }

    #[tokio::test]
    async fn file_source_is_read() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut dataset = Dataset::fallback().clone();
        dataset.support.registered_children_supported = 2_200;
        let path = write_temp(&dir, &json::to_json(&dataset).expect("serialize dataset"));

        let loaded = DatasetProvider::new(DatasetSource::Path(path)).load().await;
        assert!(matches!(loaded.origin, DatasetOrigin::Retrieved(_)));
        assert_eq!(loaded.dataset.support.registered_children_supported, 2_200);
    }

    #[tokio::test]
    async fn missing_file_falls_back() {
        let source = DatasetSource::Path(PathBuf::from("/nonexistent/chart_data.json"));
        let loaded = DatasetProvider::new(source).load().await;
        assert!(matches!(
            loaded.origin,
            DatasetOrigin::Fallback { ref reason, .. } if reason.contains("cannot read")
        ));
        assert_eq!(&loaded.dataset, Dataset::fallback());
    }

    #[tokio::test]
    async fn malformed_document_falls_back() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_temp(&dir, "{\"trend\": [");
        let loaded = DatasetProvider::new(DatasetSource::Path(path)).load().await;
        assert!(loaded.origin.is_embedded());
        assert_eq!(&loaded.dataset, Dataset::fallback());
    }

    #[tokio::test]
    async fn wrong_shape_falls_back() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = write_temp(&dir, "{\"trend\": []}");
        let loaded = DatasetProvider::new(DatasetSource::Path(path)).load().await;
        assert!(matches!(loaded.origin, DatasetOrigin::Fallback { .. }));
    }

    #[tokio::test]
    async fn invalid_but_well_formed_document_is_not_replaced() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut dataset = Dataset::fallback().clone();
        dataset.support.estimated_unregistered_min = 5_000;
        let path = write_temp(&dir, &json::to_json(&dataset).expect("serialize dataset"));
        let loaded = DatasetProvider::new(DatasetSource::Path(path)).load().await;
        assert!(matches!(loaded.origin, DatasetOrigin::Retrieved(_)));
        assert!(loaded.dataset.validate().is_err());
    }

    #[tokio::test]
    async fn unreachable_url_falls_back() {
        let source = DatasetSource::Url("http://127.0.0.1:9/chart_data.json".to_string());
        let loaded = DatasetProvider::new(source).load().await;
        assert!(matches!(loaded.origin, DatasetOrigin::Fallback { .. }));
    }
}
