//! Generator configuration.
//!
//! Values come from an optional TOML file; command-line flags override them.
//!
//! ```toml
//! source = "https://example.org/chart_data.json"
//! out_dir = "public"
//! subject_region = "안산시"
//! omit = ["budget-chart"]
//! ```

use std::convert::Infallible;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::surface::MountPoint;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data/chart_data.json";

/// Where the dataset is read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DatasetSource {
    /// A JSON file on disk.
    Path(PathBuf),
    /// A JSON document served over HTTP(S).
    Url(String),
    /// The embedded fallback, without any retrieval.
    Embedded,
}

impl Default for DatasetSource {
    fn default() -> Self {
        DatasetSource::Path(PathBuf::from(DEFAULT_DATA_PATH))
    }
}

impl FromStr for DatasetSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("embedded") {
            Ok(DatasetSource::Embedded)
        } else if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DatasetSource::Url(s.to_string()))
        } else {
            Ok(DatasetSource::Path(PathBuf::from(s)))
        }
    }
}

impl From<String> for DatasetSource {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(source) => source,
            Err(never) => match never {},
        }
    }
}

impl From<DatasetSource> for String {
    fn from(source: DatasetSource) -> Self {
        source.to_string()
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Path(path) => write!(f, "{}", path.display()),
            DatasetSource::Url(url) => f.write_str(url),
            DatasetSource::Embedded => f.write_str("embedded"),
        }
    }
}

/// Everything the generator needs to produce one dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Dataset location.
    pub source: DatasetSource,
    /// Output directory.
    pub out_dir: PathBuf,
    /// Region highlighted as excluded in the comparison chart.
    pub subject_region: String,
    /// Mount points left off the page.
    pub omit: Vec<MountPoint>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DatasetSource::default(),
            out_dir: PathBuf::from("public"),
            subject_region: audit_dataset::SUBJECT_REGION.to_string(),
            omit: Vec::new(),
        }
    }
}

impl DashboardConfig {
    /// Reads a TOML config file. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid config TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file: {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parses config TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config TOML.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn source_parses_each_form() {
        assert_eq!("embedded".parse(), Ok(DatasetSource::Embedded));
        assert_eq!(
            "https://example.org/d.json".parse(),
            Ok(DatasetSource::Url("https://example.org/d.json".to_string()))
        );
        assert_eq!(
            "data/chart_data.json".parse(),
            Ok(DatasetSource::Path(PathBuf::from("data/chart_data.json")))
        );
    }

    #[test]
    fn source_display_round_trips() {
        for s in ["embedded", "http://localhost:8000/chart_data.json", "x/y.json"] {
            assert_eq!(DatasetSource::from(s.to_string()).to_string(), s);
        }
    }

    #[test]
    fn empty_toml_is_default() {
        let config = DashboardConfig::from_toml("").expect("parse config");
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.subject_region, "안산시");
    }

    #[test]
    fn toml_overrides_fields() {
        let text = r#"
source = "embedded"
out_dir = "site"
subject_region = "시흥시"
omit = ["budget-chart", "source-modal"]
"#;
        let config = DashboardConfig::from_toml(text).expect("parse config");
        assert_eq!(config.source, DatasetSource::Embedded);
        assert_eq!(config.out_dir, PathBuf::from("site"));
        assert_eq!(config.subject_region, "시흥시");
        assert_eq!(config.omit, vec![MountPoint::BudgetChart, MountPoint::SourceModal]);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DashboardConfig::from_toml("colour = \"red\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DashboardConfig::load(Path::new("/nonexistent/dashboard.toml"));
        assert!(matches!(err, Err(e) if e.to_string().contains("Cannot read config file")));
    }
}
