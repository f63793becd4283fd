//! Source citation registry.
//!
//! Each entry explains where a statistic on the dashboard comes from. Entries
//! are grouped into modules by topic; [`CitationRegistry::standard()`] assembles
//! them in display order. Content is authored as typed blocks whose text may
//! carry inline Markdown emphasis (`**bold**`).

pub mod charts;
pub mod policy;
pub mod population;
pub mod unregistered;

use crate::error::CitationError;

/// Stable citation keys referenced by the render surface.
pub mod keys {
    /// Ansan policy document 3-3-48.
    pub const POLICY_DOCUMENT: &str = "policy-document";
    /// Ansan foreign population statistics.
    pub const FOREIGNER_POPULATION: &str = "foreigner-population";
    /// Wongok-dong multicultural zone statistics.
    pub const WONGOK_STATS: &str = "wongok-stats";
    /// Wongok elementary school statistics.
    pub const WONGOK_SCHOOL: &str = "wongok-school";
    /// Legal basis for the zero-percent coverage claim.
    pub const UNREGISTERED_SUPPORT: &str = "unregistered-support";
    /// Ministry of Justice unregistered child statistics.
    pub const MOJ_STATS: &str = "moj-stats";
    /// Civil society estimates.
    pub const NGO_ESTIMATION: &str = "ngo-estimation";
    /// Derivation of the Ansan unregistered child estimate.
    pub const UNREGISTERED_ESTIMATION: &str = "unregistered-estimation";
    /// Gyeonggi pilot program description.
    pub const GYEONGGI_PILOT: &str = "gyeonggi-pilot";
    /// Cross-region foreign ratio comparison.
    pub const FOREIGNER_RATIO_COMPARISON: &str = "foreigner-ratio-comparison";
    /// Budget estimation for closing the coverage gap.
    pub const BUDGET_ESTIMATION: &str = "budget-estimation";
    /// Data behind the trend chart.
    pub const TREND_DATA: &str = "trend-data";
    /// Data behind the comparison chart.
    pub const COMPARISON_DATA: &str = "comparison-data";
    /// Data behind the support chart.
    pub const SUPPORT_DATA: &str = "support-data";
    /// Data behind the Wongok donut chart.
    pub const WONGOK_DATA: &str = "wongok-data";
    /// Data behind the budget chart.
    pub const BUDGET_DATA: &str = "budget-data";
}

/// Where a source link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// An external web page.
    External(&'static str),
    /// A file shipped next to the dashboard (opened, never parsed).
    Attachment(&'static str),
    /// Another registry entry.
    Citation(&'static str),
}

/// One block of citation content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Section heading.
    Heading(&'static str),
    /// Highlighted label/value lines.
    Highlight(&'static [(&'static str, &'static str)]),
    /// Bulleted list.
    List(&'static [&'static str]),
    /// Warning box.
    Warning(&'static str),
    /// Calculation box: description/value rows.
    Calculation(&'static [(&'static str, &'static str)]),
    /// Plain paragraph.
    Paragraph(&'static str),
    /// Link to a source.
    Link {
        /// Link text.
        label: &'static str,
        /// Destination.
        target: LinkTarget,
    },
}

impl Block {
    /// Returns true if the block carries no visible text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Block::Heading(s) | Block::Warning(s) | Block::Paragraph(s) => s.trim().is_empty(),
            Block::Highlight(rows) | Block::Calculation(rows) => rows.is_empty(),
            Block::List(items) => items.is_empty(),
            Block::Link { label, .. } => label.trim().is_empty(),
        }
    }
}

/// A registry entry: display title and content blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CitationEntry {
    /// Unique key (see [`keys`]).
    pub key: &'static str,
    /// Overlay title.
    pub title: &'static str,
    /// Overlay body.
    pub content: &'static [Block],
}

impl CitationEntry {
    /// Returns the keys of other entries this entry links to.
    pub fn cross_references(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.content.iter().filter_map(|block| match block {
            Block::Link {
                target: LinkTarget::Citation(key),
                ..
            } => Some(*key),
            _ => None,
        })
    }
}

/// Immutable key → entry mapping.
#[derive(Debug, Clone)]
pub struct CitationRegistry {
    entries: Vec<CitationEntry>,
}

impl CitationRegistry {
    /// Builds a registry from explicit entries.
    #[must_use]
    pub fn new(entries: Vec<CitationEntry>) -> Self {
        Self { entries }
    }

    /// Returns the registry with every dashboard citation.
    #[must_use]
    pub fn standard() -> &'static CitationRegistry {
        static REGISTRY: std::sync::OnceLock<CitationRegistry> = std::sync::OnceLock::new();
        REGISTRY.get_or_init(|| {
            let mut entries = Vec::new();
            entries.extend(policy::entries());
            entries.extend(population::entries());
            entries.extend(unregistered::entries());
            entries.extend(charts::entries());
            CitationRegistry::new(entries)
        })
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&CitationEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Looks up an entry, treating an unknown key as an error.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::UnknownKey`] if no entry has `key`.
    pub fn resolve(&self, key: &str) -> Result<&CitationEntry, CitationError> {
        self.lookup(key)
            .ok_or_else(|| CitationError::UnknownKey(key.to_string()))
    }

    /// Checks that every key in `keys` has an entry.
    ///
    /// # Errors
    ///
    /// Returns [`CitationError::Unresolved`] with the missing keys, in order,
    /// without duplicates.
    pub fn verify_keys<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Result<(), CitationError> {
        let mut missing: Vec<String> = Vec::new();
        for key in keys {
            if self.lookup(key).is_none() && !missing.iter().any(|m| m == key) {
                missing.push(key.to_string());
            }
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(CitationError::Unresolved(missing))
        }
    }

    /// Returns all entries in display order.
    #[must_use]
    pub fn entries(&self) -> &[CitationEntry] {
        &self.entries
    }

    /// Returns all keys in display order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_count() {
        assert_eq!(CitationRegistry::standard().len(), 16);
    }

    #[test]
    fn all_keys_unique() {
        let mut keys = std::collections::HashSet::new();
        for key in CitationRegistry::standard().keys() {
            assert!(keys.insert(key), "Duplicate citation key: {}", key);
        }
    }

    #[test]
    fn every_entry_has_title_and_content() {
        for entry in CitationRegistry::standard().entries() {
            assert!(!entry.title.trim().is_empty(), "{} has no title", entry.key);
            assert!(!entry.content.is_empty(), "{} has no content", entry.key);
            for block in entry.content {
                assert!(!block.is_empty(), "{} has an empty block", entry.key);
            }
        }
    }

    #[test]
    fn cross_references_resolve() {
        let registry = CitationRegistry::standard();
        for entry in registry.entries() {
            for key in entry.cross_references() {
                assert!(registry.resolve(key).is_ok(), "{} links to unknown {}", entry.key, key);
            }
        }
    }

    #[test]
    fn unknown_key_is_an_error() {
        let err = CitationRegistry::standard().resolve("no-such-source");
        assert_eq!(err, Err(CitationError::UnknownKey("no-such-source".to_string())));
    }

    #[test]
    fn verify_keys_reports_each_missing_key_once() {
        let registry = CitationRegistry::standard();
        let result = registry.verify_keys(["trend-data", "ghost", "ghost", "phantom"]);
        assert_eq!(
            result,
            Err(CitationError::Unresolved(vec![
                "ghost".to_string(),
                "phantom".to_string()
            ]))
        );
    }

    #[test]
    fn empty_registry_resolves_nothing() {
        let registry = CitationRegistry::new(Vec::new());
        assert!(registry.is_empty());
        assert!(registry.lookup(keys::POLICY_DOCUMENT).is_none());
    }
}
