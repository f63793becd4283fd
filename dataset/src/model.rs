//! Core dataset model types.
//!
//! These types mirror the `chart_data.json` document section by section. All
//! sections are required; unknown extra fields in the document are ignored so
//! that richer exports still load. The embedded copy is available through
//! [`Dataset::fallback()`](crate::Dataset::fallback).

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single structured document backing every visualization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Optional provenance block written by the exporter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Yearly foreign population of the subject city, chronological.
    pub trend: Vec<TrendPoint>,
    /// Foreign resident ratio per region, with pilot program participation.
    pub comparison: Vec<RegionComparison>,
    /// Childcare subsidy coverage figures.
    pub support: SupportStatus,
    /// Common perceptions contrasted with the documented reality.
    pub perception: Vec<PerceptionGap>,
    /// Resident composition of the Wongok-dong multicultural zone.
    pub wongok: WongokZone,
    /// Current budget and the addition needed to cover unregistered children.
    pub budget: BudgetAnalysis,
    /// Policy events, chronological.
    pub timeline: Vec<TimelineEvent>,
}

/// Provenance information carried alongside an exported dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Dashboard title.
    pub title: String,
    /// ISO-8601 generation timestamp, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    /// Upstream documents and statistics the figures come from.
    #[serde(default)]
    pub data_sources: Vec<DataSource>,
}

/// One upstream source listed in [`Metadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSource {
    /// Source name.
    pub name: String,
    /// Document identifier, when the source has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Reference date as written by the source (`"2025.01"`, `"2025"`).
    pub date: String,
}

/// One year of the foreign population trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Calendar year.
    pub year: i32,
    /// Registered foreign residents.
    pub foreign_population: u64,
    /// Share of the total population, in percent.
    pub ratio: f64,
}

/// Foreign resident ratio of one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionComparison {
    /// Region name, unique within the section.
    pub region: String,
    /// Share of foreign residents, in percent.
    pub foreign_ratio: f64,
    /// Whether the region takes part in the provincial pilot program.
    pub pilot_program: bool,
}

/// Childcare subsidy coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportStatus {
    /// Registered foreign children currently receiving the subsidy.
    pub registered_children_supported: u64,
    /// Lower bound of the unregistered child estimate.
    pub estimated_unregistered_min: u64,
    /// Upper bound of the unregistered child estimate.
    pub estimated_unregistered_max: u64,
}

/// How far a perception is from the documented reality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapSeverity {
    /// The perception is the opposite of reality.
    Critical,
    /// The perception is misleading.
    High,
}

impl GapSeverity {
    /// Returns the string value used in the JSON document and CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            GapSeverity::Critical => "critical",
            GapSeverity::High => "high",
        }
    }
}

/// A perception contrasted with the documented reality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerceptionGap {
    /// Topic of the comparison.
    pub category: String,
    /// What viewers commonly assume.
    pub perception: String,
    /// What the documents show.
    pub reality: String,
    /// Size of the gap.
    pub gap_severity: GapSeverity,
}

/// Resident composition of the Wongok-dong multicultural zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WongokZone {
    /// Foreign residents.
    pub foreign_residents: u64,
    /// Korean residents.
    pub korean_residents: u64,
    /// Published foreign share, in percent. Authoritative for display.
    pub foreign_ratio: f64,
}

impl WongokZone {
    /// Returns all residents of the zone, or `None` if the sum does not fit
    /// in a `u64`.
    #[must_use]
    pub fn total_residents(&self) -> Option<u64> {
        self.foreign_residents.checked_add(self.korean_residents)
    }

    /// Returns the foreign share computed from the resident counts, or `None`
    /// when the zone has no residents or the counts overflow.
    #[must_use]
    pub fn computed_foreign_ratio(&self) -> Option<f64> {
        let total = self.total_residents()?;
        if total == 0 {
            return None;
        }
        Some(self.foreign_residents as f64 / total as f64 * 100.0)
    }
}

/// Budget figures, in won.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAnalysis {
    /// Current yearly foreign childcare budget.
    pub current_budget: u64,
    /// Additional yearly budget needed to cover unregistered children.
    pub additional_needed_for_unregistered: u64,
}

/// Direction of a policy event in the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// Coverage was extended or recognised.
    Positive,
    /// Coverage was denied or withdrawn.
    Negative,
    /// An announcement with no direct effect yet.
    Neutral,
}

impl EventKind {
    /// Returns the string value used in the JSON document and CSS classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Positive => "positive",
            EventKind::Negative => "negative",
            EventKind::Neutral => "neutral",
        }
    }
}

/// A dated policy event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// `"YYYY.MM"` or `"YYYY"`.
    pub date: String,
    /// Event description.
    pub event: String,
    /// Direction of the event.
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// A parsed timeline date. A bare year orders before any month of that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventDate {
    /// Calendar year.
    pub year: u16,
    /// Month (1-12), or `None` for a bare year.
    pub month: Option<u8>,
}

impl EventDate {
    /// Parses `"YYYY.MM"` or `"YYYY"`.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (year, month) = match s.split_once('.') {
            Some((y, m)) => (y, Some(m)),
            None => (s, None),
        };
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: u16 = year.parse().ok()?;
        let month = match month {
            Some(m) => {
                if m.len() != 2 || !m.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                let m: u8 = m.parse().ok()?;
                if !(1..=12).contains(&m) {
                    return None;
                }
                Some(m)
            }
            None => None,
        };
        Some(Self { year, month })
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.month {
            Some(m) => write!(f, "{:04}.{:02}", self.year, m),
            None => write!(f, "{:04}", self.year),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn event_date_parses_year_month() {
        let d = EventDate::parse("2024.12");
        assert_eq!(d, Some(EventDate { year: 2024, month: Some(12) }));
    }

    #[test]
    fn event_date_bare_year_orders_first() {
        let bare = EventDate::parse("2020");
        let january = EventDate::parse("2020.01");
        assert!(bare.is_some() && january.is_some());
        assert!(bare < january);
    }

    #[test]
    fn event_date_rejects_malformed() {
        for s in ["2024-12", "24.12", "2024.1", "2024.13", "2024.00", "", "abcd"] {
            assert!(EventDate::parse(s).is_none(), "accepted {s:?}");
        }
    }

    #[test]
    fn event_date_display_round_trips() {
        assert_eq!(
            EventDate::parse("2018.07").map(|d| d.to_string()),
            Some("2018.07".to_string())
        );
    }

    #[test]
    fn wongok_computed_ratio() {
        let zone = WongokZone {
            foreign_residents: 18014,
            korean_residents: 2177,
            foreign_ratio: 89.2,
        };
        let computed = zone.computed_foreign_ratio().expect("zone has residents");
        assert!((computed - 89.218).abs() < 0.001);
    }

    #[test]
    fn wongok_empty_zone_has_no_ratio() {
        let zone = WongokZone {
            foreign_residents: 0,
            korean_residents: 0,
            foreign_ratio: 0.0,
        };
        assert!(zone.computed_foreign_ratio().is_none());
    }
}
