//! Invariant checks over a decoded [`Dataset`].
//!
//! Validation runs once, right after load, and collects every violation
//! instead of stopping at the first one so the error notice can list them all.

use std::collections::HashSet;

use crate::error::{DatasetError, Violation};
use crate::model::{Dataset, EventDate};

/// Largest accepted distance, in percentage points, between the published
/// Wongok foreign share and the share computed from resident counts.
pub const WONGOK_RATIO_TOLERANCE: f64 = 0.05;

impl Dataset {
    /// Checks every section invariant.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Invalid`] listing all violations found.
    pub fn validate(&self) -> Result<(), DatasetError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DatasetError::Invalid(violations))
        }
    }

    /// Returns every broken invariant, in section order.
    #[must_use]
    pub fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        check_trend(self, &mut out);
        check_comparison(self, &mut out);
        check_support(self, &mut out);
        check_perception(self, &mut out);
        check_wongok(self, &mut out);
        check_timeline(self, &mut out);
        out
    }
}

fn check_trend(data: &Dataset, out: &mut Vec<Violation>) {
    if data.trend.is_empty() {
        out.push(Violation::new("trend", "section is empty"));
    }
    for pair in data.trend.windows(2) {
        if pair[1].year <= pair[0].year {
            out.push(Violation::new(
                "trend",
                format!("year {} follows {}; years must increase", pair[1].year, pair[0].year),
            ));
        }
    }
    for point in &data.trend {
        if !is_percentage(point.ratio) {
            out.push(Violation::new(
                "trend",
                format!("ratio {} for {} is not a percentage", point.ratio, point.year),
            ));
        }
    }
}

fn check_comparison(data: &Dataset, out: &mut Vec<Violation>) {
    if data.comparison.is_empty() {
        out.push(Violation::new("comparison", "section is empty"));
    }
    let mut seen = HashSet::new();
    for entry in &data.comparison {
        if entry.region.trim().is_empty() {
            out.push(Violation::new("comparison", "region name is empty"));
        } else if !seen.insert(entry.region.as_str()) {
            out.push(Violation::new(
                "comparison",
                format!("region `{}` appears more than once", entry.region),
            ));
        }
        if !is_percentage(entry.foreign_ratio) {
            out.push(Violation::new(
                "comparison",
                format!(
                    "foreign_ratio {} for `{}` is not a percentage",
                    entry.foreign_ratio, entry.region
                ),
            ));
        }
    }
}

fn check_support(data: &Dataset, out: &mut Vec<Violation>) {
    let s = &data.support;
    if s.estimated_unregistered_min > s.estimated_unregistered_max {
        out.push(Violation::new(
            "support",
            format!(
                "estimated_unregistered_min {} exceeds estimated_unregistered_max {}",
                s.estimated_unregistered_min, s.estimated_unregistered_max
            ),
        ));
    }
}

fn check_perception(data: &Dataset, out: &mut Vec<Violation>) {
    for (i, gap) in data.perception.iter().enumerate() {
        if gap.category.trim().is_empty() {
            out.push(Violation::new("perception", format!("entry {i} has an empty category")));
        }
    }
}

fn check_wongok(data: &Dataset, out: &mut Vec<Violation>) {
    let zone = &data.wongok;
    if !is_percentage(zone.foreign_ratio) {
        out.push(Violation::new(
            "wongok",
            format!("foreign_ratio {} is not a percentage", zone.foreign_ratio),
        ));
    }
    match (zone.total_residents(), zone.computed_foreign_ratio()) {
        (None, _) => out.push(Violation::new(
            "wongok",
            format!(
                "resident counts {} + {} overflow",
                zone.foreign_residents, zone.korean_residents
            ),
        )),
        (Some(_), None) => out.push(Violation::new("wongok", "zone has no residents")),
        (Some(_), Some(computed)) => {
            if (computed - zone.foreign_ratio).abs() > WONGOK_RATIO_TOLERANCE + f64::EPSILON {
                out.push(Violation::new(
                    "wongok",
                    format!(
                        "foreign_ratio {} disagrees with resident counts ({computed:.2})",
                        zone.foreign_ratio
                    ),
                ));
            }
        }
    }
}

fn check_timeline(data: &Dataset, out: &mut Vec<Violation>) {
    let mut previous: Option<EventDate> = None;
    for item in &data.timeline {
        if item.event.trim().is_empty() {
            out.push(Violation::new(
                "timeline",
                format!("event at {} has no description", item.date),
            ));
        }
        let Some(date) = EventDate::parse(&item.date) else {
            out.push(Violation::new(
                "timeline",
                format!("date `{}` is not YYYY.MM", item.date),
            ));
            continue;
        };
        if let Some(prev) = previous {
            if date < prev {
                out.push(Violation::new(
                    "timeline",
                    format!("{date} is listed after {prev}; events must be chronological"),
                ));
            }
        }
        previous = Some(date);
    }
}

fn is_percentage(v: f64) -> bool {
    v.is_finite() && (0.0..=100.0).contains(&v)
}
