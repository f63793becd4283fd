//! Regional comparison: foreign ratio per region, sorted descending, with the
//! subject region and pilot participants highlighted.

use audit_dataset::{Dataset, RegionComparison};

use super::palette;
use super::{
    Axis, AxisPosition, ChartKind, ChartSpec, DrawType, Emphasis, Legend, Orientation, Series,
    StyleHints, Tooltip,
};

/// Tooltip note for the subject region.
pub const EXCLUDED_NOTE: &str = "❌ 시범사업 제외";
/// Tooltip note for pilot participants.
pub const INCLUDED_NOTE: &str = "✅ 시범사업 참여";

/// Classifies a region. The subject region is always `Excluded`, even if
/// the dataset marks it as a pilot participant.
#[must_use]
pub fn classify(entry: &RegionComparison, subject_region: &str) -> Emphasis {
    if entry.region == subject_region {
        Emphasis::Excluded
    } else if entry.pilot_program {
        Emphasis::Included
    } else {
        Emphasis::Neutral
    }
}

impl Emphasis {
    /// Bar colour.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Emphasis::Excluded => palette::DANGER,
            Emphasis::Included => palette::SUCCESS,
            Emphasis::Neutral => palette::MUTED,
        }
    }

    /// Tooltip note; empty for neutral bars.
    #[must_use]
    pub fn note(self) -> &'static str {
        match self {
            Emphasis::Excluded => EXCLUDED_NOTE,
            Emphasis::Included => INCLUDED_NOTE,
            Emphasis::Neutral => "",
        }
    }
}

/// Returns the regions sorted by `foreign_ratio`, highest first. Equal ratios
/// keep their input order.
#[must_use]
pub fn sorted_by_ratio(regions: &[RegionComparison]) -> Vec<&RegionComparison> {
    let mut sorted: Vec<&RegionComparison> = regions.iter().collect();
    sorted.sort_by(|a, b| b.foreign_ratio.total_cmp(&a.foreign_ratio));
    sorted
}

/// Builds the horizontal comparison bar chart.
#[must_use]
pub fn build(dataset: &Dataset, subject_region: &str) -> ChartSpec {
    let sorted = sorted_by_ratio(&dataset.comparison);
    let emphasis: Vec<Emphasis> = sorted
        .iter()
        .map(|entry| classify(entry, subject_region))
        .collect();

    let series = Series {
        name: "외국인 비율 (%)".to_string(),
        values: sorted.iter().map(|entry| entry.foreign_ratio).collect(),
        style: StyleHints {
            border_radius: Some(4),
            emphasis: emphasis.clone(),
            ..StyleHints::colored(emphasis.iter().map(|e| e.color()).collect())
        },
    };

    ChartSpec {
        kind: ChartKind::Comparison,
        mount: ChartKind::Comparison.mount(),
        draw: DrawType::Bar,
        orientation: Orientation::Horizontal,
        labels: sorted.iter().map(|entry| entry.region.clone()).collect(),
        series: vec![series],
        axes: vec![
            Axis::new("x", AxisPosition::Bottom).titled("외국인 비율 (%)"),
            Axis::new("y", AxisPosition::Left).without_grid(),
        ],
        legend: Legend::Hidden,
        tooltip: Tooltip {
            labels: Vec::new(),
            after_labels: emphasis.iter().map(|e| e.note().to_string()).collect(),
        },
        cutout: None,
        overlay: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn region(name: &str, ratio: f64, pilot: bool) -> RegionComparison {
        RegionComparison {
            region: name.to_string(),
            foreign_ratio: ratio,
            pilot_program: pilot,
        }
    }

    #[test]
    fn equal_ratios_keep_input_order() {
        let regions = vec![region("A", 5.0, false), region("C", 5.0, false), region("B", 7.0, false)];
        let names: Vec<&str> = sorted_by_ratio(&regions)
            .iter()
            .map(|r| r.region.as_str())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn fallback_ratios_sorted_descending() {
        let spec = build(Dataset::fallback(), audit_dataset::SUBJECT_REGION);
        assert_eq!(spec.series[0].values, vec![13.2, 10.1, 7.0, 5.0, 4.8, 4.0]);
        assert_eq!(
            spec.labels,
            vec!["안산시", "시흥시", "화성시", "안성시", "수원시", "이천시"]
        );
    }

    #[test]
    fn subject_region_beats_pilot_flag() {
        let entry = region("안산시", 13.2, true);
        assert_eq!(classify(&entry, "안산시"), Emphasis::Excluded);
        assert_eq!(classify(&entry, "시흥시"), Emphasis::Included);
    }

    #[test]
    fn colours_and_notes_follow_emphasis() {
        let spec = build(Dataset::fallback(), audit_dataset::SUBJECT_REGION);
        let style = &spec.series[0].style;
        assert_eq!(
            style.emphasis,
            vec![
                Emphasis::Excluded,
                Emphasis::Neutral,
                Emphasis::Included,
                Emphasis::Included,
                Emphasis::Neutral,
                Emphasis::Included,
            ]
        );
        assert_eq!(style.colors[0], palette::DANGER);
        assert_eq!(style.colors[1], palette::MUTED);
        assert_eq!(style.colors[2], palette::SUCCESS);
        assert_eq!(spec.tooltip.after_labels[0], EXCLUDED_NOTE);
        assert_eq!(spec.tooltip.after_labels[1], "");
        assert_eq!(spec.tooltip.after_labels[2], INCLUDED_NOTE);
    }

    #[test]
    fn subject_region_is_configurable() {
        let spec = build(Dataset::fallback(), "시흥시");
        let style = &spec.series[0].style;
        assert_eq!(style.emphasis[0], Emphasis::Neutral);
        assert_eq!(style.emphasis[1], Emphasis::Excluded);
    }

    #[test]
    fn bars_are_horizontal() {
        let spec = build(Dataset::fallback(), audit_dataset::SUBJECT_REGION);
        assert_eq!(spec.orientation, Orientation::Horizontal);
        assert_eq!(spec.legend, Legend::Hidden);
    }
}
