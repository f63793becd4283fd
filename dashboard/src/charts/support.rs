//! Subsidy coverage: registered children supported vs. the unregistered
//! estimate vs. unregistered children supported.

use audit_dataset::{Dataset, SupportStatus};

use super::palette;
use super::{
    Axis, AxisPosition, ChartKind, ChartSpec, DrawType, Legend, Orientation, Series, StyleHints,
    Tooltip,
};

/// Unregistered children currently receiving the subsidy. A documented
/// figure, not derived from the dataset.
pub const UNREGISTERED_SUPPORTED: u64 = 0;

/// Bar labels, in draw order.
pub const LABELS: [&str; 3] = ["등록 아동 (지원 중)", "미등록 아동 (추정)", "미등록 아동 (지원)"];

/// Midpoint of an estimate range, rounded half up. Exact for the whole
/// `u64` range.
#[must_use]
pub fn midpoint(min: u64, max: u64) -> u64 {
    min / 2 + max / 2 + (min % 2 + max % 2 + 1) / 2
}

/// Returns the three bar values for `support`.
#[must_use]
pub fn values(support: &SupportStatus) -> [u64; 3] {
    [
        support.registered_children_supported,
        midpoint(
            support.estimated_unregistered_min,
            support.estimated_unregistered_max,
        ),
        UNREGISTERED_SUPPORTED,
    ]
}

/// Builds the support bar chart.
#[must_use]
pub fn build(dataset: &Dataset) -> ChartSpec {
    let series = Series {
        name: "아동 수 (명)".to_string(),
        values: values(&dataset.support).iter().map(|&v| v as f64).collect(),
        style: StyleHints {
            border_radius: Some(8),
            ..StyleHints::colored(vec![palette::SUCCESS, palette::WARNING, palette::DANGER])
        },
    };

    ChartSpec {
        kind: ChartKind::Support,
        mount: ChartKind::Support.mount(),
        draw: DrawType::Bar,
        orientation: Orientation::Vertical,
        labels: LABELS.iter().map(|l| l.to_string()).collect(),
        series: vec![series],
        axes: vec![
            Axis::new("y", AxisPosition::Left)
                .titled("아동 수 (명)")
                .from_zero(),
            Axis::new("x", AxisPosition::Bottom).without_grid(),
        ],
        legend: Legend::Hidden,
        tooltip: Tooltip::default(),
        cutout: None,
        overlay: None,
    }
}
