//! Current budget vs. the addition needed for unregistered children.

use audit_dataset::Dataset;

use super::palette;
use super::{
    Axis, AxisPosition, ChartKind, ChartSpec, DrawType, Legend, Orientation, Series, StyleHints,
    Tooltip,
};

/// Won per 억 (10^8).
pub const WON_PER_EOK: u64 = 100_000_000;

/// Bar labels, in draw order.
pub const LABELS: [&str; 2] = ["현재 예산", "추가 필요"];

/// Converts won to 억원.
#[must_use]
pub fn to_eok(won: u64) -> f64 {
    won as f64 / WON_PER_EOK as f64
}

/// Formats won as 억원 to one decimal (`7_284_000_000` → `"72.8"`).
#[must_use]
pub fn display_eok(won: u64) -> String {
    format!("{:.1}", to_eok(won))
}

/// Builds the budget bar chart.
#[must_use]
pub fn build(dataset: &Dataset) -> ChartSpec {
    let won = [
        dataset.budget.current_budget,
        dataset.budget.additional_needed_for_unregistered,
    ];

    ChartSpec {
        kind: ChartKind::Budget,
        mount: ChartKind::Budget.mount(),
        draw: DrawType::Bar,
        orientation: Orientation::Vertical,
        labels: LABELS.iter().map(|l| l.to_string()).collect(),
        series: vec![Series {
            name: "예산 (억원)".to_string(),
            values: won.iter().map(|&w| to_eok(w)).collect(),
            style: StyleHints {
                border_radius: Some(8),
                ..StyleHints::colored(vec![palette::PRIMARY, palette::SUCCESS])
            },
        }],
        axes: vec![
            Axis::new("y", AxisPosition::Left)
                .titled("예산 (억원)")
                .from_zero(),
            Axis::new("x", AxisPosition::Bottom).without_grid(),
        ],
        legend: Legend::Hidden,
        tooltip: Tooltip {
            labels: won.iter().map(|&w| format!("{}억원", display_eok(w))).collect(),
            after_labels: Vec::new(),
        },
        cutout: None,
        overlay: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn won_to_eok_one_decimal() {
        assert_eq!(display_eok(7_284_000_000), "72.8");
        assert_eq!(display_eok(2_040_000_000), "20.4");
        assert_eq!(display_eok(0), "0.0");
    }

    #[test]
    fn fallback_values_and_tooltips() {
        let spec = build(Dataset::fallback());
        assert_eq!(spec.series[0].values, vec![72.84, 20.4]);
        assert_eq!(spec.tooltip.labels, vec!["72.8억원", "20.4억원"]);
    }
}
