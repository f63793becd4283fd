//! Wongok-dong resident composition donut.

use audit_dataset::{Dataset, WongokZone};

use super::palette;
use super::{
    format_count, Anchor, CenterOverlay, ChartKind, ChartSpec, DrawType, Legend, Orientation,
    Series, StyleHints, Tooltip,
};

/// Segment labels, foreign first.
pub const LABELS: [&str; 2] = ["외국인 주민", "내국인 주민"];

/// Ring cutout, in percent of the radius.
pub const CUTOUT: u8 = 70;

/// Caption under the centre value.
pub const CAPTION: &str = "외국인";

/// Tooltip line for one segment: `"외국인 주민: 18,014명 (89.2%)"`.
///
/// `total` is the zone population as a float so that counts near `u64::MAX`
/// cannot overflow the sum.
#[must_use]
pub fn tooltip_line(label: &str, count: u64, total: f64) -> String {
    let pct = if total > 0.0 {
        count as f64 / total * 100.0
    } else {
        0.0
    };
    format!("{label}: {}명 ({pct:.1}%)", format_count(count))
}

/// Centre value. Uses the published ratio, not the computed share.
#[must_use]
pub fn center_value(zone: &WongokZone) -> String {
    format!("{:.1}%", zone.foreign_ratio)
}

/// Builds the donut chart.
#[must_use]
pub fn build(dataset: &Dataset) -> ChartSpec {
    let zone = &dataset.wongok;
    let total = zone.foreign_residents as f64 + zone.korean_residents as f64;
    let counts = [zone.foreign_residents, zone.korean_residents];

    ChartSpec {
        kind: ChartKind::Wongok,
        mount: ChartKind::Wongok.mount(),
        draw: DrawType::Doughnut,
        orientation: Orientation::Vertical,
        labels: LABELS.iter().map(|l| l.to_string()).collect(),
        series: vec![Series {
            name: "주민 수 (명)".to_string(),
            values: counts.iter().map(|&c| c as f64).collect(),
            style: StyleHints::colored(vec![palette::PRIMARY, palette::MUTED]),
        }],
        axes: Vec::new(),
        legend: Legend::Bottom,
        tooltip: Tooltip {
            labels: LABELS
                .iter()
                .zip(counts)
                .map(|(label, count)| tooltip_line(label, count, total))
                .collect(),
            after_labels: Vec::new(),
        },
        cutout: Some(CUTOUT),
        overlay: Some(CenterOverlay {
            value: center_value(zone),
            caption: CAPTION.to_string(),
            anchor: Anchor::ChartAreaCenter,
            color: palette::PRIMARY_LIGHT,
        }),
    }
}
