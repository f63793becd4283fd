//! Foreign population trend: count and ratio over the same years.

use audit_dataset::Dataset;

use super::palette;
use super::{
    Axis, AxisPosition, ChartKind, ChartSpec, DrawType, Legend, Orientation, Series, StyleHints,
    Tooltip,
};

/// Fixed bounds of the ratio axis, in percent.
pub const RATIO_AXIS_RANGE: (f64, f64) = (10.0, 15.0);

const SMOOTHING: f64 = 0.4;

/// Builds the trend chart: population on the left axis from zero, ratio on a
/// right axis fixed to [`RATIO_AXIS_RANGE`], both smoothed, ratio dashed.
#[must_use]
pub fn build(dataset: &Dataset) -> ChartSpec {
    let points = &dataset.trend;

    let population = Series {
        name: "외국인 인구 (명)".to_string(),
        values: points.iter().map(|p| p.foreign_population as f64).collect(),
        style: StyleHints {
            fill: Some(palette::PRIMARY_FILL),
            tension: Some(SMOOTHING),
            axis: Some("y"),
            ..StyleHints::colored(vec![palette::PRIMARY])
        },
    };

    let ratio = Series {
        name: "외국인 비율 (%)".to_string(),
        values: points.iter().map(|p| p.ratio).collect(),
        style: StyleHints {
            tension: Some(SMOOTHING),
            dash: Some([5, 5]),
            axis: Some("y1"),
            ..StyleHints::colored(vec![palette::WARNING])
        },
    };

    let (min, max) = RATIO_AXIS_RANGE;
    ChartSpec {
        kind: ChartKind::Trend,
        mount: ChartKind::Trend.mount(),
        draw: DrawType::Line,
        orientation: Orientation::Vertical,
        labels: points.iter().map(|p| p.year.to_string()).collect(),
        series: vec![population, ratio],
        axes: vec![
            Axis::new("y", AxisPosition::Left)
                .titled("외국인 인구 (명)")
                .from_zero(),
            Axis::new("y1", AxisPosition::Right)
                .titled("비율 (%)")
                .range(min, max)
                .without_grid(),
            Axis::new("x", AxisPosition::Bottom),
        ],
        legend: Legend::Top,
        tooltip: Tooltip::default(),
        cutout: None,
        overlay: None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_years_in_order() {
        let spec = build(Dataset::fallback());
        assert_eq!(
            spec.labels,
            vec!["2018", "2019", "2020", "2021", "2022", "2023", "2024"]
        );
    }

    #[test]
    fn count_and_ratio_share_the_x_axis() {
        let spec = build(Dataset::fallback());
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].values[6], 96_300.0);
        assert_eq!(spec.series[1].values[6], 13.2);
        assert_eq!(spec.series[0].style.axis, Some("y"));
        assert_eq!(spec.series[1].style.axis, Some("y1"));
    }

    #[test]
    fn ratio_axis_is_fixed_and_count_axis_starts_at_zero() {
        let spec = build(Dataset::fallback());
        let y = spec.axes.iter().find(|a| a.id == "y");
        let y1 = spec.axes.iter().find(|a| a.id == "y1");
        assert!(matches!(y, Some(a) if a.begin_at_zero && a.position == AxisPosition::Left));
        assert!(matches!(
            y1,
            Some(a) if a.min == Some(10.0) && a.max == Some(15.0) && a.position == AxisPosition::Right
        ));
    }

    #[test]
    fn ratio_line_is_dashed_and_both_are_smoothed() {
        let spec = build(Dataset::fallback());
        assert_eq!(spec.series[0].style.dash, None);
        assert_eq!(spec.series[1].style.dash, Some([5, 5]));
        assert!(spec.series.iter().all(|s| s.style.tension == Some(0.4)));
    }
}
