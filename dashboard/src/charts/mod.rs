//! Chart spec builders.
//!
//! Each chart kind has a pure builder `(Dataset) → ChartSpec` in its own
//! module. Builders are deterministic: the same dataset always produces the
//! same labels, series, and ordering. [`render_chart`] runs a builder only when
//! the chart's mount point exists on the surface.

pub mod budget;
pub mod comparison;
pub mod palette;
pub mod support;
pub mod trend;
pub mod wongok;

use audit_dataset::Dataset;
use serde::Serialize;
use tracing::debug;

use crate::surface::{MountPoint, RenderStatus, RenderSurface};

/// The five dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Foreign population and ratio over time.
    Trend,
    /// Foreign ratio per region, sorted descending.
    Comparison,
    /// Registered vs. unregistered children supported.
    Support,
    /// Wongok-dong resident composition.
    Wongok,
    /// Current vs. additional budget.
    Budget,
}

impl ChartKind {
    /// Every chart kind, in draw order.
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Trend,
        ChartKind::Comparison,
        ChartKind::Support,
        ChartKind::Wongok,
        ChartKind::Budget,
    ];

    /// Returns the mount point the chart draws into.
    #[must_use]
    pub fn mount(self) -> MountPoint {
        match self {
            ChartKind::Trend => MountPoint::TrendChart,
            ChartKind::Comparison => MountPoint::ComparisonChart,
            ChartKind::Support => MountPoint::SupportChart,
            ChartKind::Wongok => MountPoint::WongokChart,
            ChartKind::Budget => MountPoint::BudgetChart,
        }
    }
}

/// Drawing primitive used by the client renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawType {
    /// Connected line.
    Line,
    /// Bars.
    Bar,
    /// Ring of segments.
    Doughnut,
}

/// Direction bars grow in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Categories on the x-axis.
    Vertical,
    /// Categories on the y-axis.
    Horizontal,
}

/// Legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Legend {
    /// No legend.
    Hidden,
    /// Above the plot.
    Top,
    /// Below the plot.
    Bottom,
}

/// Side of the plot an axis sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisPosition {
    /// Left value axis.
    Left,
    /// Right value axis.
    Right,
    /// Bottom axis.
    Bottom,
}

/// A numeric or category axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    /// Axis id referenced by [`StyleHints::axis`].
    pub id: &'static str,
    /// Placement.
    pub position: AxisPosition,
    /// Axis title, if shown.
    pub title: Option<String>,
    /// Fixed lower bound.
    pub min: Option<f64>,
    /// Fixed upper bound.
    pub max: Option<f64>,
    /// Auto-scale from zero.
    pub begin_at_zero: bool,
    /// Draw grid lines across the plot area.
    pub grid: bool,
}

impl Axis {
    /// Creates an axis with a grid, no title, and automatic bounds.
    #[must_use]
    pub fn new(id: &'static str, position: AxisPosition) -> Self {
        Self {
            id,
            position,
            title: None,
            min: None,
            max: None,
            begin_at_zero: false,
            grid: true,
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Fixes the bounds.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Scales from zero.
    #[must_use]
    pub fn from_zero(mut self) -> Self {
        self.begin_at_zero = true;
        self
    }

    /// Hides grid lines over the plot area.
    #[must_use]
    pub fn without_grid(mut self) -> Self {
        self.grid = false;
        self
    }
}

/// Per-bar emphasis in the comparison chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// The subject region, left out of the pilot program.
    Excluded,
    /// A pilot program participant.
    Included,
    /// Neither.
    Neutral,
}

/// Visual hints for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleHints {
    /// One colour for the whole series, or one per data point.
    pub colors: Vec<&'static str>,
    /// Fill colour under a line.
    pub fill: Option<&'static str>,
    /// Curve smoothing; `None` draws straight segments.
    pub tension: Option<f64>,
    /// Dash pattern `[dash, gap]`; `None` draws a solid line.
    pub dash: Option<[u8; 2]>,
    /// Value axis id.
    pub axis: Option<&'static str>,
    /// Bar corner radius.
    pub border_radius: Option<u8>,
    /// Per-point emphasis, when the chart distinguishes points.
    pub emphasis: Vec<Emphasis>,
}

impl StyleHints {
    /// Creates hints with the given colours and nothing else set.
    #[must_use]
    pub fn colored(colors: Vec<&'static str>) -> Self {
        Self {
            colors,
            fill: None,
            tension: None,
            dash: None,
            axis: None,
            border_radius: None,
            emphasis: Vec::new(),
        }
    }
}

/// One named sequence of values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// Legend name.
    pub name: String,
    /// One value per label.
    pub values: Vec<f64>,
    /// Style hints.
    pub style: StyleHints,
}

/// Tooltip text computed ahead of drawing, indexed like the labels.
///
/// Empty vectors mean the client's default tooltip.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Tooltip {
    /// Replacement label line per data point.
    pub labels: Vec<String>,
    /// Extra line below the label per data point.
    pub after_labels: Vec<String>,
}

/// Where an overlay is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Centre of the drawn plot area, recomputed on every draw.
    ChartAreaCenter,
}

/// Text drawn in the middle of a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CenterOverlay {
    /// Large headline value.
    pub value: String,
    /// Small caption below the value.
    pub caption: String,
    /// Anchor.
    pub anchor: Anchor,
    /// Headline colour.
    pub color: &'static str,
}

/// A renderable chart description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    /// Which chart this is.
    pub kind: ChartKind,
    /// Mount point the chart draws into.
    pub mount: MountPoint,
    /// Drawing primitive.
    pub draw: DrawType,
    /// Bar direction.
    pub orientation: Orientation,
    /// Category labels.
    pub labels: Vec<String>,
    /// Data series.
    pub series: Vec<Series>,
    /// Axes; empty for charts without axes.
    pub axes: Vec<Axis>,
    /// Legend placement.
    pub legend: Legend,
    /// Precomputed tooltip text.
    pub tooltip: Tooltip,
    /// Ring cutout in percent, for doughnuts.
    pub cutout: Option<u8>,
    /// Centre overlay, for doughnuts.
    pub overlay: Option<CenterOverlay>,
}

/// Builds the spec for `kind`.
#[must_use]
pub fn build(kind: ChartKind, dataset: &Dataset, subject_region: &str) -> ChartSpec {
    match kind {
        ChartKind::Trend => trend::build(dataset),
        ChartKind::Comparison => comparison::build(dataset, subject_region),
        ChartKind::Support => support::build(dataset),
        ChartKind::Wongok => wongok::build(dataset),
        ChartKind::Budget => budget::build(dataset),
    }
}

/// Builds and draws one chart, or skips it if its mount point is absent.
pub fn render_chart(
    surface: &mut dyn RenderSurface,
    kind: ChartKind,
    dataset: &Dataset,
    subject_region: &str,
) -> RenderStatus {
    let mount = kind.mount();
    if !surface.has_mount(mount) {
        debug!(mount = mount.id(), "mount point absent; chart skipped");
        return RenderStatus::SkippedMissingMount;
    }
    surface.draw_chart(build(kind, dataset, subject_region));
    RenderStatus::Rendered
}

/// Formats a count with thousands separators (`18014` → `18,014`).
#[must_use]
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::surface::PageSurface;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(2144), "2,144");
        assert_eq!(format_count(18014), "18,014");
        assert_eq!(format_count(7_284_000_000), "7,284,000,000");
    }

    #[test]
    fn every_builder_is_deterministic() {
        let dataset = Dataset::fallback();
        for kind in ChartKind::ALL {
            let first = build(kind, dataset, audit_dataset::SUBJECT_REGION);
            let second = build(kind, dataset, audit_dataset::SUBJECT_REGION);
            assert_eq!(first, second, "{:?} differs between runs", kind);
            let a = serde_json::to_string(&first).expect("serialize to JSON");
            let b = serde_json::to_string(&second).expect("serialize to JSON");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn every_spec_targets_its_mount() {
        let dataset = Dataset::fallback();
        for kind in ChartKind::ALL {
            let spec = build(kind, dataset, audit_dataset::SUBJECT_REGION);
            assert_eq!(spec.kind, kind);
            assert_eq!(spec.mount, kind.mount());
            for series in &spec.series {
                assert_eq!(series.values.len(), spec.labels.len());
            }
        }
    }

    #[test]
    fn missing_mount_skips_only_that_chart() {
        let dataset = Dataset::fallback();
        let mut full = PageSurface::full();
        let mut partial = PageSurface::without(&[MountPoint::SupportChart]);
        for kind in ChartKind::ALL {
            render_chart(&mut full, kind, dataset, audit_dataset::SUBJECT_REGION);
            let status = render_chart(&mut partial, kind, dataset, audit_dataset::SUBJECT_REGION);
            let expected = if kind == ChartKind::Support {
                RenderStatus::SkippedMissingMount
            } else {
                RenderStatus::Rendered
            };
            assert_eq!(status, expected);
        }
        let others: Vec<&ChartSpec> = full
            .charts()
            .iter()
            .filter(|c| c.kind != ChartKind::Support)
            .collect();
        let partial_charts: Vec<&ChartSpec> = partial.charts().iter().collect();
        assert_eq!(others, partial_charts);
    }
}
