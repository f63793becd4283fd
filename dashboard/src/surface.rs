//! Render surface contract.
//!
//! The pipeline never touches a document directly. It asks a [`RenderSurface`]
//! whether a named mount point exists and hands it chart specs and markup.
//! Redraw-on-resize, animation, and overlay placement belong to the surface.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::charts::ChartSpec;

/// A named element on the dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MountPoint {
    /// Foreign population trend chart.
    TrendChart,
    /// Regional comparison chart.
    ComparisonChart,
    /// Subsidy support chart.
    SupportChart,
    /// Wongok-dong donut chart.
    WongokChart,
    /// Budget chart.
    BudgetChart,
    /// Perception vs. reality cards.
    PerceptionCards,
    /// Policy timeline.
    PolicyTimeline,
    /// Citation overlay container.
    SourceModal,
    /// Citation overlay title.
    ModalTitle,
    /// Citation overlay body.
    ModalBody,
}

impl MountPoint {
    /// Every mount point, in page order.
    pub const ALL: [MountPoint; 10] = [
        MountPoint::TrendChart,
        MountPoint::ComparisonChart,
        MountPoint::SupportChart,
        MountPoint::WongokChart,
        MountPoint::BudgetChart,
        MountPoint::PerceptionCards,
        MountPoint::PolicyTimeline,
        MountPoint::SourceModal,
        MountPoint::ModalTitle,
        MountPoint::ModalBody,
    ];

    /// Returns the element id on the page.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            MountPoint::TrendChart => "trend-chart",
            MountPoint::ComparisonChart => "comparison-chart",
            MountPoint::SupportChart => "support-chart",
            MountPoint::WongokChart => "wongok-chart",
            MountPoint::BudgetChart => "budget-chart",
            MountPoint::PerceptionCards => "perception-cards",
            MountPoint::PolicyTimeline => "policy-timeline",
            MountPoint::SourceModal => "source-modal",
            MountPoint::ModalTitle => "modal-title",
            MountPoint::ModalBody => "modal-body",
        }
    }
}

/// Outcome of one render step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStatus {
    /// Output was handed to the surface.
    Rendered,
    /// The target mount point does not exist; nothing was produced.
    SkippedMissingMount,
}

/// Host document the pipeline renders into.
pub trait RenderSurface {
    /// Returns true if `mount` exists on the surface.
    fn has_mount(&self, mount: MountPoint) -> bool;

    /// Draws a chart into its mount point.
    fn draw_chart(&mut self, spec: ChartSpec);

    /// Replaces the markup inside `mount`.
    fn set_markup(&mut self, mount: MountPoint, html: String);

    /// Shows or hides `mount`.
    fn set_visible(&mut self, mount: MountPoint, visible: bool);
}

/// In-memory surface backing the generated static page.
#[derive(Debug, Clone, Default)]
pub struct PageSurface {
    mounts: BTreeSet<MountPoint>,
    charts: Vec<ChartSpec>,
    markup: BTreeMap<MountPoint, String>,
    visible: BTreeSet<MountPoint>,
}

impl PageSurface {
    /// Creates a surface exposing every mount point.
    #[must_use]
    pub fn full() -> Self {
        Self::with_mounts(MountPoint::ALL)
    }

    /// Creates a surface exposing only `mounts`.
    #[must_use]
    pub fn with_mounts(mounts: impl IntoIterator<Item = MountPoint>) -> Self {
        let mounts: BTreeSet<MountPoint> = mounts.into_iter().collect();
        let visible = mounts.clone();
        Self {
            mounts,
            charts: Vec::new(),
            markup: BTreeMap::new(),
            visible,
        }
    }

    /// Creates a surface exposing every mount point except `omit`.
    #[must_use]
    pub fn without(omit: &[MountPoint]) -> Self {
        Self::with_mounts(MountPoint::ALL.into_iter().filter(|m| !omit.contains(m)))
    }

    /// Returns the drawn charts in draw order.
    #[must_use]
    pub fn charts(&self) -> &[ChartSpec] {
        &self.charts
    }

    /// Returns the markup set on `mount`, if any.
    #[must_use]
    pub fn markup(&self, mount: MountPoint) -> Option<&str> {
        self.markup.get(&mount).map(String::as_str)
    }

    /// Returns true if `mount` exists and is visible.
    #[must_use]
    pub fn is_visible(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount) && self.visible.contains(&mount)
    }
}

impl RenderSurface for PageSurface {
    fn has_mount(&self, mount: MountPoint) -> bool {
        self.mounts.contains(&mount)
    }

    fn draw_chart(&mut self, spec: ChartSpec) {
        if !self.mounts.contains(&spec.mount) {
            return;
        }
        // a redraw replaces the previous chart in the same mount
        self.charts.retain(|c| c.mount != spec.mount);
        self.charts.push(spec);
    }

    fn set_markup(&mut self, mount: MountPoint, html: String) {
        if self.mounts.contains(&mount) {
            self.markup.insert(mount, html);
        }
    }

    fn set_visible(&mut self, mount: MountPoint, visible: bool) {
        if !self.mounts.contains(&mount) {
            return;
        }
        if visible {
            self.visible.insert(mount);
        } else {
            self.visible.remove(&mount);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn mount_ids_unique() {
        let mut ids = std::collections::HashSet::new();
        for mount in MountPoint::ALL {
            assert!(ids.insert(mount.id()), "Duplicate mount id: {}", mount.id());
        }
    }

    #[test]
    fn serde_name_matches_id() {
        for mount in MountPoint::ALL {
            let json = serde_json::to_string(&mount).expect("serialize to JSON");
            assert_eq!(json, format!("\"{}\"", mount.id()));
        }
    }

    #[test]
    fn without_drops_omitted_mounts() {
        let surface = PageSurface::without(&[MountPoint::BudgetChart]);
        assert!(!surface.has_mount(MountPoint::BudgetChart));
        assert!(surface.has_mount(MountPoint::TrendChart));
    }

    #[test]
    fn markup_on_missing_mount_is_dropped() {
        let mut surface = PageSurface::with_mounts([MountPoint::PolicyTimeline]);
        surface.set_markup(MountPoint::PerceptionCards, "<p>x</p>".to_string());
        assert!(surface.markup(MountPoint::PerceptionCards).is_none());
    }

    #[test]
    fn visibility_toggles() {
        let mut surface = PageSurface::full();
        surface.set_visible(MountPoint::SourceModal, false);
        assert!(!surface.is_visible(MountPoint::SourceModal));
        surface.set_visible(MountPoint::SourceModal, true);
        assert!(surface.is_visible(MountPoint::SourceModal));
    }
}
