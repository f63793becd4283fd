//! Render pipeline: load, validate, verify citations, draw, fill markup.

use std::collections::BTreeMap;

use audit_dataset::{CitationRegistry, Dataset};
use tracing::{info, info_span};

use crate::cards::{render_perception_cards, render_timeline};
use crate::charts::{render_chart, ChartKind};
use crate::citation::CitationOverlay;
use crate::error::PipelineError;
use crate::model;
use crate::provider::{DatasetOrigin, DatasetProvider, LoadedDataset};
use crate::surface::{MountPoint, PageSurface, RenderStatus};

/// Result of a successful render pass.
#[derive(Debug, Clone)]
pub struct RenderOutcome {
    /// The dataset that was rendered.
    pub dataset: Dataset,
    /// Where it came from.
    pub origin: DatasetOrigin,
    /// Surface holding the drawn charts and markup.
    pub surface: PageSurface,
    /// Status of each render step, keyed by target mount.
    pub statuses: BTreeMap<MountPoint, RenderStatus>,
}

impl RenderOutcome {
    /// Returns the mounts that were skipped because they are absent.
    pub fn skipped(&self) -> impl Iterator<Item = MountPoint> + '_ {
        self.statuses
            .iter()
            .filter(|(_, status)| **status == RenderStatus::SkippedMissingMount)
            .map(|(mount, _)| *mount)
    }
}

/// Sequences one render pass.
#[derive(Debug, Clone)]
pub struct Orchestrator<'r> {
    registry: &'r CitationRegistry,
    subject_region: String,
}

impl<'r> Orchestrator<'r> {
    /// Creates an orchestrator over `registry`, highlighting `subject_region`.
    #[must_use]
    pub fn new(registry: &'r CitationRegistry, subject_region: impl Into<String>) -> Self {
        Self {
            registry,
            subject_region: subject_region.into(),
        }
    }

    /// Loads the dataset from `provider` and renders it onto `surface`.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::render`].
    pub async fn run(
        &self,
        provider: &DatasetProvider,
        surface: PageSurface,
    ) -> Result<RenderOutcome, PipelineError> {
        let loaded = provider.load().await;
        self.render(loaded, surface)
    }

    /// Renders an already loaded dataset onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::InvalidDataset`] listing every broken
    /// invariant, or [`PipelineError::UnresolvedCitations`] if a page
    /// affordance names an unregistered key. Nothing is drawn in either case.
    pub fn render(
        &self,
        loaded: LoadedDataset,
        mut surface: PageSurface,
    ) -> Result<RenderOutcome, PipelineError> {
        let LoadedDataset { dataset, origin } = loaded;
        let _span = info_span!("render", origin = %origin).entered();

        if let Err(source) = dataset.validate() {
            return Err(PipelineError::InvalidDataset { origin, source });
        }
        self.registry.verify_keys(model::affordance_keys())?;

        let mut statuses = BTreeMap::new();
        let mut overlay = CitationOverlay::new(self.registry);
        statuses.insert(MountPoint::SourceModal, overlay.close(&mut surface));

        for kind in ChartKind::ALL {
            let status = render_chart(&mut surface, kind, &dataset, &self.subject_region);
            statuses.insert(kind.mount(), status);
        }
        statuses.insert(
            MountPoint::PerceptionCards,
            render_perception_cards(&mut surface, &dataset.perception),
        );
        statuses.insert(
            MountPoint::PolicyTimeline,
            render_timeline(&mut surface, &dataset.timeline),
        );

        let rendered = statuses
            .values()
            .filter(|s| **s == RenderStatus::Rendered)
            .count();
        info!(
            rendered,
            skipped = statuses.len() - rendered,
            charts = surface.charts().len(),
            "dashboard rendered"
        );

        Ok(RenderOutcome {
            dataset,
            origin,
            surface,
            statuses,
        })
    }
}
