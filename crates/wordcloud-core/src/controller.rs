//! Tab and resize controller
//!
//! Owns all session state: both datasets, the active tab, the last computed
//! dimensions, and the render generation. Every tab click or resize produces
//! a [`RenderRequest`]; layouts run detached from the event that caused
//! them, and a finished layout is only turned into a [`Scene`] if no newer
//! request has been issued since. The most recently requested render always
//! wins, however the layouts complete.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::CloudConfig;
use crate::dataset::Datasets;
use crate::error::{Error, Result};
use crate::invoker::LayoutPlan;
use crate::layout::TextMeasure;
use crate::record::{DatasetKind, PlacedWord, WordRecord};
use crate::scene::Scene;
use crate::viewport::{ViewDimensions, Viewport};

/// Snapshot of one dataset, sized and ready to pack
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub generation: u64,
    pub plan: LayoutPlan,
    pub words: Vec<WordRecord>,
}

impl RenderRequest {
    /// Runs the packer for this request
    pub fn execute<M, R>(self, measure: &M, rng: &mut R) -> LayoutOutcome
    where
        M: TextMeasure + ?Sized,
        R: Rng + ?Sized,
    {
        let placed = self.plan.run(&self.words, measure, rng);
        LayoutOutcome {
            generation: self.generation,
            plan: self.plan,
            placed,
        }
    }
}

/// Result of a finished layout, tagged with the generation that asked for it
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutOutcome {
    pub generation: u64,
    pub plan: LayoutPlan,
    pub placed: Vec<PlacedWord>,
}

/// Visual state of one tab button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState {
    pub kind: DatasetKind,
    pub active: bool,
    pub disabled: bool,
}

/// Session state for the word cloud
#[derive(Debug, Clone)]
pub struct CloudController {
    config: CloudConfig,
    datasets: Option<Datasets>,
    active: DatasetKind,
    generation: u64,
    dimensions: Option<ViewDimensions>,
}

impl CloudController {
    #[must_use]
    pub fn new(config: CloudConfig) -> Self {
        Self {
            config,
            datasets: None,
            active: DatasetKind::Slang,
            generation: 0,
            dimensions: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &CloudConfig {
        &self.config
    }

    #[must_use]
    pub const fn datasets(&self) -> Option<&Datasets> {
        self.datasets.as_ref()
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.datasets.is_some()
    }

    #[must_use]
    pub const fn active(&self) -> DatasetKind {
        self.active
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Dimensions computed by the most recent render request
    #[must_use]
    pub const fn dimensions(&self) -> Option<ViewDimensions> {
        self.dimensions
    }

    /// Value for the tab group's `data-active-tab` attribute
    #[must_use]
    pub const fn active_tab_attr(&self) -> &'static str {
        self.active.as_str()
    }

    /// Exactly one tab is active, and the active tab is disabled
    #[must_use]
    pub fn tabs(&self) -> [TabState; 2] {
        DatasetKind::ALL.map(|kind| TabState {
            kind,
            active: kind == self.active,
            disabled: kind == self.active,
        })
    }

    /// Stores freshly loaded datasets and requests the initial slang render.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AlreadyLoaded`] if datasets were already stored;
    /// loading happens once per session.
    pub fn on_loaded<R: Rng + ?Sized>(
        &mut self,
        datasets: Datasets,
        viewport: Viewport,
        rng: &mut R,
    ) -> Result<Option<RenderRequest>> {
        if self.datasets.is_some() {
            return Err(Error::AlreadyLoaded);
        }
        self.datasets = Some(datasets);
        Ok(self.request(DatasetKind::Slang, viewport, rng))
    }

    /// A tab was clicked
    pub fn select_tab<R: Rng + ?Sized>(
        &mut self,
        kind: DatasetKind,
        viewport: Viewport,
        rng: &mut R,
    ) -> Option<RenderRequest> {
        self.request(kind, viewport, rng)
    }

    /// The window was resized; replays the active tab
    pub fn on_resize<R: Rng + ?Sized>(&mut self, viewport: Viewport, rng: &mut R) -> Option<RenderRequest> {
        self.request(self.active, viewport, rng)
    }

    /// True if `generation` is the latest request issued
    #[must_use]
    pub const fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Turns a finished layout into a scene, unless a newer request exists
    pub fn complete<R: Rng + ?Sized>(&self, outcome: LayoutOutcome, rng: &mut R) -> Option<Scene> {
        if !self.is_current(outcome.generation) {
            debug!(
                stale = outcome.generation,
                current = self.generation,
                "Discarding stale layout"
            );
            return None;
        }
        Some(Scene::build(
            outcome.placed,
            &outcome.plan,
            &self.config,
            outcome.generation,
            rng,
        ))
    }

    fn request<R: Rng + ?Sized>(
        &mut self,
        kind: DatasetKind,
        viewport: Viewport,
        rng: &mut R,
    ) -> Option<RenderRequest> {
        let Some(datasets) = self.datasets.as_mut().filter(|d| !d.is_incomplete()) else {
            warn!(dataset = %kind, "Data not loaded yet!");
            return None;
        };

        self.active = kind;
        self.generation = self.generation.saturating_add(1);

        let plan = LayoutPlan::new(kind, viewport);
        self.dimensions = Some(plan.dimensions);

        let records = datasets.get_mut(kind);
        plan.assign_sizes(records, rng);
        info!(
            generation = self.generation,
            dataset = %kind,
            width = plan.dimensions.width,
            height = plan.dimensions.height,
            "Render requested"
        );

        Some(RenderRequest {
            generation: self.generation,
            words: records.to_vec(),
            plan,
        })
    }
}
