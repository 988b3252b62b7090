//! Render orchestration.
//!
//! [`render_all`] is one full pass: filter, aggregate, then draw every chart
//! in a fixed order. [`Dashboard`] owns the filter state and serializes
//! filter changes so each pass completes before the next begins.

use crate::builders;
use crate::config::DashboardConfig;
use crate::render::ChartRenderer;
use std::collections::VecDeque;
use ufo_data::aggregate::duration_samples;
use ufo_data::{
    Dataset, DerivedDatasets, FilterChange, FilterState, FilteredViews, SightingRecord,
};

/// Run one render pass over `records` with the current `filter`.
///
/// Order: count label (point count), map, time series, duration histogram
/// (cleared when there are no positive durations), state bar, shape donut,
/// the optional violin, then the count label again with the combined-filter
/// count. The first failing renderer call aborts the pass.
pub fn render_all<R: ChartRenderer + ?Sized>(
    records: &[SightingRecord],
    filter: &FilterState,
    config: &DashboardConfig,
    renderer: &mut R,
) -> anyhow::Result<DerivedDatasets> {
    let views = FilteredViews::new(records, filter);
    let derived = DerivedDatasets::from_views(&views, &config.aggregation);
    let ids = &config.containers;

    renderer.set_filtered_count(&ids.filtered_count, derived.points.len())?;

    renderer.render(
        &ids.map,
        &builders::map_spec(&derived.points, &config.base_map_url)?,
    )?;
    renderer.render(
        &ids.time_series,
        &builders::time_series_spec(&derived.time_series)?,
    )?;
    match &derived.histogram {
        Some(bins) => renderer.render(&ids.duration_histogram, &builders::histogram_spec(bins)?)?,
        None => renderer.clear(&ids.duration_histogram)?,
    }
    renderer.render(&ids.state_bar, &builders::state_bar_spec(&derived.state_bar)?)?;
    renderer.render(
        &ids.shape_donut,
        &builders::shape_donut_spec(&derived.shape_donut)?,
    )?;
    if config.show_duration_violin {
        renderer.render(
            &ids.duration_violin,
            &builders::duration_violin_spec(&duration_samples(&views.combined))?,
        )?;
    }

    renderer.set_filtered_count(&ids.filtered_count, derived.filtered_count)?;

    log::info!(
        "[UFO] orchestrator: rendered state={} year={} ({} of {} sightings)",
        filter.state(),
        filter.year(),
        derived.filtered_count,
        records.len()
    );
    Ok(derived)
}

/// A dashboard session: one dataset, one filter state, one renderer.
pub struct Dashboard<R> {
    dataset: Dataset,
    filter: FilterState,
    config: DashboardConfig,
    renderer: R,
    pending: VecDeque<FilterChange>,
}

impl<R: ChartRenderer> Dashboard<R> {
    /// Start a session with both filters on the wildcard.
    pub fn new(dataset: Dataset, config: DashboardConfig, renderer: R) -> Self {
        Self::with_filter(dataset, FilterState::new(), config, renderer)
    }

    /// Start a session from an existing selection.
    pub fn with_filter(
        dataset: Dataset,
        filter: FilterState,
        config: DashboardConfig,
        renderer: R,
    ) -> Self {
        Self {
            dataset,
            filter,
            config,
            renderer,
            pending: VecDeque::new(),
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Render with the current filter state.
    pub fn refresh(&mut self) -> anyhow::Result<DerivedDatasets> {
        render_all(
            self.dataset.records(),
            &self.filter,
            &self.config,
            &mut self.renderer,
        )
    }

    /// Queue a filter change to be applied by [`run_pending`](Self::run_pending).
    pub fn submit(&mut self, change: FilterChange) {
        self.pending.push_back(change);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Apply queued changes in arrival order, one full render pass each.
    ///
    /// Returns the number of passes run. On error the failing change has
    /// been applied and later changes stay queued.
    pub fn run_pending(&mut self) -> anyhow::Result<usize> {
        let mut passes = 0;
        while let Some(change) = self.pending.pop_front() {
            if !self.filter.apply(change) {
                log::debug!("[UFO] orchestrator: selection unchanged, re-rendering anyway");
            }
            self.refresh()?;
            passes += 1;
        }
        Ok(passes)
    }

    /// Apply one change after anything already queued, and render.
    pub fn update(&mut self, change: FilterChange) -> anyhow::Result<DerivedDatasets> {
        self.run_pending()?;
        self.filter.apply(change);
        self.refresh()
    }
}
