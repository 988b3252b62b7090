//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use ufo_chart::DashboardConfig;
use ufo_data::{Dataset, FilterChange, FilterOptions, FilterState};

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded sightings (None until loaded)
    pub dataset: Signal<Option<Dataset>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Current state and year selections
    pub filter: Signal<FilterState>,
    /// Selector options taken from the full dataset
    pub options: Signal<FilterOptions>,
    pub config: Signal<DashboardConfig>,
}

impl AppState {
    /// Create a new AppState with both selectors on "All".
    pub fn new() -> Self {
        Self {
            dataset: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            filter: Signal::new(FilterState::new()),
            options: Signal::new(FilterOptions::default()),
            config: Signal::new(DashboardConfig::default()),
        }
    }

    /// The single write path for selector changes.
    pub fn apply_filter(&mut self, change: FilterChange) {
        self.filter.write().apply(change);
    }
}
