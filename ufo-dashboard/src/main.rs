//! UFO Sightings Dashboard
//!
//! Five linked views over US sighting reports: a map, sightings per year,
//! a duration histogram, the top states and the top shapes. Two selectors
//! (state, year) filter every view.
//!
//! Data flow:
//! 1. `build.rs` copies `ufo_us.csv` into `OUT_DIR`.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed into an immutable `Dataset` and the
//!    selector options are taken from it.
//! 4. Whenever the filter signal changes, `render_all` recomputes the
//!    derived datasets and queues one Vega-Embed render per chart.

use dioxus::prelude::*;
use ufo_chart::render_all;
use ufo_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, FilteredCount, LoadingSpinner, StateSelector,
    YearSelector,
};
use ufo_chart_ui::js_bridge;
use ufo_chart_ui::renderer::WebRenderer;
use ufo_chart_ui::state::AppState;
use ufo_data::Dataset;

/// US sightings, NUFORC layout.
const SIGHTINGS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/ufo_us.csv"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("ufo-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the dataset on mount
    use_effect(move || {
        if let Err(e) = js_bridge::init_charts() {
            log::warn!("[UFO] dashboard: chart scripts not initialized: {}", e);
        }

        match Dataset::from_csv_str(SIGHTINGS_CSV) {
            Ok(dataset) => {
                log::info!("[UFO] dashboard: loaded {} sightings", dataset.len());
                state.options.set(dataset.options());
                state.dataset.set(Some(dataset));
            }
            Err(e) => {
                log::error!("[UFO] dashboard: failed to load sightings: {:#}", e);
                state
                    .error_msg
                    .set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // One render pass per filter change
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        if (state.error_msg)().is_some() {
            return;
        }

        let dataset = match &*state.dataset.read() {
            Some(ds) => ds.clone(),
            None => return,
        };
        let filter = state.filter.read().clone();
        let config = state.config.read().clone();

        if let Err(e) = js_bridge::begin_pass() {
            log::warn!("[UFO] dashboard: render pass not marked: {}", e);
        }
        if let Err(e) = render_all(dataset.records(), &filter, &config, &mut WebRenderer) {
            log::error!("[UFO] dashboard: render pass failed: {:#}", e);
        }
    });

    let config = state.config.read().clone();
    let ids = config.containers;

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "UFO Sightings in the United States".to_string(),
                description: "Reports from the National UFO Reporting Center. Pick a state or a year to filter every chart.".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "margin: 8px 0; display: flex; align-items: center;",
                    StateSelector {}
                    YearSelector {}
                }
                FilteredCount { id: ids.filtered_count.clone() }

                ChartContainer { id: ids.map.clone(), title: "Where".to_string(), min_height: 420 }
                ChartContainer { id: ids.time_series.clone(), title: "Sightings per year".to_string() }
                ChartContainer { id: ids.duration_histogram.clone(), title: "How long (minutes)".to_string() }
                ChartContainer { id: ids.state_bar.clone(), title: "Top states".to_string(), min_height: 420 }
                ChartContainer { id: ids.shape_donut.clone(), title: "Top shapes".to_string() }
                if config.show_duration_violin {
                    ChartContainer { id: ids.duration_violin.clone(), title: "Duration distribution".to_string() }
                }
            }
        }
    }
}
