//! Dashboard configuration.
//!
//! Every field has a default; a JSON file only needs the keys it overrides:
//!
//! ```json
//! { "show_duration_violin": true, "aggregation": { "state_bar_limit": 15 } }
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use ufo_data::AggregationConfig;

/// Default URL of the US states TopoJSON base layer.
pub const DEFAULT_BASE_MAP_URL: &str = "data/us-10m.json";

/// DOM ids (or file stems, for the file renderer) of each chart target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerIds {
    pub map: String,
    pub time_series: String,
    pub duration_histogram: String,
    pub state_bar: String,
    pub shape_donut: String,
    pub duration_violin: String,
    /// Text element showing the filtered record count.
    pub filtered_count: String,
}

impl Default for ContainerIds {
    fn default() -> Self {
        Self {
            map: "worldmap".to_string(),
            time_series: "timeseries".to_string(),
            duration_histogram: "duration-hist".to_string(),
            state_bar: "state-bar".to_string(),
            shape_donut: "shape-donut".to_string(),
            duration_violin: "duration-violin".to_string(),
            filtered_count: "filtered-count".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub containers: ContainerIds,
    pub base_map_url: String,
    /// Render the duration violin after the shape donut.
    pub show_duration_violin: bool,
    pub aggregation: AggregationConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            containers: ContainerIds::default(),
            base_map_url: DEFAULT_BASE_MAP_URL.to_string(),
            show_duration_violin: false,
            aggregation: AggregationConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("invalid dashboard configuration")
    }

    /// Load a JSON configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_json_str(&text)
    }
}
