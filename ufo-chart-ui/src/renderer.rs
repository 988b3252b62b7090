//! The browser `ChartRenderer`.

use crate::js_bridge;
use ufo_chart::{ChartRenderer, VegaLiteSpec};

/// Draws into DOM elements by id through the Vega-Embed render queue.
///
/// Calls return once the task is queued; the queue runs them one after
/// another in the order they were issued. Call [`js_bridge::begin_pass`]
/// before each pass so a failure in the browser drops only that pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct WebRenderer;

impl ChartRenderer for WebRenderer {
    fn render(&mut self, container: &str, spec: &VegaLiteSpec) -> anyhow::Result<()> {
        let spec_json = serde_json::to_string(spec)?;
        js_bridge::render_vega_lite(container, &spec_json)
    }

    fn clear(&mut self, container: &str) -> anyhow::Result<()> {
        js_bridge::clear_container(container)
    }

    fn set_filtered_count(&mut self, label: &str, count: usize) -> anyhow::Result<()> {
        js_bridge::set_text(label, &count.to_string())
    }
}
