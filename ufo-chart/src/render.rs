//! The seam between the dashboard and whatever draws the charts.

use crate::spec::VegaLiteSpec;

/// Draws chart descriptions into named targets.
///
/// Implementations are driven from a single thread, one call at a time, in
/// the order the orchestrator issues them. Each call either applies the
/// update or hands it to something that applies updates in that same order;
/// in the second case the call returns before the target changes. An error
/// from any call aborts the current render pass, and later updates of a pass
/// must not be applied once an earlier one has failed.
pub trait ChartRenderer {
    /// Draw `spec` into `container`, replacing what was there.
    fn render(&mut self, container: &str, spec: &VegaLiteSpec) -> anyhow::Result<()>;

    /// Empty `container`.
    fn clear(&mut self, container: &str) -> anyhow::Result<()>;

    /// Update the text of the filtered-count label.
    fn set_filtered_count(&mut self, label: &str, count: usize) -> anyhow::Result<()>;
}

impl<R: ChartRenderer + ?Sized> ChartRenderer for &mut R {
    fn render(&mut self, container: &str, spec: &VegaLiteSpec) -> anyhow::Result<()> {
        (**self).render(container, spec)
    }

    fn clear(&mut self, container: &str) -> anyhow::Result<()> {
        (**self).clear(container)
    }

    fn set_filtered_count(&mut self, label: &str, count: usize) -> anyhow::Result<()> {
        (**self).set_filtered_count(label, count)
    }
}
