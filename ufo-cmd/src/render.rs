//! `render`: run the orchestrator against the filesystem.
//!
//! Each chart becomes `<container>.vl.json` in the output directory, ready
//! for any Vega-Lite viewer. The count label becomes `<label>.txt`.

use crate::source;
use anyhow::Context;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use ufo_chart::{ChartRenderer, Dashboard, DashboardConfig, VegaLiteSpec};
use ufo_data::FilterState;

/// Writes chart descriptions as files named after their container.
pub struct FileRenderer {
    out_dir: PathBuf,
}

impl FileRenderer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn spec_path(&self, container: &str) -> PathBuf {
        self.out_dir.join(format!("{}.vl.json", container))
    }

    pub fn label_path(&self, label: &str) -> PathBuf {
        self.out_dir.join(format!("{}.txt", label))
    }
}

impl ChartRenderer for FileRenderer {
    fn render(&mut self, container: &str, spec: &VegaLiteSpec) -> anyhow::Result<()> {
        let path = self.spec_path(container);
        let json = serde_json::to_string_pretty(spec)?;
        fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))
    }

    fn clear(&mut self, container: &str) -> anyhow::Result<()> {
        let path = self.spec_path(container);
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("failed to remove {}", path.display()))?;
        }
        Ok(())
    }

    fn set_filtered_count(&mut self, label: &str, count: usize) -> anyhow::Result<()> {
        let path = self.label_path(label);
        fs::write(&path, format!("{}\n", count))
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

pub async fn run_render(
    data: &str,
    out_dir: &str,
    filter: &FilterState,
    config_path: Option<&str>,
) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => DashboardConfig::load(Path::new(path))?,
        None => DashboardConfig::default(),
    };
    let dataset = source::load_dataset(data).await?;

    fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir))?;
    let mut dashboard =
        Dashboard::with_filter(dataset, filter.clone(), config, FileRenderer::new(out_dir));
    let derived = dashboard.refresh()?;

    info!(
        "[UFO] render: {} sightings, charts written to {}",
        derived.filtered_count, out_dir
    );
    Ok(())
}
