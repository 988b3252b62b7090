//! Per-chart aggregations over filtered sighting views.
//!
//! Every function here is pure: it reads borrowed records and returns a
//! freshly built derived dataset. Grouping keeps keys in first-appearance
//! order and the descending sorts are stable, so tied counts stay in the
//! order their keys were first seen.

use crate::filter::{FilterState, FilteredViews};
use crate::histogram::{duration_histogram, BinRule};
use crate::models::{
    DurationSample, GeoPoint, HistogramBin, ShapeCount, StateCount, YearCount,
};
use crate::record::SightingRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

/// Tunables for the aggregation step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Number of states kept in the state bar chart.
    pub state_bar_limit: usize,
    /// Number of shapes kept in the shape donut.
    pub shape_donut_limit: usize,
    /// Histogram bins at or below this fraction of the tallest bin are dropped.
    pub histogram_cutoff_ratio: f64,
    pub histogram_bins: BinRule,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            state_bar_limit: 20,
            shape_donut_limit: 10,
            histogram_cutoff_ratio: 0.1,
            histogram_bins: BinRule::default(),
        }
    }
}

/// Count records per key, keeping keys in first-appearance order.
/// Records for which `key` returns `None` are skipped.
pub fn count_by<'a, K, F>(records: &[&'a SightingRecord], key: F) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    F: Fn(&'a SightingRecord) -> Option<K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, usize)> = Vec::new();
    for record in records {
        let Some(k) = key(*record) else { continue };
        match index.get(&k) {
            Some(&i) => groups[i].1 += 1,
            None => {
                index.insert(k.clone(), groups.len());
                groups.push((k, 1));
            }
        }
    }
    groups
}

/// Sort groups by descending count (stable) and keep the first `limit`.
fn top_by_count<K>(mut groups: Vec<(K, usize)>, limit: usize) -> Vec<(K, usize)> {
    groups.sort_by(|a, b| b.1.cmp(&a.1));
    groups.truncate(limit);
    groups
}

/// One map marker per record.
pub fn geo_points(records: &[&SightingRecord]) -> Vec<GeoPoint> {
    records
        .iter()
        .map(|r| GeoPoint {
            latitude: r.latitude(),
            longitude: r.longitude(),
            duration: r.duration_seconds(),
            comments: r.comments.clone(),
            date: r.iso_timestamp(),
            shape: r.shape.clone(),
        })
        .collect()
}

/// Sightings per calendar year, ascending. Invalid dates are dropped.
pub fn time_series(records: &[&SightingRecord]) -> Vec<YearCount> {
    let mut by_year = count_by(records, |r| r.year());
    by_year.sort_by_key(|(year, _)| *year);
    by_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

/// The `limit` states with the most sightings, descending.
pub fn state_counts(records: &[&SightingRecord], limit: usize) -> Vec<StateCount> {
    top_by_count(count_by(records, |r| Some(r.state.as_str())), limit)
        .into_iter()
        .map(|(state, count)| StateCount {
            state: state.to_string(),
            count,
        })
        .collect()
}

/// The `limit` most reported shapes, descending. An empty shape is its own
/// category.
pub fn shape_counts(records: &[&SightingRecord], limit: usize) -> Vec<ShapeCount> {
    top_by_count(count_by(records, |r| Some(r.shape.as_str())), limit)
        .into_iter()
        .map(|(shape, count)| ShapeCount {
            shape: shape.to_string(),
            count,
        })
        .collect()
}

/// Raw durations for the renderer's density transform.
pub fn duration_samples(records: &[&SightingRecord]) -> Vec<DurationSample> {
    records
        .iter()
        .map(|r| DurationSample {
            duration_seconds: r.duration_seconds(),
        })
        .collect()
}

/// Every derived dataset for one render pass.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DerivedDatasets {
    /// Size of the combined-filter view.
    pub filtered_count: usize,
    /// Map markers (combined filter).
    pub points: Vec<GeoPoint>,
    /// Sightings per year (state filter only).
    pub time_series: Vec<YearCount>,
    /// Duration bars (combined filter); `None` means clear the chart.
    pub histogram: Option<Vec<HistogramBin>>,
    /// Top states (year filter only).
    pub state_bar: Vec<StateCount>,
    /// Top shapes (combined filter).
    pub shape_donut: Vec<ShapeCount>,
}

impl DerivedDatasets {
    pub fn from_views(views: &FilteredViews<'_>, config: &AggregationConfig) -> Self {
        Self {
            filtered_count: views.combined.len(),
            points: geo_points(&views.combined),
            time_series: time_series(&views.state_only),
            histogram: duration_histogram(
                &views.combined,
                config.histogram_bins,
                config.histogram_cutoff_ratio,
            ),
            state_bar: state_counts(&views.year_only, config.state_bar_limit),
            shape_donut: shape_counts(&views.combined, config.shape_donut_limit),
        }
    }

    /// Filter `records` and aggregate them in one step.
    pub fn compute(
        records: &[SightingRecord],
        filter: &FilterState,
        config: &AggregationConfig,
    ) -> Self {
        Self::from_views(&FilteredViews::new(records, filter), config)
    }
}
