//! Duration histogram binning.
//!
//! Durations are converted to minutes, non-positive and non-finite values are
//! discarded, and the remaining range is split into equal-width bins. Bins
//! whose count is at most a fraction (default one tenth) of the tallest bin
//! are dropped so the long tail does not flatten the visible distribution.

use crate::models::HistogramBin;
use crate::record::SightingRecord;
use serde::{Deserialize, Serialize};

/// Bin count used by [`BinRule::default`].
pub const DEFAULT_BIN_COUNT: usize = 20;

/// Upper bound on the number of bins any rule may produce.
pub const MAX_BINS: usize = 1000;

/// How many bins the duration range is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinRule {
    /// A fixed number of equal-width bins.
    Fixed(usize),
    /// `max - min / 20` bins, as computed by the first version of the
    /// dashboard (division binds before subtraction). Kept for comparing
    /// output against that version; it yields far more than 20 bins for
    /// typical data.
    LegacyPrecedence,
}

impl Default for BinRule {
    fn default() -> Self {
        BinRule::Fixed(DEFAULT_BIN_COUNT)
    }
}

impl BinRule {
    /// Number of bins for a value range, clamped to `1..=MAX_BINS`.
    pub fn bin_count(&self, min: f64, max: f64) -> usize {
        match *self {
            BinRule::Fixed(n) => n.clamp(1, MAX_BINS),
            BinRule::LegacyPrecedence => {
                let n = (max - min / 20.0).ceil();
                if n.is_nan() || n < 1.0 {
                    1
                } else if n >= MAX_BINS as f64 {
                    MAX_BINS
                } else {
                    n as usize
                }
            }
        }
    }
}

/// Positive, finite durations in minutes, in record order.
pub fn positive_duration_minutes(records: &[&SightingRecord]) -> Vec<f64> {
    records
        .iter()
        .map(|r| r.duration_seconds() / 60.0)
        .filter(|m| m.is_finite() && *m > 0.0)
        .collect()
}

/// Bin the durations of `records`.
///
/// Returns `None` when no record has a positive duration; the caller clears
/// the chart instead of drawing it. Otherwise returns the bins whose count
/// exceeds `cutoff_ratio` times the tallest bin, in ascending order.
pub fn duration_histogram(
    records: &[&SightingRecord],
    rule: BinRule,
    cutoff_ratio: f64,
) -> Option<Vec<HistogramBin>> {
    let minutes = positive_duration_minutes(records);
    if minutes.is_empty() {
        return None;
    }

    let min = minutes.iter().copied().fold(f64::INFINITY, f64::min);
    let max = minutes.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if rule == BinRule::LegacyPrecedence {
        log::warn!(
            "[UFO] histogram: legacy bin rule gives {} bins for range [{:.2}, {:.2}]",
            rule.bin_count(min, max),
            min,
            max
        );
    }

    let n = if min == max { 1 } else { rule.bin_count(min, max) };
    let width = (max - min) / n as f64;

    let mut counts = vec![0usize; n];
    for m in &minutes {
        let idx = if width > 0.0 {
            ((m - min) / width).floor() as usize
        } else {
            0
        };
        counts[idx.min(n - 1)] += 1;
    }

    let tallest = counts.iter().copied().max().unwrap_or(0);
    let threshold = tallest as f64 * cutoff_ratio;

    let bins: Vec<HistogramBin> = counts
        .iter()
        .enumerate()
        .filter(|(_, count)| **count as f64 > threshold)
        .map(|(i, &count)| {
            let start = min + i as f64 * width;
            let end = if i == n - 1 {
                max
            } else {
                min + (i + 1) as f64 * width
            };
            HistogramBin {
                start,
                end,
                center: (start + end) / 2.0,
                count,
            }
        })
        .collect();

    log::debug!(
        "[UFO] histogram: {} durations, {} of {} bins kept",
        minutes.len(),
        bins.len(),
        n
    );
    Some(bins)
}
