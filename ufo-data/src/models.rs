//! Derived dataset rows, one struct per chart.
//!
//! All structs derive `Serialize` so they can be handed to the chart
//! renderer as JSON. Field names are the ones the chart descriptions encode.

use serde::Serialize;

/// A map marker. NaN coordinates serialize as `null`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Duration in seconds.
    pub duration: f64,
    pub comments: String,
    /// ISO-8601 UTC timestamp; `None` for the invalid date.
    pub date: Option<String>,
    pub shape: String,
}

/// Sightings per calendar year.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Sightings per state.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StateCount {
    pub state: String,
    pub count: usize,
}

/// Sightings per reported shape.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ShapeCount {
    pub shape: String,
    pub count: usize,
}

/// One histogram bar over the duration-in-minutes axis.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    /// Midpoint of `[start, end]`, the x position of the bar.
    pub center: f64,
    pub count: usize,
}

/// One raw duration value for the violin chart's density transform.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct DurationSample {
    #[serde(rename = "duration (seconds)")]
    pub duration_seconds: f64,
}
