//! Sighting records and the CSV loader that produces them.
//!
//! Only the timestamp is interpreted at load time. Numeric columns stay as
//! the raw text from the file and are coerced where a chart needs them, so a
//! malformed cell never drops a row.
//!
//! # CSV Format
//!
//! Header row required. Columns are matched by name and may appear in any
//! order; extra columns (city, country, date posted, ...) are ignored:
//!
//! ```text
//! datetime,city,state,country,shape,duration (seconds),duration (hours/min),comments,date posted,latitude,longitude
//! 10/10/1949 20:30,san marcos,tx,us,cylinder,2700,45 minutes,This event took place in early fall,4/27/2004,29.8830556,-97.9411111
//! ```

use anyhow::Context;
use chrono::NaiveDateTime;
use serde::Serialize;
use ufo_utils::dates;
use ufo_utils::numbers::coerce_number;

pub const COL_DATETIME: &str = "datetime";
pub const COL_STATE: &str = "state";
pub const COL_SHAPE: &str = "shape";
pub const COL_DURATION_SECONDS: &str = "duration (seconds)";
pub const COL_COMMENTS: &str = "comments";
pub const COL_LATITUDE: &str = "latitude";
pub const COL_LONGITUDE: &str = "longitude";

/// A single UFO sighting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SightingRecord {
    /// Parsed `datetime` column; `None` is the invalid date.
    pub timestamp: Option<NaiveDateTime>,
    pub state: String,
    pub shape: String,
    /// Raw `duration (seconds)` cell.
    pub duration_seconds: String,
    pub comments: String,
    /// Raw `latitude` cell.
    pub latitude: String,
    /// Raw `longitude` cell.
    pub longitude: String,
}

impl SightingRecord {
    /// Calendar year of the sighting, `None` when the timestamp is invalid.
    pub fn year(&self) -> Option<i32> {
        dates::year_of(self.timestamp.as_ref())
    }

    /// ISO-8601 UTC form of the timestamp, `None` when invalid.
    pub fn iso_timestamp(&self) -> Option<String> {
        self.timestamp.as_ref().map(dates::format_iso)
    }

    /// Duration in seconds; NaN for non-numeric cells.
    pub fn duration_seconds(&self) -> f64 {
        coerce_number(&self.duration_seconds)
    }

    pub fn latitude(&self) -> f64 {
        coerce_number(&self.latitude)
    }

    pub fn longitude(&self) -> f64 {
        coerce_number(&self.longitude)
    }
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    datetime: usize,
    state: usize,
    shape: usize,
    duration_seconds: usize,
    comments: usize,
    latitude: usize,
    longitude: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &csv::StringRecord) -> anyhow::Result<Self> {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        let find = |name: &str| -> anyhow::Result<usize> {
            names
                .iter()
                .position(|h| *h == name)
                .with_context(|| format!("missing required column '{}'", name))
        };
        Ok(Self {
            datetime: find(COL_DATETIME)?,
            state: find(COL_STATE)?,
            shape: find(COL_SHAPE)?,
            duration_seconds: find(COL_DURATION_SECONDS)?,
            comments: find(COL_COMMENTS)?,
            latitude: find(COL_LATITUDE)?,
            longitude: find(COL_LONGITUDE)?,
        })
    }
}

/// Parse sighting CSV text into records, preserving row order.
pub fn parse_sightings_csv(csv_data: &str) -> anyhow::Result<Vec<SightingRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let columns = ColumnIndex::from_headers(rdr.headers()?)?;

    let mut records = Vec::new();
    let mut invalid_dates = 0u32;
    for (row, result) in rdr.records().enumerate() {
        let r = result.with_context(|| format!("failed to read CSV row {}", row + 1))?;
        let field = |i: usize| r.get(i).unwrap_or("").to_string();

        let timestamp = dates::parse_timestamp(r.get(columns.datetime).unwrap_or(""));
        if timestamp.is_none() {
            invalid_dates += 1;
        }

        records.push(SightingRecord {
            timestamp,
            state: field(columns.state),
            shape: field(columns.shape),
            duration_seconds: field(columns.duration_seconds),
            comments: field(columns.comments),
            latitude: field(columns.latitude),
            longitude: field(columns.longitude),
        });
    }
    log::info!(
        "[UFO] loader: Loaded {} sightings, {} with invalid timestamps",
        records.len(),
        invalid_dates
    );
    Ok(records)
}
