//! The immutable sighting collection shared by every chart.

use crate::filter::FilterOptions;
use crate::record::{parse_sightings_csv, SightingRecord};
use std::sync::Arc;

/// Loaded sightings, frozen after construction.
///
/// Cheaply cloneable (via `Arc`); every clone observes the same records and
/// nothing can mutate them, so derivations always see one consistent snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[SightingRecord]>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Dataset {
    pub fn new(records: Vec<SightingRecord>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// Load a dataset from CSV text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ufo_data::Dataset;
    ///
    /// let ds = Dataset::from_csv_str(
    ///     "datetime,state,shape,duration (seconds),comments,latitude,longitude\n\
    ///      10/10/1949 20:30,tx,cylinder,2700,Early fall,29.88,-97.94\n",
    /// )
    /// .unwrap();
    /// assert_eq!(ds.len(), 1);
    /// ```
    pub fn from_csv_str(csv_data: &str) -> anyhow::Result<Self> {
        Ok(Self::new(parse_sightings_csv(csv_data)?))
    }

    pub fn records(&self) -> &[SightingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct states and valid years for the selector controls.
    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_records(&self.records)
    }
}
