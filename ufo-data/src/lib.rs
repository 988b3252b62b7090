//! Sighting records, filter state and chart aggregations for the UFO
//! sightings dashboard.
//!
//! # Architecture
//!
//! - [`record`]: the `SightingRecord` model and CSV loader
//! - [`Dataset`]: the loaded records behind an `Arc`, never mutated
//! - [`filter`]: `FilterState` (state + year selections), selector options,
//!   and the three filtered views a render pass draws from
//! - [`aggregate`]: one pure function per chart plus [`DerivedDatasets`]
//! - [`histogram`]: duration binning with the low-frequency cutoff
//! - [`models`]: serializable derived dataset rows
//! - [`states`]: two-letter code → full state name
//!
//! # Usage
//!
//! ```rust
//! use ufo_data::{AggregationConfig, Dataset, DerivedDatasets, FilterChange, FilterState};
//!
//! let ds = Dataset::from_csv_str("\
//! datetime,state,shape,duration (seconds),comments,latitude,longitude
//! 6/1/1999 21:00,CA,disk,300,First,34.05,-118.24
//! 7/4/2000 22:30,CA,light,120,Second,37.77,-122.42
//! 8/9/2000 23:15,NV,light,600,Third,36.17,-115.14
//! ").unwrap();
//!
//! let mut filter = FilterState::new();
//! filter.apply(FilterChange::state("CA"));
//!
//! let derived = DerivedDatasets::compute(ds.records(), &filter, &AggregationConfig::default());
//! assert_eq!(derived.filtered_count, 2);
//! assert_eq!(derived.time_series.len(), 2);
//! ```

pub mod aggregate;
mod dataset;
pub mod filter;
pub mod histogram;
pub mod models;
pub mod record;
pub mod states;

pub use aggregate::{AggregationConfig, DerivedDatasets};
pub use dataset::Dataset;
pub use filter::{FilterChange, FilterOptions, FilterState, FilteredViews, Selection};
pub use record::SightingRecord;
