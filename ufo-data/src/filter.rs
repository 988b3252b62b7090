//! Filter state for the two dashboard selectors and the views it produces.
//!
//! `FilterState` is the single source of truth for what is displayed. Its
//! fields are private; the only way to change it is [`FilterState::apply`].

use crate::record::SightingRecord;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Option label meaning "do not filter on this dimension".
pub const WILDCARD: &str = "All";

/// A selector value: the wildcard or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    /// True when `value` passes this selection. A missing value only passes
    /// the wildcard.
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(selected) => value == Some(selected),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(WILDCARD),
            Selection::Only(v) => v.fmt(f),
        }
    }
}

/// Error for a selector value that cannot be interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseSelectionError(pub String);

impl fmt::Display for ParseSelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid selector value: '{}'", self.0)
    }
}

impl std::error::Error for ParseSelectionError {}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == WILDCARD {
            return Ok(Selection::All);
        }
        s.parse::<T>()
            .map(Selection::Only)
            .map_err(|_| ParseSelectionError(s.to_string()))
    }
}

/// A single mutation of the filter state, as emitted by a selector.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterChange {
    State(Selection<String>),
    Year(Selection<i32>),
}

impl FilterChange {
    /// Build a change from the state selector's option value.
    pub fn state(value: &str) -> Self {
        match value {
            WILDCARD => FilterChange::State(Selection::All),
            other => FilterChange::State(Selection::Only(other.to_string())),
        }
    }

    /// Build a change from the year selector's option value.
    pub fn year(value: &str) -> Result<Self, ParseSelectionError> {
        Ok(FilterChange::Year(value.parse()?))
    }
}

/// The active state and year selections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    state: Selection<String>,
    year: Selection<i32>,
}

impl FilterState {
    /// Wildcard on both dimensions.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &Selection<String> {
        &self.state
    }

    pub fn year(&self) -> &Selection<i32> {
        &self.year
    }

    /// Apply a selector change. Returns `true` if the state changed.
    pub fn apply(&mut self, change: FilterChange) -> bool {
        let changed = match change {
            FilterChange::State(sel) if sel != self.state => {
                self.state = sel;
                true
            }
            FilterChange::Year(sel) if sel != self.year => {
                self.year = sel;
                true
            }
            _ => false,
        };
        if changed {
            log::debug!(
                "[UFO] filter: state={} year={}",
                self.state,
                self.year
            );
        }
        changed
    }

    pub fn matches_state(&self, record: &SightingRecord) -> bool {
        self.state.admits(Some(&record.state))
    }

    /// Records with an invalid timestamp only pass the wildcard year.
    pub fn matches_year(&self, record: &SightingRecord) -> bool {
        self.year.admits(record.year().as_ref())
    }

    /// The combined filter: both predicates.
    pub fn matches(&self, record: &SightingRecord) -> bool {
        self.matches_state(record) && self.matches_year(record)
    }
}

/// Values offered by the two selectors, taken from the full dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Distinct states, ascending.
    pub states: Vec<String>,
    /// Distinct valid years, ascending.
    pub years: Vec<i32>,
}

impl FilterOptions {
    pub fn from_records(records: &[SightingRecord]) -> Self {
        let states: BTreeSet<&str> = records.iter().map(|r| r.state.as_str()).collect();
        let years: BTreeSet<i32> = records.iter().filter_map(|r| r.year()).collect();
        Self {
            states: states.into_iter().map(String::from).collect(),
            years: years.into_iter().collect(),
        }
    }

    /// State selector options, wildcard first.
    pub fn state_choices(&self) -> Vec<String> {
        std::iter::once(WILDCARD.to_string())
            .chain(self.states.iter().cloned())
            .collect()
    }

    /// Year selector options, wildcard first.
    pub fn year_choices(&self) -> Vec<String> {
        std::iter::once(WILDCARD.to_string())
            .chain(self.years.iter().map(|y| y.to_string()))
            .collect()
    }
}

/// The three record subsets a render pass draws from.
///
/// Views borrow from the source collection; the source is never touched.
#[derive(Debug, Clone)]
pub struct FilteredViews<'a> {
    /// State and year filters applied.
    pub combined: Vec<&'a SightingRecord>,
    /// Only the state filter applied (time series).
    pub state_only: Vec<&'a SightingRecord>,
    /// Only the year filter applied (state bar).
    pub year_only: Vec<&'a SightingRecord>,
}

impl<'a> FilteredViews<'a> {
    pub fn new(records: &'a [SightingRecord], filter: &FilterState) -> Self {
        let mut combined = Vec::new();
        let mut state_only = Vec::new();
        let mut year_only = Vec::new();
        for record in records {
            let by_state = filter.matches_state(record);
            let by_year = filter.matches_year(record);
            if by_state {
                state_only.push(record);
            }
            if by_year {
                year_only.push(record);
            }
            if by_state && by_year {
                combined.push(record);
            }
        }
        Self {
            combined,
            state_only,
            year_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::parse_sightings_csv;

    fn sample_records() -> Vec<SightingRecord> {
        parse_sightings_csv(
            "\
datetime,state,shape,duration (seconds),comments,latitude,longitude
1/1/1999 12:00,CA,disk,60,a,34.0,-118.2
1/1/2000 12:00,CA,light,60,b,34.0,-118.2
1/1/2000 12:00,NV,light,60,c,36.1,-115.1
bad,NV,light,60,d,36.1,-115.1
",
        )
        .unwrap()
    }

    // ───────────────────── Selection ─────────────────────

    #[test]
    fn selection_parse() {
        assert_eq!("All".parse::<Selection<i32>>().unwrap(), Selection::All);
        assert_eq!(
            "2000".parse::<Selection<i32>>().unwrap(),
            Selection::Only(2000)
        );
        assert_eq!(
            "CA".parse::<Selection<String>>().unwrap(),
            Selection::Only("CA".to_string())
        );
        let err = "twenty".parse::<Selection<i32>>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid selector value: 'twenty'");
    }

    #[test]
    fn selection_display() {
        assert_eq!(Selection::<i32>::All.to_string(), "All");
        assert_eq!(Selection::Only(1999).to_string(), "1999");
    }

    #[test]
    fn selection_admits() {
        assert!(Selection::<i32>::All.admits(None));
        assert!(Selection::Only(2000).admits(Some(&2000)));
        assert!(!Selection::Only(2000).admits(Some(&1999)));
        assert!(!Selection::Only(2000).admits(None));
    }

    // ───────────────────── FilterState ─────────────────────

    #[test]
    fn filter_starts_as_wildcard() {
        let filter = FilterState::new();
        assert!(filter.state().is_all());
        assert!(filter.year().is_all());
        assert!(sample_records().iter().all(|r| filter.matches(r)));
    }

    #[test]
    fn filter_apply_reports_changes() {
        let mut filter = FilterState::new();
        assert!(filter.apply(FilterChange::state("CA")));
        assert!(!filter.apply(FilterChange::state("CA")));
        assert!(filter.apply(FilterChange::year("2000").unwrap()));
        assert_eq!(filter.year(), &Selection::Only(2000));
        assert!(filter.apply(FilterChange::state("All")));
        assert!(filter.state().is_all());
    }

    #[test]
    fn filter_year_excludes_invalid_dates() {
        let mut filter = FilterState::new();
        filter.apply(FilterChange::Year(Selection::Only(2000)));
        let records = sample_records();
        let passing: Vec<_> = records.iter().filter(|r| filter.matches(r)).collect();
        assert_eq!(passing.len(), 2);
        assert!(!filter.matches_year(&records[3]));
    }

    #[test]
    fn filter_bad_year_value_is_rejected() {
        assert!(FilterChange::year("19x9").is_err());
    }

    // ───────────────────── FilterOptions ─────────────────────

    #[test]
    fn options_are_distinct_and_sorted() {
        let options = FilterOptions::from_records(&sample_records());
        assert_eq!(options.states, vec!["CA", "NV"]);
        assert_eq!(options.years, vec![1999, 2000]);
        assert_eq!(options.state_choices(), vec!["All", "CA", "NV"]);
        assert_eq!(options.year_choices(), vec!["All", "1999", "2000"]);
    }

    // ───────────────────── FilteredViews ─────────────────────

    #[test]
    fn views_apply_each_dimension_independently() {
        let records = sample_records();
        let mut filter = FilterState::new();
        filter.apply(FilterChange::state("CA"));
        filter.apply(FilterChange::year("2000").unwrap());

        let views = FilteredViews::new(&records, &filter);
        assert_eq!(views.combined.len(), 1);
        assert_eq!(views.state_only.len(), 2);
        assert_eq!(views.year_only.len(), 2);
        assert_eq!(records.len(), 4, "source collection is untouched");
    }

    #[test]
    fn views_with_wildcards_cover_everything() {
        let records = sample_records();
        let views = FilteredViews::new(&records, &FilterState::new());
        assert_eq!(views.combined.len(), 4);
        assert_eq!(views.state_only.len(), 4);
        assert_eq!(views.year_only.len(), 4);
    }
}
