//! `summary`: one aggregation pass, printed as text or JSON.

use crate::source;
use ufo_data::{AggregationConfig, DerivedDatasets, FilterState};

pub async fn run_summary(data: &str, filter: &FilterState, json: bool) -> anyhow::Result<()> {
    let dataset = source::load_dataset(data).await?;
    let derived = DerivedDatasets::compute(dataset.records(), filter, &AggregationConfig::default());
    if json {
        println!("{}", serde_json::to_string_pretty(&derived)?);
    } else {
        print!("{}", format_summary(filter, &derived));
    }
    Ok(())
}

pub fn format_summary(filter: &FilterState, derived: &DerivedDatasets) -> String {
    let per_year = derived
        .time_series
        .iter()
        .map(|r| format!("{}={}", r.year, r.count))
        .collect::<Vec<_>>()
        .join(", ");
    let states = derived
        .state_bar
        .iter()
        .map(|r| format!("{}={}", r.state, r.count))
        .collect::<Vec<_>>()
        .join(", ");
    let shapes = derived
        .shape_donut
        .iter()
        .map(|r| format!("{}={}", r.shape, r.count))
        .collect::<Vec<_>>()
        .join(", ");
    let bins = match &derived.histogram {
        Some(bins) => bins
            .iter()
            .map(|b| format!("[{:.1}, {:.1})={}", b.start, b.end, b.count))
            .collect::<Vec<_>>()
            .join(", "),
        None => "none".to_string(),
    };

    format!(
        "filter: state={} year={}\n\
         sightings: {}\n\
         per year: {}\n\
         duration bins (minutes): {}\n\
         top states: {}\n\
         top shapes: {}\n",
        filter.state(),
        filter.year(),
        derived.filtered_count,
        per_year,
        bins,
        states,
        shapes
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ufo_data::{Dataset, FilterChange};

    fn sample_dataset() -> Dataset {
        Dataset::from_csv_str(
            "datetime,state,shape,duration (seconds),comments,latitude,longitude\n\
             6/1/1999 21:00,CA,disk,300,First,34.05,-118.24\n\
             7/4/2000 22:30,CA,light,120,Second,37.77,-122.42\n\
             8/9/2000 23:15,NV,light,600,Third,36.17,-115.14\n",
        )
        .unwrap()
    }

    #[test]
    fn text_summary_for_state() {
        let ds = sample_dataset();
        let mut filter = FilterState::new();
        filter.apply(FilterChange::state("CA"));
        let derived = DerivedDatasets::compute(ds.records(), &filter, &AggregationConfig::default());
        let text = format_summary(&filter, &derived);

        assert!(text.starts_with("filter: state=CA year=All\n"));
        assert!(text.contains("sightings: 2\n"));
        assert!(text.contains("per year: 1999=1, 2000=1\n"));
        assert!(text.contains("top states: CA=2, NV=1\n"));
        assert!(text.contains("top shapes: disk=1, light=1\n"));
    }

    #[test]
    fn no_durations_reports_no_bins() {
        let ds = sample_dataset();
        let mut filter = FilterState::new();
        filter.apply(FilterChange::state("TX"));
        let derived = DerivedDatasets::compute(ds.records(), &filter, &AggregationConfig::default());
        let text = format_summary(&filter, &derived);
        assert!(text.contains("sightings: 0\n"));
        assert!(text.contains("duration bins (minutes): none\n"));
        assert!(text.contains("per year: \n"));
    }
}
