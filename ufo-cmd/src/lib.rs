//! Command implementations for the UFO CLI.
//!
//! Every command that reads sightings takes `--data`, a file path or an
//! `http(s)://` URL.

use clap::Subcommand;
use ufo_data::{FilterChange, FilterState};

pub mod normalize;
pub mod options;
pub mod render;
pub mod source;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print the state and year selector options
    Options {
        /// Sightings CSV (path or URL)
        #[arg(short, long)]
        data: String,
    },

    /// Run one aggregation pass and print the results
    Summary {
        /// Sightings CSV (path or URL)
        #[arg(short, long)]
        data: String,

        /// State filter ("All" for every state)
        #[arg(short, long)]
        state: Option<String>,

        /// Year filter ("All" for every year)
        #[arg(short, long)]
        year: Option<String>,

        /// Print the full derived datasets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write one Vega-Lite file per chart for the given selection
    Render {
        /// Sightings CSV (path or URL)
        #[arg(short, long)]
        data: String,

        /// Output directory for `<container>.vl.json` files
        #[arg(short, long)]
        out_dir: String,

        #[arg(short, long)]
        state: Option<String>,

        #[arg(short, long)]
        year: Option<String>,

        /// Dashboard configuration JSON
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Rewrite two-letter state codes in a CSV as full state names
    NormalizeStates {
        #[arg(short, long)]
        input: String,

        #[arg(short, long)]
        output: String,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Options { data } => options::run_options(&data).await,
        Command::Summary {
            data,
            state,
            year,
            json,
        } => {
            let filter = filter_from_args(state.as_deref(), year.as_deref())?;
            summary::run_summary(&data, &filter, json).await
        }
        Command::Render {
            data,
            out_dir,
            state,
            year,
            config,
        } => {
            let filter = filter_from_args(state.as_deref(), year.as_deref())?;
            render::run_render(&data, &out_dir, &filter, config.as_deref()).await
        }
        Command::NormalizeStates { input, output } => {
            normalize::run_normalize(&input, &output).await
        }
    }
}

/// Build a filter state from optional `--state` / `--year` values.
pub fn filter_from_args(state: Option<&str>, year: Option<&str>) -> anyhow::Result<FilterState> {
    let mut filter = FilterState::new();
    if let Some(state) = state {
        filter.apply(FilterChange::state(state));
    }
    if let Some(year) = year {
        filter.apply(FilterChange::year(year)?);
    }
    Ok(filter)
}
