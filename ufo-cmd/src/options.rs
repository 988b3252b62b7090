//! `options`: list the selector choices.

use crate::source;
use ufo_data::FilterOptions;

pub async fn run_options(data: &str) -> anyhow::Result<()> {
    let dataset = source::load_dataset(data).await?;
    print!("{}", format_options(&dataset.options()));
    Ok(())
}

/// One line per selector, choices comma-separated, "All" first.
pub fn format_options(options: &FilterOptions) -> String {
    format!(
        "states: {}\nyears: {}\n",
        options.state_choices().join(", "),
        options.year_choices().join(", ")
    )
}
