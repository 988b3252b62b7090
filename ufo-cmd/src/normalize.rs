//! `normalize-states`: rewrite the `state` column with full state names.
//!
//! Unknown values are kept as they are. The output starts with a UTF-8 BOM
//! so spreadsheet tools pick the right encoding; the loader strips it.

use anyhow::Context;
use log::info;
use ufo_data::record::COL_STATE;
use ufo_data::states::normalize_state;

const BOM: &str = "\u{feff}";

/// Normalize the `state` column of `csv_data`, returning the new CSV text.
pub fn normalize_states_csv(csv_data: &str) -> anyhow::Result<String> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.trim_start_matches(BOM).as_bytes());

    let headers = rdr.headers()?.clone();
    let state_idx = headers
        .iter()
        .position(|h| h.trim() == COL_STATE)
        .with_context(|| format!("missing '{}' column", COL_STATE))?;

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(&headers)?;

    let mut rows = 0usize;
    let mut renamed = 0usize;
    for result in rdr.records() {
        let record = result?;
        let fields: Vec<String> = record
            .iter()
            .enumerate()
            .map(|(i, field)| {
                if i == state_idx {
                    let full = normalize_state(field);
                    if full != field {
                        renamed += 1;
                    }
                    full
                } else {
                    field.to_string()
                }
            })
            .collect();
        wtr.write_record(&fields)?;
        rows += 1;
    }

    info!("[UFO] normalize: {} rows, {} state codes expanded", rows, renamed);
    let body = String::from_utf8(wtr.into_inner()?)?;
    Ok(format!("{}{}", BOM, body))
}

pub async fn run_normalize(input: &str, output: &str) -> anyhow::Result<()> {
    let csv_data = tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read {}", input))?;
    let normalized = normalize_states_csv(&csv_data)?;
    tokio::fs::write(output, normalized)
        .await
        .with_context(|| format!("failed to write {}", output))?;
    info!("[UFO] normalize: wrote {}", output);
    Ok(())
}
