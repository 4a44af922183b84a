//! Per-month summary table as CSV.

use crate::sources::load_state;
use crate::DataSources;
use log::info;
use std::io::Write;
use wqd_data::gauges::{monthly_summaries, MonthlySummary};

/// Write rows with a header line (`month,variable,unit,count,mean,min,max`).
pub fn write_table<W: Write>(rows: &[MonthlySummary], writer: W) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub async fn run_table(sources: &DataSources, output: Option<&str>) -> anyhow::Result<()> {
    let state = load_state(sources).await?;
    let rows = monthly_summaries(&state);

    match output {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            write_table(&rows, file)?;
            info!("Wrote {} summary rows to {}", rows.len(), path);
        }
        None => write_table(&rows, std::io::stdout().lock())?,
    }
    Ok(())
}
