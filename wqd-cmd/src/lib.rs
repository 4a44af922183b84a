//! Command implementations for WQD CLI.
//!
//! Provides subcommands that load the two dashboard datasets (local files or
//! URLs) and print what the dashboard would draw.

use clap::{Args, Subcommand};
use wqd_data::config::{PRECIP_DATA_URL, SENSOR_DATA_URL};

pub mod inspect;
pub mod render;
pub mod sources;
pub mod table;

/// Where to read the two datasets from.
#[derive(Args, Debug, Clone)]
pub struct DataSources {
    /// Sensor readings JSON: local path or http(s) URL
    #[arg(long, default_value = SENSOR_DATA_URL)]
    pub sensor_data: String,

    /// Precipitation JSON: local path or http(s) URL
    #[arg(long, default_value = PRECIP_DATA_URL)]
    pub precip_data: String,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize the datasets: counts, date span, variables and months
    Inspect {
        #[command(flatten)]
        sources: DataSources,
    },

    /// Print the sensor time-series chart spec as JSON
    Series {
        #[command(flatten)]
        sources: DataSources,

        /// Variable to plot (defaults to the first variable in the data)
        #[arg(long, default_value = "")]
        variable: String,
    },

    /// Print the precipitation chart spec as JSON
    Precipitation {
        #[command(flatten)]
        sources: DataSources,
    },

    /// Print the mean/max/min gauge specs for one month as JSON
    Gauges {
        #[command(flatten)]
        sources: DataSources,

        /// Variable to aggregate (defaults to the first variable in the data)
        #[arg(long, default_value = "")]
        variable: String,

        /// Month label exactly as it appears in the sensor data
        #[arg(short = 'm', long)]
        month: String,
    },

    /// Write mean/min/max per month and variable as CSV
    Table {
        #[command(flatten)]
        sources: DataSources,

        /// Output CSV path (stdout when omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Inspect { sources } => inspect::run_inspect(&sources).await,
        Command::Series { sources, variable } => render::run_series(&sources, &variable).await,
        Command::Precipitation { sources } => render::run_precipitation(&sources).await,
        Command::Gauges {
            sources,
            variable,
            month,
        } => render::run_gauges(&sources, &variable, &month).await,
        Command::Table { sources, output } => table::run_table(&sources, output.as_deref()).await,
    }
}
