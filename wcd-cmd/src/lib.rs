//! Command implementations for the WCD CLI.
//!
//! Each subcommand re-reads the source exports, derives one dashboard
//! view model, and prints it as JSON for the map/chart front end. There
//! is no state between invocations; moving the year selector simply
//! runs the pipeline again.

use clap::Subcommand;
use std::path::PathBuf;

pub mod chart;
pub mod forecast;
pub mod map;
pub mod sources;
pub mod summary;

#[derive(Subcommand)]
pub enum Command {
    /// Print the KPI summary for a year
    Summary {
        /// Path to the crayfish observations export
        #[arg(short = 'c', long)]
        crayfish_csv: PathBuf,

        /// Year to summarize (defaults to the latest year in the data)
        #[arg(short = 'y', long)]
        year: Option<i32>,
    },

    /// Print the per-month chart series for a year
    Chart {
        /// Path to the crayfish observations export
        #[arg(short = 'c', long)]
        crayfish_csv: PathBuf,

        /// Year to chart (defaults to the latest year in the data)
        #[arg(short = 'y', long)]
        year: Option<i32>,
    },

    /// Print the combined map view (sightings + water quality)
    Map {
        /// Path to the crayfish observations export
        #[arg(short = 'c', long)]
        crayfish_csv: PathBuf,

        /// Path to the water-quality status export
        #[arg(short = 'q', long)]
        quality_csv: PathBuf,
    },

    /// Print the monthly forecast with uncertainty bands
    Forecast {
        /// Path to the crayfish observations export
        #[arg(short = 'c', long)]
        crayfish_csv: PathBuf,

        /// Window start, YYYY-MM-DD (inclusive)
        #[arg(long, default_value = "2023-01-01")]
        start: String,

        /// Window end, YYYY-MM-DD (inclusive)
        #[arg(long, default_value = "2025-12-31")]
        end: String,

        /// Months to project past the last observation
        #[arg(long, default_value_t = 6)]
        horizon: u32,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Summary { crayfish_csv, year } => summary::run_summary(&crayfish_csv, year),
        Command::Chart { crayfish_csv, year } => chart::run_chart(&crayfish_csv, year),
        Command::Map {
            crayfish_csv,
            quality_csv,
        } => map::run_map(&crayfish_csv, &quality_csv),
        Command::Forecast {
            crayfish_csv,
            start,
            end,
            horizon,
        } => forecast::run_forecast(&crayfish_csv, &start, &end, horizon),
    }
}
