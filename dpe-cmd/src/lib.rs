//! Command implementations for the precipitation explorer CLI.
//!
//! `fetch` performs the one-time download of both remote datasets and
//! caches them as local wide CSVs; `report` runs the aggregation and
//! correlation pipeline for one selector combination.

use clap::Subcommand;
use dpe_data::duration::Duration;
use dpe_data::metric::Metric;

pub mod config;
pub mod fetch;
pub mod report;

#[derive(Subcommand)]
pub enum Command {
    /// Download both remote datasets and write them as local wide CSVs
    Fetch {
        /// Output path for the WRF hourly grid CSV
        #[arg(short = 'w', long)]
        wrf_csv: String,

        /// Output path for the ACIS daily station CSV
        #[arg(short = 'a', long)]
        acis_csv: String,
    },

    /// Aggregate, correlate, and tabulate one community/duration/metric selection
    Report {
        /// Community name (one of the six study communities)
        #[arg(short, long, default_value = "Fairbanks")]
        community: String,

        /// Duration window, by offset code ("1D") or label ("24-hr")
        #[arg(short, long, default_value = "1D")]
        duration: Duration,

        /// Annual reduction metric: mean or max
        #[arg(short, long, default_value = "max")]
        metric: Metric,

        /// Load the WRF grid from a local CSV instead of the network
        #[arg(long)]
        wrf_csv: Option<String>,

        /// Load the ACIS stations from a local CSV instead of the network
        #[arg(long)]
        acis_csv: Option<String>,

        /// Optional path to write the bar-chart spec as JSON
        #[arg(long)]
        chart_json: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Fetch { wrf_csv, acis_csv } => fetch::run_fetch(&wrf_csv, &acis_csv).await,
        Command::Report {
            community,
            duration,
            metric,
            wrf_csv,
            acis_csv,
            chart_json,
        } => {
            report::run_report(community, duration, metric, wrf_csv, acis_csv, chart_json).await
        }
    }
}
