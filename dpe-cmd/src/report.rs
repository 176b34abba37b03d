//! One-shot report for a single selector combination.
//!
//! This is the same pipeline a hosted dashboard session re-runs on every
//! dropdown change; invalid selector values never get past clap.

use crate::config::AppConfig;
use crate::fetch;
use anyhow::Context;
use dpe_data::duration::Duration;
use dpe_data::metric::Metric;
use dpe_present::{render, Selection};
use dpe_sources::dataset::PrecipDataset;
use log::info;

pub async fn run_report(
    community: String,
    duration: Duration,
    metric: Metric,
    wrf_csv: Option<String>,
    acis_csv: Option<String>,
    chart_json: Option<String>,
) -> anyhow::Result<()> {
    // session config is checked before any data work
    let config = AppConfig::from_env()?;
    info!("session configured ({} secret bytes)", config.session_secret.len());

    let dataset = match (&wrf_csv, &acis_csv) {
        (Some(wrf_path), Some(acis_path)) => {
            info!("loading local data files...");
            let grid_body = std::fs::read_to_string(wrf_path)
                .with_context(|| format!("reading {}", wrf_path))?;
            let station_body = std::fs::read_to_string(acis_path)
                .with_context(|| format!("reading {}", acis_path))?;
            PrecipDataset::from_csv(&grid_body, &station_body)?
        }
        (None, None) => fetch::load_remote().await?,
        _ => anyhow::bail!("--wrf-csv and --acis-csv must be given together"),
    };

    let selection = Selection {
        community,
        duration,
        metric,
    };
    let view = render(&dataset, &selection)?;

    if let Some(path) = chart_json {
        let spec = serde_json::to_string_pretty(&view.chart)?;
        std::fs::write(&path, spec).with_context(|| format!("writing {}", path))?;
        info!("chart spec written to {}", path);
    }

    println!("{}", view.chart.title);
    println!();
    println!("{}", view.summary);
    println!();
    println!("{}", view.table.to_text());
    Ok(())
}
